use std::{env, fs::read_to_string, process::exit, time::Instant};

use flintc::{
    display_error,
    parser::parser::{parse, Parser},
    NodeRef,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path = None;
    let mut graph = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--dot" => graph = true,
            path => file_path = Some(path),
        }
    }

    let file_path = file_path.expect("Usage: flintc <file> [--dot]");

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let (parser, result) = parse(&file_contents);

    let roots = match result {
        Ok(roots) => roots,
        Err(error) => {
            display_error(error, &file_contents, file_name);
            exit(1);
        }
    };

    eprintln!("Parsed in {:?}", start.elapsed());

    if graph {
        print_graph(&parser, &roots);
    } else {
        for root in &roots {
            print_node(&parser, *root, 0);
        }
    }
}

fn print_node(parser: &Parser, node_ref: NodeRef, indent: usize) {
    let node = parser.node(node_ref);
    let token = parser.token(node.token());

    print!("{}{} `{}`", "  ".repeat(indent), node.name(), token.value);

    if let Some(type_) = node.type_of(parser) {
        print!(" -> {}", parser.types().display(type_));
    }

    println!();

    if let Some(children) = node.children() {
        for child in children {
            print_node(parser, child, indent + 1);
        }
    }
}

fn print_graph(parser: &Parser, roots: &[NodeRef]) {
    println!("digraph {{");
    for root in roots {
        graph_node(parser, *root);
    }
    println!("}}");
}

fn graph_node(parser: &Parser, node_ref: NodeRef) {
    let node = parser.node(node_ref);
    let token = parser.token(node.token());

    let mut label = format!("<B>{} [{}]</B>", node.name(), node_ref.0);
    label.push_str(&format!("<BR/>Token: {}", escape_label(token.value)));

    if let Some(type_) = node.type_of(parser) {
        let display = parser.types().display(type_);
        label.push_str(&format!("<BR/>Type: {}", escape_label(&display)));
    }

    println!("{} [shape=\"rectangle\", label=<{}>]", node_ref.0, label);

    if let Some(children) = node.children() {
        for child in children {
            println!("{} -> {}", node_ref.0, child.0);
            graph_node(parser, child);
        }
    }
}

// Labels are HTML-like, so the operator tokens need entity escapes.
fn escape_label(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
