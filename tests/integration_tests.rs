//! Integration tests for the flint front end.
//!
//! These tests drive the public API end to end: source text goes in, and a
//! typed syntax tree plus populated symbol and type tables come out, or a
//! positioned diagnostic when the source is rejected. Everything here goes
//! through `parse`/`parse_program` the way an embedding host would.

use flintc::{
    parser::parser::{parse, Parser},
    types::table::{TypeTag, TYPE_MUT, TYPE_OPT, TYPEREF_I32, TYPEREF_STR, TYPEREF_VOID},
};

fn binding_display(parser: &Parser, name: &str) -> String {
    let entry = *parser.resolve(name).unwrap().1;
    parser.types().display(entry.type_)
}

#[test]
fn test_program_with_control_flow() {
    let source = "
        const max i32 = 100;
        let count i32 = 0;
        let total = &count;

        if count < max {
            count = count + 1;
        } else if count == max {
            count = 0;
        } else {
            count = max;
        }
    ";

    let (parser, result) = parse(source);

    assert!(result.is_ok());
    assert_eq!(binding_display(&parser, "count"), "i32");
    assert_eq!(binding_display(&parser, "total"), "*mut i32");
}

#[test]
fn test_annotated_then_inferred_binding() {
    let (parser, result) = parse("let x i32 = 5; let y = x;");

    assert!(result.is_ok());
    assert_eq!(binding_display(&parser, "x"), "i32");
    assert_eq!(binding_display(&parser, "y"), "i32");
}

#[test]
fn test_no_narrowing_between_widths() {
    let (_, result) = parse("let x i64 = 5;\nlet y i32 = x;");

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_pointer_type_expressions() {
    let (parser, result) = parse("let p *mut i32; let q ?*mut i32;");

    assert!(result.is_ok());

    let p = *parser.resolve("p").unwrap().1;
    let p_type = parser.types().get(p.type_).type_;
    assert_eq!(p_type.tag, TypeTag::Ptr);
    assert_eq!(p_type.data, TYPE_MUT);
    assert_eq!(p_type.child, TYPEREF_I32);

    let q = *parser.resolve("q").unwrap().1;
    let q_type = parser.types().get(q.type_).type_;
    assert_eq!(q_type.tag, TypeTag::Ptr);
    assert_eq!(q_type.data, TYPE_MUT | TYPE_OPT);
    assert_eq!(q_type.child, TYPEREF_I32);
}

#[test]
fn test_call_arity_reported_before_argument_types() {
    let mut parser = Parser::new("f(1, 2.5);");
    let f_type = parser
        .types_mut()
        .add_func(TYPEREF_VOID, vec![TYPEREF_I32], false);
    parser.declare("f", f_type);

    // The spare argument would also fail the type check; arity wins.
    let error = parser.parse_program().unwrap_err();
    assert_eq!(error.get_error_name(), "TooManyArguments");
}

#[test]
fn test_duplicate_binding_in_one_scope() {
    let (_, result) = parse("let x i32; let x i32;");

    assert_eq!(
        result.unwrap_err().get_error_name(),
        "VariableAlreadyDeclared"
    );
}

#[test]
fn test_shadowing_in_nested_block() {
    let (_, result) = parse("let x i32; { let x i32; }");

    assert!(result.is_ok());
}

#[test]
fn test_first_error_wins() {
    let (parser, result) = parse("let a = ;\nlet b = 1;");

    let error = result.unwrap_err();
    assert_eq!(error.get_line(), 1);
    assert!(parser.get_error().is_some());
}

#[test]
fn test_comments_are_skipped() {
    let source = "
        // leading comment
        let a = 1; // trailing comment
        /* block
           comment */
        let b = a;
    ";

    let (parser, result) = parse(source);

    assert_eq!(result.unwrap().len(), 2);
    assert_eq!(binding_display(&parser, "b"), "'gint");
}

#[test]
fn test_empty_source() {
    let (_, result) = parse("");

    assert_eq!(result.unwrap(), vec![]);
}

#[test]
fn test_error_line_numbers() {
    let source = "let a = 1;\nlet b = 2;\nlet c = undeclared;\n";

    let error = parse(source).1.unwrap_err();

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_seeded_externals() {
    let mut parser = Parser::new("print(\"result:\", add(1, 2));\nlet total = add(3, 4) + 10;");

    let add_type = parser
        .types_mut()
        .add_func(TYPEREF_I32, vec![TYPEREF_I32, TYPEREF_I32], false);
    parser.declare("add", add_type);

    let print_type = parser
        .types_mut()
        .add_func(TYPEREF_VOID, vec![TYPEREF_STR], true);
    parser.declare("print", print_type);

    assert!(parser.parse_program().is_ok());
    assert_eq!(binding_display(&parser, "total"), "i32");
}

#[test]
fn test_tree_capabilities() {
    let (parser, result) = parse("let x = 1 + 2;");

    let roots = result.unwrap();
    assert_eq!(roots.len(), 1);

    let root = parser.node(roots[0]);
    assert_eq!(root.name(), "let");
    assert!(root.type_of(&parser).is_none());

    let children = root.children().unwrap();
    assert_eq!(children.len(), 1);

    let value = parser.node(children[0]);
    assert_eq!(value.name(), "binary");
    let value_type = value.type_of(&parser).unwrap();
    assert_eq!(parser.types().display(value_type), "'gint");
    assert_eq!(value.children().unwrap().len(), 2);
}

#[test]
fn test_type_alias_in_later_annotation() {
    let (parser, result) = parse("let Byte = u8; let b Byte = 255;");

    assert!(result.is_ok());
    assert_eq!(binding_display(&parser, "b"), "u8");
}

#[test]
fn test_type_heavy_program() {
    let source = "
        let Cell = *mut u8;
        let grid [64]u8;
        let view []u8;
        let cursor Cell;
        let scratch [mut]u8;
    ";

    let (parser, result) = parse(source);

    assert!(result.is_ok());
    assert_eq!(binding_display(&parser, "grid"), "[64]u8");
    assert_eq!(binding_display(&parser, "cursor"), "*mut u8");
    assert_eq!(binding_display(&parser, "view"), "[]u8");
    assert_eq!(binding_display(&parser, "scratch"), "[mut]u8");
}
