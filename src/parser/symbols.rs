//! Scoped symbol tables.
//!
//! Each lexical scope owns one table mapping names to symbol entries.
//! The parser keeps the tables on a stack: entering a block pushes a
//! fresh table, leaving it pops and discards every binding the block
//! made. Lookup of a name walks the stack from the innermost scope
//! outward, so shadowing is resolved innermost-wins.

use std::collections::HashMap;

use crate::{
    types::table::{
        TYPEREF_BOOL, TYPEREF_F16, TYPEREF_F32, TYPEREF_F64, TYPEREF_F64X, TYPEREF_I16,
        TYPEREF_I32, TYPEREF_I64, TYPEREF_I8, TYPEREF_ISIZE, TYPEREF_TYPE, TYPEREF_U16,
        TYPEREF_U32, TYPEREF_U64, TYPEREF_U8, TYPEREF_USIZE, TYPEREF_VOID,
    },
    NodeRef, TypeRef,
};

/// One name binding. `node` is the declaring node, absent for builtins
/// and host-registered externals. `type_` is the type of the bound
/// value. For symbols whose `type_` is the bootstrap `type`, `payload`
/// holds the type the symbol denotes, so the name can be used in later
/// type annotations.
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry {
    pub node: Option<NodeRef>,
    pub type_: TypeRef,
    pub payload: Option<TypeRef>,
}

/// The bindings of a single scope.
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            entries: HashMap::new(),
        }
    }

    /// Inserts a binding. Returns false without touching the table when
    /// the name is already bound in this scope; shadowing happens across
    /// scopes, never within one.
    pub fn add(&mut self, name: &str, entry: SymbolEntry) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }

        self.entries.insert(String::from(name), entry);
        true
    }

    /// Looks a name up in this scope only. The parser performs the
    /// multi-scope walk itself.
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seeds the bootstrap names. Called once, on the root scope: every
    /// builtin type name bound as a `type`-typed symbol carrying the
    /// named type as payload, plus the literals `true`, `false`, and
    /// `null`.
    pub fn add_builtins(&mut self) {
        let builtin_types = [
            ("void", TYPEREF_VOID),
            ("bool", TYPEREF_BOOL),
            ("i8", TYPEREF_I8),
            ("i16", TYPEREF_I16),
            ("i32", TYPEREF_I32),
            ("i64", TYPEREF_I64),
            ("isize", TYPEREF_ISIZE),
            ("u8", TYPEREF_U8),
            ("u16", TYPEREF_U16),
            ("u32", TYPEREF_U32),
            ("u64", TYPEREF_U64),
            ("usize", TYPEREF_USIZE),
            ("f16", TYPEREF_F16),
            ("f32", TYPEREF_F32),
            ("f64", TYPEREF_F64),
            ("f64x", TYPEREF_F64X),
            ("type", TYPEREF_TYPE),
        ];

        for (name, payload) in builtin_types {
            self.add(
                name,
                SymbolEntry {
                    node: None,
                    type_: TYPEREF_TYPE,
                    payload: Some(payload),
                },
            );
        }

        let builtin_values = [
            ("true", TYPEREF_BOOL),
            ("false", TYPEREF_BOOL),
            ("null", TYPEREF_VOID),
        ];

        for (name, type_) in builtin_values {
            self.add(
                name,
                SymbolEntry {
                    node: None,
                    type_,
                    payload: None,
                },
            );
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
