use crate::TypeRef;

pub const TYPE_OPT: u64 = 0x1;
pub const TYPE_MUT: u64 = 0x2;

pub const TYPEREF_VOID: TypeRef = TypeRef(0);
pub const TYPEREF_BOOL: TypeRef = TypeRef(1);
pub const TYPEREF_I8: TypeRef = TypeRef(2);
pub const TYPEREF_I16: TypeRef = TypeRef(3);
pub const TYPEREF_I32: TypeRef = TypeRef(4);
pub const TYPEREF_I64: TypeRef = TypeRef(5);
pub const TYPEREF_ISIZE: TypeRef = TypeRef(6);
pub const TYPEREF_U8: TypeRef = TypeRef(7);
pub const TYPEREF_U16: TypeRef = TypeRef(8);
pub const TYPEREF_U32: TypeRef = TypeRef(9);
pub const TYPEREF_U64: TypeRef = TypeRef(10);
pub const TYPEREF_USIZE: TypeRef = TypeRef(11);
pub const TYPEREF_F16: TypeRef = TypeRef(12);
pub const TYPEREF_F32: TypeRef = TypeRef(13);
pub const TYPEREF_F64: TypeRef = TypeRef(14);
pub const TYPEREF_F64X: TypeRef = TypeRef(15);
pub const TYPEREF_GENERIC_INT: TypeRef = TypeRef(16);
pub const TYPEREF_GENERIC_FLOAT: TypeRef = TypeRef(17);
pub const TYPEREF_TYPE: TypeRef = TypeRef(18);
pub const TYPEREF_STR: TypeRef = TypeRef(19);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Void,
    Bool,
    Type,

    Uint,  // data = bitsize, data 1 = usize, data 0 = generic
    Int,   // data = bitsize, data 1 = isize, data 0 = generic
    Float, // data = bitsize

    Array, // data = length, child = element
    Ptr,   // data = MUT | OPT, child = pointee
    Slice, // data = MUT | OPT, child = element

    Struct, // data = index into field lists
    Union,  // data = index into field lists
    Enum,   // child = underlying type

    Func, // data = index into signatures, child = return type
}

#[derive(Debug, Clone, Copy)]
pub struct Type {
    pub tag: TypeTag,
    pub data: u64,
    pub child: TypeRef,
}

#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub name: String,
    pub type_: Type,
}

#[derive(Debug, Clone)]
pub struct FuncSig {
    pub variadic: bool,
    pub ret_type: TypeRef,
    pub arg_types: Vec<TypeRef>,
}

/// Append-only table of every type one parse session mentions. Entries
/// are never deduplicated; equality is structural via `is_eq`, not by
/// reference identity (except for enums).
pub struct TypeTable {
    entries: Vec<TypeEntry>,
    signatures: Vec<FuncSig>,
    field_lists: Vec<Vec<TypeRef>>,
}

impl TypeTable {
    /// Creates a table seeded with the builtin types at their fixed
    /// `TYPEREF_*` indices.
    pub fn new() -> TypeTable {
        let mut table = TypeTable {
            entries: Vec::with_capacity(64),
            signatures: vec![],
            field_lists: vec![],
        };

        table.add("void", Type { tag: TypeTag::Void, data: 0, child: TYPEREF_VOID });
        table.add("bool", Type { tag: TypeTag::Bool, data: 0, child: TYPEREF_VOID });

        table.add("i8", Type { tag: TypeTag::Int, data: 8, child: TYPEREF_VOID });
        table.add("i16", Type { tag: TypeTag::Int, data: 16, child: TYPEREF_VOID });
        table.add("i32", Type { tag: TypeTag::Int, data: 32, child: TYPEREF_VOID });
        table.add("i64", Type { tag: TypeTag::Int, data: 64, child: TYPEREF_VOID });
        table.add("isize", Type { tag: TypeTag::Int, data: 1, child: TYPEREF_VOID });

        table.add("u8", Type { tag: TypeTag::Uint, data: 8, child: TYPEREF_VOID });
        table.add("u16", Type { tag: TypeTag::Uint, data: 16, child: TYPEREF_VOID });
        table.add("u32", Type { tag: TypeTag::Uint, data: 32, child: TYPEREF_VOID });
        table.add("u64", Type { tag: TypeTag::Uint, data: 64, child: TYPEREF_VOID });
        table.add("usize", Type { tag: TypeTag::Uint, data: 1, child: TYPEREF_VOID });

        table.add("f16", Type { tag: TypeTag::Float, data: 16, child: TYPEREF_VOID });
        table.add("f32", Type { tag: TypeTag::Float, data: 32, child: TYPEREF_VOID });
        table.add("f64", Type { tag: TypeTag::Float, data: 64, child: TYPEREF_VOID });
        table.add("f64x", Type { tag: TypeTag::Float, data: 80, child: TYPEREF_VOID });

        table.add("'gint", Type { tag: TypeTag::Int, data: 0, child: TYPEREF_VOID });
        table.add("'gfloat", Type { tag: TypeTag::Float, data: 0, child: TYPEREF_VOID });

        table.add("type", Type { tag: TypeTag::Type, data: 0, child: TYPEREF_VOID });
        table.add("'str", Type { tag: TypeTag::Slice, data: 0, child: TYPEREF_U8 });

        table
    }

    pub fn add(&mut self, name: &str, type_: Type) -> TypeRef {
        let type_ref = TypeRef(self.entries.len() as u32);
        self.entries.push(TypeEntry {
            name: String::from(name),
            type_,
        });

        type_ref
    }

    pub fn get(&self, type_ref: TypeRef) -> &TypeEntry {
        &self.entries[type_ref.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interns a function type. The signature lives in a side table
    /// addressed by the entry's data word.
    pub fn add_func(&mut self, ret_type: TypeRef, arg_types: Vec<TypeRef>, variadic: bool) -> TypeRef {
        let data = self.signatures.len() as u64;
        self.signatures.push(FuncSig {
            variadic,
            ret_type,
            arg_types,
        });

        self.add("", Type { tag: TypeTag::Func, data, child: ret_type })
    }

    /// Interns a struct or union type with the given field types.
    pub fn add_record(&mut self, tag: TypeTag, fields: Vec<TypeRef>) -> TypeRef {
        debug_assert!(matches!(tag, TypeTag::Struct | TypeTag::Union));

        let data = self.field_lists.len() as u64;
        self.field_lists.push(fields);

        self.add("", Type { tag, data, child: TYPEREF_VOID })
    }

    pub fn signature(&self, type_ref: TypeRef) -> Option<&FuncSig> {
        let type_ = self.get(type_ref).type_;

        match type_.tag {
            TypeTag::Func => self.signatures.get(type_.data as usize),
            _ => None,
        }
    }

    pub fn fields(&self, type_ref: TypeRef) -> Option<&[TypeRef]> {
        let type_ = self.get(type_ref).type_;

        match type_.tag {
            TypeTag::Struct | TypeTag::Union => self
                .field_lists
                .get(type_.data as usize)
                .map(|fields| fields.as_slice()),
            _ => None,
        }
    }

    /// Structural equality. Enums compare by reference identity, so two
    /// enums over the same underlying type stay distinct.
    pub fn is_eq(&self, from: TypeRef, to: TypeRef) -> bool {
        let from_type = self.get(from).type_;
        let to_type = self.get(to).type_;

        if from_type.tag != to_type.tag {
            return false;
        }

        match from_type.tag {
            TypeTag::Array | TypeTag::Ptr | TypeTag::Slice => {
                self.is_eq(from_type.child, to_type.child) && from_type.data == to_type.data
            }

            TypeTag::Uint | TypeTag::Int | TypeTag::Float | TypeTag::Bool => {
                from_type.data == to_type.data
            }

            TypeTag::Void | TypeTag::Type => true,

            TypeTag::Enum => from == to,

            TypeTag::Union | TypeTag::Struct => {
                let from_fields = &self.field_lists[from_type.data as usize];
                let to_fields = &self.field_lists[to_type.data as usize];

                from_fields.len() == to_fields.len()
                    && from_fields
                        .iter()
                        .zip(to_fields.iter())
                        .all(|(a, b)| self.is_eq(*a, *b))
            }

            TypeTag::Func => {
                let from_sig = &self.signatures[from_type.data as usize];
                let to_sig = &self.signatures[to_type.data as usize];

                from_sig.arg_types.len() == to_sig.arg_types.len()
                    && from_sig.variadic == to_sig.variadic
                    && self.is_eq(from_sig.ret_type, to_sig.ret_type)
                    && from_sig
                        .arg_types
                        .iter()
                        .zip(to_sig.arg_types.iter())
                        .all(|(a, b)| self.is_eq(*a, *b))
            }
        }
    }

    /// Whether a value of `from` silently becomes a `to`. Generic
    /// literal types coerce to any width of their family; pointers drop
    /// mutability and gain optionality but never the reverse.
    pub fn can_coerce(&self, from: TypeRef, to: TypeRef) -> bool {
        let from_type = self.get(from).type_;
        let to_type = self.get(to).type_;

        match to_type.tag {
            TypeTag::Void => from_type.tag == TypeTag::Void,
            TypeTag::Bool => {
                (from_type.tag == TypeTag::Void && to_type.data & TYPE_OPT != 0)
                    || (from_type.tag == TypeTag::Bool
                        && (to_type.data & TYPE_OPT != 0 || from_type.data & TYPE_OPT == 0))
            }
            TypeTag::Type => from_type.tag == TypeTag::Type,

            TypeTag::Uint => {
                if from_type.tag == TypeTag::Int && from_type.data == 0 {
                    return true;
                }
                from_type.tag == TypeTag::Uint && from_type.data == to_type.data
            }
            TypeTag::Int => {
                from_type.tag == TypeTag::Int
                    && (from_type.data == 0 || from_type.data == to_type.data)
            }
            TypeTag::Float => {
                from_type.tag == TypeTag::Float
                    && (from_type.data == 0 || from_type.data == to_type.data)
            }

            TypeTag::Enum | TypeTag::Union | TypeTag::Struct | TypeTag::Array | TypeTag::Func => {
                self.is_eq(from, to)
            }

            TypeTag::Ptr | TypeTag::Slice => {
                (from_type.tag == TypeTag::Void && to_type.data & TYPE_OPT != 0)
                    || ((from_type.tag == TypeTag::Ptr || from_type.tag == to_type.tag)
                        && self.is_eq(from_type.child, to_type.child)
                        && (to_type.data & TYPE_OPT != 0 || from_type.data & TYPE_OPT == 0)
                        && (to_type.data & TYPE_MUT == 0 || from_type.data & TYPE_MUT != 0))
            }
        }
    }

    /// Whether an explicit cast from `from` to `to` is allowed. Wider
    /// than coercion: scalar families cast freely among each other.
    pub fn can_cast(&self, from: TypeRef, to: TypeRef) -> bool {
        let from_type = self.get(from).type_;
        let to_type = self.get(to).type_;

        match to_type.tag {
            TypeTag::Void => from_type.tag == TypeTag::Void,
            TypeTag::Bool => {
                (from_type.tag == TypeTag::Void && to_type.data & TYPE_OPT != 0)
                    || from_type.tag == TypeTag::Bool
            }
            TypeTag::Type => from_type.tag == TypeTag::Type,

            TypeTag::Float | TypeTag::Uint | TypeTag::Int => matches!(
                from_type.tag,
                TypeTag::Int | TypeTag::Bool | TypeTag::Uint | TypeTag::Enum | TypeTag::Float
            ),

            TypeTag::Enum => matches!(
                from_type.tag,
                TypeTag::Int | TypeTag::Bool | TypeTag::Uint | TypeTag::Enum
            ),

            TypeTag::Union | TypeTag::Struct | TypeTag::Array => self.is_eq(from, to),

            TypeTag::Slice => {
                (from_type.tag == TypeTag::Void && to_type.data & TYPE_OPT != 0)
                    || ((from_type.tag == TypeTag::Ptr || from_type.tag == TypeTag::Slice)
                        && self.is_eq(from_type.child, to_type.child))
            }
            TypeTag::Ptr => {
                (from_type.tag == TypeTag::Void && to_type.data & TYPE_OPT != 0)
                    || from_type.tag == TypeTag::Ptr
            }

            TypeTag::Func => self.is_eq(from, to),
        }
    }

    /// Whether values of this type can exist at runtime. `type` itself
    /// and the generic integer cannot; they only describe other values.
    pub fn is_runtime(&self, type_ref: TypeRef) -> bool {
        let type_ = self.get(type_ref).type_;

        if type_.tag == TypeTag::Type {
            return false;
        }
        if type_.tag == TypeTag::Int && type_.data == 0 {
            return false;
        }

        true
    }

    /// Renders a type for error messages. Named entries use their name;
    /// composites are rendered structurally.
    pub fn display(&self, type_ref: TypeRef) -> String {
        let entry = self.get(type_ref);

        if !entry.name.is_empty() {
            return entry.name.clone();
        }

        let type_ = entry.type_;
        match type_.tag {
            TypeTag::Ptr => {
                let opt = if type_.data & TYPE_OPT != 0 { "?" } else { "" };
                let mutable = if type_.data & TYPE_MUT != 0 { "mut " } else { "" };
                format!("{}*{}{}", opt, mutable, self.display(type_.child))
            }
            TypeTag::Slice => {
                let opt = if type_.data & TYPE_OPT != 0 { "?" } else { "" };
                let mutable = if type_.data & TYPE_MUT != 0 { "mut" } else { "" };
                format!("{}[{}]{}", opt, mutable, self.display(type_.child))
            }
            TypeTag::Array => format!("[{}]{}", type_.data, self.display(type_.child)),
            TypeTag::Func => match self.signature(type_ref) {
                Some(sig) => {
                    let mut args = sig
                        .arg_types
                        .iter()
                        .map(|arg| self.display(*arg))
                        .collect::<Vec<String>>();
                    if sig.variadic {
                        args.push(String::from(".."));
                    }
                    format!("func({}) {}", args.join(", "), self.display(sig.ret_type))
                }
                None => String::from("func"),
            },
            TypeTag::Struct | TypeTag::Union => {
                let keyword = if type_.tag == TypeTag::Struct {
                    "struct"
                } else {
                    "union"
                };
                match self.fields(type_ref) {
                    Some(fields) => {
                        let rendered = fields
                            .iter()
                            .map(|field| self.display(*field))
                            .collect::<Vec<String>>()
                            .join(", ");
                        format!("{} {{ {} }}", keyword, rendered)
                    }
                    None => String::from(keyword),
                }
            }
            TypeTag::Enum => format!("enum {}", self.display(type_.child)),
            _ => format!("{:?}", type_.tag),
        }
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        TypeTable::new()
    }
}
