//! Type table for the front end.
//!
//! This module contains the append-only table that owns every type a
//! parse session mentions. It handles:
//!
//! - Builtin types seeded at fixed, well-known indices
//! - Interning of composite types (pointers, slices, arrays, functions)
//! - Equality, coercion, and cast rules between types
//! - Structural display of types for error messages

pub mod table;
