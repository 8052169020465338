//! Rinha IR - the term tree consumed by the evaluator.
//!
//! This crate contains:
//! - `Term`: the tagged AST node, one variant per term kind
//! - `BinaryOp`: the closed set of binary operators
//! - `Identifier`: parameter and binding names
//! - `File`: the root document produced by external parsers
//!
//! # Input Format
//!
//! Terms arrive as JSON records tagged by a `"kind"` field, e.g.
//!
//! ```json
//! { "kind": "Binary", "op": "Add",
//!   "lhs": { "kind": "Int", "value": 1 },
//!   "rhs": { "kind": "Str", "value": "x" } }
//! ```
//!
//! Fields the evaluator does not use (such as `location`) are ignored.
//! Trees are immutable once decoded.

mod file;
mod operators;
mod term;

pub use file::File;
pub use operators::BinaryOp;
pub use term::{Identifier, Term};
