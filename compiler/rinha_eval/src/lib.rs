//! Rinha Eval - tree-walking evaluator for Rinha programs.
//!
//! Consumes a `rinha_ir::Term` tree and produces runtime values.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a shared, mutable-in-place scope. `let` writes into the
//!   current scope; closures keep a handle to it, so a function bound by `let`
//!   sees its own name when it is later called.
//! - `evaluate_binary`: direct enum-based binary operator dispatch with the
//!   language's coercion rules
//! - `Interpreter`: per-term-kind dispatch, closure calls, `print` output
//!
//! Every failure is an `EvalError` propagated to the caller; nothing is
//! replaced by a default value.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Closure, Heap, Value};

pub use rinha_ir::{BinaryOp, File, Identifier, Term};
