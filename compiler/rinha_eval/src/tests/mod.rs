//! Evaluator tests.
//!
//! Unit tests for small helpers live next to their code; tests that run terms
//! through the interpreter live here.

mod eval_tests;

use rinha_ir::Term;

use crate::{buffer_handler, Environment, EvalResult, Interpreter};

/// Evaluate `term` in a fresh root scope, capturing `print` output.
pub(crate) fn run(term: &Term) -> (EvalResult, String) {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let result = interpreter.eval(&Environment::new(), term);
    (result, handler.get_output())
}
