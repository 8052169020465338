//! Tree-walking interpreter for Rinha.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`], which dispatches on the
//! term kind in `term_eval.rs`. Closure application lives in
//! `function_call.rs` and is shared by `Call` terms and host calls through
//! [`Interpreter::call`].
//!
//! # Scopes
//!
//! `eval` takes the current [`Environment`] by reference. `Let` writes into
//! it; a call builds a fresh environment from a snapshot of the closure's
//! captured one and evaluates the body there. No other term creates scopes.

mod builder;
mod function_call;
mod term_eval;

pub use builder::InterpreterBuilder;

use rinha_ir::{File, Term};
use rinha_stack::ensure_sufficient_stack;

use crate::errors::recursion_limit_exceeded;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, EvalResult};

/// Tree-walking interpreter for Rinha terms.
pub struct Interpreter {
    /// Destination of `print` output.
    pub(crate) print_handler: SharedPrintHandler,
    /// Maximum number of nested closure calls, if limited.
    pub(crate) max_call_depth: Option<usize>,
    /// Closure calls currently being evaluated.
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Create a new interpreter printing to stdout, with no call depth limit.
    ///
    /// For more configuration options, use [`Interpreter::builder`].
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Create an interpreter builder for more configuration options.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The handler `print` writes to.
    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Closure calls currently on the evaluation stack.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate `term` in `env`.
    ///
    /// Errors carry the kind of the innermost term that failed.
    pub fn eval(&mut self, env: &Environment, term: &Term) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_term(env, term)).map_err(|e| e.in_term(term.kind()))
    }

    /// Evaluate a whole program in a fresh root environment.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
    pub fn run_file(&mut self, file: &File) -> EvalResult {
        let root = Environment::new();
        self.eval(&root, &file.expression)
    }

    /// Check the configured call depth limit before entering another call.
    #[inline]
    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if let Some(max_depth) = self.max_call_depth {
            if self.call_depth >= max_depth {
                return Err(recursion_limit_exceeded(max_depth));
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `term` in `env` with a default interpreter (stdout, unlimited depth).
pub fn evaluate(env: &Environment, term: &Term) -> EvalResult {
    Interpreter::new().eval(env, term)
}
