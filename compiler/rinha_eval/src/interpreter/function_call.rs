//! Function call evaluation methods for the Interpreter.

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::{Closure, EvalResult, Value};

impl Interpreter {
    /// Call a value with already-evaluated arguments.
    ///
    /// Entry point for host code; `Call` terms go through the same
    /// `apply_closure` after evaluating their arguments in the caller's scope.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Closure(closure) => self.apply_closure(closure, args),
            other => Err(not_callable(other)),
        }
    }

    /// Apply a closure.
    ///
    /// The arity check happens before any binding, so a failed call leaves no
    /// trace. The invocation scope is a snapshot of the captured scope taken
    /// now, with parameters bound over it; writes made by the body (its own
    /// `let`s) stay in that snapshot.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = closure.arity(), depth = self.call_depth))]
    pub(crate) fn apply_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(arity_mismatch(closure.arity(), args.len()));
        }
        self.check_recursion_limit()?;

        let call_env = closure.env.snapshot();
        for (param, arg) in closure.parameters.iter().zip(args) {
            call_env.define(param.as_str(), arg);
        }

        self.call_depth += 1;
        let result = self.eval(&call_env, &closure.body);
        self.call_depth -= 1;
        result
    }
}
