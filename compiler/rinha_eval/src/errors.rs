//! Error types for evaluation.
//!
//! `EvalErrorKind` provides typed error categories. Factory functions (e.g.,
//! `division_by_zero()`) are the construction API — they populate both
//! `kind` and `message`.
//!
//! No failure is recoverable inside the evaluator: each one aborts the
//! current `eval` chain and reaches the caller unchanged, apart from the
//! term kind recorded on the way out.

use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// `Var` named something not bound in scope.
    UnboundVariable { name: String },
    /// An operand or condition had the wrong shape.
    TypeMismatch {
        operation: String,
        expected: &'static str,
        got: &'static str,
    },
    /// Argument count differs from the closure's parameter count.
    ArityMismatch { expected: usize, got: usize },
    /// `/` or `%` with a zero divisor.
    DivisionByZero,
    /// The callee of a `Call` was not a closure.
    NotCallable { got: &'static str },
    /// `First` / `Second` applied to something that is not a tuple.
    NotATuple { got: &'static str },
    /// Nested closure calls exceeded the configured limit.
    RecursionLimit { depth: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::TypeMismatch {
                operation,
                expected,
                got,
            } => write!(f, "type mismatch in {operation}: expected {expected}, got {got}"),
            Self::ArityMismatch { expected, got } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "expected {expected} {arg_word}, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotCallable { got } => write!(f, "{got} is not callable"),
            Self::NotATuple { got } => write!(f, "expected a tuple, got {got}"),
            Self::RecursionLimit { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
    /// Kind of the innermost term whose evaluation failed (e.g. `"Binary"`).
    pub term: Option<&'static str>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            term: None,
        }
    }

    /// Record the failing term kind, unless an inner term already did.
    #[must_use]
    pub fn in_term(mut self, term: &'static str) -> Self {
        if self.term.is_none() {
            self.term = Some(term);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Some(term) => write!(f, "{} (in {term})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Variable errors

/// Variable not bound in the current scope.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

// Type errors

/// Operand of the wrong shape for `operation`.
#[cold]
pub fn type_mismatch(operation: impl Into<String>, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        operation: operation.into(),
        expected,
        got: got.type_name(),
    })
}

/// Callee is not a closure.
#[cold]
pub fn not_callable(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        got: got.type_name(),
    })
}

/// Tuple projection on a non-tuple.
#[cold]
pub fn not_a_tuple(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotATuple {
        got: got.type_name(),
    })
}

// Call errors

/// Wrong number of arguments.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// Call depth limit reached.
#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}

// Arithmetic errors

/// Division or remainder by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matches_kind_display() {
        let err = unbound_variable("fib");
        assert_eq!(err.message, "unbound variable: fib");
        assert_eq!(err.message, err.kind.to_string());
    }

    #[test]
    fn type_mismatch_describes_operand() {
        let err = type_mismatch("`-`", "int", &Value::string("a"));
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                operation: "`-`".to_string(),
                expected: "int",
                got: "str",
            }
        );
        assert_eq!(err.to_string(), "type mismatch in `-`: expected int, got str");
    }

    #[test]
    fn arity_message_pluralizes() {
        assert_eq!(arity_mismatch(1, 2).message, "expected 1 argument, got 2");
        assert_eq!(arity_mismatch(2, 0).message, "expected 2 arguments, got 0");
    }

    #[test]
    fn in_term_keeps_innermost() {
        let err = division_by_zero().in_term("Binary").in_term("Let");
        assert_eq!(err.term, Some("Binary"));
        assert_eq!(err.to_string(), "division by zero (in Binary)");
    }

    #[test]
    fn not_callable_and_not_a_tuple() {
        assert_eq!(not_callable(&Value::int(3)).message, "int is not callable");
        assert_eq!(
            not_a_tuple(&Value::Bool(true)).message,
            "expected a tuple, got bool"
        );
        assert_eq!(
            recursion_limit_exceeded(64).message,
            "maximum recursion depth exceeded (limit: 64)"
        );
    }
}
