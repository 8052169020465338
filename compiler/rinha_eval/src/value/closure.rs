//! Closure values.

use std::fmt;
use std::rc::Rc;

use rinha_ir::{Identifier, Term};

use crate::Environment;

/// Function value (closure).
///
/// # Live Captures
///
/// `env` is a handle to the scope the `Function` term was evaluated in, not a
/// copy of it. Bindings added to that scope afterwards (the `let` that names
/// the function, for instance) are visible when the closure is called. The
/// copy happens per call, in `Interpreter::apply_closure`.
///
/// A closure stored in the scope it captures forms an `Rc` cycle; such scopes
/// live until the process exits.
#[derive(Clone)]
pub struct Closure {
    /// Parameter names, in call order.
    pub parameters: Rc<[Identifier]>,
    /// Body term, shared with the `Function` node that produced it.
    pub body: Rc<Term>,
    /// Defining scope.
    pub env: Environment,
}

impl Closure {
    pub fn new(parameters: Rc<[Identifier]>, body: Rc<Term>, env: Environment) -> Self {
        Closure {
            parameters,
            body,
            env,
        }
    }

    /// Number of parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Identity comparison: same body and same captured scope.
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.env.ptr_eq(&other.env)
    }
}

/// Rendered form: an opaque token built from the body and captured scope
/// addresses, so it is equal for two values exactly when `ptr_eq` holds.
impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<#closure@{:p}:{:p}>", Rc::as_ptr(&self.body), self.env.addr())
    }
}

/// Prints parameters only; the captured scope can contain this closure.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters.iter().map(Identifier::as_str).collect();
        write!(f, "Closure({})", names.join(", "))
    }
}
