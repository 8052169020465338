//! Term nodes.
//!
//! A `Term` owns its children through `Box`; there is no arena because the
//! evaluator never rewrites subtrees. `Function` is the exception: its
//! parameters and body sit behind `Rc` so a closure can share them with the
//! tree instead of copying the body every time the literal is evaluated.

use serde::Deserialize;
use std::rc::Rc;

use crate::BinaryOp;

/// A binding or parameter name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Identifier {
    pub text: String,
}

impl Identifier {
    pub fn new(text: impl Into<String>) -> Self {
        Identifier { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A node of the input AST.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind")]
pub enum Term {
    Int {
        value: i64,
    },
    Str {
        value: String,
    },
    Bool {
        value: bool,
    },
    Binary {
        lhs: Box<Term>,
        op: BinaryOp,
        rhs: Box<Term>,
    },
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
    },
    Tuple {
        first: Box<Term>,
        second: Box<Term>,
    },
    First {
        value: Box<Term>,
    },
    Second {
        value: Box<Term>,
    },
    Print {
        value: Box<Term>,
    },
    Call {
        callee: Box<Term>,
        arguments: Vec<Term>,
    },
    Let {
        name: Identifier,
        value: Box<Term>,
        next: Box<Term>,
    },
    Var {
        text: String,
    },
    Function {
        parameters: Rc<[Identifier]>,
        /// Function body.
        value: Rc<Term>,
    },
}

// Constructors

impl Term {
    pub fn int(value: i64) -> Self {
        Term::Int { value }
    }

    pub fn str(value: impl Into<String>) -> Self {
        Term::Str {
            value: value.into(),
        }
    }

    pub fn bool(value: bool) -> Self {
        Term::Bool { value }
    }

    pub fn var(text: impl Into<String>) -> Self {
        Term::Var { text: text.into() }
    }

    pub fn binary(lhs: Term, op: BinaryOp, rhs: Term) -> Self {
        Term::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn if_(condition: Term, then: Term, otherwise: Term) -> Self {
        Term::If {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn tuple(first: Term, second: Term) -> Self {
        Term::Tuple {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn first(value: Term) -> Self {
        Term::First {
            value: Box::new(value),
        }
    }

    pub fn second(value: Term) -> Self {
        Term::Second {
            value: Box::new(value),
        }
    }

    pub fn print(value: Term) -> Self {
        Term::Print {
            value: Box::new(value),
        }
    }

    pub fn call(callee: Term, arguments: Vec<Term>) -> Self {
        Term::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn let_(name: impl Into<String>, value: Term, next: Term) -> Self {
        Term::Let {
            name: Identifier::new(name),
            value: Box::new(value),
            next: Box::new(next),
        }
    }

    pub fn function<S: Into<String>>(parameters: impl IntoIterator<Item = S>, body: Term) -> Self {
        Term::Function {
            parameters: parameters.into_iter().map(Identifier::new).collect(),
            value: Rc::new(body),
        }
    }
}

impl Term {
    /// Decode a single term from its JSON form.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// The `"kind"` tag of this term.
    pub const fn kind(&self) -> &'static str {
        match self {
            Term::Int { .. } => "Int",
            Term::Str { .. } => "Str",
            Term::Bool { .. } => "Bool",
            Term::Binary { .. } => "Binary",
            Term::If { .. } => "If",
            Term::Tuple { .. } => "Tuple",
            Term::First { .. } => "First",
            Term::Second { .. } => "Second",
            Term::Print { .. } => "Print",
            Term::Call { .. } => "Call",
            Term::Let { .. } => "Let",
            Term::Var { .. } => "Var",
            Term::Function { .. } => "Function",
        }
    }
}
