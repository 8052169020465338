//! Runtime values for the Rinha interpreter.
//!
//! # Heap Enforcement
//!
//! Heap-backed payloads go through factory methods on `Value`. `Heap<T>`
//! has a crate-private constructor, so other crates build values with
//! `Value::int`, `Value::string`, `Value::tuple` and never allocate the
//! shared storage themselves.
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let t = Value::tuple(Value::int(1), Value::Bool(true)); // OK
//! let s = Value::Str(Heap::new(...));              // ERROR outside this crate
//! ```
//!
//! # Rendering
//!
//! `Display` is the language's `render`: it is what `print` writes and what
//! `==` / `!=` compare.

mod closure;
mod heap;

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

pub use closure::Closure;
pub use heap::Heap;

/// Runtime value in the Rinha interpreter.
#[derive(Clone)]
pub enum Value {
    /// Arbitrary-precision integer.
    Int(Heap<BigInt>),
    /// String value.
    Str(Heap<String>),
    /// Boolean value.
    Bool(bool),
    /// Pair of values.
    Tuple(Heap<(Value, Value)>),
    /// Function value with its captured environment.
    Closure(Closure),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(Heap::new(n.into()))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Heap::new((first, second)))
    }

    /// Get the type name of this value, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) => "closure",
        }
    }

    /// Borrow the integer payload, if this is an integer.
    #[inline]
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(&**n),
            _ => None,
        }
    }

    /// Borrow the string payload, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the boolean payload, if this is a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Truthiness used by `&&` and `||`.
    ///
    /// Returns `None` for tuples and closures, which have no boolean reading.
    pub fn is_truthy(&self) -> Option<bool> {
        match self {
            Value::Int(n) => Some(!n.is_zero()),
            Value::Str(s) => Some(!s.is_empty()),
            Value::Bool(b) => Some(*b),
            Value::Tuple(_) | Value::Closure(_) => None,
        }
    }

    /// The textual form `print` emits.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Compare two values by rendered form, as `==` does.
    ///
    /// Same-variant scalars compare directly; everything else falls back to
    /// comparing `render()` output, so `1 == "1"` holds.
    pub fn render_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => self.render() == other.render(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", &**n),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Tuple(pair) => {
                let (first, second) = &**pair;
                write!(f, "({first}, {second})")
            }
            Value::Closure(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({})", &**n),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Tuple(pair) => {
                let (first, second) = &**pair;
                write!(f, "Tuple({first:?}, {second:?})")
            }
            Value::Closure(c) => write!(f, "{c:?}"),
        }
    }
}

/// Structural equality for host code and tests.
///
/// Closures are equal only to themselves. Language-level `==` uses
/// [`Value::render_eq`] instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(Heap::new(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}
