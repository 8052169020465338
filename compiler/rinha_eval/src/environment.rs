//! Environment for variable scoping in the interpreter.
//!
//! An `Environment` is a handle to one shared, mutable scope. Cloning the
//! handle does not copy bindings: a `let` writes into the scope every clone
//! points at, which is how a closure created before the `let` finishes can
//! still resolve the name it is being bound to.
//!
//! The only copy is [`Environment::snapshot`], taken at call time to build
//! the invocation scope.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// Shared, interior-mutable cell holding one scope.
///
/// Clones alias the same cell. `Rc`, not `Arc`: values never leave the
/// evaluating thread.
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles alias one cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the cell; stable while any handle is alive.
    #[inline]
    pub fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl<T> Clone for LocalScope<T> {
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// Variable bindings of one scope.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
        }
    }

    /// Insert or overwrite a binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Shared handle to a scope.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Bind `name` in this scope, overwriting any previous binding.
    ///
    /// Takes `&self`: the write is visible through every clone of this handle,
    /// including the ones held by closures.
    #[inline]
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.scope.borrow().contains(name)
    }

    /// Number of bindings currently in scope.
    pub fn len(&self) -> usize {
        self.scope.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scope.borrow().is_empty()
    }

    /// A new, independent environment holding a copy of the current bindings.
    ///
    /// Later writes to either environment are not seen by the other.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        let scope = self.scope.borrow().clone();
        Environment {
            scope: LocalScope::new(scope),
        }
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Address identifying this scope, shared by every clone of the handle.
    #[inline]
    pub fn addr(&self) -> *const () {
        self.scope.addr()
    }
}

/// Lists names only; values can be closures that capture this scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment").field("names", &names).finish()
    }
}
