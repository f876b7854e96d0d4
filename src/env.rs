use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ahash::RandomState;

use crate::object::Object;

/// A frame of name bindings with an optional link to the enclosing scope.
/// Function objects keep an `Rc` to their defining environment, so a frame
/// lives at least as long as every closure over it.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object, RandomState>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// A child scope: lookups fall through to `outer`, writes stay local.
    pub fn with(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::default(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            Some(value.clone())
        } else if let Some(outer) = &self.outer {
            outer.borrow().get(name)
        } else {
            None
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}
