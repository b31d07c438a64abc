use crate::object::Object;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One evaluation scope: its own bindings plus the scope it is nested in.
///
/// For a function call the enclosing scope is the function's *captured*
/// environment, never the caller's.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Object>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Shorthand for a fresh top‑level scope behind the usual shared handle.
    pub fn shared() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::new()))
    }

    /// Bind `name` in this scope. An existing binding in the same scope is
    /// overwritten; one in an enclosing scope is shadowed.
    pub fn define(&mut self, name: &str, value: Object) {
        debug!("Defining '{}' = {}", name, value);

        self.values.insert(name.to_string(), value);
    }

    /// Resolve `name`, walking outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.values.get(name) {
            Some(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            None
        }
    }
}
