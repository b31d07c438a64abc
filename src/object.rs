use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

/// Runtime type tag, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    Function,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::Function => "FUNCTION",
        })
    }
}

/// A value produced by evaluation. `Boolean` and `Null` are plain variants,
/// so equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    Function(Rc<Function>),
}

/// A closure: parameters and body plus the scope the literal was evaluated in.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

impl Object {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null => ObjectType::Null,
            Object::Function(_) => ObjectType::Function,
        }
    }

    /// Everything except `false` and `null` satisfies a conditional.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    /// Two function values are equal only if they are the same closure.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();

        write!(f, "fn({}) {{ {} }}", params.join(", "), self.body)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => {
                let mut buf: itoa::Buffer = itoa::Buffer::new();
                f.write_str(buf.format(*n))
            }

            Object::Boolean(b) => write!(f, "{}", b),

            Object::Null => f.write_str("null"),

            Object::Function(function) => write!(f, "{}", function),
        }
    }
}
