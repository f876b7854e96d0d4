use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use ahash::RandomState;

use crate::ast::{Block, Ident};
use crate::env::Environment;

/// The map behind `Object::Hash`. Keys are restricted to the hashable
/// value types via `HashKey`.
pub type HashPairs = HashMap<HashKey, Object, RandomState>;

pub type BuiltinFn = fn(&[Object]) -> Object;

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

/// Runtime values. `Return` and `Error` are control-flow markers threaded
/// through ordinary returns, not user-visible types; the evaluator checks
/// for them at every composite step.
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Str(Rc<String>),
    Null,
    Return(Box<Object>),
    Error(String),
    Function(Rc<Function>),
    Builtin(Builtin),
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashPairs>),
}

impl Object {
    /// The type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
        }
    }

    /// Human-readable rendering of the value.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub(crate) fn error(message: String) -> Object {
        Object::Error(message)
    }

    /// The hash-map key for this value, or `None` when the type can't be
    /// used as one.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::Str(value) => Some(HashKey::Str(value.as_ref().clone())),
            _ => None,
        }
    }
}

// Functions compare by identity, everything else by value.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(lhs), Object::Integer(rhs)) => lhs == rhs,
            (Object::Boolean(lhs), Object::Boolean(rhs)) => lhs == rhs,
            (Object::Str(lhs), Object::Str(rhs)) => lhs == rhs,
            (Object::Null, Object::Null) => true,
            (Object::Return(lhs), Object::Return(rhs)) => lhs == rhs,
            (Object::Error(lhs), Object::Error(rhs)) => lhs == rhs,
            (Object::Function(lhs), Object::Function(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Object::Builtin(lhs), Object::Builtin(rhs)) => lhs == rhs,
            (Object::Array(lhs), Object::Array(rhs)) => lhs == rhs,
            (Object::Hash(lhs), Object::Hash(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::Str(Rc::new(value))
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::Str(Rc::new(String::from(value)))
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::Str(value) => f.write_str(value),
            Object::Null => f.write_str("null"),
            Object::Return(value) => write!(f, "{}", value),
            Object::Error(message) => write!(f, "ERROR: {}", message),
            Object::Function(function) => write!(f, "{}", function),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Object::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A user function closed over the environment that was active where the
/// literal appeared. Calls extend that environment, not the caller's.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<Ident>,
    pub body: Block,
    pub env: Rc<RefCell<Environment>>,
}

// The captured environment can reach back to this function, so neither
// Debug nor Display may traverse it.
impl Debug for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let params: Vec<_> = self.parameters.iter().map(|p| p.value.as_str()).collect();
        write!(f, "<fn({})>", params.join(", "))
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

/// A native function exposed under a reserved identifier. Plain fn
/// pointers, so copying and address comparison are both cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// Value-equality key for hash objects: only integers, booleans, and
/// strings may index a hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(String),
}

impl Display for HashKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HashKey::Integer(value) => write!(f, "{}", value),
            HashKey::Boolean(value) => write!(f, "{}", value),
            HashKey::Str(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_keys() {
        let hello1 = Object::from("Hello World");
        let hello2 = Object::from("Hello World");
        let diff = Object::from("My name is johnny");

        assert_eq!(hello1.hash_key(), hello2.hash_key());
        assert_ne!(hello1.hash_key(), diff.hash_key());
    }

    #[test]
    fn test_unhashable_types() {
        assert_eq!(Object::Array(Rc::new(vec![])).hash_key(), None);
        assert_eq!(NULL.hash_key(), None);
    }

    #[test]
    fn test_inspect() {
        let tests = [
            (Object::from(5), "5"),
            (TRUE, "true"),
            (NULL, "null"),
            (Object::from("hello"), "hello"),
            (Object::Error(String::from("boom")), "ERROR: boom"),
            (
                Object::Array(Rc::new(vec![Object::from(1), Object::from(2)])),
                "[1, 2]",
            ),
        ];

        for (object, expected) in tests {
            assert_eq!(object.inspect(), expected);
        }
    }

    #[test]
    fn test_boolean_singletons_compare_by_value() {
        assert_eq!(TRUE, Object::Boolean(true));
        assert_ne!(TRUE, FALSE);
        assert_ne!(TRUE, Object::Integer(1));
    }
}
