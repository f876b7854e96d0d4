use std::rc::Rc;

use phf::{phf_map, Map};

use crate::object::{Builtin, Object, NULL};

// Native functions live outside the environment chain: the evaluator
// consults this table only after a name misses in every scope, so user
// bindings shadow builtins.
static BUILTINS: Map<&'static str, Builtin> = phf_map! {
    "len" => Builtin { name: "len", func: len },
    "first" => Builtin { name: "first", func: first },
    "last" => Builtin { name: "last", func: last },
    "rest" => Builtin { name: "rest", func: rest },
    "push" => Builtin { name: "push", func: push },
};

pub(crate) fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).map(|builtin| Object::Builtin(*builtin))
}

fn wrong_arity(got: usize, want: usize) -> Object {
    Object::error(format!(
        "wrong number of arguments. got={}, want={}",
        got, want
    ))
}

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Object::Str(value) => Object::Integer(value.chars().count() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => Object::error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => Object::error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Object::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Object::error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }

    match &args[0] {
        Object::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Object::Array(Rc::new(extended))
        }
        other => Object::error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}
