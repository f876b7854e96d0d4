use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Block, Expr, Program, Stmt};
use crate::builtins;
use crate::env::Environment;
use crate::object::{Function, HashPairs, Object, NULL};
use crate::token::TokenKind;

// Runtime failures travel as `Object::Error` values, return statements as
// `Object::Return` wrappers. Every composite rule below checks its
// sub-results and re-yields immediately; nothing here unwinds through the
// host's panic machinery.

/// Evaluates a program against an environment. A `return` at the top
/// level yields its inner value; the first error aborts the rest of the
/// program.
pub fn eval(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Object::Return(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_statement(stmt: &Stmt, env: &Rc<RefCell<Environment>>) -> Object {
    match stmt {
        Stmt::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.value.clone(), value);
            NULL
        }
        Stmt::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::Return(Box::new(value))
        }
        Stmt::Expression { expr, .. } => eval_expression(expr, env),
    }
}

// Unlike `eval`, a `Return` result stays wrapped here so it can travel
// through nested blocks up to the enclosing call boundary.
fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_expression(expr: &Expr, env: &Rc<RefCell<Environment>>) -> Object {
    match expr {
        Expr::IntegerLiteral { value, .. } => Object::Integer(*value),
        Expr::StringLiteral { value, .. } => Object::from(value.as_str()),
        Expr::Boolean { value, .. } => Object::from(*value),
        Expr::Identifier(ident) => eval_identifier(&ident.value, env),
        Expr::Prefix { token, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            match token.kind {
                TokenKind::Bang => eval_bang(right),
                TokenKind::Minus => eval_minus(right),
                _ => Object::error(format!(
                    "unknown operator: {}{}",
                    token.literal,
                    right.type_name()
                )),
            }
        }
        Expr::Infix { token, left, right } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(token.kind, &token.literal, left, right)
        }
        Expr::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if is_truthy(&condition) {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                NULL
            }
        }
        Expr::FunctionLiteral {
            parameters, body, ..
        } => Object::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        })),
        Expr::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            match eval_expressions(arguments, env) {
                Ok(args) => apply_function(function, args),
                Err(err) => err,
            }
        }
        Expr::ArrayLiteral { elements, .. } => match eval_expressions(elements, env) {
            Ok(elements) => Object::Array(Rc::new(elements)),
            Err(err) => err,
        },
        Expr::Index { left, index, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index(left, index)
        }
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Object::error(format!("identifier not found: {}", name))
}

// Only `null` and `false` are falsy; everything else, including 0 and the
// empty string, is truthy.
fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Null | Object::Boolean(false))
}

fn eval_bang(operand: Object) -> Object {
    Object::from(!is_truthy(&operand))
}

fn eval_minus(operand: Object) -> Object {
    match operand {
        Object::Integer(value) => Object::Integer(value.wrapping_neg()),
        other => Object::error(format!("unknown operator: -{}", other.type_name())),
    }
}

fn eval_infix(kind: TokenKind, operator: &str, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix(kind, operator, left, right)
        }
        (Object::Str(left), Object::Str(right)) => match kind {
            TokenKind::Plus => {
                let mut concat = left.as_ref().clone();
                concat.push_str(&right);
                Object::from(concat)
            }
            _ => Object::error(format!("unknown operator: STRING {} STRING", operator)),
        },
        (left, right) => {
            // Identity comparison exists only for the singletons; mixed
            // types simply compare unequal. Same-type composites fall
            // through to the unknown-operator error.
            let identity = matches!(left, Object::Boolean(_) | Object::Null)
                && matches!(right, Object::Boolean(_) | Object::Null);
            let mixed = left.type_name() != right.type_name();

            match kind {
                TokenKind::Eq if identity || mixed => Object::from(left == right),
                TokenKind::NotEq if identity || mixed => Object::from(left != right),
                _ if mixed => Object::error(format!(
                    "type mismatch: {} {} {}",
                    left.type_name(),
                    operator,
                    right.type_name()
                )),
                _ => Object::error(format!(
                    "unknown operator: {} {} {}",
                    left.type_name(),
                    operator,
                    right.type_name()
                )),
            }
        }
    }
}

fn eval_integer_infix(kind: TokenKind, operator: &str, left: i64, right: i64) -> Object {
    match kind {
        TokenKind::Plus => Object::Integer(left.wrapping_add(right)),
        TokenKind::Minus => Object::Integer(left.wrapping_sub(right)),
        TokenKind::Asterisk => Object::Integer(left.wrapping_mul(right)),
        TokenKind::Slash => {
            if right == 0 {
                Object::error(String::from("division by zero"))
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        TokenKind::Lt => Object::from(left < right),
        TokenKind::Gt => Object::from(left > right),
        TokenKind::Eq => Object::from(left == right),
        TokenKind::NotEq => Object::from(left != right),
        _ => Object::error(format!("unknown operator: INTEGER {} INTEGER", operator)),
    }
}

// Left-to-right, aborting on the first error; the error object itself is
// handed back through `Err`.
fn eval_expressions(
    exprs: &[Expr],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(exprs.len());

    for expr in exprs {
        let result = eval_expression(expr, env);
        if result.is_error() {
            return Err(result);
        }
        results.push(result);
    }

    Ok(results)
}

fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            if args.len() != function.parameters.len() {
                return Object::error(format!(
                    "wrong number of arguments. got={}, want={}",
                    args.len(),
                    function.parameters.len()
                ));
            }

            // The call frame extends the function's captured environment,
            // not the caller's.
            let mut scope = Environment::with(function.env.clone());
            for (param, arg) in function.parameters.iter().zip(args) {
                scope.set(param.value.clone(), arg);
            }

            let result = eval_block(&function.body, &Rc::new(RefCell::new(scope)));
            unwrap_return(result)
        }
        Object::Builtin(builtin) => (builtin.func)(&args),
        other => Object::error(format!("not a function: {}", other.type_name())),
    }
}

// A `return` escapes exactly one function call.
fn unwrap_return(object: Object) -> Object {
    match object {
        Object::Return(value) => *value,
        other => other,
    }
}

fn eval_index(left: Object, index: Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(index)) => {
            // Out-of-range and negative indices yield null, not an error.
            usize::try_from(index)
                .ok()
                .and_then(|i| elements.get(i).cloned())
                .unwrap_or(NULL)
        }
        (Object::Hash(pairs), index) => match index.hash_key() {
            Some(key) => pairs.get(&key).cloned().unwrap_or(NULL),
            None => Object::error(format!("unusable as hash key: {}", index.type_name())),
        },
        (left, _) => Object::error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Rc<RefCell<Environment>>) -> Object {
    let mut map = HashPairs::default();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let Some(key) = key.hash_key() else {
            return Object::error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        map.insert(key, value);
    }

    Object::Hash(Rc::new(map))
}
