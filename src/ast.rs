use std::fmt::{Display, Formatter};

use crate::token::Token;

// Every node keeps the token that introduced it so diagnostics and the
// pretty-printed form can fall back on the original literal text. The
// `Display` impls produce the fully-parenthesized canonical form that the
// parser tests use as a structural oracle.

/// A parsed source unit: the parser's sole output and the evaluator's
/// top-level input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub token: Token,
    pub value: String,
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A `{ ... }` sequence of statements, the body form shared by `if`
/// arms and function literals.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let {
        token: Token,
        name: Ident,
        value: Expr,
    },
    Return {
        token: Token,
        value: Expr,
    },
    // Keeps the expression's leading token for reporting parity with the
    // other statement forms.
    Expression {
        token: Token,
        expr: Expr,
    },
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Stmt::Return { token, value } => write!(f, "{} {};", token.literal, value),
            Stmt::Expression { expr, .. } => write!(f, "{}", expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Ident),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    Boolean {
        token: Token,
        value: bool,
    },
    Prefix {
        token: Token,
        right: Box<Expr>,
    },
    Infix {
        token: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    FunctionLiteral {
        token: Token,
        parameters: Vec<Ident>,
        body: Block,
    },
    Call {
        token: Token,
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
    ArrayLiteral {
        token: Token,
        elements: Vec<Expr>,
    },
    Index {
        token: Token,
        left: Box<Expr>,
        index: Box<Expr>,
    },
    // Pairs stay in source order; expressions only become hashable (or
    // not) once evaluated.
    HashLiteral {
        token: Token,
        pairs: Vec<(Expr, Expr)>,
    },
}

impl Expr {
    /// The operator text of a prefix/infix node, taken from its token.
    pub fn operator(&self) -> &str {
        match self {
            Expr::Prefix { token, .. } | Expr::Infix { token, .. } => &token.literal,
            _ => "",
        }
    }
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{}", ident),
            Expr::IntegerLiteral { token, .. } => f.write_str(&token.literal),
            Expr::StringLiteral { value, .. } => f.write_str(value),
            Expr::Boolean { token, .. } => f.write_str(&token.literal),
            Expr::Prefix { token, right } => write!(f, "({}{})", token.literal, right),
            Expr::Infix { token, left, right } => {
                write!(f, "({} {} {})", left, token.literal, right)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::FunctionLiteral {
                token,
                parameters,
                body,
            } => {
                write!(f, "{}(", token.literal)?;
                write_joined(f, parameters)?;
                write!(f, ") {}", body)
            }
            Expr::Call {
                function,
                arguments,
                ..
            } => {
                write!(f, "{}(", function)?;
                write_joined(f, arguments)?;
                f.write_str(")")
            }
            Expr::ArrayLiteral { elements, .. } => {
                f.write_str("[")?;
                write_joined(f, elements)?;
                f.write_str("]")
            }
            Expr::Index { left, index, .. } => write!(f, "({}[{}])", left, index),
            Expr::HashLiteral { pairs, .. } => {
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
