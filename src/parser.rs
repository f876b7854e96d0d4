use std::mem;

use thiserror::Error;

use crate::ast::{Block, Expr, Ident, Program, Stmt};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Syntax problems are accumulated, never thrown: the parser keeps going
/// after each one so a single pass reports as much as possible. A program
/// parsed with a non-empty error list must not be evaluated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expected next token to be {want}, got {got} instead")]
    UnexpectedToken { want: TokenKind, got: TokenKind },

    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },

    #[error("could not parse {literal} as integer")]
    InvalidInteger { literal: String },
}

/// Binding powers, lowest to highest. The derived `Ord` is what drives
/// the Pratt loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            cur: Token::new(TokenKind::Eof, ""),
            peek: Token::new(TokenKind::Eof, ""),
            errors: Vec::new(),
        };

        // Fill the cur/peek window.
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Consumes the whole token stream and returns the program, complete
    /// or not. Statements that fail to parse are dropped and recorded in
    /// `errors`; parsing resumes at the next top-level token.
    pub fn parse(&mut self) -> Program {
        let mut program = Program::default();

        while self.cur.kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// An empty slice means the program is syntactically valid.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    fn next_token(&mut self) {
        self.cur = mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident {
            token: self.cur.clone(),
            value: self.cur.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Let { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.cur.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Return { token, value })
    }

    // The trailing semicolon is optional so expressions typed at a
    // prompt don't need one.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.cur.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Expression { token, expr })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < precedence_of(self.peek.kind) {
            left = match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                TokenKind::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur.kind {
            TokenKind::Ident => Some(Expr::Identifier(Ident {
                token: self.cur.clone(),
                value: self.cur.literal.clone(),
            })),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Some(Expr::StringLiteral {
                token: self.cur.clone(),
                value: self.cur.literal.clone(),
            }),
            TokenKind::True | TokenKind::False => Some(Expr::Boolean {
                token: self.cur.clone(),
                value: self.cur.kind == TokenKind::True,
            }),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.errors.push(SyntaxError::NoPrefixParseFn { kind });
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { token, value }),
            Err(_) => {
                self.errors.push(SyntaxError::InvalidInteger {
                    literal: token.literal,
                });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            token,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let precedence = precedence_of(token.kind);
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            token,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let mut alternative = None;
        if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            alternative = Some(self.parse_block());
        }

        Some(Expr::If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_block(&mut self) -> Block {
        let token = self.cur.clone();
        let mut statements = Vec::new();
        self.next_token();

        while self.cur.kind != TokenKind::RBrace && self.cur.kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Block { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Ident>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(Ident {
            token: self.cur.clone(),
            value: self.cur.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(Ident {
                token: self.cur.clone(),
                value: self.cur.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expr::ArrayLiteral { token, elements })
    }

    // Shared comma-separated list parsing for call arguments and array
    // elements, with the empty-list short circuit.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(items)
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expr::Index {
            token,
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { token, pairs })
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn expect_peek(&mut self, want: TokenKind) -> bool {
        if self.peek_is(want) {
            self.next_token();
            true
        } else {
            self.errors.push(SyntaxError::UnexpectedToken {
                want,
                got: self.peek.kind,
            });
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Program {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse();
        assert!(
            parser.errors().is_empty(),
            "parser errors for {:?}: {:?}",
            input,
            parser.errors()
        );
        program
    }

    fn single_expr(program: &Program) -> &Expr {
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Expression { expr, .. } => expr,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_let_statements() {
        let tests = [
            ("let x = 5;", "x", "5"),
            ("let y = true;", "y", "true"),
            ("let foobar = y;", "foobar", "y"),
        ];

        for (input, name, value) in tests {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);
            match &program.statements[0] {
                Stmt::Let {
                    token,
                    name: ident,
                    value: expr,
                } => {
                    assert_eq!(token.literal, "let");
                    assert_eq!(ident.value, name);
                    assert_eq!(expr.to_string(), value);
                }
                other => panic!("expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_statement_errors() {
        let tests = [
            (
                "let x 5;",
                vec![SyntaxError::UnexpectedToken {
                    want: TokenKind::Assign,
                    got: TokenKind::Int,
                }],
            ),
            (
                "let = 10;",
                vec![
                    SyntaxError::UnexpectedToken {
                        want: TokenKind::Ident,
                        got: TokenKind::Assign,
                    },
                    // Recovery resumes at `=`, which has no prefix rule.
                    SyntaxError::NoPrefixParseFn {
                        kind: TokenKind::Assign,
                    },
                ],
            ),
        ];

        for (input, expected) in tests {
            let mut parser = Parser::new(Lexer::new(input));
            parser.parse();
            assert_eq!(parser.errors(), expected.as_slice(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_error_messages_render() {
        let mut parser = Parser::new(Lexer::new("let x 5;"));
        parser.parse();
        assert_eq!(
            parser.errors()[0].to_string(),
            "expected next token to be =, got INT instead"
        );
    }

    #[test]
    fn test_parsing_continues_after_bad_statement() {
        let mut parser = Parser::new(Lexer::new("let x 5; let y = 10;"));
        let program = parser.parse();
        assert_eq!(parser.errors().len(), 1);
        // Recovery picks back up at `5` (an expression statement) and the
        // second let statement still parses.
        assert_eq!(
            program.statements.last().unwrap().to_string(),
            "let y = 10;"
        );
    }

    #[test]
    fn test_return_statements() {
        let tests = [
            ("return 5;", "5"),
            ("return true;", "true"),
            ("return foobar;", "foobar"),
        ];

        for (input, value) in tests {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);
            match &program.statements[0] {
                Stmt::Return { token, value: expr } => {
                    assert_eq!(token.literal, "return");
                    assert_eq!(expr.to_string(), value);
                }
                other => panic!("expected return statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_identifier_expression() {
        let program = parse("foobar;");
        match single_expr(&program) {
            Expr::Identifier(ident) => assert_eq!(ident.value, "foobar"),
            other => panic!("expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_expression_statement_retains_leading_token() {
        let tests = [
            ("foobar;", TokenKind::Ident, "foobar"),
            ("-5;", TokenKind::Minus, "-"),
            ("1 + 2;", TokenKind::Int, "1"),
        ];

        for (input, kind, literal) in tests {
            let program = parse(input);
            match &program.statements[0] {
                Stmt::Expression { token, .. } => {
                    assert_eq!(token.kind, kind, "input: {:?}", input);
                    assert_eq!(token.literal, literal, "input: {:?}", input);
                }
                other => panic!("expected expression statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_integer_literal_expression() {
        let program = parse("5;");
        match single_expr(&program) {
            Expr::IntegerLiteral { token, value } => {
                assert_eq!(*value, 5);
                assert_eq!(token.literal, "5");
            }
            other => panic!("expected integer literal, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_literal_overflow() {
        let mut parser = Parser::new(Lexer::new("92233720368547758089;"));
        parser.parse();
        assert_eq!(
            parser.errors(),
            &[SyntaxError::InvalidInteger {
                literal: String::from("92233720368547758089")
            }]
        );
    }

    #[test]
    fn test_string_literal_expression() {
        let program = parse("\"hello world\";");
        match single_expr(&program) {
            Expr::StringLiteral { value, .. } => assert_eq!(value, "hello world"),
            other => panic!("expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_expressions() {
        let tests = [
            ("!5;", "!", "5"),
            ("-15;", "-", "15"),
            ("!true;", "!", "true"),
            ("!false;", "!", "false"),
        ];

        for (input, operator, operand) in tests {
            let program = parse(input);
            match single_expr(&program) {
                expr @ Expr::Prefix { right, .. } => {
                    assert_eq!(expr.operator(), operator);
                    assert_eq!(right.to_string(), operand);
                }
                other => panic!("expected prefix expression, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let tests = [
            ("5 + 5;", "5", "+", "5"),
            ("5 - 5;", "5", "-", "5"),
            ("5 * 5;", "5", "*", "5"),
            ("5 / 5;", "5", "/", "5"),
            ("5 > 5;", "5", ">", "5"),
            ("5 < 5;", "5", "<", "5"),
            ("5 == 5;", "5", "==", "5"),
            ("5 != 5;", "5", "!=", "5"),
            ("true == true", "true", "==", "true"),
            ("false != true", "false", "!=", "true"),
        ];

        for (input, lhs, operator, rhs) in tests {
            let program = parse(input);
            match single_expr(&program) {
                expr @ Expr::Infix { left, right, .. } => {
                    assert_eq!(left.to_string(), lhs);
                    assert_eq!(expr.operator(), operator);
                    assert_eq!(right.to_string(), rhs);
                }
                other => panic!("expected infix expression, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let tests = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in tests {
            let program = parse(input);
            assert_eq!(program.to_string(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_if_expression() {
        let program = parse("if (x < y) { x }");
        match single_expr(&program) {
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                assert_eq!(condition.to_string(), "(x < y)");
                assert_eq!(consequence.to_string(), "x");
                assert!(alternative.is_none());
            }
            other => panic!("expected if expression, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");
        match single_expr(&program) {
            Expr::If {
                consequence,
                alternative,
                ..
            } => {
                assert_eq!(consequence.to_string(), "x");
                assert_eq!(alternative.as_ref().unwrap().to_string(), "y");
            }
            other => panic!("expected if expression, got {:?}", other),
        }
    }

    #[test]
    fn test_function_literal() {
        let program = parse("fn(x, y) { x + y; }");
        match single_expr(&program) {
            Expr::FunctionLiteral {
                parameters, body, ..
            } => {
                let params: Vec<_> = parameters.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(params, ["x", "y"]);
                assert_eq!(body.to_string(), "(x + y)");
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }

    #[test]
    fn test_function_parameters() {
        let tests = [
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in tests {
            let program = parse(input);
            match single_expr(&program) {
                Expr::FunctionLiteral { parameters, .. } => {
                    let params: Vec<_> = parameters.iter().map(|p| p.value.as_str()).collect();
                    assert_eq!(params, expected.as_slice());
                }
                other => panic!("expected function literal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        let program = parse("add(1, 2 * 3, 4 + 5);");
        match single_expr(&program) {
            Expr::Call {
                function,
                arguments,
                ..
            } => {
                assert_eq!(function.to_string(), "add");
                let args: Vec<_> = arguments.iter().map(|a| a.to_string()).collect();
                assert_eq!(args, ["1", "(2 * 3)", "(4 + 5)"]);
            }
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_array_literal() {
        let program = parse("[1, 2 * 2, 3 + 3]");
        match single_expr(&program) {
            Expr::ArrayLiteral { elements, .. } => {
                let elems: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                assert_eq!(elems, ["1", "(2 * 2)", "(3 + 3)"]);
            }
            other => panic!("expected array literal, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_literal() {
        let program = parse("[]");
        match single_expr(&program) {
            Expr::ArrayLiteral { elements, .. } => assert!(elements.is_empty()),
            other => panic!("expected array literal, got {:?}", other),
        }
    }

    #[test]
    fn test_index_expression() {
        let program = parse("myArray[1 + 1]");
        match single_expr(&program) {
            Expr::Index { left, index, .. } => {
                assert_eq!(left.to_string(), "myArray");
                assert_eq!(index.to_string(), "(1 + 1)");
            }
            other => panic!("expected index expression, got {:?}", other),
        }
    }

    #[test]
    fn test_hash_literal_with_string_keys() {
        let program = parse("{\"one\": 1, \"two\": 2, \"three\": 3}");
        match single_expr(&program) {
            Expr::HashLiteral { pairs, .. } => {
                let rendered: Vec<_> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                assert_eq!(rendered, ["one: 1", "two: 2", "three: 3"]);
            }
            other => panic!("expected hash literal, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_hash_literal() {
        let program = parse("{}");
        match single_expr(&program) {
            Expr::HashLiteral { pairs, .. } => assert!(pairs.is_empty()),
            other => panic!("expected hash literal, got {:?}", other),
        }
    }

    #[test]
    fn test_hash_literal_with_expressions() {
        let program = parse("{\"one\": 0 + 1, \"two\": 10 - 8}");
        match single_expr(&program) {
            Expr::HashLiteral { pairs, .. } => {
                assert_eq!(pairs.len(), 2);
                assert_eq!(pairs[0].1.to_string(), "(0 + 1)");
                assert_eq!(pairs[1].1.to_string(), "(10 - 8)");
            }
            other => panic!("expected hash literal, got {:?}", other),
        }
    }
}
