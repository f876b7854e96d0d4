pub mod ast;
pub mod env;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

mod builtins;

pub use env::Environment;
pub use evaluator::eval;
pub use lexer::Lexer;
pub use object::Object;
pub use parser::Parser;
