pub mod api;
pub mod error;
pub mod heuristic;
pub mod lexer;
pub mod options;
pub mod script;
pub mod serialization;
pub mod stack;
pub mod validator;

pub use api::{check, split_statements};
pub use validator::{InputValidator, Validation};
