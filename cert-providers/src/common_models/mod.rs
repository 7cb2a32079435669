pub mod issue;
pub mod macros;
pub mod user;
