//! CLI command implementations.
//!
//! - `clean`: Print the cleaned form of each path
//! - `parse`: Print the decomposed form of each path
//! - `check`: Fail if any path carries a warning
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod clean;
pub mod completions;
pub mod parse;
pub mod validate;

pub use check::CheckCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use parse::ParseCommand;
pub use validate::ValidateCommand;
