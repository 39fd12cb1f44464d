mod console;
mod json;

pub use console::{ConsoleStyle, generate as generate_console};
pub use json::generate as generate_json;
