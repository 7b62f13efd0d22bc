pub mod commands;
pub mod logging;
pub mod parser;
