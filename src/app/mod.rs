pub mod commands;
pub mod output;

pub use commands::UrlCommands;
pub use output::OutputFormat;
