//! Command-line surface: clap parser + one handler per subcommand.

pub mod commands;
pub mod parser;
