use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sofreport
#[derive(Parser, Debug)]
#[command(
    name = "sofreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Laytime statement exporter: PDF and Excel reports from a Statement of Facts snapshot",
    long_about = None
)]
pub struct Cli {
    /// Override the output directory from the configuration
    #[arg(global = true, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Load the voyage snapshot from a JSON file instead of the built-in voyage
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Use this configuration file instead of ~/.sofreport/sofreport.conf
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Walk through the demo screens, from upload to export
    Demo,

    /// Print the extracted event timeline
    Events,

    /// Export the laytime statement
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, help = "Export both the PDF statement and the Excel analysis")]
        all: bool,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,
    },

    /// Copy the dashboard link to the clipboard
    Share {
        #[arg(long, value_name = "URL", help = "Dashboard origin, e.g. https://sof.example.com")]
        origin: Option<String>,

        #[arg(long = "no-secure", help = "Skip the system clipboard program")]
        no_secure: bool,
    },
}
