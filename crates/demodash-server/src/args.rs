use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for demodash
#[derive(Debug, Parser)]
#[command(
    name = "demodash",
    version,
    about = "Interactive dashboard for demographic migration data in US metro areas"
)]
pub struct CliArgs {
    /// Path to the input CSV or CSV.gz file (default: data/migration.csv)
    #[arg(short = 'i', long = "input", env = "DEMODASH_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP (default)
    Serve(ServeArgs),

    /// Print a summary of the dataset and exit
    Stats,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8050)]
    pub port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8050,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve_defaults() {
        let args = CliArgs::try_parse_from(["demodash"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn serve_flags_parse() {
        let args = CliArgs::try_parse_from([
            "demodash", "--debug", "-i", "x.csv", "serve", "--host", "127.0.0.1", "-p", "80",
        ])
        .unwrap();
        assert!(args.debug);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("x.csv")));
        match args.command {
            Some(Commands::Serve(s)) => {
                assert_eq!(s.host, "127.0.0.1");
                assert_eq!(s.port, 80);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
