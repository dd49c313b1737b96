//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nifkit - Convert text into NIF graphs and store them in a triple store.
#[derive(Debug, Parser)]
#[command(name = "nifkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "NIFKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),

    /// Print the NIF graph of a document as N-Triples
    Convert(ConvertArgs),
}

/// Arguments for the serve command.
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Bind address (e.g., 0.0.0.0:5000)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Triple store base URL
    #[arg(long, env = "NIFKIT_STORE_ENDPOINT")]
    pub store_endpoint: Option<String>,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Document name
    #[arg(short, long)]
    pub name: String,

    /// Document language (english or german)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Input file (reads stdin if omitted)
    pub file: Option<PathBuf>,
}

/// Split an `address:port` bind string
pub fn parse_bind(bind: &str) -> Option<(String, u16)> {
    let (address, port) = bind.rsplit_once(':')?;
    let port = port.parse().ok()?;
    let address = address.trim_start_matches('[').trim_end_matches(']');
    if address.is_empty() {
        return None;
    }
    Some((address.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind() {
        assert_eq!(parse_bind("0.0.0.0:5000"), Some(("0.0.0.0".to_string(), 5000)));
        assert_eq!(parse_bind("[::1]:8080"), Some(("::1".to_string(), 8080)));
        assert_eq!(parse_bind("localhost"), None);
        assert_eq!(parse_bind(":5000"), None);
        assert_eq!(parse_bind("host:notaport"), None);
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["nifkit", "convert", "--name", "Doc", "-l", "german", "in.txt"]).unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.name, "Doc");
                assert_eq!(args.language.as_deref(), Some("german"));
                assert_eq!(args.file, Some(PathBuf::from("in.txt")));
            }
            other => panic!("expected convert, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_with_config() {
        let cli = Cli::try_parse_from(["nifkit", "serve", "--config", "nifkit.toml", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("nifkit.toml")));
        assert!(matches!(cli.command, Command::Serve(ServeArgs { bind: Some(_), .. })));
    }

    #[test]
    fn test_convert_requires_name() {
        assert!(Cli::try_parse_from(["nifkit", "convert"]).is_err());
    }
}
