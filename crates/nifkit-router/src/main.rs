//! nifkit CLI
//!
//! Starts the HTTP service or converts a single document offline.

mod cli;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{parse_bind, Cli, Command, ConvertArgs, ServeArgs};
use nifkit_annotator::{Annotator, DocumentRequest};
use nifkit_router::{config::ServerConfig, start_server};
use std::io::Read;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };

    match cli.command {
        Command::Serve(args) => serve(config, args).await,
        Command::Convert(args) => convert(config, args),
    }
}

async fn serve(mut config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        let (address, port) =
            parse_bind(&bind).ok_or_else(|| anyhow!("invalid bind address '{}', expected host:port", bind))?;
        config.bind_address = address;
        config.bind_port = port;
    }
    if let Some(endpoint) = args.store_endpoint {
        config.store.endpoint = endpoint;
    }

    start_server(config).await?;
    Ok(())
}

fn convert(config: ServerConfig, args: ConvertArgs) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let annotator = Annotator::new(config.annotator)?;
    let document = annotator.validate(DocumentRequest {
        text,
        document_name: args.name,
        language: args.language,
    })?;
    let annotated = annotator.annotate(&document)?;

    print!("{}", annotated.graph.to_ntriples());
    eprintln!("{}", annotated.graph_iri.as_str());

    Ok(())
}
