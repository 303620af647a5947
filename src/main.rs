//! CLI entry point for msrest-ua.

use anyhow::{Context, Result};
use clap::Parser;
use msrest::constants::USER_AGENT;
use msrest::{ServiceClientBuilder, WebResource};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, info};

mod app_config;
mod cli;

use app_config::load_config;
use cli::Args;

/// What the pipeline did with the User-Agent header.
#[derive(Debug, Serialize)]
struct Report {
    user_agent: String,
    /// `caller` when `--user-agent` was honored, `composed` otherwise.
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // stdout carries the report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let loaded = load_config(args.config.as_deref())?;
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), loaded = loaded.config.is_some(), "config resolved");
    }
    let file_config = loaded.config.unwrap_or_default();

    let tokens = if args.tokens.is_empty() {
        file_config.user_agent_tokens.clone().unwrap_or_default()
    } else {
        args.tokens.clone()
    };

    let mut builder = ServiceClientBuilder::new().user_agent_tokens(&tokens)?;
    if let Some(secs) = args.connect_timeout.or(file_config.connect_timeout_secs) {
        builder = builder.connect_timeout_secs(secs);
    }
    if let Some(secs) = args.read_timeout.or(file_config.read_timeout_secs) {
        builder = builder.read_timeout_secs(secs);
    }
    let client = builder.build()?;

    let mut request = match &args.url {
        Some(url) => WebResource::new(Method::GET, url)?,
        None => WebResource::default(),
    };
    if let Some(user_agent) = &args.user_agent {
        request.set_header(USER_AGENT.as_str(), user_agent)?;
    }
    let source = if request.has_header(USER_AGENT.as_str()) {
        "caller"
    } else {
        "composed"
    };

    let (request, status) = if args.url.is_some() {
        let response = client
            .send_request(request)
            .await
            .context("Request through pipeline failed")?;
        info!(status = response.status.as_u16(), "request completed");
        (response.request, Some(response.status.as_u16()))
    } else {
        (client.prepare_request(request).await?, None)
    };

    let report = Report {
        user_agent: request
            .header(USER_AGENT.as_str())
            .unwrap_or_default()
            .to_string(),
        source,
        url: request.url.as_ref().map(ToString::to_string),
        status,
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.user_agent);
        if let Some(status) = report.status {
            println!("status: {status}");
        }
    }

    Ok(())
}
