//! match-router CLI.
//!
//! Resolves and navigates paths against the match viewer route table.
//!
//! ```text
//! match-router routes
//! match-router resolve /match/42
//! match-router href match -p id=42
//! match-router navigate / /match/42 /history --back 1
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use match_router::config::{load_config, RouterConfig};
use match_router::observability::logging::init_logging;
use match_router::observability::metrics;
use match_router::{Params, Router};

#[derive(Parser)]
#[command(name = "match-router")]
#[command(about = "Resolve and navigate match viewer routes", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active and disabled routes
    Routes,
    /// Resolve a path without navigating
    Resolve { path: String },
    /// Address-bar URL for a named route
    Href {
        name: String,
        /// Route parameter as key=value
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Push each path in order, then go back
    Navigate {
        paths: Vec<String>,
        /// Number of back steps after the pushes
        #[arg(long, default_value_t = 0)]
        back: usize,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    init_logging(&config.observability)?;
    metrics::set_enabled(config.observability.metrics_enabled);

    tracing::debug!(
        history = ?config.history.mode,
        base = %config.history.base,
        strict = config.matching.strict,
        load_timeout_ms = config.loading.timeout_ms,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let router = Router::from_config(&config)?;

    match cli.command {
        Commands::Routes => print_routes(&router, cli.json)?,
        Commands::Resolve { path } => {
            let resolved = router.resolve(&path).await?;
            if cli.json {
                let out = json!({
                    "route": resolved.name(),
                    "pattern": resolved.route.path(),
                    "location": resolved.location,
                    "params": resolved.params,
                    "props": resolved.props,
                    "view": resolved.view.name(),
                    "render": resolved.render(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("route:  {}", resolved.name());
                println!("params: {:?}", resolved.params);
                println!("props:  {:?}", resolved.props);
                println!("render: {}", resolved.render());
            }
        }
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            println!("{}", router.href(&name, &params)?);
        }
        Commands::Navigate { paths, back } => {
            for path in &paths {
                report(&router, path, router.push(path).await, cli.json)?;
            }
            for _ in 0..back {
                report(&router, "<back>", router.back().await, cli.json)?;
            }
        }
    }

    Ok(())
}

fn print_routes(router: &Router, as_json: bool) -> Result<(), serde_json::Error> {
    let table = router.table();
    let rows: Vec<_> = table
        .routes()
        .iter()
        .chain(table.inactive())
        .map(|route| {
            json!({
                "name": route.name(),
                "path": route.path(),
                "lazy": route.component().is_lazy(),
                "props": route.passes_props(),
                "enabled": route.is_enabled(),
            })
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for route in table.routes().iter().chain(table.inactive()) {
        println!(
            "{:<10} {:<12} {:<6} props={:<5} {}",
            route.name(),
            route.path(),
            if route.component().is_lazy() { "lazy" } else { "eager" },
            route.passes_props(),
            if route.is_enabled() { "" } else { "(disabled)" },
        );
    }
    Ok(())
}

fn report(
    router: &Router,
    target: &str,
    outcome: Result<std::sync::Arc<match_router::ActiveRoute>, match_router::NavigationError>,
    as_json: bool,
) -> Result<(), serde_json::Error> {
    match outcome {
        Ok(active) if as_json => {
            println!("{}", serde_json::to_string(&active.summary())?);
        }
        Ok(active) => {
            println!(
                "ok    {:<24} {} -> {}",
                target,
                router.address().unwrap_or_default(),
                active.render()
            );
        }
        Err(e) if as_json => {
            let out = json!({ "target": target, "error": e.to_string(), "kind": e.kind() });
            println!("{}", serde_json::to_string(&out)?);
        }
        Err(e) => println!("fail  {:<24} {}", target, e),
    }
    Ok(())
}
