//! segment-router CLI
//!
//! Drives the sample sitemap router from the command line.
//!
//! ```text
//! segment-router route GET /profile/12      → routes one request
//! segment-router bench --iterations 10000   → rebuild + one random request per iteration
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

use segment_router::config::{load_config, RouterConfig};
use segment_router::observability::logging;
use segment_router::sitemap::{sitemap_router, SAMPLE_PATHS};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Route requests through the sample sitemap", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a single request
    Route {
        verb: String,
        path: String,
    },
    /// Rebuild the router and route a random sample path, repeatedly
    Bench {
        #[arg(short, long)]
        iterations: Option<u64>,

        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => RouterConfig::default(),
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    if let Err(e) = logging::init(level) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::Route { verb, path } => route(&config, &verb, &path),
        Commands::Bench { iterations, seed } => {
            bench(
                &config,
                iterations.unwrap_or(config.bench.iterations),
                seed.or(config.bench.seed),
            )
        }
    }
}

fn route(config: &RouterConfig, verb: &str, path: &str) -> ExitCode {
    let router = sitemap_router(config);
    match router.route(verb, path) {
        Ok(result) => {
            println!("{}", json!({ "verb": verb, "path": path, "result": result }));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn bench(config: &RouterConfig, iterations: u64, seed: Option<u64>) -> ExitCode {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(iterations, seed = ?seed, "Benchmark starting");

    let (mut matched, mut failed) = (0u64, 0u64);
    let start = Instant::now();
    for _ in 0..iterations {
        let router = sitemap_router(config);
        let Some(path) = SAMPLE_PATHS.choose(&mut rng) else {
            break;
        };
        match router.route("GET", path) {
            Ok(_) => matched += 1,
            Err(e) => {
                tracing::warn!(path, error = %e, "Sample path failed to route");
                failed += 1;
            }
        }
    }
    let elapsed = start.elapsed();

    let per_request_ns = if iterations > 0 {
        elapsed.as_nanos() / u128::from(iterations)
    } else {
        0
    };
    let report = json!({
        "iterations": iterations,
        "matched": matched,
        "failed": failed,
        "total_ms": elapsed.as_secs_f64() * 1000.0,
        "ns_per_request": per_request_ns,
    });
    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
