//! Command-line front end for the grid generator
//!
//! Builds the same response a `POST /start` request would get and prints it.
//!
//! # Examples
//!
//! ```text
//! $ LOG_LEVEL=debug color-grid --level 1 --pretty
//! 200
//! {
//!   "isValid": true,
//!   "data": { "matrix": [3, 0, 3, 1, ...], "size": 4 }
//! }
//! $ color-grid --level 0 --grid
//! 200
//! {"isValid":true,"data":{"matrix":[...],"size":3}}
//! 2 0 2
//! 1 2 0
//! 1 1 2
//! 0: 2
//! 1: 3
//! 2: 4
//! $ color-grid --body '{"level": 7}'
//! 404
//! {"error":"Invalid Difficulty level selected"}
//! ```

use clap::Parser;
use color_grid_core::config::GameConfig;
use color_grid_core::error::{GridError, Result};
use color_grid_core::game::GameService;
use color_grid_core::grid::Grid;
use color_grid_core::route::{handle_start, reject_unknown_keys, RouteResponse, StartRequest};
use color_grid_core::{current_config, init_config, start_new_game_async};
use log::{debug, error};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a color grid for a difficulty level")]
struct Cli {
    /// Difficulty level: 0 (easy), 1 (medium) or 2 (difficult)
    #[arg(short, long, conflicts_with = "body", allow_hyphen_values = true)]
    level: Option<String>,

    /// Raw JSON request body, e.g. '{"level": 1}'
    #[arg(short, long)]
    body: Option<String>,

    /// JSON configuration file overriding the built-in level table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the response body
    #[arg(short, long)]
    pretty: bool,

    /// Also print the grid row by row with per-color cell counts
    #[arg(short, long)]
    grid: bool,
}

impl Cli {
    /// Request body assembled from the arguments
    fn request_body(&self) -> String {
        if let Some(body) = &self.body {
            return body.clone();
        }
        match &self.level {
            // Keep numbers numeric and anything else as a string
            Some(level) => {
                let value = serde_json::from_str::<Value>(level)
                    .unwrap_or_else(|_| Value::String(level.clone()));
                json!({ "level": value }).to_string()
            }
            None => "{}".to_string(),
        }
    }
}

/// Grid rows followed by one `color: count` line per color
fn render_grid(grid: &Grid) -> String {
    let mut lines: Vec<String> = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let mut colors = grid.matrix.clone();
    colors.sort_unstable();
    colors.dedup();
    for color in colors {
        lines.push(format!("{color}: {}", grid.count_of(color)));
    }
    lines.join("\n")
}

fn load_config(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| GridError::InvalidConfig(format!("{}: {e}", path.display())))?;
    init_config(GameConfig::from_json(&text)?)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOG_LEVEL", "info")).init();
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        if let Err(e) = load_config(path) {
            error!("Could not load configuration: {e}");
            return ExitCode::from(2);
        }
    }

    let body = cli.request_body();
    debug!("Request body: {body}");

    let response = match cli.seed {
        Some(seed) => {
            let mut service = GameService::seeded(current_config(), seed);
            handle_start(&mut service, &body)
        }
        None => {
            let request = StartRequest::from_body(&body);
            match reject_unknown_keys(&request) {
                Some(rejected) => rejected,
                None => match start_new_game_async(request.level).await {
                    Ok(result) => RouteResponse::from_result(&result),
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                },
            }
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response.body)
    } else {
        serde_json::to_string(&response.body)
    };
    println!("{}", response.status);
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            error!("Could not render response: {e}");
            return ExitCode::FAILURE;
        }
    }

    if cli.grid && response.is_success() {
        match serde_json::from_value::<Grid>(response.body["data"].clone()) {
            Ok(grid) => println!("{}", render_grid(&grid)),
            Err(e) => {
                error!("Could not read grid from response: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
