use std::process::ExitCode;

use buff_rotation::{ReportOptions, RotationConfig, SearchLimits, plan};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "buff-rotation", version, about = "Rank every Wrath of God / Heavenly Blessings rotation by uptime")]
struct Cli {
    /// Wrath of God cooldown, in seconds
    #[arg(long, default_value_t = 17)]
    wog_cd: i64,
    /// Heavenly Blessings cooldown, in seconds
    #[arg(long, default_value_t = 22)]
    hb_cd: i64,
    /// Horizon to cover, in seconds
    #[arg(long, default_value_t = 3000)]
    running_time: i64,
    /// Print only the best N rotations (default: all)
    #[arg(long)]
    top: Option<usize>,
    /// Intervals shown per rotation
    #[arg(long, default_value_t = 10)]
    preview: usize,
    /// Stop after collecting this many rotations
    #[arg(long)]
    max_paths: Option<usize>,
}

/// Log to stderr so stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let cfg = RotationConfig::new(cli.wog_cd, cli.hb_cd, cli.running_time);
    let limits = SearchLimits { max_paths: cli.max_paths };
    let opts = ReportOptions { top: cli.top, preview: cli.preview };

    match plan(&cfg, limits, opts) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
