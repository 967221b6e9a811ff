//! simtrack CLI — simulate training sessions and browse the results.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use simtrack_core::config::load_config_from;
use simtrack_core::menu::{run_menu, StdinLines};
use simtrack_core::{MetricSource, Profile, RngSource, SessionGenerator};
use simtrack_report::HtmlChartViewer;

mod demo;

#[derive(Parser)]
#[command(
    name = "simtrack",
    version,
    about = "Toy surgical training-session tracker"
)]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for chart pages
    #[arg(long)]
    chart_dir: Option<PathBuf>,

    /// Do not wait for Enter after writing a chart
    #[arg(long)]
    no_wait: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("simtrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = cli.chart_dir {
        config.chart_dir = dir;
    }
    if cli.no_wait {
        config.wait_for_dismiss = false;
    }
    tracing::debug!(?config, "starting");

    let mut out = io::stdout();
    let mut profiles = demo::profiles();
    match config.seed {
        Some(seed) => populate(&mut profiles, RngSource::seeded(seed), &mut out)?,
        None => populate(&mut profiles, RngSource::from_entropy(), &mut out)?,
    }

    let mut viewer = HtmlChartViewer::new(&config.chart_dir);
    if config.wait_for_dismiss {
        viewer = viewer.wait_on(Box::new(StdinLines));
    }

    let summary = run_menu(&profiles, &mut StdinLines, &mut out, &mut viewer)?;
    tracing::debug!(
        views = summary.views,
        rejected = summary.rejected,
        exit = ?summary.exit,
        "menu closed"
    );

    Ok(())
}

fn populate<S: MetricSource>(
    profiles: &mut [Profile],
    source: S,
    out: &mut dyn io::Write,
) -> Result<()> {
    let mut generator = SessionGenerator::new(source);
    demo::run_sessions(profiles, &mut generator, out)
}
