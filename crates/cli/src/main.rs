use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nmo::prelude::*;
use nmo::report::{write_report, Report};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod export;
mod provenance;

use config::GeometryArgs;

#[derive(Parser)]
#[command(name = "nmo")]
#[command(about = "Nested mirror optic layout (elliptical shell chain)")]
struct Cmd {
    /// More log output: -v shows per-mirror coefficients, -vv adds anchors
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a chain, print the report and optionally export the shell table
    Solve {
        /// JSON geometry file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Shell table output (.csv or .parquet); a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the printed report
        #[arg(long)]
        quiet: bool,
    },
    /// Print code revision and library version as JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            config,
            geometry,
            out,
            quiet,
        } => solve(config.as_deref(), geometry, out, quiet),
        Action::Report => report(),
    }
}

fn solve(
    config_path: Option<&Path>,
    args: GeometryArgs,
    out: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let geometry = config::resolve(config_path, &args)?;
    let inputs = geometry.to_inputs();
    tracing::info!(mirrors = inputs.number, out = ?out, "solve");

    let solved = solve_shells(&inputs, ChainCfg::default())
        .and_then(|shells| MirrorChain::from_shells(&shells).map(|chain| (shells, chain)));
    if !quiet {
        let report = Report::new(&inputs, solved.as_ref().map(|(_, chain)| chain));
        let stdout = std::io::stdout();
        write_report(&mut stdout.lock(), &report).context("writing report")?;
    }
    let (shells, _chain) = solved.context("solving mirror chain")?;

    if let Some(path) = out {
        let mut df = export::shells_frame(&shells, inputs.focal)?;
        export::write_frame(&mut df, &path)?;
        let prov = provenance::write_sidecar(&path, serde_json::to_value(&geometry)?)?;
        tracing::info!(provenance = %prov.display(), "wrote provenance");
    }
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}
