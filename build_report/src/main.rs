//! Build Report - Print the calculated skills and stats of a saved build
//!
//! Usage: build_report <catalog> <build> [--json] [--constants <engine.toml>]
//!
//! The catalog may be TOML or JSON; the build file may be TOML or JSON.
//! Set `RUST_LOG=debug` to trace the pipeline.

use anyhow::{bail, Context, Result};
use build_core::config::{self, EngineConstants};
use build_core::{calculate_build, default_constants, load_build, load_catalog, BuildReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SHARPNESS_NAMES: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "white", "purple"];

struct Args {
    catalog: PathBuf,
    build: PathBuf,
    json: bool,
    constants: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut json = false;
    let mut constants = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--constants" => {
                let path = args.next().context("--constants needs a path")?;
                constants = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'"),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [catalog, build]: [PathBuf; 2] = positional.try_into().map_err(|_| {
        anyhow::anyhow!("usage: build_report <catalog> <build> [--json] [--constants <engine.toml>]")
    })?;

    Ok(Args {
        catalog,
        build,
        json,
        constants,
    })
}

/// `RUST_LOG` directives when set and valid, `info` otherwise
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let constants: EngineConstants = match &args.constants {
        Some(path) => config::load_constants(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => default_constants(),
    };
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    let build = load_build(&args.build)
        .with_context(|| format!("loading build from {}", args.build.display()))?;

    tracing::info!(catalog = catalog.version(), entries = catalog.len(), "catalog loaded");

    let report = calculate_build(&build, &catalog, &constants);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&build.name, &report);
    }
    Ok(())
}

fn print_report(name: &str, report: &BuildReport) {
    let stats = &report.stats;

    println!("=== {} ===", if name.is_empty() { "Unnamed build" } else { name });

    println!();
    println!("Skills:");
    if report.skills.is_empty() {
        println!("  (none)");
    }
    for (skill, entry) in report.skills.sorted_for_display() {
        let over = if entry.is_over_cap() {
            format!("  (+{} wasted)", entry.level - entry.max_level)
        } else {
            String::new()
        };
        println!("  {:<24} {}/{}{}", skill, entry.effective_level, entry.max_level, over);
    }
    for skill in &report.rampage_skills {
        println!("  {:<24} rampage", skill);
    }

    println!();
    println!("Attack:");
    println!("  Effective raw   {:>8.1}", stats.effective_raw);
    println!("  Raw             {:>8.1}", stats.raw);
    println!("  Affinity        {:>7.0}%", stats.affinity);
    println!("  Crit multiplier {:>8.2}", stats.crit_multiplier);
    if let Some(element) = stats.element_type {
        println!("  {:<15} {:>8.1} (effective {:.1})", format!("{element:?}"), stats.element, stats.effective_element);
        println!("  Element crit    {:>8.2}", stats.element_crit_multiplier);
    }
    if let Some(status) = stats.status_type {
        println!("  {:<15} {:>8.1}", format!("{status:?}"), stats.status);
    }

    let tier = SHARPNESS_NAMES
        .get(stats.sharpness_class)
        .copied()
        .unwrap_or("unknown");
    println!(
        "  Sharpness       {:>8} (raw x{:.2}, element x{:.4})",
        tier, stats.sharpness_multipliers.raw, stats.sharpness_multipliers.elemental
    );
    println!("  Sharpness bar   {:?}", stats.sharpness);

    println!();
    println!("Defense:");
    println!("  Defense         {:>8.0}", stats.defense);
    for (element, value) in stats.resistances.iter() {
        println!("  {:<15} {:>8.0}", format!("{element:?} res"), value);
    }

    if !report.diagnostics.is_empty() {
        println!();
        println!("Warnings:");
        for diagnostic in &report.diagnostics {
            println!("  - {diagnostic}");
        }
    }
}
