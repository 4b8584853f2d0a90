//! Analyze command: simulate the chain, compute statistics, write the report.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use tell_analysis::{analyze, render_text, to_json};
use tell_chain::simulate;

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::TellConfig;
use crate::convert;

/// Run the simulation and analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let report = build_report(&args)?;

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => to_json(&report).context("failed to serialize report")?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Resolves configuration, simulates and analyses; no output side effects.
fn build_report(args: &AnalyzeArgs) -> Result<tell_analysis::Report> {
    // 1. Load config (optional) and apply CLI overrides
    let mut config = match &args.config {
        Some(path) => TellConfig::load(path)?,
        None => TellConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.simulation.steps = i64::try_from(steps).context("--steps is too large")?;
    }
    if let Some(start) = &args.start {
        config.simulation.start = convert::parse_start_arg(start);
    }
    if let Some(top_k) = args.top_k {
        config.analysis.top_k = top_k;
    }
    let seed = args.seed.or(config.seed);

    // 2. Build and validate everything before simulating
    let model = convert::build_model(config.chain.as_ref())?;
    let steps = convert::parse_steps(config.simulation.steps)?;
    let start = convert::resolve_start(&model, &config.simulation.start)?;
    let analysis_cfg = convert::build_analysis_config(&config.analysis)?;
    info!(n_states = model.n_states(), steps, start = %start, "model ready");

    // 3. Seeded or OS-random RNG
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 4. Simulate and analyse
    let sequence = simulate(&model, steps, start, &mut rng).context("simulation failed")?;
    let report = analyze(&model, &sequence, &analysis_cfg).context("analysis failed")?;
    info!(
        weighted_entropy = report.summary.weighted_entropy,
        predictability = %report.summary.predictability,
        "analysis complete"
    );

    Ok(report.with_seed(seed))
}
