use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use chroma_cli::request::{RequestSources, build_request};
use chroma_math::simulate_palette;
use chroma_model::{VisionMode, parse_palette};
use chroma_report::{compute_report, write_json_report};
use chroma_standards::ChromaConfig;

use crate::cli::{AnalyzeArgs, SimulateArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{AnalyzeResult, SimulationResult};

pub fn run_modes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mode"),
        header_cell("Name"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for mode in VisionMode::ALL {
        table.add_row(vec![mode.as_str(), mode.label(), mode.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_simulate(args: &SimulateArgs) -> Result<SimulationResult> {
    let palette = parse_palette(&args.colors).context("parse colors")?;
    let colors = simulate_palette(&palette, args.mode);
    info!(mode = args.mode.as_str(), colors = colors.len(), "simulated colors");
    Ok(SimulationResult {
        mode: args.mode,
        colors,
    })
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("analyze");
    let _guard = span.enter();
    let start = Instant::now();

    let config = ChromaConfig::resolve(args.config.as_deref()).context("load configuration")?;
    let request = build_request(&RequestSources {
        input: args.input.clone(),
        palette: args.palette.clone(),
        text: args.text.clone(),
        text_file: args.text_file.clone(),
        simulate: args.simulate.clone(),
        all_modes: args.all_modes,
        image_name: args.image_name.clone(),
    })?;
    info!(
        colors = request.palette.len(),
        text_blocks = request.text_blocks.len(),
        modes = request.deficiency_modes().len(),
        "analysis request ready"
    );

    let report = compute_report(&request, &config);
    if let Some(path) = &args.json {
        write_json_report(&report, path)?;
    }

    info!(
        score = report.overall_score(),
        grade = %report.grade(),
        failures = report.failure_count(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    Ok(AnalyzeResult {
        report,
        config_source: config.source,
        json_path: args.json.clone(),
    })
}
