use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chroma_math::perceived_brightness;
use chroma_model::{
    AccessibilityReport, ContrastFeedback, Grade, Recommendation, RiskLevel, ScoreBreakdown,
};

use crate::types::{AnalyzeResult, SimulationResult};

pub fn print_report(result: &AnalyzeResult) {
    let report = &result.report;
    println!("Image: {}", report.image_name);
    match &result.config_source {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: built-in defaults"),
    }
    if let Some(path) = &result.json_path {
        println!("JSON report: {}", path.display());
    }
    print_palette_table(report);
    print_contrast_table(report);
    print_text_table(report);
    print_simulation_table(report);
    print_score_table(&report.wcag.breakdown);
    print_verdict(report);
}

pub fn print_simulation(result: &SimulationResult) {
    println!("Mode: {} ({})", result.mode.label(), result.mode.description());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Original"), header_cell("Simulated")]);
    apply_table_style(&mut table);
    for color in &result.colors {
        table.add_row(vec![swatch_cell(color.original), swatch_cell(color.simulated)]);
    }
    println!("{table}");
}

fn print_palette_table(report: &AccessibilityReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Color"),
        header_cell("Closest brand"),
        header_cell("Similarity"),
        header_cell("Suggestion"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, row) in report.rows.iter().enumerate() {
        let (closest, similarity) = match row.closest_match() {
            Some(entry) => (
                swatch_cell(entry.reference),
                Cell::new(format!("{:.1}%", entry.similarity)),
            ),
            None => (dim_cell("-"), dim_cell("-")),
        };
        let suggestion = report
            .suggestions
            .get(index)
            .map_or_else(|| dim_cell("-"), |s| recommendation_cell(s.recommendation));
        table.add_row(vec![
            dim_cell(index + 1),
            swatch_cell(row.color),
            closest,
            similarity,
            suggestion,
        ]);
    }
    println!();
    println!("Palette:");
    println!("{table}");
}

fn print_contrast_table(report: &AccessibilityReport) {
    if report.wcag.total_tests == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Color"),
        header_cell("Against"),
        header_cell("Ratio"),
        header_cell("Result"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in &report.rows {
        for entry in &row.contrasts {
            table.add_row(vec![
                swatch_cell(row.color),
                swatch_cell(entry.other),
                Cell::new(format!("{:.2}:1", entry.ratio)),
                feedback_cell(entry.feedback),
            ]);
        }
    }
    let stats = &report.statistics;
    println!();
    println!(
        "Contrast: {} pairs, {} good, {} medium, {} poor ({}% pass)",
        stats.total, stats.good, stats.medium, stats.poor, report.wcag.pass_rate
    );
    println!("{table}");
}

fn print_text_table(report: &AccessibilityReport) {
    let analysis = &report.text_contrast;
    if analysis.blocks.is_empty() {
        if report.text_analysis.has_text {
            println!();
            println!("Text: {} characters detected", report.text_analysis.length);
        }
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Text"),
        header_cell("Color"),
        header_cell("Background"),
        header_cell("Ratio"),
        header_cell("Needs"),
        header_cell("Result"),
        header_cell("Risk"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for block in &analysis.blocks {
        table.add_row(vec![
            Cell::new(&block.text),
            swatch_cell(block.text_color),
            swatch_cell(block.background_color),
            Cell::new(format!("{:.2}:1", block.ratio)),
            dim_cell(format!("{:.1}:1", block.threshold)),
            feedback_cell(block.feedback),
            risk_cell(block.risk),
        ]);
    }
    println!();
    println!(
        "Text blocks: {} passed, {} failed, overall risk {}",
        analysis.passed, analysis.failed, analysis.overall_risk
    );
    println!("{table}");
}

fn print_simulation_table(report: &AccessibilityReport) {
    if report.simulations.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mode"),
        header_cell("Simulated palette"),
        header_cell("Worst ratio"),
        header_cell("Impact"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for simulation in &report.simulations {
        let colors = simulation
            .colors
            .iter()
            .map(|c| c.simulated.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let worst = simulation
            .worst_ratio
            .map_or_else(|| dim_cell("-"), |ratio| Cell::new(format!("{ratio:.2}:1")));
        table.add_row(vec![
            Cell::new(simulation.mode.label()),
            Cell::new(colors),
            worst,
            risk_cell(simulation.impact),
        ]);
    }
    println!();
    println!("Color vision:");
    println!("{table}");
}

fn print_score_table(breakdown: &ScoreBreakdown) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Score"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let components = [
        ("Contrast compliance", breakdown.contrast_compliance, "50%"),
        ("Text readability", breakdown.text_readability, "25%"),
        ("Color blindness safety", breakdown.color_blindness_safety, "15%"),
        ("Palette quality", breakdown.palette_quality, "10%"),
    ];
    for (name, score, weight) in components {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{score:.1}")),
            dim_cell(weight),
        ]);
    }
    if breakdown.penalty > 0.0 {
        table.add_row(vec![
            Cell::new(format!(
                "Penalty ({} critical, {} moderate, {} minor)",
                breakdown.critical_failures, breakdown.moderate_failures, breakdown.minor_failures
            )),
            Cell::new(format!("-{:.0}", breakdown.penalty)).fg(Color::Red),
            dim_cell("-"),
        ]);
    }
    println!();
    println!("Score:");
    println!("{table}");
}

fn print_verdict(report: &AccessibilityReport) {
    let wcag = &report.wcag;
    let verdict = format!(
        "{}/100  grade {} ({})  WCAG {}",
        wcag.overall_score,
        wcag.grade,
        wcag.grade.description(),
        wcag.level
    );
    let mut table = Table::new();
    table.add_row(vec![grade_cell(wcag.grade, verdict)]);
    apply_table_style(&mut table);
    println!();
    println!("{table}");
    println!(
        "Risk: legal {}, user experience {}, brand {}",
        wcag.risk.legal, wcag.risk.user_experience, wcag.risk.brand
    );
    let recommendations = &report.recommendations;
    for (label, items) in [
        ("Immediate", &recommendations.immediate),
        ("Short term", &recommendations.short_term),
        ("Long term", &recommendations.long_term),
    ] {
        for item in items {
            println!("- {label}: {item}");
        }
    }
}

fn grade_cell(grade: Grade, text: String) -> Cell {
    let color = match grade {
        Grade::APlus | Grade::A => Color::Green,
        Grade::B | Grade::C => Color::Yellow,
        Grade::D | Grade::F => Color::Red,
    };
    Cell::new(text).fg(color).add_attribute(Attribute::Bold)
}

/// Hex label on its own color, with readable text on top.
fn swatch_cell(color: chroma_model::Color) -> Cell {
    let [r, g, b] = color.channels();
    let text = if perceived_brightness(color) > 0.5 {
        Color::Black
    } else {
        Color::White
    };
    Cell::new(color.to_hex()).bg(Color::Rgb { r, g, b }).fg(text)
}

fn recommendation_cell(recommendation: Recommendation) -> Cell {
    match recommendation {
        Recommendation::NoChange => dim_cell(recommendation),
        Recommendation::Replace(color) => swatch_cell(color),
        Recommendation::NoCandidate => Cell::new(recommendation).fg(Color::Yellow),
    }
}

fn feedback_cell(feedback: ContrastFeedback) -> Cell {
    let color = match feedback {
        ContrastFeedback::Pass => Color::Green,
        ContrastFeedback::PassWarning => Color::Yellow,
        ContrastFeedback::Fail => Color::Red,
    };
    Cell::new(feedback).fg(color)
}

fn risk_cell(risk: RiskLevel) -> Cell {
    let color = match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    Cell::new(risk).fg(color).add_attribute(Attribute::Bold)
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
