use std::io::{BufRead, Write};

use tracing::info;

use crate::calculator::{Assessment, Calculator};
use crate::config::Settings;
use crate::entries::Category;
use crate::error::FootprintError;
use crate::factors::EmissionFactorTable;
use crate::input::Prompter;
use crate::report;

/// One interactive run: collect travel then energy entries, total them,
/// and feed the result to every report sink.
///
/// Any lookup failure aborts before anything is written.
pub fn run_session<R: BufRead, W: Write>(
    table: &EmissionFactorTable,
    settings: &Settings,
    reader: R,
    writer: W,
) -> Result<Assessment, FootprintError> {
    let mut prompter = Prompter::new(reader, writer);

    writeln!(prompter.writer(), "{}", Category::Travel.heading())?;
    let travel = prompter.collect(Category::Travel)?;
    writeln!(prompter.writer(), "\n{}", Category::Energy.heading())?;
    let energy = prompter.collect(Category::Energy)?;
    info!(travel = travel.len(), energy = energy.len(), "input collected");

    let assessment = Calculator::new(table).assess(&travel, &energy)?;

    let (_, mut out) = prompter.into_inner();
    writeln!(
        out,
        "\nTotal Carbon Emissions: {:.2} kg CO2",
        assessment.total()
    )?;

    report::save_results(&settings.results_path, &assessment)?;

    if settings.show_chart {
        writeln!(out)?;
        write!(out, "{}", report::render_text(&assessment, settings.chart_width))?;
    }
    if let Some(path) = &settings.chart_path {
        report::save_svg(path, &assessment)?;
    }

    report::write_narrative(&mut out, assessment.total(), &settings.narrative)?;
    out.flush()?;
    Ok(assessment)
}
