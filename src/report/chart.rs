use std::fmt::Write as _;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::calculator::Assessment;
use crate::error::FootprintError;

pub const CHART_TITLE: &str = "Carbon Emissions by Activity";
pub const X_LABEL: &str = "Activity";
pub const Y_LABEL: &str = "Emissions (kg CO2)";
pub const TOTAL_LEGEND: &str = "Total Emissions";

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const SVG_SIZE: (u32, u32) = (1000, 600);

/// Console bar chart: one bar per activity, scaled so the total spans `width`
/// columns, followed by the dashed total reference line.
pub fn render_text(assessment: &Assessment, width: usize) -> String {
    let width = width.max(1);
    let label_width = assessment
        .lines()
        .iter()
        .map(|l| l.activity.chars().count())
        .chain([TOTAL_LEGEND.len(), X_LABEL.len()])
        .max()
        .unwrap_or(0);
    let scale = assessment
        .lines()
        .iter()
        .map(|l| l.emissions)
        .fold(assessment.total(), f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    let _ = writeln!(out, "{:<label_width$} | {Y_LABEL}", X_LABEL);
    let _ = writeln!(out, "{}-+-{}", "-".repeat(label_width), "-".repeat(width));
    for line in assessment.lines() {
        let len = bar_len(line.emissions, scale, width);
        let _ = writeln!(
            out,
            "{:<label_width$} | {} {:.2}",
            line.activity,
            "#".repeat(len),
            line.emissions
        );
    }
    let len = bar_len(assessment.total(), scale, width);
    let dashes: String = (0..len).map(|i| if i % 2 == 0 { '-' } else { ' ' }).collect();
    let _ = writeln!(
        out,
        "{:<label_width$} | {} {:.2}",
        TOTAL_LEGEND,
        dashes,
        assessment.total()
    );
    out
}

fn bar_len(value: f64, scale: f64, width: usize) -> usize {
    if scale <= 0.0 {
        return 0;
    }
    ((value / scale) * width as f64).round().clamp(0.0, width as f64) as usize
}

fn chart_err<E: std::fmt::Display>(e: E) -> FootprintError {
    FootprintError::Chart(e.to_string())
}

/// Draw the bar chart with the total reference line to an SVG file.
pub fn save_svg(path: impl AsRef<Path>, assessment: &Assessment) -> Result<(), FootprintError> {
    let path = path.as_ref();
    let labels: Vec<&str> = assessment
        .lines()
        .iter()
        .map(|l| l.activity.as_str())
        .collect();
    let slots = labels.len().max(1);
    let total = assessment.total();
    let peak = assessment
        .lines()
        .iter()
        .map(|l| l.emissions)
        .fold(total, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, SVG_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..slots).into_segmented(), 0f64..y_max)
        .map_err(chart_err)?;

    let label_for = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_for)
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(10)
                .data(
                    assessment
                        .lines()
                        .iter()
                        .enumerate()
                        .map(|(i, l)| (i, l.emissions)),
                ),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            vec![(SegmentValue::Exact(0), total), (SegmentValue::Last, total)],
            RED.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(TOTAL_LEGEND)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!(path = %path.display(), "saved chart");
    Ok(())
}
