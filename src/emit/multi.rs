//! Multi-color bar chart emitter.
//!
//! Every bar is its own `\addplot` so it can carry its own palette
//! color; the x axis is symbolic (keyed by the raw category strings) with
//! the ticks suppressed, and the labels live in a manually synthesized
//! legend instead. The y axis runs in fixed steps of 25 up to the
//! smallest multiple of 25 that covers the data, never below 100.

use super::{Bar, format_value};
use crate::palette;
use crate::request::ChartRequest;

/// Y-axis tick step and default ceiling.
const Y_STEP: f64 = 25.0;
const Y_FLOOR: f64 = 100.0;

/// Smallest multiple of 25 at or above the maximum bar value, floored at
/// 100. An empty series gets the floor.
fn y_max(bars: &[Bar]) -> f64 {
    let max_value = bars.iter().map(|bar| bar.value).fold(f64::NEG_INFINITY, f64::max);
    if !max_value.is_finite() {
        return Y_FLOOR;
    }
    let ceiling = (max_value / Y_STEP).ceil() * Y_STEP;
    if ceiling < Y_FLOOR { Y_FLOOR } else { ceiling }
}

pub(super) fn render(bars: &[Bar], request: &ChartRequest) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass[border=10pt]{standalone}\n");
    doc.push_str("\\usepackage{tikz}\n");
    doc.push_str("\\usepackage{pgfplots}\n");
    doc.push_str("\\pgfplotsset{compat=1.18}\n\n");

    // One color definition per bar, capped at the palette size. Bars past
    // the cap keep their colorN reference; the missing definition only
    // surfaces at LaTeX compile time (known limitation).
    for index in 0..bars.len().min(palette::PALETTE.len()) {
        if let Some(line) = palette::define_color(index) {
            doc.push_str(&line);
            doc.push('\n');
        }
    }
    doc.push('\n');

    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{tikzpicture}\n");
    doc.push_str("\\begin{axis}[\n");
    doc.push_str("    ybar=0pt,\n");
    doc.push_str("    bar width=0.6cm,\n");
    doc.push_str("    bar shift=0pt,\n");
    doc.push_str("    width=16cm,\n");
    doc.push_str("    height=10cm,\n");

    if request.x_limits == 0.0 {
        doc.push_str("    enlarge x limits=0.15,\n");
    } else {
        doc.push_str(&format!("    enlarge x limits={},\n", request.x_limits));
    }

    if !request.x_label.is_empty() {
        doc.push_str(&format!("    xlabel={{{}}},\n", request.x_label));
    }
    if !request.y_label.is_empty() {
        doc.push_str(&format!("    ylabel={{{}}},\n", request.y_label));
    }

    let categories: Vec<&str> = bars.iter().map(|bar| bar.key.as_str()).collect();
    doc.push_str(&format!("    symbolic x coords={{{}}},\n", categories.join(",")));

    // Category labels go in the legend, not on the axis.
    doc.push_str("    xtick=\\empty,\n");

    let y_max = y_max(bars);
    doc.push_str("    ymin=0,\n");
    doc.push_str(&format!("    ymax={},\n", format_value(y_max)));

    doc.push_str("    ytick={0,25,50,75,100");
    let mut tick = 125;
    while tick as f64 <= y_max {
        doc.push_str(&format!(",{}", tick));
        tick += 25;
    }
    doc.push_str("},\n");

    doc.push_str("    ymajorgrids=true,\n");
    doc.push_str("    grid style={gray!30},\n");
    doc.push_str("    legend style={\n");
    doc.push_str("        at={(1.02,1)},\n");
    doc.push_str("        anchor=north west,\n");
    doc.push_str("        legend columns=1,\n");
    doc.push_str("        font=\\small,\n");
    doc.push_str("        draw=none,\n");
    doc.push_str("        /tikz/mark size=0pt,\n");
    doc.push_str("        legend cell align=left\n");
    doc.push_str("    },\n");

    if request.show_values {
        doc.push_str("    nodes near coords,\n");
        doc.push_str("    nodes near coords align={vertical},\n");
        doc.push_str("    every node near coord/.append style={font=\\footnotesize},\n");
    }

    doc.push_str("]\n\n");

    // One plot per bar so each can carry its own fill.
    for (index, bar) in bars.iter().enumerate() {
        let color = palette::color_name(index);
        doc.push_str("\\addplot[\n");
        doc.push_str("    forget plot,\n");
        doc.push_str("    ybar,\n");
        doc.push_str(&format!("    fill={},\n", color));
        doc.push_str(&format!("    draw={}\n", color));
        doc.push_str(&format!(
            "] coordinates {{({}, {})}};\n\n",
            bar.key,
            format_value(bar.value)
        ));
    }

    doc.push_str("% Legend\n");
    for (index, bar) in bars.iter().enumerate() {
        doc.push_str(&format!(
            "\\addlegendimage{{area legend, fill={}, draw=none}}\n",
            palette::color_name(index)
        ));
        doc.push_str(&format!("\\addlegendentry{{{}}}\n", bar.label));
    }

    doc.push_str("\n\\end{axis}\n");
    doc.push_str("\\end{tikzpicture}\n");
    doc.push_str("\\end{document}\n");
    doc
}
