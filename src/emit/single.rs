//! Single-series bar chart emitter.
//!
//! One uniformly colored `ybar` series over numeric x-tick positions
//! `1..n`, with the category labels as tick text. When label wrapping is
//! enabled the rotated tick style gives way to a fixed small-font
//! centered style, since rotated multi-line ticks collide with the axis.

use super::{Bar, format_value};
use crate::layout::BarLayout;
use crate::request::ChartRequest;

pub(super) fn render(bars: &[Bar], request: &ChartRequest) -> String {
    let layout = BarLayout::for_bar_count(bars.len());
    let enlarge = if request.x_limits != 0.0 {
        request.x_limits
    } else {
        layout.enlarge_x_limits
    };

    let mut doc = String::new();
    doc.push_str("\\documentclass[tikz, border=1mm]{standalone}\n");
    doc.push_str("\\usepackage[HTML]{xcolor}\n");
    doc.push_str("\\usepackage{pgfplots}\n");
    doc.push_str("\\pgfplotsset{compat=1.18}\n");
    doc.push_str("\\definecolor{barblue}{HTML}{46a5ff}\n\n");
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{tikzpicture}\n");
    doc.push_str("\\begin{axis}[\n");
    doc.push_str("    width=14cm,\n");
    doc.push_str("    height=7cm,\n");
    doc.push_str("    ybar,\n");
    doc.push_str(&format!("    xlabel={},\n", request.x_label));
    doc.push_str(&format!("    ylabel={},\n", request.y_label));
    doc.push_str("    ymin=0,\n");
    doc.push_str("    xtick=data,\n");

    let ticks: Vec<String> = bars.iter().map(|bar| format!("{{{}}}", bar.label)).collect();
    doc.push_str(&format!("    xticklabels={{{}}},\n", ticks.join(",")));

    if request.x_label_max_line_length > 0 {
        doc.push_str("    xticklabel style={font=\\small,align=center},\n");
    } else {
        doc.push_str(&format!(
            "    xticklabel style={{rotate={},anchor=east}},\n",
            request.label_rotation
        ));
    }

    doc.push_str(&format!("    bar width={:.1}pt,\n", layout.bar_width_pt));
    doc.push_str("    grid=major,\n");
    doc.push_str("    xmajorgrids=false,\n");
    doc.push_str(&format!("    enlarge x limits={},\n", enlarge));
    doc.push_str("    reverse legend,\n");
    doc.push_str("]\n");

    doc.push_str("\\addplot+[\n");
    doc.push_str("    fill=barblue,\n");
    doc.push_str("]\n");
    doc.push_str("coordinates {\n");
    for (i, bar) in bars.iter().enumerate() {
        doc.push_str(&format!(
            "    ({},{})  % {{{}}}\n",
            i + 1,
            format_value(bar.value),
            bar.label
        ));
    }
    doc.push_str("};\n");

    doc.push_str("\\end{axis}\n");
    doc.push_str("\\end{tikzpicture}\n");
    doc.push_str("\\end{document}\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ChartRequest;

    fn bar(value: f64, label: &str) -> Bar {
        Bar {
            value,
            label: label.to_string(),
            key: label.to_string(),
        }
    }

    fn request() -> ChartRequest {
        ChartRequest::builder()
            .table("T")
            .range("A1:B9")
            .x_label("Year")
            .y_label("Articles")
            .build()
            .unwrap()
    }

    #[test]
    fn test_rotated_ticks_by_default() {
        let doc = render(&[bar(5.0, "2023"), bar(7.0, "2024")], &request());
        assert!(doc.contains("    xticklabel style={rotate=45,anchor=east},\n"));
        assert!(doc.contains("    xticklabels={{2023},{2024}},\n"));
        assert!(doc.contains("    (1,5)  % {2023}\n"));
        assert!(doc.contains("    (2,7)  % {2024}\n"));
    }

    #[test]
    fn test_wrapping_replaces_rotation() {
        let mut req = request();
        req.x_label_max_line_length = 15;
        req.label_rotation = 60;
        let doc = render(&[bar(5.0, "a")], &req);
        assert!(doc.contains("    xticklabel style={font=\\small,align=center},\n"));
        assert!(!doc.contains("rotate=60"));
    }

    #[test]
    fn test_layout_drives_width_and_enlargement() {
        // 2 bars clamp to the 5-bar end of the design range.
        let doc = render(&[bar(1.0, "a"), bar(2.0, "b")], &request());
        assert!(doc.contains("    bar width=40.0pt,\n"));
        assert!(doc.contains("    enlarge x limits=0.2,\n"));
    }

    #[test]
    fn test_x_limits_override() {
        let mut req = request();
        req.x_limits = 0.35;
        let doc = render(&[bar(1.0, "a")], &req);
        assert!(doc.contains("    enlarge x limits=0.35,\n"));
    }

    #[test]
    fn test_empty_input_is_complete_document() {
        let doc = render(&[], &request());
        assert!(doc.starts_with("\\documentclass[tikz, border=1mm]{standalone}\n"));
        assert!(doc.contains("    xticklabels={},\n"));
        assert!(doc.contains("coordinates {\n};\n"));
        assert!(doc.ends_with("\\end{document}\n"));
    }
}
