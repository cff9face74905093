//! Draws a [`ChartLayout`] as a standalone SVG document.

use std::f64::consts::TAU;

use crate::core::services::{ChartLayout, Point, Wedge};

const LABEL_FONT: &str = r##"font-family="Arial" font-size="14" fill="#000" text-anchor="middle""##;
const PLACEHOLDER_FONT: &str =
    r##"font-family="Arial" font-size="16" fill="#333" text-anchor="middle""##;

pub fn render_svg(layout: &ChartLayout, size: f64) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    svg.push('\n');
    match layout {
        ChartLayout::Empty { message } => {
            svg.push_str(&text_element(
                Point {
                    x: size / 2.0,
                    y: size / 2.0,
                },
                PLACEHOLDER_FONT,
                message,
            ));
        }
        ChartLayout::Pie {
            center,
            radius,
            wedges,
        } => {
            for wedge in wedges {
                svg.push_str(&format!("  {}\n", wedge_shape(wedge, *center, *radius)));
            }
            for wedge in wedges {
                svg.push_str(&text_element(wedge.label_at, LABEL_FONT, &wedge.label));
            }
        }
    }
    svg.push_str("</svg>\n");
    svg
}

fn text_element(at: Point, font: &str, text: &str) -> String {
    format!(
        "  <text x=\"{}\" y=\"{}\" {font}>{}</text>\n",
        fmt_coord(at.x),
        fmt_coord(at.y),
        escape(text)
    )
}

fn wedge_shape(wedge: &Wedge, center: Point, radius: f64) -> String {
    // An arc cannot start and end on the same point, so a lone category is a circle.
    if wedge.sweep >= TAU - 1e-9 {
        return format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_coord(center.x),
            fmt_coord(center.y),
            fmt_coord(radius),
            wedge.color
        );
    }
    let start = Point::on_circle(center, radius, wedge.start_angle);
    let end = Point::on_circle(center, radius, wedge.end_angle());
    let large_arc = u8::from(wedge.sweep > TAU / 2.0);
    format!(
        r#"<path d="M {} {} L {} {} A {} {} 0 {} 1 {} {} Z" fill="{}"/>"#,
        fmt_coord(center.x),
        fmt_coord(center.y),
        fmt_coord(start.x),
        fmt_coord(start.y),
        fmt_coord(radius),
        fmt_coord(radius),
        large_arc,
        fmt_coord(end.x),
        fmt_coord(end.y),
        wedge.color
    )
}

fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".into()
    } else {
        rounded.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{chart_service::CHART_PLACEHOLDER, ExpenseBreakdown, SummaryService};
    use crate::domain::{CategoryRegistry, MonthCursor, Transaction};
    use chrono::NaiveDate;

    fn layout(txns: &[Transaction]) -> ChartLayout {
        let mut registry = CategoryRegistry::new();
        registry.add("R&D", "🔬").unwrap();
        let cursor = MonthCursor::new(2, 2024).unwrap();
        let summary = SummaryService::summarize(txns, cursor, &registry);
        ChartLayout::compute(&ExpenseBreakdown::from_summary(&summary), 400.0)
    }

    fn on(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn empty_layout_renders_placeholder_text() {
        let svg = render_svg(&layout(&[]), 400.0);
        assert!(svg.contains(CHART_PLACEHOLDER));
        assert!(svg.contains(r#"x="200" y="200""#));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn single_wedge_is_drawn_as_circle() {
        let svg = render_svg(&layout(&[Transaction::new("Food", 5.0, "expense", on(1))]), 400.0);
        assert!(svg.contains(r##"<circle cx="200" cy="200" r="180" fill="#FF6384"/>"##));
        assert!(svg.contains("expense (100.0%)"));
    }

    #[test]
    fn wedges_become_paths_with_escaped_labels() {
        let svg = render_svg(
            &layout(&[
                Transaction::new("Food", 30.0, "expense", on(1)),
                Transaction::new("Lab", 10.0, "R&D", on(2)),
            ]),
            400.0,
        );
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("R&amp;D (25.0%)"));
        assert!(svg.contains(r##"fill="#36A2EB""##));
        assert!(svg.contains("A 180 180 0 1 1"));
    }

    #[test]
    fn document_has_one_element_per_line() {
        let svg = render_svg(
            &layout(&[
                Transaction::new("Food", 30.0, "expense", on(1)),
                Transaction::new("Lab", 10.0, "R&D", on(2)),
            ]),
            400.0,
        );
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("<svg "));
        assert!(lines[1..5].iter().all(|line| line.starts_with("  <")));
        assert_eq!(lines[5], "</svg>");
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn first_wedge_starts_on_the_positive_x_axis() {
        let svg = render_svg(
            &layout(&[
                Transaction::new("Food", 30.0, "expense", on(1)),
                Transaction::new("Lab", 10.0, "R&D", on(2)),
            ]),
            400.0,
        );
        assert!(svg.contains(r#"<path d="M 200 200 L 380 200 A"#));
    }

    #[test]
    fn output_is_stable_across_renders() {
        let txns = [
            Transaction::new("Food", 30.0, "expense", on(1)),
            Transaction::new("Lab", 10.0, "R&D", on(2)),
        ];
        assert_eq!(render_svg(&layout(&txns), 400.0), render_svg(&layout(&txns), 400.0));
    }
}
