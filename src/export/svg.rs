//! Static SVG rendering of a point set: scatter markers over the ideal circle.

use crate::chart::{circle_outline, ChartLayout};
use crate::constants;
use crate::types::{ChartStyle, PointSet};
use std::fmt::Write as _;

/// Options for [`build_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Width and height of the square image in pixels
    pub size_px: u32,
    /// Fill the canvas with white before drawing
    pub include_background: bool,
    /// Draw dotted grid lines at tick positions
    pub include_grid: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size_px: constants::CHART_SIZE_PX,
            include_background: true,
            include_grid: true,
        }
    }
}

/// Build an SVG string for the given point set. Returns (svg, width, height).
pub fn build_svg(set: &PointSet, style: &ChartStyle, options: &SvgOptions) -> (String, u32, u32) {
    let layout = ChartLayout::new(set, &style.unit);
    let size = options.size_px.max(1);
    let (width, height) = (size, size);

    // Square plot area keeps both axes on one scale
    let (pad_l, pad_t, pad_r, pad_b) = constants::PLOT_PADDING;
    let avail_w = (width as f32 - pad_l - pad_r).max(1.0);
    let avail_h = (height as f32 - pad_t - pad_b).max(1.0);
    let plot = avail_w.min(avail_h);
    let left = pad_l + (avail_w - plot) / 2.0;
    let top = pad_t + (avail_h - plot) / 2.0;

    let map = |x: f64, y: f64| {
        let (u, v) = layout.to_unit(x, y);
        (left + u as f32 * plot, top + (1.0 - v as f32) * plot)
    };

    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        width, height, width, height
    );

    if options.include_background {
        let _ = writeln!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\" />",
            width, height
        );
    }

    // Grid
    if options.include_grid {
        let _ = writeln!(
            out,
            "<g stroke=\"#b0b0b0\" stroke-opacity=\"0.7\" stroke-width=\"0.8\" stroke-dasharray=\"1,2\">"
        );
        for &t in &layout.x_ticks {
            let (sx, _) = map(t, 0.0);
            let _ = writeln!(
                out,
                "  <line x1=\"{sx:.1}\" y1=\"{y0:.1}\" x2=\"{sx:.1}\" y2=\"{y1:.1}\" />",
                sx = sx,
                y0 = top,
                y1 = top + plot
            );
        }
        for &t in &layout.y_ticks {
            let (_, sy) = map(0.0, t);
            let _ = writeln!(
                out,
                "  <line x1=\"{x0:.1}\" y1=\"{sy:.1}\" x2=\"{x1:.1}\" y2=\"{sy:.1}\" />",
                sy = sy,
                x0 = left,
                x1 = left + plot
            );
        }
        let _ = writeln!(out, "</g>");
    }

    // Axes frame
    let _ = writeln!(
        out,
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"#000\" stroke-width=\"1\" />",
        left, top, plot, plot
    );

    // Tick marks and labels
    let _ = writeln!(out, "<g font-size=\"11\" fill=\"#000\" font-family=\"sans-serif\">");
    for &t in &layout.x_ticks {
        let (sx, _) = map(t, 0.0);
        let _ = writeln!(
            out,
            "  <line x1=\"{sx:.1}\" y1=\"{y:.1}\" x2=\"{sx:.1}\" y2=\"{y2:.1}\" stroke=\"#000\" />",
            sx = sx,
            y = top + plot,
            y2 = top + plot + 4.0
        );
        let _ = writeln!(
            out,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" dominant-baseline=\"hanging\">{}</text>",
            sx,
            top + plot + 7.0,
            escape_xml(&layout.tick_label(t))
        );
    }
    for &t in &layout.y_ticks {
        let (_, sy) = map(0.0, t);
        let _ = writeln!(
            out,
            "  <line x1=\"{x:.1}\" y1=\"{sy:.1}\" x2=\"{x2:.1}\" y2=\"{sy:.1}\" stroke=\"#000\" />",
            sy = sy,
            x = left - 4.0,
            x2 = left
        );
        let _ = writeln!(
            out,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" dominant-baseline=\"central\">{}</text>",
            left - 7.0,
            sy,
            escape_xml(&layout.tick_label(t))
        );
    }
    let _ = writeln!(out, "</g>");

    // Axis labels and title
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" font-family=\"sans-serif\" text-anchor=\"middle\">{}</text>",
        left + plot / 2.0,
        height as f32 - 12.0,
        escape_xml(&layout.x_label)
    );
    let (ylx, yly) = (16.0_f32, top + plot / 2.0);
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" font-family=\"sans-serif\" text-anchor=\"middle\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>",
        ylx, yly, ylx, yly,
        escape_xml(&layout.y_label)
    );
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" font-family=\"sans-serif\" text-anchor=\"middle\">{}</text>",
        left + plot / 2.0,
        top - 16.0,
        escape_xml(&layout.title)
    );

    // Ideal circle, dashed
    let mut d = String::new();
    for (i, (x, y)) in circle_outline(set.spec()).into_iter().enumerate() {
        let (sx, sy) = map(x, y);
        if i == 0 {
            let _ = write!(d, "M{:.2},{:.2}", sx, sy);
        } else {
            let _ = write!(d, " L{:.2},{:.2}", sx, sy);
        }
    }
    let _ = writeln!(
        out,
        "<path d=\"{}\" fill=\"none\" stroke=\"#1f77b4\" stroke-opacity=\"0.6\" stroke-width=\"1.5\" stroke-dasharray=\"6,4\" />",
        d
    );

    // Markers
    let _ = writeln!(
        out,
        "<g fill=\"{}\" stroke=\"#000\" stroke-width=\"1\">",
        style.color.to_hex()
    );
    for p in set.points() {
        let (sx, sy) = map(p.x, p.y);
        let _ = writeln!(
            out,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" />",
            sx,
            sy,
            constants::MARKER_RADIUS
        );
    }
    let _ = writeln!(out, "</g>");

    // Index labels, anchored bottom-left at the point
    if style.show_labels {
        let _ = writeln!(out, "<g font-size=\"9\" font-family=\"sans-serif\" fill=\"#000\">");
        for p in set.points() {
            let (sx, sy) = map(p.x, p.y);
            let _ = writeln!(
                out,
                "  <text x=\"{:.1}\" y=\"{:.1}\">{}</text>",
                sx + constants::LABEL_OFFSET,
                sy - constants::LABEL_OFFSET,
                p.index
            );
        }
        let _ = writeln!(out, "</g>");
    }

    let _ = writeln!(out, "</svg>");

    (out, width, height)
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn one_marker_per_point() {
        let set = generate((0.0, 0.0), 5.0, 12, 0.0).unwrap();
        let (svg, w, h) = build_svg(&set, &ChartStyle::default(), &SvgOptions::default());
        assert_eq!((w, h), (constants::CHART_SIZE_PX, constants::CHART_SIZE_PX));
        assert_eq!(svg.matches("<circle ").count(), 12);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn markers_use_configured_color() {
        let set = generate((0.0, 0.0), 1.0, 3, 0.0).unwrap();
        let style = ChartStyle {
            color: crate::types::PointColor([255, 0, 16]),
            ..ChartStyle::default()
        };
        let (svg, _, _) = build_svg(&set, &style, &SvgOptions::default());
        assert!(svg.contains("fill=\"#ff0010\""));
    }

    #[test]
    fn labels_follow_toggle() {
        let set = generate((0.0, 0.0), 1.0, 4, 0.0).unwrap();
        let mut style = ChartStyle::default();
        let (with_labels, _, _) = build_svg(&set, &style, &SvgOptions::default());
        assert!(with_labels.contains(">4</text>"));

        style.show_labels = false;
        let (without, _, _) = build_svg(&set, &style, &SvgOptions::default());
        assert!(!without.contains(">4</text>"));
    }

    #[test]
    fn ticks_and_title_carry_unit() {
        let set = generate((0.0, 0.0), 5.0, 6, 0.0).unwrap();
        let style = ChartStyle {
            unit: "km".into(),
            ..ChartStyle::default()
        };
        let (svg, _, _) = build_svg(&set, &style, &SvgOptions::default());
        assert!(svg.contains(">2 km</text>"));
        assert!(svg.contains("x [km]"));
        assert!(svg.contains("Points: 6 | radius 5 km | center (0, 0)"));
    }

    #[test]
    fn user_text_is_escaped() {
        let set = generate((0.0, 0.0), 1.0, 2, 0.0).unwrap();
        let style = ChartStyle {
            unit: "<m&>".into(),
            ..ChartStyle::default()
        };
        let (svg, _, _) = build_svg(&set, &style, &SvgOptions::default());
        assert!(svg.contains("&lt;m&amp;&gt;"));
        assert!(!svg.contains("<m&>"));
    }

    #[test]
    fn first_point_maps_right_of_center() {
        let set = generate((0.0, 0.0), 5.0, 4, 0.0).unwrap();
        let options = SvgOptions {
            include_grid: false,
            ..SvgOptions::default()
        };
        let (svg, _, _) = build_svg(&set, &ChartStyle::default(), &options);
        let first = svg
            .lines()
            .find(|l| l.trim_start().starts_with("<circle "))
            .unwrap();
        let cx: f32 = first
            .split("cx=\"")
            .nth(1)
            .and_then(|s| s.split('"').next())
            .and_then(|s| s.parse().ok())
            .unwrap();
        assert!(cx > constants::CHART_SIZE_PX as f32 / 2.0);
    }

    #[test]
    fn escape_covers_all_entities() {
        assert_eq!(escape_xml("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&apos;");
    }
}
