//! Inline SVG drawing for chart panels.

use std::fmt::Write;

use crate::demos::chart::{BarGroup, ChartKind, ChartPanel, LineSeries, ScatterPoint};
use crate::render::html::escape;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 44.0;

const PALETTE: [&str; 4] = ["#4c78a8", "#f58518", "#54a24b", "#e45756"];

/// Linear map from a data range onto a pixel range.
#[derive(Debug, Clone, Copy)]
struct Scale {
    min: f64,
    max: f64,
    from: f64,
    to: f64,
}

impl Scale {
    fn new(min: f64, max: f64, from: f64, to: f64) -> Self {
        // Degenerate ranges still need a non-zero span.
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };
        Self { min, max, from, to }
    }

    fn padded(values: impl Iterator<Item = f64>, from: f64, to: f64) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            return Self::new(0.0, 1.0, from, to);
        }
        let pad = (max - min) * 0.05;
        Self::new(min - pad, max + pad, from, to)
    }

    fn map(&self, v: f64) -> f64 {
        self.from + (v - self.min) / (self.max - self.min) * (self.to - self.from)
    }
}

fn x_range() -> (f64, f64) {
    (MARGIN_LEFT, WIDTH - MARGIN_RIGHT)
}

fn y_range() -> (f64, f64) {
    (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP)
}

pub fn render_chart(panel: &ChartPanel) -> String {
    let mut out = format!(
        r#"<svg class="chart chart-{}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}" xmlns="http://www.w3.org/2000/svg">"#,
        panel.kind.name(),
        escape(&panel.title)
    );
    let _ = write!(
        out,
        r#"<text x="{MARGIN_LEFT}" y="18" class="chart-title">{}</text>"#,
        escape(&panel.title)
    );

    match &panel.kind {
        ChartKind::Scatter {
            x_label,
            y_label,
            points,
        } => scatter(&mut out, x_label, y_label, points),
        ChartKind::Line {
            x_label,
            y_label,
            x_values,
            series,
        } => line(&mut out, x_label, y_label, x_values, series),
        ChartKind::GroupedBar { categories, groups } => grouped_bar(&mut out, categories, groups),
    }

    out.push_str("</svg>");
    out
}

fn axes(out: &mut String, x: &Scale, y: &Scale, x_label: &str, y_label: &str) {
    let (x0, x1) = x_range();
    let (y0, y1) = y_range();
    let _ = write!(
        out,
        r##"<g class="axes" stroke="#9fb0d6" stroke-width="1"><line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}"/><line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}"/></g>"##
    );
    let _ = write!(
        out,
        r#"<text x="{x0}" y="{}" class="tick">{:.1}</text><text x="{x1}" y="{}" class="tick" text-anchor="end">{:.1}</text>"#,
        y0 + 14.0,
        x.min,
        y0 + 14.0,
        x.max
    );
    axis_labels(out, y, x_label, y_label);
}

fn axis_labels(out: &mut String, y: &Scale, x_label: &str, y_label: &str) {
    let (x0, x1) = x_range();
    let (y0, y1) = y_range();
    let _ = write!(
        out,
        r#"<text x="{}" y="{y0}" class="tick" text-anchor="end">{:.1}</text><text x="{}" y="{}" class="tick" text-anchor="end">{:.1}</text>"#,
        x0 - 4.0,
        y.min,
        x0 - 4.0,
        y1 + 4.0,
        y.max
    );
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" class="axis-label" text-anchor="middle">{}</text>"#,
        (x0 + x1) / 2.0,
        HEIGHT - 6.0,
        escape(x_label)
    );
    let _ = write!(
        out,
        r#"<text x="12" y="{}" class="axis-label" text-anchor="middle" transform="rotate(-90 12 {})">{}</text>"#,
        (y0 + y1) / 2.0,
        (y0 + y1) / 2.0,
        escape(y_label)
    );
}

fn legend(out: &mut String, names: &[&str]) {
    let (_, x1) = x_range();
    for (i, name) in names.iter().enumerate() {
        let y = MARGIN_TOP + 4.0 + i as f64 * 16.0;
        let x = x1 - 110.0;
        let _ = write!(
            out,
            r#"<rect x="{x}" y="{}" width="10" height="10" fill="{}"/><text x="{}" y="{}" class="legend">{}</text>"#,
            y - 9.0,
            PALETTE[i % PALETTE.len()],
            x + 14.0,
            y,
            escape(name)
        );
    }
}

fn scatter(out: &mut String, x_label: &str, y_label: &str, points: &[ScatterPoint]) {
    let (x0, x1) = x_range();
    let (y0, y1) = y_range();
    let x = Scale::padded(points.iter().map(|p| p.x), x0, x1);
    let y = Scale::padded(points.iter().map(|p| p.y), y0, y1);
    axes(out, &x, &y, x_label, y_label);

    let mut series: Vec<&str> = Vec::new();
    for p in points {
        if !series.contains(&p.series.as_str()) {
            series.push(&p.series);
        }
    }

    out.push_str(r#"<g class="points">"#);
    for p in points {
        let colour = series
            .iter()
            .position(|s| *s == p.series)
            .map(|i| PALETTE[i % PALETTE.len()])
            .unwrap_or(PALETTE[0]);
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{colour}" fill-opacity="0.8"><title>{}: ({}, {})</title></circle>"#,
            x.map(p.x),
            y.map(p.y),
            escape(&p.series),
            p.x,
            p.y
        );
    }
    out.push_str("</g>");
    legend(out, &series);
}

fn line(out: &mut String, x_label: &str, y_label: &str, x_values: &[String], series: &[LineSeries]) {
    let (x0, x1) = x_range();
    let (y0, y1) = y_range();
    let n = x_values.len().max(1);
    let x = Scale::new(0.0, (n - 1) as f64, x0, x1);
    let y = Scale::padded(
        series.iter().flat_map(|s| s.values.iter().flatten().copied()),
        y0,
        y1,
    );

    let _ = write!(
        out,
        r##"<g class="axes" stroke="#9fb0d6" stroke-width="1"><line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}"/><line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}"/></g>"##
    );
    if let (Some(first), Some(last)) = (x_values.first(), x_values.last()) {
        let _ = write!(
            out,
            r#"<text x="{x0}" y="{}" class="tick">{}</text><text x="{x1}" y="{}" class="tick" text-anchor="end">{}</text>"#,
            y0 + 14.0,
            escape(first),
            y0 + 14.0,
            escape(last)
        );
    }
    axis_labels(out, &y, x_label, y_label);

    for (i, s) in series.iter().enumerate() {
        let _ = write!(
            out,
            r#"<path class="series" fill="none" stroke="{}" stroke-width="1.5" d="{}"/>"#,
            PALETTE[i % PALETTE.len()],
            line_path(&s.values, &x, &y)
        );
    }

    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    legend(out, &names);
}

/// SVG path data; a gap (`None`) starts a new sub-path.
fn line_path(values: &[Option<f64>], x: &Scale, y: &Scale) -> String {
    let mut d = String::new();
    let mut pen_down = false;
    for (i, v) in values.iter().enumerate() {
        match v {
            Some(v) => {
                let cmd = if pen_down { 'L' } else { 'M' };
                let _ = write!(d, "{cmd}{:.1},{:.1} ", x.map(i as f64), y.map(*v));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    d.trim_end().to_string()
}

fn grouped_bar(out: &mut String, categories: &[String], groups: &[BarGroup]) {
    let (x0, x1) = x_range();
    let (y0, y1) = y_range();
    let max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let y = Scale::new(0.0, if max > 0.0 { max * 1.1 } else { 1.0 }, y0, y1);

    let _ = write!(
        out,
        r##"<g class="axes" stroke="#9fb0d6" stroke-width="1"><line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}"/><line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}"/></g>"##
    );
    axis_labels(out, &y, "model", "value");

    let slot = (x1 - x0) / categories.len().max(1) as f64;
    let bar = slot * 0.8 / groups.len().max(1) as f64;

    for (c, category) in categories.iter().enumerate() {
        let left = x0 + slot * c as f64 + slot * 0.1;
        for (g, group) in groups.iter().enumerate() {
            let Some(value) = group.values.get(c) else {
                continue;
            };
            let top = y.map(*value);
            let _ = write!(
                out,
                r#"<rect class="bar" x="{:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {} {}</title></rect>"#,
                left + bar * g as f64,
                bar,
                (y0 - top).max(0.0),
                PALETTE[g % PALETTE.len()],
                escape(category),
                escape(&group.name),
                value
            );
        }
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{}" class="tick" text-anchor="middle">{}</text>"#,
            x0 + slot * (c as f64 + 0.5),
            y0 + 14.0,
            escape(category)
        );
    }

    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    legend(out, &names);
}
