//! Inline SVG rendering of the equity curve.

use crate::domain::equity::EquityPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 40.0;

/// Render the equity curve as a standalone `<svg>` line chart. An empty curve
/// yields a short placeholder paragraph instead of an empty plot.
pub fn render_equity_svg(curve: &[EquityPoint]) -> String {
    if curve.is_empty() {
        return "<p class=\"empty-chart\">No trades recorded yet.</p>".to_string();
    }

    let min_equity = curve.iter().map(|p| p.equity).fold(f64::INFINITY, f64::min);
    let max_equity = curve
        .iter()
        .map(|p| p.equity)
        .fold(f64::NEG_INFINITY, f64::max);

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let range = max_equity - min_equity;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = if curve.len() > 1 {
        plot_width / (curve.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<String> = curve
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PADDING + i as f64 * scale_x;
            let y = HEIGHT - PADDING - (point.equity - min_equity) * scale_y;
            format!("{x:.1},{y:.1}")
        })
        .collect();
    let polyline = points.join(" ");

    format!(
        r##"<svg viewBox="0 0 {w:.0} {h:.0}" width="{w:.0}" height="{h:.0}" role="img" aria-label="Equity curve">
  <line x1="{pad:.0}" y1="{pad:.0}" x2="{pad:.0}" y2="{y_end:.0}" stroke="#888" stroke-width="1"/>
  <line x1="{pad:.0}" y1="{y_end:.0}" x2="{x_end:.0}" y2="{y_end:.0}" stroke="#888" stroke-width="1"/>
  <text x="{pad:.0}" y="{label_y:.0}" font-size="10" fill="#555">{max:.2}</text>
  <text x="{pad:.0}" y="{y_label:.0}" font-size="10" fill="#555">{min:.2}</text>
  <polyline fill="none" stroke="#1a56a0" stroke-width="1.5" points="{polyline}"/>
</svg>"##,
        w = WIDTH,
        h = HEIGHT,
        pad = PADDING,
        y_end = HEIGHT - PADDING,
        x_end = WIDTH - PADDING,
        label_y = PADDING - 6.0,
        y_label = HEIGHT - PADDING + 12.0,
        max = max_equity,
        min = min_equity,
        polyline = polyline,
    )
}
