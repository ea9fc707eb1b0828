//! Interactive HTML chart of intervals, subintervals and medians.
//!
//! The page loads plotly.js from its CDN and embeds the trace data as JSON.
//! Rows along the y axis: input interval `i` at `i + 1`, the partition at
//! `0`, and the medians `Me1`, `Me2`, `Me3` at `-1`, `-2`, `-3`. Dashed
//! vertical lines mark every breakpoint.

use crate::error::Result;
use intermedian_domain::{Analysis, Interval};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Lowest row used by the median traces.
const BOTTOM_ROW: f64 = -3.0;

/// Build the plotly trace list.
pub fn chart_traces(intervals: &[Interval], analysis: &Analysis) -> Vec<Value> {
    let mut traces = Vec::new();

    let rows: Vec<f64> = (1..=intervals.len()).map(|i| i as f64).collect();
    traces.push(interval_trace("interval", intervals, &rows));

    let zeros = vec![0.0; analysis.subintervals.len()];
    traces.push(interval_trace("subinterval", &analysis.subintervals, &zeros));

    for (row, (label, median)) in analysis.medians().into_iter().enumerate() {
        traces.push(interval_trace(label, &[median], &[-(row as f64) - 1.0]));
    }

    let top = intervals.len() as f64;
    let boundaries = analysis
        .subintervals
        .first()
        .map(Interval::min)
        .into_iter()
        .chain(analysis.subintervals.iter().map(Interval::max));
    traces.extend(boundaries.map(|x| boundary_trace(x, top)));

    traces
}

/// Build the plotly layout.
pub fn chart_layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "xaxis": { "dtick": 1, "title": { "text": "" } },
        "yaxis": { "showticklabels": false, "visible": false },
        "legend": { "title": { "text": "type" } },
    })
}

/// Render a standalone HTML document.
pub fn render_chart(intervals: &[Interval], analysis: &Analysis, title: &str) -> Result<String> {
    let data = script_safe(&serde_json::to_string(&chart_traces(intervals, analysis))?);
    let layout = script_safe(&serde_json::to_string(&chart_layout(title))?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:90vh;"></div>
<script>
Plotly.newPlot("chart", {data}, {layout}, {{"responsive": true}});
</script>
</body>
</html>
"#,
        title = escape_html(title),
        cdn = PLOTLY_CDN,
        data = data,
        layout = layout,
    ))
}

/// Render and write the chart to `path`.
pub fn write_chart(
    path: &Path,
    intervals: &[Interval],
    analysis: &Analysis,
    title: &str,
) -> Result<()> {
    let html = render_chart(intervals, analysis, title)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

fn interval_trace(name: &str, intervals: &[Interval], rows: &[f64]) -> Value {
    let mids: Vec<f64> = intervals.iter().map(Interval::mid).collect();
    let rads: Vec<f64> = intervals.iter().map(Interval::rad).collect();
    let labels: Vec<String> = intervals.iter().map(ToString::to_string).collect();

    json!({
        "type": "scatter",
        "mode": "markers",
        "name": name,
        "x": mids,
        "y": rows,
        "text": labels,
        "hoverinfo": "text+name",
        "error_x": { "type": "data", "array": rads, "visible": true },
    })
}

fn boundary_trace(x: f64, top: f64) -> Value {
    json!({
        "type": "scatter",
        "mode": "lines",
        "x": [x, x],
        "y": [BOTTOM_ROW, top],
        "line": { "color": "black", "width": 1, "dash": "dash" },
        "hoverinfo": "skip",
        "showlegend": false,
    })
}

/// Keep embedded JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
