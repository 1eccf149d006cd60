//! Chart Components
//!
//! Frequency line chart on HTML5 Canvas, plus simple div-based bar and
//! share-breakdown charts.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Brand accent used for single-series charts
const SERIES_COLOR: &str = "#ff4444";

/// One trigger's slice of the overall attack count
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerShare {
    pub name: &'static str,
    pub frequency: f64,
    pub color: &'static str,
}

/// Percentage of the total that each entry contributes.
pub fn share_percentages(entries: &[TriggerShare]) -> Vec<f64> {
    let total: f64 = entries.iter().map(|e| e.frequency).sum();
    if total <= 0.0 {
        return vec![0.0; entries.len()];
    }
    entries.iter().map(|e| e.frequency / total * 100.0).collect()
}

/// Top of the y-axis for a count series: the maximum plus 10% headroom.
fn padded_max(data: &[f64]) -> f64 {
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Line chart of per-month attack counts.
#[component]
pub fn FrequencyLineChart(
    data: Vec<f64>,
    labels: Vec<&'static str>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let series = store_value((data, labels));

    // Draw once the canvas is attached.
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            series.with_value(|(data, labels)| draw_line_chart(&canvas, data, labels));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-56 rounded-lg"
        />
    }
}

/// Draw the line chart on canvas
fn draw_line_chart(canvas: &HtmlCanvasElement, data: &[f64], labels: &[&'static str]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
        return;
    }

    let y_max = padded_max(data);

    // Draw grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 8.0, y + 4.0);
    }

    // Evenly spaced x positions; a single point sits at the left edge.
    let x_at = |i: usize| {
        let divisions = (data.len() - 1).max(1) as f64;
        margin_left + (i as f64 / divisions) * chart_width
    };
    let y_at = |value: f64| margin_top + ((y_max - value) / y_max) * chart_height;

    // Polyline
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in data.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(*value));
        } else {
            ctx.line_to(x_at(i), y_at(*value));
        }
    }
    ctx.stroke();

    // Point dots
    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, value) in data.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(*value), 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, label) in labels.iter().enumerate().take(data.len()) {
        let _ = ctx.fill_text(label, x_at(i) - 10.0, height - 12.0);
    }
}

/// Vertical bar chart scaled to the series maximum.
#[component]
pub fn TriggerBarChart(
    data: Vec<f64>,
    labels: Vec<&'static str>,
) -> impl IntoView {
    let max = padded_max(&data);

    view! {
        <div class="flex items-end space-x-2 h-48">
            {data.into_iter().zip(labels).map(|(value, label)| {
                let height_percent = (value / max * 100.0) as i32;
                view! {
                    <div class="flex-1 flex flex-col items-center justify-end h-full">
                        <div
                            class="w-3/4 rounded-t"
                            style=format!(
                                "height: {}%; background-color: {}",
                                height_percent, SERIES_COLOR,
                            )
                        />
                        <span class="text-xs text-gray-400 mt-2">{label}</span>
                        <span class="text-xs font-bold">{format!("{:.0}%", value)}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Horizontal share bars: one row per trigger with its slice of the total.
#[component]
pub fn TriggerShareList(entries: Vec<TriggerShare>) -> impl IntoView {
    let percentages = share_percentages(&entries);

    view! {
        <div class="space-y-3">
            {entries.into_iter().zip(percentages).map(|(entry, percent)| view! {
                <div class="flex items-center space-x-3">
                    <div class="flex items-center space-x-2 w-28">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", entry.color)
                        />
                        <span class="text-sm">{entry.name}</span>
                    </div>
                    <div class="flex-1 bg-gray-600 rounded-full h-2">
                        <div
                            class="rounded-full h-2 transition-all"
                            style=format!(
                                "width: {}%; background-color: {}",
                                percent, entry.color,
                            )
                        />
                    </div>
                    <span class="text-sm font-medium w-12 text-right">
                        {format!("{:.0}%", entry.frequency)}
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_percentages_sum_to_hundred() {
        let entries = [
            TriggerShare { name: "Stress", frequency: 35.0, color: "#ff4444" },
            TriggerShare { name: "Weather", frequency: 25.0, color: "#ffaa00" },
            TriggerShare { name: "Other", frequency: 40.0, color: "#95a5a6" },
        ];
        let percents = share_percentages(&entries);

        assert_eq!(percents.len(), 3);
        assert_eq!(percents[0], 35.0);
        assert!((percents.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_percentages_empty_total() {
        let entries = [
            TriggerShare { name: "Stress", frequency: 0.0, color: "#ff4444" },
        ];
        assert_eq!(share_percentages(&entries), vec![0.0]);
    }

    #[test]
    fn test_padded_max() {
        assert_eq!(padded_max(&[8.0, 12.0, 6.0]), 12.0 * 1.1);
        // Empty or all-zero series still yield a drawable axis.
        assert_eq!(padded_max(&[]), 1.0);
        assert_eq!(padded_max(&[0.0, 0.0]), 1.0);
    }
}
