//! Chart Component
//!
//! Daily totals bar chart using HTML5 Canvas.

use leptos::*;
use ledgerview::ChartData;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_dashboard_state;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Fraction of each slot taken by its bar
const BAR_FILL_RATIO: f64 = 0.7;

/// Bar chart for the selected customer
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_dashboard_state();
    let chart_data = state.chart_data();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let title = move || state.dashboard.with(|d| d.chart_title());

    // Redraw chart when the selection or dataset changes
    create_effect(move |_| {
        let data = chart_data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data);
        }
    });

    view! {
        {move || title().map(|title| view! {
            <section class="chart w-75 m-auto mt-5">
                <div class="d-flex align-items-center justify-content-between mb-3">
                    <h3 class="text-center flex-grow-1">{title}</h3>
                    <button
                        class="btn btn-outline-secondary btn-sm"
                        on:click=move |_| state.clear_selection()
                    >
                        "Clear selection"
                    </button>
                </div>
            </section>
        })}
        <canvas
            node_ref=canvas_ref
            width=CANVAS_WIDTH.to_string()
            height=CANVAS_HEIGHT.to_string()
            class="w-75 m-auto d-block"
            style:display=move || if title().is_some() { "block" } else { "none" }
        />
    }
}

/// Position of one bar on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Value range of the y axis; always includes zero
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if min == max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

/// Lay the bars out in the plot area
pub fn layout_bars(data: &ChartData, width: f64, height: f64) -> Vec<BarRect> {
    let values: Vec<f64> = data.bars().map(|(_, v)| v).collect();
    if values.is_empty() {
        return Vec::new();
    }

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (min, max) = value_range(&values);
    let to_y = |v: f64| MARGIN_TOP + ((max - v) / (max - min)) * plot_height;
    let baseline = to_y(0.0);

    let slot = plot_width / values.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;

    data.bars()
        .enumerate()
        .map(|(i, (label, value))| {
            let top = to_y(value).min(baseline);
            BarRect {
                label: label.to_string(),
                value,
                x: MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0,
                y: top,
                width: bar_width,
                height: (to_y(value) - baseline).abs(),
            }
        })
        .collect()
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, data: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = data.bars().map(|(_, v)| v).collect();
    let (min, max) = value_range(&values);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * plot_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let Some(dataset) = data.datasets.first() else {
        return;
    };

    for bar in layout_bars(data, width, height) {
        ctx.set_fill_style(&dataset.background_color.as_str().into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_stroke_style(&dataset.border_color.as_str().into());
        ctx.set_line_width(dataset.border_width as f64);
        ctx.stroke_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style(&"#374151".into());
        let _ = ctx.fill_text(&bar.label, bar.x, height - MARGIN_BOTTOM + 20.0);
    }

    if values.is_empty() {
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No transactions", width / 2.0 - 60.0, height / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview::{DailyTotals, Transaction};

    fn chart(amounts: &[(&str, f64)]) -> ChartData {
        let txs: Vec<Transaction> = amounts
            .iter()
            .enumerate()
            .map(|(i, (date, amount))| Transaction::new(i as i64, 1, *date, *amount))
            .collect();
        ChartData::from_totals(Some(&DailyTotals::from_transactions(&txs)))
    }

    #[test]
    fn test_value_range_includes_zero() {
        assert_eq!(value_range(&[10.0, 40.0]), (0.0, 40.0));
        assert_eq!(value_range(&[-5.0, 20.0]), (-5.0, 20.0));
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_layout_scales_to_max() {
        let bars = layout_bars(
            &chart(&[("2024-01-01", 75.0), ("2024-01-02", 25.0)]),
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        );

        assert_eq!(bars.len(), 2);
        let plot_height = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        assert!((bars[0].height - plot_height).abs() < 1e-9);
        assert!((bars[1].height - plot_height / 3.0).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
        assert_eq!(bars[0].label, "2024-01-01");
    }

    #[test]
    fn test_negative_bar_hangs_below_baseline() {
        let bars = layout_bars(
            &chart(&[("2024-01-01", 30.0), ("2024-01-02", -10.0)]),
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        );

        assert!((bars[1].y - (bars[0].y + bars[0].height)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chart_has_no_bars() {
        assert!(layout_bars(&ChartData::from_totals(None), CANVAS_WIDTH, CANVAS_HEIGHT).is_empty());
    }
}
