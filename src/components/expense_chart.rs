//! Expense Chart Component
//!
//! Category breakdown rendered as an inline SVG pie or bar chart with a
//! legend. No charting engine; the paths are computed here.

use leptos::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::Expense;
use crate::stats;

/// Palette applied to categories in breakdown order
const CHART_COLORS: [&str; 9] = [
    "hsl(217, 91%, 60%)",
    "hsl(142, 76%, 36%)",
    "hsl(25, 95%, 53%)",
    "hsl(43, 96%, 56%)",
    "hsl(0, 84%, 60%)",
    "hsl(262, 83%, 58%)",
    "hsl(173, 58%, 39%)",
    "hsl(198, 93%, 60%)",
    "hsl(220, 9%, 46%)",
];

fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Pie,
    Bar,
}

/// SVG path for one pie slice; `start` and `end` are fractions of a
/// full turn measured from 12 o'clock
fn pie_slice_path(start: f64, end: f64) -> String {
    let (cx, cy, r) = (50.0, 50.0, 40.0);
    let point = |fraction: f64| {
        let theta = fraction * TAU - FRAC_PI_2;
        (cx + r * theta.cos(), cy + r * theta.sin())
    };
    let (x1, y1) = point(start);
    let (x2, y2) = point(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}

#[component]
pub fn ExpenseChart(expenses: Memo<Vec<Expense>>) -> impl IntoView {
    let (chart_kind, set_chart_kind) = signal(ChartKind::Pie);

    let data = Memo::new(move |_| stats::category_breakdown(&expenses.get()));

    let kind_class = move |kind: ChartKind| {
        if chart_kind.get() == kind {
            "chart-toggle active"
        } else {
            "chart-toggle"
        }
    };

    let legend_items =
        move || -> Vec<(usize, stats::CategorySlice)> { data.get().into_iter().enumerate().collect() };

    view! {
        <Show when=move || data.get().is_empty()>
            <div class="card empty-card">
                <h3>"No data to display"</h3>
                <p class="muted">"Add some expenses to see your spending breakdown."</p>
            </div>
        </Show>

        <Show when=move || !data.get().is_empty()>
            <div class="card chart-card">
                <div class="chart-header">
                    <h2 class="card-title">"Expense Breakdown"</h2>
                    <div class="chart-toggles">
                        <button
                            class=move || kind_class(ChartKind::Pie)
                            on:click=move |_| set_chart_kind.set(ChartKind::Pie)
                        >
                            "Pie"
                        </button>
                        <button
                            class=move || kind_class(ChartKind::Bar)
                            on:click=move |_| set_chart_kind.set(ChartKind::Bar)
                        >
                            "Bar"
                        </button>
                    </div>
                </div>

                {move || match chart_kind.get() {
                    ChartKind::Pie => view! {
                        <svg class="chart" viewBox="0 0 100 100">
                            {move || {
                                let slices = data.get();
                                let total: f64 = slices.iter().map(|s| s.amount).sum();
                                let mut cursor = 0.0;
                                slices
                                    .iter()
                                    .enumerate()
                                    .map(|(i, slice)| {
                                        let fraction =
                                            if total > 0.0 { slice.amount / total } else { 0.0 };
                                        let start = cursor;
                                        cursor += fraction;
                                        let tooltip = format!(
                                            "{}: ${:.2} ({}% of total)",
                                            slice.category, slice.amount, slice.percentage
                                        );
                                        // A lone category covers the full disc; the arc
                                        // form degenerates there
                                        if fraction >= 1.0 - 1e-9 {
                                            view! {
                                                <circle cx="50" cy="50" r="40" fill=color_for(i)>
                                                    <title>{tooltip}</title>
                                                </circle>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <path d=pie_slice_path(start, cursor) fill=color_for(i)>
                                                    <title>{tooltip}</title>
                                                </path>
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect_view()
                            }}
                        </svg>
                    }
                    .into_any(),
                    ChartKind::Bar => view! {
                        <svg class="chart" viewBox="0 0 100 60">
                            {move || {
                                let slices = data.get();
                                let max = slices.iter().map(|s| s.amount).fold(0.0, f64::max);
                                let band = 100.0 / slices.len().max(1) as f64;
                                slices
                                    .iter()
                                    .enumerate()
                                    .map(|(i, slice)| {
                                        let height =
                                            if max > 0.0 { slice.amount / max * 50.0 } else { 0.0 };
                                        let tooltip = format!(
                                            "{}: ${:.2} ({}% of total)",
                                            slice.category, slice.amount, slice.percentage
                                        );
                                        view! {
                                            <rect
                                                x=format!("{:.3}", i as f64 * band + band * 0.15)
                                                y=format!("{:.3}", 55.0 - height)
                                                width=format!("{:.3}", band * 0.7)
                                                height=format!("{:.3}", height)
                                                fill=color_for(i)
                                            >
                                                <title>{tooltip}</title>
                                            </rect>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </svg>
                    }
                    .into_any(),
                }}

                <div class="chart-legend">
                    <For
                        each=legend_items
                        key=|(_, slice)| slice.category.clone()
                        children=move |(i, slice)| {
                            view! {
                                <div class="legend-entry">
                                    <span
                                        class="legend-dot"
                                        style=format!("background-color: {};", color_for(i))
                                    ></span>
                                    <span class="legend-label">
                                        {format!("{} ({}%)", slice.category, slice.percentage)}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
