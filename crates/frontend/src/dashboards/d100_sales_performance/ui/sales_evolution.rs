use crate::dashboards::d100_sales_performance::chart_data::{
    format_receita_axis, monthly_series,
};
use crate::shared::data::context::use_sales_data;
use crate::shared::icons::icon;
use contracts::dashboard::MonthPoint;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 24.0;

fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// `points` attribute for a polyline, one vertex per value, centered on the
/// month columns. `max_value <= 0` pins everything to the baseline.
pub(crate) fn polyline_points(values: &[f64], max_value: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = plot_width() / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = MARGIN_LEFT + step * (i as f64 + 0.5);
            let ratio = if max_value > 0.0 { v / max_value } else { 0.0 };
            let y = MARGIN_TOP + plot_height() * (1.0 - ratio);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Vendas,
    Receita,
    Leads,
}

/// Sales-evolution chart: period totals smoothed over the twelve calendar
/// months, with tabs for sales count, revenue and a leads placeholder.
#[component]
pub fn SalesEvolutionChart(
    /// Branch filter slug ("all" bypasses filtering)
    #[prop(into)]
    filial: Signal<String>,
) -> impl IntoView {
    let ctx = use_sales_data();
    // recomputed only when the raw rows or the branch filter change
    let series = Memo::new(move |_| monthly_series(&ctx.raw_rows.get(), &filial.get()));
    let (active_tab, set_active_tab) = signal(ChartTab::Vendas);

    let tab_class = move |tab: ChartTab| {
        if active_tab.get() == tab {
            "sales-evolution__tab sales-evolution__tab--active"
        } else {
            "sales-evolution__tab"
        }
    };

    view! {
        <div class="card sales-evolution">
            <div class="card__header">
                <span class="card__header-icon">{icon("chart-bar")}</span>
                <h3 class="card__title">"Evolução de vendas"</h3>
                <div class="sales-evolution__tabs">
                    <button
                        class=move || tab_class(ChartTab::Vendas)
                        on:click=move |_| set_active_tab.set(ChartTab::Vendas)
                    >
                        {icon("chart-bar")}
                        " Vendas"
                    </button>
                    <button
                        class=move || tab_class(ChartTab::Receita)
                        on:click=move |_| set_active_tab.set(ChartTab::Receita)
                    >
                        {icon("chart-line")}
                        " Receita"
                    </button>
                    <button
                        class=move || tab_class(ChartTab::Leads)
                        on:click=move |_| set_active_tab.set(ChartTab::Leads)
                    >
                        {icon("leads")}
                        " Leads"
                    </button>
                </div>
            </div>
            <div class="card__body">
                {move || match active_tab.get() {
                    ChartTab::Vendas => vendas_chart(series.get()).into_any(),
                    ChartTab::Receita => receita_chart(series.get()).into_any(),
                    ChartTab::Leads => leads_notice().into_any(),
                }}
            </div>
        </div>
    }
}

fn vendas_chart(series: Vec<MonthPoint>) -> impl IntoView {
    let max = series.iter().map(|p| p.vendas).max().unwrap_or(0).max(1) as f64;
    let step = plot_width() / series.len().max(1) as f64;

    let bars = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let h = plot_height() * p.vendas as f64 / max;
            let x = MARGIN_LEFT + step * i as f64 + step * 0.15;
            let y = MARGIN_TOP + plot_height() - h;
            view! {
                <g>
                    <rect
                        class="sales-evolution__bar"
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", y)
                        width=format!("{:.1}", step * 0.7)
                        height=format!("{:.1}", h)
                        rx="2"
                    />
                    {month_label(i, step, p.month.clone())}
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="sales-evolution__chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            role="img"
        >
            {axis_labels(max, |v| format!("{:.0}", v))}
            {bars}
        </svg>
    }
}

fn receita_chart(series: Vec<MonthPoint>) -> impl IntoView {
    let max = series.iter().map(|p| p.receita).fold(0.0f64, f64::max).max(1.0);
    let values: Vec<f64> = series.iter().map(|p| p.receita).collect();
    let points = polyline_points(&values, max);
    let step = plot_width() / series.len().max(1) as f64;

    let markers = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cx = MARGIN_LEFT + step * (i as f64 + 0.5);
            let ratio = p.receita / max;
            let cy = MARGIN_TOP + plot_height() * (1.0 - ratio);
            view! {
                <g>
                    <circle
                        class="sales-evolution__point"
                        cx=format!("{:.1}", cx)
                        cy=format!("{:.1}", cy)
                        r="3"
                    />
                    {month_label(i, step, p.month.clone())}
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="sales-evolution__chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            role="img"
        >
            {axis_labels(max, format_receita_axis)}
            <polyline class="sales-evolution__line" points=points fill="none"/>
            {markers}
        </svg>
    }
}

/// Leads never chart: the column does not exist in the source workbook.
fn leads_notice() -> impl IntoView {
    view! {
        <div class="sales-evolution__leads-empty">
            <span class="sales-evolution__leads-icon">{icon("leads")}</span>
            <p>"Dados de leads não disponíveis"</p>
            <p class="sales-evolution__leads-hint">
                "A planilha de origem não possui coluna de leads."
            </p>
        </div>
    }
}

fn month_label(index: usize, step: f64, month: String) -> impl IntoView {
    view! {
        <text
            class="sales-evolution__month"
            x=format!("{:.1}", MARGIN_LEFT + step * (index as f64 + 0.5))
            y=format!("{:.1}", CHART_HEIGHT - 6.0)
            text-anchor="middle"
        >
            {month}
        </text>
    }
}

fn axis_labels(max: f64, fmt: impl Fn(f64) -> String) -> impl IntoView {
    [0.0f64, 0.5, 1.0]
        .into_iter()
        .map(|frac| {
            let y = MARGIN_TOP + plot_height() * (1.0 - frac);
            view! {
                <g>
                    <line
                        class="sales-evolution__grid"
                        x1=format!("{:.1}", MARGIN_LEFT)
                        y1=format!("{:.1}", y)
                        x2=format!("{:.1}", CHART_WIDTH - MARGIN_RIGHT)
                        y2=format!("{:.1}", y)
                    />
                    <text
                        class="sales-evolution__axis"
                        x=format!("{:.1}", MARGIN_LEFT - 8.0)
                        y=format!("{:.1}", y + 4.0)
                        text-anchor="end"
                    >
                        {fmt(max * frac)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_points_shape() {
        let points = polyline_points(&[0.0, 100.0], 100.0);
        let vertices: Vec<&str> = points.split(' ').collect();
        assert_eq!(vertices.len(), 2);
        // first point sits on the baseline, second at the top of the plot
        assert!(vertices[0].ends_with(&format!("{:.1}", MARGIN_TOP + plot_height())));
        assert!(vertices[1].ends_with(&format!("{:.1}", MARGIN_TOP)));
    }

    #[test]
    fn test_polyline_points_empty_and_zero_max() {
        assert_eq!(polyline_points(&[], 10.0), "");
        // all points pinned to the baseline when there is no positive max
        let points = polyline_points(&[5.0, 5.0], 0.0);
        let baseline = format!("{:.1}", MARGIN_TOP + plot_height());
        assert!(points
            .split(' ')
            .all(|vertex| vertex.ends_with(&baseline)));
    }
}
