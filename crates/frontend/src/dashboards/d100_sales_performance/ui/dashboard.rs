use crate::dashboards::d100_sales_performance::filter_state::initial_filter_state;
use crate::dashboards::d100_sales_performance::ui::filters::DashboardFilters;
use crate::dashboards::d100_sales_performance::ui::kpi_card::KpiCard;
use crate::dashboards::d100_sales_performance::ui::loading_progress::{
    LoadingProgress, LoadingProgressComplete,
};
use crate::dashboards::d100_sales_performance::ui::product_ranking_card::ProductRankingCard;
use crate::dashboards::d100_sales_performance::ui::ranking_card::RankingCard;
use crate::dashboards::d100_sales_performance::ui::sales_evolution::SalesEvolutionChart;
use crate::shared::data::context::use_sales_data;
use crate::shared::data::loader::start_demo_import;
use crate::shared::data::mock;
use crate::shared::date_utils::format_period;
use contracts::dashboard::{Colaborador, DashboardFilterState};
use leptos::prelude::*;
use thaw::*;

/// Sales-performance dashboard page: header, loader progress, filter bar,
/// KPI grid, evolution chart and the two ranking cards.
#[component]
pub fn SalesPerformanceDashboard() -> impl IntoView {
    let ctx = use_sales_data();

    let filiais = mock::filiais();
    let colaboradores = mock::colaboradores();
    let kpis = StoredValue::new(mock::kpis());
    let produtos = StoredValue::new(mock::produtos());
    let colaboradores_sv = StoredValue::new(colaboradores.clone());

    let filter_state = RwSignal::new(initial_filter_state());
    let on_filters_change = Callback::new(move |next: DashboardFilterState| {
        filter_state.set(next);
    });

    // ranking reacts to the branch filter; order is by sales, descending
    let ranking = Memo::new(move |_| {
        let state = filter_state.get();
        let mut list: Vec<Colaborador> = colaboradores_sv
            .get_value()
            .into_iter()
            .filter(|c| state.is_all_filiais() || c.filial == state.filial)
            .collect();
        list.sort_by(|a, b| b.sales.cmp(&a.sales));
        list
    });

    let loading = Signal::derive(move || ctx.progress.get().active);
    let on_cancel = Callback::new(move |_| ctx.request_cancel());
    let on_reload = move |_| start_demo_import(ctx);

    view! {
        <div
            id="d100_sales_performance--dashboard"
            data-page-category="dashboard"
            class="page page--dashboard"
        >
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Desempenho de vendas"</h2>
                    <div class="page__subtitle">
                        {move || {
                            let state = filter_state.get();
                            format_period(&state.date_from, &state.date_to)
                        }}
                    </div>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=on_reload
                    disabled=loading
                >
                    "Recarregar planilha"
                </Button>
            </div>

            <div class="page__content">
                <LoadingProgress progress=ctx.progress on_cancel=on_cancel />
                <LoadingProgressComplete progress=ctx.progress />

                <DashboardFilters
                    filiais=filiais
                    colaboradores=colaboradores
                    on_change=on_filters_change
                />

                <div class="dashboard__kpi-grid">
                    <For
                        each=move || kpis.get_value()
                        key=|k| k.key.clone()
                        children=|k| view! { <KpiCard kpi=k /> }
                    />
                </div>

                <div class="dashboard__main-grid">
                    <SalesEvolutionChart
                        filial=Signal::derive(move || filter_state.get().filial)
                    />
                    <RankingCard
                        title="Ranking de colaboradores".to_string()
                        colaboradores=Signal::derive(move || ranking.get())
                    />
                </div>

                <ProductRankingCard
                    produtos=Signal::derive(move || produtos.get_value())
                />
            </div>
        </div>
    }
}
