use crate::dashboards::d100_sales_performance::ui::dashboard::SalesPerformanceDashboard;
use crate::shared::data::context::SalesDataContext;
use crate::shared::data::mock;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared sales-data context to the whole app, seeded with
    // the static workbook so the dashboard has data before any reload.
    let ctx = SalesDataContext::new();
    ctx.raw_rows.set(mock::raw_sales_rows());
    provide_context(ctx);

    view! {
        <div class="app">
            <header class="app-header">
                <span class="app-header__icon">{icon("vendas")}</span>
                <span class="app-header__brand">"Painel de Vendas"</span>
            </header>
            <main class="app-content">
                <SalesPerformanceDashboard />
            </main>
        </div>
    }
}
