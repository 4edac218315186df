use crate::dashboards::d100_sales_performance::filter_state::{
    colaborador_after_filial_change, colaborador_options, initial_filter_state,
};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::dashboard::{Colaborador, DashboardFilterState, Filial, FILTER_ALL};
use leptos::prelude::*;

/// Filter bar: period, branch and collaborator.
///
/// Owns its four pieces of state and notifies the parent with the full
/// tuple on every change. The collaborator select is dependent: its options
/// follow the branch selection, and a selection that the new branch no
/// longer lists falls back to "all" (decided in `filter_state`, so it can
/// only happen on an actual branch change).
#[component]
pub fn DashboardFilters(
    /// Available branches
    filiais: Vec<Filial>,
    /// Full collaborator list; the dependent select derives from it
    colaboradores: Vec<Colaborador>,
    /// Fired with the full filter tuple on every local change
    on_change: Callback<DashboardFilterState>,
) -> impl IntoView {
    let state = RwSignal::new(initial_filter_state());
    let colaboradores = StoredValue::new(colaboradores);

    let mut options = vec![(FILTER_ALL.to_string(), "Todas as filiais".to_string())];
    options.extend(filiais.iter().map(|f| (f.id.clone(), f.name.clone())));
    let filial_options = StoredValue::new(options);

    let emit = move |next: DashboardFilterState| {
        state.set(next.clone());
        on_change.run(next);
    };

    let on_date_from = Callback::new(move |value: String| {
        let mut next = state.get_untracked();
        next.date_from = value;
        emit(next);
    });

    let on_date_to = Callback::new(move |value: String| {
        let mut next = state.get_untracked();
        next.date_to = value;
        emit(next);
    });

    let on_filial = Callback::new(move |value: String| {
        let mut next = state.get_untracked();
        next.colaborador = colaborador_after_filial_change(
            &next.colaborador,
            &colaboradores.get_value(),
            &value,
        );
        next.filial = value;
        emit(next);
    });

    let on_colaborador = Callback::new(move |value: String| {
        let mut next = state.get_untracked();
        next.colaborador = value;
        emit(next);
    });

    let colaborador_opts = Signal::derive(move || {
        colaborador_options(&colaboradores.get_value(), &state.get().filial)
    });

    view! {
        <div class="dashboard-filters">
            <div class="dashboard-filters__icon">{icon("filter")}</div>
            <DateInput
                label="De"
                value=Signal::derive(move || state.get().date_from)
                on_change=on_date_from
            />
            <DateInput
                label="Até"
                value=Signal::derive(move || state.get().date_to)
                on_change=on_date_to
            />
            <Select
                label="Filial"
                id="filter-filial"
                value=Signal::derive(move || state.get().filial)
                options=Signal::derive(move || filial_options.get_value())
                on_change=on_filial
            />
            <Select
                label="Colaborador"
                id="filter-colaborador"
                value=Signal::derive(move || state.get().colaborador)
                options=colaborador_opts
                on_change=on_colaborador
            />
        </div>
    }
}
