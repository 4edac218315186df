use crate::shared::components::ui::RankBadge;
use crate::shared::icons::icon;
use contracts::dashboard::Colaborador;
use leptos::prelude::*;

/// Collaborator ranking list. Renders in the order given; callers must
/// pre-sort, positions are purely positional.
#[component]
pub fn RankingCard(
    /// Card title
    title: String,
    /// Pre-sorted list to display
    #[prop(into)]
    colaboradores: Signal<Vec<Colaborador>>,
) -> impl IntoView {
    view! {
        <div class="card ranking-card">
            <div class="card__header">
                <span class="card__header-icon">{icon("colaboradores")}</span>
                <h3 class="card__title">{title}</h3>
            </div>
            <div class="card__body">
                // position is part of the key so rows re-render on reorder
                <For
                    each=move || {
                        colaboradores.get().into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(idx, c)| format!("{}-{}", idx, c.id)
                    children=move |(idx, c)| {
                        view! {
                            <div class="ranking-card__row">
                                <RankBadge position=idx + 1 />
                                <span class=format!(
                                    "ranking-card__avatar ranking-card__avatar--{}",
                                    c.color,
                                )>{c.initials.clone()}</span>
                                <div class="ranking-card__who">
                                    <div class="ranking-card__name">{c.name.clone()}</div>
                                    <div class="ranking-card__meta">
                                        {format!("{} vendas · conversão {}", c.sales, c.conversion)}
                                    </div>
                                </div>
                                <div class="ranking-card__revenue">{c.revenue.clone()}</div>
                            </div>
                        }
                    }
                />
                {move || colaboradores.get().is_empty().then(|| view! {
                    <div class="card__empty">
                        "Nenhum colaborador para os filtros selecionados"
                    </div>
                })}
            </div>
        </div>
    }
}
