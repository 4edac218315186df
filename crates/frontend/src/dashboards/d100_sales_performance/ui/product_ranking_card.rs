use crate::shared::components::ui::RankBadge;
use crate::shared::icons::icon;
use contracts::dashboard::ProductSales;
use leptos::prelude::*;

/// The card never shows more than this many rows.
const MAX_ROWS: usize = 10;

/// First [`MAX_ROWS`] entries, input order untouched.
pub(crate) fn visible_products(produtos: &[ProductSales]) -> Vec<ProductSales> {
    produtos.iter().take(MAX_ROWS).cloned().collect()
}

/// Product ranking list: top entries of an externally-sorted list, capped at
/// ten rows, with an informational empty state.
#[component]
pub fn ProductRankingCard(
    #[prop(into)] produtos: Signal<Vec<ProductSales>>,
) -> impl IntoView {
    view! {
        <div class="card product-ranking-card">
            <div class="card__header">
                <span class="card__header-icon">{icon("produtos")}</span>
                <h3 class="card__title">"Produtos mais vendidos"</h3>
            </div>
            <div class="card__body">
                {move || {
                    let visible = visible_products(&produtos.get());
                    if visible.is_empty() {
                        view! {
                            <div class="card__empty">
                                "Nenhum produto vendido no período"
                            </div>
                        }
                        .into_any()
                    } else {
                        visible
                            .into_iter()
                            .enumerate()
                            .map(|(idx, p)| {
                                view! {
                                    <div class="product-ranking-card__row">
                                        <RankBadge position=idx + 1 />
                                        <span class="product-ranking-card__name">{p.name}</span>
                                        <span class="product-ranking-card__quantity">
                                            {format!("{} un", p.quantity)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn produto(name: &str, quantity: u32) -> ProductSales {
        ProductSales {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_caps_at_ten_rows_in_input_order() {
        let produtos: Vec<ProductSales> = (0..14u32)
            .map(|i| produto(&format!("p{i}"), 100 - i))
            .collect();
        let visible = visible_products(&produtos);
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[0].name, "p0");
        assert_eq!(visible[9].name, "p9");
    }

    #[test]
    fn test_short_lists_pass_through() {
        let produtos = vec![produto("a", 2), produto("b", 1)];
        assert_eq!(visible_products(&produtos).len(), 2);
        assert!(visible_products(&[]).is_empty());
    }
}
