use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Modifier suffix for a ranking position. Ranks 1-3 get distinct styling,
/// everything below is neutral.
pub(crate) fn rank_modifier(position: usize) -> &'static str {
    match position {
        1 => "badge--rank-gold",
        2 => "badge--rank-silver",
        3 => "badge--rank-bronze",
        _ => "badge--rank-neutral",
    }
}

/// Positional badge for ranking lists (1-based position).
#[component]
pub fn RankBadge(position: usize) -> impl IntoView {
    view! {
        <span class=format!("badge badge--rank {}", rank_modifier(position))>
            {position}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_modifier_top_three_are_distinct() {
        assert_eq!(rank_modifier(1), "badge--rank-gold");
        assert_eq!(rank_modifier(2), "badge--rank-silver");
        assert_eq!(rank_modifier(3), "badge--rank-bronze");
    }

    #[test]
    fn test_rank_modifier_rest_is_neutral() {
        assert_eq!(rank_modifier(4), "badge--rank-neutral");
        assert_eq!(rank_modifier(10), "badge--rank-neutral");
    }
}
