use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::dashboard::{KpiRecord, KpiValue};
use leptos::prelude::*;

/// Variation badge text, one decimal, sign carried by the arrow icon.
pub(crate) fn format_variation(variation: f64) -> String {
    format!("{:.1}%", variation.abs())
}

/// Secondary line under the value: target wins over previous period.
pub(crate) fn secondary_line(
    meta: &Option<String>,
    previous_value: &Option<String>,
) -> Option<String> {
    meta.clone().or_else(|| previous_value.clone())
}

/// One KPI tile. Two mutually exclusive render paths: a metric that was not
/// found in the workbook shows a muted placeholder and a warning badge and
/// never a numeric value; a found metric shows the value, a delta badge when
/// the variation is non-zero, and an optional secondary line.
#[component]
pub fn KpiCard(kpi: KpiRecord) -> impl IntoView {
    match kpi.value {
        KpiValue::NotFound => view! {
            <div class="kpi-card kpi-card--not-found">
                <div class="kpi-card__icon">{icon(&kpi.icon)}</div>
                <div class="kpi-card__content">
                    <div class="kpi-card__title">{kpi.title}</div>
                    <div class="kpi-card__value kpi-card__value--muted">"—"</div>
                    <Badge variant="warning" class="kpi-card__badge">
                        {icon("alert")}
                        " Não encontrado"
                    </Badge>
                </div>
            </div>
        }
        .into_any(),
        KpiValue::Found(value) => {
            let delta = (kpi.variation != 0.0).then(|| {
                let arrow = if kpi.variation >= 0.0 {
                    "trending-up"
                } else {
                    "trending-down"
                };
                let variant = if kpi.is_positive { "success" } else { "error" };
                view! {
                    <Badge variant=variant class="kpi-card__badge">
                        {icon(arrow)}
                        {format!(" {}", format_variation(kpi.variation))}
                    </Badge>
                }
            });

            let secondary = secondary_line(&kpi.meta, &kpi.previous_value).map(|line| {
                view! { <div class="kpi-card__secondary">{line}</div> }
            });

            view! {
                <div class="kpi-card">
                    <div class="kpi-card__icon">{icon(&kpi.icon)}</div>
                    <div class="kpi-card__content">
                        <div class="kpi-card__title">{kpi.title}</div>
                        <div class="kpi-card__value">
                            {value}
                            {delta}
                        </div>
                        {secondary}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_variation_one_decimal() {
        assert_eq!(format_variation(12.4), "12.4%");
        assert_eq!(format_variation(-3.15), "3.1%");
        assert_eq!(format_variation(8.0), "8.0%");
    }

    #[test]
    fn test_secondary_line_prefers_meta() {
        let meta = Some("Meta: 1.500".to_string());
        let previous = Some("Anterior: 1.100".to_string());
        assert_eq!(secondary_line(&meta, &previous).as_deref(), Some("Meta: 1.500"));
        assert_eq!(
            secondary_line(&None, &previous).as_deref(),
            Some("Anterior: 1.100")
        );
        assert_eq!(secondary_line(&None, &None), None);
    }
}
