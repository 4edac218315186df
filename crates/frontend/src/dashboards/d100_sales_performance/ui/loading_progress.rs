use crate::shared::icons::icon;
use contracts::import::ImportProgress;
use leptos::prelude::*;
use thaw::*;

/// Progress panel for the external spreadsheet loader.
///
/// Purely presentational: renders nothing while no load is active, shows
/// only the most recent loader error, and offers cancel only while the load
/// is not already cancelled and a handler was supplied. Cancellation
/// semantics belong to the loader.
#[component]
pub fn LoadingProgress(
    #[prop(into)] progress: Signal<ImportProgress>,
    /// Cancel handler; without one no cancel button is rendered
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || {
            let p = progress.get();
            if !p.active {
                return view! { <></> }.into_any();
            }

            let percent = p.percent();
            let current = p.current_month.clone().map(|m| {
                view! {
                    <span class="loading-progress__current">{format!("Lendo {}...", m)}</span>
                }
            });
            let last_error = p.last_error().map(|e| {
                let message = e.message.clone();
                view! {
                    <div class="warning-box warning-box--error loading-progress__error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{message}</span>
                    </div>
                }
            });
            let cancel = (!p.cancelled)
                .then_some(on_cancel)
                .flatten()
                .map(|cb| {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| cb.run(())
                        >
                            {icon("x")}
                            " Cancelar"
                        </Button>
                    }
                });
            let cancelling = p.cancelled.then(|| {
                view! {
                    <span class="loading-progress__cancelling">"Cancelando..."</span>
                }
            });

            view! {
                <div class="loading-progress">
                    <div class="loading-progress__header">
                        <Space gap=SpaceGap::Small>
                            <Spinner size=SpinnerSize::Small />
                            <span class="loading-progress__title">"Carregando planilha..."</span>
                            {current}
                        </Space>
                        {cancel}
                        {cancelling}
                    </div>
                    <div class="loading-progress__track">
                        <div
                            class="loading-progress__fill"
                            style=format!("width: {}%;", percent)
                        ></div>
                    </div>
                    <div class="loading-progress__meta">
                        {format!(
                            "{}% · {}/{} meses · {} registros",
                            percent,
                            p.completed_months,
                            p.total_months,
                            p.records_loaded,
                        )}
                    </div>
                    {last_error}
                </div>
            }
            .into_any()
        }}
    }
}

/// Success summary shown once a load finishes with every month processed.
#[component]
pub fn LoadingProgressComplete(#[prop(into)] progress: Signal<ImportProgress>) -> impl IntoView {
    view! {
        {move || {
            let p = progress.get();
            if !p.is_complete() {
                return view! { <></> }.into_any();
            }
            view! {
                <div class="loading-progress loading-progress--complete">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        "Planilha carregada"
                    </Badge>
                    <span class="loading-progress__summary">
                        {format!("{} registros em {} meses", p.records_loaded, p.total_months)}
                    </span>
                </div>
            }
            .into_any()
        }}
    }
}
