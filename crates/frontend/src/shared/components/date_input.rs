use leptos::prelude::*;

/// DateInput component with native date picker
/// The browser displays the value in locale format (dd/mm/yyyy for pt-BR);
/// the exchanged value is always yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=value
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
        </div>
    }
}
