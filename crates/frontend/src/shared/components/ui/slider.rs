use leptos::prelude::*;

/// Range slider with a label and a live value readout
#[component]
pub fn Slider(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value (reactive)
    #[prop(into)]
    value: Signal<f64>,
    /// Input event handler, receives the parsed value
    #[prop(optional)]
    on_input: Option<Callback<f64>>,
    min: f64,
    max: f64,
    step: f64,
    /// Readout next to the slider, derived from the current value
    #[prop(optional)]
    value_label: Option<Callback<f64, String>>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let slider_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=slider_id>
                    {l}
                </label>
            })}
            <div class="form__slider-row">
                <input
                    id=slider_id
                    class="form__slider"
                    type="range"
                    min=min
                    max=max
                    step=step
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                                handler.run(parsed);
                            }
                        }
                    }
                />
                {value_label.map(|render| view! {
                    <span class="form__slider-value">
                        {move || render.run(value.get())}
                    </span>
                })}
            </div>
        </div>
    }
}
