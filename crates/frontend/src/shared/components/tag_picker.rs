use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Multi-select presented as removable chips plus an "add" dropdown
///
/// Options already selected disappear from the dropdown. Enforcing any
/// selection limit is the caller's job: `on_add` receives the candidate
/// and decides whether the selection actually changes.
#[component]
pub fn TagPicker(
    /// Label text
    #[prop(into)]
    label: String,
    /// Available options (reactive; may be loaded after mount)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Current selection (reactive)
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Called with the candidate when the admin picks an option
    on_add: Callback<String>,
    /// Called with the value of the removed chip
    on_remove: Callback<String>,
    /// Placeholder row of the dropdown
    #[prop(into)]
    placeholder: String,
    /// ID for the dropdown element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    // Options not yet selected, in catalog order
    let remaining = Signal::derive(move || {
        let chosen = selected.get();
        options
            .get()
            .into_iter()
            .filter(|o| !chosen.contains(o))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <div class="tag-picker__chips">
                <For
                    each=move || selected.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let tag_for_remove = tag.clone();
                        view! {
                            <span class="tag-picker__chip">
                                {tag.clone()}
                                <button
                                    type="button"
                                    class="tag-picker__chip-remove"
                                    on:click=move |_| on_remove.run(tag_for_remove.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <select
                id=id
                class="form__select tag-picker__add"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if !value.is_empty() {
                        on_add.run(value);
                    }
                    // Snap back to the placeholder row; a rejected add
                    // would otherwise leave the dropdown on the candidate
                    let select = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok());
                    if let Some(select) = select {
                        select.set_value("");
                    }
                }
            >
                <option value="" selected=true>{placeholder}</option>
                <For
                    each=move || remaining.get()
                    key=|opt| opt.clone()
                    children=move |opt| {
                        view! { <option value=opt.clone()>{opt.clone()}</option> }
                    }
                />
            </select>
        </div>
    }
}
