use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Single-file picker styled as a button
///
/// Whatever the native picker returns is handed to `on_select` as-is;
/// no type or size validation is done here.
#[component]
pub fn FileInput(
    /// Label shown on the picker button
    #[prop(into)]
    label: String,
    /// Accept attribute, e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Called with the chosen file
    on_select: Callback<web_sys::File>,
    /// ID for the hidden input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_accept = move || accept.get().unwrap_or_default();

    let handle_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    on_select.run(file);
                }
            }
            // Clear so re-picking the same file fires change again
            input.set_value("");
        }
    };

    view! {
        <div class="form__group">
            <label class="button button--secondary file-input__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                class="file-input__native"
                type="file"
                accept=input_accept
                style="display: none;"
                on:change=handle_change
            />
        </div>
    }
}
