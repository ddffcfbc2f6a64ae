use crate::domain::a001_movie::ui::entry::MovieEntryForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Add Movie Details"</h1>
            </header>
            <main class="admin-page__content">
                <MovieEntryForm />
            </main>
        </div>
    }
}
