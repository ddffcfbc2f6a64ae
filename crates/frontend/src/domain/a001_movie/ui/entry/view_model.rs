use super::model;
use crate::shared::dialog;
use contracts::domain::a001_movie::MovieDraft;
use contracts::domain::a002_artist;
use contracts::enums::Platform;
use leptos::prelude::*;

/// ViewModel for the movie entry form
///
/// All fields are arena-backed handles, so the struct is `Copy` and can
/// move freely into event handlers and spawned futures. The `alive`
/// flag is cleared on component cleanup; completions of in-flight
/// requests check it (and use `try_` accessors) so a response arriving
/// after teardown never writes to disposed state.
#[derive(Clone, Copy)]
pub struct MovieEntryViewModel {
    pub form: RwSignal<MovieDraft>,
    pub actor_options: RwSignal<Vec<String>>,
    pub poster_name: RwSignal<Option<String>>,
    pub poster_size: RwSignal<u64>,
    pub submitting: RwSignal<bool>,
    poster: StoredValue<Option<web_sys::File>, LocalStorage>,
    alive: StoredValue<bool>,
}

impl MovieEntryViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(MovieDraft::default()),
            actor_options: RwSignal::new(Vec::new()),
            poster_name: RwSignal::new(None),
            poster_size: RwSignal::new(0),
            submitting: RwSignal::new(false),
            poster: StoredValue::new_local(None),
            alive: StoredValue::new(true),
        };
        let alive = vm.alive;
        on_cleanup(move || {
            _ = alive.try_update_value(|a| *a = false);
        });
        vm
    }

    fn is_alive(&self) -> bool {
        self.alive.try_get_value().unwrap_or(false)
    }

    /// Fetch the actor list once, on mount
    ///
    /// On failure the options stay empty; the form remains usable.
    pub fn load_artists(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_artists().await {
                Ok(records) => {
                    if vm.is_alive() {
                        _ = vm.actor_options.try_set(a002_artist::actor_names(&records));
                    }
                }
                Err(e) => log::error!("Error fetching actors: {}", e),
            }
        });
    }

    /// Add a genre; on limit overflow the selection stays unchanged and
    /// a blocking dialog states the limit
    pub fn add_genre(&self, genre: String) {
        let outcome = self.form.try_update(|f| f.add_genre(genre));
        if let Some(Err(e)) = outcome {
            dialog::alert(&e.to_string());
        }
    }

    pub fn remove_genre(&self, genre: String) {
        self.form.update(|f| f.remove_genre(&genre));
    }

    /// Add an actor; duplicates are silently ignored (the picker hides
    /// already-selected names anyway)
    pub fn add_actor(&self, name: String) {
        _ = self.form.try_update(|f| f.add_actor(name));
    }

    pub fn remove_actor(&self, name: String) {
        self.form.update(|f| f.remove_actor(&name));
    }

    pub fn set_platform(&self, value: String) {
        self.form.update(|f| f.platform = Platform::from_str(&value));
    }

    /// Stage a poster image, replacing any previous one
    pub fn stage_poster(&self, file: web_sys::File) {
        self.poster_name.set(Some(file.name()));
        self.poster_size.set(file.size() as u64);
        self.poster.set_value(Some(file));
    }

    /// Submit the draft
    ///
    /// Guarded against duplicate submission while a request is in
    /// flight. The server message is surfaced in a blocking dialog;
    /// failures are logged only.
    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let parts = match self.form.get_untracked().to_parts() {
            Ok(parts) => parts,
            Err(e) => {
                log::error!("Error encoding movie entry: {}", e);
                return;
            }
        };
        let poster = self.poster.try_get_value().flatten();

        self.submitting.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::submit_movie(parts, poster).await {
                Ok(resp) => dialog::alert(&resp.message),
                Err(e) => log::error!("Error submitting movie: {}", e),
            }
            if vm.is_alive() {
                _ = vm.submitting.try_set(false);
            }
        });
    }
}
