use super::view_model::MovieEntryViewModel;
use crate::shared::components::tag_picker::TagPicker;
use crate::shared::components::ui::{Button, FileInput, Input, Select, Slider, Textarea};
use crate::shared::format::{format_file_size, format_rating};
use contracts::enums::{Platform, GENRES};
use leptos::prelude::*;

#[component]
pub fn MovieEntryForm() -> impl IntoView {
    let vm = MovieEntryViewModel::new();
    vm.load_artists();

    let genre_options: Vec<String> = GENRES.iter().map(|g| g.to_string()).collect();
    let platform_options: Vec<(String, String)> = std::iter::once(("".to_string(), "Select a platform".to_string()))
        .chain(
            Platform::all()
                .into_iter()
                .map(|p| (p.as_str().to_string(), p.as_str().to_string())),
        )
        .collect();

    view! {
        <div class="entry-form movie-entry">
            <div class="entry-form__grid">
                <Input
                    label="Movie Name"
                    id="movie-name"
                    value=Signal::derive(move || vm.form.get().movie_name)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.movie_name = v))
                />

                <Input
                    label="Release Date"
                    id="release-date"
                    value=Signal::derive(move || vm.form.get().release_date)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.release_date = v))
                />

                <TagPicker
                    label="Genres"
                    id="genres"
                    options=genre_options
                    selected=Signal::derive(move || vm.form.get().genres)
                    on_add=Callback::new(move |g: String| vm.add_genre(g))
                    on_remove=Callback::new(move |g: String| vm.remove_genre(g))
                    placeholder="Add a genre..."
                />

                <Input
                    label="Budget"
                    id="budget"
                    input_type="number"
                    value=Signal::derive(move || vm.form.get().budget)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.budget = v))
                />

                <Textarea
                    label="Storyline"
                    id="storyline"
                    rows=4
                    value=Signal::derive(move || vm.form.get().storyline)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.storyline = v))
                />

                <TagPicker
                    label="Cast"
                    id="cast"
                    options=vm.actor_options
                    selected=Signal::derive(move || vm.form.get().actors)
                    on_add=Callback::new(move |a: String| vm.add_actor(a))
                    on_remove=Callback::new(move |a: String| vm.remove_actor(a))
                    placeholder="Add an actor..."
                />

                <Slider
                    label="Rating (Out of 5)"
                    id="rating"
                    min=0.0
                    max=5.0
                    step=0.5
                    value=Signal::derive(move || vm.form.get().rating as f64)
                    on_input=Callback::new(move |v: f64| vm.form.update(|f| f.rating = v as f32))
                    value_label=Callback::new(|v: f64| format_rating(v as f32))
                />

                <Select
                    label="Platform"
                    id="platform"
                    options=platform_options
                    value=Signal::derive(move || {
                        vm.form.get().platform.map(|p| p.as_str().to_string()).unwrap_or_default()
                    })
                    on_change=Callback::new(move |v: String| vm.set_platform(v))
                />

                <Input
                    label="Platform Link"
                    id="platform-link"
                    value=Signal::derive(move || vm.form.get().platform_link)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.platform_link = v))
                />

                <Input
                    label="Trailer (YouTube Link)"
                    id="trailer-link"
                    value=Signal::derive(move || vm.form.get().trailer_link)
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.trailer_link = v))
                />

                <div class="entry-form__poster">
                    <FileInput
                        label="Upload Poster"
                        id="poster"
                        accept="image/*"
                        on_select=Callback::new(move |file: web_sys::File| vm.stage_poster(file))
                    />
                    {move || vm.poster_name.get().map(|name| view! {
                        <span class="entry-form__poster-name">
                            {name} " (" {format_file_size(vm.poster_size.get())} ")"
                        </span>
                    })}
                </div>
            </div>

            <div class="entry-form__actions">
                <Button
                    disabled=Signal::derive(move || vm.submitting.get())
                    on_click=Callback::new(move |_| vm.submit())
                >
                    {move || if vm.submitting.get() { "Submitting..." } else { "Submit" }}
                </Button>
            </div>
        </div>
    }
}
