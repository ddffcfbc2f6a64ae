//! Movie Entry UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch artists, submit movie)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::MovieEntryForm;
pub use view_model::MovieEntryViewModel;
