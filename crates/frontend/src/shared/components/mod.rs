pub mod tag_picker;
pub mod ui;
