pub mod api_utils;
pub mod components;
pub mod dialog;
pub mod format;
