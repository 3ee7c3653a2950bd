pub mod app;
pub mod photo_viewer;
pub mod settings_modal;
