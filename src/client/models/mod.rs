pub mod app_state;
pub mod generation;
pub mod messages;
pub mod ui_state;
