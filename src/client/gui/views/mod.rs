pub mod generator;
pub mod logger;
pub mod result_modal;
