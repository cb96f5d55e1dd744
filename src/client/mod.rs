pub mod cli_client;
pub mod gui;
pub mod models;
pub mod services;
