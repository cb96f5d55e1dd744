pub mod generation_service;
pub mod response_parser;
