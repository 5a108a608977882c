pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod overrides;
pub mod render;
pub mod services;
pub mod wikidata;
