pub mod actions;
pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod import;
pub mod models;
pub mod panels;
pub mod state;
pub mod ui;
pub mod view;

#[cfg(test)]
mod fake_api;

pub use app::router;
pub use client::ActivityClient;
pub use config::AdminConfig;
pub use state::AppState;
