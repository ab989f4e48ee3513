pub mod api;
pub mod characters;
pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
