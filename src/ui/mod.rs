pub mod app;
pub mod character_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
