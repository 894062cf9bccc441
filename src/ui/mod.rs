//! Terminal front end for the category admin screen.

pub mod app;
pub mod categories;
pub mod category_form;
pub mod commands;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notification;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
