//! Terminal presentation: event loop, layout, theme, and the two views.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
