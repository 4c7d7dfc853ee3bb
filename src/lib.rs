/// Character Explorer - TUI browser for a bundled character catalog
///
/// Core library providing the catalog store, field normalization,
/// search/color filtering and the card and table view models.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
