pub mod catalog;
pub mod logging;

// Derivation pipeline: normalize raw fields, filter, then shape rows for a view
pub mod normalize;
pub mod filter;
pub mod explorer;

// View models consumed by the TUI renderers
pub mod card;
pub mod table;
