pub mod cards;
pub mod table;
