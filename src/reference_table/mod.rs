pub mod condition;
pub mod table;
