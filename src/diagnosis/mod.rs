pub mod gate;
pub mod label;
pub mod prediction;
pub mod presenter;
