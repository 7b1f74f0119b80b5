pub mod impl_console;
pub mod impl_egui;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
