// Library root for the interactive draft assistant. The binary in main.rs
// wires these modules to stdin and stdout.

pub mod app;
pub mod protocol;
pub mod render;
