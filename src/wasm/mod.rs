//! WebAssembly bindings for the 6502 emulator core.
//!
//! This module provides JavaScript-callable interfaces to the CPU so a page
//! can load a program, run it in cycle slices and inspect the machine state.

pub mod api;

pub use api::Emulator6502;
