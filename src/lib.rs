//! ClipStack: clipboard history with nine paste slots.
//!
//! The binary wires the platform adapters into the history store and drives
//! it from a small command shell.

pub mod bootstrap;
pub mod probe;
pub mod shell;
