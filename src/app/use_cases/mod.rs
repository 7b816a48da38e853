//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod file_io;
pub mod settings;
pub mod viewport;
pub mod views;
