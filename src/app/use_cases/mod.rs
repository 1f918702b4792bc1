//! Use-Cases der Application-Layer-Orchestrierung.

pub mod belt_tool;
pub mod drag;
pub mod file_io;
pub mod options;
pub mod placement;
