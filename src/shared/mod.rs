//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `core`, `app` und die CLI gemeinsam nutzen.

pub mod options;

pub use options::SandboxOptions;
pub use options::{GRID_SIZE, JUNCTION_SIZE, PORT_PICK_RADIUS};
