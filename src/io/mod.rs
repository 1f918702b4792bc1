//! Datei-Ein-/Ausgabe: Layout-Dateien (JSON) und Routing-Berichte.

pub mod layout_file;
pub mod report;

pub use layout_file::{
    load_layout_file, parse_layout, save_layout_file, write_layout, LayoutFile, LAYOUT_VERSION,
};
pub use report::{BeltReport, RouteReport};
