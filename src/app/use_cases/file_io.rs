//! Use-Case: Layout laden und speichern.

use std::path::Path;

use crate::app::AppState;
use crate::io;

/// Ersetzt das aktuelle Layout. Werkzeug- und Drag-Zustand werden verworfen.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let layout = io::load_layout_file(path, &state.catalog, &state.options)?;
    state.layout = layout;
    state.belt_tool.reset();
    state.drag = None;
    state.status_message = Some(format!("Layout geladen: {}", path.display()));
    Ok(())
}

pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    io::save_layout_file(path, &state.layout)?;
    state.status_message = Some(format!("Layout gespeichert: {}", path.display()));
    Ok(())
}
