//! Use-Case: Laufzeit-Optionen übernehmen.

use crate::app::AppState;
use crate::shared::SandboxOptions;

/// Übernimmt neue Optionen. Raster- und Kreuzungsgröße gelten für künftig
/// platzierte Owner; bestehende behalten ihre Größe. Persistiert wird vom Host.
pub fn apply(state: &mut AppState, options: SandboxOptions) {
    state.layout.grid_size = options.grid_size;
    state.layout.junction_size = options.junction_size;
    log::info!(
        "Optionen übernommen (Raster {}, Kreuzung {})",
        options.grid_size,
        options.junction_size
    );
    state.options = options;
}
