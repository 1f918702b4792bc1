use crate::app::CommandLog;
use crate::core::{FactoryLayout, GameCatalog};
use crate::shared::SandboxOptions;

use super::{BeltToolState, DragState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Fabrik-Layout
    pub layout: FactoryLayout,
    /// Spieldaten; wird beim Start einmal geladen
    pub catalog: GameCatalog,
    /// Laufzeit-Optionen (Raster, Pick-Radius, Farben)
    pub options: SandboxOptions,
    /// Zwei-Klick-Belt-Werkzeug
    pub belt_tool: BeltToolState,
    /// Laufender Owner-Drag
    pub drag: Option<DragState>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Letzte Rückmeldung für die Statuszeile
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Leeres Layout mit eingebautem Katalog und Standard-Optionen.
    pub fn new() -> Self {
        Self::with_catalog(GameCatalog::builtin(), SandboxOptions::default())
    }

    pub fn with_catalog(catalog: GameCatalog, options: SandboxOptions) -> Self {
        Self {
            layout: FactoryLayout::from_options(&options),
            catalog,
            options,
            belt_tool: BeltToolState::new(),
            drag: None,
            command_log: CommandLog::new(),
            status_message: None,
        }
    }

    pub fn owner_count(&self) -> usize {
        self.layout.owners().len()
    }

    pub fn belt_count(&self) -> usize {
        self.layout.belt_count()
    }

    /// Setzt die Statuszeile und loggt die Meldung als Warnung.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.status_message = Some(message);
    }
}
