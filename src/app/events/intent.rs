use std::path::PathBuf;

use factory_belt_engine::{BeltId, OwnerId};

use crate::core::{BeltEnd, JunctionKind};
use crate::shared::SandboxOptions;

/// Eingaben aus Host/UI ohne eigene Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maschine aus dem Katalog an Weltposition platzieren
    PlaceMachineRequested {
        machine_id: String,
        world_pos: glam::Vec2,
    },
    /// Kreuzung an Weltposition platzieren
    PlaceJunctionRequested {
        kind: JunctionKind,
        world_pos: glam::Vec2,
    },
    /// Klick mit dem Belt-Werkzeug
    BeltToolClicked { world_pos: glam::Vec2 },
    /// Belt-Werkzeug abbrechen (Escape, Rechtsklick)
    BeltToolCancelled,
    /// Drag auf einem Owner begonnen
    DragStarted { world_pos: glam::Vec2 },
    /// Maus während des Drags bewegt
    DragMoved { world_pos: glam::Vec2 },
    /// Maus losgelassen
    DragEnded,
    /// Freies Belt-Ende verschoben
    FreeEndpointMoved {
        belt: BeltId,
        end: BeltEnd,
        world_pos: glam::Vec2,
    },
    /// Owner inkl. angeschlossener Belts löschen
    RemoveOwnerRequested { owner: OwnerId },
    /// Einzelnen Belt löschen
    RemoveBeltRequested { belt: BeltId },
    /// Rezept einer Maschine wählen (`None` = leer)
    RecipeSelected {
        owner: OwnerId,
        recipe: Option<String>,
    },
    /// Alle Belts neu routen
    RerouteAllRequested,
    /// Optionen übernehmen
    OptionsChanged { options: Box<SandboxOptions> },
    /// Layout-Datei laden
    LoadLayoutRequested { path: PathBuf },
    /// Layout-Datei speichern
    SaveLayoutRequested { path: PathBuf },
}
