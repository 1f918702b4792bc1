use std::path::PathBuf;

use factory_belt_engine::{BeltId, OwnerId};

use crate::core::{BeltEnd, JunctionKind};
use crate::shared::SandboxOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Maschine platzieren (Position ggf. schon eingerastet)
    PlaceMachine {
        machine_id: String,
        position: glam::Vec2,
    },
    /// Kreuzung platzieren
    PlaceJunction {
        kind: JunctionKind,
        center: glam::Vec2,
    },
    /// Belt-Werkzeug: Port im Radius picken
    BeltToolPick {
        world_pos: glam::Vec2,
        max_distance: f32,
    },
    /// Belt-Werkzeug zurücksetzen
    CancelBeltTool,
    /// Owner unter der Maus greifen
    BeginDrag { world_pos: glam::Vec2 },
    /// Gegriffenen Owner bewegen
    DragTo { world_pos: glam::Vec2 },
    /// Drag beenden (Einrasten laut Optionen)
    EndDrag,
    MoveFreeEndpoint {
        belt: BeltId,
        end: BeltEnd,
        position: glam::Vec2,
    },
    RemoveOwner { owner: OwnerId },
    RemoveBelt { belt: BeltId },
    SetRecipe {
        owner: OwnerId,
        recipe: Option<String>,
    },
    RerouteAll,
    ApplyOptions { options: Box<SandboxOptions> },
    LoadLayout { path: PathBuf },
    SaveLayout { path: PathBuf },
}
