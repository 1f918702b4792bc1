use factory_belt_engine::OwnerId;
use glam::Vec2;

use crate::core::PortRef;

/// Zustand des Zwei-Klick-Belt-Werkzeugs.
#[derive(Debug, Clone, Default)]
pub struct BeltToolState {
    /// Beim ersten Klick gewählter Port; `None` = Werkzeug wartet auf ersten Klick
    pub pending: Option<PortRef>,
}

impl BeltToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }
}

/// Laufender Drag eines Owners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub owner: OwnerId,
    /// Abstand Owner-Ursprung minus Griffpunkt, bleibt während des Drags konstant
    pub grab_offset: Vec2,
}
