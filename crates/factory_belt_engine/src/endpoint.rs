//! Gemeinsame Schnittstelle aller Belt-Endpunkte.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::connection_point::ConnectionPoint;
use crate::direction::Direction;

/// Art eines Belt-Endpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Anschlusspunkt an einem Owner (Belegung, Hover-Logik)
    Port,
    /// Frei verschiebbarer Endpunkt ohne Owner
    FreeNode,
}

/// Was das Routing von einem Endpunkt braucht: Position und Bewegungsrichtung.
pub trait RouteAnchor {
    fn position(&self) -> Vec2;

    fn direction_vector(&self) -> Direction;

    fn kind(&self) -> EndpointKind;
}

impl RouteAnchor for ConnectionPoint {
    fn position(&self) -> Vec2 {
        ConnectionPoint::position(self)
    }

    fn direction_vector(&self) -> Direction {
        ConnectionPoint::direction_vector(self)
    }

    fn kind(&self) -> EndpointKind {
        EndpointKind::Port
    }
}

/// Frei schwebender Endpunkt, z.B. das lose Ende eines gerade gezogenen Belts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeNode {
    pub position: Vec2,
    #[serde(default)]
    pub direction: Direction,
}

impl FreeNode {
    pub fn new(position: Vec2, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Freier Endpunkt ohne Vorzugsrichtung.
    pub fn unoriented(position: Vec2) -> Self {
        Self::new(position, Direction::NONE)
    }
}

impl RouteAnchor for FreeNode {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn direction_vector(&self) -> Direction {
        self.direction
    }

    fn kind(&self) -> EndpointKind {
        EndpointKind::FreeNode
    }
}
