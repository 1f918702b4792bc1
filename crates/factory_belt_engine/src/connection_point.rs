//! Anschlusspunkte (Ports) an Gebäuden und Kreuzungen.
//!
//! Ein `ConnectionPoint` gehört genau einem Owner, kennt ihn aber nur über
//! seine `OwnerId`. Owner implementieren die Fähigkeit `PortOwner`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::direction::Direction;
use crate::geometry::Obstacle;

/// Stabile ID eines Owners (Gebäude oder Kreuzung)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

/// Stabile ID eines Belts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeltId(pub u64);

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for BeltId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "belt#{}", self.0)
    }
}

/// Typ eines Anschlusspunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// Eingang: Belt endet hier
    Input,
    /// Ausgang: Belt beginnt hier
    Output,
}

/// Seite des Owners, an der ein Port sitzt (lokales Owner-System)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Alle Seiten im Uhrzeigersinn, beginnend oben.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Nach außen zeigende Normale der Owner-Kante.
    pub fn outward(self) -> Direction {
        match self {
            Side::Top => Direction::UP,
            Side::Right => Direction::RIGHT,
            Side::Bottom => Direction::DOWN,
            Side::Left => Direction::LEFT,
        }
    }
}

/// Grund, warum zwei Ports nicht verbunden werden dürfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("ein Port kann nicht mit sich selbst verbunden werden")]
    SamePoint,
    #[error("beide Ports gehören demselben Owner {0}")]
    SameOwner(OwnerId),
    #[error("beide Ports sind vom Typ {0:?}")]
    SameType(PortType),
    #[error("Port ist bereits mit {0} belegt")]
    Occupied(BeltId),
}

/// Typisierter, gerichteter Anschlusspunkt an einem Owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPoint {
    owner: OwnerId,
    port_type: PortType,
    side: Side,
    /// Fester Offset relativ zum Owner-Ursprung
    local_offset: Vec2,
    /// Weltposition, nachgeführt bei jeder Owner-Bewegung
    position: Vec2,
    connected: Option<BeltId>,
}

impl ConnectionPoint {
    /// Erstellt einen freien Port; die Weltposition ergibt sich aus `origin + local_offset`.
    pub fn new(
        owner: OwnerId,
        port_type: PortType,
        side: Side,
        local_offset: Vec2,
        origin: Vec2,
    ) -> Self {
        Self {
            owner,
            port_type,
            side,
            local_offset,
            position: origin + local_offset,
            connected: None,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn port_type(&self) -> PortType {
        self.port_type
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn local_offset(&self) -> Vec2 {
        self.local_offset
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn connected_link(&self) -> Option<BeltId> {
        self.connected
    }

    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }

    /// Rechnet die Weltposition nach einer Owner-Bewegung neu.
    pub fn update_position(&mut self, origin: Vec2) {
        self.position = origin + self.local_offset;
    }

    /// Bewegungsrichtung durch den Port.
    ///
    /// OUTPUT zeigt vom Owner weg, INPUT in den Owner hinein.
    pub fn direction_vector(&self) -> Direction {
        let outward = self.side.outward();
        match self.port_type {
            PortType::Output => outward,
            PortType::Input => outward.reversed(),
        }
    }

    /// Prüft die Verbindungsregeln und liefert den Ablehnungsgrund.
    pub fn check_connect(&self, other: &ConnectionPoint) -> Result<(), ConnectError> {
        if std::ptr::eq(self, other) {
            return Err(ConnectError::SamePoint);
        }
        if self.owner == other.owner {
            return Err(ConnectError::SameOwner(self.owner));
        }
        if self.port_type == other.port_type {
            return Err(ConnectError::SameType(self.port_type));
        }
        if let Some(link) = self.connected.or(other.connected) {
            return Err(ConnectError::Occupied(link));
        }
        Ok(())
    }

    /// Darf zwischen beiden Ports ein Belt gezogen werden?
    pub fn can_connect_to(&self, other: &ConnectionPoint) -> bool {
        self.check_connect(other).is_ok()
    }

    /// Setzt oder löscht die Belegung. Gibt `true` zurück, wenn sich etwas geändert hat.
    ///
    /// Die Benachrichtigung des Owners übernimmt `PortOwner::set_port_connected`.
    pub fn set_connected(&mut self, link: Option<BeltId>) -> bool {
        if self.connected == link {
            return false;
        }
        self.connected = link;
        true
    }
}

/// Fähigkeit eines Owners (Gebäude, Kreuzung), Ports zu tragen.
pub trait PortOwner {
    fn owner_id(&self) -> OwnerId;

    /// Ursprung, auf den sich die lokalen Port-Offsets beziehen.
    fn origin(&self) -> Vec2;

    /// Verschiebt den Ursprung (Drag, Grid-Snap).
    fn set_origin(&mut self, origin: Vec2);

    fn ports(&self) -> &[ConnectionPoint];

    fn ports_mut(&mut self) -> &mut [ConnectionPoint];

    /// Belegte Fläche als Hindernis für das Routing.
    fn body(&self) -> Obstacle;

    /// Wird nach jeder Belegungsänderung eines eigenen Ports aufgerufen.
    fn on_connection_changed(&mut self) {}

    fn port(&self, index: usize) -> Option<&ConnectionPoint> {
        self.ports().get(index)
    }

    /// Bewegt den Owner und zieht alle Port-Positionen nach.
    fn move_to(&mut self, origin: Vec2) {
        self.set_origin(origin);
        self.sync_port_positions();
    }

    fn sync_port_positions(&mut self) {
        let origin = self.origin();
        for port in self.ports_mut() {
            port.update_position(origin);
        }
    }

    /// Belegt bzw. befreit einen Port und benachrichtigt den Owner bei Änderung.
    ///
    /// Gibt `false` zurück, wenn der Index ungültig ist oder sich nichts geändert hat.
    fn set_port_connected(&mut self, index: usize, link: Option<BeltId>) -> bool {
        let changed = match self.ports_mut().get_mut(index) {
            Some(port) => port.set_connected(link),
            None => return false,
        };
        if changed {
            self.on_connection_changed();
        }
        changed
    }

    /// Anzahl belegter Ports je Typ: `(inputs, outputs)`.
    fn connected_counts(&self) -> (usize, usize) {
        self.ports()
            .iter()
            .filter(|p| p.is_connected())
            .fold((0, 0), |(inputs, outputs), p| match p.port_type() {
                PortType::Input => (inputs + 1, outputs),
                PortType::Output => (inputs, outputs + 1),
            })
    }
}
