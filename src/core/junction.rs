//! Kreuzungen: kleine Verteiler (Splitter/Merger) mit je einem Port pro Seite.

use factory_belt_engine::{
    ConnectionPoint, Obstacle, OwnerId, PortOwner, PortType, Side, OBSTACLE_PADDING,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art einer Kreuzung; legt die Port-Typen fest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JunctionKind {
    /// Ein Eingang links, drei Ausgänge
    Splitter,
    /// Drei Eingänge, ein Ausgang rechts
    Merger,
}

impl JunctionKind {
    fn port_type(self, side: Side) -> PortType {
        match (self, side) {
            (JunctionKind::Splitter, Side::Left) => PortType::Input,
            (JunctionKind::Splitter, _) => PortType::Output,
            (JunctionKind::Merger, Side::Right) => PortType::Output,
            (JunctionKind::Merger, _) => PortType::Input,
        }
    }
}

/// Verhältnis belegter Ein- zu Ausgänge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JunctionBalance {
    /// Kein Port belegt
    #[default]
    Idle,
    Balanced,
    InputHeavy,
    OutputHeavy,
}

impl JunctionBalance {
    pub fn from_counts(inputs: usize, outputs: usize) -> Self {
        match (inputs, outputs) {
            (0, 0) => JunctionBalance::Idle,
            (i, o) if i == o => JunctionBalance::Balanced,
            (i, o) if i > o => JunctionBalance::InputHeavy,
            _ => JunctionBalance::OutputHeavy,
        }
    }
}

/// Kleinste Kantenlänge einer Kreuzung.
///
/// Darunter läge der eigene Port im gepolsterten, geschrumpften Körper und
/// jeder Belt der Kreuzung wäre blockiert.
pub const MIN_JUNCTION_SIZE: f32 = 2.0 * (OBSTACLE_PADDING + 1.0);

/// Quadratische Kreuzung, zentriert auf `center`.
#[derive(Debug, Clone)]
pub struct Junction {
    pub id: OwnerId,
    pub kind: JunctionKind,
    center: Vec2,
    size: f32,
    ports: Vec<ConnectionPoint>,
    balance: JunctionBalance,
}

impl Junction {
    /// Erstellt eine Kreuzung; `size` wird auf mindestens `MIN_JUNCTION_SIZE` angehoben.
    pub fn new(id: OwnerId, kind: JunctionKind, center: Vec2, size: f32) -> Self {
        let size = size.max(MIN_JUNCTION_SIZE);
        let half = size * 0.5;
        let ports = Side::ALL
            .iter()
            .map(|&side| {
                let offset = side.outward().as_vec2() * half;
                ConnectionPoint::new(id, kind.port_type(side), side, offset, center)
            })
            .collect();

        Self {
            id,
            kind,
            center,
            size,
            ports,
            balance: JunctionBalance::Idle,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn balance(&self) -> JunctionBalance {
        self.balance
    }

    /// Port-Index einer Seite (Reihenfolge wie `Side::ALL`).
    pub fn port_index(side: Side) -> usize {
        match side {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

impl PortOwner for Junction {
    fn owner_id(&self) -> OwnerId {
        self.id
    }

    fn origin(&self) -> Vec2 {
        self.center
    }

    fn set_origin(&mut self, origin: Vec2) {
        self.center = origin;
    }

    fn ports(&self) -> &[ConnectionPoint] {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut [ConnectionPoint] {
        &mut self.ports
    }

    fn body(&self) -> Obstacle {
        Obstacle::centered(self.center, Vec2::splat(self.size))
    }

    fn on_connection_changed(&mut self) {
        let (inputs, outputs) = self.connected_counts();
        self.balance = JunctionBalance::from_counts(inputs, outputs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_belt_engine::{BeltId, Direction};

    #[test]
    fn test_splitter_ports_sit_on_edges() {
        let junction = Junction::new(OwnerId(1), JunctionKind::Splitter, Vec2::new(100.0, 100.0), 20.0);
        let left = junction.port(Junction::port_index(Side::Left)).expect("linker Port");
        assert_eq!(left.position(), Vec2::new(90.0, 100.0));
        assert_eq!(left.port_type(), PortType::Input);
        assert_eq!(left.direction_vector(), Direction::RIGHT);

        let top = junction.port(Junction::port_index(Side::Top)).expect("oberer Port");
        assert_eq!(top.position(), Vec2::new(100.0, 90.0));
        assert_eq!(top.direction_vector(), Direction::UP);
    }

    #[test]
    fn test_merger_has_single_output() {
        let junction = Junction::new(OwnerId(1), JunctionKind::Merger, Vec2::ZERO, 20.0);
        let outputs: Vec<Side> = junction
            .ports()
            .iter()
            .filter(|p| p.port_type() == PortType::Output)
            .map(|p| p.side())
            .collect();
        assert_eq!(outputs, vec![Side::Right]);
    }

    #[test]
    fn test_balance_tracks_connections() {
        let mut junction = Junction::new(OwnerId(1), JunctionKind::Splitter, Vec2::ZERO, 20.0);
        assert_eq!(junction.balance(), JunctionBalance::Idle);

        junction.set_port_connected(Junction::port_index(Side::Left), Some(BeltId(1)));
        assert_eq!(junction.balance(), JunctionBalance::InputHeavy);

        junction.set_port_connected(Junction::port_index(Side::Right), Some(BeltId(2)));
        assert_eq!(junction.balance(), JunctionBalance::Balanced);

        junction.set_port_connected(Junction::port_index(Side::Top), Some(BeltId(3)));
        assert_eq!(junction.balance(), JunctionBalance::OutputHeavy);

        junction.set_port_connected(Junction::port_index(Side::Left), None);
        junction.set_port_connected(Junction::port_index(Side::Right), None);
        junction.set_port_connected(Junction::port_index(Side::Top), None);
        assert_eq!(junction.balance(), JunctionBalance::Idle);
    }

    #[test]
    fn test_moving_updates_ports_and_body() {
        let mut junction = Junction::new(OwnerId(1), JunctionKind::Merger, Vec2::ZERO, 20.0);
        junction.move_to(Vec2::new(50.0, 50.0));
        assert_eq!(junction.ports()[1].position(), Vec2::new(60.0, 50.0));
        assert_eq!(junction.body().min(), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_tiny_size_is_raised_to_minimum() {
        let junction = Junction::new(OwnerId(1), JunctionKind::Merger, Vec2::ZERO, 4.0);
        assert_eq!(junction.size(), MIN_JUNCTION_SIZE);
        let left = junction.port(Junction::port_index(Side::Left)).expect("linker Port");
        assert_eq!(left.position(), Vec2::new(-MIN_JUNCTION_SIZE * 0.5, 0.0));
    }
}
