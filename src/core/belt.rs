//! Förderbänder zwischen zwei Endpunkten.

use factory_belt_engine::{
    is_path_clear, route_between, BeltId, EndpointKind, FreeNode, Obstacle, OwnerId, RouteAnchor,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Verweis auf einen Port: Owner + Index in dessen Port-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    pub owner: OwnerId,
    pub port: usize,
}

impl PortRef {
    pub fn new(owner: OwnerId, port: usize) -> Self {
        Self { owner, port }
    }
}

/// Ein Ende eines Belts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeltEndpoint {
    Port(PortRef),
    FreeNode(FreeNode),
}

impl BeltEndpoint {
    pub fn kind(&self) -> EndpointKind {
        match self {
            BeltEndpoint::Port(_) => EndpointKind::Port,
            BeltEndpoint::FreeNode(_) => EndpointKind::FreeNode,
        }
    }

    pub fn owner(&self) -> Option<OwnerId> {
        match self {
            BeltEndpoint::Port(port) => Some(port.owner),
            BeltEndpoint::FreeNode(_) => None,
        }
    }

    pub fn port_ref(&self) -> Option<PortRef> {
        match self {
            BeltEndpoint::Port(port) => Some(*port),
            BeltEndpoint::FreeNode(_) => None,
        }
    }
}

/// Welches Ende eines Belts gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeltEnd {
    Start,
    End,
}

/// Belt mit Polylinie. `start` ist immer die OUTPUT-Seite.
#[derive(Debug, Clone)]
pub struct Belt {
    pub id: BeltId,
    pub start: BeltEndpoint,
    pub end: BeltEndpoint,
    /// Zuletzt berechneter Pfad (wird nie gespeichert, nur neu geroutet)
    pub path: Vec<Vec2>,
}

impl Belt {
    pub fn new(id: BeltId, start: BeltEndpoint, end: BeltEndpoint) -> Self {
        Self {
            id,
            start,
            end,
            path: Vec::new(),
        }
    }

    pub fn endpoint(&self, which: BeltEnd) -> &BeltEndpoint {
        match which {
            BeltEnd::Start => &self.start,
            BeltEnd::End => &self.end,
        }
    }

    /// Berechnet den Pfad zwischen den aufgelösten Endpunkten neu.
    pub fn update_path(
        &mut self,
        start: &dyn RouteAnchor,
        end: &dyn RouteAnchor,
        obstacles: &[Obstacle],
    ) {
        self.path = route_between(start, end, obstacles);
    }

    /// Hängt der Belt an einem Port dieses Owners?
    pub fn touches(&self, owner: OwnerId) -> bool {
        self.start.owner() == Some(owner) || self.end.owner() == Some(owner)
    }

    /// Setzt die Position eines freien Endes. Gibt `false` zurück, wenn das Ende ein Port ist.
    pub fn set_free_position(&mut self, which: BeltEnd, position: Vec2) -> bool {
        let endpoint = match which {
            BeltEnd::Start => &mut self.start,
            BeltEnd::End => &mut self.end,
        };
        match endpoint {
            BeltEndpoint::FreeNode(node) => {
                node.position = position;
                true
            }
            BeltEndpoint::Port(_) => false,
        }
    }

    /// Summe der Segmentlängen.
    pub fn length(&self) -> f32 {
        self.path.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    pub fn is_clear(&self, obstacles: &[Obstacle]) -> bool {
        is_path_clear(&self.path, obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use factory_belt_engine::Direction;

    #[test]
    fn test_free_belt_routes_and_measures() {
        let start = FreeNode::new(Vec2::new(0.0, 0.0), Direction::RIGHT);
        let end = FreeNode::new(Vec2::new(200.0, 0.0), Direction::RIGHT);
        let mut belt = Belt::new(
            BeltId(1),
            BeltEndpoint::FreeNode(start),
            BeltEndpoint::FreeNode(end),
        );
        belt.update_path(&start, &end, &[]);
        assert_eq!(belt.path.len(), 4);
        assert_relative_eq!(belt.length(), 200.0);
        assert!(belt.is_clear(&[]));
    }

    #[test]
    fn test_touches_only_port_owners() {
        let belt = Belt::new(
            BeltId(2),
            BeltEndpoint::Port(PortRef::new(OwnerId(5), 0)),
            BeltEndpoint::FreeNode(FreeNode::unoriented(Vec2::ZERO)),
        );
        assert!(belt.touches(OwnerId(5)));
        assert!(!belt.touches(OwnerId(6)));
        assert_eq!(belt.endpoint(BeltEnd::End).kind(), EndpointKind::FreeNode);
    }

    #[test]
    fn test_only_free_ends_can_be_moved() {
        let mut belt = Belt::new(
            BeltId(3),
            BeltEndpoint::Port(PortRef::new(OwnerId(1), 0)),
            BeltEndpoint::FreeNode(FreeNode::unoriented(Vec2::ZERO)),
        );
        assert!(!belt.set_free_position(BeltEnd::Start, Vec2::ONE));
        assert!(belt.set_free_position(BeltEnd::End, Vec2::new(3.0, 4.0)));
        match belt.end {
            BeltEndpoint::FreeNode(node) => assert_eq!(node.position, Vec2::new(3.0, 4.0)),
            BeltEndpoint::Port(_) => panic!("Ende muss frei bleiben"),
        }
    }
}
