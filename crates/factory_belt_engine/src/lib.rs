//! Factory-Belt-Engine.
//!
//! Host-neutraler Kern der Sandbox:
//! - Geometrie-Primitive und Hindernisprüfung
//! - Anschlusspunkt-Modell (typisierte, gerichtete Ports)
//! - Orthogonale Pfadsynthese für Belts

pub mod connection_point;
pub mod direction;
pub mod endpoint;
pub mod geometry;
pub mod routing;
pub mod validity;

pub use connection_point::{
    BeltId, ConnectError, ConnectionPoint, OwnerId, PortOwner, PortType, Side,
};
pub use direction::Direction;
pub use endpoint::{EndpointKind, FreeNode, RouteAnchor};
pub use geometry::{
    OBSTACLE_PADDING, Obstacle, segment_intersects_obstacles, segment_intersects_rect,
    segments_intersect,
};
pub use routing::{EXIT_CLEARANCES, generate_path, route_between, route_between_points};
pub use validity::{dedup_consecutive_points, is_orthogonal, is_path_clear};
