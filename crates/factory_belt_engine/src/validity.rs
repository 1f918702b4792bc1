//! Hindernisprüfung ganzer Polylinien.

use glam::Vec2;

use crate::geometry::{segment_intersects_obstacles, Obstacle, OBSTACLE_PADDING};

/// `true`, wenn kein Segment der Polylinie ein (gepolstertes) Hindernis schneidet.
///
/// Pfade mit 0 oder 1 Punkt sind trivial frei.
pub fn is_path_clear(path: &[Vec2], obstacles: &[Obstacle]) -> bool {
    path.windows(2).all(|segment| {
        !segment_intersects_obstacles(segment[0], segment[1], obstacles, OBSTACLE_PADDING)
    })
}

/// Entfernt direkt aufeinanderfolgende identische Punkte (Null-Segmente).
pub fn dedup_consecutive_points(points: &mut Vec<Vec2>) {
    points.dedup();
}

/// `true`, wenn jedes Segment genau eine Koordinate ändert.
pub fn is_orthogonal(path: &[Vec2]) -> bool {
    path.windows(2)
        .all(|segment| (segment[0].x == segment[1].x) != (segment[0].y == segment[1].y))
}
