//! Geometrie-Primitive: Hindernis-Rechtecke und Schnitttests für Segmente.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Abstand (Welteinheiten), um den jedes Hindernis beim Test vergrößert wird.
pub const OBSTACLE_PADDING: f32 = 5.0;

/// Achsparalleles Hindernis-Rechteck; `(x, y)` ist die linke obere Ecke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Erstellt ein Hindernis aus linker oberer Ecke und Größe.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Quadrat bzw. Rechteck um einen Mittelpunkt.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::from_min_size(center - size * 0.5, size)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Punkt liegt innerhalb oder auf dem Rand.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Vergrößert das Rechteck um `padding` auf allen Seiten.
    pub fn expanded(&self, padding: f32) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            self.width + padding * 2.0,
            self.height + padding * 2.0,
        )
    }

    /// Verkleinert das Rechteck um `amount` auf allen Seiten (nie unter Größe 0).
    pub fn inset(&self, amount: f32) -> Self {
        let width = (self.width - amount * 2.0).max(0.0);
        let height = (self.height - amount * 2.0).max(0.0);
        let center = self.center();
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    /// Die vier Kanten im Uhrzeigersinn, beginnend oben.
    fn edges(&self) -> [(Vec2, Vec2); 4] {
        let tl = self.min();
        let br = self.max();
        let tr = Vec2::new(br.x, tl.y);
        let bl = Vec2::new(tl.x, br.y);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Schnitttest zweier Segmente `p1→p2` und `p3→p4` über die Parameterform.
///
/// Exakt parallele Segmente (`denom == 0`) gelten als nicht schneidend,
/// auch bei kollinearer Überlappung.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return false;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// `true`, wenn ein Endpunkt im Rechteck liegt oder das Segment eine Kante kreuzt.
pub fn segment_intersects_rect(p1: Vec2, p2: Vec2, rect: &Obstacle) -> bool {
    if rect.contains(p1) || rect.contains(p2) {
        return true;
    }
    rect.edges()
        .iter()
        .any(|&(a, b)| segments_intersect(p1, p2, a, b))
}

/// Prüft ein Segment gegen alle Hindernisse, jeweils um `padding` vergrößert.
pub fn segment_intersects_obstacles(
    p1: Vec2,
    p2: Vec2,
    obstacles: &[Obstacle],
    padding: f32,
) -> bool {
    obstacles
        .iter()
        .any(|obstacle| segment_intersects_rect(p1, p2, &obstacle.expanded(padding)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_parallel_segments_never_intersect() {
        // Kollineare Überlappung zählt nicht als Schnitt
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        ));
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 1.0),
        ));
    }

    #[test]
    fn test_disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(5.0, 5.0),
        ));
    }

    #[test]
    fn test_segment_crossing_left_edge_hits_rect() {
        let rect = Obstacle::new(5.0, -5.0, 10.0, 10.0);
        assert!(segment_intersects_rect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            &rect
        ));
    }

    #[test]
    fn test_endpoint_inside_rect_hits() {
        let rect = Obstacle::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment_intersects_rect(
            Vec2::new(5.0, 5.0),
            Vec2::new(50.0, 5.0),
            &rect
        ));
    }

    #[test]
    fn test_segment_entering_through_top_edge_hits() {
        let rect = Obstacle::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment_intersects_rect(
            Vec2::new(5.0, -10.0),
            Vec2::new(5.0, 5.0),
            &rect
        ));
    }

    #[test]
    fn test_segment_outside_rect_misses() {
        let rect = Obstacle::new(0.0, 0.0, 10.0, 10.0);
        assert!(!segment_intersects_rect(
            Vec2::new(-5.0, 20.0),
            Vec2::new(30.0, 20.0),
            &rect
        ));
    }

    #[test]
    fn test_padding_catches_near_miss() {
        let obstacles = [Obstacle::new(0.0, 0.0, 10.0, 10.0)];
        let p1 = Vec2::new(-20.0, 13.0);
        let p2 = Vec2::new(20.0, 13.0);

        assert!(!segment_intersects_obstacles(p1, p2, &obstacles, 0.0));
        assert!(segment_intersects_obstacles(
            p1,
            p2,
            &obstacles,
            OBSTACLE_PADDING
        ));
    }

    #[test]
    fn test_inset_shrinks_around_center() {
        let rect = Obstacle::new(0.0, 0.0, 40.0, 20.0).inset(6.0);
        assert_eq!(rect, Obstacle::new(6.0, 6.0, 28.0, 8.0));

        let collapsed = Obstacle::new(0.0, 0.0, 4.0, 4.0).inset(6.0);
        assert_eq!(collapsed.width, 0.0);
        assert_eq!(collapsed.center(), Vec2::new(2.0, 2.0));
    }
}
