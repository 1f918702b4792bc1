//! Kandidaten-Generatoren für das Mittelstück zwischen Austritts- und Eintrittspunkt.
//!
//! Jeder Kandidat ist die Liste der Zwischenpunkte zwischen `from` und `to`
//! (beide exklusiv). Die Reihenfolge der erzeugten Kandidaten ist die Priorität.

use glam::Vec2;

use crate::direction::Direction;
use crate::geometry::Obstacle;
use crate::validity::is_path_clear;

/// Seitliche Ausweichabstände beim Umkehren (innerster zuerst).
pub const UTURN_CLEARANCES: [f32; 4] = [80.0, 120.0, 160.0, 200.0];

/// Teilungsverhältnisse für den Versatz bei gleicher Orientierung.
pub const SPLIT_FRACTIONS: [f32; 5] = [0.5, 0.3, 0.7, 0.4, 0.6];

/// Zwischenpunkte eines Kandidaten (ohne `from` und `to`).
pub type Waypoints = Vec<Vec2>;

/// Direkte Verbindung ohne Zwischenpunkte.
pub fn straight_candidate() -> Waypoints {
    Vec::new()
}

/// Ausweichrouten quer zu `from_dir`: erst seitlich versetzen, dann auf `to` ausrichten.
///
/// Reihenfolge: Abstand aufsteigend, je Abstand zuerst Vorzeichen +1, dann -1.
pub fn uturn_candidates(from: Vec2, to: Vec2, from_dir: Direction) -> Vec<Waypoints> {
    let perpendicular = if from_dir.is_horizontal() {
        Vec2::Y
    } else {
        Vec2::X
    };

    let mut candidates = Vec::with_capacity(UTURN_CLEARANCES.len() * 2);
    for distance in UTURN_CLEARANCES {
        for sign in [1.0, -1.0] {
            let jog = from + perpendicular * (sign * distance);
            let align = if from_dir.is_horizontal() {
                Vec2::new(to.x, jog.y)
            } else {
                Vec2::new(jog.x, to.y)
            };
            candidates.push(vec![jog, align]);
        }
    }
    candidates
}

/// Versatz an einer Teilungslinie zwischen `from` und `to` bei gleicher Orientierung.
pub fn split_candidates(from: Vec2, to: Vec2, horizontal: bool) -> Vec<Waypoints> {
    SPLIT_FRACTIONS
        .iter()
        .map(|&fraction| {
            if horizontal {
                let x = from.x + (to.x - from.x) * fraction;
                vec![Vec2::new(x, from.y), Vec2::new(x, to.y)]
            } else {
                let y = from.y + (to.y - from.y) * fraction;
                vec![Vec2::new(from.x, y), Vec2::new(to.x, y)]
            }
        })
        .collect()
}

/// Die beiden Eckpunkte bei senkrechter Orientierung; der in `from_dir` fortsetzende zuerst.
pub fn corner_candidates(from: Vec2, to: Vec2, from_dir: Direction) -> Vec<Waypoints> {
    let along_x = Vec2::new(to.x, from.y);
    let along_y = Vec2::new(from.x, to.y);
    if from_dir.is_horizontal() {
        vec![vec![along_x], vec![along_y]]
    } else {
        vec![vec![along_y], vec![along_x]]
    }
}

/// Testpfad `[from, ..waypoints, to]` für die Hindernisprüfung.
pub fn candidate_path(from: Vec2, waypoints: &[Vec2], to: Vec2) -> Vec<Vec2> {
    let mut path = Vec::with_capacity(waypoints.len() + 2);
    path.push(from);
    path.extend_from_slice(waypoints);
    path.push(to);
    path.dedup();
    path
}

/// Liefert den ersten freien Kandidaten, sonst den ersten erzeugten.
pub fn first_clear(
    from: Vec2,
    to: Vec2,
    candidates: Vec<Waypoints>,
    obstacles: &[Obstacle],
) -> Waypoints {
    let mut fallback = None;
    for candidate in candidates {
        if is_path_clear(&candidate_path(from, &candidate, to), obstacles) {
            return candidate;
        }
        if fallback.is_none() {
            fallback = Some(candidate);
        }
    }
    fallback.unwrap_or_default()
}
