//! Orthogonale Pfadsynthese für Belts.
//!
//! Ablauf je Aufruf:
//! 1. Für jede Austrittsdistanz aus `EXIT_CLEARANCES` geradeaus aus `start`
//!    heraus und geradeaus in `end` hinein.
//! 2. Mittelstück per `route_between_points` wählen (feste Kandidaten-Reihenfolge).
//! 3. Erster hindernisfreier Gesamtpfad gewinnt; sonst der zuletzt gebaute.
//!
//! Reine Funktion: gleiche Eingaben liefern immer denselben Pfad.

pub mod candidates;


use glam::Vec2;

use crate::direction::Direction;
use crate::endpoint::RouteAnchor;
use crate::geometry::Obstacle;
use crate::validity::{dedup_consecutive_points, is_path_clear};

use candidates::{
    Waypoints, corner_candidates, first_clear, split_candidates, straight_candidate,
    uturn_candidates,
};

/// Geradeaus-Strecken aus dem Start und in das Ziel, aufsteigend probiert.
pub const EXIT_CLEARANCES: [f32; 6] = [40.0, 60.0, 80.0, 100.0, 120.0, 160.0];

/// Berechnet die Polylinie eines Belts von `start` nach `end`.
///
/// `start_dir` ist die Richtung des ersten Segments, `end_dir` die Bewegungsrichtung
/// beim Eintreffen in `end`. Ist eine der beiden `Direction::NONE`, wird ohne
/// Hindernissuche ein einfacher Pfad mit ein oder zwei Knicken geliefert.
///
/// Findet keine Austrittsdistanz einen freien Pfad, wird der Pfad der größten
/// Distanz trotzdem zurückgegeben (kann Hindernisse schneiden).
pub fn generate_path(
    start: Vec2,
    end: Vec2,
    start_dir: Direction,
    end_dir: Direction,
    obstacles: &[Obstacle],
) -> Vec<Vec2> {
    if start_dir.is_none() || end_dir.is_none() {
        return simple_path(start, end, start_dir, end_dir);
    }

    let mut last_attempt = Vec::new();
    for clearance in EXIT_CLEARANCES {
        let path = path_with_clearance(start, end, start_dir, end_dir, clearance, obstacles);
        if is_path_clear(&path, obstacles) {
            return path;
        }
        last_attempt = path;
    }

    log::debug!(
        "Kein freier Belt-Pfad von {:?} nach {:?} gefunden, nutze Best-Effort-Pfad",
        start,
        end
    );
    last_attempt
}

/// Routet zwischen zwei Endpunkten (Port oder freier Knoten).
pub fn route_between(
    start: &dyn RouteAnchor,
    end: &dyn RouteAnchor,
    obstacles: &[Obstacle],
) -> Vec<Vec2> {
    generate_path(
        start.position(),
        end.position(),
        start.direction_vector(),
        end.direction_vector(),
        obstacles,
    )
}

/// Baut den Gesamtpfad `[start, exit, ..mitte, entry, end]` für eine Austrittsdistanz.
pub fn path_with_clearance(
    start: Vec2,
    end: Vec2,
    start_dir: Direction,
    end_dir: Direction,
    clearance: f32,
    obstacles: &[Obstacle],
) -> Vec<Vec2> {
    let exit_point = start + start_dir.as_vec2() * clearance;
    let entry_point = end - end_dir.as_vec2() * clearance;
    let middle = route_between_points(exit_point, entry_point, start_dir, end_dir, obstacles);

    let mut path = Vec::with_capacity(middle.len() + 4);
    path.push(start);
    path.push(exit_point);
    path.extend(middle);
    path.push(entry_point);
    path.push(end);
    dedup_consecutive_points(&mut path);
    path
}

/// Wählt die Zwischenpunkte zwischen Austritts- und Eintrittspunkt.
///
/// - Umkehr (entgegengesetzte Richtungen auf einer Achse, oder Ziel liegt
///   hinter `from_dir`): seitlich ausweichen, nie auf derselben Linie zurück.
/// - Gleiche Orientierung: Versatz an einer Teilungslinie; auf einer Linie
///   liegende Punkte werden zuerst direkt verbunden.
/// - Senkrechte Orientierung: genau ein Eckpunkt.
pub fn route_between_points(
    from: Vec2,
    to: Vec2,
    from_dir: Direction,
    to_dir: Direction,
    obstacles: &[Obstacle],
) -> Waypoints {
    let delta = to - from;
    let opposite = from_dir.same_axis(to_dir) && from_dir == to_dir.reversed();
    let backwards = from_dir.dot(delta) < 0.0;

    if opposite || backwards {
        return first_clear(from, to, uturn_candidates(from, to, from_dir), obstacles);
    }

    if from_dir.same_axis(to_dir) {
        let horizontal = from_dir.is_horizontal();
        let aligned = if horizontal {
            from.y == to.y
        } else {
            from.x == to.x
        };

        let mut candidates = Vec::with_capacity(14);
        if aligned {
            candidates.push(straight_candidate());
        } else {
            candidates.extend(split_candidates(from, to, horizontal));
        }
        candidates.extend(uturn_candidates(from, to, from_dir));
        return first_clear(from, to, candidates, obstacles);
    }

    first_clear(from, to, corner_candidates(from, to, from_dir), obstacles)
}

/// Pfad für Endpunkte ohne Vorzugsrichtung (keine Hindernissuche).
///
/// Mit nur einer bekannten Richtung genügt ein Knick, ohne Richtung wird an
/// der Mitte der dominanten Achse zweimal geknickt.
fn simple_path(start: Vec2, end: Vec2, start_dir: Direction, end_dir: Direction) -> Vec<Vec2> {
    let mut path = if start.x == end.x || start.y == end.y {
        vec![start, end]
    } else if !start_dir.is_none() {
        let corner = if start_dir.is_horizontal() {
            Vec2::new(end.x, start.y)
        } else {
            Vec2::new(start.x, end.y)
        };
        vec![start, corner, end]
    } else if !end_dir.is_none() {
        let corner = if end_dir.is_horizontal() {
            Vec2::new(start.x, end.y)
        } else {
            Vec2::new(end.x, start.y)
        };
        vec![start, corner, end]
    } else {
        let delta = end - start;
        if delta.x.abs() >= delta.y.abs() {
            let mid_x = (start.x + end.x) * 0.5;
            vec![
                start,
                Vec2::new(mid_x, start.y),
                Vec2::new(mid_x, end.y),
                end,
            ]
        } else {
            let mid_y = (start.y + end.y) * 0.5;
            vec![
                start,
                Vec2::new(start.x, mid_y),
                Vec2::new(end.x, mid_y),
                end,
            ]
        }
    };
    dedup_consecutive_points(&mut path);
    path
}
