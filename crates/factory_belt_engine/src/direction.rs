//! Achsparallele Bewegungsrichtung an einem Belt-Endpunkt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Richtung der Bewegung durch einen Punkt.
///
/// Jede Komponente ist -1, 0 oder 1; höchstens eine ist ungleich 0.
/// `Direction::NONE` bedeutet "keine bevorzugte Richtung".
/// Beim Deserialisieren läuft jeder Wert durch `Direction::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawDirection")]
pub struct Direction {
    x: i8,
    y: i8,
}

/// Ungeprüfte Komponenten, wie sie in Dateien stehen.
#[derive(Deserialize)]
struct RawDirection {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

impl From<RawDirection> for Direction {
    fn from(raw: RawDirection) -> Self {
        Direction::new(raw.x.signum() as i8, raw.y.signum() as i8)
    }
}

impl Direction {
    /// Keine bevorzugte Richtung
    pub const NONE: Self = Self { x: 0, y: 0 };
    /// Nach oben (-Y, Bildschirmkoordinaten)
    pub const UP: Self = Self { x: 0, y: -1 };
    /// Nach unten (+Y)
    pub const DOWN: Self = Self { x: 0, y: 1 };
    /// Nach links (-X)
    pub const LEFT: Self = Self { x: -1, y: 0 };
    /// Nach rechts (+X)
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    /// Erstellt eine Richtung aus Komponenten.
    ///
    /// Werte werden auf -1/0/1 geklemmt; diagonale Eingaben werden auf die
    /// X-Achse reduziert, damit die Achsparallelität erhalten bleibt.
    pub fn new(x: i8, y: i8) -> Self {
        let x = x.signum();
        let y = y.signum();
        if x != 0 && y != 0 {
            return Self { x, y: 0 };
        }
        Self { x, y }
    }

    /// Leitet die Richtung aus der dominanten Achse eines Vektors ab.
    ///
    /// Bei Gleichstand gewinnt die X-Achse; der Nullvektor ergibt `NONE`.
    pub fn dominant(v: Vec2) -> Self {
        if v.x == 0.0 && v.y == 0.0 {
            return Self::NONE;
        }
        if v.x.abs() >= v.y.abs() {
            Self { x: if v.x > 0.0 { 1 } else { -1 }, y: 0 }
        } else {
            Self { x: 0, y: if v.y > 0.0 { 1 } else { -1 } }
        }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// `true` für den Sentinel ohne Vorzugsrichtung.
    pub fn is_none(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    pub fn is_horizontal(&self) -> bool {
        self.x != 0
    }

    pub fn is_vertical(&self) -> bool {
        self.y != 0
    }

    /// Entgegengesetzte Richtung.
    pub fn reversed(&self) -> Self {
        Self { x: -self.x, y: -self.y }
    }

    /// Einheitsvektor in Weltkoordinaten.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Skalarprodukt mit einem Weltvektor.
    pub fn dot(&self, v: Vec2) -> f32 {
        self.as_vec2().dot(v)
    }

    /// `true`, wenn beide Richtungen auf derselben Achse liegen.
    pub fn same_axis(&self, other: Direction) -> bool {
        (self.is_horizontal() && other.is_horizontal())
            || (self.is_vertical() && other.is_vertical())
    }
}
