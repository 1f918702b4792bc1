//! Zentrale Konfiguration für die Factory-Belt-Sandbox.
//!
//! `SandboxOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Routing-Konstanten (Austrittsdistanzen, Hindernis-Padding) sind
//! nicht enthalten; sie liegen fest in `factory_belt_engine`.

use serde::{Deserialize, Serialize};

use crate::core::JunctionBalance;

// ── Raster ──────────────────────────────────────────────────────────

/// Kantenlänge einer Rasterzelle in Welteinheiten (Pixel).
pub const GRID_SIZE: f32 = 40.0;
/// Kantenlänge einer Kreuzung in Welteinheiten.
pub const JUNCTION_SIZE: f32 = 20.0;

// ── Tools ───────────────────────────────────────────────────────────

/// Pick-Radius (Welteinheiten): Klick innerhalb dieses Radius trifft einen Port.
pub const PORT_PICK_RADIUS: f32 = 12.0;

// ── Belt-Rendering ──────────────────────────────────────────────────

/// Farbe eines frei gerouteten Belts (RGBA: Grau-Gelb).
pub const BELT_COLOR: [f32; 4] = [0.85, 0.75, 0.3, 1.0];
/// Farbe eines Belts, dessen Best-Effort-Pfad ein Hindernis schneidet (RGBA: Rot).
pub const BELT_COLOR_BLOCKED: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
/// Farbe freier Eingänge (RGBA: Blau).
pub const PORT_COLOR_INPUT: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
/// Farbe freier Ausgänge (RGBA: Orange).
pub const PORT_COLOR_OUTPUT: [f32; 4] = [1.0, 0.55, 0.1, 1.0];

// ── Kreuzungs-Rendering ────────────────────────────────────────────

/// Kreuzung ohne Belts (RGBA: Dunkelgrau).
pub const JUNCTION_COLOR_IDLE: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
/// Gleich viele belegte Ein- und Ausgänge (RGBA: Grün).
pub const JUNCTION_COLOR_BALANCED: [f32; 4] = [0.2, 0.8, 0.3, 1.0];
/// Mehr Eingänge als Ausgänge belegt (RGBA: Blau).
pub const JUNCTION_COLOR_INPUT_HEAVY: [f32; 4] = [0.2, 0.5, 1.0, 1.0];
/// Mehr Ausgänge als Eingänge belegt (RGBA: Orange).
pub const JUNCTION_COLOR_OUTPUT_HEAVY: [f32; 4] = [1.0, 0.6, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Sandbox-Optionen.
/// Wird als `factory_belt_sandbox.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SandboxOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rastergröße in Welteinheiten
    pub grid_size: f32,
    /// Kreuzungsgröße in Welteinheiten
    pub junction_size: f32,
    /// Owner beim Loslassen auf das Raster einrasten
    #[serde(default = "default_snap_on_drop")]
    pub snap_on_drop: bool,

    // ── Tools ────────────────────────────────────────────────────
    /// Pick-Radius für Ports in Welteinheiten
    pub port_pick_radius: f32,
    /// Belt auch ohne Ziel-Port an einem freien Endpunkt anlegen
    #[serde(default)]
    pub allow_free_endpoints: bool,

    // ── Belts & Ports ────────────────────────────────────────────
    pub belt_color: [f32; 4],
    pub belt_color_blocked: [f32; 4],
    pub port_color_input: [f32; 4],
    pub port_color_output: [f32; 4],

    // ── Kreuzungen ───────────────────────────────────────────────
    pub junction_color_idle: [f32; 4],
    pub junction_color_balanced: [f32; 4],
    pub junction_color_input_heavy: [f32; 4],
    pub junction_color_output_heavy: [f32; 4],
}

impl Default for SandboxOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            junction_size: JUNCTION_SIZE,
            snap_on_drop: true,

            port_pick_radius: PORT_PICK_RADIUS,
            allow_free_endpoints: false,

            belt_color: BELT_COLOR,
            belt_color_blocked: BELT_COLOR_BLOCKED,
            port_color_input: PORT_COLOR_INPUT,
            port_color_output: PORT_COLOR_OUTPUT,

            junction_color_idle: JUNCTION_COLOR_IDLE,
            junction_color_balanced: JUNCTION_COLOR_BALANCED,
            junction_color_input_heavy: JUNCTION_COLOR_INPUT_HEAVY,
            junction_color_output_heavy: JUNCTION_COLOR_OUTPUT_HEAVY,
        }
    }
}

/// Serde-Default für `snap_on_drop` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_snap_on_drop() -> bool {
    true
}

impl SandboxOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("factory_belt_sandbox"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("factory_belt_sandbox.toml")
    }

    /// Farbe einer Kreuzung je nach Belegungs-Bilanz.
    pub fn junction_color(&self, balance: JunctionBalance) -> [f32; 4] {
        match balance {
            JunctionBalance::Idle => self.junction_color_idle,
            JunctionBalance::Balanced => self.junction_color_balanced,
            JunctionBalance::InputHeavy => self.junction_color_input_heavy,
            JunctionBalance::OutputHeavy => self.junction_color_output_heavy,
        }
    }

    /// Belt-Farbe; blockierte Best-Effort-Pfade werden hervorgehoben.
    pub fn belt_color(&self, clear: bool) -> [f32; 4] {
        if clear {
            self.belt_color
        } else {
            self.belt_color_blocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_roundtrip_through_toml() {
        let options = SandboxOptions::default();
        let text = toml::to_string_pretty(&options).expect("TOML-Serialisierung");
        let parsed: SandboxOptions = toml::from_str(&text).expect("TOML-Parse");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_fall_back() {
        let full = toml::to_string_pretty(&SandboxOptions::default()).expect("TOML-Serialisierung");
        let reduced: String = full
            .lines()
            .filter(|line| {
                !line.starts_with("snap_on_drop") && !line.starts_with("allow_free_endpoints")
            })
            .map(|line| format!("{line}\n"))
            .collect();
        let parsed: SandboxOptions = toml::from_str(&reduced).expect("Parse ohne optionale Felder");
        assert!(parsed.snap_on_drop);
        assert!(!parsed.allow_free_endpoints);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::path::Path::new("/definitiv/nicht/vorhanden.toml");
        assert_eq!(SandboxOptions::load_from_file(path), SandboxOptions::default());
    }

    #[test]
    fn test_junction_colors_follow_balance() {
        let options = SandboxOptions::default();
        assert_eq!(
            options.junction_color(JunctionBalance::InputHeavy),
            JUNCTION_COLOR_INPUT_HEAVY
        );
        assert_eq!(options.belt_color(false), BELT_COLOR_BLOCKED);
    }
}
