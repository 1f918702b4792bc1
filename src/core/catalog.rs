//! Spieldaten: Items, Rezepte und Maschinen.
//!
//! Der Katalog wird explizit erzeugt (`builtin()` oder aus TOML) und an die
//! Stellen übergeben, die ihn brauchen. Es gibt keinen globalen Zustand.

use anyhow::{bail, Context};
use factory_belt_engine::{PortType, Side};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ein transportierbares Item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Anzeigename
    pub name: String,
    /// Maximale Stapelgröße
    #[serde(default = "default_stack_size")]
    pub stack_size: u32,
}

fn default_stack_size() -> u32 {
    100
}

/// Menge eines Items in einem Rezept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub item: String,
    pub amount: u32,
}

/// Ein Produktionsrezept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub name: String,
    /// Dauer eines Zyklus in Sekunden
    pub duration_secs: f32,
    #[serde(default)]
    pub inputs: Vec<RecipeIngredient>,
    pub outputs: Vec<RecipeIngredient>,
}

/// Position und Typ eines Ports an einer Maschine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortSpec {
    pub side: Side,
    pub port_type: PortType,
}

/// Ein baubares Gebäude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSpec {
    pub name: String,
    /// Grundfläche in Rasterzellen `[breite, höhe]`
    pub footprint: [u32; 2],
    /// Ports in Reihenfolge; mehrere Ports einer Seite werden gleichmäßig verteilt
    pub ports: Vec<PortSpec>,
    /// Erlaubte Rezepte (leer = Maschine ohne Rezept, z.B. Lager)
    #[serde(default)]
    pub recipes: Vec<String>,
}

impl MachineSpec {
    pub fn allows_recipe(&self, recipe_id: &str) -> bool {
        self.recipes.iter().any(|r| r == recipe_id)
    }
}

/// Vollständiger Spieldaten-Katalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameCatalog {
    #[serde(default)]
    pub items: IndexMap<String, ItemSpec>,
    #[serde(default)]
    pub recipes: IndexMap<String, RecipeSpec>,
    #[serde(default)]
    pub machines: IndexMap<String, MachineSpec>,
}

impl GameCatalog {
    /// Eingebauter Standard-Katalog.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();

        for (id, name) in [
            ("iron_ore", "Eisenerz"),
            ("copper_ore", "Kupfererz"),
            ("iron_plate", "Eisenplatte"),
            ("copper_plate", "Kupferplatte"),
            ("copper_cable", "Kupferkabel"),
            ("gear", "Zahnrad"),
            ("circuit", "Schaltkreis"),
        ] {
            catalog.items.insert(
                id.to_string(),
                ItemSpec {
                    name: name.to_string(),
                    stack_size: default_stack_size(),
                },
            );
        }

        let recipe = |name: &str, duration_secs: f32, inputs: &[(&str, u32)], outputs: &[(&str, u32)]| {
            let to_ingredients = |list: &[(&str, u32)]| {
                list.iter()
                    .map(|(item, amount)| RecipeIngredient {
                        item: item.to_string(),
                        amount: *amount,
                    })
                    .collect()
            };
            RecipeSpec {
                name: name.to_string(),
                duration_secs,
                inputs: to_ingredients(inputs),
                outputs: to_ingredients(outputs),
            }
        };

        catalog.recipes.insert(
            "mine_iron".into(),
            recipe("Eisenerz abbauen", 2.0, &[], &[("iron_ore", 1)]),
        );
        catalog.recipes.insert(
            "mine_copper".into(),
            recipe("Kupfererz abbauen", 2.0, &[], &[("copper_ore", 1)]),
        );
        catalog.recipes.insert(
            "iron_plate".into(),
            recipe("Eisenplatte", 3.2, &[("iron_ore", 1)], &[("iron_plate", 1)]),
        );
        catalog.recipes.insert(
            "copper_plate".into(),
            recipe("Kupferplatte", 3.2, &[("copper_ore", 1)], &[("copper_plate", 1)]),
        );
        catalog.recipes.insert(
            "copper_cable".into(),
            recipe("Kupferkabel", 0.5, &[("copper_plate", 1)], &[("copper_cable", 2)]),
        );
        catalog.recipes.insert(
            "gear".into(),
            recipe("Zahnrad", 0.5, &[("iron_plate", 2)], &[("gear", 1)]),
        );
        catalog.recipes.insert(
            "circuit".into(),
            recipe(
                "Schaltkreis",
                0.5,
                &[("iron_plate", 1), ("copper_cable", 3)],
                &[("circuit", 1)],
            ),
        );

        let port = |side, port_type| PortSpec { side, port_type };
        catalog.machines.insert(
            "miner".into(),
            MachineSpec {
                name: "Bergbaubohrer".into(),
                footprint: [2, 2],
                ports: vec![port(Side::Right, PortType::Output)],
                recipes: vec!["mine_iron".into(), "mine_copper".into()],
            },
        );
        catalog.machines.insert(
            "furnace".into(),
            MachineSpec {
                name: "Schmelzofen".into(),
                footprint: [2, 2],
                ports: vec![
                    port(Side::Left, PortType::Input),
                    port(Side::Right, PortType::Output),
                ],
                recipes: vec!["iron_plate".into(), "copper_plate".into()],
            },
        );
        catalog.machines.insert(
            "assembler".into(),
            MachineSpec {
                name: "Montagemaschine".into(),
                footprint: [3, 3],
                ports: vec![
                    port(Side::Left, PortType::Input),
                    port(Side::Left, PortType::Input),
                    port(Side::Top, PortType::Input),
                    port(Side::Right, PortType::Output),
                ],
                recipes: vec!["copper_cable".into(), "gear".into(), "circuit".into()],
            },
        );
        catalog.machines.insert(
            "chest".into(),
            MachineSpec {
                name: "Kiste".into(),
                footprint: [1, 1],
                ports: vec![port(Side::Left, PortType::Input)],
                recipes: Vec::new(),
            },
        );

        catalog
    }

    /// Parst und validiert einen Katalog aus TOML.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let catalog: Self = toml::from_str(content).context("Katalog-TOML ungültig")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Lädt einen Katalog aus einer TOML-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Katalog nicht lesbar: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Katalog fehlerhaft: {}", path.display()))?;
        log::info!(
            "Katalog geladen aus {}: {} Items, {} Rezepte, {} Maschinen",
            path.display(),
            catalog.items.len(),
            catalog.recipes.len(),
            catalog.machines.len()
        );
        Ok(catalog)
    }

    /// Prüft alle Querverweise zwischen Items, Rezepten und Maschinen.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (recipe_id, recipe) in &self.recipes {
            for ingredient in recipe.inputs.iter().chain(&recipe.outputs) {
                if !self.items.contains_key(&ingredient.item) {
                    bail!(
                        "Rezept '{}' verweist auf unbekanntes Item '{}'",
                        recipe_id,
                        ingredient.item
                    );
                }
            }
            if recipe.duration_secs <= 0.0 {
                bail!("Rezept '{}' hat keine positive Dauer", recipe_id);
            }
        }

        for (machine_id, machine) in &self.machines {
            if machine.footprint.contains(&0) {
                bail!("Maschine '{}' hat eine leere Grundfläche", machine_id);
            }
            if let Some(recipe) = machine.recipes.iter().find(|r| !self.recipes.contains_key(*r)) {
                bail!(
                    "Maschine '{}' verweist auf unbekanntes Rezept '{}'",
                    machine_id,
                    recipe
                );
            }
        }
        Ok(())
    }

    pub fn machine(&self, machine_id: &str) -> Option<&MachineSpec> {
        self.machines.get(machine_id)
    }

    pub fn recipe(&self, recipe_id: &str) -> Option<&RecipeSpec> {
        self.recipes.get(recipe_id)
    }
}
