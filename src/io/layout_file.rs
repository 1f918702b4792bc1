//! JSON-Layout-Datei: Owner und Belt-Endpunkte, keine Pfade.
//!
//! Pfade werden beim Laden immer neu geroutet.

use std::path::Path;

use anyhow::{bail, Context};
use factory_belt_engine::{BeltId, Direction, FreeNode, OwnerId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{BeltEndpoint, FactoryLayout, GameCatalog, JunctionKind, PortRef};
use crate::shared::SandboxOptions;

/// Aktuelle Formatversion.
pub const LAYOUT_VERSION: u32 = 1;

fn default_version() -> u32 {
    LAYOUT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub factories: Vec<FactoryRecord>,
    #[serde(default)]
    pub junctions: Vec<JunctionRecord>,
    #[serde(default)]
    pub belts: Vec<BeltRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryRecord {
    pub id: u64,
    pub machine: String,
    /// Linke obere Ecke
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionRecord {
    pub id: u64,
    pub kind: JunctionKind,
    /// Mittelpunkt
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltRecord {
    pub id: u64,
    pub start: EndpointRecord,
    pub end: EndpointRecord,
}

/// Belt-Ende: Port per Owner-ID + Index oder freie Position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EndpointRecord {
    Port {
        owner: u64,
        port: usize,
    },
    Free {
        x: f32,
        y: f32,
        #[serde(default)]
        direction: Direction,
    },
}

impl From<&BeltEndpoint> for EndpointRecord {
    fn from(endpoint: &BeltEndpoint) -> Self {
        match endpoint {
            BeltEndpoint::Port(port) => EndpointRecord::Port {
                owner: port.owner.0,
                port: port.port,
            },
            BeltEndpoint::FreeNode(node) => EndpointRecord::Free {
                x: node.position.x,
                y: node.position.y,
                direction: node.direction,
            },
        }
    }
}

impl From<&EndpointRecord> for BeltEndpoint {
    fn from(record: &EndpointRecord) -> Self {
        match *record {
            EndpointRecord::Port { owner, port } => {
                BeltEndpoint::Port(PortRef::new(OwnerId(owner), port))
            }
            EndpointRecord::Free { x, y, direction } => {
                BeltEndpoint::FreeNode(FreeNode::new(Vec2::new(x, y), direction))
            }
        }
    }
}

impl LayoutFile {
    /// Momentaufnahme eines Layouts.
    pub fn from_layout(layout: &FactoryLayout) -> Self {
        Self {
            version: LAYOUT_VERSION,
            factories: layout
                .factories()
                .map(|factory| FactoryRecord {
                    id: factory.id.0,
                    machine: factory.machine_id.clone(),
                    x: factory.position().x,
                    y: factory.position().y,
                    recipe: factory.recipe().map(str::to_string),
                })
                .collect(),
            junctions: layout
                .junctions()
                .map(|junction| JunctionRecord {
                    id: junction.id.0,
                    kind: junction.kind,
                    x: junction.center().x,
                    y: junction.center().y,
                })
                .collect(),
            belts: layout
                .belts()
                .map(|belt| BeltRecord {
                    id: belt.id.0,
                    start: (&belt.start).into(),
                    end: (&belt.end).into(),
                })
                .collect(),
        }
    }

    /// Baut das Layout auf und routet alle Belts in Dateireihenfolge.
    pub fn into_layout(
        &self,
        catalog: &GameCatalog,
        options: &SandboxOptions,
    ) -> anyhow::Result<FactoryLayout> {
        if self.version > LAYOUT_VERSION {
            bail!(
                "Layout-Version {} wird nicht unterstützt (maximal {})",
                self.version,
                LAYOUT_VERSION
            );
        }

        let mut layout = FactoryLayout::from_options(options);

        for record in &self.factories {
            let id = OwnerId(record.id);
            layout
                .insert_factory(id, catalog, &record.machine, Vec2::new(record.x, record.y))
                .with_context(|| format!("Maschine {} ungültig", id))?;
            if let Some(recipe) = record.recipe.as_deref() {
                layout
                    .set_recipe(id, Some(recipe), catalog)
                    .with_context(|| format!("Rezept von Maschine {} ungültig", id))?;
            }
        }

        for record in &self.junctions {
            layout
                .insert_junction(OwnerId(record.id), record.kind, Vec2::new(record.x, record.y))
                .with_context(|| format!("Kreuzung #{} ungültig", record.id))?;
        }

        for record in &self.belts {
            let id = BeltId(record.id);
            layout
                .insert_belt_with_id(id, (&record.start).into(), (&record.end).into())
                .with_context(|| format!("{} ungültig", id))?;
        }

        Ok(layout)
    }
}

/// Parst eine Layout-Datei aus JSON.
pub fn parse_layout(
    json: &str,
    catalog: &GameCatalog,
    options: &SandboxOptions,
) -> anyhow::Result<FactoryLayout> {
    let file: LayoutFile = serde_json::from_str(json).context("Layout-JSON ungültig")?;
    let layout = file.into_layout(catalog, options)?;
    log::info!(
        "Layout geladen: {} Owner, {} Belts",
        layout.owners().len(),
        layout.belt_count()
    );
    Ok(layout)
}

/// Serialisiert ein Layout als formatiertes JSON.
pub fn write_layout(layout: &FactoryLayout) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&LayoutFile::from_layout(layout))
        .context("Layout konnte nicht serialisiert werden")
}

pub fn load_layout_file(
    path: &Path,
    catalog: &GameCatalog,
    options: &SandboxOptions,
) -> anyhow::Result<FactoryLayout> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Layout nicht lesbar: {}", path.display()))?;
    parse_layout(&json, catalog, options)
        .with_context(|| format!("Layout fehlerhaft: {}", path.display()))
}

pub fn save_layout_file(path: &Path, layout: &FactoryLayout) -> anyhow::Result<()> {
    let json = write_layout(layout)?;
    std::fs::write(path, json)
        .with_context(|| format!("Layout nicht schreibbar: {}", path.display()))?;
    log::info!("Layout gespeichert nach: {}", path.display());
    Ok(())
}
