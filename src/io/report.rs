//! Routing-Bericht für die CLI (JSON-Ausgabe).

use glam::Vec2;
use serde::Serialize;

use crate::core::FactoryLayout;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeltReport {
    pub id: u64,
    /// `false`, wenn der Best-Effort-Pfad ein Hindernis schneidet
    pub clear: bool,
    pub length: f32,
    pub path: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub belts: Vec<BeltReport>,
    pub blocked: Vec<u64>,
}

impl RouteReport {
    pub fn from_layout(layout: &FactoryLayout) -> Self {
        let blocked: Vec<u64> = layout.blocked_belts().iter().map(|id| id.0).collect();
        let belts = layout
            .belts()
            .map(|belt| BeltReport {
                id: belt.id.0,
                clear: !blocked.contains(&belt.id.0),
                length: belt.length(),
                path: belt.path.clone(),
            })
            .collect();
        Self { belts, blocked }
    }

    pub fn is_clear(&self) -> bool {
        self.blocked.is_empty()
    }
}
