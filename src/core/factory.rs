//! Gebäude (Maschinen) als Port-Owner.

use anyhow::bail;
use factory_belt_engine::{ConnectionPoint, Obstacle, OwnerId, PortOwner, Side};
use glam::Vec2;

use super::catalog::MachineSpec;

/// Platzierte Maschine. `position` ist die linke obere Ecke.
#[derive(Debug, Clone)]
pub struct Factory {
    pub id: OwnerId,
    /// Schlüssel im `GameCatalog`
    pub machine_id: String,
    position: Vec2,
    size: Vec2,
    ports: Vec<ConnectionPoint>,
    recipe: Option<String>,
    /// Anzahl belegter Ports, nachgeführt über `on_connection_changed`
    connected_ports: usize,
}

impl Factory {
    /// Erstellt eine Maschine aus ihrer Katalog-Beschreibung.
    ///
    /// Mehrere Ports einer Seite werden bei `(i + 1) / (k + 1)` der Kante verteilt.
    pub fn new(
        id: OwnerId,
        machine_id: &str,
        spec: &MachineSpec,
        position: Vec2,
        grid_size: f32,
    ) -> Self {
        let size = Vec2::new(
            spec.footprint[0] as f32 * grid_size,
            spec.footprint[1] as f32 * grid_size,
        );

        let mut ports = Vec::with_capacity(spec.ports.len());
        for (idx, port_spec) in spec.ports.iter().enumerate() {
            let same_side = spec.ports.iter().filter(|p| p.side == port_spec.side).count();
            let nth = spec.ports[..idx]
                .iter()
                .filter(|p| p.side == port_spec.side)
                .count();
            let t = (nth + 1) as f32 / (same_side + 1) as f32;
            let offset = match port_spec.side {
                Side::Top => Vec2::new(size.x * t, 0.0),
                Side::Bottom => Vec2::new(size.x * t, size.y),
                Side::Left => Vec2::new(0.0, size.y * t),
                Side::Right => Vec2::new(size.x, size.y * t),
            };
            ports.push(ConnectionPoint::new(
                id,
                port_spec.port_type,
                port_spec.side,
                offset,
                position,
            ));
        }

        Self {
            id,
            machine_id: machine_id.to_string(),
            position,
            size,
            ports,
            recipe: None,
            connected_ports: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn recipe(&self) -> Option<&str> {
        self.recipe.as_deref()
    }

    pub fn connected_ports(&self) -> usize {
        self.connected_ports
    }

    /// Setzt das aktive Rezept; `None` schaltet die Maschine leer.
    pub fn set_recipe(&mut self, recipe: Option<&str>, spec: &MachineSpec) -> anyhow::Result<()> {
        if let Some(recipe_id) = recipe.filter(|r| !spec.allows_recipe(r)) {
            bail!(
                "Rezept '{}' ist für Maschine '{}' nicht erlaubt",
                recipe_id,
                self.machine_id
            );
        }
        self.recipe = recipe.map(str::to_string);
        Ok(())
    }

    /// Index des `nth` Ports auf `side`.
    pub fn port_index(&self, side: Side, nth: usize) -> Option<usize> {
        self.ports
            .iter()
            .enumerate()
            .filter(|(_, p)| p.side() == side)
            .nth(nth)
            .map(|(idx, _)| idx)
    }
}

impl PortOwner for Factory {
    fn owner_id(&self) -> OwnerId {
        self.id
    }

    fn origin(&self) -> Vec2 {
        self.position
    }

    fn set_origin(&mut self, origin: Vec2) {
        self.position = origin;
    }

    fn ports(&self) -> &[ConnectionPoint] {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut [ConnectionPoint] {
        &mut self.ports
    }

    fn body(&self) -> Obstacle {
        Obstacle::from_min_size(self.position, self.size)
    }

    fn on_connection_changed(&mut self) {
        let (inputs, outputs) = self.connected_counts();
        self.connected_ports = inputs + outputs;
    }
}
