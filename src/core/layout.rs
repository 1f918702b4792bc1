//! Layout-Registry: Owner, Belts, Hindernisse und Port-Picking.
//!
//! Jede Änderung an Ownern oder Belts läuft über `FactoryLayout`, damit
//! Port-Belegung, Pfade und Port-Index konsistent bleiben.

mod registry;


use anyhow::{bail, Context};
use factory_belt_engine::{
    is_path_clear, BeltId, ConnectError, ConnectionPoint, Direction, EndpointKind, FreeNode,
    Obstacle, OwnerId, PortOwner, PortType, RouteAnchor, OBSTACLE_PADDING,
};
use glam::Vec2;
use indexmap::IndexMap;

pub use registry::OwnerRegistry;

use super::belt::{Belt, BeltEnd, BeltEndpoint, PortRef};
use super::catalog::GameCatalog;
use super::factory::Factory;
use super::junction::{Junction, JunctionKind};
use super::spatial::{PortIndex, PortMatch};
use crate::shared::SandboxOptions;

/// Aufgelöster Belt-Endpunkt für einen Routing-Aufruf.
enum Anchor<'a> {
    Port(&'a ConnectionPoint),
    Free(FreeNode),
}

impl RouteAnchor for Anchor<'_> {
    fn position(&self) -> Vec2 {
        match self {
            Anchor::Port(port) => port.position(),
            Anchor::Free(node) => node.position,
        }
    }

    fn direction_vector(&self) -> Direction {
        match self {
            Anchor::Port(port) => port.direction_vector(),
            Anchor::Free(node) => node.direction,
        }
    }

    fn kind(&self) -> EndpointKind {
        match self {
            Anchor::Port(_) => EndpointKind::Port,
            Anchor::Free(_) => EndpointKind::FreeNode,
        }
    }
}

fn resolve<'a>(owners: &'a OwnerRegistry, endpoint: &BeltEndpoint) -> Option<Anchor<'a>> {
    match endpoint {
        BeltEndpoint::Port(port) => owners.port(*port).map(Anchor::Port),
        BeltEndpoint::FreeNode(node) => Some(Anchor::Free(*node)),
    }
}

/// Hindernisse aus Sicht eines Belts: eigene Owner werden um Padding + 1
/// geschrumpft, damit der Port auf der Kante nicht als blockiert gilt.
fn obstacles_for(owners: &OwnerRegistry, belt: &Belt) -> Vec<Obstacle> {
    owners
        .bodies()
        .map(|(id, body)| {
            if belt.touches(id) {
                body.inset(OBSTACLE_PADDING + 1.0)
            } else {
                body
            }
        })
        .collect()
}

fn route_belt(owners: &OwnerRegistry, belt: &mut Belt) {
    let obstacles = obstacles_for(owners, belt);
    let (Some(start), Some(end)) = (resolve(owners, &belt.start), resolve(owners, &belt.end))
    else {
        log::warn!("Belt {} verweist auf unbekannten Port, Pfad bleibt unverändert", belt.id);
        return;
    };
    belt.update_path(&start, &end, &obstacles);
}

/// Richtung eines freien Endes relativ zum Port am anderen Ende (Bewegungsrichtung).
fn free_direction(port_pos: Vec2, free_pos: Vec2, free_is_end: bool) -> Direction {
    if free_is_end {
        Direction::dominant(free_pos - port_pos)
    } else {
        Direction::dominant(port_pos - free_pos)
    }
}

/// Komplettes Fabrik-Layout.
#[derive(Debug, Clone)]
pub struct FactoryLayout {
    owners: OwnerRegistry,
    belts: IndexMap<BeltId, Belt>,
    next_owner_id: u64,
    next_belt_id: u64,
    port_index: PortIndex,
    pub grid_size: f32,
    pub junction_size: f32,
}

impl FactoryLayout {
    pub fn new(grid_size: f32, junction_size: f32) -> Self {
        Self {
            owners: OwnerRegistry::default(),
            belts: IndexMap::new(),
            next_owner_id: 1,
            next_belt_id: 1,
            port_index: PortIndex::empty(),
            grid_size,
            junction_size,
        }
    }

    pub fn from_options(options: &SandboxOptions) -> Self {
        Self::new(options.grid_size, options.junction_size)
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    pub fn owners(&self) -> &OwnerRegistry {
        &self.owners
    }

    pub fn owner(&self, id: OwnerId) -> Option<&dyn PortOwner> {
        self.owners.get(id)
    }

    pub fn factory(&self, id: OwnerId) -> Option<&Factory> {
        self.owners.factories.get(&id)
    }

    pub fn junction(&self, id: OwnerId) -> Option<&Junction> {
        self.owners.junctions.get(&id)
    }

    pub fn factories(&self) -> impl Iterator<Item = &Factory> + '_ {
        self.owners.factories.values()
    }

    pub fn junctions(&self) -> impl Iterator<Item = &Junction> + '_ {
        self.owners.junctions.values()
    }

    pub fn belt(&self, id: BeltId) -> Option<&Belt> {
        self.belts.get(&id)
    }

    pub fn belts(&self) -> impl Iterator<Item = &Belt> + '_ {
        self.belts.values()
    }

    pub fn belt_count(&self) -> usize {
        self.belts.len()
    }

    pub fn port(&self, port: PortRef) -> Option<&ConnectionPoint> {
        self.owners.port(port)
    }

    // ── Owner ───────────────────────────────────────────────────────

    fn reserve_owner_id(&mut self, id: OwnerId) -> anyhow::Result<()> {
        if self.owners.contains(id) {
            bail!("Owner {} existiert bereits", id);
        }
        let following = id
            .0
            .checked_add(1)
            .with_context(|| format!("Owner-ID {} ist zu groß", id))?;
        self.next_owner_id = self.next_owner_id.max(following);
        Ok(())
    }

    /// Platziert eine Maschine aus dem Katalog (linke obere Ecke bei `position`).
    pub fn add_factory(
        &mut self,
        catalog: &GameCatalog,
        machine_id: &str,
        position: Vec2,
    ) -> anyhow::Result<OwnerId> {
        let id = OwnerId(self.next_owner_id);
        self.insert_factory(id, catalog, machine_id, position)
    }

    /// Wie `add_factory`, aber mit vorgegebener ID (Laden aus Datei).
    pub fn insert_factory(
        &mut self,
        id: OwnerId,
        catalog: &GameCatalog,
        machine_id: &str,
        position: Vec2,
    ) -> anyhow::Result<OwnerId> {
        let spec = catalog
            .machine(machine_id)
            .with_context(|| format!("Unbekannte Maschine '{}'", machine_id))?;
        self.reserve_owner_id(id)?;
        let factory = Factory::new(id, machine_id, spec, position, self.grid_size);
        self.owners.factories.insert(id, factory);
        self.rebuild_port_index();
        log::info!("Maschine '{}' als {} bei {:?} platziert", machine_id, id, position);
        Ok(id)
    }

    /// Setzt das Rezept einer Maschine.
    pub fn set_recipe(
        &mut self,
        id: OwnerId,
        recipe: Option<&str>,
        catalog: &GameCatalog,
    ) -> anyhow::Result<()> {
        let factory = self
            .owners
            .factories
            .get_mut(&id)
            .with_context(|| format!("Keine Maschine {}", id))?;
        let spec = catalog
            .machine(&factory.machine_id)
            .with_context(|| format!("Maschine '{}' fehlt im Katalog", factory.machine_id))?;
        factory.set_recipe(recipe, spec)
    }

    /// Platziert eine Kreuzung, zentriert auf `center`.
    pub fn add_junction(&mut self, kind: JunctionKind, center: Vec2) -> anyhow::Result<OwnerId> {
        let id = OwnerId(self.next_owner_id);
        self.insert_junction(id, kind, center)
    }

    /// Wie `add_junction`, aber mit vorgegebener ID (Laden aus Datei).
    pub fn insert_junction(
        &mut self,
        id: OwnerId,
        kind: JunctionKind,
        center: Vec2,
    ) -> anyhow::Result<OwnerId> {
        self.reserve_owner_id(id)?;
        let junction = Junction::new(id, kind, center, self.junction_size);
        self.owners.junctions.insert(id, junction);
        self.rebuild_port_index();
        log::info!("Kreuzung {:?} als {} bei {:?} platziert", kind, id, center);
        Ok(id)
    }

    /// Entfernt einen Owner samt aller angeschlossenen Belts.
    ///
    /// Gibt die IDs der entfernten Belts zurück.
    pub fn remove_owner(&mut self, id: OwnerId) -> anyhow::Result<Vec<BeltId>> {
        if !self.owners.contains(id) {
            bail!("Owner {} existiert nicht", id);
        }

        let attached: Vec<BeltId> = self
            .belts
            .values()
            .filter(|belt| belt.touches(id))
            .map(|belt| belt.id)
            .collect();
        for belt_id in &attached {
            self.remove_belt(*belt_id);
        }

        self.owners.remove(id);
        self.rebuild_port_index();
        log::info!("Owner {} mit {} Belts entfernt", id, attached.len());
        Ok(attached)
    }

    /// Bewegt einen Owner und routet alle angeschlossenen Belts neu.
    pub fn move_owner(&mut self, id: OwnerId, origin: Vec2) -> anyhow::Result<()> {
        let owner = self
            .owners
            .get_mut(id)
            .with_context(|| format!("Owner {} existiert nicht", id))?;
        owner.move_to(origin);

        let owners = &self.owners;
        for belt in self.belts.values_mut().filter(|belt| belt.touches(id)) {
            route_belt(owners, belt);
        }
        self.rebuild_port_index();
        Ok(())
    }

    /// Rastet eine Weltposition auf das Raster ein.
    pub fn snap_to_grid(&self, position: Vec2) -> Vec2 {
        if self.grid_size <= 0.0 {
            return position;
        }
        (position / self.grid_size).round() * self.grid_size
    }

    /// Rastet den Ursprung eines Owners ein und routet neu.
    pub fn snap_owner(&mut self, id: OwnerId) -> anyhow::Result<Vec2> {
        let origin = self
            .owners
            .get(id)
            .with_context(|| format!("Owner {} existiert nicht", id))?
            .origin();
        let snapped = self.snap_to_grid(origin);
        if snapped != origin {
            self.move_owner(id, snapped)?;
        }
        Ok(snapped)
    }

    // ── Belts ───────────────────────────────────────────────────────

    /// Verbindet zwei Ports. Die Reihenfolge der Argumente ist egal,
    /// der Belt beginnt immer am OUTPUT.
    pub fn connect(&mut self, a: PortRef, b: PortRef) -> anyhow::Result<BeltId> {
        self.insert_belt(BeltEndpoint::Port(a), BeltEndpoint::Port(b))
    }

    /// Legt einen Belt von einem Port zu einem freien Endpunkt an.
    ///
    /// Die Richtung des freien Endes folgt der dominanten Achse zwischen Port und Punkt.
    pub fn attach_free(&mut self, port: PortRef, position: Vec2) -> anyhow::Result<BeltId> {
        let point = self
            .port(port)
            .with_context(|| format!("Port {:?} existiert nicht", port))?;
        let free_is_end = point.port_type() == PortType::Output;
        let direction = free_direction(point.position(), position, free_is_end);
        self.insert_belt(
            BeltEndpoint::Port(port),
            BeltEndpoint::FreeNode(FreeNode::new(position, direction)),
        )
    }

    /// Legt einen Belt mit der nächsten freien ID an.
    pub fn insert_belt(&mut self, a: BeltEndpoint, b: BeltEndpoint) -> anyhow::Result<BeltId> {
        let id = BeltId(self.next_belt_id);
        self.insert_belt_with_id(id, a, b)
    }

    /// Validiert, orientiert (OUTPUT → INPUT), belegt die Ports und routet.
    pub fn insert_belt_with_id(
        &mut self,
        id: BeltId,
        a: BeltEndpoint,
        b: BeltEndpoint,
    ) -> anyhow::Result<BeltId> {
        if self.belts.contains_key(&id) {
            bail!("{} existiert bereits", id);
        }
        let following = id
            .0
            .checked_add(1)
            .with_context(|| format!("Belt-ID {} ist zu groß", id.0))?;
        let (start, end) = self.orient(a, b)?;

        for port in [start.port_ref(), end.port_ref()].into_iter().flatten() {
            if let Some(owner) = self.owners.get_mut(port.owner) {
                owner.set_port_connected(port.port, Some(id));
            }
        }

        let mut belt = Belt::new(id, start, end);
        route_belt(&self.owners, &mut belt);
        if !is_path_clear(&belt.path, &obstacles_for(&self.owners, &belt)) {
            log::warn!("{} konnte nur mit Best-Effort-Pfad geroutet werden", id);
        }
        self.belts.insert(id, belt);
        self.next_belt_id = self.next_belt_id.max(following);
        log::info!("{} angelegt", id);
        Ok(id)
    }

    fn existing_port(&self, port: PortRef) -> anyhow::Result<&ConnectionPoint> {
        self.port(port)
            .with_context(|| format!("Port {} von Owner {} existiert nicht", port.port, port.owner))
    }

    /// Prüft ein Endpunkt-Paar und liefert `(start, end)` mit OUTPUT am Start.
    fn orient(
        &self,
        a: BeltEndpoint,
        b: BeltEndpoint,
    ) -> anyhow::Result<(BeltEndpoint, BeltEndpoint)> {
        match (a, b) {
            (BeltEndpoint::Port(pa), BeltEndpoint::Port(pb)) => {
                let port_a = self.existing_port(pa)?;
                let port_b = self.existing_port(pb)?;
                port_a
                    .check_connect(port_b)
                    .context("Ports können nicht verbunden werden")?;
                if port_a.port_type() == PortType::Output {
                    Ok((a, b))
                } else {
                    Ok((b, a))
                }
            }
            (BeltEndpoint::Port(port), BeltEndpoint::FreeNode(_))
            | (BeltEndpoint::FreeNode(_), BeltEndpoint::Port(port)) => {
                let point = self.existing_port(port)?;
                if let Some(link) = point.connected_link() {
                    return Err(ConnectError::Occupied(link))
                        .context("Port kann keinen weiteren Belt aufnehmen");
                }
                let (port_end, free_end) = if a.kind() == EndpointKind::Port {
                    (a, b)
                } else {
                    (b, a)
                };
                if point.port_type() == PortType::Output {
                    Ok((port_end, free_end))
                } else {
                    Ok((free_end, port_end))
                }
            }
            (BeltEndpoint::FreeNode(_), BeltEndpoint::FreeNode(_)) => {
                bail!("Ein Belt braucht mindestens einen Port")
            }
        }
    }

    /// Entfernt einen Belt und gibt beide Ports frei.
    pub fn remove_belt(&mut self, id: BeltId) -> Option<Belt> {
        let belt = self.belts.shift_remove(&id)?;
        for port in [belt.start.port_ref(), belt.end.port_ref()]
            .into_iter()
            .flatten()
        {
            if let Some(owner) = self.owners.get_mut(port.owner) {
                owner.set_port_connected(port.port, None);
            }
        }
        log::info!("{} entfernt", id);
        Some(belt)
    }

    /// Verschiebt ein freies Belt-Ende und routet den Belt neu.
    pub fn move_free_endpoint(
        &mut self,
        id: BeltId,
        which: BeltEnd,
        position: Vec2,
    ) -> anyhow::Result<()> {
        let belt = self
            .belts
            .get_mut(&id)
            .with_context(|| format!("{} existiert nicht", id))?;

        let other = match which {
            BeltEnd::Start => belt.end,
            BeltEnd::End => belt.start,
        };
        let direction = match other.port_ref().and_then(|p| self.owners.port(p)) {
            Some(port) => free_direction(port.position(), position, which == BeltEnd::End),
            None => Direction::NONE,
        };

        let endpoint = match which {
            BeltEnd::Start => &mut belt.start,
            BeltEnd::End => &mut belt.end,
        };
        match endpoint {
            BeltEndpoint::FreeNode(node) => *node = FreeNode::new(position, direction),
            BeltEndpoint::Port(_) => bail!("{}: dieses Ende hängt an einem Port", id),
        }

        route_belt(&self.owners, belt);
        Ok(())
    }

    /// Routet einen einzelnen Belt neu.
    pub fn reroute(&mut self, id: BeltId) -> bool {
        match self.belts.get_mut(&id) {
            Some(belt) => {
                route_belt(&self.owners, belt);
                true
            }
            None => false,
        }
    }

    /// Routet alle Belts in Einfügereihenfolge neu.
    pub fn reroute_all(&mut self) {
        let owners = &self.owners;
        for belt in self.belts.values_mut() {
            route_belt(owners, belt);
        }
    }

    // ── Hindernisse & Abfragen ──────────────────────────────────────

    /// Alle Owner-Flächen als Hindernisse (Gebäude, dann Kreuzungen).
    pub fn obstacles(&self) -> Vec<Obstacle> {
        self.owners.bodies().map(|(_, body)| body).collect()
    }

    /// Hindernisse, wie sie das Routing eines bestimmten Belts sieht.
    pub fn obstacles_for_belt(&self, id: BeltId) -> Option<Vec<Obstacle>> {
        self.belts.get(&id).map(|belt| obstacles_for(&self.owners, belt))
    }

    /// Belts, deren aktueller Pfad ein Hindernis schneidet.
    pub fn blocked_belts(&self) -> Vec<BeltId> {
        self.belts
            .values()
            .filter(|belt| !belt.is_clear(&obstacles_for(&self.owners, belt)))
            .map(|belt| belt.id)
            .collect()
    }

    /// Nächster Port innerhalb von `max_distance`.
    pub fn nearest_port(&self, position: Vec2, max_distance: f32) -> Option<PortMatch> {
        self.port_index
            .nearest(position)
            .filter(|hit| hit.distance <= max_distance)
    }

    /// Nächster freier Port innerhalb von `max_distance`.
    pub fn nearest_free_port(&self, position: Vec2, max_distance: f32) -> Option<PortMatch> {
        self.port_index
            .within_radius(position, max_distance)
            .into_iter()
            .find(|hit| self.port(hit.port).is_some_and(|p| !p.is_connected()))
    }

    fn rebuild_port_index(&mut self) {
        self.port_index = PortIndex::from_ports(
            self.owners
                .port_refs()
                .map(|(port_ref, port)| (port_ref, port.position())),
        );
    }
}
