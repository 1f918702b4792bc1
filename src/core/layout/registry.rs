//! Owner-Registry: Gebäude und Kreuzungen in stabiler Einfügereihenfolge.

use factory_belt_engine::{ConnectionPoint, Obstacle, OwnerId, PortOwner};
use indexmap::IndexMap;

use crate::core::belt::PortRef;
use crate::core::factory::Factory;
use crate::core::junction::Junction;

/// Alle Port-Owner eines Layouts.
///
/// Getrennt von den Belts gehalten, damit Belts mutiert werden können,
/// während die Owner gelesen werden.
#[derive(Debug, Clone, Default)]
pub struct OwnerRegistry {
    pub factories: IndexMap<OwnerId, Factory>,
    pub junctions: IndexMap<OwnerId, Junction>,
}

impl OwnerRegistry {
    pub fn contains(&self, id: OwnerId) -> bool {
        self.factories.contains_key(&id) || self.junctions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.factories.len() + self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty() && self.junctions.is_empty()
    }

    pub fn get(&self, id: OwnerId) -> Option<&dyn PortOwner> {
        match self.factories.get(&id) {
            Some(factory) => Some(factory as &dyn PortOwner),
            None => self.junctions.get(&id).map(|j| j as &dyn PortOwner),
        }
    }

    pub fn get_mut(&mut self, id: OwnerId) -> Option<&mut dyn PortOwner> {
        match self.factories.get_mut(&id) {
            Some(factory) => Some(factory as &mut dyn PortOwner),
            None => self.junctions.get_mut(&id).map(|j| j as &mut dyn PortOwner),
        }
    }

    pub fn port(&self, port: PortRef) -> Option<&ConnectionPoint> {
        self.get(port.owner)?.port(port.port)
    }

    /// Entfernt einen Owner unter Beibehaltung der Reihenfolge der übrigen.
    pub(super) fn remove(&mut self, id: OwnerId) -> bool {
        self.factories.shift_remove(&id).is_some() || self.junctions.shift_remove(&id).is_some()
    }

    /// Alle Owner: erst Gebäude, dann Kreuzungen.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PortOwner> + '_ {
        self.factories
            .values()
            .map(|f| f as &dyn PortOwner)
            .chain(self.junctions.values().map(|j| j as &dyn PortOwner))
    }

    /// Hindernis-Rechtecke aller Owner mit ihrer ID.
    pub fn bodies(&self) -> impl Iterator<Item = (OwnerId, Obstacle)> + '_ {
        self.iter().map(|owner| (owner.owner_id(), owner.body()))
    }

    /// Alle Ports mit Referenz, in Registry-Reihenfolge.
    pub fn port_refs(&self) -> impl Iterator<Item = (PortRef, &ConnectionPoint)> + '_ {
        self.iter().flat_map(|owner| {
            let owner_id = owner.owner_id();
            owner
                .ports()
                .iter()
                .enumerate()
                .map(move |(idx, port)| (PortRef::new(owner_id, idx), port))
        })
    }
}
