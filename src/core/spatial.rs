//! Spatial-Index (KD-Tree) über alle Port-Positionen für das Port-Picking.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::belt::PortRef;

/// Ergebnis einer Distanzabfrage gegen den Port-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortMatch {
    pub port: PortRef,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Index; wird nach jeder Layout-Änderung neu aufgebaut.
#[derive(Debug, Clone)]
pub struct PortIndex {
    tree: KdTree<f64, 2>,
    ports: Vec<PortRef>,
}

impl Default for PortIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl PortIndex {
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            ports: Vec::new(),
        }
    }

    /// Baut den Index aus `(PortRef, Position)`-Paaren in gegebener Reihenfolge.
    pub fn from_ports(entries: impl IntoIterator<Item = (PortRef, Vec2)>) -> Self {
        let (ports, points): (Vec<PortRef>, Vec<[f64; 2]>) = entries
            .into_iter()
            .map(|(port, pos)| (port, [pos.x as f64, pos.y as f64]))
            .unzip();

        Self {
            tree: (&points).into(),
            ports,
        }
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Nächster Port zur Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<PortMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let port = *self.ports.get(result.item as usize)?;

        Some(PortMatch {
            port,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Alle Ports im Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<PortMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let port = *self.ports.get(entry.item as usize)?;
                Some(PortMatch {
                    port,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_belt_engine::OwnerId;

    fn sample() -> PortIndex {
        PortIndex::from_ports([
            (PortRef::new(OwnerId(1), 0), Vec2::new(0.0, 0.0)),
            (PortRef::new(OwnerId(1), 1), Vec2::new(10.0, 0.0)),
            (PortRef::new(OwnerId(2), 0), Vec2::new(100.0, 100.0)),
        ])
    }

    #[test]
    fn test_empty_index_finds_nothing() {
        let index = PortIndex::empty();
        assert!(index.nearest(Vec2::ZERO).is_none());
        assert!(index.within_radius(Vec2::ZERO, 50.0).is_empty());
    }

    #[test]
    fn test_nearest_returns_closest_port() {
        let hit = sample().nearest(Vec2::new(8.0, 1.0)).expect("Treffer");
        assert_eq!(hit.port, PortRef::new(OwnerId(1), 1));
        assert!(hit.distance < 3.0);
    }

    #[test]
    fn test_within_radius_is_sorted() {
        let hits = sample().within_radius(Vec2::new(4.0, 0.0), 20.0);
        let ports: Vec<PortRef> = hits.iter().map(|h| h.port).collect();
        assert_eq!(
            ports,
            vec![PortRef::new(OwnerId(1), 0), PortRef::new(OwnerId(1), 1)]
        );
    }
}
