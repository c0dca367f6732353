//! Spawn-point table: turns zone hints into concrete positions.
//!
//! Points are drawn with a seeded `ChaCha8Rng`, so the same seed places the
//! same roster identically.

use std::collections::HashMap;

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use silentpeak_core::enums::{SpawnZone, SpawnZoneHint};
use silentpeak_core::traits::SpawnPointProvider;
use silentpeak_core::types::Placement;

/// Default compound layout (meters, y up).
const TOWER_POINTS: [[f32; 3]; 4] = [
    [-60.0, 18.0, 140.0],
    [55.0, 18.0, 150.0],
    [-20.0, 22.0, 210.0],
    [80.0, 20.0, 230.0],
];

const ROOFTOP_POINTS: [[f32; 3]; 5] = [
    [-35.0, 9.0, 160.0],
    [0.0, 11.0, 175.0],
    [30.0, 9.0, 165.0],
    [-45.0, 12.0, 200.0],
    [40.0, 10.0, 205.0],
];

const GROUND_POINTS: [[f32; 3]; 6] = [
    [-50.0, 0.0, 120.0],
    [-15.0, 0.0, 130.0],
    [20.0, 0.0, 125.0],
    [55.0, 0.0, 135.0],
    [-30.0, 0.0, 190.0],
    [25.0, 0.0, 195.0],
];

/// Patrol starts, walked in order: a route runs from one start to the next.
const PATROL_POINTS: [[f32; 3]; 4] = [
    [-40.0, 0.0, 145.0],
    [40.0, 0.0, 145.0],
    [40.0, 0.0, 185.0],
    [-40.0, 0.0, 185.0],
];

fn to_vecs(points: &[[f32; 3]]) -> Vec<Vec3> {
    points.iter().map(|p| Vec3::from_array(*p)).collect()
}

/// Per-zone candidate points plus the RNG that picks among them.
pub struct ZoneSpawnTable {
    zones: HashMap<SpawnZone, Vec<Vec3>>,
    rng: ChaCha8Rng,
}

impl ZoneSpawnTable {
    /// Default layout, seeded.
    pub fn new(seed: u64) -> Self {
        Self::empty(seed)
            .with_points(SpawnZone::Tower, to_vecs(&TOWER_POINTS))
            .with_points(SpawnZone::Rooftop, to_vecs(&ROOFTOP_POINTS))
            .with_points(SpawnZone::Ground, to_vecs(&GROUND_POINTS))
            .with_points(SpawnZone::PatrolRoute, to_vecs(&PATROL_POINTS))
    }

    /// No points at all; every placement lands on the origin.
    pub fn empty(seed: u64) -> Self {
        Self {
            zones: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replace the candidate points of one zone.
    pub fn with_points(mut self, zone: SpawnZone, points: Vec<Vec3>) -> Self {
        self.zones.insert(zone, points);
        self
    }

    pub fn points(&self, zone: SpawnZone) -> &[Vec3] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    fn place_on_route(&mut self) -> Option<Placement> {
        let starts = self.zones.get(&SpawnZone::PatrolRoute)?;
        if starts.is_empty() {
            return None;
        }
        let i = self.rng.gen_range(0..starts.len());
        let start = starts[i];
        let next = starts[(i + 1) % starts.len()];
        Some(Placement {
            position: start,
            patrol_route: vec![start, next],
        })
    }

    fn place_in(&mut self, zones: &[SpawnZone]) -> Placement {
        let candidates: Vec<Vec3> = zones
            .iter()
            .flat_map(|zone| self.points(*zone).iter().copied())
            .collect();
        if candidates.is_empty() {
            return Placement::at(Vec3::ZERO);
        }
        let i = self.rng.gen_range(0..candidates.len());
        Placement::at(candidates[i])
    }
}

impl SpawnPointProvider for ZoneSpawnTable {
    fn place(&mut self, hint: SpawnZoneHint) -> Placement {
        match hint {
            SpawnZoneHint::PatrolGround => self
                .place_on_route()
                .unwrap_or_else(|| self.place_in(&[SpawnZone::Ground])),
            other => self.place_in(other.zones()),
        }
    }
}
