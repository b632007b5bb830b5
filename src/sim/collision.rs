//! Collision detection between the sled and falling entities
//!
//! Everything is an axis-aligned box. Contacts and stage exits partition
//! entities out of their collection, so each one is removed exactly once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Gift, Hazard};

/// Axis-aligned bounding box in center/half-extent form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// True if the boxes overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Remove and return every gift touching the sled
pub fn catch_gifts(player: &Aabb, gifts: &mut Vec<Gift>) -> Vec<Gift> {
    let (caught, falling) = std::mem::take(gifts)
        .into_iter()
        .partition(|g| g.aabb().overlaps(player));
    *gifts = falling;
    caught
}

/// Remove and return every hazard touching the sled
pub fn hazard_contacts(player: &Aabb, hazards: &mut Vec<Hazard>) -> Vec<Hazard> {
    let (hits, falling) = std::mem::take(hazards)
        .into_iter()
        .partition(|h| h.aabb().overlaps(player));
    *hazards = falling;
    hits
}

/// Remove and return gifts whose top edge is below `limit_y`
pub fn sweep_gifts(gifts: &mut Vec<Gift>, limit_y: f32) -> Vec<Gift> {
    let (gone, falling) = std::mem::take(gifts)
        .into_iter()
        .partition(|g| g.pos.y > limit_y);
    *gifts = falling;
    gone
}

/// Drop hazards whose top edge is below `limit_y`; returns how many left
pub fn sweep_hazards(hazards: &mut Vec<Hazard>, limit_y: f32) -> usize {
    let before = hazards.len();
    hazards.retain(|h| h.pos.y <= limit_y);
    before - hazards.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GiftKind, HazardKind};
    use proptest::prelude::*;

    fn gift(id: u32, x: f32, y: f32) -> Gift {
        Gift {
            id,
            pos: Vec2::new(x, y),
            size: 20.0,
            fall_speed: 60.0,
            kind: GiftKind::Box,
        }
    }

    fn sled() -> Aabb {
        Aabb::new(Vec2::new(400.0, 540.0), Vec2::new(55.0, 17.0))
    }

    #[test]
    fn test_overlap_hit_and_miss() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        assert!(a.overlaps(&Aabb::new(Vec2::new(15.0, 5.0), Vec2::splat(10.0))));
        assert!(!a.overlaps(&Aabb::new(Vec2::new(25.0, 0.0), Vec2::splat(10.0))));
        assert!(!a.overlaps(&Aabb::new(Vec2::new(0.0, -30.0), Vec2::splat(10.0))));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        // Right edge of a == left edge of b
        assert!(!a.overlaps(&Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0))));
        // Bottom edge of a == top edge of b
        assert!(!a.overlaps(&Aabb::new(Vec2::new(0.0, 20.0), Vec2::splat(10.0))));
        // Corner touch
        assert!(!a.overlaps(&Aabb::new(Vec2::new(20.0, 20.0), Vec2::splat(10.0))));
    }

    #[test]
    fn test_catch_gifts_partitions() {
        let mut gifts = vec![gift(1, 390.0, 530.0), gift(2, 100.0, 530.0), gift(3, 440.0, 520.0)];
        let caught = catch_gifts(&sled(), &mut gifts);
        let caught_ids: Vec<u32> = caught.iter().map(|g| g.id).collect();
        assert_eq!(caught_ids, vec![1, 3]);
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].id, 2);
    }

    #[test]
    fn test_sweeps_use_top_edge() {
        let mut gifts = vec![gift(1, 100.0, 620.0), gift(2, 100.0, 621.0)];
        let gone = sweep_gifts(&mut gifts, 620.0);
        assert_eq!(gone.len(), 1);
        assert_eq!(gone[0].id, 2);

        let mut hazards = vec![Hazard {
            id: 9,
            pos: Vec2::new(0.0, 641.0),
            size: 18.0,
            vel: Vec2::new(0.0, 120.0),
            kind: HazardKind::Spike,
        }];
        assert_eq!(sweep_hazards(&mut hazards, 640.0), 1);
        assert!(hazards.is_empty());
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn box_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn catch_accounts_for_every_gift(
            xs in proptest::collection::vec((0.0f32..800.0, 400.0f32..600.0), 0..30)
        ) {
            let mut gifts: Vec<Gift> = xs
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| gift(i as u32, x, y))
                .collect();
            let total = gifts.len();
            let caught = catch_gifts(&sled(), &mut gifts);
            prop_assert_eq!(caught.len() + gifts.len(), total);
            prop_assert!(caught.iter().all(|g| g.aabb().overlaps(&sled())));
            prop_assert!(gifts.iter().all(|g| !g.aabb().overlaps(&sled())));
        }
    }
}
