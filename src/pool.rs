//! Fixed-capacity pools recycled by liveness.
//!
//! A pool is just a slice allocated once at startup. Spawning claims the
//! first idle slot in index order; when every slot is busy the request is
//! dropped without touching the pool.

use crate::entities::{Enemy, Explosion, Projectile};

/// Anything that can sit idle in a pool slot.
pub trait Pooled {
    fn is_idle(&self) -> bool;
}

impl Pooled for Projectile {
    fn is_idle(&self) -> bool {
        self.body.life <= 0
    }
}

impl Pooled for Enemy {
    fn is_idle(&self) -> bool {
        self.body.life <= 0
    }
}

impl Pooled for Explosion {
    fn is_idle(&self) -> bool {
        !self.alive
    }
}

/// First idle slot, or `None` when the pool is exhausted.
pub fn claim<T: Pooled>(slots: &mut [T]) -> Option<&mut T> {
    let capacity = slots.len();
    let slot = slots.iter_mut().find(|s| s.is_idle());
    if slot.is_none() {
        log::trace!("pool of {capacity} exhausted, spawn dropped");
    }
    slot
}

/// First adjacent idle pair `(2k, 2k + 1)`.
pub fn claim_pair<T: Pooled>(slots: &mut [T]) -> Option<(&mut T, &mut T)> {
    let capacity = slots.len();
    let found = slots
        .chunks_exact_mut(2)
        .find(|pair| pair[0].is_idle() && pair[1].is_idle());
    match found {
        Some([a, b]) => Some((a, b)),
        _ => {
            log::trace!("no idle pair in pool of {capacity}, spawn dropped");
            None
        }
    }
}

/// Number of busy slots.
pub fn active_count<T: Pooled>(slots: &[T]) -> usize {
    slots.iter().filter(|s| !s.is_idle()).count()
}
