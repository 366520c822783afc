//! Lane identifiers and a simple allocator for handing them out.

use serde::{Deserialize, Serialize};

/// Identifies one concurrent evaluation context.
///
/// Each lane owns one interval-cache slot per curve. Two callers must never
/// evaluate with the same lane at the same time; doing so only slows the
/// interval search, it never yields a wrong value.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct LaneId(pub u32);

impl LaneId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Hands out distinct lane ids below a fixed bound.
/// Released ids are reused before fresh ones.
#[derive(Debug)]
pub struct LaneAllocator {
    max_lanes: u32,
    next: u32,
    free: Vec<LaneId>,
}

impl LaneAllocator {
    pub fn new(max_lanes: usize) -> Self {
        Self {
            max_lanes: u32::try_from(max_lanes).unwrap_or(u32::MAX),
            next: 0,
            free: Vec::new(),
        }
    }

    /// Returns `None` once every lane below the bound is in use.
    #[inline]
    pub fn alloc(&mut self) -> Option<LaneId> {
        if let Some(id) = self.free.pop() {
            return Some(id);
        }
        if self.next >= self.max_lanes {
            return None;
        }
        let id = LaneId(self.next);
        self.next += 1;
        Some(id)
    }

    /// Return a lane for reuse. Ids never handed out, or already free, are ignored.
    pub fn release(&mut self, id: LaneId) {
        if id.0 < self.next && !self.free.contains(&id) {
            self.free.push(id);
        }
    }

    pub fn in_use(&self) -> usize {
        self.next as usize - self.free.len()
    }

    pub fn max_lanes(&self) -> usize {
        self.max_lanes as usize
    }

    #[inline]
    pub fn reset(&mut self) {
        self.next = 0;
        self.free.clear();
    }
}
