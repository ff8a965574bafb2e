/// Monotonic source of fresh vertex ids, owned by each mesh generation.
///
/// Ids handed out are strictly greater than any id the allocator has been
/// told about via [`reserve`](IdAllocator::reserve), so vertices synthesized
/// during subdivision can never collide with file-supplied ids before the
/// final renumbering.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn fresh(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Ensure every future fresh id is greater than `id`.
    pub fn reserve(&mut self, id: u64) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.fresh(), 0);
        assert_eq!(ids.fresh(), 1);
        assert_eq!(ids.fresh(), 2);
    }

    #[test]
    fn test_reserve_skips_past_existing_ids() {
        let mut ids = IdAllocator::new();
        ids.reserve(7);
        assert_eq!(ids.fresh(), 8);
        // Reserving something already passed is a no-op
        ids.reserve(3);
        assert_eq!(ids.fresh(), 9);
    }
}
