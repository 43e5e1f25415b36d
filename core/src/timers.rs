/// Pending-task handles keyed by a small integer identity (dropdown index).
pub struct TimerArena<H> {
    slots: Vec<Option<H>>,
}

impl<H> TimerArena<H> {
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores `handle` under `key`, handing back whatever was armed before.
    pub fn arm(&mut self, key: usize, handle: H) -> Option<H> {
        let slot = self.slots.get_mut(key)?;
        slot.replace(handle)
    }

    pub fn disarm(&mut self, key: usize) -> Option<H> {
        self.slots.get_mut(key).and_then(Option::take)
    }

    pub fn is_armed(&self, key: usize) -> bool {
        self.slots.get(key).map(Option::is_some).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_returns_displaced_handle() {
        let mut arena = TimerArena::with_len(2);
        assert_eq!(arena.arm(1, "first"), None);
        assert_eq!(arena.arm(1, "second"), Some("first"));
        assert!(arena.is_armed(1));
        assert!(!arena.is_armed(0));
        assert_eq!(arena.disarm(1), Some("second"));
        assert!(!arena.is_armed(1));
    }

    #[test]
    fn out_of_range_keys_are_ignored() {
        let mut arena = TimerArena::with_len(1);
        assert_eq!(arena.arm(4, 7u32), None);
        assert!(!arena.is_armed(4));
        assert_eq!(arena.disarm(4), None);
    }
}
