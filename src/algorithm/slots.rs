use crate::io::configuration::MAX_SLOTS;
use crate::spatial::shapes::ColorName;
use crate::spatial::tile::Tile;
use bitvec::{array::BitArray, order::Lsb0};
use std::fmt;

/// Fixed-size set of slot indices within one tile
///
/// Uses 0-based slot indices matching `Shape::slot_layout`. Indices at or
/// beyond `MAX_SLOTS` are ignored.
#[derive(Clone, Copy, Debug)]
pub struct SlotSet {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl Default for SlotSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotSet {
    /// Create a set with no slots present
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Slots of `tile` whose color is one of `colors`
    pub fn matching(tile: &Tile, colors: &[ColorName]) -> Self {
        let mut set = Self::new();
        for slot in tile.slots() {
            if colors.contains(&slot.color) {
                set.insert(slot.index);
            }
        }
        set
    }

    /// Insert a slot index
    pub fn insert(&mut self, slot: usize) {
        if slot < MAX_SLOTS {
            self.bits.set(slot, true);
        }
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        slot < MAX_SLOTS && self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Test if no slots are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count slots in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all slot indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotSet({} slots: {:?})", self.count(), self.to_vec())
    }
}
