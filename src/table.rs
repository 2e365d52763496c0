//! Fixed-capacity key -> dense-label tables backing hash-based relabeling.
//!
//! Two layouts, picked by key width:
//! - `Direct`: one slot per possible key for widths of 16 bits or less.
//! - `Chained`: open hash with per-bucket chains for wider keys. Capacity is
//!   the next power of two at or above 4/3 of the sequence length, capped at
//!   2^30, and never changes for the lifetime of a call.
//!
//! Callers only insert keys they have already probed for, so `insert` does
//! not re-check presence.

/// Absent-slot sentinel; labels are always below the sequence length.
const EMPTY: u32 = u32::MAX;

const MAX_CAPACITY: usize = 1 << 30;

pub(crate) enum KeyTable {
    Direct(DirectTable),
    Chained(ChainedTable),
}

impl KeyTable {
    /// Table for `n` prospective entries of a `key_bits`-wide key type.
    pub(crate) fn with_capacity(key_bits: u32, n: usize) -> Self {
        if key_bits <= 16 {
            KeyTable::Direct(DirectTable::new(key_bits))
        } else {
            KeyTable::Chained(ChainedTable::new(n))
        }
    }

    #[inline]
    pub(crate) fn get(&self, key: u64) -> Option<u32> {
        match self {
            KeyTable::Direct(t) => t.get(key),
            KeyTable::Chained(t) => t.get(key),
        }
    }

    /// Record `key -> label`. The key must not already be present.
    #[inline]
    pub(crate) fn insert(&mut self, key: u64, label: u32) {
        match self {
            KeyTable::Direct(t) => t.insert(key, label),
            KeyTable::Chained(t) => t.insert(key, label),
        }
    }
}

/// One slot per possible key value; the key's low bits are the index.
pub(crate) struct DirectTable {
    mask: u64,
    labels: Vec<u32>,
}

impl DirectTable {
    fn new(key_bits: u32) -> Self {
        debug_assert!(key_bits <= 16);
        let size = 1usize << key_bits;
        DirectTable {
            mask: (size - 1) as u64,
            labels: vec![EMPTY; size],
        }
    }

    #[inline]
    fn get(&self, key: u64) -> Option<u32> {
        let label = self.labels[(key & self.mask) as usize];
        (label != EMPTY).then_some(label)
    }

    #[inline]
    fn insert(&mut self, key: u64, label: u32) {
        self.labels[(key & self.mask) as usize] = label;
    }
}

/// Open hash table with chaining; nodes live in flat parallel arrays.
pub(crate) struct ChainedTable {
    mask: u64,
    heads: Vec<u32>,
    keys: Vec<u64>,
    labels: Vec<u32>,
    next: Vec<u32>,
}

impl ChainedTable {
    fn new(n: usize) -> Self {
        let min = n + n / 3 + 1;
        let capacity = min.next_power_of_two().min(MAX_CAPACITY);
        ChainedTable {
            mask: (capacity - 1) as u64,
            heads: vec![EMPTY; capacity],
            keys: Vec::with_capacity(n),
            labels: Vec::with_capacity(n),
            next: Vec::with_capacity(n),
        }
    }

    /// XOR-fold the key's halves so high-order bits reach the bucket mask.
    #[inline]
    fn bucket(&self, key: u64) -> usize {
        let folded = key ^ (key >> 32);
        let folded = folded ^ (folded >> 16);
        (folded & self.mask) as usize
    }

    #[inline]
    fn get(&self, key: u64) -> Option<u32> {
        let mut at = self.heads[self.bucket(key)];
        while at != EMPTY {
            let node = at as usize;
            if self.keys[node] == key {
                return Some(self.labels[node]);
            }
            at = self.next[node];
        }
        None
    }

    #[inline]
    fn insert(&mut self, key: u64, label: u32) {
        let b = self.bucket(key);
        let node = self.keys.len() as u32;
        self.keys.push(key);
        self.labels.push(label);
        self.next.push(self.heads[b]);
        self.heads[b] = node;
    }
}
