//! Bounded memo tables for evaluation and legal-move results.
//!
//! Entries are keyed by the full 640-bit position key plus ply and side,
//! so a hit is always exact. The table is a power-of-two array of small
//! buckets; inside a bucket the least recently touched slot is replaced
//! when a new key arrives, which bounds memory for long-lived engines.

use crate::board::{Color, Move, PositionKey};

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

/// Default evaluation table size in slots
pub const DEFAULT_EVAL_SLOTS: usize = 1 << 16;

/// Default legal-move table size in slots
pub const DEFAULT_LEGAL_SLOTS: usize = 1 << 14;

/// Lookup key for a memoized result.
///
/// `ply` is zero for results that do not depend on the move count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub position: PositionKey,
    pub ply: u32,
    pub side: Color,
}

impl MemoKey {
    #[must_use]
    pub fn new(position: PositionKey, ply: u32, side: Color) -> Self {
        MemoKey {
            position,
            ply,
            side,
        }
    }

    /// Mix every key word into a 64-bit bucket selector.
    fn mix(&self) -> u64 {
        let mut h = 0x9E37_79B9_7F4A_7C15u64 ^ u64::from(self.ply) ^ (self.side.index() as u64) << 63;
        for &word in self.position.words() {
            h ^= word;
            h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
            h ^= h >> 31;
        }
        h
    }
}

struct MemoSlot<V> {
    key: MemoKey,
    value: V,
    stamp: u64,
}

/// Hit/miss counters, reset with the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub evictions: u64,
}

/// Bounded memo table. A capacity of zero disables caching.
pub struct MemoTable<V> {
    buckets: Vec<Vec<MemoSlot<V>>>,
    mask: usize,
    tick: u64,
    stats: MemoStats,
}

impl<V: Clone> MemoTable<V> {
    /// Create a table holding at most `slots` entries (rounded down to a
    /// power-of-two number of buckets).
    #[must_use]
    pub fn new(slots: usize) -> Self {
        let mut num_buckets = slots / BUCKET_SIZE;
        if num_buckets > 0 && !num_buckets.is_power_of_two() {
            num_buckets = num_buckets.next_power_of_two() / 2;
        }
        if slots > 0 && num_buckets == 0 {
            num_buckets = 1;
        }

        let mut buckets = Vec::with_capacity(num_buckets);
        buckets.resize_with(num_buckets, Vec::new);

        MemoTable {
            buckets,
            mask: num_buckets.saturating_sub(1),
            tick: 0,
            stats: MemoStats::default(),
        }
    }

    /// Maximum number of entries the table keeps.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    fn index(&self, key: &MemoKey) -> usize {
        (key.mix() as usize) & self.mask
    }

    /// Look up a stored result, refreshing its recency on a hit.
    pub fn probe(&mut self, key: &MemoKey) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }
        self.stats.probes += 1;
        self.tick += 1;
        let tick = self.tick;
        let idx = self.index(key);
        let slot = self.buckets[idx].iter_mut().find(|slot| slot.key == *key)?;
        slot.stamp = tick;
        self.stats.hits += 1;
        Some(slot.value.clone())
    }

    /// Store a result.
    ///
    /// Prefers:
    /// 1. The slot already holding this key (update)
    /// 2. A free slot in the bucket
    /// 3. The least recently touched slot
    pub fn store(&mut self, key: MemoKey, value: V) {
        if self.buckets.is_empty() {
            return;
        }
        self.stats.stores += 1;
        self.tick += 1;
        let stamp = self.tick;
        let idx = self.index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(slot) = bucket.iter_mut().find(|slot| slot.key == key) {
            slot.value = value;
            slot.stamp = stamp;
            return;
        }

        if bucket.len() < BUCKET_SIZE {
            bucket.push(MemoSlot { key, value, stamp });
            return;
        }

        let oldest = bucket
            .iter_mut()
            .min_by_key(|slot| slot.stamp)
            .map(|slot| {
                *slot = MemoSlot { key, value, stamp };
            });
        if oldest.is_some() {
            self.stats.evictions += 1;
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.tick = 0;
        self.stats = MemoStats::default();
    }
}

impl<V> Clone for MemoTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        MemoTable {
            buckets: self
                .buckets
                .iter()
                .map(|bucket| {
                    bucket
                        .iter()
                        .map(|slot| MemoSlot {
                            key: slot.key,
                            value: slot.value.clone(),
                            stamp: slot.stamp,
                        })
                        .collect()
                })
                .collect(),
            mask: self.mask,
            tick: self.tick,
            stats: self.stats,
        }
    }
}

impl<V> std::fmt::Debug for MemoTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoTable")
            .field("buckets", &self.buckets.len())
            .field("stats", &self.stats)
            .finish()
    }
}

/// The two tables a board carries.
#[derive(Clone, Debug)]
pub(crate) struct BoardMemo {
    pub(crate) eval: MemoTable<f64>,
    pub(crate) legal: MemoTable<Vec<Move>>,
}

impl BoardMemo {
    pub(crate) fn new(eval_slots: usize, legal_slots: usize) -> Self {
        BoardMemo {
            eval: MemoTable::new(eval_slots),
            legal: MemoTable::new(legal_slots),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.eval.clear();
        self.legal.clear();
    }
}

impl Default for BoardMemo {
    fn default() -> Self {
        BoardMemo::new(DEFAULT_EVAL_SLOTS, DEFAULT_LEGAL_SLOTS)
    }
}
