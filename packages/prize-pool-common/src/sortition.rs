use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SortitionError {
    #[error("no participant carries positive weight")]
    EmptyPopulation,

    #[error("random value {random_value} is outside [0, {total_weight})")]
    PickOutOfRange {
        random_value: Uint128,
        total_weight: Uint128,
    },
}

const INITIAL_CAPACITY: u32 = 16;

/// Aggregate-weight binary tree for O(log n) weighted random selection.
///
/// Nodes live in a flat arena as an implicit 1-indexed segment tree over a
/// power-of-two leaf capacity: node `i` has children `2i` and `2i + 1`, leaf
/// slot `j` sits at index `capacity + j`, and every internal node holds the
/// sum of its subtree. The arena doubles and rebuilds when all leaf slots
/// are taken.
///
/// Each participant owns the half-open cumulative range
/// `[cumulative_start, cumulative_start + weight)`, so any value in
/// `[0, total)` resolves to exactly one participant and a zero-weight leaf
/// is never reachable.
#[cw_serde]
pub struct SortitionTree {
    /// Aggregate arena, length `2 * capacity`; index 0 is unused.
    nodes: Vec<Uint128>,
    /// Leaf slot -> identity, in slot order.
    identities: Vec<String>,
    /// Identity -> leaf slot.
    slots: BTreeMap<String, u32>,
    capacity: u32,
    /// Number of leaves with positive weight.
    active: u32,
}

impl SortitionTree {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    fn with_capacity(capacity: u32) -> Self {
        let capacity = capacity.next_power_of_two().max(1);
        SortitionTree {
            nodes: vec![Uint128::zero(); 2 * capacity as usize],
            identities: Vec::new(),
            slots: BTreeMap::new(),
            capacity,
            active: 0,
        }
    }

    /// Sum of all weights; equals the root aggregate.
    pub fn total(&self) -> Uint128 {
        self.nodes[1]
    }

    /// Number of participants with positive weight.
    pub fn population(&self) -> u32 {
        self.active
    }

    pub fn weight_of(&self, identity: &str) -> Uint128 {
        match self.slots.get(identity) {
            Some(&slot) => self.nodes[(self.capacity + slot) as usize],
            None => Uint128::zero(),
        }
    }

    /// Set `identity`'s weight, registering a new leaf if needed.
    /// Idempotent for a repeated identical weight.
    pub fn insert_or_update(&mut self, identity: &str, weight: Uint128) {
        let slot = match self.slots.get(identity) {
            Some(&slot) => slot,
            None => {
                if self.identities.len() as u32 == self.capacity {
                    self.grow();
                }
                let slot = self.identities.len() as u32;
                self.identities.push(identity.to_string());
                self.slots.insert(identity.to_string(), slot);
                slot
            }
        };

        let previous = self.nodes[(self.capacity + slot) as usize];
        if previous.is_zero() && !weight.is_zero() {
            self.active += 1;
        } else if !previous.is_zero() && weight.is_zero() {
            self.active -= 1;
        }
        self.update_leaf(slot, weight);
    }

    /// Walk the aggregates down from the root: descend left while
    /// `random_value < left_total`, otherwise subtract the left total and
    /// descend right. Returns the identity whose cumulative range contains
    /// `random_value`.
    pub fn select(&self, random_value: Uint128) -> Result<&str, SortitionError> {
        let total = self.total();
        if total.is_zero() {
            return Err(SortitionError::EmptyPopulation);
        }
        if random_value >= total {
            return Err(SortitionError::PickOutOfRange {
                random_value,
                total_weight: total,
            });
        }

        let mut remaining = random_value;
        let mut i = 1usize;
        while i < self.capacity as usize {
            let left = 2 * i;
            if remaining < self.nodes[left] {
                i = left;
            } else {
                remaining -= self.nodes[left];
                i = left + 1;
            }
        }

        let slot = i - self.capacity as usize;
        Ok(&self.identities[slot])
    }

    fn update_leaf(&mut self, slot: u32, weight: Uint128) {
        let mut i = (self.capacity + slot) as usize;
        self.nodes[i] = weight;
        i >>= 1;
        while i >= 1 {
            self.nodes[i] = self.nodes[2 * i] + self.nodes[2 * i + 1];
            i >>= 1;
        }
    }

    /// Double the leaf capacity and rebuild the aggregates. Leaf slots keep
    /// their assignments, so cumulative ranges are stable across growth.
    fn grow(&mut self) {
        let old_capacity = self.capacity as usize;
        let weights: Vec<Uint128> = (0..self.identities.len())
            .map(|slot| self.nodes[old_capacity + slot])
            .collect();

        self.capacity *= 2;
        let capacity = self.capacity as usize;
        self.nodes = vec![Uint128::zero(); 2 * capacity];
        for (slot, weight) in weights.into_iter().enumerate() {
            self.nodes[capacity + slot] = weight;
        }
        for i in (1..capacity).rev() {
            self.nodes[i] = self.nodes[2 * i] + self.nodes[2 * i + 1];
        }
    }
}

impl Default for SortitionTree {
    fn default() -> Self {
        Self::new()
    }
}
