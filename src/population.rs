/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Per-variable unit state.
//!
//! Each QUBO variable is a unit with a fixed-point accumulator and a binary
//! output bit. A unit is either [`UnitState::Quiescent`] (below threshold,
//! bit 0) or [`UnitState::Firing`] (crossed threshold this step, bit 1,
//! accumulator reset to 0).
//!
//! # Invariants
//!
//! - Bits are double buffered. [`UnitPopulation::integrate`] writes the
//!   pending buffer only; [`UnitPopulation::bits`] returns the committed
//!   buffer until [`UnitPopulation::commit`] swaps them. Coupling computed
//!   during a step therefore never sees a bit from the step being computed.
//! - Accumulators never drop below the floor passed to `integrate`.
//! - A unit that does not cross threshold reports bit 0 for the step.

/// Fractional bits of the fixed-point accumulator representation.
pub const FRAC_BITS: u32 = 8;

/// Fixed-point representation of 1.0.
pub const FIXED_ONE: i64 = 1 << FRAC_BITS;

/// Firing state of a unit for the most recently committed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitState {
    /// Below threshold; bit is 0.
    Quiescent,
    /// Crossed threshold; bit is 1 and the accumulator was reset.
    Firing,
}

/// Mutable simulation state for all units of one solve.
#[derive(Clone, Debug)]
pub struct UnitPopulation {
    accumulators: Vec<i64>,
    bits: Vec<bool>,
    next_bits: Vec<bool>,
}

impl UnitPopulation {
    /// Initialise from a starting assignment.
    ///
    /// Every accumulator starts at 0. Units whose initial bit is 1 are treated
    /// as having just fired: their bit is 1 and their accumulator is reset.
    pub fn new(init_value: &[bool]) -> Self {
        Self {
            accumulators: vec![0; init_value.len()],
            bits: init_value.to_vec(),
            next_bits: init_value.to_vec(),
        }
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` if there are no units.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Committed bits of the last completed step.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Fixed-point accumulator of unit `i`.
    pub fn accumulator(&self, i: usize) -> i64 {
        self.accumulators[i]
    }

    /// All fixed-point accumulators.
    pub fn accumulators(&self) -> &[i64] {
        &self.accumulators
    }

    /// State of unit `i` in the last committed step.
    pub fn state(&self, i: usize) -> UnitState {
        if self.bits[i] {
            UnitState::Firing
        } else {
            UnitState::Quiescent
        }
    }

    /// Indices of units that fired in the last committed step.
    pub fn fired(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter_map(|(i, &b)| b.then_some(i))
    }

    /// Add `drive` to unit `i` and decide whether it fires in the pending step.
    ///
    /// The accumulator saturates at `floor` from below. On reaching
    /// `threshold` the pending bit is set and the accumulator resets to 0.
    /// Every unit must be integrated before [`commit`](Self::commit).
    pub fn integrate(&mut self, i: usize, drive: i64, threshold: i64, floor: i64) -> UnitState {
        let acc = self.accumulators[i].saturating_add(drive).max(floor);
        if acc >= threshold {
            self.accumulators[i] = 0;
            self.next_bits[i] = true;
            UnitState::Firing
        } else {
            self.accumulators[i] = acc;
            self.next_bits[i] = false;
            UnitState::Quiescent
        }
    }

    /// Publish the pending bits as the committed step.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.bits, &mut self.next_bits);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
