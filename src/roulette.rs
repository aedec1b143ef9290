//! Speaking-order roulette.
//!
//! A shuffle takes a snapshot of the roster, so members added or removed
//! afterwards do not show up in the current order. The cursor always points
//! into the order once one exists.

use crate::roster::Participant;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Where an entry of the order stands relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerState {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roulette {
    order: Vec<Participant>,
    cursor: usize,
    spinning: bool,
}

impl Roulette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `participants` into a new order right away.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, participants: &[Participant], rng: &mut R) {
        if self.begin_shuffle(participants.len()) {
            self.complete_shuffle(participants, rng);
        }
    }

    /// Enter the spinning state ahead of a delayed [`Roulette::complete_shuffle`].
    ///
    /// Refused for an empty roster or while a shuffle is already pending.
    pub fn begin_shuffle(&mut self, roster_len: usize) -> bool {
        if roster_len == 0 || self.spinning {
            return false;
        }
        self.spinning = true;
        true
    }

    /// Replace the order with a uniform permutation of `participants` and
    /// point the cursor at its first entry.
    pub fn complete_shuffle<R: Rng + ?Sized>(&mut self, participants: &[Participant], rng: &mut R) {
        self.spinning = false;
        if participants.is_empty() {
            return;
        }

        let mut order = participants.to_vec();
        // Fisher-Yates, last position first
        order.shuffle(rng);
        info!(
            "Speaking order: {}",
            order.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
        );

        self.order = order;
        self.cursor = 0;
    }

    pub fn next(&mut self) -> bool {
        if self.cursor + 1 >= self.order.len() {
            return false;
        }
        self.cursor += 1;
        debug!("Next speaker: #{}", self.cursor + 1);
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!("Previous speaker: #{}", self.cursor + 1);
        true
    }

    pub fn order(&self) -> &[Participant] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Participant> {
        self.order.get(self.cursor)
    }

    pub fn has_result(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.order.len()
    }

    pub fn speaker_state(&self, index: usize) -> SpeakerState {
        match index.cmp(&self.cursor) {
            std::cmp::Ordering::Less => SpeakerState::Done,
            std::cmp::Ordering::Equal => SpeakerState::Current,
            std::cmp::Ordering::Greater => SpeakerState::Upcoming,
        }
    }
}
