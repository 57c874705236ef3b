//! Word-match session - pair English words with their Oshikwanyama translations.
//!
//! Six entries are dealt into two independently shuffled columns. The player
//! picks one item per column; as soon as both sides hold a selection the pair
//! is evaluated, a short feedback window is armed, and both selections clear
//! when it elapses.
//!
//! New selections are ignored while the feedback window is pending; the
//! clear at the end of the window is unconditional.
//!
//! Scoring rewards streaks: the n-th consecutive match is worth `10 * n`.

use std::collections::HashSet;

use crate::rng::SimpleRng;
use crate::store::VocabularyStore;
use crate::timer::PendingTransition;
use crate::types::{VocabularyEntry, MATCH_FEEDBACK_MS, MATCH_PAIR_COUNT, MATCH_POINTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    pub id: String,
    pub source_text: String,
    pub target_text: String,
}

impl From<VocabularyEntry> for MatchPair {
    fn from(entry: VocabularyEntry) -> Self {
        Self {
            id: entry.id,
            source_text: entry.source_text,
            target_text: entry.target_text,
        }
    }
}

/// Result of the most recent evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Index into `pairs()` of the pair that was solved.
    Matched { pair: usize },
    Missed,
}

/// Column side of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    rng: SimpleRng,
    pair_count: usize,
    pairs: Vec<MatchPair>,
    /// Column slots → pair index.
    left_order: Vec<usize>,
    right_order: Vec<usize>,
    /// Column slot of the current selection.
    selected_left: Option<usize>,
    selected_right: Option<usize>,
    solved_ids: HashSet<String>,
    score: u32,
    streak: u32,
    attempt_count: u32,
    last_outcome: Option<MatchOutcome>,
    feedback: PendingTransition,
}

impl MatchSession {
    pub fn new(seed: u32) -> Self {
        Self::with_pair_count(seed, MATCH_PAIR_COUNT)
    }

    pub fn with_pair_count(seed: u32, pair_count: usize) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            pair_count,
            pairs: Vec::new(),
            left_order: Vec::new(),
            right_order: Vec::new(),
            selected_left: None,
            selected_right: None,
            solved_ids: HashSet::new(),
            score: 0,
            streak: 0,
            attempt_count: 0,
            last_outcome: None,
            feedback: PendingTransition::idle(),
        }
    }

    /// Deal a new board. Any pending feedback from the previous board is
    /// dropped.
    pub fn start(&mut self, store: &VocabularyStore, category_id: Option<&str>) {
        self.pairs = store
            .sample(self.pair_count, category_id, &mut self.rng)
            .into_iter()
            .map(MatchPair::from)
            .collect();

        self.left_order = (0..self.pairs.len()).collect();
        self.right_order = (0..self.pairs.len()).collect();
        self.rng.shuffle(&mut self.left_order);
        self.rng.shuffle(&mut self.right_order);

        self.selected_left = None;
        self.selected_right = None;
        self.solved_ids.clear();
        self.score = 0;
        self.streak = 0;
        self.attempt_count = 0;
        self.last_outcome = None;
        self.feedback.cancel();
        tracing::debug!(pairs = self.pairs.len(), "word match dealt");
    }

    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Left column (English) in display order.
    pub fn left_column(&self) -> Vec<&str> {
        self.left_order
            .iter()
            .map(|&p| self.pairs[p].source_text.as_str())
            .collect()
    }

    /// Right column (Oshikwanyama) in display order.
    pub fn right_column(&self) -> Vec<&str> {
        self.right_order
            .iter()
            .map(|&p| self.pairs[p].target_text.as_str())
            .collect()
    }

    pub fn selected_left(&self) -> Option<&str> {
        self.selected_left
            .map(|slot| self.pairs[self.left_order[slot]].source_text.as_str())
    }

    pub fn selected_right(&self) -> Option<&str> {
        self.selected_right
            .map(|slot| self.pairs[self.right_order[slot]].target_text.as_str())
    }

    pub fn selected_slot(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.selected_left,
            Side::Right => self.selected_right,
        }
    }

    /// Whether the item in `slot` of `side` belongs to a solved pair.
    pub fn is_slot_solved(&self, side: Side, slot: usize) -> bool {
        let order = match side {
            Side::Left => &self.left_order,
            Side::Right => &self.right_order,
        };
        order
            .get(slot)
            .map(|&p| self.solved_ids.contains(&self.pairs[p].id))
            .unwrap_or(false)
    }

    pub fn solved_ids(&self) -> &HashSet<String> {
        &self.solved_ids
    }

    pub fn solved_count(&self) -> usize {
        self.solved_ids.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn last_outcome(&self) -> Option<MatchOutcome> {
        self.last_outcome
    }

    pub fn feedback_pending(&self) -> bool {
        self.feedback.is_pending()
    }

    pub fn is_complete(&self) -> bool {
        !self.pairs.is_empty() && self.solved_ids.len() == self.pairs.len()
    }

    /// Solved share of the board as a percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.pairs.is_empty() {
            return 0;
        }
        ((self.solved_ids.len() * 100) / self.pairs.len()) as u32
    }

    /// `round(pairs / attempts * 100)`, or 0 before any attempt.
    pub fn accuracy(&self) -> u32 {
        if self.attempt_count == 0 {
            return 0;
        }
        (self.pairs.len() as f64 / self.attempt_count as f64 * 100.0).round() as u32
    }

    /// Select a left-column item by its text.
    pub fn select_left(&mut self, text: &str) -> bool {
        match self.find_slot(Side::Left, text) {
            Some(slot) => self.select_slot(Side::Left, slot),
            None => false,
        }
    }

    /// Select a right-column item by its text.
    pub fn select_right(&mut self, text: &str) -> bool {
        match self.find_slot(Side::Right, text) {
            Some(slot) => self.select_slot(Side::Right, slot),
            None => false,
        }
    }

    /// Select the item at `slot` of `side`.
    ///
    /// Ignored for solved items, out-of-range slots and while feedback is
    /// showing. Replaces an earlier selection on the same side. Returns
    /// whether the selection was taken.
    pub fn select_slot(&mut self, side: Side, slot: usize) -> bool {
        if self.feedback.is_pending() || self.is_complete() {
            return false;
        }
        if slot >= self.pairs.len() || self.is_slot_solved(side, slot) {
            return false;
        }

        match side {
            Side::Left => self.selected_left = Some(slot),
            Side::Right => self.selected_right = Some(slot),
        }

        if self.selected_left.is_some() && self.selected_right.is_some() {
            self.evaluate();
        }
        true
    }

    /// Advance the feedback window; clears both selections when it elapses.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.feedback.advance(elapsed_ms) {
            self.selected_left = None;
            self.selected_right = None;
            return true;
        }
        false
    }

    fn pair_at(&self, side: Side, slot: usize) -> &MatchPair {
        let order = match side {
            Side::Left => &self.left_order,
            Side::Right => &self.right_order,
        };
        &self.pairs[order[slot]]
    }

    fn find_slot(&self, side: Side, text: &str) -> Option<usize> {
        (0..self.pairs.len()).find(|&slot| {
            let pair = self.pair_at(side, slot);
            let shown = match side {
                Side::Left => pair.source_text.as_str(),
                Side::Right => pair.target_text.as_str(),
            };
            shown == text && !self.solved_ids.contains(&pair.id)
        })
    }

    fn evaluate(&mut self) {
        let (Some(left), Some(right)) = (self.selected_left, self.selected_right) else {
            return;
        };

        let left_text = &self.pair_at(Side::Left, left).source_text;
        let right_text = &self.pair_at(Side::Right, right).target_text;

        // Compared by text: entries sharing a translation are interchangeable.
        let hit = self.pairs.iter().position(|p| {
            &p.source_text == left_text
                && &p.target_text == right_text
                && !self.solved_ids.contains(&p.id)
        });

        self.attempt_count += 1;
        match hit {
            Some(pair) => {
                self.solved_ids.insert(self.pairs[pair].id.clone());
                self.score += MATCH_POINTS * (self.streak + 1);
                self.streak += 1;
                self.last_outcome = Some(MatchOutcome::Matched { pair });
                tracing::debug!(
                    pair = %self.pairs[pair].id,
                    streak = self.streak,
                    score = self.score,
                    "match"
                );
                if self.is_complete() {
                    tracing::info!(
                        score = self.score,
                        accuracy = self.accuracy(),
                        "word match complete"
                    );
                }
            }
            None => {
                self.streak = 0;
                self.last_outcome = Some(MatchOutcome::Missed);
                tracing::debug!(attempts = self.attempt_count, "miss");
            }
        }

        self.feedback.schedule(MATCH_FEEDBACK_MS);
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(1)
    }
}
