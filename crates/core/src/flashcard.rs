//! Flashcard session - browse a small deck, flip to reveal, mark as learned.
//!
//! States: `Selecting` (no deck yet) → `Browsing`. Navigation clamps at the
//! deck edges and every operation on an empty deck is a no-op, so nothing in
//! here can fail.

use std::collections::HashSet;

use crate::rng::SimpleRng;
use crate::store::VocabularyStore;
use crate::types::{VocabularyEntry, FLASHCARD_DECK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardPhase {
    Selecting,
    Browsing,
}

#[derive(Debug, Clone)]
pub struct FlashcardSession {
    rng: SimpleRng,
    deck_size: usize,
    category: Option<String>,
    deck: Vec<VocabularyEntry>,
    position: usize,
    revealed: bool,
    learned_ids: HashSet<String>,
}

impl FlashcardSession {
    pub fn new(seed: u32) -> Self {
        Self::with_deck_size(seed, FLASHCARD_DECK_SIZE)
    }

    pub fn with_deck_size(seed: u32, deck_size: usize) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            deck_size,
            category: None,
            deck: Vec::new(),
            position: 0,
            revealed: false,
            learned_ids: HashSet::new(),
        }
    }

    /// Deal a fresh deck from `category_id` (`"all"` or unknown ids use the
    /// whole table).
    pub fn start(&mut self, store: &VocabularyStore, category_id: &str) {
        self.deck = store.sample(self.deck_size, Some(category_id), &mut self.rng);
        self.category = Some(category_id.to_string());
        self.position = 0;
        self.revealed = false;
        self.learned_ids.clear();
        tracing::debug!(category = category_id, cards = self.deck.len(), "flashcards dealt");
    }

    /// Back to category selection. The deck is dropped.
    pub fn exit(&mut self) {
        self.category = None;
        self.deck.clear();
        self.position = 0;
        self.revealed = false;
        self.learned_ids.clear();
    }

    pub fn phase(&self) -> FlashcardPhase {
        if self.category.is_some() {
            FlashcardPhase::Browsing
        } else {
            FlashcardPhase::Selecting
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn deck(&self) -> &[VocabularyEntry] {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.deck.get(self.position)
    }

    pub fn learned_count(&self) -> usize {
        self.learned_ids.len()
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.learned_ids.contains(id)
    }

    pub fn learned_ids(&self) -> &HashSet<String> {
        &self.learned_ids
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.deck.len()
    }

    /// 1-based position as a percentage of the deck.
    pub fn progress_percent(&self) -> u32 {
        if self.deck.is_empty() {
            return 0;
        }
        (((self.position + 1) * 100) / self.deck.len()) as u32
    }

    pub fn flip(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        self.revealed = !self.revealed;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        self.revealed = false;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.revealed = false;
        true
    }

    /// Record the current card as learned, then move on like `next()`.
    ///
    /// On the last card the mark sticks and the position stays put.
    pub fn mark_learned(&mut self) -> bool {
        let Some(card) = self.deck.get(self.position) else {
            return false;
        };
        let added = self.learned_ids.insert(card.id.clone());
        let moved = self.next();
        added || moved
    }

    /// Re-deal the same cards in a new order. Learned marks survive.
    pub fn shuffle(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        self.rng.shuffle(&mut self.deck);
        self.position = 0;
        self.revealed = false;
        true
    }
}

impl Default for FlashcardSession {
    fn default() -> Self {
        Self::new(1)
    }
}
