//! Study session state and its actions

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::flashcards::{Card, CardSet};

/// Options chosen before a session starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyOptions {
    /// Randomize the order of cards
    pub shuffle_orders: bool,
    /// Show the back first and ask for the front
    pub flipped: bool,
}

/// Progress through the current round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub current_index: usize,
    pub show_back: bool,
    pub correct_answers: usize,
    pub total_answered: usize,
    pub current_card_answered: bool,
    pub incorrect_cards: Vec<Card>,
    pub options: StudyOptions,
}

impl StudySession {
    fn restarted(&self) -> Self {
        Self {
            options: self.options,
            ..Self::default()
        }
    }
}

/// The question and answer shown for a card, after applying `flipped`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFaces<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

/// State of the study view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyState {
    pub list: Option<CardSet>,
    pub session: StudySession,
    pub is_complete: bool,
    pub is_preparing: bool,
    pub study_cards: Vec<Card>,
}

impl StudyState {
    pub fn new(list: CardSet) -> Self {
        let mut state = Self::default();
        state.set_list(list);
        state
    }

    /// Load a list and return to the options screen
    pub fn set_list(&mut self, list: CardSet) {
        self.study_cards = list.cards.clone();
        self.list = Some(list);
        self.session = self.session.restarted();
        self.is_complete = false;
        self.is_preparing = true;
    }

    pub fn set_options(&mut self, options: StudyOptions) {
        self.session.options = options;
    }

    /// Begin a round over the whole list
    pub fn start_study<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.list.as_ref().map(|l| l.cards.clone()).unwrap_or_default();
        self.begin_round(cards, rng);
    }

    /// Begin a round over the cards missed in the last round.
    ///
    /// Does nothing when every card was answered correctly.
    pub fn start_incorrect_only<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.session.incorrect_cards.is_empty() {
            return;
        }
        let cards = std::mem::take(&mut self.session.incorrect_cards);
        self.begin_round(cards, rng);
    }

    fn begin_round<R: Rng + ?Sized>(&mut self, mut cards: Vec<Card>, rng: &mut R) {
        if self.session.options.shuffle_orders {
            cards.shuffle(rng);
        }
        self.study_cards = cards;
        self.session = self.session.restarted();
        self.is_complete = false;
        self.is_preparing = false;
    }

    pub fn flip_card(&mut self) {
        self.session.show_back = !self.session.show_back;
    }

    /// Record an answer for the current card and move on.
    ///
    /// Only counts once the back has been revealed, and once per card.
    pub fn answer_card(&mut self, correct: bool) {
        if self.is_preparing || self.is_complete || !self.session.show_back || self.session.current_card_answered {
            return;
        }
        let Some(card) = self.study_cards.get(self.session.current_index).cloned() else {
            return;
        };

        self.session.total_answered += 1;
        if correct {
            self.session.correct_answers += 1;
        } else {
            self.session.incorrect_cards.push(card);
        }
        self.session.show_back = false;

        if self.session.current_index + 1 >= self.study_cards.len() {
            self.session.current_card_answered = true;
            self.is_complete = true;
        } else {
            self.session.current_index += 1;
            self.session.current_card_answered = false;
        }
    }

    pub fn next_card(&mut self) {
        if self.session.current_index + 1 < self.study_cards.len() {
            self.session.current_index += 1;
            self.session.show_back = false;
            self.session.current_card_answered = false;
        }
    }

    pub fn previous_card(&mut self) {
        if self.session.current_index > 0 {
            self.session.current_index -= 1;
            self.session.show_back = false;
            self.session.current_card_answered = false;
        }
    }

    /// Go back to the first card of the current round, keeping options and order
    pub fn restart(&mut self) {
        self.session = self.session.restarted();
        self.is_complete = false;
    }

    /// Drop the list and all progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.study_cards.get(self.session.current_index)
    }

    pub fn current_faces(&self) -> Option<CardFaces<'_>> {
        self.current_card().map(|card| {
            if self.session.options.flipped {
                CardFaces {
                    question: &card.back,
                    answer: &card.front,
                }
            } else {
                CardFaces {
                    question: &card.front,
                    answer: &card.back,
                }
            }
        })
    }

    /// Position in the round as a percentage
    pub fn progress(&self) -> f64 {
        if self.study_cards.is_empty() {
            return 0.0;
        }
        (self.session.current_index + 1) as f64 / self.study_cards.len() as f64 * 100.0
    }

    /// Correct answers as a rounded percentage of answers given
    pub fn percentage(&self) -> u32 {
        if self.session.total_answered == 0 {
            return 0;
        }
        (self.session.correct_answers as f64 / self.session.total_answered as f64 * 100.0).round() as u32
    }
}
