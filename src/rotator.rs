//! Rotating hero title
//!
//! Each cycle fades the title out, waits for the fade, then swaps in the next
//! title and fades it back in. The rotator is a pure state machine: every call
//! to [`TitleRotator::step`] yields the visible action plus the delay until the
//! following step, and the browser layer turns that into a chain of timeouts.

use crate::consts::{TITLE_FADE_MS, TITLE_PERIOD_MS, TITLE_START_DELAY_MS};

/// One visible action of the rotator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotatorStep {
    /// Set opacity to 0
    FadeOut,
    /// Replace the text and set opacity to 1
    Show(String),
}

/// Title cycle state
#[derive(Debug, Clone)]
pub struct TitleRotator {
    titles: Vec<String>,
    index: usize,
    fading: bool,
    shown: Option<usize>,
}

impl TitleRotator {
    /// Returns `None` for an empty title list
    pub fn new(titles: Vec<String>) -> Option<Self> {
        if titles.is_empty() {
            return None;
        }
        Some(Self {
            titles,
            index: 0,
            fading: false,
            shown: None,
        })
    }

    /// Delay before the first step, leaving room for the entry animation
    pub fn start_delay_ms(&self) -> u32 {
        TITLE_START_DELAY_MS
    }

    /// Index of the title the next `Show` will display
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Title currently on screen, if the rotator has shown one yet
    pub fn displayed(&self) -> Option<&str> {
        self.shown.map(|i| self.titles[i].as_str())
    }

    /// Advance one step. Returns the action and the delay until the next step.
    pub fn step(&mut self) -> (RotatorStep, u32) {
        if !self.fading {
            self.fading = true;
            return (RotatorStep::FadeOut, TITLE_FADE_MS);
        }

        let text = self.titles[self.index].clone();
        self.shown = Some(self.index);
        self.index = (self.index + 1) % self.titles.len();
        self.fading = false;
        (RotatorStep::Show(text), TITLE_PERIOD_MS - TITLE_FADE_MS)
    }
}

/// Milliseconds after start at which the `k`-th text change (0-based) lands
pub fn text_change_at(k: u64) -> u64 {
    (TITLE_START_DELAY_MS + TITLE_FADE_MS) as u64 + k * TITLE_PERIOD_MS as u64
}
