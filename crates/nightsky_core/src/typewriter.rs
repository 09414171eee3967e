//! Typewriter text effect
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. Driven by elapsed time like the engine, so the host
//! can advance it from the same frame callback.

use std::time::Duration;

use crate::config::TypewriterConfig;

/// Type / hold / delete cycle over a list of phrases
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Characters of the current phrase that are visible
    char_index: usize,
    deleting: bool,
    text: String,
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
    next_phrase_delay: Duration,
    clock: Duration,
    /// Elapsed time at which the next step runs
    next_step: Duration,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Self {
        Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            text: String::new(),
            type_delay: Duration::from_millis(config.type_ms),
            delete_delay: Duration::from_millis(config.delete_ms),
            hold_delay: Duration::from_millis(config.hold_ms),
            next_phrase_delay: Duration::from_millis(config.next_phrase_ms),
            clock: Duration::ZERO,
            // The first character appears immediately
            next_step: Duration::ZERO,
        }
    }

    /// Currently visible text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by `dt`; returns true if the visible text changed
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.phrases.is_empty() {
            return false;
        }

        self.clock += dt;
        let before = self.text.clone();
        while self.next_step <= self.clock {
            let delay = self.step();
            // A zero delay everywhere would never catch up with the clock
            self.next_step += delay.max(Duration::from_millis(1));
        }
        before != self.text
    }

    /// Run one step and return the delay until the next
    fn step(&mut self) -> Duration {
        let len = self.phrases[self.phrase_index].chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        self.text = self.phrases[self.phrase_index]
            .chars()
            .take(self.char_index)
            .collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            self.hold_delay
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.next_phrase_delay
        } else if self.deleting {
            self.delete_delay
        } else {
            self.type_delay
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&TypewriterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_char_is_immediate() {
        let mut tw = Typewriter::new(&config(&["abc"]));
        assert!(tw.advance(Duration::ZERO));
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let mut tw = Typewriter::new(&config(&["abc"]));
        tw.advance(Duration::ZERO);
        assert!(!tw.advance(ms(99)));
        assert!(tw.advance(ms(1)));
        assert_eq!(tw.text(), "ab");
        tw.advance(ms(100));
        assert_eq!(tw.text(), "abc");
        assert!(tw.is_deleting());
    }

    #[test]
    fn test_full_cycle_moves_to_next_phrase() {
        let mut tw = Typewriter::new(&config(&["ab", "xyz"]));
        // t=0 "a", t=100 "ab" then hold 2000
        tw.advance(ms(100));
        assert_eq!(tw.text(), "ab");
        // t=2100 delete to "a", t=2150 delete to "" then wait 500
        tw.advance(ms(2050));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert!(!tw.is_deleting());
        // t=2650 first char of the next phrase
        tw.advance(ms(499));
        assert_eq!(tw.text(), "");
        tw.advance(ms(1));
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_around() {
        let mut tw = Typewriter::new(&config(&["a"]));
        // "a" at 0, hold until 2000 -> "" and wrap, wait 500 -> "a"
        tw.advance(ms(2000));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 0);
        tw.advance(ms(500));
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_unicode_phrases() {
        let mut tw = Typewriter::new(&config(&["héllo"]));
        tw.advance(ms(200));
        assert_eq!(tw.text(), "hél");
    }

    #[test]
    fn test_no_phrases_is_idle() {
        let mut tw = Typewriter::new(&config(&[]));
        assert!(!tw.advance(ms(10_000)));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_default_phrases() {
        let mut tw = Typewriter::default();
        tw.advance(Duration::ZERO);
        assert_eq!(tw.text(), "S");
    }
}
