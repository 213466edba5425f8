//! Shift-register consensus debouncing
//!
//! Each line keeps an 8-bit history. Every sample shifts the history left
//! by two and inserts the raw level twice, so four identical samples fill
//! the register. A stable state is only recognized when the whole register
//! is all ones or all zeros; anything in between is bounce and leaves the
//! debounced state untouched.

use crate::config::Polarity;
use crate::ids::{ButtonLine, LINE_COUNT};
use crate::traits::DigitalInputs;

/// Identical consecutive samples needed to change the debounced state
pub const DEBOUNCE_SAMPLES: usize = 4;

/// History after a run of high samples
const ALL_HIGH: u8 = 0xFF;

/// History after a run of low samples
const ALL_LOW: u8 = 0x00;

/// Debounced state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button held down
    Pressed,
    /// Button up
    Released,
}

/// Per-line debounce state
#[derive(Debug, Clone, Copy)]
struct LineState {
    /// Recent raw samples, two bits each
    history: u8,
    /// Last sentinel pattern the history matched
    stable: u8,
    /// Set on a stable transition, cleared when read
    changed: bool,
}

impl LineState {
    const fn new(released: u8) -> Self {
        Self {
            history: released,
            stable: released,
            changed: false,
        }
    }
}

/// Debounced tracker for all button lines
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    lines: [LineState; LINE_COUNT],
    polarity: Polarity,
}

impl ButtonTracker {
    /// Create a tracker with every line stably released
    pub const fn new(polarity: Polarity) -> Self {
        let released = released_pattern(polarity);
        Self {
            lines: [LineState::new(released); LINE_COUNT],
            polarity,
        }
    }

    /// Ingest one raw level for a line (true = logic high)
    pub fn sample(&mut self, line: ButtonLine, high: bool) {
        let pressed = pressed_pattern(self.polarity);
        let released = released_pattern(self.polarity);
        let state = &mut self.lines[line.index()];

        let bit = high as u8;
        state.history = (state.history << 2) | (bit << 1) | bit;

        let settled = state.history == pressed || state.history == released;
        if settled && state.history != state.stable {
            state.stable = state.history;
            state.changed = true;
            trace!("button {:?} settled", line);
        }
    }

    /// Sample every line from an input source, in line order
    pub fn sample_all<I: DigitalInputs + ?Sized>(&mut self, inputs: &mut I) {
        for line in ButtonLine::ALL {
            let high = inputs.read_line(line);
            self.sample(line, high);
        }
    }

    /// Check and clear the change flag of a line
    ///
    /// Returns true exactly once per debounced transition. Transitions that
    /// happen between two reads coalesce into one pending flag.
    pub fn is_changed(&mut self, line: ButtonLine) -> bool {
        core::mem::take(&mut self.lines[line.index()].changed)
    }

    /// Debounced state of a line; does not touch the change flag
    pub fn state(&self, line: ButtonLine) -> ButtonState {
        if self.lines[line.index()].stable == pressed_pattern(self.polarity) {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// Configured line polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

const fn pressed_pattern(polarity: Polarity) -> u8 {
    if polarity.pressed_level() {
        ALL_HIGH
    } else {
        ALL_LOW
    }
}

const fn released_pattern(polarity: Polarity) -> u8 {
    if polarity.pressed_level() {
        ALL_LOW
    } else {
        ALL_HIGH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LINE: ButtonLine = ButtonLine::Select1;

    fn feed(tracker: &mut ButtonTracker, levels: &[bool]) -> usize {
        let mut changes = 0;
        for &level in levels {
            tracker.sample(LINE, level);
            if tracker.is_changed(LINE) {
                changes += 1;
            }
        }
        changes
    }

    #[test]
    fn test_starts_released_without_pending_change() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        for line in ButtonLine::ALL {
            assert_eq!(tracker.state(line), ButtonState::Released);
            assert!(!tracker.is_changed(line));
        }
    }

    #[test]
    fn test_press_needs_full_history() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);

        for _ in 0..DEBOUNCE_SAMPLES - 1 {
            tracker.sample(LINE, false);
            assert_eq!(tracker.state(LINE), ButtonState::Released);
        }
        tracker.sample(LINE, false);
        assert_eq!(tracker.state(LINE), ButtonState::Pressed);
        assert!(tracker.is_changed(LINE));
    }

    #[test]
    fn test_change_flag_reads_once() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        for _ in 0..DEBOUNCE_SAMPLES {
            tracker.sample(LINE, false);
        }

        assert!(tracker.is_changed(LINE));
        assert!(!tracker.is_changed(LINE));

        // Holding the button does not re-arm the flag
        for _ in 0..10 {
            tracker.sample(LINE, false);
        }
        assert!(!tracker.is_changed(LINE));
    }

    #[test]
    fn test_release_raises_flag_again() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        assert_eq!(feed(&mut tracker, &[false; 4]), 1);
        assert_eq!(feed(&mut tracker, &[true; 4]), 1);
        assert_eq!(tracker.state(LINE), ButtonState::Released);
    }

    #[test]
    fn test_unread_transitions_coalesce() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        for _ in 0..4 {
            tracker.sample(LINE, false);
        }
        for _ in 0..4 {
            tracker.sample(LINE, true);
        }
        assert!(tracker.is_changed(LINE));
        assert!(!tracker.is_changed(LINE));
        assert_eq!(tracker.state(LINE), ButtonState::Released);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        let bounce = [false, true, false, false, true, false, true, true, false];
        assert_eq!(feed(&mut tracker, &bounce), 0);
        assert_eq!(tracker.state(LINE), ButtonState::Released);
    }

    #[test]
    fn test_lines_are_independent() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
        for _ in 0..4 {
            tracker.sample(ButtonLine::Plus, false);
            tracker.sample(ButtonLine::Minus, true);
        }
        assert!(tracker.is_changed(ButtonLine::Plus));
        assert!(!tracker.is_changed(ButtonLine::Minus));
        assert_eq!(tracker.state(ButtonLine::Minus), ButtonState::Released);
    }

    #[test]
    fn test_active_high_polarity() {
        let mut tracker = ButtonTracker::new(Polarity::ActiveHigh);
        assert_eq!(feed(&mut tracker, &[false; 8]), 0);
        assert_eq!(feed(&mut tracker, &[true; 4]), 1);
        assert_eq!(tracker.state(LINE), ButtonState::Pressed);
    }

    proptest! {
        #[test]
        fn prop_held_level_changes_state_once(
            prefix in proptest::collection::vec(any::<bool>(), 0..32),
            level in any::<bool>(),
            hold in DEBOUNCE_SAMPLES..40usize,
        ) {
            let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
            feed(&mut tracker, &prefix);
            let before = tracker.state(LINE);

            let held = [level; 40];
            let changes = feed(&mut tracker, &held[..hold]);

            let expected = if Polarity::ActiveLow.is_pressed(level) {
                ButtonState::Pressed
            } else {
                ButtonState::Released
            };
            prop_assert_eq!(tracker.state(LINE), expected);
            prop_assert_eq!(changes, usize::from(before != expected));
        }

        #[test]
        fn prop_alternating_noise_never_settles(
            start in any::<bool>(),
            runs in proptest::collection::vec(1..DEBOUNCE_SAMPLES, 1..40),
        ) {
            let mut tracker = ButtonTracker::new(Polarity::ActiveLow);
            // Alternating runs shorter than the debounce width
            let mut level = start;
            let mut changes = 0;
            for run in runs {
                for _ in 0..run {
                    tracker.sample(LINE, level);
                    if tracker.is_changed(LINE) {
                        changes += 1;
                    }
                }
                level = !level;
            }
            prop_assert_eq!(changes, 0);
            prop_assert_eq!(tracker.state(LINE), ButtonState::Released);
        }
    }
}
