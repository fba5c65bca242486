use std::time::{Duration, Instant};

/// Progressive disclosure of an already-complete answer string.
///
/// The answer arrives in full from the source collaborator; `Reveal` paces
/// its display one character at a time to simulate live generation. It is a
/// deadline-driven state machine, not a timer: the host event loop asks
/// [`Reveal::next_due`] how long it may sleep and calls [`Reveal::poll`]
/// when it wakes. Each advance consumes the pending deadline and schedules
/// the next one, so at most one advance is ever pending: a self-rescheduling
/// one-shot, never a free-running interval.
///
/// Advances step by Unicode character, so the revealed prefix is always a
/// valid string slice of the source.
#[derive(Debug, Clone)]
pub struct Reveal {
    source: String,
    /// Byte length of the revealed prefix. Always a char boundary of `source`.
    revealed_bytes: usize,
    /// Characters revealed so far.
    revealed_chars: usize,
    interval: Duration,
    /// When the next single-character advance fires. `None` when complete,
    /// cancelled, or never started.
    next_due: Option<Instant>,
}

impl Reveal {
    /// Creates an idle reveal with the given per-character interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            source: String::new(),
            revealed_bytes: 0,
            revealed_chars: 0,
            interval,
            next_due: None,
        }
    }

    /// Begins revealing a new source string from the start.
    ///
    /// Any pending advance for the previous source is dropped, so a source
    /// change mid-reveal restarts at zero rather than continuing the old
    /// schedule. An empty source is complete immediately.
    pub fn start(&mut self, source: impl Into<String>, now: Instant) {
        self.source = source.into();
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.next_due = if self.source.is_empty() {
            None
        } else {
            Some(now + self.interval)
        };
    }

    /// Advances by exactly one character if the pending deadline has been
    /// reached. Returns whether anything was revealed.
    ///
    /// No-op when idle, cancelled, complete, or not yet due.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let step = self.source[self.revealed_bytes..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.revealed_bytes += step;
        self.revealed_chars += 1;

        self.next_due = if self.is_complete() {
            None
        } else {
            Some(now + self.interval)
        };
        true
    }

    /// Drops any pending advance, freezing the revealed prefix where it is.
    /// Used on view teardown and when the user aborts generation.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// The prefix disclosed so far.
    pub fn revealed_text(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    /// Number of characters disclosed so far.
    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_bytes == self.source.len()
    }

    /// Deadline of the pending advance, if one is scheduled. The host event
    /// loop can sleep until this instant instead of busy-ticking.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(10);

    fn started(source: &str, at: Instant) -> Reveal {
        let mut reveal = Reveal::new(STEP);
        reveal.start(source, at);
        reveal
    }

    #[test]
    fn idle_reveal_is_complete_and_unscheduled() {
        let reveal = Reveal::new(STEP);
        assert!(reveal.is_complete());
        assert_eq!(reveal.revealed_text(), "");
        assert!(reveal.next_due().is_none());
    }

    #[test]
    fn advances_one_char_per_due_poll() {
        let t0 = Instant::now();
        let mut reveal = started("abc", t0);

        assert_eq!(reveal.revealed_text(), "");
        assert!(!reveal.poll(t0), "nothing is due at start time");

        assert!(reveal.poll(t0 + STEP));
        assert_eq!(reveal.revealed_text(), "a");
        assert!(!reveal.poll(t0 + STEP), "next advance not due yet");

        assert!(reveal.poll(t0 + STEP * 2));
        assert!(reveal.poll(t0 + STEP * 3));
        assert_eq!(reveal.revealed_text(), "abc");
        assert!(reveal.is_complete());
    }

    #[test]
    fn completion_stops_scheduling() {
        let t0 = Instant::now();
        let mut reveal = started("x", t0);
        assert!(reveal.poll(t0 + STEP));
        assert!(reveal.is_complete());
        assert!(reveal.next_due().is_none());
        assert!(!reveal.poll(t0 + STEP * 10));
        assert_eq!(reveal.revealed_chars(), 1);
    }

    #[test]
    fn revealed_count_is_monotonic_and_bounded() {
        let t0 = Instant::now();
        let mut reveal = started("hello", t0);
        let mut last = 0;
        for i in 1..20u32 {
            reveal.poll(t0 + STEP * i);
            let revealed = reveal.revealed_chars();
            assert!(revealed >= last);
            assert!(revealed <= reveal.source().chars().count());
            last = revealed;
        }
        assert!(reveal.is_complete());
    }

    #[test]
    fn source_change_resets_to_zero_before_any_advance() {
        let t0 = Instant::now();
        let mut reveal = started("abc", t0);
        assert!(reveal.poll(t0 + STEP));
        assert_eq!(reveal.revealed_text(), "a");

        reveal.start("xyz", t0 + STEP);
        assert_eq!(reveal.revealed_chars(), 0);
        assert_eq!(reveal.revealed_text(), "");
        assert!(!reveal.is_complete());

        assert!(reveal.poll(t0 + STEP * 2));
        assert_eq!(reveal.revealed_text(), "x");
    }

    #[test]
    fn cancel_freezes_progress() {
        let t0 = Instant::now();
        let mut reveal = started("abc", t0);
        assert!(reveal.poll(t0 + STEP));
        reveal.cancel();
        assert!(reveal.next_due().is_none());
        assert!(!reveal.poll(t0 + STEP * 5));
        assert_eq!(reveal.revealed_text(), "a");
        assert!(!reveal.is_complete());
    }

    #[test]
    fn multibyte_characters_reveal_atomically() {
        let t0 = Instant::now();
        let mut reveal = started("धर्म…", t0);
        let mut i: u32 = 0;
        while !reveal.is_complete() {
            i += 1;
            assert!(reveal.poll(t0 + STEP * i));
            // Slicing would panic if revealed_bytes were not a char boundary.
            let _ = reveal.revealed_text();
        }
        assert_eq!(i as usize, "धर्म…".chars().count());
        assert_eq!(reveal.revealed_text(), "धर्म…");
    }

    #[test]
    fn empty_source_is_complete_without_scheduling() {
        let t0 = Instant::now();
        let reveal = started("", t0);
        assert!(reveal.is_complete());
        assert!(reveal.next_due().is_none());
    }
}
