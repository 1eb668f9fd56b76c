//! Incremental output reveal.
//!
//! A [`Typewriter`] is a finite, non-restartable task. Each [`Typewriter::tick`]
//! reveals one more character; the tick that reveals the last one reports
//! [`Tick::Complete`], exactly once. A cancelled task never completes.
//!
//! The task holds no timer. The UI drives it from a repeating timer and drops
//! that timer as soon as the task stops.

/// Outcome of advancing a [`Typewriter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One more character is visible; more remain.
    Advanced,
    /// The full text is visible. Returned once per task.
    Complete,
    /// The task already completed or was cancelled; nothing changed.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Finished,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the visible prefix; always on a char boundary.
    revealed: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
            phase: Phase::Running,
        }
    }

    /// Reveal the next character.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Stopped;
        }

        if let Some(c) = self.text[self.revealed..].chars().next() {
            self.revealed += c.len_utf8();
        }

        if self.revealed >= self.text.len() {
            self.phase = Phase::Finished;
            Tick::Complete
        } else {
            Tick::Advanced
        }
    }

    /// Stop without completing. Later ticks report [`Tick::Stopped`].
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }

    /// Currently visible prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    /// Byte length of the visible prefix.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }
}

impl Iterator for Typewriter {
    type Item = String;

    /// Yields each growing prefix, ending after the full text.
    fn next(&mut self) -> Option<String> {
        match self.tick() {
            Tick::Advanced | Tick::Complete => Some(self.visible().to_string()),
            Tick::Stopped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.tick(), Tick::Advanced);
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.tick(), Tick::Advanced);
        assert_eq!(tw.visible(), "ab");
        assert_eq!(tw.tick(), Tick::Complete);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_complete_fires_once() {
        let mut tw = Typewriter::new("hi");
        let completions = (0..10).filter(|_| tw.tick() == Tick::Complete).count();
        assert_eq!(completions, 1);
        assert!(!tw.is_running());
        assert_eq!(tw.tick(), Tick::Stopped);
    }

    #[test]
    fn test_prefix_sequence() {
        let prefixes: Vec<String> = Typewriter::new("ok!").collect();
        assert_eq!(prefixes, vec!["o", "ok", "ok!"]);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new("█░é");
        tw.tick();
        assert_eq!(tw.visible(), "█");
        tw.tick();
        assert_eq!(tw.visible(), "█░");
        assert_eq!(tw.tick(), Tick::Complete);
        assert_eq!(tw.revealed_len(), "█░é".len());
    }

    #[test]
    fn test_empty_text_completes_on_first_tick() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.tick(), Tick::Complete);
        assert_eq!(tw.tick(), Tick::Stopped);
    }

    #[test]
    fn test_cancel_suppresses_completion() {
        let mut tw = Typewriter::new("abcdef");
        tw.tick();
        tw.cancel();
        assert!(tw.is_cancelled());
        assert_eq!(tw.tick(), Tick::Stopped);
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn test_cancel_after_complete_is_noop() {
        let mut tw = Typewriter::new("a");
        assert_eq!(tw.tick(), Tick::Complete);
        tw.cancel();
        assert!(!tw.is_cancelled());
    }
}
