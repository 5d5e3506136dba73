//! Search session state: the typed term plus the debug stepper.
//!
//! Stepping replays the term one character at a time so the active trie path
//! can be shown growing node by node. Suggestions always use the full term.

/// The state behind one search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    term: String,
    /// Characters revealed in debug mode, `None` outside it
    step: Option<usize>,
}

impl SearchSession {
    /// Creates a session holding `term`, not in debug mode.
    pub fn new<S: Into<String>>(term: S) -> Self {
        Self {
            term: term.into(),
            step: None,
        }
    }

    /// The full typed term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replaces the term and leaves debug mode.
    pub fn set_term<S: Into<String>>(&mut self, term: S) {
        self.term = term.into();
        self.step = None;
    }

    /// Current debug step, `None` outside debug mode.
    pub fn step_index(&self) -> Option<usize> {
        self.step
    }

    /// Returns `true` while stepping through the term.
    pub fn is_stepping(&self) -> bool {
        self.step.is_some()
    }

    /// Advances the debug stepper and returns the new step.
    ///
    /// Entering debug mode, or stepping past the end of the term, restarts at 0.
    pub fn advance(&mut self) -> usize {
        let next = match self.step {
            Some(step) if step < self.term_len() => step + 1,
            _ => 0,
        };
        self.step = Some(next);
        next
    }

    /// Leaves debug mode.
    pub fn reset_step(&mut self) {
        self.step = None;
    }

    /// The prefix used to highlight the trie path.
    ///
    /// Outside debug mode this is the whole term; while stepping it is the
    /// first `step` characters.
    pub fn active_prefix(&self) -> &str {
        match self.step {
            None => &self.term,
            Some(step) => super::highlight(&self.term, step).0,
        }
    }

    /// Number of characters of each suggestion to highlight.
    pub fn match_len(&self) -> usize {
        self.term_len()
    }

    fn term_len(&self) -> usize {
        self.term.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_debug_mode_uses_full_term() {
        let session = SearchSession::new("App");
        assert!(!session.is_stepping());
        assert_eq!(session.active_prefix(), "App");
        assert_eq!(session.match_len(), 3);
    }

    #[test]
    fn test_stepping_cycles_through_term() {
        let mut session = SearchSession::new("So");

        let prefixes: Vec<String> = (0..5)
            .map(|_| {
                session.advance();
                session.active_prefix().to_string()
            })
            .collect();

        assert_eq!(prefixes, vec!["", "S", "So", "", "S"]);
    }

    #[test]
    fn test_set_term_leaves_debug_mode() {
        let mut session = SearchSession::new("Sam");
        session.advance();
        session.advance();
        assert_eq!(session.step_index(), Some(1));

        session.set_term("Son");
        assert_eq!(session.step_index(), None);
        assert_eq!(session.active_prefix(), "Son");
    }

    #[test]
    fn test_reset_step() {
        let mut session = SearchSession::new("Nike");
        assert_eq!(session.advance(), 0);
        session.reset_step();
        assert!(!session.is_stepping());
        assert_eq!(session.active_prefix(), "Nike");
    }

    #[test]
    fn test_empty_term_steps_stay_at_zero() {
        let mut session = SearchSession::default();
        assert_eq!(session.advance(), 0);
        assert_eq!(session.advance(), 0);
        assert_eq!(session.active_prefix(), "");
    }
}
