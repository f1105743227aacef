use std::collections::BTreeMap;

/// A single multiple-choice prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub key: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub options: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct QuestionnaireState {
    pub current_step: usize,
    pub answers: BTreeMap<String, String>,
    pub started: bool,
    pub revealed: bool,
}

/// What the view should schedule after an answer lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advance { delay_ms: u32 },
    Reveal { delay_ms: u32 },
}

impl Transition {
    pub fn delay_ms(&self) -> u32 {
        match self {
            Transition::Advance { delay_ms } | Transition::Reveal { delay_ms } => *delay_ms,
        }
    }
}

/// Linear question flow ending in a terminal reveal.
///
/// When the flow has a welcome screen it occupies step 0 and the questions
/// sit at steps `1..=N`. Without one the questions sit at `0..N`.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSequencer {
    questions: Vec<Question>,
    has_welcome: bool,
    step_delay_ms: u32,
    reveal_delay_ms: u32,
    in_flight: bool,
    state: QuestionnaireState,
}

impl StepSequencer {
    pub fn new(questions: Vec<Question>, has_welcome: bool, step_delay_ms: u32, reveal_delay_ms: u32) -> Self {
        Self {
            questions,
            has_welcome,
            step_delay_ms,
            reveal_delay_ms,
            in_flight: false,
            state: QuestionnaireState {
                // flows without a welcome screen are live from mount
                started: !has_welcome,
                ..QuestionnaireState::default()
            },
        }
    }

    pub fn state(&self) -> &QuestionnaireState {
        &self.state
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn first_question_step(&self) -> usize {
        if self.has_welcome { 1 } else { 0 }
    }

    fn last_step(&self) -> usize {
        (self.first_question_step() + self.questions.len()).saturating_sub(1)
    }

    pub fn start(&mut self) {
        if self.state.started {
            return;
        }
        self.state.started = true;
        self.state.current_step = self.first_question_step();
    }

    /// The question under the cursor, `None` on the welcome screen or after reveal.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.state.started || self.state.revealed {
            return None;
        }
        self.state
            .current_step
            .checked_sub(self.first_question_step())
            .and_then(|idx| self.questions.get(idx))
    }

    /// 1-based question number for progress display.
    pub fn question_number(&self) -> usize {
        (self.state.current_step + 1).saturating_sub(self.first_question_step()).min(self.questions.len())
    }

    pub fn progress_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 100;
        }
        ((self.question_number() as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    /// Records `value` under `key` as-is and tells the caller which transition to schedule.
    ///
    /// Returns `None` before `start`, once the flow has revealed, and while
    /// the previous transition has not been committed yet.
    pub fn answer(&mut self, key: &str, value: &str) -> Option<Transition> {
        if !self.state.started || self.state.revealed || self.in_flight {
            return None;
        }
        self.state.answers.insert(key.to_string(), value.to_string());
        self.in_flight = true;
        if self.state.current_step >= self.last_step() {
            Some(Transition::Reveal { delay_ms: self.reveal_delay_ms })
        } else {
            Some(Transition::Advance { delay_ms: self.step_delay_ms })
        }
    }

    /// Applies a transition returned by [`StepSequencer::answer`] after its delay.
    pub fn commit(&mut self, transition: Transition) {
        self.in_flight = false;
        match transition {
            Transition::Advance { .. } => {
                if !self.state.revealed && self.state.current_step < self.last_step() {
                    self.state.current_step += 1;
                }
            }
            Transition::Reveal { .. } => self.state.revealed = true,
        }
    }

    pub fn answer_for(&self, key: &str) -> Option<&str> {
        self.state.answers.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(key: &'static str) -> Question {
        Question {
            key,
            title: "Quick Question",
            message: "?",
            options: vec!["Yes", "No"],
        }
    }

    fn three_step(has_welcome: bool) -> StepSequencer {
        StepSequencer::new(vec![yes_no("age"), yes_no("insured"), yes_no("payment")], has_welcome, 300, 1000)
    }

    #[test]
    fn start_moves_past_welcome() {
        let mut seq = three_step(true);
        assert!(!seq.state().started);
        assert!(seq.current_question().is_none());
        seq.start();
        assert!(seq.state().started);
        assert_eq!(seq.state().current_step, 1);
        assert_eq!(seq.current_question().map(|q| q.key), Some("age"));
    }

    #[test]
    fn flow_without_welcome_starts_at_zero() {
        let seq = three_step(false);
        assert!(seq.state().started);
        assert_eq!(seq.state().current_step, 0);
        assert_eq!(seq.current_question().map(|q| q.key), Some("age"));
    }

    #[test]
    fn reveals_exactly_once_on_last_answer() {
        for has_welcome in [true, false] {
            let mut seq = three_step(has_welcome);
            seq.start();
            let mut reveals = 0;
            for n in 0..3 {
                let key = seq.current_question().map(|q| q.key).unwrap();
                let t = seq.answer(key, "Yes").unwrap();
                if matches!(t, Transition::Reveal { .. }) {
                    reveals += 1;
                    assert_eq!(n, 2, "revealed before the last answer");
                }
                seq.commit(t);
            }
            assert_eq!(reveals, 1);
            assert!(seq.state().revealed);
            assert_eq!(seq.answer("age", "No"), None);
        }
    }

    #[test]
    fn step_index_tracks_answers_and_stays_bounded() {
        let mut seq = three_step(true);
        seq.start();
        for k in 1..3 {
            let t = seq.answer("k", "v").unwrap();
            assert_eq!(t, Transition::Advance { delay_ms: 300 });
            seq.commit(t);
            assert_eq!(seq.state().current_step, 1 + k);
        }
        // a stray advance cannot run off the end
        seq.commit(Transition::Advance { delay_ms: 300 });
        assert_eq!(seq.state().current_step, 3);
        assert!(seq.state().current_step <= seq.question_count());
    }

    #[test]
    fn accepts_values_outside_option_set() {
        let mut seq = three_step(false);
        seq.answer("age", "maybe later");
        assert_eq!(seq.answer_for("age"), Some("maybe later"));
    }

    #[test]
    fn progress_counts_questions_not_welcome() {
        let mut seq = three_step(true);
        seq.start();
        assert_eq!(seq.question_number(), 1);
        assert_eq!(seq.progress_percent(), 33);
        let t = seq.answer("age", "Yes").unwrap();
        seq.commit(t);
        assert_eq!(seq.question_number(), 2);
        assert_eq!(seq.progress_percent(), 67);
    }

    #[test]
    fn second_click_before_commit_is_ignored() {
        let mut seq = three_step(false);
        let t = seq.answer("age", "Yes, I am under 65").unwrap();
        assert_eq!(seq.answer("age", "No, I am over 65"), None);
        seq.commit(t);
        assert_eq!(seq.state().current_step, 1);
        assert_eq!(seq.answer_for("age"), Some("Yes, I am under 65"));
    }

    #[test]
    fn answers_on_welcome_screen_are_ignored() {
        let mut seq = three_step(true);
        assert_eq!(seq.answer("age", "Yes"), None);
        assert!(seq.answer_for("age").is_none());
        assert_eq!(seq.state().current_step, 0);

        seq.start();
        let mut transitions = Vec::new();
        for key in ["age", "insured", "payment"] {
            let t = seq.answer(key, "Yes").unwrap();
            transitions.push(t);
            seq.commit(t);
        }
        assert!(matches!(transitions[2], Transition::Reveal { .. }));
        assert!(seq.state().revealed);
    }

    #[test]
    fn reveal_is_terminal() {
        let mut seq = three_step(false);
        seq.commit(Transition::Reveal { delay_ms: 0 });
        seq.commit(Transition::Advance { delay_ms: 0 });
        assert!(seq.state().revealed);
        assert_eq!(seq.state().current_step, 0);
    }
}
