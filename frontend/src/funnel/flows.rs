use crate::config::{self, PhoneLine};
use crate::funnel::sequencer::{Question, StepSequencer};
use crate::funnel::split::ImpactQuestion;
use crate::funnel::tags::{self, TagRule};

#[derive(Clone, Debug, PartialEq)]
pub struct Welcome {
    pub title: &'static str,
    pub message: &'static str,
    pub button: &'static str,
}

/// Everything that differs between question-flow landing pages.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowConfig {
    pub id: &'static str,
    pub brand: &'static str,
    pub theme: &'static str,
    pub welcome: Option<Welcome>,
    pub questions: Vec<Question>,
    pub tag_rules: Vec<TagRule>,
    pub step_delay_ms: u32,
    pub reveal_delay_ms: u32,
    pub countdown_seconds: u32,
    pub phone: PhoneLine,
    pub switch_number: bool,
    pub final_message: &'static str,
}

impl FlowConfig {
    pub fn sequencer(&self) -> StepSequencer {
        StepSequencer::new(
            self.questions.clone(),
            self.welcome.is_some(),
            self.step_delay_ms,
            self.reveal_delay_ms,
        )
    }

    pub fn phone_number(&self) -> &'static str {
        self.phone.pick(self.switch_number)
    }
}

fn age_question(title: &'static str) -> Question {
    Question {
        key: "age",
        title,
        message: "Are you under the age of 65?",
        options: vec!["Yes, I am under 65", "No, I am over 65"],
    }
}

fn insured_question(title: &'static str) -> Question {
    Question {
        key: "insured",
        title,
        message: "Are you currently insured?",
        options: vec!["Yes", "No"],
    }
}

fn payment_question(title: &'static str) -> Question {
    Question {
        key: "payment",
        title,
        message: "Do you pay more than $100/month for your current auto insurance plan?",
        options: vec!["Yes", "No"],
    }
}

/// Card-style flow with a welcome screen and progress bar.
pub fn question_landing() -> FlowConfig {
    FlowConfig {
        id: "questions",
        brand: "Auto Benefit Helpline",
        theme: "theme-teal",
        welcome: Some(Welcome {
            title: "Welcome! 👋",
            message: "Hey there! Emily this side. Let's find out if you qualify for reduction on your Auto Insurance Rate, it's quick and only takes 2 minutes!",
            button: "👉 Yes! Show me how to claim!",
        }),
        questions: vec![
            age_question("Quick Question"),
            insured_question("Almost There"),
            payment_question("Last Question"),
        ],
        tag_rules: vec![
            TagRule::AgeBracket { question: "age", tag: "age" },
            TagRule::YesNo { question: "insured", tag: "insured" },
        ],
        step_delay_ms: config::STEP_DELAY_MS,
        reveal_delay_ms: config::REVEAL_DELAY_MS,
        countdown_seconds: config::COUNTDOWN_SECONDS,
        phone: config::get_call_line(),
        switch_number: false,
        final_message: "🎉 Congratulations! You qualify for a lower rate.",
    }
}

/// Chat-style qualifier. Starts straight on the first question.
pub fn qualify() -> FlowConfig {
    FlowConfig {
        id: "engsfdq",
        brand: "Auto Benefit Helpline",
        theme: "theme-chat",
        welcome: None,
        questions: vec![
            age_question("Emily"),
            insured_question("Emily"),
            payment_question("Emily"),
        ],
        tag_rules: tags::qualify_rules(),
        step_delay_ms: config::STEP_DELAY_MS,
        reveal_delay_ms: config::REVEAL_DELAY_MS,
        countdown_seconds: config::COUNTDOWN_SECONDS,
        phone: config::get_call_line(),
        switch_number: false,
        final_message: "🎉 Great news! Based on your answers you're pre-qualified.",
    }
}

/// Story-led flow with slower steps.
pub fn story() -> FlowConfig {
    FlowConfig {
        id: "story",
        brand: "Driver Stories",
        theme: "theme-story",
        welcome: Some(Welcome {
            title: "How Maria cut her premium in half",
            message: "Maria was paying $212 a month until a two-minute check showed her a better rate. See if the same applies to you.",
            button: "Check my eligibility",
        }),
        questions: vec![
            age_question("Chapter 1"),
            insured_question("Chapter 2"),
            payment_question("Chapter 3"),
        ],
        tag_rules: vec![
            TagRule::AgeBracket { question: "age", tag: "age" },
            TagRule::YesNo { question: "insured", tag: "insured" },
        ],
        step_delay_ms: config::STORY_STEP_DELAY_MS,
        reveal_delay_ms: config::REVEAL_DELAY_MS,
        countdown_seconds: config::COUNTDOWN_SECONDS,
        phone: config::get_call_line(),
        switch_number: false,
        final_message: "Your story could be next. Talk to an agent now.",
    }
}

/// Split-screen calculator. No tags, the estimate is the hook.
pub fn split(questions: &[ImpactQuestion]) -> FlowConfig {
    FlowConfig {
        id: "split",
        brand: "Savings Calculator",
        theme: "theme-split",
        welcome: None,
        questions: questions
            .iter()
            .map(|q| Question {
                key: q.key,
                title: "Savings Calculator",
                message: q.question,
                options: q.options.iter().map(|(text, _)| *text).collect(),
            })
            .collect(),
        tag_rules: Vec::new(),
        step_delay_ms: config::STEP_DELAY_MS,
        reveal_delay_ms: config::REVEAL_DELAY_MS,
        countdown_seconds: config::COUNTDOWN_SECONDS,
        phone: config::get_call_line(),
        switch_number: false,
        final_message: "🎉 Congratulations!",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::funnel::tags::derive_tags;

    #[test]
    fn tag_rules_only_reference_configured_questions() {
        for flow in [question_landing(), qualify(), story()] {
            let keys: Vec<_> = flow.questions.iter().map(|q| q.key).collect();
            let answers: BTreeMap<String, String> = keys.iter().map(|k| (k.to_string(), "Yes".to_string())).collect();
            let tags = derive_tags(&flow.tag_rules, &answers);
            assert_eq!(tags.len(), flow.tag_rules.len(), "flow {}", flow.id);
        }
    }

    #[test]
    fn reveal_delays_are_within_ui_range() {
        for flow in [question_landing(), qualify(), story()] {
            assert!((300..=1000).contains(&flow.reveal_delay_ms), "flow {}", flow.id);
        }
    }

    #[test]
    fn split_flow_mirrors_calculator_questions() {
        let questions = crate::funnel::split::split_questions();
        let flow = split(&questions);
        assert!(flow.tag_rules.is_empty());
        assert_eq!(flow.questions.len(), 4);
        assert_eq!(flow.questions[3].key, "coverage");
        assert_eq!(flow.questions[3].options, vec!["Less than 1 year", "1-3 years", "More than 3 years"]);
        assert_eq!((flow.step_delay_ms, flow.reveal_delay_ms), (300, 1000));
    }

    #[test]
    fn welcome_flows_start_on_welcome_screen() {
        assert!(!question_landing().sequencer().state().started);
        assert!(qualify().sequencer().state().started);
    }

    #[test]
    fn story_tags_age_as_bracket_on_the_main_line() {
        let flow = story();
        let answers: BTreeMap<String, String> = [("age", "Yes, I am under 65"), ("insured", "No")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let tags = derive_tags(&flow.tag_rules, &answers);
        let pairs: Vec<_> = tags.iter().collect();
        assert_eq!(pairs, vec![("age", "under_65"), ("insured", "no")]);
        assert!(!flow.switch_number);
        assert_eq!(flow.phone_number(), flow.phone.display);
        assert_eq!((flow.step_delay_ms, flow.reveal_delay_ms), (500, 1000));
    }
}
