use std::collections::BTreeMap;

/// A calculator question whose options each move the savings estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactQuestion {
    pub key: &'static str,
    pub question: &'static str,
    pub options: Vec<(&'static str, u32)>,
}

impl ImpactQuestion {
    /// Impact of `answer`, zero for anything that is not one of the options.
    pub fn impact_of(&self, answer: &str) -> u32 {
        self.options
            .iter()
            .find(|(text, _)| *text == answer)
            .map(|(_, impact)| *impact)
            .unwrap_or(0)
    }
}

pub fn split_questions() -> Vec<ImpactQuestion> {
    vec![
        ImpactQuestion {
            key: "age",
            question: "Are you under the age of 65?",
            options: vec![("Yes, I am under 65", 2000), ("No, I am over 65", 1000)],
        },
        ImpactQuestion {
            key: "insured",
            question: "Are you currently insured?",
            options: vec![("Yes", 3000), ("No", 0)],
        },
        ImpactQuestion {
            key: "payment",
            question: "Do you pay more than $100/month for your current auto insurance?",
            options: vec![("Yes", 5000), ("No", 2000)],
        },
        ImpactQuestion {
            key: "coverage",
            question: "How long have you been with your current provider?",
            options: vec![("Less than 1 year", 3000), ("1-3 years", 5000), ("More than 3 years", 8000)],
        },
    ]
}

/// Savings so far. Recomputed from scratch on every answer, unanswered questions add nothing.
pub fn running_total(questions: &[ImpactQuestion], answers: &BTreeMap<String, String>) -> u32 {
    questions
        .iter()
        .filter_map(|q| answers.get(q.key).map(|a| q.impact_of(a)))
        .sum()
}

/// Both sides of the split screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSummary {
    pub current_cost: u32,
    pub savings: u32,
}

impl SplitSummary {
    pub fn current_monthly(&self) -> u32 {
        round_div(self.current_cost, 12)
    }

    /// Monthly cost after savings, zero once savings exceed the premium.
    pub fn new_monthly(&self) -> u32 {
        round_div(self.current_cost.saturating_sub(self.savings), 12)
    }

    /// Not capped, savings can exceed the current premium.
    pub fn savings_percent(&self) -> u32 {
        if self.current_cost == 0 {
            return 0;
        }
        ((self.savings as f64 / self.current_cost as f64) * 100.0).round() as u32
    }
}

fn round_div(value: u32, by: u32) -> u32 {
    (value as f64 / by as f64).round() as u32
}

/// `en-IN` digit grouping: the last three digits, then pairs (`1,50,000`).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn running_total_grows_with_each_answer() {
        let qs = split_questions();
        let mut a = BTreeMap::new();
        assert_eq!(running_total(&qs, &a), 0);

        let steps = [
            ("age", "Yes, I am under 65", 2000),
            ("insured", "Yes", 5000),
            ("payment", "No", 7000),
            ("coverage", "More than 3 years", 15000),
        ];
        for (key, answer, expected) in steps {
            a.insert(key.to_string(), answer.to_string());
            assert_eq!(running_total(&qs, &a), expected, "after {}", key);
        }
    }

    #[test]
    fn uninsured_adds_nothing_and_unknown_answers_are_zero() {
        let qs = split_questions();
        let a = answers(&[("insured", "No"), ("coverage", "Forever")]);
        assert_eq!(running_total(&qs, &a), 0);
    }

    #[test]
    fn changing_an_answer_replaces_its_impact() {
        let qs = split_questions();
        let mut a = answers(&[("age", "No, I am over 65"), ("payment", "Yes")]);
        assert_eq!(running_total(&qs, &a), 6000);
        a.insert("age".into(), "Yes, I am under 65".into());
        assert_eq!(running_total(&qs, &a), 7000);
    }

    #[test]
    fn summary_figures() {
        let summary = SplitSummary { current_cost: 15000, savings: 7000 };
        assert_eq!(summary.current_monthly(), 1250);
        assert_eq!(summary.new_monthly(), 667);
        assert_eq!(summary.savings_percent(), 47);

        let over = SplitSummary { current_cost: 15000, savings: 18000 };
        assert_eq!(over.new_monthly(), 0);
        assert_eq!(over.savings_percent(), 120);
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(15000), "15,000");
        assert_eq!(format_inr(150000), "1,50,000");
        assert_eq!(format_inr(12345678), "1,23,45,678");
    }
}
