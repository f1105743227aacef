use std::collections::BTreeMap;

/// Ordered key/value pairs forwarded to the call-tracking script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributionTags(Vec<(String, String)>);

impl AttributionTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces, keeping first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributionTags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = AttributionTags::new();
        for (k, v) in iter {
            tags.insert(k, v);
        }
        tags
    }
}

/// How one answer becomes one tag.
///
/// Pages were built at different times and do not agree on how the age
/// answer is normalised, so both forms exist side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagRule {
    /// `"...under 65..."` becomes `under_65`, anything else `over_65`.
    AgeBracket { question: &'static str, tag: &'static str },
    /// `"...under 65..."` becomes `yes`, anything else `no`. Not attached to any page.
    #[allow(dead_code)]
    UnderAgeYesNo { question: &'static str, tag: &'static str },
    /// Exactly `"Yes"` becomes `yes`, anything else `no`.
    YesNo { question: &'static str, tag: &'static str },
    /// Exactly `"Yes"` becomes `above`, anything else `below`.
    Threshold {
        question: &'static str,
        tag: &'static str,
        above: &'static str,
        below: &'static str,
    },
}

impl TagRule {
    fn question(&self) -> &'static str {
        match *self {
            TagRule::AgeBracket { question, .. }
            | TagRule::UnderAgeYesNo { question, .. }
            | TagRule::YesNo { question, .. }
            | TagRule::Threshold { question, .. } => question,
        }
    }

    fn apply(&self, answer: &str, tags: &mut AttributionTags) {
        match *self {
            TagRule::AgeBracket { tag, .. } => {
                let value = if answer.contains("under 65") { "under_65" } else { "over_65" };
                tags.insert(tag, value);
            }
            TagRule::UnderAgeYesNo { tag, .. } => {
                let value = if answer.contains("under 65") { "yes" } else { "no" };
                tags.insert(tag, value);
            }
            TagRule::YesNo { tag, .. } => {
                tags.insert(tag, if answer == "Yes" { "yes" } else { "no" });
            }
            TagRule::Threshold { tag, above, below, .. } => {
                tags.insert(tag, if answer == "Yes" { above } else { below });
            }
        }
    }
}

/// Runs `rules` in order over the answers. Unanswered or empty questions produce no tag.
pub fn derive_tags(rules: &[TagRule], answers: &BTreeMap<String, String>) -> AttributionTags {
    let mut tags = AttributionTags::new();
    for rule in rules {
        if let Some(answer) = answers.get(rule.question()).filter(|a| !a.is_empty()) {
            rule.apply(answer, &mut tags);
        }
    }
    tags
}

/// Rules of the chat-style qualifier: age, insured, and the $100 payment question twice.
pub fn qualify_rules() -> Vec<TagRule> {
    vec![
        TagRule::AgeBracket { question: "age", tag: "age" },
        TagRule::YesNo { question: "insured", tag: "insured" },
        TagRule::YesNo { question: "payment", tag: "pay_over_100" },
        TagRule::Threshold {
            question: "payment",
            tag: "coverage",
            above: "Above-100",
            below: "Below-100",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn qualify_scenario_produces_all_four_tags() {
        let a = answers(&[("age", "Yes, I am under 65"), ("insured", "Yes"), ("payment", "Yes")]);
        let tags = derive_tags(&qualify_rules(), &a);
        let expected: AttributionTags = [
            ("age", "under_65"),
            ("insured", "yes"),
            ("pay_over_100", "yes"),
            ("coverage", "Above-100"),
        ]
        .into_iter()
        .collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn negative_answers_map_to_other_side() {
        let a = answers(&[("age", "No, I am over 65"), ("insured", "No"), ("payment", "No")]);
        let tags = derive_tags(&qualify_rules(), &a);
        assert_eq!(tags.get("age"), Some("over_65"));
        assert_eq!(tags.get("insured"), Some("no"));
        assert_eq!(tags.get("pay_over_100"), Some("no"));
        assert_eq!(tags.get("coverage"), Some("Below-100"));
    }

    #[test]
    fn missing_answers_are_skipped() {
        let a = answers(&[("insured", "Yes"), ("age", "")]);
        let tags = derive_tags(&qualify_rules(), &a);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("insured"), Some("yes"));
    }

    #[test]
    fn age_rules_diverge_on_the_same_answer() {
        let a = answers(&[("age", "Yes, I am under 65")]);
        let bracket = derive_tags(&[TagRule::AgeBracket { question: "age", tag: "age" }], &a);
        let yes_no = derive_tags(&[TagRule::UnderAgeYesNo { question: "age", tag: "age" }], &a);
        assert_eq!(bracket.get("age"), Some("under_65"));
        assert_eq!(yes_no.get("age"), Some("yes"));
    }

    #[test]
    fn yes_no_is_case_sensitive() {
        let a = answers(&[("insured", "yes")]);
        let tags = derive_tags(&[TagRule::YesNo { question: "insured", tag: "insured" }], &a);
        assert_eq!(tags.get("insured"), Some("no"));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut tags = AttributionTags::new();
        tags.insert("a", "1");
        tags.insert("b", "2");
        tags.insert("a", "3");
        let pairs: Vec<_> = tags.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }
}
