use serde_json::{json, Map, Value};

use crate::funnel::lead_form::QuoteDraft;
use crate::funnel::utm::UtmParams;

/// Analytics events of the quote page.
#[derive(Clone, Debug, PartialEq)]
pub enum LeadEvent<'a> {
    PageView { page: &'static str, utm: &'a UtmParams },
    FormStart { source: &'static str },
    FormValidationError { fields: Vec<&'static str> },
    FormSubmit { draft: &'a QuoteDraft, utm: &'a UtmParams },
    CallClick { source: &'static str, utm: &'a UtmParams },
    ContinueOnline { utm: &'a UtmParams },
    FaqOpen { index: usize },
}

impl LeadEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LeadEvent::PageView { .. } => "page_view",
            LeadEvent::FormStart { .. } => "form_start",
            LeadEvent::FormValidationError { .. } => "form_validation_error",
            LeadEvent::FormSubmit { .. } => "form_submit",
            LeadEvent::CallClick { .. } => "call_click",
            LeadEvent::ContinueOnline { .. } => "continue_online_click",
            LeadEvent::FaqOpen { .. } => "faq_open",
        }
    }

    /// Flat property object. Campaign parameters are spread in next to the event's own fields.
    pub fn props(&self) -> Value {
        match self {
            LeadEvent::PageView { page, utm } => merge(json!({ "page": page }), utm),
            LeadEvent::FormStart { source } => json!({ "source": source }),
            LeadEvent::FormValidationError { fields } => json!({ "errors": fields }),
            LeadEvent::FormSubmit { draft, utm } => merge(json!(draft), utm),
            LeadEvent::CallClick { source, utm } => merge(json!({ "source": source }), utm),
            LeadEvent::ContinueOnline { utm } => json!(utm),
            LeadEvent::FaqOpen { index } => json!({ "question_index": index }),
        }
    }
}

fn merge(base: Value, utm: &UtmParams) -> Value {
    let mut fields = match base {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    if let Value::Object(extra) = json!(utm) {
        for (key, value) in extra {
            fields.entry(key).or_insert(value);
        }
    }
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utm() -> UtmParams {
        UtmParams {
            utm_source: "google".into(),
            gclid: "xyz".into(),
            ..UtmParams::default()
        }
    }

    #[test]
    fn form_start_carries_its_source() {
        for source in ["hero_cta", "mobile_cta"] {
            let event = LeadEvent::FormStart { source };
            assert_eq!(event.name(), "form_start");
            assert_eq!(event.props(), json!({ "source": source }));
        }
    }

    #[test]
    fn continue_online_sends_campaign_params() {
        let utm = utm();
        let event = LeadEvent::ContinueOnline { utm: &utm };
        assert_eq!(event.name(), "continue_online_click");
        let props = event.props();
        assert_eq!(props["utm_source"], "google");
        assert_eq!(props["gclid"], "xyz");
        assert_eq!(props["fbclid"], "");
    }

    #[test]
    fn submit_flattens_form_and_campaign() {
        let utm = utm();
        let draft = QuoteDraft {
            zip: "90210".into(),
            age_range: "25-34".into(),
            vehicle_ownership: String::new(),
        };
        let props = LeadEvent::FormSubmit { draft: &draft, utm: &utm }.props();
        assert_eq!(props["zip"], "90210");
        assert_eq!(props["ageRange"], "25-34");
        assert_eq!(props["utm_source"], "google");
    }

    #[test]
    fn page_view_and_call_click_keep_their_own_fields() {
        let utm = utm();
        let view = LeadEvent::PageView { page: "insurance_lander", utm: &utm }.props();
        assert_eq!(view["page"], "insurance_lander");
        assert_eq!(view["utm_source"], "google");
        let call = LeadEvent::CallClick { source: "cta_button", utm: &utm }.props();
        assert_eq!(call["source"], "cta_button");
    }

    #[test]
    fn validation_error_lists_fields() {
        let props = LeadEvent::FormValidationError { fields: vec!["zip"] }.props();
        assert_eq!(props, json!({ "errors": ["zip"] }));
        assert_eq!(LeadEvent::FaqOpen { index: 3 }.props(), json!({ "question_index": 3 }));
    }
}
