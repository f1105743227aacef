use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field name to inline message. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Quote form values, stored as a draft while the visitor types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteDraft {
    pub zip: String,
    pub age_range: String,
    pub vehicle_ownership: String,
}

impl QuoteDraft {
    /// Drafts are only written once the visitor has typed something.
    pub fn is_blank(&self) -> bool {
        self.zip.is_empty() && self.age_range.is_empty() && self.vehicle_ownership.is_empty()
    }

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "zip" => self.zip = value,
            "ageRange" => self.age_range = value,
            "vehicleOwnership" => self.vehicle_ownership = value,
            other => log::warn!("Ignoring unknown quote field {}", other),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.zip.is_empty() {
            errors.insert("zip", "ZIP code is required");
        } else if !ZIP_RE.is_match(&self.zip) {
            errors.insert("zip", "Please enter a valid 5-digit ZIP code");
        }
        errors
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// The longer "application document" form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub zip_code: String,
    pub phone_number: String,
    pub email: String,
    pub vehicle_year: String,
    pub current_provider: String,
}

impl ApplicationForm {
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "fullName" => self.full_name = value,
            "zipCode" => self.zip_code = value,
            "phoneNumber" => self.phone_number = value,
            "email" => self.email = value,
            "vehicleYear" => self.vehicle_year = value,
            "currentProvider" => self.current_provider = value,
            other => log::warn!("Ignoring unknown application field {}", other),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.full_name.trim().is_empty() {
            errors.insert("fullName", "Required field");
        }
        if self.zip_code.trim().is_empty() {
            errors.insert("zipCode", "Required field");
        } else if !ZIP_RE.is_match(&self.zip_code) {
            errors.insert("zipCode", "Must be 5 digits");
        }
        if self.phone_number.trim().is_empty() {
            errors.insert("phoneNumber", "Required field");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Required field");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert("email", "Invalid email format");
        }
        errors
    }
}

/// Editing a field clears whatever was flagged on it.
pub fn clear_field_error(errors: &mut FieldErrors, field: &str) -> bool {
    errors.remove(field).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_is_required_then_must_be_five_digits() {
        let mut draft = QuoteDraft::default();
        assert_eq!(draft.validate().get("zip"), Some(&"ZIP code is required"));
        draft.set("zip", "1234".into());
        assert_eq!(draft.validate().get("zip"), Some(&"Please enter a valid 5-digit ZIP code"));
        draft.set("zip", "12345-6789".into());
        assert!(draft.validate().contains_key("zip"));
        draft.set("zip", "90210".into());
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn zip_accepts_ascii_digits_only() {
        let mut draft = QuoteDraft::default();
        draft.set("zip", "١٢٣٤٥".into());
        assert_eq!(draft.validate().get("zip"), Some(&"Please enter a valid 5-digit ZIP code"));
        draft.set("zip", "１２３４５".into());
        assert!(draft.validate().contains_key("zip"));

        let mut form = ApplicationForm::default();
        form.set("zipCode", "١٢٣٤٥".into());
        assert_eq!(form.validate().get("zipCode"), Some(&"Must be 5 digits"));
        form.set("zipCode", "02134".into());
        assert!(!form.validate().contains_key("zipCode"));
    }

    #[test]
    fn draft_json_uses_camel_case_keys() {
        let draft = QuoteDraft {
            zip: "90210".into(),
            age_range: "25-34".into(),
            vehicle_ownership: "own".into(),
        };
        let json = draft.to_json().unwrap();
        assert!(json.contains("\"ageRange\":\"25-34\""));
        assert!(json.contains("\"vehicleOwnership\":\"own\""));
        assert_eq!(QuoteDraft::from_json(&json).unwrap(), draft);
    }

    #[test]
    fn partial_or_corrupt_drafts() {
        let partial = QuoteDraft::from_json(r#"{"zip":"11111"}"#).unwrap();
        assert_eq!(partial.zip, "11111");
        assert!(partial.age_range.is_empty());
        assert!(QuoteDraft::from_json("{not json").is_err());
    }

    #[test]
    fn blank_draft_detection() {
        let mut draft = QuoteDraft::default();
        assert!(draft.is_blank());
        draft.set("ageRange", "65+".into());
        assert!(!draft.is_blank());
    }

    #[test]
    fn application_form_reports_every_missing_field() {
        let errors = ApplicationForm::default().validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|m| *m == "Required field"));
    }

    #[test]
    fn application_form_checks_formats() {
        let mut form = ApplicationForm::default();
        form.set("fullName", "Jordan Lee".into());
        form.set("zipCode", "abcde".into());
        form.set("phoneNumber", "6195550100".into());
        form.set("email", "jordan@example".into());
        let errors = form.validate();
        assert_eq!(errors.get("zipCode"), Some(&"Must be 5 digits"));
        assert_eq!(errors.get("email"), Some(&"Invalid email format"));

        form.set("zipCode", "92101".into());
        form.set("email", "jordan@example.com".into());
        assert!(form.validate().is_empty());
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = ApplicationForm::default();
        form.set("fullName", "   ".into());
        assert_eq!(form.validate().get("fullName"), Some(&"Required field"));
    }

    #[test]
    fn clearing_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("zip", "ZIP code is required");
        assert!(clear_field_error(&mut errors, "zip"));
        assert!(!clear_field_error(&mut errors, "zip"));
    }
}
