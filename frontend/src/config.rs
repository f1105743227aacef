
/// Local storage key holding the quote form draft.
pub const DRAFT_STORAGE_KEY: &str = "insuranceFormData";

/// Seconds on the urgency clock once the call button is revealed.
pub const COUNTDOWN_SECONDS: u32 = 180;

pub const STEP_DELAY_MS: u32 = 300;
pub const REVEAL_DELAY_MS: u32 = 1000;
pub const QUIZ_STEP_DELAY_MS: u32 = 500;
pub const STORY_STEP_DELAY_MS: u32 = 500;

pub const TAG_RETRY_INTERVAL_MS: u32 = 100;
pub const TAG_RETRY_MAX_ATTEMPTS: u32 = 50;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_FRAMES: u32 = 100;

/// Count-up of the split calculator, restarted on every answer.
pub const SPLIT_COUNT_UP_DURATION_MS: u32 = 1000;
pub const SPLIT_COUNT_UP_FRAMES: u32 = 50;
/// Yearly premium shown on the "current costs" side of the split calculator.
pub const SPLIT_CURRENT_COST: u32 = 15000;

pub const MOCK_FETCH_DELAY_MS: u32 = 800;
pub const MOCK_SUBMIT_DELAY_MS: u32 = 2500;

/// A pair of call-tracking numbers. Pages flip between them with `switch_number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneLine {
    pub display: &'static str,
    pub alternate: &'static str,
}

impl PhoneLine {
    pub fn pick(&self, switch_number: bool) -> &'static str {
        if switch_number {
            self.alternate
        } else {
            self.display
        }
    }
}

#[cfg(debug_assertions)]
pub fn get_call_line() -> PhoneLine {
    // Local testing number, never routed to a buyer
    PhoneLine {
        display: "(619)-775-3027",
        alternate: "(619)-775-3027",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_call_line() -> PhoneLine {
    PhoneLine {
        display: "(833)-663-8513",
        alternate: "(323)-689-7861",
    }
}

/// Number used by the quote form page.
pub fn get_quote_line() -> PhoneLine {
    PhoneLine {
        display: "+1-888-555-0199",
        alternate: "+1-888-555-0199",
    }
}

/// Turns a display number into a dialable `tel:` href.
///
/// Everything except digits is dropped. Ten digit numbers get the `+1`
/// country code, numbers already carrying one keep it.
pub fn tel_href(display: &str) -> String {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("tel:+1{}", digits)
    } else {
        format!("tel:+{}", digits)
    }
}

/// Button label used on every call surface.
pub fn call_label(display: &str) -> String {
    format!("CALL {}", display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_adds_country_code_to_ten_digits() {
        assert_eq!(tel_href("(619)-775-3027"), "tel:+16197753027");
    }

    #[test]
    fn tel_href_keeps_existing_country_code() {
        assert_eq!(tel_href("+1-888-555-0199"), "tel:+18885550199");
    }

    #[test]
    fn switch_number_picks_alternate() {
        let line = PhoneLine {
            display: "(833)-663-8513",
            alternate: "(323)-689-7861",
        };
        assert_eq!(line.pick(false), "(833)-663-8513");
        assert_eq!(line.pick(true), "(323)-689-7861");
    }

    #[test]
    fn call_label_prefixes_number() {
        assert_eq!(call_label("(619)-775-3027"), "CALL (619)-775-3027");
    }
}
