use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavingsOption {
    pub text: &'static str,
    pub savings: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavingsQuestion {
    pub question: &'static str,
    pub options: Vec<SavingsOption>,
}

pub fn savings_questions() -> Vec<SavingsQuestion> {
    let opt = |text, savings| SavingsOption { text, savings };
    vec![
        SavingsQuestion {
            question: "What's your current monthly auto insurance cost?",
            options: vec![
                opt("Under $100", 150),
                opt("$100 - $200", 300),
                opt("$200 - $300", 450),
                opt("Over $300", 600),
            ],
        },
        SavingsQuestion {
            question: "How long have you been with your current insurer?",
            options: vec![
                opt("Less than 1 year", 200),
                opt("1-3 years", 350),
                opt("3-5 years", 400),
                opt("Over 5 years", 550),
            ],
        },
        SavingsQuestion {
            question: "What's your driving record like?",
            options: vec![
                opt("Perfect - No accidents or tickets", 500),
                opt("Good - 1-2 minor incidents", 350),
                opt("Fair - A few incidents", 250),
                opt("Needs improvement", 150),
            ],
        },
        SavingsQuestion {
            question: "What type of coverage are you looking for?",
            options: vec![
                opt("Full coverage", 400),
                opt("Comprehensive", 300),
                opt("Liability only", 200),
                opt("Not sure", 250),
            ],
        },
        SavingsQuestion {
            question: "How many vehicles do you need to insure?",
            options: vec![
                opt("1 vehicle", 300),
                opt("2 vehicles", 500),
                opt("3+ vehicles", 700),
                opt("Commercial fleet", 1000),
            ],
        },
    ]
}

pub fn total_savings(selected: &[SavingsOption]) -> u32 {
    selected.iter().map(|o| o.savings).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavingsTier {
    Starter,
    Saver,
    Expert,
    Champion,
}

impl SavingsTier {
    pub fn for_total(total: u32) -> Self {
        match total {
            t if t >= 600 => SavingsTier::Champion,
            t if t >= 450 => SavingsTier::Expert,
            t if t >= 300 => SavingsTier::Saver,
            _ => SavingsTier::Starter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SavingsTier::Starter => "Starter",
            SavingsTier::Saver => "Saver",
            SavingsTier::Expert => "Expert",
            SavingsTier::Champion => "Champion",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SavingsTier::Starter => "🌟",
            SavingsTier::Saver => "💎",
            SavingsTier::Expert => "⭐",
            SavingsTier::Champion => "🏆",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SavingsTier::Starter => "tier-starter",
            SavingsTier::Saver => "tier-saver",
            SavingsTier::Expert => "tier-expert",
            SavingsTier::Champion => "tier-champion",
        }
    }
}

/// Linear count-up from zero to `target` in a fixed number of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub frames: u32,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, frames: u32, duration_ms: u32) -> Self {
        Self { target, frames, duration_ms }
    }

    /// 100 frames over two seconds.
    pub fn standard(target: u32) -> Self {
        Self::new(target, config::COUNT_UP_FRAMES, config::COUNT_UP_DURATION_MS)
    }

    pub fn frame_interval_ms(&self) -> u32 {
        (self.duration_ms / self.frames.max(1)).max(1)
    }

    /// Value shown on `frame` (1-based). The last frame lands on the exact target.
    pub fn value_at(&self, frame: u32) -> u32 {
        if frame >= self.frames {
            return self.target;
        }
        let increment = self.target as f64 / self.frames as f64;
        (increment * frame as f64).round() as u32
    }

    pub fn is_done(&self, frame: u32) -> bool {
        frame >= self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_selected_weights() {
        let qs = savings_questions();
        let picks: Vec<_> = qs.iter().map(|q| q.options[0]).collect();
        assert_eq!(total_savings(&picks), 150 + 200 + 500 + 400 + 300);
    }

    #[test]
    fn total_is_order_independent() {
        let qs = savings_questions();
        let mut picks: Vec<_> = qs.iter().map(|q| q.options[2]).collect();
        let forward = total_savings(&picks);
        picks.reverse();
        assert_eq!(total_savings(&picks), forward);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(SavingsTier::for_total(0), SavingsTier::Starter);
        assert_eq!(SavingsTier::for_total(299), SavingsTier::Starter);
        assert_eq!(SavingsTier::for_total(300), SavingsTier::Saver);
        assert_eq!(SavingsTier::for_total(450), SavingsTier::Expert);
        assert_eq!(SavingsTier::for_total(600), SavingsTier::Champion);
        assert_eq!(SavingsTier::for_total(4000).label(), "Champion");
    }

    #[test]
    fn count_up_ends_on_target() {
        let anim = CountUp::standard(25000);
        assert_eq!(anim.frame_interval_ms(), 20);
        assert_eq!(anim.value_at(0), 0);
        assert_eq!(anim.value_at(50), 12500);
        assert_eq!(anim.value_at(100), 25000);
        assert!(anim.is_done(100));
    }

    #[test]
    fn count_up_with_custom_pace() {
        let anim = CountUp::new(10000, 50, 1000);
        assert_eq!(anim.frame_interval_ms(), 20);
        assert_eq!(anim.value_at(25), 5000);
        assert!(!anim.is_done(49));
        assert_eq!(anim.value_at(50), 10000);
    }

    #[test]
    fn count_up_rounds_intermediate_frames() {
        let anim = CountUp::new(1003, 100, 2000);
        assert_eq!(anim.value_at(1), 10);
        assert_eq!(anim.value_at(99), 993);
        assert_eq!(anim.value_at(100), 1003);
    }
}
