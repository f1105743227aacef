use crate::config;
use crate::funnel::tags::AttributionTags;

/// Outbound side channel for attribution tags. Fire and forget.
pub trait AttributionSink {
    fn record(&self, tags: &AttributionTags);

    /// Sends tags that were already recorded once, e.g. again on a call click.
    fn resend(&self, tags: &AttributionTags) {
        self.record(tags);
    }
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AttributionSink for NullSink {
    fn record(&self, _tags: &AttributionTags) {}
}

/// Which tagging call style the tracker object exposes, in probing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagApi {
    SetTag,
    AddTag,
    Push,
    TagsObject,
}

impl TagApi {
    pub fn choose(has_set_tag: bool, has_add_tag: bool, has_push: bool) -> TagApi {
        if has_set_tag {
            TagApi::SetTag
        } else if has_add_tag {
            TagApi::AddTag
        } else if has_push {
            TagApi::Push
        } else {
            TagApi::TagsObject
        }
    }
}

/// Fixed-interval, bounded wait for the tracker script to show up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval_ms: config::TAG_RETRY_INTERVAL_MS,
            max_attempts: config::TAG_RETRY_MAX_ATTEMPTS,
        }
    }
}

/// Whether a batch is the first send or a repeat of one already sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Initial,
    Repeat,
}

impl RetryPolicy {
    /// Only the first send waits for a late tracker. Repeats go out once.
    pub fn waits_for_tracker(&self, delivery: Delivery) -> bool {
        delivery == Delivery::Initial && self.max_attempts > 0
    }

    /// `attempt` is 1-based and counts the check that just failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    pub fn give_up_after_ms(&self) -> u32 {
        self.interval_ms * self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Keeps every recorded batch in memory, duplicates included.
    #[derive(Clone, Debug, Default)]
    struct MemorySink {
        entries: Rc<RefCell<Vec<AttributionTags>>>,
    }

    impl MemorySink {
        fn new() -> Self {
            Self::default()
        }

        fn entries(&self) -> Vec<AttributionTags> {
            self.entries.borrow().clone()
        }
    }

    impl AttributionSink for MemorySink {
        fn record(&self, tags: &AttributionTags) {
            self.entries.borrow_mut().push(tags.clone());
        }
    }

    #[test]
    fn memory_sink_appends_one_entry_per_record() {
        let sink = MemorySink::new();
        let tags: AttributionTags = [("age", "under_65")].into_iter().collect();
        sink.record(&tags);
        sink.record(&tags);
        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn resend_defaults_to_another_record() {
        let sink = MemorySink::new();
        let tags: AttributionTags = [("insured", "yes")].into_iter().collect();
        sink.record(&tags);
        sink.resend(&tags);
        assert_eq!(sink.entries(), vec![tags.clone(), tags]);
    }

    #[test]
    fn memory_sink_clones_share_entries() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.record(&AttributionTags::new());
        assert_eq!(handle.entries().len(), 1);
    }

    #[test]
    fn null_sink_accepts_anything() {
        NullSink.record(&[("k", "v")].into_iter().collect());
    }

    #[test]
    fn tag_api_probing_order() {
        assert_eq!(TagApi::choose(true, true, true), TagApi::SetTag);
        assert_eq!(TagApi::choose(false, true, true), TagApi::AddTag);
        assert_eq!(TagApi::choose(false, false, true), TagApi::Push);
        assert_eq!(TagApi::choose(false, false, false), TagApi::TagsObject);
    }

    #[test]
    fn only_first_delivery_waits_for_tracker() {
        let policy = RetryPolicy::default();
        assert!(policy.waits_for_tracker(Delivery::Initial));
        assert!(!policy.waits_for_tracker(Delivery::Repeat));
        let never = RetryPolicy { interval_ms: 100, max_attempts: 0 };
        assert!(!never.waits_for_tracker(Delivery::Initial));
    }

    #[test]
    fn default_retry_gives_up_after_five_seconds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.give_up_after_ms(), 5000);
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(49));
        assert!(!policy.should_retry(50));
    }
}
