use serde::Serialize;

const KEYS: [&str; 7] = [
    "utm_source",
    "utm_campaign",
    "utm_medium",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
];

/// Campaign parameters read once from the landing URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UtmParams {
    pub utm_source: String,
    pub utm_campaign: String,
    pub utm_medium: String,
    pub utm_term: String,
    pub utm_content: String,
    pub gclid: String,
    pub fbclid: String,
}

impl UtmParams {
    /// Fills every known key from `get`, which answers like `URLSearchParams.get`:
    /// the first value for a key, possibly empty, or `None` when the key is absent.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = UtmParams::default();
        for key in KEYS {
            let Some(value) = get(key) else {
                continue;
            };
            let slot = match key {
                "utm_source" => &mut params.utm_source,
                "utm_campaign" => &mut params.utm_campaign,
                "utm_medium" => &mut params.utm_medium,
                "utm_term" => &mut params.utm_term,
                "utm_content" => &mut params.utm_content,
                "gclid" => &mut params.gclid,
                _ => &mut params.fbclid,
            };
            *slot = value;
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First matching pair wins, the way `URLSearchParams.get` resolves repeats.
    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn reads_known_parameters() {
        let pairs = [("utm_source", "fb"), ("utm_campaign", "spring promo"), ("gclid", "abc"), ("other", "1")];
        let utm = UtmParams::from_lookup(lookup(&pairs));
        assert_eq!(utm.utm_source, "fb");
        assert_eq!(utm.utm_campaign, "spring promo");
        assert_eq!(utm.gclid, "abc");
        assert!(utm.fbclid.is_empty());
    }

    #[test]
    fn nothing_present_gives_empty_params() {
        assert_eq!(UtmParams::from_lookup(|_| None), UtmParams::default());
    }

    #[test]
    fn empty_first_value_is_kept() {
        let pairs = [("utm_source", ""), ("utm_source", "fb")];
        let utm = UtmParams::from_lookup(lookup(&pairs));
        assert_eq!(utm.utm_source, "");
    }

    #[test]
    fn every_key_is_queried() {
        let utm = UtmParams::from_lookup(|key| Some(key.to_uppercase()));
        assert_eq!(utm.utm_term, "UTM_TERM");
        assert_eq!(utm.utm_content, "UTM_CONTENT");
        assert_eq!(utm.utm_medium, "UTM_MEDIUM");
        assert_eq!(utm.fbclid, "FBCLID");
    }
}
