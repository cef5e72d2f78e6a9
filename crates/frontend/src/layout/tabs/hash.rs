use once_cell::sync::Lazy;
use regex::Regex;

/// Section name written in front of the tab query in the URL fragment
pub const SERVICES_SECTION: &str = "services";

static TAB_IN_HASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"t=(t[0-4])(?:$|&)").expect("tab hash pattern is valid"));

/// Extract the tab id from a URL hash such as `#services?t=t2`.
///
/// Returns `None` when the hash carries no recognisable id; whether that id
/// exists on the page is for the navigator to decide.
pub fn parse_tab_hash(hash: &str) -> Option<&str> {
    TAB_IN_HASH
        .captures(hash)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Fragment (without `#`) that deep-links to the given tab
pub fn tab_fragment(id: &str) -> String {
    format!("{}?t={}", SERVICES_SECTION, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_hash() {
        assert_eq!(parse_tab_hash("#services?t=t2"), Some("t2"));
        assert_eq!(parse_tab_hash("services?t=t0"), Some("t0"));
        assert_eq!(parse_tab_hash("#services?x=1&t=t4"), Some("t4"));
        assert_eq!(parse_tab_hash("#services?t=t3&ref=nav"), Some("t3"));
    }

    #[test]
    fn test_parse_rejects_unknown_ids() {
        assert_eq!(parse_tab_hash(""), None);
        assert_eq!(parse_tab_hash("#main"), None);
        assert_eq!(parse_tab_hash("#services?t=t5"), None);
        assert_eq!(parse_tab_hash("#services?t=x1"), None);
        // the id must end at the parameter boundary
        assert_eq!(parse_tab_hash("#services?t=t12"), None);
        assert_eq!(parse_tab_hash("#services?t=t1x"), None);
    }

    #[test]
    fn test_fragment_round_trip() {
        let fragment = tab_fragment("t3");
        assert_eq!(fragment, "services?t=t3");
        assert_eq!(parse_tab_hash(&format!("#{fragment}")), Some("t3"));
    }
}
