use crate::shared::dom;

const NAV_LINKS: &str = "header a[href], #mobile-menu a[href]";
const CURRENT_LINKS: &str = "header a[aria-current], #mobile-menu a[aria-current]";

/// Current page file name from `location.pathname`, lower-cased.
pub fn current_page(pathname: &str) -> String {
    let last = pathname.rsplit('/').next().unwrap_or_default();
    if last.is_empty() {
        "index.html".to_string()
    } else {
        last.to_lowercase()
    }
}

/// A link points at the current page when its `href` equals or ends with the page name.
pub fn is_current_link(href: &str, page: &str) -> bool {
    let href = href.to_lowercase();
    href == page || href.ends_with(page)
}

/// Mark header and mobile menu links to the current page with `aria-current="page"`.
pub fn highlight_active_nav() {
    let page = current_page(&dom::location_pathname());

    for link in dom::query_all(CURRENT_LINKS) {
        let _ = link.remove_attribute("aria-current");
    }
    for link in dom::query_all(NAV_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_current_link(&href, &page) {
            dom::set_attr(&link, "aria-current", "page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/Services.html"), "services.html");
        assert_eq!(current_page("/site/contact.html"), "contact.html");
    }

    #[test]
    fn test_is_current_link() {
        assert!(is_current_link("services.html", "services.html"));
        assert!(is_current_link("/site/Services.html", "services.html"));
        assert!(!is_current_link("about-us.html", "services.html"));
        assert!(!is_current_link("services.html#t1", "services.html"));
    }
}
