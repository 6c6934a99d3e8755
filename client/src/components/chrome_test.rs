use super::*;

#[test]
fn nav_links_cover_the_fixed_destinations_in_order() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(
        hrefs,
        ["/#how", "/digital-assets", "/faq", "/privacy", "/#install", "/#pricing"],
    );
}

#[test]
fn nav_links_have_labels() {
    for link in NAV_LINKS {
        assert!(!link.label.trim().is_empty(), "unlabeled nav link: {}", link.href);
    }
}

#[test]
fn nav_links_are_same_site_only() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('/'), "external nav link: {}", link.href);
    }
}
