use super::*;

#[test]
fn route_paths_cover_the_five_site_routes() {
    assert_eq!(ROUTE_PATHS, ["/", "/faq", "/digital-assets", "/privacy", "/terms"]);
}

#[test]
fn route_paths_are_unique() {
    for (i, path) in ROUTE_PATHS.iter().enumerate() {
        assert!(!ROUTE_PATHS[i + 1..].contains(path), "duplicate route: {path}");
    }
}

#[test]
fn route_paths_are_absolute_and_query_free() {
    for path in ROUTE_PATHS {
        assert!(path.starts_with('/'), "relative route: {path}");
        assert!(!path.contains('?'), "parameterized route: {path}");
    }
}
