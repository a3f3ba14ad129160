//! The sample sitemap, driven the way the CLI drives it.

use std::sync::Arc;
use std::thread;

use segment_router::config::loader::parse_config;
use segment_router::sitemap::{sitemap_router, SAMPLE_PATHS};
use segment_router::{RouteError, RouterConfig};

#[test]
fn test_sample_paths_route_from_many_threads() {
    let router = Arc::new(sitemap_router(&RouterConfig::default()));

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let router = router.clone();
            thread::spawn(move || {
                SAMPLE_PATHS
                    .iter()
                    .skip(offset)
                    .step_by(4)
                    .filter(|path| router.route("GET", path).is_ok())
                    .count()
            })
        })
        .collect();

    let routed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(routed, SAMPLE_PATHS.len());
}

#[test]
fn test_strict_verbs_from_config() {
    let config = parse_config("verbs = [\"GET\"]\nstrict_verbs = true").unwrap();
    let router = sitemap_router(&config);

    assert_eq!(router.route("GET", "/profile/overview").unwrap(), "overview");
    assert!(matches!(
        router.route("POST", "/profile/overview"),
        Err(RouteError::UnknownVerb(verb)) if verb == "POST"
    ));
}

#[test]
fn test_lenient_verbs_report_not_found() {
    let router = sitemap_router(&RouterConfig::default());
    assert!(router.route("DELETE", "/stuff").unwrap_err().is_not_found());
    // Empty fallbacks accept any verb.
    assert_eq!(router.route("DELETE", "/project").unwrap(), "empty");
}

#[test]
fn test_unknown_section_page() {
    let err = sitemap_router(&RouterConfig::default())
        .route("GET", "/project/abc")
        .unwrap_err();
    assert!(err.is_not_found());
}
