//! Pattern segment routing and captured variables.

use rand::Rng;
use segment_router::{RouteError, Router};

mod common;
use common::{nested_variable_router, reply, VERBS};

fn variable_router() -> Router<String> {
    Router::new(|root| {
        root.path("testpath", |level, _| {
            level.path_variable(r"^subpath([0-9]+)$", |_, vars| {
                Ok(Some(format!("varpath{}", &vars[0])))
            })?;
            Ok(None)
        });
        Ok(())
    })
    .with_verbs(VERBS)
}

fn empty_variable_router() -> Router<String> {
    Router::new(|root| {
        root.path("testpath", |level, _| {
            level.path("tjo", reply("tjo"));
            level.path_variable(r"^subpath([0-9]+)$", |sub, _| {
                sub.path_variable(r"^secondpath([0-9]+)$", |_, vars| {
                    Ok(Some(format!("secondpath{}x{}", &vars[0], &vars[1])))
                })?;
                sub.path_empty(|_, vars| Ok(Some(format!("emptypath{}", &vars[0]))));
                Ok(None)
            })?;
            Ok(None)
        });
        Ok(())
    })
    .with_verbs(VERBS)
}

#[test]
fn test_variable_router_path() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let router = variable_router();
        let r: u32 = rng.gen_range(1..=10_000);
        assert_eq!(
            router.route("get", &format!("testpath/subpath{r}")).unwrap(),
            format!("varpath{r}")
        );
    }
}

#[test]
fn test_numeric_capture_for_every_integer() {
    let router: Router<String> = Router::new(|root| {
        root.path("prefix", |level, _| {
            level.path_variable(r"^([0-9]+)$", |_, vars| {
                assert_eq!(vars.len(), 1);
                Ok(Some(vars[0].to_string()))
            })?;
            Ok(None)
        });
        Ok(())
    });

    for n in 1..=10_000u32 {
        let s = n.to_string();
        assert_eq!(router.route("get", &format!("prefix/{s}")).unwrap(), s);
    }
}

#[test]
fn test_nested_variable_paths() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let router = nested_variable_router();
        let r1: u32 = rng.gen_range(1..=10_000);
        let r2: u32 = rng.gen_range(1..=10_000);
        assert_eq!(
            router
                .route("get", &format!("testpath/subpath{r1}/secondpath{r2}"))
                .unwrap(),
            format!("secondpath{r1}x{r2}")
        );
    }
}

#[test]
fn test_captures_accumulate_in_order() {
    let router: Router<Vec<String>> = Router::new(|root| {
        root.path("testpath", |level, _| {
            level.path_variable(r"^subpath([0-9]+)$", |sub, _| {
                sub.path_variable(r"^secondpath([0-9]+)$", |_, vars| {
                    Ok(Some(vars.as_slice().to_vec()))
                })?;
                Ok(None)
            })?;
            Ok(None)
        });
        Ok(())
    });

    assert_eq!(
        router.route("get", "testpath/subpath7/secondpath9").unwrap(),
        vec!["7".to_string(), "9".to_string()]
    );
}

#[test]
fn test_failing_variable_paths() {
    let err = nested_variable_router().route("get", "testpath/subpath1").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_nested_variable_with_empty_paths() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let router = empty_variable_router();
        let r1: u32 = rng.gen_range(1..=10_000);
        assert_eq!(
            router.route("get", &format!("testpath/subpath{r1}")).unwrap(),
            format!("emptypath{r1}")
        );
    }
}

#[test]
fn test_exact_beats_pattern_at_same_segment() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable(r"^([a-z]+)$", |_, vars| Ok(Some(format!("pattern {}", &vars[0]))))?;
        root.path("tjo", reply("exact"));
        Ok(())
    });

    assert_eq!(router.route("get", "tjo").unwrap(), "exact");
    assert_eq!(router.route("get", "tja").unwrap(), "pattern tja");
}

#[test]
fn test_patterns_tried_in_registration_order() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable(r"^([0-9]+)$", |_, _| Ok(Some("digits".to_string())))?;
        root.path_variable(r"^([0-9a-z]+)$", |_, _| Ok(Some("alnum".to_string())))?;
        Ok(())
    });

    assert_eq!(router.route("get", "123").unwrap(), "digits");
    assert_eq!(router.route("get", "12a").unwrap(), "alnum");
}

#[test]
fn test_pattern_verb_restriction() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable_with(r"^([0-9]+)$", "post", |_, _| Ok(Some("create".to_string())))?;
        root.path_variable_with(r"^([0-9]+)$", ["get"], |_, _| Ok(Some("read".to_string())))?;
        Ok(())
    });

    assert_eq!(router.route("post", "1").unwrap(), "create");
    assert_eq!(router.route("get", "1").unwrap(), "read");
    assert!(router.route("delete", "1").unwrap_err().is_not_found());
}

#[test]
fn test_pattern_without_groups() {
    let router: Router<usize> = Router::new(|root| {
        root.path_variable("^latest$", |_, vars| Ok(Some(vars.len())))?;
        Ok(())
    });

    assert_eq!(router.route("get", "latest").unwrap(), 0);
}

#[test]
fn test_pattern_matches_single_segment_only() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable("^(.+)$", |level, _| {
            level.path_empty(|_, vars| Ok(Some(vars[0].to_string())));
            Ok(None)
        })?;
        Ok(())
    });

    assert_eq!(router.route("get", "a").unwrap(), "a");
    // `.+` never swallows the separator: `b` is matched one level down.
    assert!(router.route("get", "a/b").unwrap_err().is_not_found());
}

#[test]
fn test_invalid_pattern_at_root() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable("^([0-9]+$", reply("never"))?;
        Ok(())
    });

    assert!(matches!(
        router.route("get", "1"),
        Err(RouteError::InvalidPattern { pattern, .. }) if pattern == "^([0-9]+$"
    ));
}

#[test]
fn test_invalid_pattern_inside_handler_surfaces_unwrapped() {
    let router: Router<String> = Router::new(|root| {
        root.path("testpath", |level, _| {
            level.path_variable("(unclosed", reply("never"))?;
            Ok(None)
        });
        Ok(())
    });

    assert!(matches!(
        router.route("get", "testpath/x"),
        Err(RouteError::InvalidPattern { .. })
    ));
}

#[test]
fn test_unbalanced_pattern_is_rejected_at_registration() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable("a)|(b", reply("hit"))?;
        Ok(())
    });

    assert!(matches!(
        router.route("get", "axyz"),
        Err(RouteError::InvalidPattern { .. })
    ));
}

#[test]
fn test_verbose_pattern_with_comment() {
    let router: Router<String> = Router::new(|root| {
        root.path_variable("(?x)([0-9]+) # id", |_, vars| Ok(Some(vars[0].to_string())))?;
        Ok(())
    });

    assert_eq!(router.route("get", "42").unwrap(), "42");
    assert!(router.route("get", "42x").unwrap_err().is_not_found());
}
