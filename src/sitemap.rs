//! Sample route table for a typical small site.
//!
//! Used by the CLI (`route`, `bench`) and by the integration tests as a
//! realistic mix of exact, pattern, empty and verb-restricted entries.

use crate::config::RouterConfig;
use crate::routing::{Captures, Level, Outcome, Router};

/// Requests the benchmark draws from.
pub const SAMPLE_PATHS: &[&str] = &[
    "/profile",
    "/profile/overview",
    "/profile/stuff",
    "/profile/list",
    "/profile/123",
    "/profile/12",
    "/profile/523",
    "/profile/723",
    "/profile/234/tksgw",
    "/profile/5678/wwoqmva",
    "/profile/12463/nkflewnfew",
    "/profile/4232/fwfehjreklfhewakfwa",
    "/profile/129455928239/dkd",
    "/project",
    "/project/overview",
    "/project/stuff",
    "/project/list",
    "/project/123",
    "/project/12",
    "/project/523",
    "/tjosan",
    "/listings",
    "/stuff",
    "/something",
    "/bok",
];

/// Single-segment pages served at the root, each answering with its own name.
const TOP_LEVEL_PAGES: [&str; 5] = ["tjosan", "listings", "stuff", "something", "bok"];

fn reply(
    value: &'static str,
) -> impl Fn(&mut Level<'_, String>, &Captures) -> Outcome<String> + Send + Sync + 'static {
    move |_, _| Ok(Some(value.to_string()))
}

/// Register the pages shared by `profile` and `project`.
fn section_pages(level: &mut Level<'_, String>) {
    level
        .path_with("overview", "GET", reply("overview"))
        .path_with("stuff", "GET", reply("stuff"))
        .path_with("list", "GET", reply("list"))
        .path_with("save", "GET", reply("save"))
        .path_empty(reply("empty"));
}

/// Build the sample router.
pub fn sitemap_router(config: &RouterConfig) -> Router<String> {
    Router::from_config(config, |root| {
        root.path("profile", |profile, _| {
            section_pages(profile);
            profile.path_variable(r"^([0-9]+)$", |id, _| {
                id.path_variable(r"^([a-z]+)$", |_, vars| {
                    Ok(Some(format!("subproject {}/{}", &vars[0], &vars[1])))
                })?;
                id.path_empty(|_, vars| Ok(Some(format!("profile {}", &vars[0]))));
                Ok(None)
            })?;
            Ok(None)
        });

        root.path("project", |project, _| {
            section_pages(project);
            project.path_variable(r"^([0-9]+)$", |_, vars| {
                Ok(Some(format!("project {}", &vars[0])))
            })?;
            Ok(None)
        });

        for page in TOP_LEVEL_PAGES {
            root.path_with(page, "GET", reply(page));
        }
        root.path_empty(reply("home"));

        Ok(())
    })
}
