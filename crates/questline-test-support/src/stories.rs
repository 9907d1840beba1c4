//! Story graph fixtures.

use questline_story::{Choice, Scene, StoryGraph};

/// A small graph starting at `intro`.
///
/// - `intro` → `go` (role `soldier`) → `camp`
/// - `camp` → `rest` → `intro`, `desert` (role `deserter`) → `epilogue`
/// - `epilogue` has no choices
///
/// # Panics
///
/// Panics if the fixture fails validation, which would be a bug in the fixture.
#[must_use]
pub fn intro_camp_story() -> StoryGraph {
    StoryGraph::new(
        "intro",
        [
            Scene::new("intro", "You wake at the border.")
                .with_choice(Choice::new("go", "March to camp", "camp").with_role("soldier")),
            Scene::new("camp", "The camp is quiet.")
                .with_choice(Choice::new("rest", "Rest by the fire", "intro"))
                .with_choice(
                    Choice::new("desert", "Slip away at night", "epilogue").with_role("deserter"),
                ),
            Scene::new("epilogue", "The war goes on without you."),
        ],
    )
    .expect("intro_camp_story fixture is valid")
}

/// A graph whose only scene is `start` and offers the given choice back to
/// itself.
///
/// # Panics
///
/// Panics if `choice_key` or `label` make the fixture invalid.
#[must_use]
pub fn single_scene_story(choice_key: &str, label: &str) -> StoryGraph {
    StoryGraph::new(
        "start",
        [Scene::new("start", "Again.").with_choice(Choice::new(choice_key, label, "start"))],
    )
    .expect("single_scene_story fixture is valid")
}
