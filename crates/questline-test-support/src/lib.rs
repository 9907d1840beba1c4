//! Shared test doubles and story fixtures for the Questline story bot.

mod clock;
mod stories;

pub use clock::{FixedClock, fixed_now};
pub use stories::{intro_camp_story, single_scene_story};
