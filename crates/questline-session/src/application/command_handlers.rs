//! Command handlers for the session engine.
//!
//! Each handler validates one inbound event against the story graph,
//! updates the user's session, and returns what to render. A handler that
//! fails leaves the stored session exactly as it was.

use questline_core::clock::Clock;
use questline_core::error::EngineError;
use questline_core::user::UserId;
use questline_story::{ChoicePayload, StoryGraph};
use tracing::{debug, info, instrument, warn};

use crate::domain::commands::{BeginStory, SelectChoice};
use crate::domain::render::{RenderInstruction, RenderedScene, SESSION_RESTARTED_NOTICE};
use crate::domain::session::Session;
use crate::domain::store::SessionStore;

/// Creates or overwrites the user's session at the start scene.
fn restart(
    user_id: UserId,
    graph: &StoryGraph,
    store: &dyn SessionStore,
    clock: &dyn Clock,
) -> Result<RenderedScene, EngineError> {
    let start = graph.start_scene_id();
    let scene = graph
        .lookup(start)
        .ok_or_else(|| EngineError::SceneNotFound(start.to_owned()))?;
    store.save(Session::begin(user_id, start, clock));
    Ok(RenderedScene::from(scene))
}

/// Handles the `BeginStory` command: resets the session to the start scene
/// and renders it.
///
/// # Errors
///
/// Returns `EngineError::SceneNotFound` only if the graph lacks its own
/// start scene, which graph validation rules out.
#[instrument(
    skip(command, graph, store, clock),
    fields(correlation_id = %command.correlation_id, user_id = %command.user_id)
)]
pub fn handle_begin_story(
    command: &BeginStory,
    graph: &StoryGraph,
    store: &dyn SessionStore,
    clock: &dyn Clock,
) -> Result<RenderInstruction, EngineError> {
    let scene = restart(command.user_id, graph, store, clock)?;
    info!(scene_id = %scene.scene_id, "story started");

    Ok(RenderInstruction {
        user_id: command.user_id,
        notice: None,
        replace_previous: false,
        scene,
    })
}

/// Handles the `SelectChoice` command: the scene transition.
///
/// A press from a user with no session restarts the story and discards the
/// choice. Otherwise the payload is decoded, its scene and choice are
/// resolved, the choice's role (if any) is assigned, and the session moves
/// to the choice's target scene.
///
/// # Errors
///
/// - `EngineError::MalformedChoice` if the payload has no `:` separator.
/// - `EngineError::SceneNotFound` if the payload names an unknown scene.
/// - `EngineError::UnknownChoice` if the scene has no such choice.
#[instrument(
    skip(command, graph, store, clock),
    fields(correlation_id = %command.correlation_id, user_id = %command.user_id)
)]
pub fn handle_select_choice(
    command: &SelectChoice,
    graph: &StoryGraph,
    store: &dyn SessionStore,
    clock: &dyn Clock,
) -> Result<RenderInstruction, EngineError> {
    let Some(mut session) = store.load(command.user_id) else {
        // TODO: revisit once sessions are persisted; the pressed choice is
        // dropped here because the session it belonged to is gone.
        warn!(payload = %command.payload, "choice from unknown session; restarting story");
        let scene = restart(command.user_id, graph, store, clock)?;
        return Ok(RenderInstruction {
            user_id: command.user_id,
            notice: Some(SESSION_RESTARTED_NOTICE.to_owned()),
            replace_previous: false,
            scene,
        });
    };

    let payload = ChoicePayload::parse(&command.payload)?;
    let scene = graph
        .lookup(&payload.scene_id)
        .ok_or_else(|| EngineError::SceneNotFound(payload.scene_id.clone()))?;
    let choice = scene
        .choice(&payload.choice_key)
        .ok_or_else(|| EngineError::UnknownChoice {
            scene_id: payload.scene_id.clone(),
            choice_key: payload.choice_key.clone(),
        })?;
    let next = graph
        .lookup(&choice.next)
        .ok_or_else(|| EngineError::SceneNotFound(choice.next.clone()))?;

    if session.current_scene != payload.scene_id {
        debug!(
            current_scene = %session.current_scene,
            button_scene = %payload.scene_id,
            "choice pressed on an earlier scene"
        );
    }

    session.take_choice(choice, clock);
    info!(
        from = %payload.scene_id,
        choice = %payload.choice_key,
        to = %session.current_scene,
        role = ?session.role,
        "choice applied"
    );
    store.save(session);

    Ok(RenderInstruction {
        user_id: command.user_id,
        notice: None,
        replace_previous: true,
        scene: RenderedScene::from(next),
    })
}
