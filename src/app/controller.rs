//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, render_scene};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Input-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Editing ===
            AppCommand::AddNodeAtPosition { world_pos } => {
                handlers::editing::add_node(state, world_pos)?
            }
            AppCommand::ConnectToolPickNode {
                world_pos,
                max_distance,
            } => handlers::editing::connect_tool_pick(state, world_pos, max_distance)?,
            AppCommand::ClearGraph => handlers::editing::clear_graph(state),

            // === Pfadsuche ===
            AppCommand::EnterPathSelection => handlers::pathfinding::enter_path_selection(state),
            AppCommand::SelectSourceNode {
                world_pos,
                max_distance,
            } => handlers::pathfinding::select_source(state, world_pos, max_distance),
            AppCommand::SelectTargetNodeAndRun {
                world_pos,
                max_distance,
            } => handlers::pathfinding::select_target_and_run(state, world_pos, max_distance)?,
            AppCommand::StepAlgorithm => handlers::pathfinding::step(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
