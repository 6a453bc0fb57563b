//! Mapping von Input-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Modus-Logik: was ein Klick bedeutet, entscheidet der
//! aktuelle Interaktionsmodus. Nicht anwendbare Eingaben ergeben eine
//! leere Command-Sequenz (ignorieren, Modus bleibt erhalten).

use super::events::PointerButton;
use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos, button } => match state.mode {
            InteractionMode::Editing => match button {
                // Linksklick erzeugt immer einen Node, ohne Nähe-Prüfung
                PointerButton::Left => vec![AppCommand::AddNodeAtPosition { world_pos }],
                PointerButton::Right => vec![AppCommand::ConnectToolPickNode {
                    world_pos,
                    max_distance: state.options.proximity_threshold,
                }],
            },
            InteractionMode::AwaitingSource => vec![AppCommand::SelectSourceNode {
                world_pos,
                max_distance: state.options.proximity_threshold,
            }],
            InteractionMode::AwaitingTarget => vec![AppCommand::SelectTargetNodeAndRun {
                world_pos,
                max_distance: state.options.proximity_threshold,
            }],
            // Klicks während eines Laufs werden verworfen
            InteractionMode::RunningAlgorithm => Vec::new(),
        },
        AppIntent::StartPathModeRequested => {
            if state.mode == InteractionMode::RunningAlgorithm {
                Vec::new()
            } else {
                vec![AppCommand::EnterPathSelection]
            }
        }
        AppIntent::ClearGraphRequested => vec![AppCommand::ClearGraph],
        AppIntent::AlgorithmStepRequested => {
            if state.mode == InteractionMode::RunningAlgorithm {
                vec![AppCommand::StepAlgorithm]
            } else {
                Vec::new()
            }
        }
    }
}
