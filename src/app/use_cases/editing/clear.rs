//! Use-Case: Graph leeren und Session zurücksetzen.

use crate::app::state::InteractionMode;
use crate::app::AppState;

/// Leert den Graphen vollständig.
///
/// In jedem Modus erlaubt: ein aktiver Lauf wird zwischen zwei
/// Ereignissen abgebrochen, alle Auswahlen werden zurückgesetzt und der
/// Modus kehrt zu `Editing` zurück.
pub fn clear_graph(state: &mut AppState) {
    state.engine.abort();
    state.graph.clear();
    state.reset_selection();
    state.mode = InteractionMode::Editing;
    log::info!("Graph geleert");
}
