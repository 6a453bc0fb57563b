use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Node an normierter Position hinzufügen
    AddNodeAtPosition { world_pos: Vec2 },
    /// Kanten-Werkzeug: Node anwählen (Source oder Target des Zwei-Klick-Ablaufs)
    ConnectToolPickNode {
        world_pos: Vec2,
        max_distance: f32,
    },
    /// In den Pfadmodus wechseln (wartet auf Startknoten)
    EnterPathSelection,
    /// Startknoten der Pfadsuche wählen
    SelectSourceNode {
        world_pos: Vec2,
        max_distance: f32,
    },
    /// Zielknoten wählen und den Lauf starten
    SelectTargetNodeAndRun {
        world_pos: Vec2,
        max_distance: f32,
    },
    /// Ein Ereignis des aktiven Laufs verarbeiten
    StepAlgorithm,
    /// Graph leeren und in den Editiermodus zurückkehren
    ClearGraph,
}
