use glam::Vec2;

/// Maustaste eines Pointer-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// App-Intents: Eingaben aus dem Fenster/Input-System ohne direkte
/// Mutationslogik.
///
/// Der Windowing-Collaborator normiert rohe Gerätekoordinaten vor der
/// Übergabe auf den logischen Raum [-1,1] x [-1,1] (Ursprung Mitte,
/// y nach oben).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer-Klick an normierter Position
    PointerPressed {
        world_pos: Vec2,
        button: PointerButton,
    },
    /// Pfadmodus starten (Taste)
    StartPathModeRequested,
    /// Graph vollständig leeren (Taste)
    ClearGraphRequested,
    /// Nächstes Ereignis des laufenden Algorithmus abrufen
    AlgorithmStepRequested,
}
