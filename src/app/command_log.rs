//! Minimales Command-Log für Diagnose und spätere Undo-Erweiterung.

use super::AppCommand;

/// Speichert ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES; die älteste Hälfte wird dann verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_record_caps_entry_count() {
        let mut command_log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES + 1 {
            command_log.record(AppCommand::AddNodeAtPosition {
                world_pos: Vec2::ZERO,
            });
        }

        assert_eq!(command_log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
    }
}
