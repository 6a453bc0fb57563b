//! Zentrale Konfiguration für den Dijkstra-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Klick-Radius in normierten Koordinaten: nur Klicks strikt innerhalb
/// dieses Radius zählen als Auswahl des nächstgelegenen Nodes.
pub const PROXIMITY_THRESHOLD: f32 = 0.1;

// ── Presenter-Pacing ────────────────────────────────────────────────

/// Pause des Presenters nach einem Relaxations-Ereignis (Millisekunden).
pub const RELAX_STEP_DELAY_MS: u64 = 300;
/// Pause des Presenters nach einem Finalisierungs-Ereignis (Millisekunden).
pub const FINALIZE_STEP_DELAY_MS: u64 = 500;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `dijkstra_visual_editor.toml` neben der Binary gespeichert.
///
/// Die Pacing-Werte sind Teil des Schritt-Vertrags mit dem Presenter;
/// die Engine selbst schläft nie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Klick-Radius für die Node-Auswahl in normierten Koordinaten
    pub proximity_threshold: f32,
    /// Presenter-Pause nach Relaxations-Ereignissen in Millisekunden
    pub relax_step_delay_ms: u64,
    /// Presenter-Pause nach Finalisierungs-Ereignissen in Millisekunden
    pub finalize_step_delay_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            relax_step_delay_ms: RELAX_STEP_DELAY_MS,
            finalize_step_delay_ms: FINALIZE_STEP_DELAY_MS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dijkstra_visual_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dijkstra_visual_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let options = EditorOptions::default();
        assert_eq!(options.proximity_threshold, PROXIMITY_THRESHOLD);
        assert_eq!(options.relax_step_delay_ms, RELAX_STEP_DELAY_MS);
        assert_eq!(options.finalize_step_delay_ms, FINALIZE_STEP_DELAY_MS);
    }

    #[test]
    fn test_toml_roundtrip() {
        let options = EditorOptions {
            proximity_threshold: 0.25,
            relax_step_delay_ms: 100,
            finalize_step_delay_ms: 150,
        };

        let content = toml::to_string(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let options =
            EditorOptions::load_from_file(std::path::Path::new("nicht/vorhanden/optionen.toml"));
        assert_eq!(options, EditorOptions::default());
    }
}
