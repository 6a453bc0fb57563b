//! Gemeinsame Typen zwischen App-Schicht und externem Presenter.

pub mod options;
pub mod render_scene;

pub use options::{
    EditorOptions, FINALIZE_STEP_DELAY_MS, PROXIMITY_THRESHOLD, RELAX_STEP_DELAY_MS,
};
pub use render_scene::RenderScene;
