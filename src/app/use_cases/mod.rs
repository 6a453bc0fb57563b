//! Use-Cases: die eigentliche Mutationslogik pro Feature-Bereich.

pub mod editing;
pub mod pathfinding;
