//! Widgets composed by the UI layout.
pub mod footer;
pub mod header;
pub mod messages;
pub mod scene;

pub use scene::SceneView;
