//! # Project Board
//!
//! A two-column project board: a form that creates projects, an observable
//! in-memory store, and "active"/"finished" lists that re-render from the
//! store and move projects between each other by drag and drop.
//!
//! Components emit [`render::RenderOp`] instructions instead of touching a
//! UI toolkit, so the whole board runs headless and the host binding stays
//! a thin layer.

pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use app::{App, UiEvent};
pub use components::FormInput;
pub use config::AppConfig;
pub use domain::{
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Constraints, FieldValue, Validatable},
};
pub use error::{BoardError, Result};
pub use render::RenderOp;
pub use store::ProjectStore;
