pub mod id;
pub mod project;
pub mod validation;

pub use id::{IdGenerator, IdStrategy, RandomIdGenerator, SequentialIdGenerator};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, Constraints, FieldValue, Validatable};
