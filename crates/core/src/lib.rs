pub mod config;
pub mod error;
pub mod model;
pub mod project;

pub use config::{GeneratorConfig, SourceStrategy};
pub use error::FormworkError;
pub use model::{FieldDescriptor, ModelDescriptor};
pub use project::ProjectLayout;
