pub mod registry;
pub mod scan;

pub use registry::AppRegistrySource;
pub use scan::ModelFileScan;

use formwork_core::{FormworkError, GeneratorConfig, ModelDescriptor, ProjectLayout, SourceStrategy};
use serde::{Deserialize, Serialize};

/// A fragment of the models file the text scan could not recognize.
/// Recorded so callers can surface what the best-effort scan dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFragment {
    pub line: usize,
    pub text: String,
}

/// Result of one discovery pass: the models found, plus the fragments
/// the scan strategy skipped. Registry introspection never skips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Discovery {
    pub models: Vec<ModelDescriptor>,
    pub skipped: Vec<SkippedFragment>,
}

/// A source of model descriptors for one app.
pub trait ModelSource {
    fn discover(&self, layout: &ProjectLayout) -> Result<Discovery, FormworkError>;

    /// Short human-readable label for status output.
    fn describe(&self) -> &'static str;
}

/// Build the model source selected by configuration.
pub fn source_for(config: &GeneratorConfig) -> Box<dyn ModelSource> {
    match config.source {
        SourceStrategy::Scan => Box::new(ModelFileScan::new()),
        SourceStrategy::Registry => Box::new(AppRegistrySource::new(config.python.clone())),
    }
}
