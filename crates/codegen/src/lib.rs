pub mod generator;
pub mod templates;
pub mod writer;

pub use generator::*;
pub use writer::*;

use formwork_core::{FormworkError, ModelDescriptor, ProjectLayout};

/// One full emission pass: per-model templates, then the forms, views
/// and urls modules, then the existence-guarded base layout.
///
/// Everything written is a pure function of the layout and the ordered
/// model list, so re-running with unchanged inputs overwrites every
/// file with byte-identical content.
pub struct ScaffoldGenerator {
    layout: ProjectLayout,
    models: Vec<ModelDescriptor>,
}

impl ScaffoldGenerator {
    pub fn new(layout: ProjectLayout, models: Vec<ModelDescriptor>) -> Self {
        Self { layout, models }
    }

    pub fn generate_all(&self) -> Result<(), FormworkError> {
        self.layout.ensure_templates_dir()?;

        for model in &self.models {
            ModelScaffold::new(&self.layout, model).generate_templates()?;
        }

        let emitter = ModuleEmitter::new(&self.layout, &self.models);
        emitter.write_forms_module()?;
        emitter.write_views_module()?;
        emitter.write_urls_module()?;
        emitter.write_base_layout()?;

        Ok(())
    }
}
