use std::collections::HashMap;
use std::path::PathBuf;

use formwork_core::{FormworkError, ModelDescriptor, ProjectLayout};

use crate::templates::{
    render_template, BASE_LAYOUT_TEMPLATE, CONFIRM_DELETE_TEMPLATE, DETAIL_TEMPLATE,
    FORMS_HEADER, FORM_BLOCK_TEMPLATE, FORM_TEMPLATE, LIST_TEMPLATE, URLS_FOOTER,
    URLS_HEADER_TEMPLATE, URL_ROUTES_TEMPLATE, VIEWS_HEADER, VIEW_BLOCK_TEMPLATE,
};
use crate::writer::FileWriter;

/// Emits the four HTML templates for one model: list, detail, form
/// and delete confirmation, all extending the shared base layout.
pub struct ModelScaffold<'a> {
    layout: &'a ProjectLayout,
    model: &'a ModelDescriptor,
    writer: FileWriter,
}

impl<'a> ModelScaffold<'a> {
    pub fn new(layout: &'a ProjectLayout, model: &'a ModelDescriptor) -> Self {
        Self {
            layout,
            model,
            writer: FileWriter::new(),
        }
    }

    pub fn generate_templates(&self) -> Result<(), FormworkError> {
        self.generate_list()?;
        self.generate_detail()?;
        self.generate_form()?;
        self.generate_confirm_delete()?;
        Ok(())
    }

    fn generate_list(&self) -> Result<(), FormworkError> {
        let mut context = self.base_context();
        context.insert("filter_inputs", self.filter_inputs());
        context.insert("header_cells", self.header_cells());
        context.insert("value_cells", self.value_cells());
        context.insert("colspan", self.model.fields.len().max(1).to_string());

        let content = render_template(LIST_TEMPLATE, &context)?;
        self.writer.write(&self.template_path("list"), &content)
    }

    fn generate_detail(&self) -> Result<(), FormworkError> {
        let mut context = self.base_context();
        context.insert("detail_rows", self.detail_rows());

        let content = render_template(DETAIL_TEMPLATE, &context)?;
        self.writer.write(&self.template_path("detail"), &content)
    }

    fn generate_form(&self) -> Result<(), FormworkError> {
        let content = render_template(FORM_TEMPLATE, &self.base_context())?;
        self.writer.write(&self.template_path("form"), &content)
    }

    fn generate_confirm_delete(&self) -> Result<(), FormworkError> {
        let content = render_template(CONFIRM_DELETE_TEMPLATE, &self.base_context())?;
        self.writer
            .write(&self.template_path("confirm_delete"), &content)
    }

    fn base_context(&self) -> HashMap<&'static str, String> {
        let mut context = HashMap::new();
        context.insert("name", self.model.name.clone());
        context.insert("route", self.model.route_token());
        context.insert("app", self.layout.app_name.clone());
        context
    }

    fn template_path(&self, suffix: &str) -> PathBuf {
        self.layout
            .templates_dir
            .join(format!("{}_{}.html", self.model.route_token(), suffix))
    }

    fn filter_inputs(&self) -> String {
        self.model
            .fields
            .iter()
            .map(|f| {
                format!(
                    "        <input type=\"text\" name=\"{0}\" placeholder=\"{0}\">\n",
                    f.name
                )
            })
            .collect()
    }

    fn header_cells(&self) -> String {
        self.model
            .fields
            .iter()
            .map(|f| format!("            <th>{}</th>\n", f.name))
            .collect()
    }

    fn value_cells(&self) -> String {
        self.model
            .fields
            .iter()
            .map(|f| format!("            <td>{{{{ obj.{} }}}}</td>\n", f.name))
            .collect()
    }

    fn detail_rows(&self) -> String {
        self.model
            .fields
            .iter()
            .map(|f| {
                format!(
                    "    <tr><th>{0}</th><td>{{{{ object.{0} }}}}</td></tr>\n",
                    f.name
                )
            })
            .collect()
    }
}

/// Emits the three per-app Python modules (forms, views, urls) and the
/// shared base layout. Each module is one accumulated buffer written
/// as a whole file; re-running with unchanged inputs reproduces
/// byte-identical output.
pub struct ModuleEmitter<'a> {
    layout: &'a ProjectLayout,
    models: &'a [ModelDescriptor],
    writer: FileWriter,
}

impl<'a> ModuleEmitter<'a> {
    pub fn new(layout: &'a ProjectLayout, models: &'a [ModelDescriptor]) -> Self {
        Self {
            layout,
            models,
            writer: FileWriter::new(),
        }
    }

    pub fn write_forms_module(&self) -> Result<(), FormworkError> {
        let mut buffer = String::from(FORMS_HEADER);

        for model in self.models {
            let mut context = self.model_context(model);
            context.insert("fields", model.quoted_field_list());

            buffer.push_str("\n\n");
            buffer.push_str(&render_template(FORM_BLOCK_TEMPLATE, &context)?);
        }

        if !self.models.is_empty() {
            buffer.push('\n');
        }

        self.writer.write(&self.layout.forms_path, &buffer)
    }

    pub fn write_views_module(&self) -> Result<(), FormworkError> {
        let mut buffer = String::from(VIEWS_HEADER);

        for model in self.models {
            buffer.push_str("\n\n");
            buffer.push_str(&render_template(
                VIEW_BLOCK_TEMPLATE,
                &self.model_context(model),
            )?);
        }

        if !self.models.is_empty() {
            buffer.push('\n');
        }

        self.writer.write(&self.layout.views_path, &buffer)
    }

    pub fn write_urls_module(&self) -> Result<(), FormworkError> {
        let mut app_context = HashMap::new();
        app_context.insert("app", self.layout.app_name.clone());

        let mut buffer = render_template(URLS_HEADER_TEMPLATE, &app_context)?;

        for model in self.models {
            buffer.push_str(&render_template(
                URL_ROUTES_TEMPLATE,
                &self.model_context(model),
            )?);
        }

        buffer.push_str(URLS_FOOTER);
        self.writer.write(&self.layout.urls_path, &buffer)
    }

    /// Emit the shared base layout once. Returns whether the file was
    /// written; an existing layout is never touched.
    pub fn write_base_layout(&self) -> Result<bool, FormworkError> {
        let mut context = HashMap::new();
        context.insert("app", self.layout.app_name.clone());

        let content = render_template(BASE_LAYOUT_TEMPLATE, &context)?;
        self.writer
            .write_if_absent(&self.layout.base_layout_path, &content)
    }

    fn model_context(&self, model: &ModelDescriptor) -> HashMap<&'static str, String> {
        let mut context = HashMap::new();
        context.insert("name", model.name.clone());
        context.insert("route", model.route_token());
        context.insert("app", self.layout.app_name.clone());
        context
    }
}
