use std::process::Command;

use formwork_core::{FieldDescriptor, FormworkError, ModelDescriptor, ProjectLayout};
use serde::Deserialize;

use crate::{Discovery, ModelSource};

/// Introspection script executed by the project's Python interpreter.
/// Prints one JSON array of `{name, fields: [[name, kind], ...]}`
/// objects, concrete fields only, in declaration order.
const INTROSPECT_SCRIPT: &str = r#"
import json

import django
from django.apps import apps

django.setup()

models = []
for model in apps.get_app_config('{{app}}').get_models():
    fields = [[f.name, type(f).__name__] for f in model._meta.concrete_fields]
    models.append({'name': model.__name__, 'fields': fields})

print(json.dumps(models))
"#;

#[derive(Debug, Deserialize)]
struct RegistryModel {
    name: String,
    fields: Vec<(String, String)>,
}

/// Model discovery through the live Django app registry.
///
/// Runs the configured interpreter inside the project root with
/// `DJANGO_SETTINGS_MODULE` pointing at the project settings, so the
/// framework must be initializable; any failure here is fatal and
/// nothing is written.
pub struct AppRegistrySource {
    python: String,
}

impl AppRegistrySource {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn parse_output(raw: &str) -> Result<Vec<ModelDescriptor>, FormworkError> {
        let raw_models: Vec<RegistryModel> = serde_json::from_str(raw.trim())?;

        Ok(raw_models
            .into_iter()
            .map(|m| {
                let fields = m
                    .fields
                    .into_iter()
                    .map(|(name, kind)| FieldDescriptor::new(name, kind))
                    .collect();
                ModelDescriptor::with_fields(m.name, fields)
            })
            .collect())
    }
}

impl ModelSource for AppRegistrySource {
    fn discover(&self, layout: &ProjectLayout) -> Result<Discovery, FormworkError> {
        let script = INTROSPECT_SCRIPT.replace("{{app}}", &layout.app_name);

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(&script)
            .current_dir(&layout.project_root)
            .env(
                "DJANGO_SETTINGS_MODULE",
                format!("{}.settings", layout.project_name),
            )
            .output()
            .map_err(|e| {
                FormworkError::discovery(format!("Failed to run {}: {}", self.python, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormworkError::discovery(format!(
                "Django introspection for app '{}' failed: {}",
                layout.app_name,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Discovery {
            models: Self::parse_output(&stdout)?,
            skipped: Vec::new(),
        })
    }

    fn describe(&self) -> &'static str {
        "app registry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_output() {
        let raw = r#"[{"name": "Book", "fields": [["title", "CharField"], ["pages", "IntegerField"]]}]"#;
        let models = AppRegistrySource::parse_output(raw).unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Book");
        assert_eq!(
            models[0].fields,
            vec![
                FieldDescriptor::new("title", "CharField"),
                FieldDescriptor::new("pages", "IntegerField"),
            ]
        );
    }

    #[test]
    fn test_parse_output_rejects_garbage() {
        assert!(AppRegistrySource::parse_output("Traceback (most recent call last)").is_err());
    }

    #[cfg(unix)]
    fn fake_interpreter(dir: &std::path::Path, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("python-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_parses_interpreter_json() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::standalone(temp_dir.path(), Some("library")).unwrap();
        let python = fake_interpreter(
            temp_dir.path(),
            r#"echo '[{"name": "Order", "fields": [["number", "IntegerField"]]}]'"#,
        );

        let discovery = AppRegistrySource::new(python).discover(&layout).unwrap();
        assert_eq!(discovery.models[0].name, "Order");
        assert!(discovery.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_fails_on_interpreter_error() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::standalone(temp_dir.path(), Some("library")).unwrap();
        let python = fake_interpreter(temp_dir.path(), "echo 'boom' >&2\nexit 1");

        let err = AppRegistrySource::new(python).discover(&layout).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_discover_fails_on_missing_interpreter() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::standalone(temp_dir.path(), None).unwrap();

        let err = AppRegistrySource::new("definitely-not-a-real-python")
            .discover(&layout)
            .unwrap_err();
        assert!(matches!(err, FormworkError::Discovery { .. }));
    }
}
