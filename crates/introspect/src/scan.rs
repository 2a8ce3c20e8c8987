use formwork_core::project::MODELS_FILE;
use formwork_core::{FieldDescriptor, FormworkError, ModelDescriptor, ProjectLayout};
use regex::Regex;

use crate::{Discovery, ModelSource, SkippedFragment};

/// Best-effort text scan of an app's `models.py`.
///
/// This is a pattern matcher, not a Python parser: it recognizes
/// `class <Name>(models.Model):` declarations and, inside each class
/// block, line-anchored `<field> = <container>.<Type>(` assignments.
/// Anything else is skipped. Class-body assignments that do not have
/// the recognizable shape are recorded as skipped fragments rather
/// than guessed at.
pub struct ModelFileScan;

impl ModelFileScan {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_source(&self, source: &str) -> Result<Discovery, FormworkError> {
        let model_re = compile(r"^class\s+([A-Za-z_]\w*)\s*\(\s*models\.Model\s*\)\s*:")?;
        let class_re = compile(r"^class\s")?;
        let field_re = compile(r"^\s+([A-Za-z_]\w*)\s*=\s*[A-Za-z_]\w*\.([A-Za-z_]\w*)\(")?;
        // Assignments at class-body indentation; deeper indentation is
        // argument continuation or method-body code.
        let assignment_re = compile(r"^(?:\s{4}|\t)[A-Za-z_]\w*\s*=")?;

        let mut discovery = Discovery::default();
        let mut current: Option<ModelDescriptor> = None;

        for (idx, line) in source.lines().enumerate() {
            if let Some(caps) = model_re.captures(line) {
                if let Some(model) = current.take() {
                    discovery.models.push(model);
                }
                current = Some(ModelDescriptor::new(&caps[1]));
                continue;
            }

            // Any other top-level class declaration ends the block.
            if class_re.is_match(line) {
                if let Some(model) = current.take() {
                    discovery.models.push(model);
                }
                continue;
            }

            let Some(model) = current.as_mut() else {
                continue;
            };

            if let Some(caps) = field_re.captures(line) {
                model.fields.push(FieldDescriptor::new(&caps[1], &caps[2]));
            } else if assignment_re.is_match(line) {
                discovery.skipped.push(SkippedFragment {
                    line: idx + 1,
                    text: line.trim().to_string(),
                });
            }
        }

        if let Some(model) = current.take() {
            discovery.models.push(model);
        }

        Ok(discovery)
    }
}

impl Default for ModelFileScan {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSource for ModelFileScan {
    fn discover(&self, layout: &ProjectLayout) -> Result<Discovery, FormworkError> {
        let path = layout.models_path();
        if !path.exists() {
            eprintln!(
                "⚠ No {} found in {} - generating empty scaffolding",
                MODELS_FILE,
                layout.app_dir.display()
            );
            return Ok(Discovery::default());
        }

        let source = std::fs::read_to_string(&path)?;
        self.scan_source(&source)
    }

    fn describe(&self) -> &'static str {
        "models.py scan"
    }
}

fn compile(pattern: &str) -> Result<Regex, FormworkError> {
    Regex::new(pattern)
        .map_err(|e| FormworkError::discovery(format!("Invalid scan pattern: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_book_model() {
        let source = "class Book(models.Model):\n    title = models.CharField(max_length=100)\n    pages = models.IntegerField()\n";
        let discovery = ModelFileScan::new().scan_source(source).unwrap();

        assert_eq!(discovery.models.len(), 1);
        let book = &discovery.models[0];
        assert_eq!(book.name, "Book");
        assert_eq!(
            book.fields,
            vec![
                FieldDescriptor::new("title", "CharField"),
                FieldDescriptor::new("pages", "IntegerField"),
            ]
        );
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_scan_multiple_models_in_order() {
        let source = r#"from django.db import models


class Author(models.Model):
    name = models.CharField(max_length=50)

    def __str__(self):
        return self.name


class Book(models.Model):
    title = models.CharField(max_length=100)
    author = models.ForeignKey(Author, on_delete=models.CASCADE)
"#;
        let discovery = ModelFileScan::new().scan_source(source).unwrap();

        let names: Vec<_> = discovery.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Author", "Book"]);
        assert_eq!(discovery.models[1].fields[1].kind, "ForeignKey");
    }

    #[test]
    fn test_custom_base_class_is_skipped() {
        let source = r#"class Book(models.Model):
    title = models.CharField(max_length=100)


class Legacy(BaseModel):
    code = models.CharField(max_length=10)
"#;
        let discovery = ModelFileScan::new().scan_source(source).unwrap();

        assert_eq!(discovery.models.len(), 1);
        assert_eq!(discovery.models[0].name, "Book");
        // The custom-base block must not leak fields into Book.
        assert_eq!(discovery.models[0].fields.len(), 1);
    }

    #[test]
    fn test_unrecognized_assignments_are_recorded() {
        let source = "class Book(models.Model):\n    title = \\\n        models.CharField(max_length=100)\n    count = 5\n";
        let discovery = ModelFileScan::new().scan_source(source).unwrap();

        assert_eq!(discovery.models.len(), 1);
        assert!(discovery.models[0].fields.is_empty());
        let skipped: Vec<_> = discovery.skipped.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(skipped, vec!["title = \\", "count = 5"]);
        assert_eq!(discovery.skipped[0].line, 2);
    }

    #[test]
    fn test_nested_meta_is_not_a_field() {
        let source = r#"class Book(models.Model):
    title = models.CharField(max_length=100)

    class Meta:
        ordering = ['title']
"#;
        let discovery = ModelFileScan::new().scan_source(source).unwrap();

        assert_eq!(discovery.models[0].fields.len(), 1);
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_missing_models_file_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::standalone(temp_dir.path(), Some("blog")).unwrap();

        let discovery = ModelFileScan::new().discover(&layout).unwrap();
        assert!(discovery.models.is_empty());
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_discover_reads_models_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("models.py"),
            "class Tag(models.Model):\n    label = models.SlugField()\n",
        )
        .unwrap();
        let layout = ProjectLayout::standalone(temp_dir.path(), None).unwrap();

        let discovery = ModelFileScan::new().discover(&layout).unwrap();
        assert_eq!(discovery.models[0].name, "Tag");
        assert_eq!(discovery.models[0].fields[0].kind, "SlugField");
    }
}
