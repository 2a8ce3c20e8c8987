use std::path::{Path, PathBuf};

use crate::error::FormworkError;

/// Marker file identifying the root of a Django project.
pub const PROJECT_MARKER: &str = "manage.py";

/// Model-definitions file scanned by the text strategy.
pub const MODELS_FILE: &str = "models.py";

/// File name of the shared page skeleton all generated templates extend.
pub const BASE_LAYOUT_FILE: &str = "base.html";

/// Resolved filesystem layout for one generator run. Derived once at
/// startup and immutable afterwards; every output path the emitters
/// touch comes from here.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub project_name: String,
    pub project_root: PathBuf,
    pub app_name: String,
    pub app_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub forms_path: PathBuf,
    pub views_path: PathBuf,
    pub urls_path: PathBuf,
    pub base_layout_path: PathBuf,
}

impl ProjectLayout {
    /// Locate the enclosing Django project by walking parent directories
    /// from `start` until one contains `manage.py`, then derive all
    /// output paths for the target app.
    ///
    /// Fails before any discovery or emission when no ancestor carries
    /// the marker.
    pub fn discover(start: &Path, app_override: Option<&str>) -> Result<Self, FormworkError> {
        let start = absolute(start)?;
        let project_root = find_project_root(&start).ok_or_else(|| {
            FormworkError::discovery(format!(
                "No Django project with '{}' found above {}",
                PROJECT_MARKER,
                start.display()
            ))
        })?;

        let project_name = dir_basename(&project_root)?;
        let app_name = match app_override {
            Some(name) => name.to_string(),
            None => dir_basename(&start)?,
        };
        let app_dir = project_root.join(&app_name);

        Ok(Self::derive(project_root, project_name, app_name, app_dir))
    }

    /// Layout for the scan strategy: no live project is required, the
    /// invocation directory is both app root and app name.
    pub fn standalone(dir: &Path, app_override: Option<&str>) -> Result<Self, FormworkError> {
        let dir = absolute(dir)?;
        let app_name = match app_override {
            Some(name) => name.to_string(),
            None => dir_basename(&dir)?,
        };

        Ok(Self::derive(
            dir.clone(),
            app_name.clone(),
            app_name,
            dir,
        ))
    }

    fn derive(
        project_root: PathBuf,
        project_name: String,
        app_name: String,
        app_dir: PathBuf,
    ) -> Self {
        let templates_dir = app_dir.join("templates").join(&app_name);
        let base_layout_path = app_dir.join("templates").join(BASE_LAYOUT_FILE);

        Self {
            project_name,
            project_root,
            forms_path: app_dir.join("forms.py"),
            views_path: app_dir.join("views.py"),
            urls_path: app_dir.join("urls.py"),
            templates_dir,
            base_layout_path,
            app_name,
            app_dir,
        }
    }

    /// Path of the app's `models.py`, as scanned by the text strategy.
    pub fn models_path(&self) -> PathBuf {
        self.app_dir.join(MODELS_FILE)
    }

    /// Create the per-app template directory if absent. The only
    /// directory-creation side effect in the generator.
    pub fn ensure_templates_dir(&self) -> Result<(), FormworkError> {
        std::fs::create_dir_all(&self.templates_dir)?;
        Ok(())
    }
}

fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(PROJECT_MARKER).is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

fn dir_basename(dir: &Path) -> Result<String, FormworkError> {
    dir.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| {
            FormworkError::validation(format!("Cannot derive a name from {}", dir.display()))
        })
}

fn absolute(path: &Path) -> Result<PathBuf, FormworkError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_walks_up_to_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("mysite");
        let app = root.join("library");
        std::fs::create_dir_all(&app).unwrap();
        std::fs::write(root.join(PROJECT_MARKER), "").unwrap();

        let layout = ProjectLayout::discover(&app, None).unwrap();
        assert_eq!(layout.project_name, "mysite");
        assert_eq!(layout.project_root, root);
        assert_eq!(layout.app_name, "library");
        assert_eq!(layout.app_dir, app);
        assert_eq!(layout.templates_dir, app.join("templates/library"));
        assert_eq!(layout.base_layout_path, app.join("templates/base.html"));
        assert_eq!(layout.forms_path, app.join("forms.py"));
        assert_eq!(layout.views_path, app.join("views.py"));
        assert_eq!(layout.urls_path, app.join("urls.py"));
    }

    #[test]
    fn test_discover_fails_without_marker() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("orphan");
        std::fs::create_dir_all(&app).unwrap();

        let err = ProjectLayout::discover(&app, None).unwrap_err();
        assert!(matches!(err, FormworkError::Discovery { .. }));
    }

    #[test]
    fn test_discover_honors_app_override() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("mysite");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(PROJECT_MARKER), "").unwrap();

        let layout = ProjectLayout::discover(&root, Some("shop")).unwrap();
        assert_eq!(layout.app_name, "shop");
        assert_eq!(layout.app_dir, root.join("shop"));
    }

    #[test]
    fn test_standalone_uses_dir_as_app() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("blog");
        std::fs::create_dir_all(&app).unwrap();

        let layout = ProjectLayout::standalone(&app, None).unwrap();
        assert_eq!(layout.app_name, "blog");
        assert_eq!(layout.project_name, "blog");
        assert_eq!(layout.app_dir, app);
        assert_eq!(layout.models_path(), app.join("models.py"));
    }

    #[test]
    fn test_ensure_templates_dir_creates_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("blog");
        std::fs::create_dir_all(&app).unwrap();

        let layout = ProjectLayout::standalone(&app, None).unwrap();
        layout.ensure_templates_dir().unwrap();
        assert!(app.join("templates/blog").is_dir());
    }
}
