use std::path::Path;

use formwork_codegen::ScaffoldGenerator;
use formwork_core::{FormworkError, GeneratorConfig, ProjectLayout, SourceStrategy};
use formwork_introspect::source_for;

pub fn run(source: Option<String>, app: Option<String>) -> Result<(), FormworkError> {
    let cwd = std::env::current_dir()?;
    let (config, layout) = resolve(&cwd, source, app)?;

    if config.source == SourceStrategy::Registry {
        println!("📌 Django project detected: {}", layout.project_name);
    }
    println!("📌 Generating CRUD for app: {}", layout.app_name);

    let discovery = source_for(&config).discover(&layout)?;

    if config.source == SourceStrategy::Scan && !discovery.models.is_empty() {
        let names: Vec<_> = discovery.models.iter().map(|m| m.name.as_str()).collect();
        println!("📋 Discovered models: {}", names.join(", "));
    }

    ScaffoldGenerator::new(layout.clone(), discovery.models).generate_all()?;

    println!(
        "{} CRUD scaffolding for app '{}' generated",
        console::style("✓").green().bold(),
        layout.app_name
    );
    Ok(())
}

/// Merge `formwork.toml` with command-line overrides and resolve the
/// filesystem layout for the selected strategy. The registry strategy
/// requires an enclosing Django project; the scan strategy treats the
/// invocation directory as the app.
pub(crate) fn resolve(
    cwd: &Path,
    source: Option<String>,
    app: Option<String>,
) -> Result<(GeneratorConfig, ProjectLayout), FormworkError> {
    let mut config = GeneratorConfig::load(cwd)?;
    if let Some(source) = source {
        config.source = source.parse()?;
    }
    if let Some(app) = app {
        config.app = Some(app);
    }

    let layout = match config.source {
        SourceStrategy::Registry => ProjectLayout::discover(cwd, config.app.as_deref())?,
        SourceStrategy::Scan => ProjectLayout::standalone(cwd, config.app.as_deref())?,
    };

    Ok((config, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_to_scan_in_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("blog");
        std::fs::create_dir_all(&app).unwrap();

        let (config, layout) = resolve(&app, None, None).unwrap();
        assert_eq!(config.source, SourceStrategy::Scan);
        assert_eq!(layout.app_name, "blog");
    }

    #[test]
    fn test_resolve_cli_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("blog");
        std::fs::create_dir_all(&app).unwrap();
        std::fs::write(
            app.join("formwork.toml"),
            "[generator]\nsource = \"registry\"\napp = \"blog\"\n",
        )
        .unwrap();

        let (config, layout) = resolve(&app, Some("scan".into()), Some("shop".into())).unwrap();
        assert_eq!(config.source, SourceStrategy::Scan);
        assert_eq!(layout.app_name, "shop");
    }

    #[test]
    fn test_resolve_registry_requires_project_marker() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("blog");
        std::fs::create_dir_all(&app).unwrap();

        let err = resolve(&app, Some("registry".into()), None).unwrap_err();
        assert!(matches!(err, FormworkError::Discovery { .. }));
    }
}
