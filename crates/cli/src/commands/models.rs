use formwork_core::FormworkError;
use formwork_introspect::source_for;

pub fn run(source: Option<String>, app: Option<String>, json: bool) -> Result<(), FormworkError> {
    let cwd = std::env::current_dir()?;
    let (config, layout) = super::generate::resolve(&cwd, source, app)?;

    let source_impl = source_for(&config);
    let discovery = source_impl.discover(&layout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&discovery)?);
        return Ok(());
    }

    if discovery.models.is_empty() {
        println!(
            "No models discovered for app '{}' ({})",
            layout.app_name,
            source_impl.describe()
        );
        return Ok(());
    }

    for model in &discovery.models {
        println!("{}", console::style(&model.name).bold());
        for field in &model.fields {
            println!("    {} ({})", field.name, field.kind);
        }
    }

    if !discovery.skipped.is_empty() {
        println!();
        println!("Skipped fragments:");
        for fragment in &discovery.skipped {
            println!("    line {}: {}", fragment.line, fragment.text);
        }
    }

    Ok(())
}
