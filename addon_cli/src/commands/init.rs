use std::path::Path;

use addon_model::templates;

pub fn run(template_id: &str, output: &Path) -> Result<(), String> {
    if output.exists() {
        return Err(format!("'{}' already exists", output.display()));
    }

    let template = templates::find(template_id).ok_or_else(|| {
        format!("unknown template '{template_id}' (run `addon templates` to list them)")
    })?;

    template
        .to_project()
        .save(output)
        .map_err(|e| format!("cannot write {}: {e}", output.display()))?;

    println!("Created project '{}' in {}", template.pack_name, output.display());
    println!();
    println!("Next:");
    println!("  addon preview {}", output.display());
    println!("  addon export {}", output.display());

    Ok(())
}
