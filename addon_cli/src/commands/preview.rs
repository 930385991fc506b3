use std::path::Path;

pub fn run(project_path: &Path) -> Result<(), String> {
    let project = super::load_project(project_path)?;
    let preview = addon_packager::preview_manifest(&project.manifest).map_err(|e| e.to_string())?;
    println!("{preview}");
    Ok(())
}
