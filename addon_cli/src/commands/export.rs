use std::path::Path;

use addon_packager::{Exporter, RandomIds, StableIds};

pub fn run(project_path: &Path, out_dir: &Path, stable_ids: bool) -> Result<(), String> {
    let project = super::load_project(project_path)?;
    let manifest = &project.manifest;

    let result = if stable_ids {
        Exporter::new(StableIds::for_pack(&manifest.slug())).export(
            manifest,
            &project.entities,
            &project.items,
        )
    } else {
        Exporter::new(RandomIds).export(manifest, &project.entities, &project.items)
    };
    let archive = result.map_err(|e| e.to_string())?;

    let path = archive.write_to(out_dir).map_err(|e| e.to_string())?;

    println!("  Exported '{}' ({}).", manifest.effective_pack_name(), manifest.addon_type);
    println!();
    println!(
        "  {} entities, {} items, {} bytes",
        project.entities.len(),
        project.items.len(),
        archive.len()
    );
    println!("  -> {}", path.display());

    Ok(())
}
