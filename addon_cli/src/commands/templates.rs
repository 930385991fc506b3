use addon_model::templates;

pub fn run() -> Result<(), String> {
    for template in templates::all() {
        println!("  {:<14} {}", template.id, template.name);
        println!(
            "  {:<14} {} ({} entities, {} items)",
            "",
            template.summary,
            template.entities.len(),
            template.items.len()
        );
    }
    Ok(())
}
