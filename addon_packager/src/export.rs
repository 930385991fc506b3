//! Export entry points.
//!
//! An export runs in four steps:
//! 1. **Validate**: parse manifest versions and range-check every record
//! 2. **Synthesize**: build the documents for each requested pack
//! 3. **Assemble**: place them under the pack roots
//! 4. **Archive**: zip the package
//!
//! Inputs are only borrowed, and everything built along the way is owned
//! by the call. Dropping the call before step 4 leaves nothing behind.

use addon_model::{Entity, Item, ManifestConfig, Project};
use tracing::{debug, info, warn};

use crate::documents::{
    ClientEntityDoc, Document, EntityBehaviorDoc, ItemBehaviorDoc, ItemTextureDoc, ManifestDoc,
    ManifestSynthesizer, RecipeDoc,
};
use crate::error::ExportResult;
use crate::ids::{IdSource, NilIds, RandomIds};
use crate::package::{Archive, PackKind, Package, PackageAssembler, PlacedDocument, MANIFEST_FILE};
use crate::validate;

/// Export with fresh random identifiers.
pub fn export_package(
    config: &ManifestConfig,
    entities: &[Entity],
    items: &[Item],
) -> ExportResult<Archive> {
    Exporter::new(RandomIds).export(config, entities, items)
}

/// Export a whole project with fresh random identifiers.
pub fn export_project(project: &Project) -> ExportResult<Archive> {
    export_package(&project.manifest, &project.entities, &project.items)
}

/// Behavior manifest for the current configuration, as pretty JSON.
///
/// Identifiers are left as nil UUIDs: the preview is for display only and
/// never consumes randomness.
pub fn preview_manifest(config: &ManifestConfig) -> ExportResult<String> {
    let manifest = ManifestSynthesizer::new(config)?.behavior(&mut NilIds);
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Runs exports with a chosen identifier source.
#[derive(Debug, Clone)]
pub struct Exporter<I: IdSource> {
    ids: I,
}

impl<I: IdSource> Exporter<I> {
    /// Create an exporter drawing identifiers from `ids`.
    pub fn new(ids: I) -> Self {
        Self { ids }
    }

    /// Build and zip the full package.
    pub fn export(
        &mut self,
        config: &ManifestConfig,
        entities: &[Entity],
        items: &[Item],
    ) -> ExportResult<Archive> {
        let package = self.package(config, entities, items)?;
        let archive = Archive::from_package(&package)?;

        info!(
            file = archive.file_name(),
            documents = package.documents().len(),
            bytes = archive.len(),
            "export finished"
        );
        Ok(archive)
    }

    /// Build the package without zipping it.
    pub fn package(
        &mut self,
        config: &ManifestConfig,
        entities: &[Entity],
        items: &[Item],
    ) -> ExportResult<Package> {
        let manifests = ManifestSynthesizer::new(config)?;
        for entity in entities {
            validate::entity(entity)?;
        }
        for item in items {
            validate::item(item)?;
        }

        if config.pack_name.trim().is_empty() {
            warn!("pack name is empty, using \"{}\"", config.effective_pack_name());
        }

        let slug = config.slug();
        info!(
            slug = %slug,
            addon_type = %config.addon_type,
            entities = entities.len(),
            items = items.len(),
            "export started"
        );

        let mut assembler = PackageAssembler::new(slug, config.addon_type);

        let mut behavior_pack = None;
        if config.addon_type.includes_behavior() {
            let manifest = manifests.behavior(&mut self.ids);
            behavior_pack = Some(manifest.uuid());
            for placed in behavior_documents(manifest, entities, items)? {
                assembler.add(placed)?;
            }
        }

        if config.addon_type.includes_resources() {
            let manifest = manifests.resources(&mut self.ids, behavior_pack);
            assembler.add(PlacedDocument::new(
                PackKind::Resources,
                MANIFEST_FILE,
                Document::Manifest(manifest),
            ))?;
            assembler.add_directory(PackKind::Resources, "textures/entity")?;
            assembler.add_directory(PackKind::Resources, "textures/items")?;
            for placed in resource_documents(config, entities, items)? {
                assembler.add(placed)?;
            }
        }

        assembler.finish()
    }
}

fn behavior_documents(
    manifest: ManifestDoc,
    entities: &[Entity],
    items: &[Item],
) -> ExportResult<Vec<PlacedDocument>> {
    let mut placed = vec![PlacedDocument::new(
        PackKind::Behavior,
        MANIFEST_FILE,
        Document::Manifest(manifest),
    )];

    for entity in entities {
        debug!(identifier = entity.effective_identifier(), "synthesizing entity behavior");
        placed.push(PlacedDocument::new(
            PackKind::Behavior,
            format!("entities/{}.json", entity.local_name()),
            Document::EntityBehavior(EntityBehaviorDoc::from_entity(entity)),
        ));
    }

    for item in items {
        debug!(identifier = item.effective_identifier(), "synthesizing item behavior");
        placed.push(PlacedDocument::new(
            PackKind::Behavior,
            format!("items/{}.json", item.local_name()),
            Document::ItemBehavior(ItemBehaviorDoc::from_item(item)),
        ));

        if let Some(recipe) = RecipeDoc::from_item(item)? {
            placed.push(PlacedDocument::new(
                PackKind::Behavior,
                format!("recipes/{}_recipe.json", item.local_name()),
                Document::Recipe(recipe),
            ));
        }
    }

    Ok(placed)
}

fn resource_documents(
    config: &ManifestConfig,
    entities: &[Entity],
    items: &[Item],
) -> ExportResult<Vec<PlacedDocument>> {
    let mut placed: Vec<PlacedDocument> = entities
        .iter()
        .map(|entity| {
            PlacedDocument::new(
                PackKind::Resources,
                format!("entity/{}.entity.json", entity.local_name()),
                Document::ClientEntity(ClientEntityDoc::from_entity(entity)),
            )
        })
        .collect();

    if let Some(textures) = ItemTextureDoc::from_items(config.effective_pack_name(), items)? {
        placed.push(PlacedDocument::new(
            PackKind::Resources,
            "textures/item_texture.json",
            Document::ItemTextures(textures),
        ));
    }

    Ok(placed)
}
