//! Pack manifests: identity, version and module declarations.

use addon_model::{ManifestConfig, VersionTriple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::ExportResult;
use crate::ids::IdSource;

/// Manifest schema version written to every manifest.
pub const MANIFEST_FORMAT_VERSION: u32 = 2;

/// A `manifest.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDoc {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ManifestDependency>,
    pub metadata: ManifestMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: Uuid,
    pub version: VersionTriple,
    pub min_engine_version: VersionTriple,
}

/// Capability a module declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Behavior content.
    Data,
    /// Client assets.
    Resources,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub uuid: Uuid,
    pub version: VersionTriple,
}

/// Link to another pack that must be loaded alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDependency {
    pub uuid: Uuid,
    pub version: VersionTriple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub authors: Vec<String>,
    /// Tool name -> tool versions.
    pub generated_with: BTreeMap<String, Vec<String>>,
}

impl ManifestDoc {
    /// Header identifier, for dependency links.
    pub fn uuid(&self) -> Uuid {
        self.header.uuid
    }
}

/// Builds both manifests from one validated configuration.
#[derive(Debug, Clone)]
pub struct ManifestSynthesizer<'a> {
    config: &'a ManifestConfig,
    version: VersionTriple,
    min_engine_version: VersionTriple,
}

impl<'a> ManifestSynthesizer<'a> {
    /// Parse the configuration's version strings.
    ///
    /// Fails with a format error before any manifest is built.
    pub fn new(config: &'a ManifestConfig) -> ExportResult<Self> {
        Ok(Self {
            config,
            version: config.parsed_pack_version()?,
            min_engine_version: config.parsed_min_engine_version()?,
        })
    }

    /// Manifest of the behavior pack.
    pub fn behavior(&self, ids: &mut dyn IdSource) -> ManifestDoc {
        self.build(
            self.config.effective_pack_name().to_string(),
            ModuleType::Data,
            ids.next_id("behavior.header"),
            ids.next_id("behavior.module"),
            None,
        )
    }

    /// Manifest of the resource pack, optionally depending on a behavior pack.
    pub fn resources(&self, ids: &mut dyn IdSource, behavior_pack: Option<Uuid>) -> ManifestDoc {
        self.build(
            format!("{} Resources", self.config.effective_pack_name()),
            ModuleType::Resources,
            ids.next_id("resources.header"),
            ids.next_id("resources.module"),
            behavior_pack,
        )
    }

    fn build(
        &self,
        name: String,
        module_type: ModuleType,
        header_uuid: Uuid,
        module_uuid: Uuid,
        dependency: Option<Uuid>,
    ) -> ManifestDoc {
        ManifestDoc {
            format_version: MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name,
                description: self.config.pack_description.clone(),
                uuid: header_uuid,
                version: self.version,
                min_engine_version: self.min_engine_version,
            },
            modules: vec![ManifestModule {
                module_type,
                uuid: module_uuid,
                version: self.version,
            }],
            dependencies: dependency
                .map(|uuid| ManifestDependency {
                    uuid,
                    version: self.version,
                })
                .into_iter()
                .collect(),
            metadata: ManifestMetadata {
                authors: vec![self.config.effective_author().to_string()],
                generated_with: BTreeMap::from([(
                    env!("CARGO_PKG_NAME").to_string(),
                    vec![env!("CARGO_PKG_VERSION").to_string()],
                )]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::ids::{NilIds, RandomIds};
    use serde_json::json;

    fn config() -> ManifestConfig {
        ManifestConfig::new("Super Sword Pack")
            .with_description("Adds a sword")
            .with_version("1.2.3")
            .with_min_engine_version("1.20.0")
            .with_author("Alex")
    }

    #[test]
    fn test_behavior_manifest_shape() {
        let config = config();
        let manifest = ManifestSynthesizer::new(&config).unwrap().behavior(&mut NilIds);
        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(value["format_version"], json!(2));
        assert_eq!(value["header"]["name"], json!("Super Sword Pack"));
        assert_eq!(value["header"]["version"], json!([1, 2, 3]));
        assert_eq!(value["header"]["min_engine_version"], json!([1, 20, 0]));
        assert_eq!(value["modules"][0]["type"], json!("data"));
        assert_eq!(value["modules"][0]["version"], json!([1, 2, 3]));
        assert_eq!(value["metadata"]["authors"], json!(["Alex"]));
        assert!(value.get("dependencies").is_none());
    }

    #[test]
    fn test_resource_manifest_links_behavior_pack() {
        let config = config();
        let synth = ManifestSynthesizer::new(&config).unwrap();
        let behavior = synth.behavior(&mut RandomIds);
        let resources = synth.resources(&mut RandomIds, Some(behavior.uuid()));

        assert_eq!(resources.header.name, "Super Sword Pack Resources");
        assert_eq!(resources.modules[0].module_type, ModuleType::Resources);
        assert_eq!(resources.dependencies.len(), 1);
        assert_eq!(resources.dependencies[0].uuid, behavior.uuid());
        assert_eq!(resources.dependencies[0].version.parts(), [1, 2, 3]);
        assert_ne!(resources.uuid(), behavior.uuid());
    }

    #[test]
    fn test_resource_manifest_without_link() {
        let config = config();
        let resources = ManifestSynthesizer::new(&config).unwrap().resources(&mut RandomIds, None);
        assert!(resources.dependencies.is_empty());
    }

    #[test]
    fn test_header_and_module_ids_differ() {
        let config = config();
        let manifest = ManifestSynthesizer::new(&config).unwrap().behavior(&mut RandomIds);
        assert_ne!(manifest.header.uuid, manifest.modules[0].uuid);
    }

    #[test]
    fn test_anonymous_author() {
        let config = config().with_author("");
        let manifest = ManifestSynthesizer::new(&config).unwrap().behavior(&mut NilIds);
        assert_eq!(manifest.metadata.authors, vec!["Anonymous".to_string()]);
    }

    #[test]
    fn test_bad_version_is_format_error() {
        let config = config().with_min_engine_version("1.twenty.0");
        let err = ManifestSynthesizer::new(&config).unwrap_err();
        assert!(matches!(err, ExportError::Format(_)));
        assert!(err.to_string().contains("min_engine_version"));
    }

    #[test]
    fn test_manifest_round_trips() {
        let config = config();
        let synth = ManifestSynthesizer::new(&config).unwrap();
        let behavior = synth.behavior(&mut RandomIds);
        let manifest = synth.resources(&mut RandomIds, Some(behavior.uuid()));

        let text = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: ManifestDoc = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, manifest);
    }
}
