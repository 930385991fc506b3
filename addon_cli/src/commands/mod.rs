pub mod export;
pub mod init;
pub mod preview;
pub mod templates;

use std::path::Path;

use addon_model::Project;
use tracing::debug;

/// Load a project file, turning errors into a printable message.
fn load_project(path: &Path) -> Result<Project, String> {
    debug!(path = %path.display(), "loading project");
    Project::load(path).map_err(|e| format!("cannot load {}: {e}", path.display()))
}
