//! Manifest discovery and loading.

use anyhow::{Context, Result, bail};
use annot::ClassRegistry;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Expand `paths` into manifest files.
///
/// Files are taken as given. Directories are searched recursively for
/// `*.json` files, sorted by path so load order (and duplicate-class
/// reporting) is deterministic.
pub fn discover_manifests(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    for path in paths {
        if path.is_file() {
            manifests.push(path.clone());
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry
                    .with_context(|| format!("failed to read directory {}", path.display()))?;
                if entry.file_type().is_file() && is_json(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            debug!(dir = %path.display(), count = found.len(), "discovered manifests");
            manifests.extend(found);
        } else {
            bail!("manifest path not found: {}", path.display());
        }
    }

    Ok(manifests)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load every manifest under `paths` into one registry.
pub fn load_registry(paths: &[PathBuf]) -> Result<ClassRegistry> {
    let manifests = discover_manifests(paths)?;
    if manifests.is_empty() {
        bail!("no class manifests found");
    }

    let mut registry = ClassRegistry::new();
    for manifest in &manifests {
        let source = std::fs::read_to_string(manifest)
            .with_context(|| format!("failed to read {}", manifest.display()))?;
        registry
            .load_manifest(&source)
            .with_context(|| format!("failed to load manifest {}", manifest.display()))?;
    }

    debug!(
        manifests = manifests.len(),
        classes = registry.len(),
        "loaded class registry"
    );
    Ok(registry)
}
