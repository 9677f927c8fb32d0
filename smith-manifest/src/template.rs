use std::path::{Path, PathBuf};

use draftsmith_core::{GeneratedFile, Overwrite};

use crate::{MANIFEST_FILE, Manifest, Result};

/// The draftsmith.toml written by `smith init`. Never replaces an existing file.
#[derive(Debug, Clone)]
pub struct ManifestTemplate {
    content: String,
}

impl ManifestTemplate {
    /// Render `manifest`, rejecting one that would not load back.
    pub fn new(manifest: Manifest) -> Result<Self> {
        let content = manifest.to_toml()?;
        Manifest::from_str_with_filename(&content, MANIFEST_FILE)?;
        Ok(Self { content })
    }
}

impl GeneratedFile for ManifestTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
