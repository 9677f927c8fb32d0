use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Conventional manifest filename.
pub const MANIFEST_FILE: &str = "draftsmith.toml";

/// A draftsmith.toml file with both raw content and parsed manifest.
#[derive(Debug, Clone)]
pub struct DraftsmithToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl DraftsmithToml {
    /// Open and parse a draftsmith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open `dir/draftsmith.toml` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    /// The manifest in `dir`, or the defaults when there is none.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Manifest> {
        Ok(Self::discover(dir)?
            .map(|file| file.manifest)
            .unwrap_or_default())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the file; relative paths in the manifest resolve against it.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
