use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// How to treat a file that already exists at the target path
    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> io::Result<WriteResult> {
        write_with_rule(&self.path(base), &self.render(), self.overwrite())
    }
}

/// Host primitive that makes named content available to the user.
///
/// Each call is independent: a sink never groups saves into a transaction,
/// and a failed save leaves previously saved files in place.
pub trait FileSink {
    /// Save `content` under `name`.
    fn save(&self, name: &str, content: &str) -> io::Result<WriteResult>;
}

/// A [`FileSink`] that writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    overwrite: Overwrite,
}

impl DirectorySink {
    /// Create a sink rooted at `root` that always overwrites.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Set the rule for files that already exist.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirectorySink {
    /// `name` must be a bare file name; anything that would resolve outside
    /// the root is rejected with [`io::ErrorKind::InvalidInput`].
    fn save(&self, name: &str, content: &str) -> io::Result<WriteResult> {
        let mut components = Path::new(name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{name}' is not a plain file name"),
            ));
        }
        write_with_rule(&self.root.join(name), content, self.overwrite)
    }
}

fn write_with_rule(path: &Path, content: &str, overwrite: Overwrite) -> io::Result<WriteResult> {
    match overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}
