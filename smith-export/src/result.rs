use serde::Serialize;

/// A secondary file produced alongside the primary component file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuxiliaryFile {
    pub name: String,
    pub content: String,
}

impl AuxiliaryFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Output of one export call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    pub primary_file_content: String,
    pub primary_file_name: String,
    pub auxiliary_files: Vec<AuxiliaryFile>,
}

impl ExportResult {
    /// All files as `(name, content)` pairs, primary first.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((
            self.primary_file_name.as_str(),
            self.primary_file_content.as_str(),
        ))
        .chain(
            self.auxiliary_files
                .iter()
                .map(|f| (f.name.as_str(), f.content.as_str())),
        )
    }

    /// Number of files, primary included.
    pub fn file_count(&self) -> usize {
        1 + self.auxiliary_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_primary_first() {
        let result = ExportResult {
            primary_file_content: "<p></p>".to_string(),
            primary_file_name: "Hero.tsx".to_string(),
            auxiliary_files: vec![AuxiliaryFile::new("Hero.css", ".a{}")],
        };

        let names: Vec<_> = result.files().map(|(name, _)| name).collect();
        assert_eq!(names, ["Hero.tsx", "Hero.css"]);
        assert_eq!(result.file_count(), 2);
    }
}
