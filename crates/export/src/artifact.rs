//! Descriptions of the files an export run produced

use std::path::{Path, PathBuf};

/// Container format of a written artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Single-resolution PNG
    Png,
    /// Windows multi-resolution icon
    Ico,
    /// Apple multi-resolution icon
    Icns,
}

/// One file written into the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name inside the output directory
    pub name: String,
    pub path: PathBuf,
    pub format: ArtifactFormat,
    /// Edge lengths stored in the file, ascending
    pub sizes: Vec<u32>,
}

impl Artifact {
    pub fn png(path: &Path, size: u32) -> Self {
        Self::new(path, ArtifactFormat::Png, vec![size])
    }

    pub fn new(path: &Path, format: ArtifactFormat, mut sizes: Vec<u32>) -> Self {
        sizes.sort_unstable();
        sizes.dedup();
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            format,
            sizes,
        }
    }
}

/// Everything one call to `Exporter::export` wrote, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub artifacts: Vec<Artifact>,
}

impl ExportReport {
    /// File names in write order
    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.name.as_str()).collect()
    }

    /// Look up an artifact by file name
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    pub(crate) fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_from_path() {
        let artifact = Artifact::png(Path::new("/tmp/out/32x32.png"), 32);
        assert_eq!(artifact.name, "32x32.png");
        assert_eq!(artifact.format, ArtifactFormat::Png);
        assert_eq!(artifact.sizes, vec![32]);
    }

    #[test]
    fn test_container_sizes_sorted() {
        let artifact = Artifact::new(Path::new("icon.ico"), ArtifactFormat::Ico, vec![64, 16, 32, 16]);
        assert_eq!(artifact.sizes, vec![16, 32, 64]);
    }

    #[test]
    fn test_report_lookup() {
        let mut report = ExportReport::default();
        report.push(Artifact::png(Path::new("a.png"), 8));
        report.push(Artifact::png(Path::new("b.png"), 16));
        assert_eq!(report.names(), vec!["a.png", "b.png"]);
        assert_eq!(report.get("b.png").map(|a| a.sizes.clone()), Some(vec![16]));
        assert!(report.get("c.png").is_none());
    }
}
