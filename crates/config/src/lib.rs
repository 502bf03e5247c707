//! Shared configuration for icongen
//!
//! This crate is the single source of truth for which artifacts get written,
//! at which pixel sizes and under which file names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge length of the master canvas
pub const DEFAULT_MASTER_EDGE: u32 = 1024;

/// Largest size an ICO directory entry can describe
pub const MAX_ICO_SIZE: u32 = 256;

/// Windows icon sizes, ascending; the first becomes the primary frame
pub const DEFAULT_ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Rendered sizes that feed the macOS iconset
pub const DEFAULT_ICNS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Sizes up to this get a `icon_NxN.png` entry
pub const DEFAULT_ICNS_BASE_MAX: u32 = 512;

/// Sizes from this up also serve as the `@2x` entry of half their size
pub const DEFAULT_ICNS_RETINA_MIN: u32 = 32;

pub const ICO_FILE_NAME: &str = "icon.ico";
pub const ICNS_FILE_NAME: &str = "icon.icns";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No sizes configured for {0}")]
    EmptySizes(&'static str),
    #[error("Zero pixel size for {0}")]
    ZeroSize(String),
    #[error("ICO sizes must be strictly ascending")]
    IcoSizesNotAscending,
    #[error("ICO size {size} exceeds {}", MAX_ICO_SIZE)]
    IcoSizeTooLarge { size: u32 },
    #[error("Duplicate artifact name: {0}")]
    DuplicateName(String),
}

/// A single plain PNG output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PngTarget {
    /// File name inside the output directory
    pub name: String,
    /// Edge length in pixels
    pub size: u32,
}

impl PngTarget {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// macOS iconset layout and packaging tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcnsConfig {
    /// Rendered sizes placed in the iconset
    pub sizes: Vec<u32>,
    /// Largest size written under its own name
    pub base_max: u32,
    /// Smallest size also written as the `@2x` of its half
    pub retina_min: u32,
    /// Stem of the staging `.iconset` directory
    pub iconset_stem: String,
    /// Packaging tool invoked as `<program> -c icns <iconset> -o <output>`
    pub packager: String,
}

impl Default for IcnsConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_ICNS_SIZES.to_vec(),
            base_max: DEFAULT_ICNS_BASE_MAX,
            retina_min: DEFAULT_ICNS_RETINA_MIN,
            iconset_stem: "RemoteLab".to_string(),
            packager: "iconutil".to_string(),
        }
    }
}

/// Full artifact layout for one export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Edge length of the master canvas
    pub master_edge: u32,
    /// Plain PNG artifacts
    pub png_targets: Vec<PngTarget>,
    /// Sizes bundled into `icon.ico`
    pub ico_sizes: Vec<u32>,
    pub icns: IcnsConfig,
    /// Quick-look bitmap written last
    pub preview: PngTarget,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            master_edge: DEFAULT_MASTER_EDGE,
            png_targets: vec![
                PngTarget::new("32x32.png", 32),
                PngTarget::new("128x128.png", 128),
                PngTarget::new("128x128@2x.png", 256),
                PngTarget::new("tray-icon.png", 32),
            ],
            ico_sizes: DEFAULT_ICO_SIZES.to_vec(),
            icns: IcnsConfig::default(),
            preview: PngTarget::new("preview.png", 128),
        }
    }
}

impl ExportConfig {
    /// Every file name the export writes, in write order
    pub fn artifact_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.png_targets.iter().map(|t| t.name.as_str()).collect();
        names.push(ICO_FILE_NAME);
        names.push(ICNS_FILE_NAME);
        names.push(self.preview.name.as_str());
        names
    }

    /// Check that the layout can actually be encoded
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.master_edge == 0 {
            return Err(ConfigError::ZeroSize("master canvas".to_string()));
        }
        if self.png_targets.is_empty() {
            return Err(ConfigError::EmptySizes("png"));
        }
        if self.ico_sizes.is_empty() {
            return Err(ConfigError::EmptySizes("ico"));
        }
        if self.icns.sizes.is_empty() {
            return Err(ConfigError::EmptySizes("icns"));
        }

        for target in self.png_targets.iter().chain(std::iter::once(&self.preview)) {
            if target.size == 0 {
                return Err(ConfigError::ZeroSize(target.name.clone()));
            }
        }
        if self.ico_sizes.contains(&0) {
            return Err(ConfigError::ZeroSize(ICO_FILE_NAME.to_string()));
        }
        if self.icns.sizes.contains(&0) {
            return Err(ConfigError::ZeroSize(ICNS_FILE_NAME.to_string()));
        }

        if self.ico_sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::IcoSizesNotAscending);
        }
        if let Some(&size) = self.ico_sizes.iter().find(|&&s| s > MAX_ICO_SIZE) {
            return Err(ConfigError::IcoSizeTooLarge { size });
        }

        let mut seen = HashSet::new();
        for name in self.artifact_names() {
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateName(name.to_string()));
            }
        }

        Ok(())
    }
}
