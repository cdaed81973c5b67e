//! Content factory for building display data from a data directory.

use std::path::{Path, PathBuf};

use game_core::{DisplayConfig, GlyphTables};

use crate::loaders::{ConfigLoader, GlyphTableLoader, LevelContent, LevelLoader, LoadResult};

/// Content factory that loads all display content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── display.toml
/// ├── glyphs.ron
/// └── levels/
///     ├── town.ron
///     └── cavern.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::DEFAULT_DATA_DIR)
    }

    /// Load display configuration from `display.toml`.
    pub fn load_config(&self) -> LoadResult<DisplayConfig> {
        let path = self.data_dir.join("display.toml");
        ConfigLoader::load(&path)
    }

    /// Load glyph tables from `glyphs.ron`.
    pub fn load_glyphs(&self) -> LoadResult<GlyphTables> {
        let path = self.data_dir.join("glyphs.ron");
        GlyphTableLoader::load(&path)
    }

    /// Load a level from `levels/{level_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `level_name` - Name of the level file (without `.ron` extension)
    /// * `tables` - Glyph tables the level's names are resolved against
    pub fn load_level(&self, level_name: &str, tables: &GlyphTables) -> LoadResult<LevelContent> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path, tables)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_report_path() {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());

        let err = factory.load_glyphs().unwrap_err();
        assert!(err.to_string().contains("glyphs.ron"));
    }

    #[test]
    fn loads_config_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("display.toml"),
            "wall_style = \"solid\"\n",
        )
        .unwrap();

        let config = ContentFactory::new(temp_dir.path()).load_config().unwrap();
        assert_eq!(config.wall_style, game_core::WallStyle::Solid);
    }
}
