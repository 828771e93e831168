//! RON content loader

use crate::error::{Error, Result};
use crate::schema::ContentFile;
use faux_floors_core::{DefDatabase, MemoryDatabase};
use std::fs;
use std::path::Path;

/// Loader for RON content files
///
/// Definitions are inserted in file order, so short hashes the host
/// assigns are reproducible for the same set of files.
pub struct Loader {
    db: MemoryDatabase,
}

impl Loader {
    /// Create a new loader with an empty database
    pub fn new() -> Self {
        Self {
            db: MemoryDatabase::new(),
        }
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        self.load_str(&content).map_err(|e| match e {
            Error::InvalidContent(msg) => {
                Error::InvalidContent(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load content from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: ContentFile = ron::from_str(content)?;
        if file.is_empty() {
            return Err(Error::InvalidContent(
                "no things, terrains or translations".to_string(),
            ));
        }
        self.load_content(file)
    }

    /// Insert already parsed content
    pub fn load_content(&mut self, file: ContentFile) -> Result<()> {
        for thing in file.things {
            if thing.def_name.is_empty() {
                return Err(Error::InvalidContent("thing without def_name".to_string()));
            }
            self.db.insert_thing(thing)?;
        }
        for terrain in file.terrains {
            if terrain.def_name.is_empty() {
                return Err(Error::InvalidContent(
                    "terrain without def_name".to_string(),
                ));
            }
            self.db.insert_terrain(terrain)?;
        }
        for (key, text) in file.translations {
            self.db.add_translation(key, text);
        }
        Ok(())
    }

    /// Load all RON files from a directory, in file name order
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the database
    pub fn finish(self) -> MemoryDatabase {
        self.db
    }

    /// Get the current database (for inspection during loading)
    pub fn db(&self) -> &dyn DefDatabase {
        &self.db
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
