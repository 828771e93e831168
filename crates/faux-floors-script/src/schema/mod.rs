//! Schema definitions for RON content files

pub mod content;

pub use content::ContentFile;
