//! The two one-shot conversions between raster images and memory-init text.

pub mod config;
mod exporter;
mod importer;

pub use {
    config::{ExportConfig, ImportConfig},
    exporter::{Exported, default_export_path, export, export_with},
    importer::{Imported, import, import_with},
};

#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> camino::Utf8PathBuf {
    let dir = std::env::temp_dir().join(format!("convert-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    camino::Utf8PathBuf::from_path_buf(dir).unwrap()
}
