use {
    camino::Utf8PathBuf as PathBuf,
    formats::Luma,
    memh::RangePolicy,
};

pub const DEFAULT_IMPORT_SOURCE: &str = "output_image.txt";
pub const DEFAULT_IMPORT_DEST:   &str = "result_equalized.png";
pub const DEFAULT_IMPORT_WIDE:  usize = 64;
pub const DEFAULT_IMPORT_HIGH:  usize = 64;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub source_path: PathBuf,
    /// `None` picks `image_data{W}x{H}.mem` once the source size is known.
    pub dest_path: Option<PathBuf>,
    pub luma: Luma,
}

impl ExportConfig {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: None,
            luma: Luma::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    pub wide: usize,
    pub high: usize,
    pub range: RangePolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_IMPORT_SOURCE.into(),
            dest_path: DEFAULT_IMPORT_DEST.into(),
            wide: DEFAULT_IMPORT_WIDE,
            high: DEFAULT_IMPORT_HIGH,
            range: RangePolicy::default(),
        }
    }
}

#[cfg(test)]
#[test]
fn defaults() {
    let config = ImportConfig::default();
    assert_eq!(config.source_path, "output_image.txt");
    assert_eq!(config.dest_path, "result_equalized.png");
    assert_eq!([config.wide, config.high], [64, 64]);
    assert_eq!(config.range, RangePolicy::Reject);

    let config = ExportConfig::new("photo.webp");
    assert_eq!(config.source_path, "photo.webp");
    assert_eq!(config.dest_path, None);
    assert_eq!(config.luma, Luma::Rec601);
}
