use {
    crate::ImportConfig,
    anyhow::{Result as Anyhow, Context},
    camino::{Utf8Path as Path, Utf8PathBuf as PathBuf},
    pixmap::Pixmap,
};

#[derive(Debug, Clone)]
pub struct Imported {
    pub dest_path: PathBuf,
    pub wide: usize,
    pub high: usize,
    /// FNV-1a of the samples, row-major.
    pub digest: u64,
}

/// Rebuilds a `wide × high` grayscale image from memory-init text.
///
/// The sample count must equal `wide * high`. Nothing is written unless the
/// whole input parses.
pub fn import(
    source_path: impl AsRef<Path>,
    dest_path: impl AsRef<Path>,
    wide: usize,
    high: usize,
) -> Anyhow<Imported>
{
    let config = ImportConfig {
        source_path: source_path.as_ref().to_owned(),
        dest_path: dest_path.as_ref().to_owned(),
        wide,
        high,
        ..ImportConfig::default()
    };
    import_with(&config)
}

pub fn import_with(config: &ImportConfig) -> Anyhow<Imported> {
    let start = std::time::Instant::now();
    let ImportConfig{source_path: source, dest_path, wide, high, range} = config;

    log::info!("importing {source} as {wide}x{high} ({range:?} out-of-range values)");
    let text = std::fs::read(source)
        .with_context(|| format!("failed to read {source}"))?;
    let samples = memh::decode_memh_file(&text, *range)
        .with_context(|| format!("failed to parse {source}"))?;
    log::debug!("{source}: {} samples", samples.len());

    let gray = Pixmap::from_samples(samples, *wide, *high)
        .with_context(|| format!("{source} does not hold a {wide}x{high} image"))?;
    let digest = util::fnv1a_64(gray.as_bytes());

    formats::save_gray(dest_path, &gray)?;
    log::info!("wrote {dest_path} (hash {digest:016x}) in {:.3}s",
        start.elapsed().as_secs_f32());

    Ok(Imported{dest_path: dest_path.clone(), wide: *wide, high: *high, digest})
}
