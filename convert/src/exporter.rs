use {
    crate::ExportConfig,
    anyhow::{Result as Anyhow, Context},
    camino::{Utf8Path as Path, Utf8PathBuf as PathBuf},
};

#[derive(Debug, Clone)]
pub struct Exported {
    pub dest_path: PathBuf,
    pub wide: usize,
    pub high: usize,
    pub lines: usize,
    /// FNV-1a of the text written.
    pub digest: u64,
}

pub fn default_export_path(wide: usize, high: usize) -> PathBuf {
    format!("image_data{wide}x{high}.mem").into()
}

/// Writes `source_path` as one `{:02x}` grayscale sample per line to `dest_path`.
pub fn export(source_path: impl AsRef<Path>, dest_path: impl AsRef<Path>) -> Anyhow<Exported> {
    let config = ExportConfig {
        dest_path: Some(dest_path.as_ref().to_owned()),
        ..ExportConfig::new(source_path.as_ref())
    };
    export_with(&config)
}

pub fn export_with(config: &ExportConfig) -> Anyhow<Exported> {
    let start = std::time::Instant::now();
    let source = &config.source_path;

    log::info!("exporting {source} ({:?} luma)", config.luma);
    let gray = formats::load_gray(source, config.luma)?;
    let [wide, high] = gray.dims();
    let decoded = std::time::Instant::now();
    log::debug!("{source}: {wide}x{high}, decoded in {:.3}s", (decoded - start).as_secs_f32());

    let text = memh::encode_memh_file(gray.as_bytes());
    let digest = util::fnv1a_64(&text);

    let dest_path = config.dest_path.clone()
        .unwrap_or_else(|| default_export_path(wide, high));
    std::fs::write(&dest_path, &text)
        .with_context(|| format!("failed to write {dest_path}"))?;

    let lines = wide * high;
    log::info!("wrote {lines} lines to {dest_path} (hash {digest:016x}) in {:.3}s",
        start.elapsed().as_secs_f32());

    Ok(Exported{dest_path, wide, high, lines, digest})
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pixmap::{Gray, Pixmap},
    };

    #[test]
    fn white_strip_exports_ff_lines() {
        let dir = crate::scratch_dir("export-white");
        let source = dir.join("white.png");
        let dest = dir.join("white.mem");
        formats::save_gray(&source, &Pixmap::new(4, 1, Gray::WHITE).unwrap()).unwrap();

        let exported = export(&source, &dest).unwrap();
        assert_eq!([exported.wide, exported.high, exported.lines], [4, 1, 4]);
        assert_eq!(exported.dest_path, dest);

        let text = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(text, "ff\nff\nff\nff\n");
        assert_eq!(exported.digest, util::fnv1a_64(text.as_bytes()));
    }

    #[test]
    fn lines_are_two_lowercase_digits_in_row_major_order() {
        let dir = crate::scratch_dir("export-ramp");
        let source = dir.join("ramp.png");
        let dest = dir.join("ramp.mem");
        let pm = Pixmap::new_from_fn(17, 9, |[x, y]| Gray((y * 17 + x) as u8)).unwrap();
        formats::save_gray(&source, &pm).unwrap();

        export(&source, &dest).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 17 * 9);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), 2);
            assert!(line.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')), "{line}");
            assert_eq!(u8::from_str_radix(line, 16).unwrap() as usize, i);
        }
    }

    #[test]
    fn colour_source_uses_configured_luma() {
        let dir = crate::scratch_dir("export-colour");
        let source = dir.join("red.png");
        let dest = dir.join("red.mem");
        image::RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0])).save(&source).unwrap();

        let config = ExportConfig {
            dest_path: Some(dest.clone()),
            ..ExportConfig::new(&source)
        };
        export_with(&config).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "4c\n4c\n4c\n4c\n");
    }

    #[test]
    fn source_format_comes_from_content() {
        let dir = crate::scratch_dir("export-sniff");
        let png = dir.join("pair.png");
        formats::save_gray(&png, &Pixmap::new(2, 1, Gray::WHITE).unwrap()).unwrap();

        for name in ["mislabelled.jpg", "no_extension"] {
            let source = dir.join(name);
            let dest = dir.join(format!("{name}.mem"));
            std::fs::copy(&png, &source).unwrap();
            let exported = export(&source, &dest).unwrap();
            assert_eq!([exported.wide, exported.high], [2, 1], "{name}");
            assert_eq!(std::fs::read_to_string(&dest).unwrap(), "ff\nff\n", "{name}");
        }
    }

    #[test]
    fn default_destination_names_the_size() {
        assert_eq!(default_export_path(3840, 2160), "image_data3840x2160.mem");
    }

    #[test]
    fn missing_source_fails_without_output() {
        let dir = crate::scratch_dir("export-missing");
        let dest = dir.join("never.mem");
        let err = export(dir.join("nope.webp"), &dest).unwrap_err();
        assert!(format!("{err:#}").contains("nope.webp"));
        assert!(!dest.exists());
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = crate::scratch_dir("export-unwritable");
        let source = dir.join("black.png");
        formats::save_gray(&source, &Pixmap::new(1, 1, Gray::BLACK).unwrap()).unwrap();
        let err = export(&source, dir.join("no-such-dir/out.mem")).unwrap_err();
        assert!(format!("{err:#}").contains("out.mem"));
    }
}
