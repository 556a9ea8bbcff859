use {
    camino::Utf8PathBuf as PathBuf,
    clap::{Parser, Subcommand},
    convert::config::{
        DEFAULT_IMPORT_DEST,
        DEFAULT_IMPORT_HIGH,
        DEFAULT_IMPORT_SOURCE,
        DEFAULT_IMPORT_WIDE,
    },
    formats::Luma,
    memh::RangePolicy,
};

/// Convert between raster images and memory-init hex text
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level on stderr: off, error, warn, info, debug or trace
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: log::LevelFilter,

    #[clap(subcommand)]
    pub command: SubCommand,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    Export(Export),
    Import(Import),
}

/// Write an image as one grayscale hex byte per line
#[derive(Parser, Debug)]
pub struct Export {
    /// Source image (png, jpeg, webp, bmp, tga or gif)
    pub source: PathBuf,

    /// Output text file [default: image_data<W>x<H>.mem]
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Grayscale weights: rec601 or rec709
    #[clap(long, default_value = "rec601")]
    pub luma: Luma,
}

/// Rebuild a grayscale image from one hex value per line
#[derive(Parser, Debug)]
pub struct Import {
    /// Hex text to read
    #[clap(default_value = DEFAULT_IMPORT_SOURCE)]
    pub source: PathBuf,

    /// Output image; the format follows the extension
    #[clap(short, long, default_value = DEFAULT_IMPORT_DEST)]
    pub output: PathBuf,

    /// Image width in pixels
    #[clap(short = 'W', long, default_value_t = DEFAULT_IMPORT_WIDE)]
    pub width: usize,

    /// Image height in pixels
    #[clap(short = 'H', long, default_value_t = DEFAULT_IMPORT_HIGH)]
    pub height: usize,

    /// Values above ff: reject or wrap
    #[clap(long, default_value = "reject")]
    pub range: RangePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("memtool").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn import_defaults() {
        let cli = parse(&["import"]);
        assert_eq!(cli.log_level, log::LevelFilter::Warn);
        let SubCommand::Import(import) = cli.command else {panic!("not import")};
        assert_eq!(import.source, "output_image.txt");
        assert_eq!(import.output, "result_equalized.png");
        assert_eq!([import.width, import.height], [64, 64]);
        assert_eq!(import.range, RangePolicy::Reject);
    }

    #[test]
    fn import_flags() {
        let cli = parse(&[
            "import", "dump.txt", "-o", "out.bmp", "-W", "4", "--height", "1",
            "--range", "wrap", "--log-level", "debug",
        ]);
        assert_eq!(cli.log_level, log::LevelFilter::Debug);
        let SubCommand::Import(import) = cli.command else {panic!("not import")};
        assert_eq!(import.source, "dump.txt");
        assert_eq!(import.output, "out.bmp");
        assert_eq!([import.width, import.height], [4, 1]);
        assert_eq!(import.range, RangePolicy::Wrap);
    }

    #[test]
    fn export_args() {
        let cli = parse(&["export", "photo.webp"]);
        let SubCommand::Export(export) = cli.command else {panic!("not export")};
        assert_eq!(export.source, "photo.webp");
        assert_eq!(export.output, None);
        assert_eq!(export.luma, Luma::Rec601);

        let cli = parse(&["export", "photo.webp", "--output", "photo.mem", "--luma", "rec709"]);
        let SubCommand::Export(export) = cli.command else {panic!("not export")};
        assert_eq!(export.output, Some("photo.mem".into()));
        assert_eq!(export.luma, Luma::Rec709);
    }

    #[test]
    fn rejects_bad_values() {
        let bad: [&[&str]; 4] = [
            &["export"],
            &["export", "a.png", "--luma", "cie"],
            &["import", "--range", "clamp"],
            &["import", "--width", "-3"],
        ];
        for args in bad {
            let args = std::iter::once("memtool").chain(args.iter().copied());
            assert!(Cli::try_parse_from(args).is_err());
        }
    }
}
