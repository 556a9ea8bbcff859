//! Raster image containers in and out of 8-bit grayscale pixmaps.

use {
    anyhow::{Result as Anyhow, Context, anyhow},
    camino::Utf8Path as Path,
    image::{DynamicImage, GrayImage},
    pixmap::{Gray, Pixmap},
};

/// Weights used to collapse colour to a single luma channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Luma {
    /// ITU-R BT.601: 0.299 R + 0.587 G + 0.114 B, in 16-bit fixed point.
    #[default]
    Rec601,
    /// ITU-R BT.709, as implemented by the `image` crate.
    Rec709,
}

impl std::str::FromStr for Luma {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rec601" | "601" => Ok(Luma::Rec601),
            "rec709" | "709" => Ok(Luma::Rec709),
            _ => Err(format!("unknown luma rule {s:?} (expected rec601 or rec709)")),
        }
    }
}

fn rec601([r, g, b]: [u8; 3]) -> u8 {
    let y = 19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000;
    (y >> 16) as u8
}

/// Alpha is dropped. Sources that are already grayscale pass through as-is.
pub fn to_gray(image: DynamicImage, luma: Luma) -> Anyhow<Pixmap<Vec<Gray>>> {
    let wide = image.width() as usize;
    let high = image.height() as usize;

    let samples = match (image, luma) {
        (image @ (DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_)), _) =>
            image.into_luma8().into_raw(),
        (image, Luma::Rec709) =>
            image.into_luma8().into_raw(),
        (image, Luma::Rec601) => {
            let rgb = image.into_rgb8();
            rgb.pixels()
                .map(|p| rec601(p.0))
                .collect()
        }
    };

    Ok(Pixmap::from_samples(samples, wide, high)?)
}

/// The decoder is picked from the file's leading bytes, not its extension.
pub fn load_gray(path: &Path, luma: Luma) -> Anyhow<Pixmap<Vec<Gray>>> {
    let image = image::io::Reader::open(path)
        .with_context(|| format!("failed to open {path}"))?
        .with_guessed_format()
        .with_context(|| format!("failed to read {path}"))?
        .decode()
        .with_context(|| format!("failed to decode {path}"))?;
    log::debug!("decoded {path}: {}x{} {:?}", image.width(), image.height(), image.color());
    to_gray(image, luma)
        .with_context(|| format!("failed to convert {path} to grayscale"))
}

/// The container format follows the extension of `path`.
pub fn save_gray<Pixels>(path: &Path, pixmap: &Pixmap<Pixels>) -> Anyhow<()>
where
    Pixels: AsRef<[Gray]>,
{
    let [wide, high] = pixmap.dims()
        .map(|n| u32::try_from(n).map_err(|_| anyhow!("{n} is too large for an image dimension")));
    let image = GrayImage::from_raw(wide?, high?, pixmap.as_bytes().to_vec())
        .ok_or(anyhow!("pixmap does not fill a {}x{} image", pixmap.wide(), pixmap.high()))?;
    image.save(path)
        .with_context(|| format!("failed to save {path}"))
}
