//! Row-major 8-bit grayscale pixel grids.

use bytemuck as bm;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, bm::Pod, bm::Zeroable)]
#[repr(transparent)]
pub struct Gray(pub u8);

impl Gray {
    pub const BLACK: Gray = Gray(0x00);
    pub const WHITE: Gray = Gray(0xff);
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("either dimension is zero")]
    ZeroDimension,
    #[error("{wide}x{high} does not fit in memory")]
    TooLarge { wide: usize, high: usize },
    #[error("{wide}x{high} needs {expected} samples, found {found}")]
    WrongCount { wide: usize, high: usize, expected: usize, found: usize },
}

mod meta {
    use super::ShapeError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Meta {
        wide: usize,
        high: usize,
    }

    impl Meta {
        pub fn try_new(wide: usize, high: usize) -> Result<Meta, ShapeError> {
            if wide == 0 || high == 0 {return Err(ShapeError::ZeroDimension)}
            wide.checked_mul(high).ok_or(ShapeError::TooLarge{wide, high})?;
            Ok(Meta{wide, high})
        }

        pub fn index(&self, [x, y]: [usize; 2]) -> Option<usize> {
            if x >= self.wide || y >= self.high {return None}
            Some(self.wide * y + x)
        }

        pub fn check_len(&self, found: usize) -> Result<(), ShapeError> {
            let expected = self.len();
            if found != expected {
                let Meta{wide, high} = *self;
                return Err(ShapeError::WrongCount{wide, high, expected, found});
            }
            Ok(())
        }

        pub fn len(&self) -> usize { self.wide * self.high }
        pub fn wide(&self) -> usize { self.wide }
        pub fn high(&self) -> usize { self.high }
    }
}

use meta::Meta;

#[derive(Debug, Clone)]
pub struct Pixmap<Pixels> {
    pixels: Pixels,
    meta: Meta,
}

impl<Pixels> Pixmap<Pixels> {
    pub fn wide(&self) -> usize { self.meta.wide() }
    pub fn high(&self) -> usize { self.meta.high() }
    pub fn dims(&self) -> [usize; 2] { [self.wide(), self.high()] }
}

impl Pixmap<Vec<Gray>> {
    pub fn new(wide: usize, high: usize, fill: Gray) -> Result<Self, ShapeError> {
        let meta = Meta::try_new(wide, high)?;
        let pixels = vec![fill; meta.len()];
        Ok(Self{pixels, meta})
    }

    pub fn new_from_fn(wide: usize, high: usize, mut f: impl FnMut([usize; 2]) -> Gray)
        -> Result<Self, ShapeError>
    {
        let meta = Meta::try_new(wide, high)?;
        let pixels = util::row_major(wide, high)
            .map(&mut f)
            .collect();
        Ok(Self{pixels, meta})
    }

    /// Reshapes a flat row-major sample sequence into `wide × high`.
    ///
    /// The count must match exactly; nothing is truncated or padded.
    pub fn from_samples(samples: Vec<u8>, wide: usize, high: usize) -> Result<Self, ShapeError> {
        let meta = Meta::try_new(wide, high)?;
        meta.check_len(samples.len())?;
        let pixels = bm::allocation::cast_vec(samples);
        Ok(Self{pixels, meta})
    }
}

impl<Pixels> Pixmap<Pixels> where Pixels: AsRef<[Gray]> {
    fn pixels(&self) -> &[Gray] {
        self.pixels.as_ref()
    }

    pub fn get(&self, at: impl Into<[usize; 2]>) -> Option<Gray> {
        let index = self.meta.index(at.into())?;
        Some(self.pixels()[index])
    }

    /// The flattened row-major samples.
    pub fn as_bytes(&self) -> &[u8] {
        bm::cast_slice(self.pixels())
    }
}
