/// One RGBA8 pixel, straight alpha.
///
/// Channel arithmetic wraps modulo 256; the QOI delta ops rely on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Last-pixel value before the first op-code is read.
    pub const START: Pixel = Pixel::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// History cache slot for this pixel: `(r*3 + g*5 + b*7 + a*11) % 64`.
    #[inline]
    pub const fn hash(self) -> usize {
        let sum = self.r as usize * 3
            + self.g as usize * 5
            + self.b as usize * 7
            + self.a as usize * 11;
        sum % 64
    }

    /// Add signed per-channel deltas to r, g and b. Alpha is kept.
    #[inline]
    pub const fn offset(self, dr: i8, dg: i8, db: i8) -> Self {
        Self {
            r: self.r.wrapping_add_signed(dr),
            g: self.g.wrapping_add_signed(dg),
            b: self.b.wrapping_add_signed(db),
            a: self.a,
        }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_of_start_pixel() {
        // 255 * 11 = 2805, 2805 % 64 = 53
        assert_eq!(Pixel::START.hash(), 53);
        assert_eq!(Pixel::default().hash(), 0);
    }

    #[test]
    fn hash_stays_in_range() {
        assert_eq!(Pixel::new(255, 255, 255, 255).hash(), (255 * 26) % 64);
        for v in 0..=255u8 {
            assert!(Pixel::new(v, v.wrapping_mul(3), v ^ 0x5a, !v).hash() < 64);
        }
    }

    #[test]
    fn offset_wraps() {
        let p = Pixel::new(0, 255, 10, 7).offset(-2, 1, -10);
        assert_eq!(p, Pixel::new(254, 0, 0, 7));
    }
}
