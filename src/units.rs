//! OOXML length units.
//!
//! All deck geometry is carried as EMU (English Metric Units, 1/914400 of an
//! inch), the native integer unit of the document format. Inch values from the
//! layout constants are converted once, up front, with the truncating
//! conversion the format's reference tooling uses.

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// A length in English Metric Units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(pub i64);

impl Emu {
    /// Converts inches to EMU, truncating toward zero.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64) as i64)
    }

    pub fn to_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    /// Offset that centers a length of `inner` inside a length of `outer`,
    /// in integer EMU.
    pub fn centered_in(inner: Emu, outer: Emu) -> Emu {
        Emu((outer.0 - inner.0) / 2)
    }

    /// Scales this length by `num/den`, rounding to the nearest EMU. Used to
    /// derive a picture height from its width and pixel aspect ratio.
    pub fn scale(self, num: u32, den: u32) -> Emu {
        Emu((self.0 as f64 * num as f64 / den as f64).round() as i64)
    }
}

/// Font size in points, serialized as centipoints in run properties.
pub fn pt_to_centipoints(pt: u32) -> u32 {
    pt * 100
}
