//! Fixed-point scale factors for chart normalization
//!
//! Uses Q16.16 fixed-point format so data-to-pixel mapping needs no
//! hardware floating point on Cortex-M0 class targets.

/// Q16.16 fixed-point number
///
/// Range: approximately -32768.0 to +32767.99998
/// Resolution: approximately 0.000015
///
/// The chart renderer builds one of these per axis as
/// `pixels / data-range` and multiplies data offsets through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fixed32(pub i32);

impl Fixed32 {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << 16);

    /// Fractional bits (16)
    pub const FRAC_BITS: u32 = 16;

    /// Create from a whole integer
    ///
    /// # Example
    /// ```
    /// use phosphor_core::fixed::Fixed32;
    /// let two = Fixed32::from_int(2);
    /// assert_eq!(two.to_int(), 2);
    /// ```
    #[inline]
    pub const fn from_int(n: i16) -> Self {
        Self((n as i32) << Self::FRAC_BITS)
    }

    /// Create the ratio `numerator / denominator`
    ///
    /// Returns ZERO if the denominator is zero.
    ///
    /// # Example
    /// ```
    /// use phosphor_core::fixed::Fixed32;
    /// let per_unit = Fixed32::ratio(100, 50);
    /// assert_eq!(per_unit.scale(3), 6);
    /// ```
    #[inline]
    pub const fn ratio(numerator: i32, denominator: i32) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self((((numerator as i64) << Self::FRAC_BITS) / denominator as i64) as i32)
    }

    /// Multiply an integer through the factor, truncating the fraction
    ///
    /// Uses an i64 intermediate to avoid overflow. Right-shift on signed
    /// integers is arithmetic, so negative results floor toward negative
    /// infinity.
    #[inline]
    pub fn scale(self, n: i32) -> i32 {
        (((n as i64) * (self.0 as i64)) >> Self::FRAC_BITS) as i32
    }

    /// Convert to whole integer (truncates fractional part)
    #[inline]
    pub const fn to_int(self) -> i16 {
        (self.0 >> Self::FRAC_BITS) as i16
    }

    /// Check if value is zero
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Get the raw i32 representation
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}
