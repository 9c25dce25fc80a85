//! Rounding structures and subroutines

/// Determines the sign convention of a division remainder
///
/// Default rounding mode is Truncate, matching the `/` and `%`
/// operators on native integers.
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round the quotient towards zero; the remainder keeps the
    /// dividend's sign
    ///
    /// * 100 divmod 7 → (14, 2)
    /// * -100 divmod 7 → (-14, -2)
    Truncate,

    /// Keep the remainder non-negative, decrementing the quotient
    /// when truncation would leave a negative remainder
    ///
    /// * 100 divmod 7 → (14, 2)
    /// * -100 divmod 7 → (-15, 5)
    Floor,
}

impl Default for RoundingMode {
    fn default() -> RoundingMode {
        RoundingMode::Truncate
    }
}
