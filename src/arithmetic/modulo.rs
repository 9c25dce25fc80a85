//!
//! Remainder without the quotient
//!

use crate::arithmetic::division::divmod;
use crate::bigdigit::RADIX;
use crate::{ArithmeticError, BigInt, RoundingMode, Sign};

use num_traits::ToPrimitive;


/// `x %= modulus`
///
/// A single-digit modulus never needs the quotient: fold the digits
/// through `Σ digit[i] · R^i mod m` with an incrementally reduced
/// power of R. Larger moduli fall back to full division.
pub(crate) fn mod_assign(
    x: &mut BigInt,
    modulus: &BigInt,
    mode: RoundingMode,
) -> Result<(), ArithmeticError> {
    if modulus.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    if x.is_zero() {
        return Ok(());
    }

    if let Some(m) = modulus.single_digit_signed() {
        let m_abs = m.abs();
        if let Some(n) = x.to_i64() {
            let mut r = n % m_abs;
            if mode == RoundingMode::Floor && r < 0 {
                r += m_abs;
            }
            x.assign_native(r);
            return Ok(());
        }

        let mut sum: i64 = 0;
        let mut power_mod: i64 = 1;
        for &digit in x.digits.iter() {
            sum = (digit % m_abs * power_mod + sum) % m_abs;
            power_mod = power_mod * (RADIX % m_abs) % m_abs;
        }
        let r = match (x.sign(), mode) {
            (Sign::Minus, RoundingMode::Truncate) => -sum,
            (Sign::Minus, RoundingMode::Floor) if sum != 0 => m_abs - sum,
            _ => sum,
        };
        x.assign_native(r);
        return Ok(());
    }

    let (_, remainder) = divmod(x, modulus, mode)?;
    x.assign_value(remainder);
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn parsed(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal % $m:literal, $mode:ident => $expected:literal) => {
            #[test]
            fn $name() {
                let mut a = parsed($a);
                mod_assign(&mut a, &parsed($m), RoundingMode::$mode).unwrap();
                assert_eq!(a, parsed($expected));
            }
        };
    }

    impl_case!(case_100_7: "100" % "7", Truncate => "2");
    impl_case!(case_neg100_7_truncate: "-100" % "7", Truncate => "-2");
    impl_case!(case_neg100_7_floor: "-100" % "7", Floor => "5");
    impl_case!(case_exact: "-98" % "7", Floor => "0");
    impl_case!(case_digit_fold:
        "10000000000000000000000000000000000000000" % "7", Truncate => "4");
    impl_case!(case_digit_fold_negative:
        "-10000000000000000000000000000000000000000" % "9999991", Floor => "5094681");
    impl_case!(case_multi_digit_modulus:
        "10000000000000000000000000000000000000000" % "123456789123456789123",
        Truncate => "99969589362668935690");

    #[test]
    fn zero_modulus_fails() {
        let mut a = parsed("5");
        assert_eq!(
            mod_assign(&mut a, &parsed("0"), RoundingMode::Truncate),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn digit_fold_agrees_with_divmod() {
        let a = parsed("123456789123456789123456789123456789");
        for m in ["3", "-17", "33554431", "1000003"].iter() {
            let modulus = parsed(m);
            for mode in [RoundingMode::Truncate, RoundingMode::Floor].iter().copied() {
                let mut fast = a.clone();
                mod_assign(&mut fast, &modulus, mode).unwrap();
                let (_, slow) = divmod(&a, &modulus, mode).unwrap();
                assert_eq!(fast, slow, "modulus {} mode {:?}", m, mode);
            }
        }
    }
}
