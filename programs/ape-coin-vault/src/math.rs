use anchor_lang::prelude::*;

use crate::errors::VaultError;

const LOW_MASK: u128 = u64::MAX as u128;

/// Rounding direction for share/asset conversions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// Full-width `a * b / denominator`
///
/// The product is kept in 256 bits so 18-decimal amounts can be multiplied
/// by share supplies of the same scale. Fails only if the quotient itself
/// does not fit in a u128.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    require!(denominator != 0, VaultError::DivisionByZero);

    let (hi, lo) = widening_mul(a, b);

    let (quotient, remainder) = if hi == 0 {
        (lo / denominator, lo % denominator)
    } else {
        require!(hi < denominator, VaultError::MathOverflow);
        div_256_by_128(hi, lo, denominator)
    };

    match rounding {
        Rounding::Ceil if remainder != 0 => quotient
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow)),
        _ => Ok(quotient),
    }
}

/// Returns `(hi, lo)` with `a * b == hi * 2^128 + lo`
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & LOW_MASK);
    let (b_hi, b_lo) = (b >> 64, b & LOW_MASK);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // Fits: three terms each below 2^64
    let middle = (lo_lo >> 64) + (lo_hi & LOW_MASK) + (hi_lo & LOW_MASK);

    let lo = (lo_lo & LOW_MASK) | (middle << 64);
    let hi = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (middle >> 64);
    (hi, lo)
}

/// Shift-subtract long division; requires `hi < denominator`
fn div_256_by_128(hi: u128, lo: u128, denominator: u128) -> (u128, u128) {
    let mut remainder = hi;
    let mut quotient = 0u128;

    for bit in (0..128).rev() {
        let carry = remainder >> 127;
        remainder = (remainder << 1) | ((lo >> bit) & 1);
        quotient <<= 1;
        if carry == 1 || remainder >= denominator {
            remainder = remainder.wrapping_sub(denominator);
            quotient |= 1;
        }
    }

    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAD: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_small_values_match_native_division() {
        assert_eq!(mul_div(100, 333, 1000, Rounding::Floor).unwrap(), 33);
        assert_eq!(mul_div(100, 333, 1000, Rounding::Ceil).unwrap(), 34);
        assert_eq!(mul_div(500, 1000, 2000, Rounding::Ceil).unwrap(), 250);
    }

    #[test]
    fn test_wide_product_does_not_overflow() {
        // 1e23 * 1e23 needs more than 128 bits
        let deposit = 100_000 * WAD;
        let result = mul_div(deposit, deposit, deposit, Rounding::Floor).unwrap();
        assert_eq!(result, deposit);

        let result = mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Ceil).unwrap();
        assert_eq!(result, u128::MAX);
    }

    #[test]
    fn test_wide_product_rounding() {
        // (2^127 + 1) * 3 / 2 = 3 * 2^126 + 1.5
        let a = (1u128 << 127) + 1;
        let floor = mul_div(a, 3, 2, Rounding::Floor);
        assert_eq!(floor.unwrap(), 3 * (1u128 << 126) + 1);
        assert_eq!(mul_div(a, 3, 2, Rounding::Ceil).unwrap(), 3 * (1u128 << 126) + 2);
    }

    #[test]
    fn test_quotient_overflow_is_rejected() {
        assert!(mul_div(u128::MAX, 2, 1, Rounding::Floor).is_err());
        assert!(mul_div(u128::MAX, 1, 1, Rounding::Ceil).is_ok());
    }

    #[test]
    fn test_zero_denominator() {
        assert!(mul_div(1, 1, 0, Rounding::Floor).is_err());
    }
}
