//! Exact, order-independent summation of decimal amounts.
//!
//! `Decimal` addition rounds once a result needs more than 28 significant
//! digits, and a running sum can overflow even when the final total fits.
//! Here mantissas are accumulated per scale in `i128` and carried digit by
//! digit, so the result is the true sum or nothing.

use rust_decimal::Decimal;

const MAX_SCALE: usize = 28;

/// Exact sum of `amounts`.
///
/// `None` when the exact total is not representable as a `Decimal` (or the
/// per-scale accumulators exceed `i128`, which takes billions of lines).
pub(crate) fn exact_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    let mut by_scale = [0i128; MAX_SCALE + 1];
    for amount in amounts {
        let slot = &mut by_scale[amount.scale() as usize];
        *slot = slot.checked_add(amount.mantissa())?;
    }

    // Carry from the finest scale down to units. What stays behind at a scale
    // is a single digit that no coarser amount can cancel.
    let mut digits = [0i128; MAX_SCALE + 1];
    for scale in (1..=MAX_SCALE).rev() {
        let value = by_scale[scale];
        digits[scale] = value % 10;
        by_scale[scale - 1] = by_scale[scale - 1].checked_add(value / 10)?;
    }

    let scale = digits.iter().rposition(|d| *d != 0).unwrap_or(0);
    let mut mantissa = by_scale[0];
    for digit in &digits[1..=scale] {
        mantissa = mantissa.checked_mul(10)?.checked_add(*digit)?;
    }

    Decimal::try_from_i128_with_scale(mantissa, scale as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_plain_amounts() {
        assert_eq!(exact_sum([dec!(1.5), dec!(2.25), dec!(-0.75)]), Some(dec!(3)));
        assert_eq!(exact_sum(Vec::new()), Some(Decimal::ZERO));
    }

    #[test]
    fn keeps_digits_that_decimal_addition_would_round_away() {
        let big = dec!(10000000000000000000000000000);
        assert_eq!(exact_sum([big, dec!(0.1), -big]), Some(dec!(0.1)));
        assert_eq!(exact_sum([dec!(0.1), big, -big]), Some(dec!(0.1)));
    }

    #[test]
    fn result_does_not_depend_on_order() {
        assert_eq!(
            exact_sum([Decimal::MAX, Decimal::ONE, -Decimal::MAX, -Decimal::ONE]),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            exact_sum([Decimal::MAX, Decimal::MAX, Decimal::MIN]),
            Some(Decimal::MAX)
        );
    }

    #[test]
    fn mixed_sign_fractions_cancel() {
        assert_eq!(
            exact_sum([dec!(0.1), dec!(-0.09), dec!(-0.01)]),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            exact_sum([dec!(1), dec!(-0.0000000000000000000000000001)]),
            Some(dec!(0.9999999999999999999999999999))
        );
    }

    #[test]
    fn unrepresentable_total_is_none() {
        assert_eq!(exact_sum([Decimal::MAX, Decimal::ONE]), None);
        assert_eq!(
            exact_sum([dec!(10000000000000000000000000000), dec!(0.1)]),
            None
        );
    }
}
