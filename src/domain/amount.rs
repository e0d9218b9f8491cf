//! Amount sign normalization
//!
//! The sign of a transaction amount is never taken from the caller. Only the
//! magnitude is kept; the sign comes from the operation's entry type.

use rust_decimal::Decimal;

use super::EntryType;

/// Derive the amount to persist for an operation of the given entry type.
///
/// Credit operations always store `+|amount|`, debit operations `-|amount|`.
/// Zero stays unsigned.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use ledger_api::domain::{normalize_amount, EntryType};
///
/// let raw = Decimal::new(10050, 2);
/// assert_eq!(normalize_amount(raw, EntryType::Debit), Decimal::new(-10050, 2));
/// ```
pub fn normalize_amount(amount: Decimal, entry_type: EntryType) -> Decimal {
    if amount.is_zero() {
        return Decimal::ZERO;
    }

    match entry_type {
        EntryType::Credit => amount.abs(),
        EntryType::Debit => -amount.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_always_negative() {
        for raw in [dec!(100.50), dec!(-100.50), dec!(0.01), dec!(-123456789.123456789)] {
            let normalized = normalize_amount(raw, EntryType::Debit);
            assert!(normalized.is_sign_negative(), "{} -> {}", raw, normalized);
            assert_eq!(normalized.abs(), raw.abs());
        }
    }

    #[test]
    fn test_credit_always_positive() {
        for raw in [dec!(100.50), dec!(-100.50), dec!(0.01), dec!(-123456789.123456789)] {
            let normalized = normalize_amount(raw, EntryType::Credit);
            assert!(normalized.is_sign_positive(), "{} -> {}", raw, normalized);
            assert_eq!(normalized.abs(), raw.abs());
        }
    }

    #[test]
    fn test_scale_preserved() {
        let normalized = normalize_amount(dec!(100.50), EntryType::Debit);
        assert_eq!(normalized.to_string(), "-100.50");
    }

    #[test]
    fn test_zero_is_unsigned() {
        assert_eq!(normalize_amount(Decimal::ZERO, EntryType::Debit).to_string(), "0");
        assert_eq!(normalize_amount(dec!(-0.00), EntryType::Credit), Decimal::ZERO);
    }
}
