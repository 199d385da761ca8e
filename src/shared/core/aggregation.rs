// Numeric helpers shared by the report calculators.
//
// All sums are exact decimal sums. Nothing here rounds or truncates, and
// nothing panics: a total outside the `Decimal` range is an `AmountOverflow`.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

/// Upper bound for a single amount, cash figure or distance accepted on
/// input.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("amount total exceeds the representable range")]
pub struct AmountOverflow;

/// Sum of every amount yielded by `amounts`; zero for an empty input.
pub fn sum_amounts<I>(amounts: I) -> Result<Decimal, AmountOverflow>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or(AmountOverflow)
}

pub fn subtract_amount(from: Decimal, amount: Decimal) -> Result<Decimal, AmountOverflow> {
    from.checked_sub(amount).ok_or(AmountOverflow)
}

/// Accumulates `(key, amount)` pairs into one bucket per key.
///
/// Buckets are kept in a `BTreeMap` so that serialising the same input twice
/// yields the same bytes.
pub fn group_amounts<K, I>(pairs: I) -> Result<BTreeMap<String, Decimal>, AmountOverflow>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Decimal)>,
{
    let mut buckets = BTreeMap::new();
    for (key, amount) in pairs {
        let bucket = buckets.entry(key.into()).or_insert(Decimal::ZERO);
        *bucket = bucket.checked_add(amount).ok_or(AmountOverflow)?;
    }
    Ok(buckets)
}

/// `total / count`, or zero when `count` is zero.
pub fn average_or_zero(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(count))
        .unwrap_or(Decimal::ZERO)
}
