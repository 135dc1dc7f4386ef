use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("sales total does not fit in a u64")]
pub struct TotalOverflow;

/// Sum of a sales sequence. Empty input sums to zero.
pub fn calculate_total(sales: &[u64]) -> Result<u64, TotalOverflow> {
    sales
        .iter()
        .try_fold(0u64, |sum, val| sum.checked_add(*val))
        .ok_or(TotalOverflow)
}
