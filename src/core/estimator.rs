use crate::domain::model::SalaryBounds;

/// Point estimate of a listing's salary.
///
/// Both bounds give their midpoint, a lone lower bound is scaled by 1.2 and a
/// lone upper bound by 0.8. Results are truncated toward zero and saturate at
/// `i64::MAX`.
pub fn estimate_salary(bounds: SalaryBounds) -> Option<i64> {
    let estimate = match (bounds.lower, bounds.upper) {
        (Some(lower), Some(upper)) => (i128::from(lower) + i128::from(upper)) / 2,
        (Some(lower), None) => i128::from(lower) * 6 / 5,
        (None, Some(upper)) => i128::from(upper) * 4 / 5,
        (None, None) => return None,
    };
    Some(saturate(estimate))
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Truncated mean of the collected estimates.
pub fn average_salary(estimates: &[i64]) -> Option<i64> {
    if estimates.is_empty() {
        return None;
    }
    let sum: i128 = estimates.iter().copied().map(i128::from).sum();
    Some(saturate(sum / estimates.len() as i128))
}
