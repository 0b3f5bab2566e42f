//! Count-up animation for headline stat numbers.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Divisor of the target per tick; lower counts faster.
pub const COUNTER_SPEED: f64 = 200.0;
pub const COUNTER_TICK_MS: u32 = 20;
/// Fraction of the element that must be visible before counting starts.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Next displayed value, or `None` once `current` has reached `target`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn next_count(current: u64, target: u64) -> Option<u64> {
    if current >= target {
        return None;
    }
    let inc = target as f64 / COUNTER_SPEED;
    let next = (current as f64 + inc).ceil() as u64;
    Some(next.clamp(current + 1, target))
}

/// Every value shown from 0 up to `target`, in order.
pub fn count_sequence(target: u64) -> Vec<u64> {
    std::iter::successors(Some(0), |&n| next_count(n, target)).collect()
}

/// Parse a `data-target` attribute; anything unreadable counts to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_target(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}
