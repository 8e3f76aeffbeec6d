// ============================================================================
// Random Values
// Inclusive-range integer draws from the platform RNG
// ============================================================================

use super::numeric_value::NumericValue;
use rand::Rng;

impl NumericValue {
    /// A uniformly random integer in `[min, max]`, drawn from the thread
    /// RNG. Bounds given in the wrong order are swapped, keeping the
    /// function total.
    pub fn random(min: i64, max: i64) -> Self {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let drawn = rand::thread_rng().gen_range(low..=high);
        Self::from(drawn)
    }
}
