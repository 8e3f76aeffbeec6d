// ============================================================================
// Statistics
// Aggregations over ordered sequences of numeric-or-value elements
// ============================================================================

use super::numeric_value::NumericValue;
use crate::canonical::Canonical;
use crate::error::{NumericError, NumericResult};
use crate::normalize::{self, Input};

/// Normalize every element strictly; an empty sequence raises `EmptyInput`
/// and any element failure propagates as-is.
fn collect<I>(values: I) -> NumericResult<Vec<Canonical>>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let collected: NumericResult<Vec<Canonical>> = values
        .into_iter()
        .map(normalize::convert_to_number)
        .collect();
    let collected = collected?;
    if collected.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    Ok(collected)
}

/// Arithmetic mean, always a float.
pub fn mean<I>(values: I) -> NumericResult<NumericValue>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let values = collect(values)?;
    let sum: f64 = values.iter().map(|v| v.as_f64()).sum();
    Ok(NumericValue::from_canonical(Canonical::Float(
        sum / values.len() as f64,
    )))
}

/// Median. An odd-length sequence yields the middle element with its
/// representation preserved (`median([1,2,3])` is integer 2); an even-length
/// sequence yields the mean of the two middle elements, always a float
/// (`median([1,2,3,4])` is 2.5).
pub fn median<I>(values: I) -> NumericResult<NumericValue>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let mut values = collect(values)?;
    values.sort_by(|a, b| a.as_f64().total_cmp(&b.as_f64()));

    let mid = values.len() / 2;
    let result = if values.len() % 2 == 1 {
        values[mid]
    } else {
        Canonical::Float((values[mid - 1].as_f64() + values[mid].as_f64()) / 2.0)
    };
    Ok(NumericValue::from_canonical(result))
}

/// Most frequent value by loose (magnitude) equality. Ties resolve to the
/// value encountered first in the sequence.
pub fn mode<I>(values: I) -> NumericResult<NumericValue>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let values = collect(values)?;

    let mut best = values[0];
    let mut best_count = 0usize;
    for (i, candidate) in values.iter().enumerate() {
        // Count only at the candidate's first occurrence.
        if values[..i].iter().any(|v| v.loose_eq(*candidate)) {
            continue;
        }
        let count = values.iter().filter(|v| v.loose_eq(*candidate)).count();
        if count > best_count {
            best_count = count;
            best = *candidate;
        }
    }
    Ok(NumericValue::from_canonical(best))
}

/// Population standard deviation, always a float.
pub fn standard_deviation<I>(values: I) -> NumericResult<NumericValue>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let values = collect(values)?;
    let n = values.len() as f64;
    let mu: f64 = values.iter().map(|v| v.as_f64()).sum::<f64>() / n;
    let variance: f64 = values
        .iter()
        .map(|v| {
            let d = v.as_f64() - mu;
            d * d
        })
        .sum::<f64>()
        / n;
    Ok(NumericValue::from_canonical(Canonical::Float(
        variance.sqrt(),
    )))
}

/// Midpoint of the extremes: `(min + max) / 2`, always a float.
pub fn midrange<I>(values: I) -> NumericResult<NumericValue>
where
    I: IntoIterator,
    I::Item: Into<Input>,
{
    let values = collect(values)?;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in &values {
        min = min.min(v.as_f64());
        max = max.max(v.as_f64());
    }
    Ok(NumericValue::from_canonical(Canonical::Float(
        (min + max) / 2.0,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(
            mean([1i64, 2, 3, 4]).unwrap().value(),
            Canonical::Float(2.5)
        );
        assert_eq!(mean([2i64, 2]).unwrap().value(), Canonical::Float(2.0));
    }

    #[test]
    fn test_median_even_count_is_float() {
        let m = median([1i64, 2, 3, 4]).unwrap();
        assert_eq!(m.value(), Canonical::Float(2.5));
        assert!(m.is_float());
        // Whole midpoint still floats on even counts.
        assert_eq!(median([1i64, 3]).unwrap().value(), Canonical::Float(2.0));
    }

    #[test]
    fn test_median_odd_count_preserves_representation() {
        let m = median([1i64, 2, 3]).unwrap();
        assert_eq!(m.value(), Canonical::Int(2));
        assert!(m.is_integer());

        let m = median([1.5, 2.5, 3.5]).unwrap();
        assert_eq!(m.value(), Canonical::Float(2.5));
    }

    #[test]
    fn test_median_sorts_first() {
        assert_eq!(median([3i64, 1, 2]).unwrap().value(), Canonical::Int(2));
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            mode([1i64, 2, 2, 3]).unwrap().value(),
            Canonical::Int(2)
        );
        // Ties resolve to the first-encountered value.
        assert_eq!(mode([3i64, 1, 3, 1]).unwrap().value(), Canonical::Int(3));
        // Loose equality groups 2 and 2.0 together.
        assert_eq!(
            mode([Input::from(2i64), Input::from(2.0), Input::from(1i64)])
                .unwrap()
                .value(),
            Canonical::Int(2)
        );
    }

    #[test]
    fn test_standard_deviation() {
        let sd = standard_deviation([2i64, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(sd.value(), Canonical::Float(2.0));
    }

    #[test]
    fn test_midrange() {
        assert_eq!(
            midrange([1i64, 9, 4]).unwrap().value(),
            Canonical::Float(5.0)
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(mean(Vec::<i64>::new()), Err(NumericError::EmptyInput));
        assert_eq!(median(Vec::<i64>::new()), Err(NumericError::EmptyInput));
        assert_eq!(mode(Vec::<i64>::new()), Err(NumericError::EmptyInput));
        assert_eq!(
            standard_deviation(Vec::<i64>::new()),
            Err(NumericError::EmptyInput)
        );
        assert_eq!(midrange(Vec::<i64>::new()), Err(NumericError::EmptyInput));
    }

    #[test]
    fn test_mixed_element_shapes() {
        // Strings and wrapped values normalize like everything else.
        let elements = [
            Input::from("0x0A"),
            Input::from(20i64),
            Input::from(NumericValue::from(30i64)),
        ];
        assert_eq!(mean(elements).unwrap().value(), Canonical::Float(20.0));
    }

    #[test]
    fn test_element_failure_propagates() {
        assert!(mean(["1", "2", "oops"]).is_err());
    }
}
