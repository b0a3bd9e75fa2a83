use crate::{error::ValueError, numeric::Numeric};

/// An extreme value of a column and where it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    /// Position of the **last** occurrence of `value`.
    pub index: usize,
}

fn coerce<T: Numeric>(values: &[T]) -> Result<Vec<f64>, ValueError> {
    values.iter().map(Numeric::to_f64).collect()
}

/// Walk the column keeping the candidate that `replaces` says should win.
/// Equal values replace the candidate too, so the last occurrence is kept.
fn find_extremum<T: Numeric>(
    values: &[T],
    replaces: fn(f64, f64) -> bool,
) -> Result<Option<Extremum>, ValueError> {
    let mut best: Option<Extremum> = None;
    for (index, value) in coerce(values)?.into_iter().enumerate() {
        if best.map_or(true, |current| replaces(value, current.value)) {
            best = Some(Extremum { value, index });
        }
    }
    Ok(best)
}

/// Smallest value and the index of its last occurrence, `None` when empty.
pub fn find_min<T: Numeric>(values: &[T]) -> Result<Option<Extremum>, ValueError> {
    find_extremum(values, |value, current| value <= current)
}

/// Largest value and the index of its last occurrence, `None` when empty.
pub fn find_max<T: Numeric>(values: &[T]) -> Result<Option<Extremum>, ValueError> {
    find_extremum(values, |value, current| value >= current)
}

/// Arithmetic mean of numbers or numeric strings.
pub fn calculate_mean<T: Numeric>(values: &[T]) -> Result<f64, ValueError> {
    if values.is_empty() {
        return Err(ValueError::EmptySequence);
    }
    let values = coerce(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
