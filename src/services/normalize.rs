use crate::domain::{Game, RawEntry, Slot};
use tracing::{debug, warn};

/// Exponent applied to the median in the denominator.
pub const MEDIAN_EXPONENT: f64 = 0.4;

/// Median of an unsorted sample, averaging the two middle values for even
/// lengths. `None` when the sample is empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Scores every participant of one game relative to the day's median.
///
/// Output is aligned with `raw`: absent slots stay absent, malformed or
/// non-finite entries score `0.0` and are left out of the median.
pub fn normalize(raw: &[Slot], game: &Game) -> Vec<Option<f64>> {
    let divisor = game.divisor();

    let present: Vec<f64> = raw
        .iter()
        .flatten()
        .filter_map(RawEntry::value)
        .filter(|value| value.is_finite())
        .map(|value| value / divisor)
        .collect();

    let Some(median) = median(&present) else {
        if raw.iter().any(Option::is_some) {
            warn!("{}: no usable values, every entry is malformed", game.name);
        }
        return raw.iter().map(|slot| slot.as_ref().map(|_| 0.0)).collect();
    };

    debug!(
        "{}: median {:.3} over {} participants",
        game.name,
        median,
        present.len()
    );

    let scale = median.abs().powf(MEDIAN_EXPONENT);

    raw.iter()
        .map(|slot| {
            slot.as_ref().map(|entry| match entry {
                RawEntry::Value(value) if !value.is_finite() => {
                    warn!("{}: non-finite entry {} scored as 0", game.name, value);
                    0.0
                }
                RawEntry::Value(value) => {
                    let value = value / divisor;
                    if median == 0.0 {
                        value
                    } else {
                        (value - median) / scale
                    }
                }
                RawEntry::Malformed(text) => {
                    warn!("{}: malformed entry {:?} scored as 0", game.name, text);
                    0.0
                }
            })
        })
        .collect()
}
