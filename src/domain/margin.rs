//! Lead margin and returns-processed arithmetic.

use crate::error::ParseError;

/// Compute the target candidate's lead over the best-performing other
/// candidate in a flat stream of `(name, vote_count)` tallies.
///
/// A target that never appears counts as zero votes, so the result is
/// `0 - max(others)`. That mirrors the upstream feed's behavior when a
/// contest is missing and will read as a misleadingly large negative lead;
/// callers log a warning rather than guessing a correction.
pub fn lead<'a, I>(target: &str, tallies: I) -> i64
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut target_votes = 0;
    let mut best_opponent = 0;

    for (name, votes) in tallies {
        if name == target {
            target_votes = votes;
        } else if votes > best_opponent {
            best_opponent = votes;
        }
    }

    target_votes - best_opponent
}

/// Parse the feed's `"N/M"` returns-processed field into a fraction.
///
/// Lies in [0, 1] whenever the feed reports `0 <= N <= M`; the value is
/// passed through unchecked beyond numeric parsing.
pub fn processed_fraction(raw: &str) -> Result<f64, ParseError> {
    let (count, total) = raw.split_once('/').ok_or_else(|| ParseError::MissingSeparator {
        raw: raw.to_string(),
    })?;

    let count: f64 = count.parse().map_err(|e| ParseError::InvalidNumber {
        raw: raw.to_string(),
        source: e,
    })?;
    let total: f64 = total.parse().map_err(|e| ParseError::InvalidNumber {
        raw: raw.to_string(),
        source: e,
    })?;

    Ok(count / total)
}
