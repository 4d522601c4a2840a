//! Change report formatting for Telegram.

use super::Snapshot;

/// Percentage-point delta of the lead between two snapshots,
/// `(old - new) * 100 / new`. Positive when the lead shrank.
///
/// Undefined when the new lead is zero; returns `None` rather than an
/// infinity that would leak into the message.
pub fn lead_delta_pct(old: &Snapshot, new: &Snapshot) -> Option<f64> {
    if new.lead == 0 {
        return None;
    }
    Some((old.lead - new.lead) as f64 * 100.0 / new.lead as f64)
}

/// Markdown wrapper for the lead line: monospace when the lead grew,
/// bold when it shrank, bare when flat or undefined.
fn modifier(delta: Option<f64>) -> &'static str {
    match delta {
        Some(d) if d < 0.0 => "`",
        Some(d) if d > 0.0 => "*",
        _ => "",
    }
}

/// English-locale thousands grouping, sign-aware.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render the three-line notification message.
///
/// ```text
/// Lead: *1,234 (11.11%)*
/// Processed: 55.00%
/// Remaining: 45.00%
/// ```
pub fn format_message(old: &Snapshot, new: &Snapshot) -> String {
    let delta = lead_delta_pct(old, new);
    let wrap = modifier(delta);
    let grouped = group_thousands(new.lead);

    let lead_line = match delta {
        Some(d) => format!("{wrap}{grouped} ({d:.2}%){wrap}"),
        None => grouped,
    };

    let reported = new.processed * 100.0;
    format!(
        "Lead: {lead_line}\nProcessed: {reported:.2}%\nRemaining: {:.2}%",
        100.0 - reported
    )
}
