//! Comparable scalars extracted from free-text document fields.
//!
//! Duration strings are parsed tolerantly: the first run of decimal digits
//! is taken as a month count and the unit is ignored, so "6 weeks" and
//! "6 years" both count as 6. Every caller goes through [`phase_months`],
//! which is the one place a unit-aware parser would slot in.

use crate::models::TimelinePhase;

/// Month count of one duration string.
///
/// Returns the first decimal integer in `duration`, or 0 when there is none.
/// Absurdly long digit runs saturate instead of failing.
pub fn duration_months(duration: &str) -> u32 {
    duration
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(c.to_digit(10).unwrap_or(0))
        })
}

/// Month count of one timeline phase.
pub fn phase_months(phase: &TimelinePhase) -> u32 {
    duration_months(&phase.duration)
}

/// Sum of the month counts of all phases. Total and deterministic.
pub fn total_months(phases: &[TimelinePhase]) -> u32 {
    phases
        .iter()
        .map(phase_months)
        .fold(0u32, u32::saturating_add)
}
