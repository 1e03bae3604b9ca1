//! Per-bill indicator effects over a forward time window.

use tracing::debug;

use polis_core::config::IndicatorSpec;
use polis_core::errors::IndicatorError;
use polis_core::types::{BillRecord, IndicatorEffect, IndicatorRow};

use super::lookup::IndicatorLookup;
use super::store::IndicatorStore;

/// Whole half-years covered by a window in months.
///
/// Any window under 12 months collapses to exactly one half-year ahead, and
/// zero or negative windows clamp to one. Deliberate: the indicator grid is
/// half-yearly, so finer precision does not exist.
pub fn semesters_ahead(window_months: i32) -> i32 {
    (window_months.div_euclid(6)).max(1)
}

/// Parse an ISO-like `YYYY-MM-DD…` date into (year, semester).
///
/// Only year and month matter: months 1–6 map to semester 1, 7–12 to
/// semester 2. Anything that does not yield a year/month pair is `None`.
pub fn encode_semester(date: &str) -> Option<(i32, u8)> {
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, if month <= 6 { 1 } else { 2 }))
}

/// Advance (year, semester) by a number of half-years, carrying one year
/// for every two half-years.
pub fn advance_semester(year: i32, semester: u8, semesters: i32) -> (i32, u8) {
    let target = (i32::from(semester) - 1) + semesters;
    (year + target.div_euclid(2), (target.rem_euclid(2) + 1) as u8)
}

/// Compute effects for `bills` against the spec's indicator, loading rows
/// through the store's cache.
pub fn compute_effects(
    store: &IndicatorStore,
    bills: &[BillRecord],
    spec: &IndicatorSpec,
    window_months: i32,
) -> Result<Vec<IndicatorEffect>, IndicatorError> {
    let rows = store.rows(spec)?;
    Ok(effects_from_rows(&rows, bills, spec, window_months))
}

/// Compute effects from an already-loaded row sequence.
///
/// One effect per bill whose current and future values both resolve, in
/// input-bill order. Bills are skipped (never errored) when municipality,
/// state, or presentation date is missing, the date does not parse, either
/// lookup value is absent, the baseline sits below `spec.min_value`, or the
/// baseline is zero (percent change undefined).
pub fn effects_from_rows(
    rows: &[IndicatorRow],
    bills: &[BillRecord],
    spec: &IndicatorSpec,
    window_months: i32,
) -> Vec<IndicatorEffect> {
    let lookup = IndicatorLookup::from_rows(rows);
    let ahead = semesters_ahead(window_months);

    let mut effects = Vec::new();
    let mut skipped = 0usize;
    for bill in bills {
        match effect_for_bill(bill, &lookup, spec, ahead) {
            Some(effect) => effects.push(effect),
            None => skipped += 1,
        }
    }
    debug!(
        indicator = %spec.id,
        window_months,
        emitted = effects.len(),
        skipped,
        "computed indicator effects"
    );
    effects
}

fn effect_for_bill(
    bill: &BillRecord,
    lookup: &IndicatorLookup,
    spec: &IndicatorSpec,
    semesters: i32,
) -> Option<IndicatorEffect> {
    let municipality = bill.municipality.as_deref()?;
    let state = bill.state.as_deref()?;
    let presented_at = bill.presented_at.as_deref()?;
    let (year, semester) = encode_semester(presented_at)?;

    let city = municipality.trim().to_uppercase();
    let uf = state.trim().to_uppercase();

    let current = lookup.get(&city, &uf, year, semester)?;
    let (future_year, future_semester) = advance_semester(year, semester, semesters);
    let future = lookup.get(&city, &uf, future_year, future_semester)?;

    if current < spec.min_value {
        return None;
    }
    if current == 0.0 {
        return None;
    }

    Some(IndicatorEffect {
        index: bill.index,
        municipality: municipality.to_string(),
        state: state.to_string(),
        action: bill.action.clone(),
        presented_at: presented_at.to_string(),
        effect: (future - current) / current * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_collapses_to_whole_semesters() {
        for months in 1..=6 {
            assert_eq!(semesters_ahead(months), 1, "months = {months}");
        }
        for months in 7..=11 {
            assert_eq!(semesters_ahead(months), 1, "months = {months}");
        }
        assert_eq!(semesters_ahead(12), 2);
        for months in 13..=17 {
            assert_eq!(semesters_ahead(months), 2, "months = {months}");
        }
        assert_eq!(semesters_ahead(18), 3);
        assert_eq!(semesters_ahead(24), 4);
    }

    #[test]
    fn non_positive_windows_clamp_to_one() {
        assert_eq!(semesters_ahead(0), 1);
        assert_eq!(semesters_ahead(-6), 1);
    }

    #[test]
    fn encodes_month_to_semester() {
        assert_eq!(encode_semester("2020-02-15"), Some((2020, 1)));
        assert_eq!(encode_semester("2020-06-30"), Some((2020, 1)));
        assert_eq!(encode_semester("2020-07-01"), Some((2020, 2)));
        assert_eq!(encode_semester("2019-12-31T23:59:59"), Some((2019, 2)));
    }

    #[test]
    fn rejects_unparsable_dates() {
        assert_eq!(encode_semester(""), None);
        assert_eq!(encode_semester("2020"), None);
        assert_eq!(encode_semester("not-a-date"), None);
        assert_eq!(encode_semester("2020-13-01"), None);
        assert_eq!(encode_semester("2020-00-01"), None);
    }

    #[test]
    fn advances_with_year_carry() {
        assert_eq!(advance_semester(2020, 1, 1), (2020, 2));
        assert_eq!(advance_semester(2020, 2, 1), (2021, 1));
        assert_eq!(advance_semester(2020, 1, 2), (2021, 1));
        assert_eq!(advance_semester(2020, 2, 3), (2022, 1));
    }
}
