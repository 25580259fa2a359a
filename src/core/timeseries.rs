use crate::config::MAX_SERIES_YEARS;
use crate::core::settle::{keep_successes, settle_all};
use crate::domain::model::{EbitdaResponse, FsDiv, Query, ReportCode, TimeSeriesPoint};
use crate::domain::ports::EbitdaSource;
use crate::utils::format::{recent_years, CHART_UNIT};
use std::collections::BTreeSet;

/// Looks up every requested year concurrently and returns the years that
/// succeeded, ascending. Failed years are simply absent; if none succeed
/// the result is empty rather than an error.
pub async fn fetch_series<S>(
    source: &S,
    company: &str,
    years: &[i32],
    report_code: ReportCode,
    fs_div: FsDiv,
) -> Vec<EbitdaResponse>
where
    S: EbitdaSource + ?Sized,
{
    let requested: BTreeSet<i32> = years.iter().copied().collect();
    let queries: Vec<Query> = requested
        .iter()
        .map(|&year| Query::new(company, year, report_code, fs_div))
        .collect();

    tracing::debug!(
        "fetching {} years for {} ({}, {})",
        queries.len(),
        company,
        report_code,
        fs_div
    );

    let outcomes = settle_all(queries.iter().map(|query| source.fetch(query))).await;
    let mut results = keep_successes(outcomes);

    results.sort_by_key(|response| response.period.year);

    // a year outside the request, or a repeat, would break the series
    let mut seen = BTreeSet::new();
    results.retain(|response| {
        let year = response.period.year;
        requested.contains(&year) && seen.insert(year)
    });

    tracing::debug!("series for {} has {} points", company, results.len());
    results
}

/// The last `count` years, capped at [`MAX_SERIES_YEARS`].
pub async fn fetch_recent_series<S>(
    source: &S,
    company: &str,
    count: usize,
    report_code: ReportCode,
    fs_div: FsDiv,
) -> Vec<EbitdaResponse>
where
    S: EbitdaSource + ?Sized,
{
    let years = recent_years(count.min(MAX_SERIES_YEARS));
    fetch_series(source, company, &years, report_code, fs_div).await
}

pub fn to_chart_point(response: &EbitdaResponse) -> TimeSeriesPoint {
    let scale = |amount: i64| amount as f64 / CHART_UNIT as f64;
    let components = &response.components;

    TimeSeriesPoint {
        year: response.period.year,
        ebitda: scale(response.ebitda.total),
        operating_income: scale(components.operating_income.amount),
        depreciation: scale(components.depreciation.amount),
        amortization: scale(components.amortization.amount),
    }
}

pub fn to_chart_points(series: &[EbitdaResponse]) -> Vec<TimeSeriesPoint> {
    series.iter().map(to_chart_point).collect()
}
