//! Plain-text renderers for lookup results, series and warnings.

use crate::core::warnings::classify;
use crate::domain::model::{ComponentAmount, EbitdaResponse, TimeSeriesPoint, Warning, WarningSeverity};
use crate::utils::error::EbitdaError;
use crate::utils::format::{
    calculate_percentage, format_amount, format_chart_amount, format_date, format_percentage,
};
use std::fmt::Write;

const DART_VIEWER_URL: &str = "https://dart.fss.or.kr/dsaf001/main.do?rcpNo=";

/// Link to the filing a figure was extracted from.
pub fn filing_url(rcept_no: &str) -> String {
    format!("{}{}", DART_VIEWER_URL, rcept_no)
}

pub fn render_table(response: &EbitdaResponse) -> String {
    let EbitdaResponse {
        company,
        period,
        components,
        ebitda,
        source,
        ..
    } = response;
    let mut out = String::new();

    let _ = writeln!(out, "{}", company.corp_name);
    match &company.stock_code {
        Some(stock_code) => {
            let _ = writeln!(out, "종목코드: {} | 고유번호: {}", stock_code, company.corp_code);
        }
        None => {
            let _ = writeln!(out, "고유번호: {}", company.corp_code);
        }
    }
    let _ = writeln!(
        out,
        "{}년 {} | {} | {}",
        period.year,
        period.report_name,
        period.fs_name,
        if source.cached { "캐시 데이터" } else { "실시간 조회" }
    );
    if let Some(rcept_no) = &source.rcept_no {
        let _ = writeln!(out, "접수번호: {} ({})", rcept_no, filing_url(rcept_no));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "EBITDA: {} (계산 기준: {})", format_amount(ebitda.total), ebitda.basis);
    let _ = writeln!(out);

    let _ = writeln!(out, "{:<20} {:>16} {:>8}", "항목", "금액", "비율");
    for component in [
        &components.operating_income,
        &components.depreciation,
        &components.amortization,
    ] {
        out.push_str(&component_row(component, ebitda.total));
    }
    let _ = writeln!(out, "{:<20} {:>16} {:>8}", "총 EBITDA", format_amount(ebitda.total), "100%");
    let _ = writeln!(out);

    let _ = writeln!(out, "조회 시각: {}", format_date(&source.fetched_at));
    out
}

fn component_row(component: &ComponentAmount, total: i64) -> String {
    format!(
        "{:<20} {:>16} {:>8}\n",
        component.label,
        format_amount(component.amount),
        format_percentage(calculate_percentage(component.amount, total))
    )
}

/// Empty series render as nothing; the caller decides how to show "no data".
pub fn render_series(points: &[TimeSeriesPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>10} {:>10} {:>10} {:>10}",
        "연도", "EBITDA", "영업이익", "감가상각비", "무형자산상각비"
    );
    for point in points {
        let _ = writeln!(
            out,
            "{:<6} {:>10} {:>10} {:>10} {:>10}",
            point.year,
            format_chart_amount(point.ebitda),
            format_chart_amount(point.operating_income),
            format_chart_amount(point.depreciation),
            format_chart_amount(point.amortization)
        );
    }
    let _ = writeln!(out, "데이터가 없는 연도는 자동으로 제외됩니다.");
    out
}

pub fn render_warnings(warnings: &[Warning]) -> String {
    warnings
        .iter()
        .map(|warning| {
            let tag = match classify(warning) {
                WarningSeverity::Alert => "[!]",
                WarningSeverity::Info | WarningSeverity::Unrecognized => "[i]",
            };
            format!("{} {}\n", tag, warning.message())
        })
        .collect()
}

pub fn render_error(error: &EbitdaError) -> String {
    format!("오류 발생: {}\n", error.user_friendly_message())
}
