#![allow(dead_code)]

use ebitda_dash::ApiClient;
use std::time::Duration;

pub fn ebitda_payload(year: i32) -> serde_json::Value {
    serde_json::json!({
        "company": {"corp_code": "00126380", "corp_name": "삼성전자", "stock_code": "005930"},
        "period": {
            "year": year,
            "report_code": "11011",
            "report_name": "사업보고서",
            "fs_div": "CFS",
            "fs_name": "연결재무제표"
        },
        "components": {
            "operating_income": {"label": "영업이익", "amount": 6566976000000.0, "currency": "KRW"},
            "depreciation": {"label": "감가상각비", "amount": 38666559000000.0, "currency": "KRW"},
            "amortization": {"label": "무형자산상각비", "amount": 3036640000000.0, "currency": "KRW"}
        },
        "ebitda": {"total": 48270175000000.0, "currency": "KRW", "basis": "당기금액"},
        "source": {"rcept_no": null, "fetched_at": "2024-05-01T09:30:00.123456", "cached": true},
        "warnings": [
            "⚠️ 감가상각비 계정을 찾을 수 없습니다. 현금흐름표에 해당 항목이 없는지 확인해주세요.",
            "ℹ️ 당기금액 기준으로 계산되었습니다 (연간 실적)."
        ]
    })
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5)).unwrap()
}

/// Nothing listens on port 1.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
