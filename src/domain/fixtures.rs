use crate::domain::model::EbitdaResponse;

/// A service payload shaped like the real backend's, floats included.
pub(crate) fn sample_json(year: i32) -> serde_json::Value {
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
            "depreciation": {"label": "감가상각비", "amount": 38666559000000i64, "currency": "KRW"},
            "amortization": {"label": "무형자산상각비", "amount": 3036640000000.0}
        },
        "ebitda": {"total": 48270175000000.0, "currency": "KRW", "basis": "당기금액"},
        "source": {"rcept_no": "20240312000736", "fetched_at": "2024-05-01T09:30:00", "cached": false},
        "warnings": ["ℹ️ 당기금액 기준으로 계산되었습니다 (연간 실적)."]
    })
}

pub(crate) fn sample_response(year: i32) -> EbitdaResponse {
    serde_json::from_value(sample_json(year)).expect("fixture must decode")
}
