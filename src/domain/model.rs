use crate::utils::error::{EbitdaError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest business year OpenDART serves financial statements for.
pub const MIN_YEAR: i32 = 2015;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCode {
    #[serde(rename = "11011")]
    Annual,
    #[serde(rename = "11012")]
    SemiAnnual,
    #[serde(rename = "11013")]
    Q1,
    #[serde(rename = "11014")]
    Q3,
}

impl ReportCode {
    pub fn code(&self) -> &'static str {
        match self {
            ReportCode::Annual => "11011",
            ReportCode::SemiAnnual => "11012",
            ReportCode::Q1 => "11013",
            ReportCode::Q3 => "11014",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportCode::Annual => "사업보고서 (연간)",
            ReportCode::SemiAnnual => "반기보고서",
            ReportCode::Q1 => "1분기보고서",
            ReportCode::Q3 => "3분기보고서",
        }
    }
}

impl fmt::Display for ReportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ReportCode {
    type Err = EbitdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "11011" | "annual" => Ok(ReportCode::Annual),
            "11012" | "semiannual" | "half" => Ok(ReportCode::SemiAnnual),
            "11013" | "q1" => Ok(ReportCode::Q1),
            "11014" | "q3" => Ok(ReportCode::Q3),
            _ => Err(EbitdaError::ValidationError {
                message: format!("unknown report code: {}", s),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FsDiv {
    #[serde(rename = "CFS")]
    Consolidated,
    #[serde(rename = "OFS")]
    Separate,
}

impl FsDiv {
    pub fn code(&self) -> &'static str {
        match self {
            FsDiv::Consolidated => "CFS",
            FsDiv::Separate => "OFS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FsDiv::Consolidated => "연결재무제표",
            FsDiv::Separate => "개별재무제표",
        }
    }
}

impl fmt::Display for FsDiv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FsDiv {
    type Err = EbitdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cfs" | "consolidated" => Ok(FsDiv::Consolidated),
            "ofs" | "separate" | "standalone" => Ok(FsDiv::Separate),
            _ => Err(EbitdaError::ValidationError {
                message: format!("unknown financial statement division: {}", s),
            }),
        }
    }
}

/// One search as submitted. Built fresh per search and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub company: String,
    pub year: i32,
    pub report_code: ReportCode,
    pub fs_div: FsDiv,
}

impl Query {
    pub fn new(company: impl Into<String>, year: i32, report_code: ReportCode, fs_div: FsDiv) -> Self {
        Self {
            company: company.into().trim().to_string(),
            year,
            report_code,
            fs_div,
        }
    }

    /// A 6-digit numeric company is looked up as a stock code.
    pub fn is_stock_code(&self) -> bool {
        self.company.len() == 6 && self.company.chars().all(|c| c.is_ascii_digit())
    }

    pub(crate) fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("company", self.company.clone()),
            ("year", self.year.to_string()),
            ("report_code", self.report_code.code().to_string()),
            ("fs_div", self.fs_div.code().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub corp_code: String,
    pub corp_name: String,
    #[serde(default)]
    pub stock_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub year: i32,
    pub report_code: ReportCode,
    pub report_name: String,
    pub fs_div: FsDiv,
    pub fs_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentAmount {
    pub label: String,
    #[serde(deserialize_with = "de_amount")]
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbitdaComponents {
    pub operating_income: ComponentAmount,
    pub depreciation: ComponentAmount,
    pub amortization: ComponentAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbitdaTotal {
    #[serde(deserialize_with = "de_amount")]
    pub total: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub basis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Filing reference (DART receipt number).
    #[serde(default)]
    pub rcept_no: Option<String>,
    pub fetched_at: String,
    #[serde(default)]
    pub cached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Alert,
    Info,
    /// A severity this client does not know; classified from the text.
    #[serde(other)]
    Unrecognized,
}

/// A backend warning. Current backends send bare strings; a structured
/// form with an explicit severity is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Warning {
    Plain(String),
    Tagged {
        message: String,
        #[serde(default)]
        severity: Option<WarningSeverity>,
    },
}

impl Warning {
    pub fn message(&self) -> &str {
        match self {
            Warning::Plain(message) | Warning::Tagged { message, .. } => message,
        }
    }
}

/// Result of one successful lookup, decoded as-is from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbitdaResponse {
    pub company: CompanyInfo,
    pub period: PeriodInfo,
    pub components: EbitdaComponents,
    pub ebitda: EbitdaTotal,
    pub source: SourceInfo,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

/// One chart row. Values are in millions of the base currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub ebitda: f64,
    pub operating_income: f64,
    pub depreciation: f64,
    pub amortization: f64,
}

fn default_currency() -> String {
    "KRW".to_string()
}

// The backend serializes amounts from floats, so `150000000.0` has to decode.
fn de_amount<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Float(value) if value.is_finite() => Ok(value.round() as i64),
        Raw::Float(value) => Err(serde::de::Error::custom(format!(
            "amount is not a finite number: {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_json;

    #[test]
    fn test_decode_response_with_float_amounts() {
        let response: EbitdaResponse = serde_json::from_value(sample_json(2023)).unwrap();

        assert_eq!(response.period.year, 2023);
        assert_eq!(response.period.report_code, ReportCode::Annual);
        assert_eq!(response.period.fs_div, FsDiv::Consolidated);
        assert_eq!(response.components.operating_income.amount, 6_566_976_000_000);
        assert_eq!(response.components.amortization.currency, "KRW");
        assert_eq!(response.ebitda.total, 48_270_175_000_000);
        assert_eq!(response.company.stock_code.as_deref(), Some("005930"));
        assert_eq!(response.warnings.len(), 1);
    }

    #[test]
    fn test_decode_missing_optional_fields() {
        let mut json = sample_json(2022);
        json["company"].as_object_mut().unwrap().remove("stock_code");
        json["source"].as_object_mut().unwrap().remove("rcept_no");
        json.as_object_mut().unwrap().remove("warnings");

        let response: EbitdaResponse = serde_json::from_value(json).unwrap();
        assert!(response.company.stock_code.is_none());
        assert!(response.source.rcept_no.is_none());
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_decode_structured_warning() {
        let warnings: Vec<Warning> = serde_json::from_value(serde_json::json!([
            "plain text",
            {"message": "account missing", "severity": "alert"}
        ]))
        .unwrap();

        assert_eq!(warnings[0], Warning::Plain("plain text".to_string()));
        assert_eq!(
            warnings[1],
            Warning::Tagged {
                message: "account missing".to_string(),
                severity: Some(WarningSeverity::Alert)
            }
        );
        assert_eq!(warnings[1].message(), "account missing");
    }

    #[test]
    fn test_unknown_warning_severity_still_decodes() {
        let mut json = sample_json(2023);
        json["warnings"] = serde_json::json!([
            {"message": "⚠️ 감가상각비 계정을 찾을 수 없습니다.", "severity": "warning"}
        ]);

        let response: EbitdaResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            response.warnings[0],
            Warning::Tagged {
                message: "⚠️ 감가상각비 계정을 찾을 수 없습니다.".to_string(),
                severity: Some(WarningSeverity::Unrecognized)
            }
        );
    }

    #[test]
    fn test_report_code_vocabulary() {
        assert_eq!("11011".parse::<ReportCode>().unwrap(), ReportCode::Annual);
        assert_eq!("semiannual".parse::<ReportCode>().unwrap(), ReportCode::SemiAnnual);
        assert_eq!("Q1".parse::<ReportCode>().unwrap(), ReportCode::Q1);
        assert_eq!(ReportCode::Q3.code(), "11014");
        assert!("11015".parse::<ReportCode>().is_err());
        assert_eq!(serde_json::to_string(&ReportCode::SemiAnnual).unwrap(), "\"11012\"");
    }

    #[test]
    fn test_fs_div_vocabulary() {
        assert_eq!("CFS".parse::<FsDiv>().unwrap(), FsDiv::Consolidated);
        assert_eq!("separate".parse::<FsDiv>().unwrap(), FsDiv::Separate);
        assert_eq!(FsDiv::Separate.display_name(), "개별재무제표");
        assert!("XFS".parse::<FsDiv>().is_err());
    }

    #[test]
    fn test_query_helpers() {
        let query = Query::new(" 005930 ", 2023, ReportCode::Annual, FsDiv::Consolidated);
        assert_eq!(query.company, "005930");
        assert!(query.is_stock_code());
        assert!(!Query::new("삼성전자", 2023, ReportCode::Annual, FsDiv::Separate).is_stock_code());

        let pairs = query.query_pairs();
        assert_eq!(pairs[2], ("report_code", "11011".to_string()));
        assert_eq!(pairs[3], ("fs_div", "CFS".to_string()));
    }
}
