use crate::domain::model::{Query, MIN_YEAR};
use crate::utils::error::{EbitdaError, Result};
use chrono::{Datelike, Local};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EbitdaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EbitdaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EbitdaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EbitdaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EbitdaError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EbitdaError::ValidationError {
            message: format!(
                "{} must be between {} and {} (got {})",
                field_name, min, max, value
            ),
        });
    }
    Ok(())
}

impl Validate for Query {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("company", &self.company)?;
        validate_range("year", self.year, MIN_YEAR, Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FsDiv, ReportCode};

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_query() {
        let this_year = Local::now().year();
        let ok = Query::new("삼성전자", this_year, ReportCode::Annual, FsDiv::Consolidated);
        assert!(ok.validate().is_ok());

        let blank = Query::new("   ", this_year, ReportCode::Annual, FsDiv::Consolidated);
        assert!(matches!(blank.validate(), Err(EbitdaError::ValidationError { .. })));

        let too_old = Query::new("005930", 2010, ReportCode::Q1, FsDiv::Separate);
        assert!(too_old.validate().is_err());

        let future = Query::new("005930", this_year + 1, ReportCode::Q3, FsDiv::Separate);
        assert!(future.validate().is_err());
    }
}
