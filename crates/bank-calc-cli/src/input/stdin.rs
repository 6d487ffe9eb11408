use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise a calculation request piped on stdin into a typed engine
/// input. A terminal or an empty pipe yields `None`, leaving the caller to
/// report which flags are missing.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    read_request(io::stdin().lock())
}

fn read_request<T: DeserializeOwned, R: Read>(
    mut reader: R,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    tracing::debug!(bytes = body.len(), "reading request from stdin");
    let request = serde_json::from_str(body)
        .map_err(|e| format!("Failed to parse request on stdin: {e}"))?;
    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_calc_core::date_interest::DateRangeInput;
    use bank_calc_core::fixed_deposit::{FdInput, PayoutMode};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_piped_request_is_typed() {
        let body = r#" {"principal":"100000","annual_rate_percent":"10","tenure_months":12,"payout_mode":"at_maturity"} "#;
        let request: FdInput = read_request(body.as_bytes()).unwrap().unwrap();
        assert_eq!(request.principal, dec!(100000));
        assert_eq!(request.payout_mode, PayoutMode::AtMaturity);
    }

    #[test]
    fn test_day_first_dates_on_stdin() {
        let body = r#"{"start_date":"01-01-2024","end_date":"31-01-2024","balance":"500","annual_rate_percent":"4"}"#;
        let request: DateRangeInput = read_request(body.as_bytes()).unwrap().unwrap();
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_empty_pipe_is_no_request() {
        let request: Option<FdInput> = read_request("  \n".as_bytes()).unwrap();
        assert!(request.is_none());
    }

    #[test]
    fn test_malformed_request_names_stdin() {
        let err = read_request::<FdInput, _>("{not json".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }
}
