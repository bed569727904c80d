use crate::error::ExtractError;
use crate::extractor::StatusCode;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

const RESPONSE_FIELD: &str = "Resp";

/// Extracts the status code from the status line of a record's `Resp` text.
///
/// The status line is everything before the first `\n`; its second
/// whitespace-separated field must be a decimal number in `100..=599`.
pub fn extract(line: &[u8]) -> Result<StatusCode, ExtractError> {
    // Raw response bodies may carry invalid UTF-8; those bytes become U+FFFD.
    let text = String::from_utf8_lossy(line);
    let value = serde_json::from_str::<Value>(&text).map_err(ExtractError::MalformedRecord)?;

    let resp = match response_text(value).map_err(ExtractError::MalformedRecord)? {
        Some(resp) if !resp.is_empty() => resp,
        _ => return Err(ExtractError::EmptyResponse),
    };

    let status_line = resp.split('\n').next().unwrap_or_default();
    let fields: Vec<&str> = status_line.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(ExtractError::MalformedStatusLine {
            fields: fields.len(),
        });
    }

    let value: i64 = fields[1]
        .parse()
        .map_err(|source| ExtractError::InvalidStatusCode {
            field: fields[1].to_string(),
            source,
        })?;

    StatusCode::new(value).ok_or(ExtractError::OutOfRangeStatusCode { value })
}

// Only the raw response is needed; every other field of the log record is ignored.
// The key matches case-insensitively, with an exact `Resp` taking precedence.
fn response_text(record: Value) -> Result<Option<String>, serde_json::Error> {
    let mut object = match record {
        Value::Null => return Ok(None),
        Value::Object(object) => object,
        _ => return Err(serde_json::Error::custom("expected a JSON object")),
    };

    let key = if object.contains_key(RESPONSE_FIELD) {
        Some(RESPONSE_FIELD.to_string())
    } else {
        object
            .keys()
            .find(|key| key.eq_ignore_ascii_case(RESPONSE_FIELD))
            .cloned()
    };

    match key.and_then(|key| object.remove(&key)) {
        Some(resp) => Option::<String>::deserialize(resp),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(line: &str) -> Option<u16> {
        extract(line.as_bytes()).ok().map(StatusCode::as_u16)
    }

    #[test]
    fn test_valid_status_lines() {
        assert_eq!(code(r#"{"Resp":"HTTP/1.1 200 OK\r\nServer: x\r\n\r\n"}"#), Some(200));
        assert_eq!(code(r#"{"Resp":"HTTP/1.0 404 Not Found"}"#), Some(404));
        assert_eq!(code(r#"{"Resp":"HTTP/2 100"}"#), Some(100));
        assert_eq!(code(r#"{"Resp":"HTTP/1.1 599 Custom\n"}"#), Some(599));
        assert_eq!(code("{\"Resp\":\"  HTTP/1.1\\t301   Moved\"}\n"), Some(301));
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let line = r#"{"Req":"GET / HTTP/1.1","Time":12,"Resp":"HTTP/1.1 503 Busy"}"#;
        assert_eq!(code(line), Some(503));
    }

    #[test]
    fn test_malformed_record() {
        for line in [
            "",
            "not json",
            "{\"Resp\":",
            "[1,2]",
            r#"["HTTP/1.1 200 OK"]"#,
            r#""HTTP/1.1 200 OK""#,
            r#"{"Resp":200}"#,
        ] {
            assert!(
                matches!(extract(line.as_bytes()), Err(ExtractError::MalformedRecord(_))),
                "should reject: {:?}",
                line
            );
        }
        assert!(matches!(
            extract(&[0xff, 0xfe]),
            Err(ExtractError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_empty_response() {
        for line in [
            "{}",
            r#"{"Resp":""}"#,
            r#"{"Resp":null}"#,
            "null",
            r#"{"Response":"HTTP/1.1 200 OK"}"#,
        ] {
            assert!(
                matches!(extract(line.as_bytes()), Err(ExtractError::EmptyResponse)),
                "should be empty: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_response_key_is_case_insensitive() {
        assert_eq!(code(r#"{"resp":"HTTP/1.1 200 OK"}"#), Some(200));
        assert_eq!(code(r#"{"RESP":"HTTP/1.1 302 Found"}"#), Some(302));
        assert_eq!(
            code(r#"{"resp":"HTTP/1.1 500 Error","Resp":"HTTP/1.1 201 Created"}"#),
            Some(201)
        );
        assert!(matches!(
            extract(br#"{"rEsP":7}"#),
            Err(ExtractError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_inside_strings_is_tolerated() {
        let mut line = br#"{"Body":""#.to_vec();
        line.extend_from_slice(&[0xff, 0xfe]);
        line.extend_from_slice(br#"","Resp":"HTTP/1.1 206 Partial\r\n"}"#);
        assert_eq!(extract(&line).ok().map(StatusCode::as_u16), Some(206));

        let mut line = br#"{"Resp":"HTTP/1.1 200 OK "#.to_vec();
        line.push(0xc3);
        line.extend_from_slice(b"\"}");
        assert_eq!(extract(&line).ok().map(StatusCode::as_u16), Some(200));
    }

    #[test]
    fn test_malformed_status_line() {
        assert!(matches!(
            extract(br#"{"Resp":"HTTP/1.1"}"#),
            Err(ExtractError::MalformedStatusLine { fields: 1 })
        ));
        assert!(matches!(
            extract(br#"{"Resp":"\nHTTP/1.1 200 OK"}"#),
            Err(ExtractError::MalformedStatusLine { fields: 0 })
        ));
        assert!(matches!(
            extract(br#"{"Resp":"HTTP/1.1\n200 OK"}"#),
            Err(ExtractError::MalformedStatusLine { fields: 1 })
        ));
    }

    #[test]
    fn test_invalid_status_code() {
        for line in [
            r#"{"Resp":"HTTP/1.1 OK 200"}"#,
            r#"{"Resp":"HTTP/1.1 2OO OK"}"#,
            r#"{"Resp":"HTTP/1.1 200.0 OK"}"#,
            r#"{"Resp":"HTTP/1.1 99999999999999999999 OK"}"#,
        ] {
            assert!(
                matches!(extract(line.as_bytes()), Err(ExtractError::InvalidStatusCode { .. })),
                "should reject: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_out_of_range_status_code() {
        assert!(matches!(
            extract(br#"{"Resp":"HTTP/1.1 99 Low"}"#),
            Err(ExtractError::OutOfRangeStatusCode { value: 99 })
        ));
        assert!(matches!(
            extract(br#"{"Resp":"HTTP/1.1 600 High"}"#),
            Err(ExtractError::OutOfRangeStatusCode { value: 600 })
        ));
        assert!(matches!(
            extract(br#"{"Resp":"HTTP/1.1 -200 Neg"}"#),
            Err(ExtractError::OutOfRangeStatusCode { value: -200 })
        ));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let line = br#"{"Resp":"HTTP/1.1 418 Teapot"}"#;
        assert_eq!(extract(line).ok(), extract(line).ok());
    }
}
