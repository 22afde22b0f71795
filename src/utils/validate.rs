use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const TITLE_MAX_CHARS: usize = 200;
pub const NOTE_MAX_CHARS: usize = 500;
pub const FEEDBACK_MAX_CHARS: usize = 2000;
pub const URL_MAX_CHARS: usize = 2048;

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$").expect("Invalid url regex"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err("Title must not be blank");
    }
    if len > TITLE_MAX_CHARS {
        return Err("Title must be at most 200 characters");
    }
    Ok(())
}

pub fn validate_max_chars(value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("Must be at most {max} characters"));
    }
    Ok(())
}

pub fn validate_http_url(url: &str) -> Result<(), &'static str> {
    if url.len() > URL_MAX_CHARS {
        return Err("URL is too long");
    }
    // 只接受 http/https，拒绝 javascript: 等协议
    if !HTTP_URL_RE.is_match(url) {
        return Err("Must be a valid http or https URL");
    }
    Ok(())
}

pub fn validate_positive_id(id: i64) -> Result<(), &'static str> {
    if id <= 0 {
        return Err("Must be a positive integer");
    }
    Ok(())
}

/// 解析 `YYYY-MM-DD` 格式日期，不接受其它写法
pub fn parse_date(value: &str) -> Result<NaiveDate, &'static str> {
    if !DATE_RE.is_match(value) {
        return Err("Date must use the YYYY-MM-DD format");
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| "Date is not a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        assert!(validate_title("Chapter 3 exercises").is_ok());
        assert!(validate_title(&"a".repeat(TITLE_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_blank_or_long_title() {
        assert_eq!(validate_title("   "), Err("Title must not be blank"));
        assert!(validate_title(&"a".repeat(TITLE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        assert!(validate_title(&"作".repeat(TITLE_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_http_urls() {
        assert!(validate_http_url("https://videos.example.com/lesson/1.mp4").is_ok());
        assert!(validate_http_url("http://cdn.example.org/a?b=c").is_ok());
        assert!(validate_http_url("ftp://example.com/file").is_err());
        assert!(validate_http_url("javascript:alert(1)").is_err());
        assert!(validate_http_url("https://localhost").is_err());
        assert!(validate_http_url("https://exa mple.com/").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-14"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        );
        assert!(parse_date("2025-3-14").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("14/03/2025").is_err());
    }

    #[test]
    fn test_max_chars() {
        assert!(validate_max_chars("short", NOTE_MAX_CHARS).is_ok());
        assert!(validate_max_chars(&"x".repeat(NOTE_MAX_CHARS + 1), NOTE_MAX_CHARS).is_err());
    }

    #[test]
    fn test_positive_id() {
        assert!(validate_positive_id(1).is_ok());
        assert!(validate_positive_id(0).is_err());
        assert!(validate_positive_id(-5).is_err());
    }
}
