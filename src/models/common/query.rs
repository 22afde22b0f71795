//! 查询参数反序列化辅助
//!
//! 查询字符串中的空值（如 `?group_id=`）视为未提供该筛选条件。

use serde::{Deserialize, Deserializer};

pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub fn empty_string_as_none_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected};

    match empty_string_as_none(deserializer)? {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
            Error::invalid_value(Unexpected::Str(&raw), &"an integer or an empty string")
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_string_as_none_i64")]
        group_id: Option<i64>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        date: Option<String>,
    }

    fn parse(query: &str) -> Result<Params, String> {
        actix_web::web::Query::<Params>::from_query(query)
            .map(|q| q.into_inner())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn test_missing_and_empty_are_none() {
        let params = parse("").unwrap();
        assert_eq!(params.group_id, None);
        assert_eq!(params.date, None);

        let params = parse("group_id=&date=").unwrap();
        assert_eq!(params.group_id, None);
        assert_eq!(params.date, None);
    }

    #[test]
    fn test_values_are_parsed() {
        let params = parse("group_id=7&date=2025-03-14").unwrap();
        assert_eq!(params.group_id, Some(7));
        assert_eq!(params.date.as_deref(), Some("2025-03-14"));
    }

    #[test]
    fn test_non_numeric_group_is_rejected() {
        assert!(parse("group_id=seven").is_err());
    }
}
