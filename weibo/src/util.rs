use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use time::format_description::{self, FormatItem};
use time::OffsetDateTime;

/// Parse Weibo's `created_at` format, e.g. `Tue May 31 17:46:55 +0800 2011`
pub(crate) fn parse_created_at(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    static FMT: &str = concat!(
        "[weekday repr:short] [month repr:short] [day] ",
        "[hour repr:24]:[minute]:[second] ",
        "[offset_hour sign:mandatory][offset_minute] [year]",
    );
    static PARSE_FORMAT: Lazy<Vec<FormatItem>> =
        Lazy::new(|| format_description::parse(FMT).expect("valid format description"));
    OffsetDateTime::parse(s, &PARSE_FORMAT)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Some numeric fields are sent as strings and some string fields as numbers
pub(crate) fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNumber::Int(i)) => Ok(i),
        Some(StringOrNumber::Float(f)) => Ok(f as i64),
        Some(StringOrNumber::String(s)) if s.is_empty() => Ok(0),
        Some(StringOrNumber::String(s)) => s.parse().map_err(serde::de::Error::custom),
    }
}

pub(crate) fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Int(i)) => i.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
    })
}
