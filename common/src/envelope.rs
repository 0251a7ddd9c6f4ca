use serde::{Deserialize, Deserializer, Serialize};

/// Diagnostic fields present on every response body.
///
/// Embed with `#[serde(flatten)]` in each result shape.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub error: String,
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "is_zero"
    )]
    pub error_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// Decode an explicit `null` the same way as a missing field
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResponseEnvelope {
    /// A call failed only when both a message and a non-zero code are present
    pub fn is_failure(&self) -> bool {
        !self.error.is_empty() && self.error_code != 0
    }
}

/// Result shapes that carry a [`ResponseEnvelope`]
pub trait Enveloped {
    fn envelope(&self) -> &ResponseEnvelope;
}

impl Enveloped for ResponseEnvelope {
    fn envelope(&self) -> &ResponseEnvelope {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn envelope(error: &str, error_code: i64) -> ResponseEnvelope {
        ResponseEnvelope {
            error: error.to_owned(),
            error_code,
            request: None,
        }
    }

    #[test]
    fn failure_needs_message_and_code() {
        assert!(!envelope("", 0).is_failure());
        assert!(!envelope("some failure", 0).is_failure());
        assert!(!envelope("", 21327).is_failure());
        assert!(envelope("some failure", 21327).is_failure());
    }

    #[test]
    fn fields_default_when_absent() {
        let e: ResponseEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(e, ResponseEnvelope::default());

        let e: ResponseEnvelope = serde_json::from_str(
            r#"{"error":"expired_token","error_code":21327,"request":"/2/users/show.json"}"#,
        )
        .unwrap();
        assert!(e.is_failure());
        assert_eq!(e.request.as_deref(), Some("/2/users/show.json"));
    }

    #[test]
    fn null_fields_are_empty() {
        let e: ResponseEnvelope =
            serde_json::from_str(r#"{"error":null,"error_code":null,"request":null}"#).unwrap();
        assert_eq!(e, ResponseEnvelope::default());
        assert!(!e.is_failure());
    }
}
