//! Data models and structures
//!
//! Defines the two record shapes a mock processing run can report and the
//! `ok`-discriminated union that carries either one over the wire.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// The `ok` field of a result record, fixed to `V` at the type level.
///
/// Serializes as a plain JSON boolean and refuses to deserialize from the
/// opposite value, which is what lets [`ProcessResult`] pick its variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OkFlag<const V: bool>;

impl<const V: bool> OkFlag<V> {
    pub const fn value(self) -> bool {
        V
    }
}

impl<const V: bool> Serialize for OkFlag<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(V)
    }
}

impl<'de, const V: bool> Deserialize<'de> for OkFlag<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = bool::deserialize(deserializer)?;
        if value == V {
            Ok(OkFlag)
        } else {
            let expected = if V { "true" } else { "false" };
            Err(de::Error::invalid_value(Unexpected::Bool(value), &expected))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResult {
    pub ok: OkFlag<true>,
    pub url: Cow<'static, str>,
    pub width: u32,
    pub height: u32,
    pub size: u64,
    pub format: Cow<'static, str>,
    pub backend: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Cow<'static, str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub ok: OkFlag<false>,
    pub error: Cow<'static, str>,
    pub stage: Cow<'static, str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessResult {
    Success(SuccessResult),
    Failure(ErrorResult),
}

impl ProcessResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Backend that produced the image, for successful runs.
    pub fn backend(&self) -> Option<&str> {
        match self {
            Self::Success(result) => Some(&*result.backend),
            Self::Failure(_) => None,
        }
    }

    /// Pipeline stage that failed, for failed runs.
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(result) => Some(&*result.stage),
        }
    }
}

impl From<SuccessResult> for ProcessResult {
    fn from(result: SuccessResult) -> Self {
        Self::Success(result)
    }
}

impl From<ErrorResult> for ProcessResult {
    fn from(result: ErrorResult) -> Self {
        Self::Failure(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ok_flag_serializes_as_bool() {
        assert_eq!(serde_json::to_string(&OkFlag::<true>).unwrap(), "true");
        assert_eq!(serde_json::to_string(&OkFlag::<false>).unwrap(), "false");
        assert!(OkFlag::<true>.value());
        assert!(!OkFlag::<false>.value());
    }

    #[test]
    fn test_ok_flag_rejects_wrong_value() {
        assert!(serde_json::from_str::<OkFlag<true>>("false").is_err());
        assert!(serde_json::from_str::<OkFlag<false>>("true").is_err());
        assert!(serde_json::from_str::<OkFlag<true>>("\"true\"").is_err());
    }

    #[test]
    fn test_process_result_dispatches_on_ok() {
        let success: ProcessResult = serde_json::from_str(
            r#"{"ok": true, "url": "u", "width": 1, "height": 2, "size": 3, "format": "png", "backend": "b"}"#,
        )
        .unwrap();
        assert!(success.is_ok());
        assert_eq!(success.backend(), Some("b"));
        assert_eq!(success.stage(), None);

        let failure: ProcessResult =
            serde_json::from_str(r#"{"ok": false, "error": "boom", "stage": "resize"}"#).unwrap();
        assert!(!failure.is_ok());
        assert_eq!(failure.stage(), Some("resize"));
        assert_eq!(failure.backend(), None);
    }

    #[test]
    fn test_process_result_rejects_contradictory_ok() {
        let result = serde_json::from_str::<ProcessResult>(
            r#"{"ok": false, "url": "u", "width": 1, "height": 2, "size": 3, "format": "png", "backend": "b"}"#,
        );
        assert!(result.is_err());

        let result =
            serde_json::from_str::<ProcessResult>(r#"{"ok": true, "error": "boom", "stage": "mock"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_omitted_when_absent() {
        let result = SuccessResult {
            ok: OkFlag,
            url: "https://example.test/a.png".into(),
            width: 10,
            height: 10,
            size: 100,
            format: "png".into(),
            backend: "mock".into(),
            output: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("output"));

        let parsed: SuccessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
