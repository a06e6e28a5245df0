//! Canned results returned by the mock backend.

use crate::models::{ErrorResult, OkFlag, SuccessResult};
use std::borrow::Cow;

pub const DUMMY_OK: SuccessResult = SuccessResult {
    ok: OkFlag,
    url: Cow::Borrowed("https://example.test/img/mock%2F.png"),
    width: 800,
    height: 600,
    size: 34567,
    format: Cow::Borrowed("png"),
    backend: Cow::Borrowed("mock"),
    output: Some(Cow::Borrowed("html")),
};

pub const DUMMY_ERROR: ErrorResult = ErrorResult {
    ok: OkFlag,
    error: Cow::Borrowed("explanation string"),
    stage: Cow::Borrowed("mock"),
};
