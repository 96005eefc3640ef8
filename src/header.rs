//! Header classification.
//!
//! Headers follow the pipe-delimited layout common to influenza sequence
//! databases:
//!
//! ```text
//! <field0>|<isolate_id>|<field2>|<field3>|<segment>|<field5>[|...]
//! ```
//!
//! At least six fields are required; anything past the sixth is ignored.

use crate::segments::ExpectedSegments;
use thiserror::Error;

const MIN_FIELDS: usize = 6;
const ISOLATE_FIELD: usize = 1;
const SEGMENT_FIELD: usize = 4;

/// Why a header was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("expected at least 6 '|'-delimited fields, found {found}")]
    TooFewFields { found: usize },
    #[error("unrecognized segment '{segment}'")]
    UnrecognizedSegment { segment: String },
}

/// The fields of a header that matter for completeness checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub isolate_id: String,
    /// Always one of the expected labels.
    pub segment: &'static str,
}

/// Splits headers into isolate and segment, validating the segment label.
pub struct HeaderClassifier<'a> {
    expected: &'a ExpectedSegments,
}

impl<'a> HeaderClassifier<'a> {
    pub fn new(expected: &'a ExpectedSegments) -> Self {
        Self { expected }
    }

    pub fn classify(&self, header: &str) -> Result<ParsedHeader, HeaderError> {
        let fields: Vec<&str> = header.split('|').collect();
        if fields.len() < MIN_FIELDS {
            return Err(HeaderError::TooFewFields { found: fields.len() });
        }
        let isolate_id = fields[ISOLATE_FIELD].trim();
        let raw_segment = fields[SEGMENT_FIELD].trim();
        let idx = self
            .expected
            .index_of(raw_segment)
            .ok_or_else(|| HeaderError::UnrecognizedSegment { segment: raw_segment.to_string() })?;
        Ok(ParsedHeader {
            isolate_id: isolate_id.to_string(),
            segment: self.expected.label(idx),
        })
    }
}
