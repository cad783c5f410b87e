// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FontSpec;

/// Error returned when text cannot be measured at all.
///
/// Degenerate input (an empty or unparseable font key, zero widths) is never an
/// error. Those cases measure as zero so layout stays total. Only a provider
/// that cannot measure anything reports an [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The font being measured, when the failure is tied to one.
    font: Option<FontSpec>,

    /// Short description of what was missing.
    reason: &'static str,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The font being measured, if the failure is tied to one.
    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    /// Short description of what was missing.
    pub fn reason(&self) -> &'static str {
        self.reason
    }

    /// Creates a [`ErrorKind::MeasurementUnavailable`] error.
    ///
    /// Exposed so that custom [`MetricsProvider`](crate::MetricsProvider)s can
    /// report that their measurement surface is missing.
    pub fn measurement_unavailable(font: Option<&FontSpec>, reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::MeasurementUnavailable,
            font: font.cloned(),
            reason,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::MeasurementUnavailable => match &self.font {
                Some(font) => write!(
                    f,
                    "text measurement unavailable for font `{font}`: {}",
                    self.reason
                ),
                None => write!(f, "text measurement unavailable: {}", self.reason),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The measurement primitive could not be used, e.g. no font could be found
    /// or the font data could not be read. Retrying does not help.
    MeasurementUnavailable,
}
