//! Error types for quakefetch.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Endpoint;

/// Result type alias for quakefetch operations.
pub type Result<T> = std::result::Result<T, QuakeError>;

/// Errors that can occur while planning or fetching an event query.
///
/// A failure of the count probe is fatal to the whole operation. Failures
/// of individual query pages are contained by the executor and only show
/// up in its report.
#[derive(Error, Debug)]
pub enum QuakeError {
    /// The service answered with a non-success status.
    #[error("Service unavailable: {endpoint} returned HTTP {status}")]
    ServiceUnavailable {
        /// The endpoint that was called.
        endpoint: Endpoint,
        /// HTTP status code.
        status: u16,
    },

    /// The count endpoint body was not a number.
    #[error("Malformed count response: {body:?}")]
    MalformedCountResponse {
        /// The body as received.
        body: String,
    },

    /// A query page body could not be decoded.
    #[error("Malformed page response: {0}")]
    MalformedPageResponse(String),

    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A page did not settle within the configured page timeout.
    #[error("Page at offset {offset} timed out")]
    Timeout {
        /// Offset of the page that timed out.
        offset: u64,
    },

    /// The probed count needs more pages than one batch may hold.
    #[error("{pages} pages needed, at most {max} may be planned")]
    TooManyPages {
        /// Pages the count would need.
        pages: u64,
        /// Planning ceiling.
        max: u64,
    },

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

/// Error for invalid date input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// The text does not match the `YYYY-MM-DD` format.
    #[error("Incorrect date format {input:?}, should be YYYY-MM-DD")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// End date precedes start date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
