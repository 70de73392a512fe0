use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to non-successful HTTP call
    Status,
    /// Order, item or request payload failed field-level validation
    Validation,
    /// A field expected to hold a blockchain address failed address-syntax validation
    InvalidAddress,
    /// An integer-valued field could not be parsed as a non-negative integer
    /// from either its string or numeric JSON representation
    MalformedNumber,
    /// Re-serialization or target-shape deserialization of fulfillment input data failed
    Decode,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn invalid_address<S: Into<String>>(field: S) -> Self {
        InvalidAddress {
            field: field.into(),
        }
        .into()
    }

    pub fn malformed_number<S: Into<String>>(field: S) -> Self {
        MalformedNumber {
            field: field.into(),
        }
        .into()
    }

    pub fn decode(stage: DecodeStage, source: serde_json::Error) -> Self {
        Decode { stage, source }.into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// A field that must hold a 20-byte hex-encoded account or contract address
/// contained something else.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct InvalidAddress {
    /// Name of the offending field, in its wire-format spelling.
    pub field: String,
}

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid address in {}", self.field)
    }
}

impl StdError for InvalidAddress {}

impl From<InvalidAddress> for Error {
    fn from(err: InvalidAddress) -> Self {
        Error::with_source(Kind::InvalidAddress, err)
    }
}

/// An integer-valued field (amount, timestamp, counter or wei value) held a
/// value that does not parse as a non-negative integer.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct MalformedNumber {
    /// Name of the offending field, in its wire-format spelling.
    pub field: String,
}

impl fmt::Display for MalformedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: not a non-negative integer", self.field)
    }
}

impl StdError for MalformedNumber {}

impl From<MalformedNumber> for Error {
    fn from(err: MalformedNumber) -> Self {
        Error::with_source(Kind::MalformedNumber, err)
    }
}

/// Stage of `input_data` decoding that failed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Re-serializing the retained raw `input_data` to canonical JSON text.
    Serialize,
    /// Populating the typed target shape from the canonical JSON text.
    Deserialize,
}

/// Fulfillment `input_data` could not be decoded into its target shape.
#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub stage: DecodeStage,
    pub source: serde_json::Error,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            DecodeStage::Serialize => {
                write!(f, "failed to re-serialize input data: {}", self.source)
            }
            DecodeStage::Deserialize => {
                write!(f, "failed to deserialize input data: {}", self.source)
            }
        }
    }
}

impl StdError for Decode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

/// The transaction's `function` selector matches none of the known Seaport
/// fulfillment entry points.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnknownFunction {
    /// Selector name (the portion of `function` before the parameter list).
    pub function: String,
}

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no fulfillment decoder for function {}", self.function)
    }
}

impl StdError for UnknownFunction {}

impl From<UnknownFunction> for Error {
    fn from(err: UnknownFunction) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}
