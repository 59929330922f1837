/*!
error module defines the error types used in topodiff.
*/
use std::io;
use thiserror::Error;

/// Top-level error type returned by parsing, serialization and retrieval.
///
/// The variants separate the failure classes a caller needs to tell apart:
/// a [TopologyError::Retrieval] may be worth retrying, a
/// [TopologyError::Format] means the input itself needs fixing, and a
/// [TopologyError::SchemaValidation] means the parser configuration is
/// missing required metadata.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Raw topology data could not be fetched from its source.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    /// The data reference was not a structured object, a JSON string, a
    /// filesystem path, or a URL.
    #[error("no valid data to parse")]
    UnrecognizedInput,
    /// Content was fetched but could not be decoded for the configured
    /// protocol.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Required graph metadata was missing at serialization time.
    #[error("{field} cannot be empty")]
    SchemaValidation { field: &'static str },
    /// An unknown protocol tag was given to [crate::Protocol]'s `from_str`.
    #[error("unknown protocol {0:?}")]
    UnknownProtocol(String),
    /// Rendering a document to its JSON text form failed.
    #[error("failed to serialize document")]
    Serialize(#[source] serde_json::Error),
}

/// Errors raised while fetching raw topology data.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// File or socket I/O failure, including telnet connect/read failures
    /// and timeouts.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// HTTP transport failure (connect, TLS, timeout).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The remote answered with a status other than 200.
    #[error("expecting HTTP 200 OK, got {0}")]
    HttpStatus(u16),
    /// The reference contained `://` but did not parse as a URL.
    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    /// A telnet URL without a host part.
    #[error("no host in telnet URL")]
    MissingHost,
}

/// Errors raised while decoding fetched content.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The raw text was not valid JSON at all.
    #[error("could not decode JSON data")]
    InvalidJson(#[source] serde_json::Error),
    /// The JSON document does not have the shape the protocol decoder
    /// expects.
    #[error("unexpected document structure")]
    InvalidStructure(#[source] serde_json::Error),
    /// A NetJSON document whose `type` field is not `NetworkGraph`.
    #[error("expected document type {expected:?}, got {found:?}")]
    WrongDocumentType {
        expected: &'static str,
        found: String,
    },
    #[error("required key {0:?} not found")]
    MissingKey(&'static str),
    /// A link cost that could not be read as a number.
    #[error("could not parse link cost {0:?}")]
    InvalidCost(String),
}
