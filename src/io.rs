//! Raw input resolution: turns a data reference into parsed JSON content.
//!
//! A reference can be inline structured data, inline JSON text, a filesystem
//! path, or a `http`/`https`/`telnet` URL. Everything funnels into a single
//! [serde_json::Value] handed to the protocol decoders.

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::debug;
use serde_json::Value;
use url::Url;

use crate::error::{FormatError, RetrievalError, TopologyError};

/// A reference to topology data, either already structured or still to be
/// resolved from a string (JSON text, path, or URL).
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Inline structured data; objects are used as-is, strings are resolved
    /// like [DataSource::Reference], anything else is rejected.
    Inline(Value),
    /// A string reference: URL, filesystem path, or raw JSON text.
    Reference(String),
}

impl From<Value> for DataSource {
    fn from(value: Value) -> Self {
        DataSource::Inline(value)
    }
}

impl From<&str> for DataSource {
    fn from(reference: &str) -> Self {
        DataSource::Reference(reference.to_string())
    }
}

impl From<String> for DataSource {
    fn from(reference: String) -> Self {
        DataSource::Reference(reference)
    }
}

/// Options for network retrieval, supplied at parser construction.
#[derive(Debug, Clone)]
pub(crate) struct FetchOptions {
    /// Applies to HTTP requests and telnet connects/reads.
    pub timeout: Option<Duration>,
    /// TLS certificate verification for HTTPS.
    pub verify: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: None,
            verify: true,
        }
    }
}

/// Resolves a [DataSource] into parsed JSON content.
pub(crate) fn resolve(source: DataSource, options: &FetchOptions) -> Result<Value, TopologyError> {
    match source {
        DataSource::Inline(Value::Object(map)) => Ok(Value::Object(map)),
        DataSource::Inline(Value::String(reference)) => resolve_reference(&reference, options),
        DataSource::Inline(_) => Err(TopologyError::UnrecognizedInput),
        DataSource::Reference(reference) => resolve_reference(&reference, options),
    }
}

fn resolve_reference(reference: &str, options: &FetchOptions) -> Result<Value, TopologyError> {
    let text = if reference.contains("://") {
        let url = Url::parse(reference).map_err(RetrievalError::from)?;
        match url.scheme() {
            "http" | "https" => get_http(&url, options)?,
            "telnet" => get_telnet(&url, options)?,
            // unknown schemes fall through to JSON decoding of the
            // reference itself
            _ => reference.to_string(),
        }
    } else if looks_like_path(reference) {
        get_file(reference)?
    } else {
        reference.to_string()
    };
    let value = serde_json::from_str(&text).map_err(FormatError::InvalidJson)?;
    Ok(value)
}

/// Path-prefix patterns recognized as filesystem references, relative and
/// absolute, unix and windows style.
fn looks_like_path(reference: &str) -> bool {
    const PREFIXES: [&str; 6] = ["./", "../", "/", ".\\", "..\\", "\\"];
    if PREFIXES.iter().any(|prefix| reference.starts_with(prefix)) {
        return true;
    }
    // drive-letter paths like C:\topology.json
    reference.get(1..3) == Some(":\\")
}

fn get_file(path: &str) -> Result<String, RetrievalError> {
    debug!("reading topology data from file {}", path);
    Ok(fs::read_to_string(path)?)
}

fn get_http(url: &Url, options: &FetchOptions) -> Result<String, RetrievalError> {
    debug!("fetching topology data from {}", url);
    let mut builder =
        reqwest::blocking::Client::builder().danger_accept_invalid_certs(!options.verify);
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let response = builder.build()?.get(url.as_str()).send()?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(RetrievalError::HttpStatus(status.as_u16()));
    }
    Ok(response.text()?)
}

/// Opens a plain TCP connection to the telnet URL's host:port, writes a line
/// terminator and reads until the remote closes the connection.
fn get_telnet(url: &Url, options: &FetchOptions) -> Result<String, RetrievalError> {
    debug!("fetching topology data from {}", url);
    let host = url.host_str().ok_or(RetrievalError::MissingHost)?;
    let port = url.port().unwrap_or(23);
    let mut stream = match options.timeout {
        Some(timeout) => {
            let address = (host, port)
                .to_socket_addrs()?
                .next()
                .ok_or(RetrievalError::MissingHost)?;
            TcpStream::connect_timeout(&address, timeout)?
        }
        None => TcpStream::connect((host, port))?,
    };
    stream.set_read_timeout(options.timeout)?;
    stream.set_write_timeout(options.timeout)?;
    stream.write_all(b"\r\n")?;
    let mut data = String::new();
    stream.read_to_string(&mut data)?;
    Ok(data)
}
