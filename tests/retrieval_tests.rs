//! Retrieval-layer tests against local fixtures: tempfile-backed file
//! references and loopback TCP servers standing in for HTTP and telnet
//! endpoints, so the suite never touches the real network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use topodiff::{Protocol, RetrievalError, TopologyError, TopologyParser};

const OLSR_BODY: &str = r#"{"topology": [
    {"lastHopIP": "10.0.0.1", "destinationIP": "10.0.0.2", "tcEdgeCost": 1.0}
]}"#;

fn spawn_http_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });
    format!("http://{}/topology", address)
}

fn spawn_telnet_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // consume the client's line terminator, then send everything
            // and close the connection
            let mut buf = [0u8; 2];
            let _ = stream.read(&mut buf);
            stream.write_all(body.as_bytes()).unwrap();
        }
    });
    format!("telnet://{}", address)
}

#[test]
fn test_file_retrieval() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("topology.json");
    std::fs::write(&path, OLSR_BODY).unwrap();

    let graph = TopologyParser::new(Protocol::Olsr, path.to_str().unwrap())
        .parse()
        .unwrap();
    assert_eq!(graph.nodes(), ["10.0.0.1", "10.0.0.2"]);
}

#[test]
fn test_missing_file_fails_with_retrieval_error() {
    let result = TopologyParser::new(Protocol::Olsr, "./no-such-topology.json").parse();
    assert!(matches!(
        result,
        Err(TopologyError::Retrieval(RetrievalError::Io(_)))
    ));
}

#[test]
fn test_http_retrieval() {
    let url = spawn_http_server("200 OK", OLSR_BODY);
    let graph = TopologyParser::new(Protocol::Olsr, url.as_str())
        .with_timeout(Duration::from_secs(5))
        .parse()
        .unwrap();
    assert_eq!(graph.links().len(), 1);
}

#[test]
fn test_non_200_fails_with_retrieval_error() {
    let url = spawn_http_server("404 Not Found", "not here");
    let result = TopologyParser::new(Protocol::Olsr, url.as_str())
        .with_timeout(Duration::from_secs(5))
        .parse();
    assert!(matches!(
        result,
        Err(TopologyError::Retrieval(RetrievalError::HttpStatus(404)))
    ));
}

#[test]
fn test_telnet_retrieval() {
    let url = spawn_telnet_server(OLSR_BODY);
    let graph = TopologyParser::new(Protocol::Olsr, url.as_str())
        .with_timeout(Duration::from_secs(5))
        .parse()
        .unwrap();
    assert_eq!(graph.nodes(), ["10.0.0.1", "10.0.0.2"]);
}

#[test]
fn test_telnet_connection_refused_fails_with_retrieval_error() {
    // bind and drop so the port is very likely unoccupied
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let result = TopologyParser::new(Protocol::Olsr, format!("telnet://127.0.0.1:{}", port))
        .with_timeout(Duration::from_secs(2))
        .parse();
    assert!(matches!(result, Err(TopologyError::Retrieval(_))));
}
