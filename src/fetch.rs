use crate::error::{PubChemError, Result};
use serde::Deserialize;
use std::time::Duration;

/// One GET, one parsed JSON document. No retries, no caching.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<serde_json::Value>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PubChemError::Transport {
                url: String::new(),
                status: None,
                fault: None,
                detail: format!("building HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!(url, "GET");
        let transport = |status: Option<u16>, detail: String| PubChemError::Transport {
            url: url.to_string(),
            status,
            fault: None,
            detail,
        };

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport(None, e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| transport(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            let fault = parse_fault(&body);
            let detail = fault
                .as_ref()
                .and_then(|f| f.message.clone())
                .unwrap_or_else(|| status.to_string());
            return Err(PubChemError::Transport {
                url: url.to_string(),
                status: Some(status.as_u16()),
                fault: fault.map(|f| f.code),
                detail,
            });
        }

        parse_body(url, &body)
    }
}

pub(crate) fn parse_body(url: &str, body: &str) -> Result<serde_json::Value> {
    serde_json::from_str(body).map_err(|source| PubChemError::Parse {
        url: url.to_string(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct FaultEnvelope {
    #[serde(rename = "Fault")]
    fault: Fault,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

/// PUG REST error bodies look like `{"Fault": {"Code": ..., "Message": ...}}`.
pub(crate) fn parse_fault(body: &str) -> Option<Fault> {
    serde_json::from_str::<FaultEnvelope>(body)
        .ok()
        .map(|e| e.fault)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one HTTP response on a loopback port and returns its base URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn fetcher() -> HttpFetcher {
        // Loopback must not be routed through an HTTP_PROXY from the environment.
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client");
        HttpFetcher { client }
    }

    #[test]
    fn server_fault_keeps_status_and_code() {
        let base = serve_once(
            "503 Service Unavailable",
            r#"{"Fault":{"Code":"PUGREST.ServerBusy","Message":"busy"}}"#,
        );
        let err = fetcher().fetch(&format!("{}/pug/x/JSON", base)).unwrap_err();
        match err {
            PubChemError::Transport {
                status,
                fault,
                detail,
                ..
            } => {
                assert_eq!(status, Some(503));
                assert_eq!(fault.as_deref(), Some("PUGREST.ServerBusy"));
                assert_eq!(detail, "busy");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn html_404_has_status_but_no_fault() {
        let base = serve_once("404 Not Found", "<html>nginx 404</html>");
        let err = fetcher().fetch(&format!("{}/pug/x/JSON", base)).unwrap_err();
        assert!(
            matches!(err, PubChemError::Transport { status: Some(404), fault: None, .. }),
            "got {err:?}"
        );
        assert!(!err.is_upstream_not_found());
    }

    #[test]
    fn ok_status_with_invalid_body_is_a_parse_error() {
        let base = serve_once("200 OK", "{bad");
        let err = fetcher().fetch(&format!("{}/pug/x/JSON", base)).unwrap_err();
        assert!(matches!(err, PubChemError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn ok_status_with_json_body_is_returned() {
        let base = serve_once("200 OK", r#"{"PC_Compounds":[{"id":{"id":{"cid":180}}}]}"#);
        let doc = fetcher().fetch(&format!("{}/pug/x/JSON", base)).unwrap();
        assert_eq!(doc["PC_Compounds"][0]["id"]["id"]["cid"], 180);
    }

    #[test]
    fn fault_body_is_recognized() {
        let body = r#"{"Fault":{"Code":"PUGREST.NotFound","Message":"No CID found","Details":["No CID found that matches the given name"]}}"#;
        let f = parse_fault(body).expect("fault");
        assert_eq!(f.code, "PUGREST.NotFound");
        assert_eq!(f.message.as_deref(), Some("No CID found"));
    }

    #[test]
    fn html_error_page_has_no_fault() {
        assert!(parse_fault("<html>503 Service Unavailable</html>").is_none());
    }

    #[test]
    fn invalid_body_is_a_parse_error() {
        let err = parse_body("http://x/JSON", "{not json").unwrap_err();
        assert!(matches!(err, PubChemError::Parse { ref url, .. } if url == "http://x/JSON"));
    }
}
