//! Roster retrieval and payload decoding.
//!
//! The loader reads the roster document once, checks that the response was
//! successful, and accepts the payload only when its top level is a JSON
//! array. Individual records are never rejected; an element that is not an
//! object decodes as an all-empty student.

use super::source::DataSource;
use crate::domain::error::{Result, RosterError};
use crate::domain::Student;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Fetches roster documents from files or URLs.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
}

impl Loader {
    /// Creates a loader with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Fetch`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rosterview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RosterError::Fetch(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    /// Retrieves and decodes the roster at `source`.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Fetch`]: the resource could not be reached or read
    /// - [`RosterError::Status`]: non-success status, or a missing file (404)
    /// - [`RosterError::Parse`]: the body is not JSON
    /// - [`RosterError::NotAnArray`]: the JSON top level is not an array
    #[tracing::instrument(level = "debug", skip_all, fields(source = %source))]
    pub async fn fetch_students(&self, source: &DataSource) -> Result<Vec<Student>> {
        let body = match source {
            DataSource::File(path) => read_file(path).await?,
            DataSource::Url(url) => self.fetch_url(url).await?,
        };
        tracing::debug!(body_len = body.len(), "roster document retrieved");

        let students = decode_students(&body)?;
        tracing::info!(student_count = students.len(), "roster loaded");
        Ok(students)
    }

    async fn fetch_url(&self, url: &reqwest::Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RosterError::Fetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Status {
                status: status.as_u16(),
                source_name: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| RosterError::Fetch(format!("failed to read body from {url}: {e}")))
    }
}

async fn read_file(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RosterError::Status {
            status: 404,
            source_name: path.display().to_string(),
        }),
        Err(e) => Err(RosterError::Fetch(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Decodes a roster document body.
///
/// # Errors
///
/// Returns [`RosterError::Parse`] for invalid JSON and
/// [`RosterError::NotAnArray`] when the top level is anything but an array.
///
/// # Example
///
/// ```rust
/// use rosterview::loader::decode_students;
///
/// let students = decode_students(r#"[{"first_name": "Amy"}, 42]"#).unwrap();
/// assert_eq!(students.len(), 2);
/// assert_eq!(students[1].first_name, "");
///
/// assert!(decode_students(r#"{"students": []}"#).is_err());
/// ```
pub fn decode_students(body: &str) -> Result<Vec<Student>> {
    let payload: Value = serde_json::from_str(body)?;

    match payload {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).unwrap_or_else(|e| {
                    tracing::warn!(index = index, error = %e, "malformed student record");
                    Student::default()
                })
            })
            .collect()),
        other => Err(RosterError::NotAnArray(json_kind(&other).to_string())),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const ROSTER: &str = r#"[
        {"id": 1, "first_name": "Amy", "last_name": "Lee", "gender": "Female",
         "class": 10, "marks": 70, "passing": true, "email": "amy@example.com",
         "img_src": "https://img.example.com/1.png"},
        {"id": 2, "first_name": "Bo", "last_name": "Chan", "gender": "Male",
         "class": 9, "marks": 90, "passing": false, "email": "bo@example.com",
         "img_src": "https://img.example.com/2.png"}
    ]"#;

    /// Serves a single canned HTTP response and returns the URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> reqwest::Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0_u8; 2048];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        reqwest::Url::parse(&format!("http://{addr}/students.json")).unwrap()
    }

    #[tokio::test]
    async fn test_loads_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let loader = Loader::new().unwrap();
        let students = loader
            .fetch_students(&DataSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name(), "Amy Lee");
        assert_eq!(students[1].marks, Some(90.0));
    }

    #[tokio::test]
    async fn test_missing_file_is_unsuccessful_response() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::new().unwrap();

        let err = loader
            .fetch_students(&DataSource::File(dir.path().join("absent.json")))
            .await
            .unwrap_err();

        assert!(matches!(err, RosterError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_loads_http_source() {
        let url = serve_once("200 OK", ROSTER).await;
        let loader = Loader::new().unwrap();

        let students = loader.fetch_students(&DataSource::Url(url)).await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].first_name, "Bo");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let loader = Loader::new().unwrap();

        let err = loader.fetch_students(&DataSource::Url(url)).await.unwrap_err();
        assert!(matches!(err, RosterError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = reqwest::Url::parse(&format!("http://{addr}/students.json")).unwrap();
        let loader = Loader::new().unwrap();

        let err = loader.fetch_students(&DataSource::Url(url)).await.unwrap_err();
        assert!(matches!(err, RosterError::Fetch(_)));
    }

    #[test]
    fn test_non_array_payload() {
        let err = decode_students(r#"{"students": []}"#).unwrap_err();
        assert!(matches!(err, RosterError::NotAnArray(ref kind) if kind == "object"));
    }

    #[test]
    fn test_invalid_json() {
        let err = decode_students("not json").unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_empty_array() {
        assert!(decode_students("[]").unwrap().is_empty());
    }
}
