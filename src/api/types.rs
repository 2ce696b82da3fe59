// API request/response bodies

use serde::{Deserialize, Serialize};

/// Body of write-file and append-file
///
/// Both fields are optional at the parsing level so that "missing" can be
/// reported as a validation error rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct FileWriteRequest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl FileWriteRequest {
    /// Parse a JSON body; anything unparseable counts as an empty object
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ReadFileResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let req = FileWriteRequest::parse(br#"{"path":"/tmp/a.md","content":""}"#);
        assert_eq!(req.path.as_deref(), Some("/tmp/a.md"));
        assert_eq!(req.content.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_missing_content() {
        let req = FileWriteRequest::parse(br#"{"path":"/tmp/a.md"}"#);
        assert!(req.content.is_none());
    }

    #[test]
    fn test_parse_garbage_is_empty() {
        let bodies: [&[u8]; 5] = [b"{not json", b"", b"[1,2]", br#"{"path":5}"#, b"null"];
        for body in bodies {
            let req = FileWriteRequest::parse(body);
            assert!(req.path.is_none());
            assert!(req.content.is_none());
        }
    }
}
