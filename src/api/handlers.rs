// File gateway handlers
// Each handler turns a gateway result into a JSON response

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::{file_error_response, json_response};
use super::types::{FileWriteRequest, ReadFileResponse, SuccessResponse};
use crate::files::{self, FileError};
use crate::http::query;

const MISSING_DIR_PATH: &str = "missing path parameter";
const MISSING_FILE_PATH: &str = "missing file path parameter";
const MISSING_WRITE_FIELDS: &str = "missing file path or content parameter";

/// GET /api/read-directory?path=...
pub async fn handle_read_directory(query_str: Option<&str>) -> Response<Full<Bytes>> {
    let result = match files::require(query::get_param(query_str, "path"), MISSING_DIR_PATH) {
        Ok(dir) => files::list_directory(&dir).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(entries) => json_response(StatusCode::OK, &entries),
        Err(e) => file_error_response(&e),
    }
}

/// GET /api/read-file?path=...
pub async fn handle_read_file(query_str: Option<&str>) -> Response<Full<Bytes>> {
    let result = match files::require(query::get_param(query_str, "path"), MISSING_FILE_PATH) {
        Ok(path) => files::read_file(&path).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(content) => json_response(StatusCode::OK, &ReadFileResponse { content }),
        Err(e) => file_error_response(&e),
    }
}

/// POST /api/write-file
pub async fn handle_write_file(body: &[u8]) -> Response<Full<Bytes>> {
    let result = match write_fields(body) {
        Ok((path, content)) => files::write_file(&path, &content).await,
        Err(e) => Err(e),
    };

    respond_saved(result, "file saved")
}

/// POST /api/append-file
pub async fn handle_append_file(body: &[u8]) -> Response<Full<Bytes>> {
    let result = match write_fields(body) {
        Ok((path, content)) => files::append_file(&path, &content).await,
        Err(e) => Err(e),
    };

    respond_saved(result, "content appended")
}

/// Extract `path` (non-empty) and `content` (present, may be empty)
fn write_fields(body: &[u8]) -> Result<(String, String), FileError> {
    let req = FileWriteRequest::parse(body);
    let path = files::require(req.path, MISSING_WRITE_FIELDS)?;
    let content = req
        .content
        .ok_or(FileError::MissingParameter(MISSING_WRITE_FIELDS))?;
    Ok((path, content))
}

fn respond_saved(result: Result<(), FileError>, message: &'static str) -> Response<Full<Bytes>> {
    match result {
        Ok(()) => json_response(
            StatusCode::OK,
            &SuccessResponse {
                success: true,
                message,
            },
        ),
        Err(e) => file_error_response(&e),
    }
}
