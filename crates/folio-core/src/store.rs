//! Record store: one-shot load of the catalogue resource.

use std::fs;

use tracing::{debug, info};

use crate::error::FolioError;
use crate::record::ProjectRecord;

/// True when `source` should be fetched over HTTP rather than read from disk.
fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the record set from `source` — an `http(s)://` URL or a filesystem
/// path — and parse it as a JSON array of project records.
///
/// The set is loaded once and treated as read-only afterwards. No schema
/// validation beyond the array shape: entries missing fields deserialize
/// with those fields empty.
///
/// # Errors
///
/// Fetch or parse failure is terminal: no retry, no partial result.
pub fn load_records(source: &str) -> Result<Vec<ProjectRecord>, FolioError> {
    let body = if is_url(source) {
        debug!(url = source, "fetching catalogue");
        fetch(source)?
    } else {
        debug!(path = source, "reading catalogue");
        fs::read_to_string(source).map_err(|err| FolioError::SourceRead {
            path: source.to_string(),
            source: err,
        })?
    };

    let records: Vec<ProjectRecord> =
        serde_json::from_str(&body).map_err(|err| FolioError::MalformedData { source: err })?;
    info!(count = records.len(), source, "catalogue loaded");
    Ok(records)
}

fn fetch(url: &str) -> Result<String, FolioError> {
    let response = ureq::get(url)
        .call()
        .map_err(|err| FolioError::SourceFetch {
            url: url.to_string(),
            source: Box::new(err),
        })?;
    response
        .into_string()
        .map_err(|err| FolioError::SourceFetch {
            url: url.to_string(),
            source: Box::new(err),
        })
}

#[cfg(test)]
mod tests {
    use super::{is_url, load_records};
    use crate::error::FolioError;

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.test/details.json"));
        assert!(is_url("http://localhost:8000/details.json"));
        assert!(!is_url("details.json"));
        assert!(!is_url("./data/details.json"));
    }

    #[test]
    fn loads_records_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("details.json");
        std::fs::write(
            &path,
            r#"[
                {"Name": "Atlas Revamp", "Period": "Q1 2024", "Monetization": "Paid"},
                {"Name": "Brand Kit"}
            ]"#,
        )
        .expect("write fixture");

        let records = load_records(path.to_str().expect("utf8 path")).expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Atlas Revamp");
        // Missing fields degrade silently to empty.
        assert_eq!(records[1].period, "");
    }

    #[test]
    fn missing_file_is_source_read_error() {
        let err = load_records("no/such/details.json").expect_err("must fail");
        assert!(matches!(err, FolioError::SourceRead { .. }));
        assert_eq!(err.error_code(), "E1101");
    }

    #[test]
    fn malformed_json_is_terminal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("details.json");
        std::fs::write(&path, "{ not json ]").expect("write fixture");

        let err = load_records(path.to_str().expect("utf8 path")).expect_err("must fail");
        assert!(matches!(err, FolioError::MalformedData { .. }));
    }

    #[test]
    fn empty_array_is_a_valid_catalogue() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("details.json");
        std::fs::write(&path, "[]").expect("write fixture");

        let records = load_records(path.to_str().expect("utf8 path")).expect("load");
        assert!(records.is_empty());
    }
}
