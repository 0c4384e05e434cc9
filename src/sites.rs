use std::fs;
use std::path::Path;

use url::Url;

use crate::error::{SourceLoadError, SourceLoadKind};
use crate::fetch::with_http_scheme;

const FIELD_SEPARATOR: char = ';';

/// Loads the ordered url list from a delimited file: one header line,
/// then records whose second field is the target. Hosts are validated up
/// front so a bad entry aborts before any fetch is attempted.
pub fn load_urls(path: &Path) -> Result<Vec<String>, SourceLoadError> {
    let load_error = |kind| SourceLoadError {
        path: path.to_path_buf(),
        kind,
    };
    let text = fs::read_to_string(path).map_err(|error| load_error(SourceLoadKind::Read(error)))?;
    let mut urls = Vec::new();
    for (line_index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = line_index + 1;
        let url = line
            .split(FIELD_SEPARATOR)
            .nth(1)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .ok_or_else(|| load_error(SourceLoadKind::MissingField { line: line_number }))?;
        Url::parse(&with_http_scheme(url)).map_err(|source| {
            load_error(SourceLoadKind::InvalidHost {
                line: line_number,
                host: url.to_string(),
                source,
            })
        })?;
        urls.push(url.to_string());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sites_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn skips_header_and_takes_second_field() {
        let file = sites_file("name;url;note\none;a.test;x\ntwo;b.test;y\n");
        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["a.test", "b.test"]);
    }

    #[test]
    fn ignores_blank_lines() {
        let file = sites_file("name;url\none;a.test\n\ntwo;b.test\n");
        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["a.test", "b.test"]);
    }

    #[test]
    fn record_without_url_field_fails_the_load() {
        let file = sites_file("name;url\nonly-one-field\n");
        assert!(load_urls(file.path()).is_err());
    }

    #[test]
    fn invalid_host_fails_the_load() {
        let file = sites_file("name;url\none;not a host\n");
        assert!(load_urls(file.path()).is_err());
    }

    #[test]
    fn missing_file_fails_the_load() {
        assert!(load_urls(Path::new("does-not-exist.csv")).is_err());
    }
}
