use crate::analyze::AnalyzeError;
use crate::report::row::ReportRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the JSON array of rows.
pub const TABLE_PLACEHOLDER: &str = "table_json";

/// HTML report skeleton with a `$table_json` placeholder.
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    path: PathBuf,
    source: String,
}

impl ReportTemplate {
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        let source = fs::read_to_string(path).map_err(|e| AnalyzeError::Template {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, rows: &[ReportRow]) -> Result<String, AnalyzeError> {
        let table_json = serde_json::to_string(rows).map_err(AnalyzeError::RenderReport)?;
        Ok(substitute(&self.source, TABLE_PLACEHOLDER, &table_json))
    }
}

/// Replace `$name` and `${name}` with `value`, turn `$$` into `$`, and leave
/// every other `$` sequence as written.
fn substitute(source: &str, name: &str, value: &str) -> String {
    let mut out = String::with_capacity(source.len() + value.len());
    let mut rest = source;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
            continue;
        }

        if let Some(tail) = after
            .strip_prefix('{')
            .and_then(|t| t.strip_prefix(name))
            .and_then(|t| t.strip_prefix('}'))
        {
            out.push_str(value);
            rest = tail;
            continue;
        }

        let ident_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if &after[..ident_len] == name {
            out.push_str(value);
            rest = &after[ident_len..];
        } else {
            out.push('$');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}
