use crate::analyze::AnalyzeError;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// `report_dir/report-YYYY.MM.DD.html`
pub fn report_path(report_dir: &Path, date: NaiveDate) -> PathBuf {
    report_dir.join(format!("report-{}.html", date.format("%Y.%m.%d")))
}

pub fn report_exists(path: &Path) -> bool {
    path.is_file()
}

/// Write the report through a temp file in the target directory and rename it
/// into place, so readers never observe a partial report.
pub fn write_report(path: &Path, html: &str) -> Result<(), AnalyzeError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    fs::create_dir_all(dir).map_err(|e| AnalyzeError::write_report(path, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AnalyzeError::write_report(path, e))?;
    tmp.write_all(html.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| AnalyzeError::write_report(path, e))?;

    // NamedTempFile is created 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| AnalyzeError::write_report(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| AnalyzeError::write_report(path, e.error))?;

    Ok(())
}
