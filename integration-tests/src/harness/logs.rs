use flate2::Compression;
use flate2::write::GzEncoder;
use hotspot_core::AnalyzerConfig;
use hotspot_core::logging::LogFormat;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One access log line in the `ui_short` format with `$request_time` last.
pub fn access_line(url: &str, request_time: f64) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {url} HTTP/1.1\" 200 927 \"-\" \"Lynx/2.8.8dev.9 libwww-FM/2.14\" \"-\" \"1498697422-2190034393-4708-9752759\" \"dc7161be3\" {request_time}\n"
    )
}

/// Temporary log and report directories plus a copy of the fixture template.
pub struct LogWorkspace {
    root: TempDir,
}

impl LogWorkspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("log")).unwrap();

        let template = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("report.html");
        fs::copy(template, root.path().join("report.html")).unwrap();

        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("log")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn template(&self) -> PathBuf {
        self.root().join("report.html")
    }

    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            report_size: 1000,
            report_dir: self.report_dir(),
            report_template_file: self.template(),
            log_dir: self.log_dir(),
            log_file: None,
            log_format: LogFormat::Text,
            error_limit: 0.5,
        }
    }

    pub fn write_plain(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        fs::write(&path, lines.concat()).unwrap();
        path
    }

    pub fn write_gzip(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(lines.concat().as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();
        path
    }

    pub fn report(&self, name: &str) -> PathBuf {
        self.report_dir().join(name)
    }

    /// Parse the JSON table out of a rendered report.
    pub fn report_rows(&self, name: &str) -> serde_json::Value {
        let html = fs::read_to_string(self.report(name)).unwrap();
        let start = html.find("var table = ").unwrap() + "var table = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }
}

impl Default for LogWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
