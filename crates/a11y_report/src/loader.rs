//! Report directory loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{ReportError, ReportResult};
use crate::models::{RawReport, SkipReason};

/// Extension of candidate report files.
pub const REPORT_EXTENSION: &str = "json";

/// Outcome of reading and parsing one candidate file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Parsed(RawReport),
    Skipped(SkipReason),
}

/// One candidate file and what became of it.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl LoadedFile {
    /// File name for diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Loads Lighthouse JSON reports from a directory.
pub struct ReportLoader {
    reports_path: PathBuf,
}

impl ReportLoader {
    /// Create a new report loader.
    pub fn new(reports_path: impl Into<PathBuf>) -> Self {
        Self {
            reports_path: reports_path.into(),
        }
    }

    pub fn reports_path(&self) -> &Path {
        &self.reports_path
    }

    /// List candidate report files, sorted by file name.
    ///
    /// Fails only when the directory itself cannot be listed.
    pub fn candidates(&self) -> ReportResult<Vec<PathBuf>> {
        let metadata = fs::metadata(&self.reports_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ReportError::DirectoryNotFound(self.reports_path.clone())
            } else {
                ReportError::DirectoryUnreadable {
                    path: self.reports_path.clone(),
                    source,
                }
            }
        })?;
        if !metadata.is_dir() {
            return Err(ReportError::NotADirectory(self.reports_path.clone()));
        }

        // Surface permission problems before walking
        fs::read_dir(&self.reports_path).map_err(|source| ReportError::DirectoryUnreadable {
            path: self.reports_path.clone(),
            source,
        })?;

        let mut candidates = Vec::new();
        for entry in WalkDir::new(&self.reports_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && has_report_extension(path) {
                candidates.push(path.to_path_buf());
            } else {
                debug!("Ignoring non-report entry {:?}", path);
            }
        }

        Ok(candidates)
    }

    /// Load every candidate file. Bad files are returned as skipped, not as errors.
    pub fn load_all(&self) -> ReportResult<Vec<LoadedFile>> {
        let candidates = self.candidates()?;
        info!(
            "Found {} candidate report file(s) in {:?}",
            candidates.len(),
            self.reports_path
        );

        let files = candidates
            .into_iter()
            .map(|path| {
                let outcome = Self::load_file(&path);
                let loaded = LoadedFile { path, outcome };
                if let FileOutcome::Skipped(reason) = &loaded.outcome {
                    warn!("Skipping file {}: {}", loaded.file_name(), reason);
                }
                loaded
            })
            .collect();

        Ok(files)
    }

    /// Read and parse a single report file.
    pub fn load_file(path: &Path) -> FileOutcome {
        debug!("Loading report from {:?}", path);
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => FileOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
        }
    }

    /// Parse report content.
    pub fn parse(content: &str) -> FileOutcome {
        let value: serde_json::Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => return FileOutcome::Skipped(SkipReason::InvalidJson(e.to_string())),
        };

        if !value.is_object() {
            return FileOutcome::Skipped(SkipReason::NotAReport);
        }

        match serde_json::from_value::<RawReport>(value) {
            Ok(report) => FileOutcome::Parsed(report),
            Err(e) => FileOutcome::Skipped(SkipReason::UnexpectedShape(e.to_string())),
        }
    }
}

fn has_report_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == REPORT_EXTENSION)
}
