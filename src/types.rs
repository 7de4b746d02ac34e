//! Data shapes exchanged with the backend, plus the pure display
//! projections the components render from them.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`. `None` asks the backend to use its default location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub repo_path: Option<String>,
}

/// Result of a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisResult {
    /// Full commit message, possibly multi-line.
    pub message: String,
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Paths in the order the backend sent them. May be empty even when
    /// `insertions`/`deletions` are not (binary-only changes).
    pub files_changed: Vec<String>,
    pub insertions: u64,
    pub deletions: u64,
}

impl AnalysisResult {
    pub fn insertions_label(&self) -> String {
        format!("+{}", self.insertions)
    }

    pub fn deletions_label(&self) -> String {
        format!("-{}", self.deletions)
    }
}

/// Conventional commit type as reported by the backend.
///
/// Unknown labels are kept as `Unrecognized` instead of failing
/// deserialization; they render with the fallback category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Refactor,
    Test,
    Chore,
    Style,
    Perf,
    Unrecognized(String),
}

impl CommitType {
    /// Label as received, e.g. `"feat"` or whatever unknown text came back.
    pub fn label(&self) -> &str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Style => "style",
            CommitType::Perf => "perf",
            CommitType::Unrecognized(raw) => raw,
        }
    }

    pub fn category(&self) -> CommitCategory {
        match self {
            CommitType::Feat => CommitCategory::Feat,
            CommitType::Fix => CommitCategory::Fix,
            CommitType::Docs => CommitCategory::Docs,
            CommitType::Refactor => CommitCategory::Refactor,
            CommitType::Test => CommitCategory::Test,
            CommitType::Style => CommitCategory::Style,
            CommitType::Perf => CommitCategory::Perf,
            CommitType::Chore | CommitType::Unrecognized(_) => CommitCategory::Chore,
        }
    }
}

impl From<String> for CommitType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "feat" => CommitType::Feat,
            "fix" => CommitType::Fix,
            "docs" => CommitType::Docs,
            "refactor" => CommitType::Refactor,
            "test" => CommitType::Test,
            "chore" => CommitType::Chore,
            "style" => CommitType::Style,
            "perf" => CommitType::Perf,
            _ => CommitType::Unrecognized(raw),
        }
    }
}

impl From<CommitType> for String {
    fn from(kind: CommitType) -> Self {
        match kind {
            CommitType::Unrecognized(raw) => raw,
            other => other.label().to_string(),
        }
    }
}

/// Display routing for a commit type. `Chore` doubles as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitCategory {
    Feat,
    Fix,
    Docs,
    Refactor,
    Test,
    Chore,
    Style,
    Perf,
}

impl CommitCategory {
    pub const ALL: [CommitCategory; 8] = [
        CommitCategory::Feat,
        CommitCategory::Fix,
        CommitCategory::Docs,
        CommitCategory::Refactor,
        CommitCategory::Test,
        CommitCategory::Chore,
        CommitCategory::Style,
        CommitCategory::Perf,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            CommitCategory::Feat => "type-feat",
            CommitCategory::Fix => "type-fix",
            CommitCategory::Docs => "type-docs",
            CommitCategory::Refactor => "type-refactor",
            CommitCategory::Test => "type-test",
            CommitCategory::Chore => "type-chore",
            CommitCategory::Style => "type-style",
            CommitCategory::Perf => "type-perf",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            CommitCategory::Feat => "feat",
            CommitCategory::Fix => "fix",
            CommitCategory::Docs => "docs",
            CommitCategory::Refactor => "refactor",
            CommitCategory::Test => "test",
            CommitCategory::Chore => "chore",
            CommitCategory::Style => "style",
            CommitCategory::Perf => "perf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommitCategory::Feat => "New feature",
            CommitCategory::Fix => "Bug fix",
            CommitCategory::Docs => "Documentation",
            CommitCategory::Refactor => "Code refactoring",
            CommitCategory::Test => "Testing",
            CommitCategory::Chore => "Maintenance",
            CommitCategory::Style => "Formatting and style",
            CommitCategory::Perf => "Performance",
        }
    }
}

/// One previously generated result, as stored by the backend.
///
/// Immutable once fetched. `commit_type` is an uninterpreted label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub message: String,
    pub commit_type: String,
    pub files: Vec<String>,
    pub created_at: String,
    pub used: bool,
}

impl HistoryEntry {
    /// First line of the message.
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn files_label(&self) -> String {
        format!("{} file(s)", self.files.len())
    }

    pub fn usage_label(&self) -> &'static str {
        if self.used {
            "\u{2713} Used"
        } else {
            "Not used"
        }
    }

    /// Creation date in the local timezone, if `created_at` parses.
    pub fn local_date(&self) -> Option<NaiveDate> {
        parse_timestamp(&self.created_at).map(|ts| ts.with_timezone(&Local).date_naive())
    }

    pub fn date_label(&self) -> String {
        self.local_date()
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| "Unknown date".to_string())
    }
}

/// Accepts RFC 3339 and SQLite's `CURRENT_TIMESTAMP` form (UTC, no offset).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `GET /history` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// `GET /` health response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl BackendStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
