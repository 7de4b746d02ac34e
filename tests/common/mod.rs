#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::num::NonZeroU32;

use commit_composer::api::AnalysisApi;
use commit_composer::clipboard::Clipboard;
use commit_composer::error::ErrorKind;
use commit_composer::types::{AnalysisResult, CommitType, HistoryEntry};

/// Scripted backend. Each call yields once before answering so concurrent
/// triggers interleave the way they would in the browser.
#[derive(Default)]
pub struct ScriptedApi {
    analyze_outcomes: RefCell<VecDeque<Result<AnalysisResult, ErrorKind>>>,
    history_outcomes: RefCell<VecDeque<Result<Vec<HistoryEntry>, ErrorKind>>>,
    pub analyze_calls: Cell<usize>,
    pub history_limits: RefCell<Vec<u32>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_analyze(self, outcome: Result<AnalysisResult, ErrorKind>) -> Self {
        self.analyze_outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn then_history(self, outcome: Result<Vec<HistoryEntry>, ErrorKind>) -> Self {
        self.history_outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn history_calls(&self) -> usize {
        self.history_limits.borrow().len()
    }
}

impl AnalysisApi for &ScriptedApi {
    async fn analyze(&self) -> Result<AnalysisResult, ErrorKind> {
        self.analyze_calls.set(self.analyze_calls.get() + 1);
        tokio::task::yield_now().await;
        self.analyze_outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ErrorKind::Unreachable))
    }

    async fn fetch_history(&self, limit: NonZeroU32) -> Result<Vec<HistoryEntry>, ErrorKind> {
        self.history_limits.borrow_mut().push(limit.get());
        tokio::task::yield_now().await;
        self.history_outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ErrorKind::Unreachable))
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub written: RefCell<Vec<String>>,
    pub fail_with: Option<String>,
}

impl RecordingClipboard {
    pub fn failing(reason: &str) -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ErrorKind> {
        if let Some(reason) = &self.fail_with {
            return Err(ErrorKind::ClipboardFailure(reason.clone()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

pub fn login_result() -> AnalysisResult {
    AnalysisResult {
        message: "feat: add login".to_string(),
        commit_type: CommitType::Feat,
        files_changed: vec!["a.ts".to_string(), "b.ts".to_string()],
        insertions: 10,
        deletions: 2,
    }
}

pub fn history_entry(id: i64, message: &str) -> HistoryEntry {
    HistoryEntry {
        id,
        message: message.to_string(),
        commit_type: "feat".to_string(),
        files: vec!["src/main.rs".to_string()],
        created_at: "2024-06-01 09:15:00".to_string(),
        used: false,
    }
}

pub fn limit(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}
