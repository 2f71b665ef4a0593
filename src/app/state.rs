use std::sync::mpsc::Receiver;

use crate::upload::{FileCandidate, SubmissionRecord, SyntheticProgress, UploadOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Done,
}

impl Default for SubmitPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Default)]
pub struct UploadState {
    pub phase: SubmitPhase,
    pub selection: Option<FileCandidate>,
    pub progress: Option<SyntheticProgress>,
    pub history: Vec<SubmissionRecord>,
    pub error_message: Option<String>,
    pub show_history: bool,
    pub outcome_receiver: Option<Receiver<UploadOutcome>>,
}

impl UploadState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Fraction for the progress bar. The synthetic value tops out below 1.0;
    /// only an accepting server response moves the bar to full. A rejected or
    /// failed submission empties it instead of claiming completion.
    pub fn display_fraction(&self) -> f32 {
        match self.phase {
            SubmitPhase::Idle => 0.0,
            SubmitPhase::Submitting => self
                .progress
                .as_ref()
                .map(|p| p.percent() / 100.0)
                .unwrap_or(0.0),
            SubmitPhase::Done => match self.history.last() {
                Some(record) if record.outcome.is_accepted() => 1.0,
                _ => 0.0,
            },
        }
    }

    pub fn status_text(&self) -> String {
        match self.phase {
            SubmitPhase::Idle => String::new(),
            SubmitPhase::Submitting => match &self.selection {
                Some(file) => format!("📤 Uploading: {}", file.name),
                None => "📤 Uploading...".to_string(),
            },
            SubmitPhase::Done => match self.history.last() {
                Some(record) if record.outcome.is_accepted() => {
                    format!("✅ Upload complete: {}", record.name)
                }
                Some(record) => format!("❌ Upload failed: {}", record.name),
                None => "Upload complete".to_string(),
            },
        }
    }

    /// Back to a fresh form; the submission history survives.
    pub fn reset_for_new_upload(&mut self) {
        self.phase = SubmitPhase::Idle;
        self.selection = None;
        self.progress = None;
        self.error_message = None;
        self.outcome_receiver = None;
    }
}
