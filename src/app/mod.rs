mod state;
mod ui;

use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use eframe::{egui, App};

use crate::dialog::{self, GuardedAction, NativeDialogs, Prompter};
use crate::notify::{BannerRack, Severity, ToastRack};
use crate::upload::{validator, FileCandidate, SubmissionRecord, Submitter, SyntheticProgress};
pub use state::{SubmitPhase, UploadState};

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/upload";

/// Administrative actions reachable from the form. Destructive ones carry the
/// confirmation flag; the guard in [`dialog`] reads it before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    ClearHistory,
    DiscardSelection,
}

impl GuardedAction for AdminAction {
    fn requires_confirmation(&self) -> bool {
        matches!(self, AdminAction::ClearHistory)
    }
}

pub struct XeroxUploader {
    endpoint: String,
    state: UploadState,
    toasts: ToastRack,
    banners: BannerRack,
    dialogs: Box<dyn Prompter>,
}

impl XeroxUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        println!("Starting Cyber Café Xerox Uploader");
        Self::with_dialogs(Box::new(NativeDialogs))
    }

    fn with_dialogs(dialogs: Box<dyn Prompter>) -> Self {
        let mut banners = BannerRack::default();
        banners.push(
            Severity::Info,
            "Accepted formats: PDF, Word documents, and images up to 16 MB.",
        );

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state: UploadState::default(),
            toasts: ToastRack::default(),
            banners,
            dialogs,
        }
    }

    /// Selection-change handler. Inspects only the first chosen file; an empty
    /// pick leaves everything as it was.
    pub fn files_chosen(&mut self, files: Vec<FileCandidate>) {
        // The form is locked while a submission is in flight; a pick landing
        // here anyway must not displace the file the worker is sending.
        if self.state.is_submitting() {
            return;
        }

        let Some(file) = files.into_iter().next() else {
            return;
        };

        match validator::validate(&file.name, file.size, &file.media_type) {
            Ok(()) => {
                println!(
                    "Selected file: {} ({:.2} MB)",
                    file.name,
                    file.size as f64 / 1024.0 / 1024.0
                );
                self.state.selection = Some(file);
            }
            Err(error) => {
                self.dialogs.alert(error.user_message());
                self.state.selection = None;
            }
        }
    }

    /// Submit handler: flips the form into its busy state, starts the
    /// synthetic progress animation, and hands the real request to a worker
    /// thread. The animation clamps below completion; only the worker's
    /// response finishes the bar.
    pub fn start_upload(&mut self, now: f64) {
        let Some(file) = self.state.selection.clone() else {
            self.state.error_message = Some("No file selected".to_string());
            return;
        };

        println!("Submitting {} to {}", file.name, self.endpoint);
        self.state.phase = SubmitPhase::Submitting;
        self.state.error_message = None;
        self.state.progress = Some(SyntheticProgress::start(now));

        let (sender, receiver) = std_mpsc::channel();
        self.state.outcome_receiver = Some(receiver);

        let submitter = Submitter::new(self.endpoint.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let outcome = submitter.submit(&file).await;
                sender.send(outcome).unwrap_or_default();
            });
        });
    }

    pub fn run_admin(&mut self, action: AdminAction) {
        if !dialog::allowed(self.dialogs.as_ref(), &action) {
            println!("Action {:?} cancelled by the user", action);
            return;
        }

        match action {
            AdminAction::ClearHistory => {
                self.state.history.clear();
                self.state.error_message = None;
            }
            AdminAction::DiscardSelection => {
                self.state.selection = None;
            }
        }
    }

    /// Per-frame housekeeping: expires banners and toasts, advances the
    /// synthetic progress, and folds in the worker's outcome when it lands.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        self.banners.schedule_initial_dismissal(now);
        self.banners.prune(now);
        self.toasts.prune(now);

        if let Some(progress) = self.state.progress.as_mut() {
            progress.advance(now, &mut rand::thread_rng());
        }

        let outcome = self
            .state
            .outcome_receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());
        if let Some(outcome) = outcome {
            self.finish_submission(outcome, now);
        }

        if self.state.is_submitting() || !self.toasts.is_empty() || !self.banners.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn finish_submission(&mut self, outcome: crate::upload::UploadOutcome, now: f64) {
        use crate::upload::UploadOutcome;

        self.state.outcome_receiver = None;
        self.state.phase = SubmitPhase::Done;
        self.state.progress = None;

        let name = self
            .state
            .selection
            .take()
            .map(|file| file.name)
            .unwrap_or_default();

        match &outcome {
            UploadOutcome::Accepted { stored_name } => {
                println!("Service stored {} as {}", name, stored_name);
                self.toasts.push(
                    Severity::Success,
                    format!("File \"{}\" uploaded successfully!", name),
                    now,
                );
            }
            UploadOutcome::Rejected(reason) | UploadOutcome::Failed(reason) => {
                self.state.error_message = Some(reason.clone());
                self.toasts.push(Severity::Error, reason.clone(), now);
            }
        }

        self.state.history.push(SubmissionRecord { name, outcome });
    }
}

impl App for XeroxUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ScriptedPrompter;
    use crate::upload::UploadOutcome;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn candidate(name: &str, size: u64, media_type: &str) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            size,
            media_type: media_type.to_string(),
            path: PathBuf::from(name),
        }
    }

    type Recorded = Arc<Mutex<Vec<String>>>;

    fn app_with_prompter(confirm_response: bool) -> (XeroxUploader, Recorded, Recorded) {
        let prompter = ScriptedPrompter::answering(confirm_response);
        let alerts = prompter.alerts.clone();
        let confirms = prompter.confirms.clone();
        (
            XeroxUploader::with_dialogs(Box::new(prompter)),
            alerts,
            confirms,
        )
    }

    #[test]
    fn empty_pick_is_a_no_op() {
        let (mut app, alerts, _) = app_with_prompter(true);
        app.files_chosen(Vec::new());
        assert!(app.state.selection.is_none());
        assert!(alerts.lock().unwrap().is_empty());
    }

    #[test]
    fn only_the_first_file_is_inspected() {
        let (mut app, alerts, _) = app_with_prompter(true);
        app.files_chosen(vec![
            candidate("scan.pdf", 1024, "application/pdf"),
            candidate("virus.exe", 1024, "application/x-dosexec"),
        ]);

        assert_eq!(app.state.selection.as_ref().unwrap().name, "scan.pdf");
        assert!(alerts.lock().unwrap().is_empty());
    }

    #[test]
    fn oversize_pick_alerts_and_clears() {
        let (mut app, alerts, _) = app_with_prompter(true);
        app.files_chosen(vec![candidate("scan.pdf", 1024, "application/pdf")]);
        app.files_chosen(vec![candidate(
            "huge.pdf",
            validator::MAX_UPLOAD_BYTES + 1,
            "application/pdf",
        )]);

        assert!(app.state.selection.is_none());
        assert_eq!(alerts.lock().unwrap().len(), 1);
    }

    #[test]
    fn empty_media_type_with_good_extension_is_accepted() {
        let (mut app, alerts, _) = app_with_prompter(true);
        app.files_chosen(vec![candidate("resume.DOCX", 2048, "")]);

        assert!(app.state.selection.is_some());
        assert!(alerts.lock().unwrap().is_empty());
    }

    #[test]
    fn clearing_history_needs_confirmation() {
        let (mut app, _, confirms) = app_with_prompter(false);
        app.state.history.push(SubmissionRecord {
            name: "scan.pdf".to_string(),
            outcome: UploadOutcome::Failed("timeout".to_string()),
        });

        app.run_admin(AdminAction::ClearHistory);
        assert_eq!(app.state.history.len(), 1);
        assert_eq!(confirms.lock().unwrap().len(), 1);

        app.dialogs = Box::new(ScriptedPrompter::answering(true));
        app.run_admin(AdminAction::ClearHistory);
        assert!(app.state.history.is_empty());
    }

    #[test]
    fn discarding_the_selection_does_not_prompt() {
        let (mut app, _, confirms) = app_with_prompter(false);
        app.files_chosen(vec![candidate("scan.pdf", 1024, "application/pdf")]);

        app.run_admin(AdminAction::DiscardSelection);
        assert!(app.state.selection.is_none());
        assert!(confirms.lock().unwrap().is_empty());
    }

    #[test]
    fn picks_are_ignored_while_a_submission_is_in_flight() {
        let (mut app, alerts, _) = app_with_prompter(true);
        app.files_chosen(vec![candidate("scan.pdf", 1024, "application/pdf")]);
        app.state.phase = SubmitPhase::Submitting;

        app.files_chosen(vec![candidate("other.pdf", 2048, "application/pdf")]);
        assert_eq!(app.state.selection.as_ref().unwrap().name, "scan.pdf");
        assert!(alerts.lock().unwrap().is_empty());

        // The outcome is attributed to the file the worker actually sent.
        app.finish_submission(
            UploadOutcome::Accepted {
                stored_name: "ab12.pdf".to_string(),
            },
            1.0,
        );
        assert_eq!(app.state.history[0].name, "scan.pdf");
    }

    #[test]
    fn submit_without_a_selection_sets_an_error() {
        let (mut app, _, _) = app_with_prompter(true);
        app.start_upload(0.0);
        assert_eq!(app.state.phase, SubmitPhase::Idle);
        assert_eq!(app.state.error_message.as_deref(), Some("No file selected"));
    }

    #[test]
    fn outcome_lands_in_history_and_toasts() {
        let (mut app, _, _) = app_with_prompter(true);
        app.files_chosen(vec![candidate("scan.pdf", 1024, "application/pdf")]);
        app.state.phase = SubmitPhase::Submitting;
        app.state.progress = Some(SyntheticProgress::start(0.0));

        app.finish_submission(
            UploadOutcome::Accepted {
                stored_name: "ab12.pdf".to_string(),
            },
            1.0,
        );

        assert_eq!(app.state.phase, SubmitPhase::Done);
        assert!(app.state.progress.is_none());
        assert_eq!(app.state.history.len(), 1);
        assert_eq!(app.state.history[0].name, "scan.pdf");
        assert!(!app.toasts.is_empty());

        // The success toast expires on its own.
        app.toasts.prune(4.1);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn failed_outcome_surfaces_the_reason() {
        let (mut app, _, _) = app_with_prompter(true);
        app.files_chosen(vec![candidate("scan.pdf", 1024, "application/pdf")]);
        app.state.phase = SubmitPhase::Submitting;

        app.finish_submission(UploadOutcome::Failed("connection refused".to_string()), 1.0);
        assert_eq!(
            app.state.error_message.as_deref(),
            Some("connection refused")
        );
    }
}
