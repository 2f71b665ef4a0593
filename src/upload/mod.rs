mod progress;
mod submitter;
mod types;
pub mod validator;

pub use progress::SyntheticProgress;
pub use submitter::Submitter;
pub use types::{FileCandidate, SubmissionRecord, UploadOutcome};
