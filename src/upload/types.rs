use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How many bytes to sniff for a media-type signature.
const SNIFF_LEN: usize = 512;

/// A file picked for upload, captured at selection time.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    /// Sniffed media type, e.g. `application/pdf`. Empty when the content
    /// matches no known signature; the extension check covers those files.
    pub media_type: String,
    pub path: PathBuf,
}

impl FileCandidate {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let name = path
            .file_name()
            .ok_or("Invalid filename")?
            .to_str()
            .ok_or("Invalid filename encoding")?
            .to_string();

        let size = fs::metadata(path)
            .map_err(|e| format!("Failed to read file metadata: {}", e))?
            .len();

        Ok(Self {
            name,
            size,
            media_type: detect_media_type(path),
            path: path.to_path_buf(),
        })
    }
}

fn detect_media_type(path: &Path) -> String {
    let mut buffer = [0u8; SNIFF_LEN];
    let read = fs::File::open(path).and_then(|mut file| file.read(&mut buffer));
    match read {
        Ok(n) => infer::get(&buffer[..n])
            .map(|kind| kind.mime_type().to_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// What became of a submission once the service answered (or failed to).
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// 2xx; the service stored the file under a generated name.
    Accepted { stored_name: String },
    /// The service refused the file.
    Rejected(String),
    /// The request never completed.
    Failed(String),
}

impl UploadOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, UploadOutcome::Accepted { .. })
    }
}

/// One line of the submission history panel.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub name: String,
    pub outcome: UploadOutcome,
}
