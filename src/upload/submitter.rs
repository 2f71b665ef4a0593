use serde::Deserialize;

use crate::upload::types::{FileCandidate, UploadOutcome};

#[derive(Deserialize)]
struct SubmitResponse {
    stored_name: String,
}

/// Posts a file to the xerox service from a worker thread. The service
/// enforces the same size and type limits the client checks up front, so a
/// rejection here means the two disagree (stale client, stripped extension).
#[derive(Clone)]
pub struct Submitter {
    endpoint: String,
}

impl Submitter {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    pub async fn submit(&self, file: &FileCandidate) -> UploadOutcome {
        let bytes = match std::fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(e) => return UploadOutcome::Failed(format!("Failed to read file: {}", e)),
        };

        let mime = if file.media_type.is_empty() {
            "application/octet-stream"
        } else {
            &file.media_type
        };

        let part = match reqwest::multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(mime)
        {
            Ok(part) => part,
            Err(e) => return UploadOutcome::Failed(format!("Invalid media type: {}", e)),
        };
        let form = reqwest::multipart::Form::new().part("file", part);

        let client = reqwest::Client::new();
        let response = match client.post(&self.endpoint).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => return UploadOutcome::Failed(format!("Failed to send request: {}", e)),
        };

        let status = response.status();
        match status.as_u16() {
            200 | 201 => {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        return UploadOutcome::Failed(format!("Failed to read response: {}", e))
                    }
                };
                match serde_json::from_str::<SubmitResponse>(&body) {
                    Ok(parsed) => UploadOutcome::Accepted {
                        stored_name: parsed.stored_name,
                    },
                    Err(e) => {
                        UploadOutcome::Failed(format!("Failed to parse upload response: {}", e))
                    }
                }
            }
            413 => UploadOutcome::Rejected(
                "The service refused the file: larger than the 16 MB limit.".to_string(),
            ),
            415 => UploadOutcome::Rejected(
                "The service refused the file type. PDF, Word documents, and images only."
                    .to_string(),
            ),
            _ => UploadOutcome::Failed(format!("Upload failed with status: {}", status)),
        }
    }
}
