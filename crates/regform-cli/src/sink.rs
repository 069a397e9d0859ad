//! JSON file submission sink

use async_trait::async_trait;
use regform_core::{FormError, RegistrationRecord, Submission, SubmissionSink};
use std::path::PathBuf;
use tracing::info;

/// Writes each accepted submission to one JSON file, replacing earlier content
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl<R: RegistrationRecord> SubmissionSink<R> for JsonFileSink {
    async fn accept(&self, submission: &Submission<R>) -> regform_core::Result<()> {
        let json = serde_json::to_vec_pretty(submission).map_err(|e| FormError::Sink(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| FormError::Sink(format!("{}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), submission_id = %submission.id, "submission written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_core::WholesaleRecord;

    #[tokio::test]
    async fn test_writes_submission_json() {
        let path = std::env::temp_dir().join(format!("regform-sink-{}.json", uuid::Uuid::new_v4()));
        let sink = JsonFileSink::new(&path);
        let mut record = WholesaleRecord::default();
        record.company_name = "Acme".into();
        let submission = Submission::accept(record);

        SubmissionSink::<WholesaleRecord>::accept(&sink, &submission).await.unwrap();

        let written: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["record"]["companyName"], "Acme");
        assert_eq!(written["variant"], "wholesale");
        std::fs::remove_file(path).ok();
    }
}
