//! Submission sink adapters

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::domain::schema::RegistrationRecord;
use crate::domain::submission::Submission;
use crate::error::{FormError, Result};
use crate::ports::outbound::SubmissionSink;

/// Logs the accepted record as JSON
#[derive(Debug, Default)]
pub struct LoggingSink;

#[async_trait]
impl<R: RegistrationRecord> SubmissionSink<R> for LoggingSink {
    async fn accept(&self, submission: &Submission<R>) -> Result<()> {
        let record = serde_json::to_string(&submission.record).map_err(|e| FormError::Sink(e.to_string()))?;
        info!(
            submission_id = %submission.id,
            form = %submission.variant,
            %record,
            "registration submitted"
        );
        Ok(())
    }
}

/// Keeps accepted submissions in memory
#[derive(Debug)]
pub struct InMemorySink<R> {
    submissions: Mutex<Vec<Submission<R>>>,
}

impl<R> Default for InMemorySink<R> {
    fn default() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
        }
    }
}

impl<R: RegistrationRecord> InMemorySink<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<Submission<R>> {
        self.submissions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }
}

#[async_trait]
impl<R: RegistrationRecord> SubmissionSink<R> for InMemorySink<R> {
    async fn accept(&self, submission: &Submission<R>) -> Result<()> {
        self.submissions.lock().push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::WholesaleRecord;

    #[tokio::test]
    async fn test_in_memory_sink_keeps_submissions() {
        let sink = InMemorySink::new();
        let mut record = WholesaleRecord::default();
        record.company_name = "Acme".into();
        sink.accept(&Submission::accept(record)).await.unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.submissions()[0].record.company_name, "Acme");
    }

    #[test]
    fn test_logging_sink_accepts() {
        let submission = Submission::accept(WholesaleRecord::default());
        let sink: &dyn SubmissionSink<WholesaleRecord> = &LoggingSink;
        tokio_test::assert_ok!(tokio_test::block_on(sink.accept(&submission)));
    }
}
