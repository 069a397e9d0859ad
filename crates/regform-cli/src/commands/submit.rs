use anyhow::bail;
use colored::Colorize;
use regform_core::infrastructure::InMemorySink;
use regform_core::{
    DistributorRecord, FieldStore, FormPorts, RegformConfig, RegistrationRecord, SharedStore,
    SignatureInput, SignaturePad, SubmissionController, SubmissionSink, SubmissionState,
    WholesaleRecord,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::validate::violation_rows;
use super::FormArg;
use crate::answers;
use crate::notify::TerminalNotifier;
use crate::output::OutputFormat;
use crate::sink::JsonFileSink;

pub struct SubmitRequest {
    pub answers: PathBuf,
    pub signature: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

pub async fn handle(
    form: FormArg,
    request: SubmitRequest,
    settings: &RegformConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match form {
        FormArg::Wholesale => run::<WholesaleRecord>(request, settings, format).await,
        FormArg::Distributor => run::<DistributorRecord>(request, settings, format).await,
    }
}

async fn run<R: RegistrationRecord>(
    request: SubmitRequest,
    settings: &RegformConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let answers = answers::load_answers(&request.answers)?;
    let store = SharedStore::new(FieldStore::<R>::from_answers(&answers)?);
    let notifier = Arc::new(TerminalNotifier::new());

    let memory = Arc::new(InMemorySink::<R>::new());
    let sink: Arc<dyn SubmissionSink<R>> = match &request.out {
        Some(path) => Arc::new(JsonFileSink::new(path)),
        None => memory.clone(),
    };

    let pad = SignaturePad::new(Arc::new(store.clone()), notifier.clone(), settings);
    if let Some(path) = &request.signature {
        for stroke in answers::load_strokes(path)? {
            pad.draw(&stroke)?;
        }
        pad.save()?;
    }

    let controller = SubmissionController::new(store, FormPorts::new(notifier, sink), settings)?;
    let attempt = controller.submit();
    info!(form = %R::VARIANT, attempt, "submitted");

    match controller.wait_settled().await {
        SubmissionState::Succeeded => {
            match &request.out {
                Some(path) => {
                    if format.is_table() {
                        println!("{} written to {}", "Submission".green().bold(), path.display());
                    }
                }
                None => {
                    for submission in memory.submissions() {
                        format.print_value(&submission)?;
                    }
                }
            }
            pad.close();
            Ok(())
        }
        state => {
            pad.close();
            let rows = controller.store().read(violation_rows::<R>);
            if rows.is_empty() {
                bail!("submission ended {}", state.as_str());
            }
            format.print(&rows)?;
            bail!("{} field(s) need attention", rows.len())
        }
    }
}
