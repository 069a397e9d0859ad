use colored::Colorize;
use regform_core::{
    DistributorRecord, FieldId, FieldStore, RegistrationRecord, Validator, WholesaleRecord,
};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;
use tracing::debug;

use super::FormArg;
use crate::answers;
use crate::output::OutputFormat;

#[derive(Debug, Serialize, Tabled)]
pub struct ViolationRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Problem")]
    pub message: &'static str,
}

/// Violations of a store's current errors, in schema order
pub fn violation_rows<R: RegistrationRecord>(store: &FieldStore<R>) -> Vec<ViolationRow> {
    R::schema()
        .iter()
        .filter_map(|spec| {
            store.error(spec.field).map(|violation| ViolationRow {
                field: spec.field.name(),
                label: spec.label,
                message: violation.message(),
            })
        })
        .collect()
}

pub fn handle(
    form: FormArg,
    answers: &Path,
    settings: &regform_core::RegformConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match form {
        FormArg::Wholesale => check::<WholesaleRecord>(answers, settings, format),
        FormArg::Distributor => check::<DistributorRecord>(answers, settings, format),
    }
}

fn check<R: RegistrationRecord>(
    path: &Path,
    settings: &regform_core::RegformConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let answers = answers::load_answers(path)?;
    debug!(form = %R::VARIANT, answers = answers.len(), "answers loaded");
    let mut store = FieldStore::<R>::from_answers(&answers)?;
    let result = Validator::new(settings.validation)?.validate(store.record());
    let count = result.len();
    store.set_errors(result);

    if count == 0 {
        if format.is_table() {
            println!("{} {} form is complete", "✓".green().bold(), R::VARIANT);
        } else {
            format.print(&Vec::<ViolationRow>::new())?;
        }
        return Ok(());
    }

    format.print(&violation_rows(&store))?;
    anyhow::bail!("{} field(s) need attention", count)
}
