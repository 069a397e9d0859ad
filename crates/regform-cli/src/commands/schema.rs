use colored::Colorize;
use regform_core::{
    DistributorRecord, FieldId, FieldRule, RegistrationRecord, WholesaleRecord,
};
use serde::Serialize;
use tabled::Tabled;

use super::FormArg;
use crate::output::OutputFormat;

#[derive(Debug, Serialize, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Section")]
    pub section: &'static str,
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
    #[tabled(rename = "Required")]
    pub required: bool,
    #[tabled(rename = "Rule")]
    pub rule: String,
    #[tabled(rename = "Shown When")]
    pub shown_when: String,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

pub fn rows<R: RegistrationRecord>() -> Vec<FieldRow> {
    R::schema()
        .iter()
        .map(|spec| FieldRow {
            section: spec.section,
            field: spec.field.name(),
            label: spec.label,
            kind: spec.kind.name(),
            required: spec.required,
            rule: match spec.rule {
                Some(FieldRule::Email) => "email".into(),
                Some(FieldRule::Phone) => "phone".into(),
                Some(FieldRule::Agreement) => "agreement".into(),
                None => String::new(),
            },
            shown_when: spec
                .reveal
                .map(|reveal| format!("{} = {}", reveal.controller.name(), reveal.trigger))
                .unwrap_or_default(),
            options: spec.kind.options().to_vec(),
        })
        .collect()
}

pub fn handle(form: FormArg, format: OutputFormat) -> anyhow::Result<()> {
    match form {
        FormArg::Wholesale => show::<WholesaleRecord>(format),
        FormArg::Distributor => show::<DistributorRecord>(format),
    }
}

fn show<R: RegistrationRecord>(format: OutputFormat) -> anyhow::Result<()> {
    if format.is_table() {
        let copy = R::copy();
        println!("{}", copy.title.bold());
        println!("{}\n", copy.subtitle);
    }
    format.print(&rows::<R>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_schema_order() {
        let rows = rows::<WholesaleRecord>();
        assert_eq!(rows.len(), WholesaleRecord::schema().len());
        assert_eq!(rows[0].field, "companyName");
        assert_eq!(rows.last().map(|row| row.field), Some("signatureDate"));
    }

    #[test]
    fn test_conditional_rows_name_their_trigger() {
        let rows = rows::<DistributorRecord>();
        let platforms = rows
            .iter()
            .find(|row| row.field == "marketplacePlatforms")
            .unwrap();
        assert_eq!(platforms.shown_when, "onlineMarketplaces = Yes");
        assert!(!platforms.required);
    }
}
