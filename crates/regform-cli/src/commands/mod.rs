//! Subcommand handlers

pub mod config;
pub mod schema;
pub mod submit;
pub mod terms;
pub mod validate;

use clap::ValueEnum;
use regform_core::FormVariant;

/// Form variant selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormArg {
    Wholesale,
    Distributor,
}

impl From<FormArg> for FormVariant {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Wholesale => FormVariant::Wholesale,
            FormArg::Distributor => FormVariant::Distributor,
        }
    }
}
