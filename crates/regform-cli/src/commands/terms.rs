use colored::Colorize;
use regform_core::{TermsSection, AUTO_SHIP_TERMS, TERMS_TITLE};
use serde::Serialize;

use crate::output::OutputFormat;

#[derive(Serialize)]
struct Terms {
    title: &'static str,
    sections: &'static [TermsSection],
}

pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    if !format.is_table() {
        return format.print_value(&Terms {
            title: TERMS_TITLE,
            sections: &AUTO_SHIP_TERMS,
        });
    }

    println!("{}\n", TERMS_TITLE.bold());
    for (index, section) in AUTO_SHIP_TERMS.iter().enumerate() {
        println!("{}", format!("{}. {}", index + 1, section.title).bold());
        for clause in section.clauses {
            println!("  • {}", clause);
        }
        println!();
    }
    Ok(())
}
