//! Monthly Auto-Ship Program terms

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TermsSection {
    pub title: &'static str,
    pub clauses: &'static [&'static str],
}

pub const TERMS_TITLE: &str = "Terms & Conditions – Monthly Auto-Ship Program";

pub static AUTO_SHIP_TERMS: [TermsSection; 9] = [
    TermsSection {
        title: "Enrollment",
        clauses: &[
            "By opting into the Auto-Ship program, you agree to receive recurring monthly shipments of the selected product(s).",
            "Enrollment occurs when you select \"Yes\" on the application form or through any other sign-up method provided.",
        ],
    },
    TermsSection {
        title: "Billing & Payments",
        clauses: &[
            "Your preferred payment method will be automatically charged each month on or around your renewal date.",
            "Prices are subject to change with prior notice.",
            "It is your responsibility to ensure payment details are accurate and up to date.",
        ],
    },
    TermsSection {
        title: "Shipping & Delivery",
        clauses: &[
            "Products will be shipped monthly to the address provided at the time of enrollment.",
            "Delivery times may vary based on location, shipping provider, and availability.",
            "We are not responsible for delays caused by carriers, weather, or external circumstances beyond our control.",
        ],
    },
    TermsSection {
        title: "Cancellations & Modifications",
        clauses: &[
            "You may cancel or modify your Auto-Ship subscription at any time through the upcoming Auto-Ship portal or by contacting customer support.",
            "Cancellations must be made at least X days before the next scheduled billing date to avoid being charged for that cycle.",
            "Once an order has been processed, it cannot be canceled or refunded.",
        ],
    },
    TermsSection {
        title: "Returns & Refunds",
        clauses: &[
            "Auto-Ship orders are generally non-refundable.",
            "Damaged or defective items may be eligible for replacement if reported within X days of delivery.",
            "Return shipping costs may apply unless otherwise specified.",
        ],
    },
    TermsSection {
        title: "Account Responsibilities",
        clauses: &[
            "You are responsible for maintaining accurate shipping, billing, and contact information in your account.",
            "Failure to update your details may result in missed shipments or failed payments.",
        ],
    },
    TermsSection {
        title: "Program Changes & Termination",
        clauses: &[
            "We reserve the right to update, pause, or discontinue the Auto-Ship program at any time with reasonable prior notice.",
            "Any changes to terms will be communicated via email or posted on our website.",
        ],
    },
    TermsSection {
        title: "Legal & Liability",
        clauses: &[
            "By participating, you acknowledge that the company is not liable for delays, lost shipments, or any indirect damages related to your subscription.",
            "All disputes will be governed by the laws of [Insert Jurisdiction].",
        ],
    },
    TermsSection {
        title: "Contact Information",
        clauses: &[
            "For questions, modifications, or cancellations, please contact our support team at: [Insert Contact Details].",
        ],
    },
];
