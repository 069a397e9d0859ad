//! Enumerated option sets for single- and multi-select fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// An option of an enumerated field, identified by its display label
pub trait Choice: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Display label, which is also the submitted value
    fn label(self) -> &'static str;

    /// Parse an exact label
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Labels in display order
            pub const LABELS: &'static [&'static str] = &[$( $label ),+];
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Yes/No radio pair
    YesNo { Yes => "Yes", No => "No" }
}

choice_enum! {
    WholesaleBusinessType {
        RetailStore => "Retail Store",
        OnlineStore => "Online Store",
        Distributor => "Distributor",
        HealthPractitioner => "Health Practitioner",
        Other => "Other",
    }
}

choice_enum! {
    DistributorBusinessType {
        Distributor => "Distributor",
        SubDistributor => "Sub-Distributor",
        RetailChainDistributor => "Retail Chain Distributor",
        HealthPractitionerDistributor => "Health Practitioner Distributor",
        Other => "Other",
    }
}

choice_enum! {
    PaymentMethod {
        CreditCard => "Credit Card",
        BankTransfer => "ACH / Bank Transfer",
        PayPal => "PayPal",
        Other => "Other",
    }
}

choice_enum! {
    WholesaleShipping {
        Ups => "UPS",
        FedEx => "FedEx",
        Usps => "USPS",
        Freight => "Freight",
        Other => "Other",
    }
}

choice_enum! {
    DistributorShipping {
        Ups => "UPS",
        FedEx => "FedEx",
        Freight => "Freight",
        Other => "Other",
    }
}

choice_enum! {
    /// Monthly Auto-Ship enrollment answer
    AutoShip {
        Enroll => "Yes, sign me up for Auto-Ship.",
        Decline => "No",
    }
}

choice_enum! {
    MarketingSupport {
        ProductSamples => "Product Samples",
        SalesTraining => "Training for Sales Staff",
        DigitalAssets => "Digital Assets (images, videos, brochures)",
        JointAdvertising => "Joint Advertising Campaigns",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip_is_exact() {
        assert_eq!(PaymentMethod::from_label("ACH / Bank Transfer"), Some(PaymentMethod::BankTransfer));
        assert_eq!(PaymentMethod::from_label("ach / bank transfer"), None);
        assert_eq!(AutoShip::Enroll.label(), "Yes, sign me up for Auto-Ship.");
    }

    #[test]
    fn test_option_sets_differ_per_variant() {
        assert!(WholesaleShipping::LABELS.contains(&"USPS"));
        assert!(!DistributorShipping::LABELS.contains(&"USPS"));
        assert_eq!(DistributorBusinessType::ALL.len(), 5);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&MarketingSupport::DigitalAssets).unwrap();
        assert_eq!(json, "\"Digital Assets (images, videos, brochures)\"");
        let back: YesNo = serde_json::from_str("\"No\"").unwrap();
        assert_eq!(back, YesNo::No);
    }
}
