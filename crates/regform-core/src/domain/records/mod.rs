//! Typed form records
//!
//! Each variant gets a record struct, a field-identifier enum and an edit enum
//! generated from one field table, so the three can never drift apart.

/// Generates `$record`, `$field` and `$edit` from a field table.
///
/// Each row is `rust_field: Type, kind => Variant = "submittedName";` where
/// `kind` names the helper in [`view`] and [`answer`] handling that value kind.
macro_rules! registration_record {
    (
        $(#[$meta:meta])*
        $record:ident, $field_ty:ident, $edit_ty:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty, $kind:ident => $variant:ident = $name:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $record {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        /// Field identifiers, in record order
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $field_ty {
            $( #[serde(rename = $name)] $variant, )*
        }

        impl $field_ty {
            pub const ALL: &'static [$field_ty] = &[$( $field_ty::$variant, )*];
        }

        impl $crate::domain::schema::FieldId for $field_ty {
            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        impl std::fmt::Display for $field_ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::schema::FieldId::name(*self))
            }
        }

        /// One edit per field, carrying a value of that field's kind
        #[derive(Clone, Debug, PartialEq)]
        pub enum $edit_ty {
            $( $variant($ty), )*
        }

        impl $crate::domain::schema::FieldEdit for $edit_ty {
            type Field = $field_ty;

            fn field(&self) -> $field_ty {
                match self {
                    $( Self::$variant(_) => $field_ty::$variant, )*
                }
            }
        }

        impl $record {
            fn view(&self, field: $field_ty) -> $crate::domain::schema::FieldValue<'_> {
                match field {
                    $( $field_ty::$variant => $crate::domain::records::view::$kind(&self.$field), )*
                }
            }

            fn write(&mut self, edit: $edit_ty) -> $field_ty {
                match edit {
                    $( $edit_ty::$variant(value) => {
                        self.$field = value;
                        $field_ty::$variant
                    } )*
                }
            }

            fn parse(
                field: $field_ty,
                answer: &$crate::domain::value_objects::Answer,
            ) -> $crate::error::Result<$edit_ty> {
                match field {
                    $( $field_ty::$variant => Ok($edit_ty::$variant(
                        $crate::domain::records::answer::$kind($name, answer)?,
                    )), )*
                }
            }
        }
    };
}

pub mod distributor;
pub mod wholesale;

pub use distributor::{DistributorEdit, DistributorField, DistributorRecord};
pub use wholesale::{WholesaleEdit, WholesaleField, WholesaleRecord};

/// Section titles shared by both variants
pub mod sections {
    pub const COMPANY: &str = "Company Information";
    pub const ADDRESS: &str = "Business Address";
    pub const CONTACT: &str = "Contact Information";
    pub const BUSINESS: &str = "Business Information";
    pub const LEGAL: &str = "Legal & Tax Information";
    pub const PAYMENT_SHIPPING: &str = "Payment & Shipping";
    pub const AGREEMENT: &str = "Agreement";
}

/// Record field → [`FieldValue`](crate::domain::schema::FieldValue)
pub(crate) mod view {
    use std::collections::BTreeSet;

    use crate::domain::schema::FieldValue;
    use crate::domain::value_objects::{Choice, FileRef, SignatureArtifact};

    pub fn text(value: &str) -> FieldValue<'_> {
        FieldValue::Text(value)
    }

    pub fn date(value: &str) -> FieldValue<'_> {
        FieldValue::Text(value)
    }

    pub fn flag(value: &bool) -> FieldValue<'static> {
        FieldValue::Flag(*value)
    }

    pub fn choice<T: Choice>(value: &Option<T>) -> FieldValue<'static> {
        FieldValue::Choice(value.map(Choice::label))
    }

    pub fn choices<T: Choice>(value: &BTreeSet<T>) -> FieldValue<'static> {
        FieldValue::Choices(value.iter().map(|c| c.label()).collect())
    }

    pub fn file(value: &Option<FileRef>) -> FieldValue<'_> {
        FieldValue::File(value.as_ref())
    }

    pub fn signature(value: &Option<SignatureArtifact>) -> FieldValue<'_> {
        FieldValue::Signature(value.as_ref())
    }
}

/// [`Answer`](crate::domain::value_objects::Answer) → record field value
pub(crate) mod answer {
    use std::collections::BTreeSet;

    use crate::domain::value_objects::{Answer, Choice, FileRef, SignatureArtifact};
    use crate::error::{FormError, Result};

    fn mismatch(field: &'static str, expected: &'static str) -> FormError {
        FormError::KindMismatch { field, expected }
    }

    fn pick<T: Choice>(field: &'static str, label: &str) -> Result<T> {
        T::from_label(label).ok_or_else(|| FormError::InvalidChoice {
            field,
            value: label.to_string(),
        })
    }

    pub fn text(field: &'static str, answer: &Answer) -> Result<String> {
        match answer {
            Answer::Text(text) => Ok(text.clone()),
            _ => Err(mismatch(field, "text")),
        }
    }

    pub fn date(field: &'static str, answer: &Answer) -> Result<String> {
        text(field, answer)
    }

    pub fn flag(field: &'static str, answer: &Answer) -> Result<bool> {
        match answer {
            Answer::Flag(flag) => Ok(*flag),
            Answer::Text(text) => match text.as_str() {
                "true" | "yes" => Ok(true),
                "false" | "no" | "" => Ok(false),
                _ => Err(mismatch(field, "a boolean")),
            },
            Answer::List(_) => Err(mismatch(field, "a boolean")),
        }
    }

    pub fn choice<T: Choice>(field: &'static str, answer: &Answer) -> Result<Option<T>> {
        match answer {
            Answer::Text(text) if text.is_empty() => Ok(None),
            Answer::Text(text) => pick(field, text).map(Some),
            _ => Err(mismatch(field, "one option")),
        }
    }

    pub fn choices<T: Choice>(field: &'static str, answer: &Answer) -> Result<BTreeSet<T>> {
        match answer {
            Answer::List(items) => items.iter().map(|item| pick(field, item)).collect(),
            Answer::Text(text) if text.is_empty() => Ok(BTreeSet::new()),
            Answer::Text(text) => pick(field, text).map(|c| BTreeSet::from([c])),
            Answer::Flag(_) => Err(mismatch(field, "a list of options")),
        }
    }

    /// Keeps the final path component as the file name
    pub fn file(field: &'static str, answer: &Answer) -> Result<Option<FileRef>> {
        match answer {
            Answer::Text(path) if path.is_empty() => Ok(None),
            Answer::Text(path) => {
                let name = path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path);
                Ok(Some(FileRef::named(name)))
            }
            _ => Err(mismatch(field, "a file path")),
        }
    }

    pub fn signature(field: &'static str, _answer: &Answer) -> Result<Option<SignatureArtifact>> {
        Err(FormError::NotAnswerable(field))
    }
}

#[cfg(test)]
mod tests {
    use super::answer;
    use crate::domain::value_objects::{Answer, MarketingSupport, YesNo};
    use crate::error::FormError;

    #[test]
    fn test_choice_answer_rejects_unknown_option() {
        let result = answer::choice::<YesNo>("hasLoadingDock", &Answer::from("Maybe"));
        assert!(matches!(result, Err(FormError::InvalidChoice { field: "hasLoadingDock", .. })));
    }

    #[test]
    fn test_empty_choice_answer_is_unset() {
        assert_eq!(answer::choice::<YesNo>("salesTeam", &Answer::from("")).unwrap(), None);
    }

    #[test]
    fn test_choices_accept_list_with_commas_in_labels() {
        let set = answer::choices::<MarketingSupport>(
            "marketingSupportNeeded",
            &Answer::List(vec!["Digital Assets (images, videos, brochures)".into()]),
        )
        .unwrap();
        assert!(set.contains(&MarketingSupport::DigitalAssets));
    }

    #[test]
    fn test_file_answer_keeps_name_only() {
        let file = answer::file("resaleCertificateFile", &Answer::from("/tmp/docs/cert.pdf")).unwrap();
        assert_eq!(file.unwrap().file_name(), "cert.pdf");
    }

    #[test]
    fn test_flag_answer_shapes() {
        assert!(answer::flag("agreementConfirmed", &Answer::Flag(true)).unwrap());
        assert!(answer::flag("agreementConfirmed", &Answer::from("yes")).unwrap());
        assert!(answer::flag("agreementConfirmed", &Answer::from("sure")).is_err());
    }

    #[test]
    fn test_signature_is_not_answerable() {
        let result = answer::signature("signature", &Answer::from("data:"));
        assert!(matches!(result, Err(FormError::NotAnswerable("signature"))));
    }
}
