//! Routes and form switching

use crate::domain::schema::FormVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Forms,
    TermsAndConditions,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Self::Forms),
            "/terms-and-conditions" => Some(Self::TermsAndConditions),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Forms => "/",
            Self::TermsAndConditions => "/terms-and-conditions",
        }
    }

    /// Where "Back to Form" leads
    pub fn back_to_forms(&self) -> Route {
        Route::Forms
    }
}

/// Which variant the forms view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormSwitcher {
    current: FormVariant,
}

impl FormSwitcher {
    pub fn current(&self) -> FormVariant {
        self.current
    }

    pub fn switch_to(&mut self, variant: FormVariant) {
        self.current = variant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_resolve_from_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Forms));
        assert_eq!(Route::from_path("/terms-and-conditions"), Some(Route::TermsAndConditions));
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::TermsAndConditions.back_to_forms().path(), "/");
    }

    #[test]
    fn test_switcher_defaults_to_wholesale() {
        let mut switcher = FormSwitcher::default();
        assert_eq!(switcher.current(), FormVariant::Wholesale);
        switcher.switch_to(FormVariant::Distributor);
        assert_eq!(switcher.current(), FormVariant::Distributor);
    }
}
