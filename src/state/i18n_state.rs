//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between English and Korean
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_locales() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::KoKR);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}
