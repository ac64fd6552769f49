use js_sys::Array;
use kotoba_core::LocaleSource;
use web_sys::Navigator;

/// Reads the user locale from `navigator.language`, falling back to the
/// first entry of `navigator.languages`.
pub struct NavigatorLocale {
    navigator: Navigator,
}

impl NavigatorLocale {
    /// Locale source over `window.navigator`.
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl LocaleSource for NavigatorLocale {
    fn reported_locale(&self) -> Option<String> {
        self.navigator.language().filter(|l| !l.is_empty()).or_else(|| {
            let languages: Array = self.navigator.languages();
            languages.get(0).as_string()
        })
    }
}
