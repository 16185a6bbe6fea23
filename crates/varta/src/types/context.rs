use bon::Builder;

use super::Gender;

/// The runtime's current locale and default gender, supplied by the
/// embedding application.
///
/// The context is read on every resolution call: it may change over the
/// application's lifetime (locale switching), and resolved strings must
/// never be cached across a context change.
///
/// # Example
///
/// ```
/// use varta::{Gender, ViewerContext};
///
/// let viewer = ViewerContext::builder()
///     .locale("tr_TR")
///     .gender(Gender::Female)
///     .build();
///
/// assert_eq!(viewer.locale, "tr_TR");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ViewerContext {
    /// Locale tag, e.g. `"en_US"` or `"tr_TR"`.
    #[builder(default = "en_US".to_string())]
    pub locale: String,

    /// Gender used for viewer-dependent variations.
    #[builder(default)]
    pub gender: Gender,
}

impl Default for ViewerContext {
    fn default() -> Self {
        ViewerContext::builder().build()
    }
}

impl ViewerContext {
    /// Context for a locale with an unknown viewer gender.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        ViewerContext::builder().locale(locale.into()).build()
    }
}
