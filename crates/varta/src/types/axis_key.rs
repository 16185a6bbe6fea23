use serde::{Deserialize, Serialize};

/// Key for the exact-singular branch of a number axis.
///
/// Singular phrasing is common enough to deserve a dedicated branch; every
/// other count falls through to [`WILDCARD`].
pub const EXACTLY_ONE: &str = "_1";

/// Catch-all key present at every level of a variation table.
pub const WILDCARD: &str = "*";

/// A key selecting one branch at a single level of a variation table.
///
/// Keys can be the wildcard `"*"`, the exact-singular `"_1"`, an enum member
/// identifier, or a stringified gender or plural-category code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisKey(String);

impl AxisKey {
    /// Create a new axis key from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The wildcard (`"*"`) key.
    pub fn wildcard() -> Self {
        Self(WILDCARD.to_string())
    }

    /// The exact-singular (`"_1"`) key.
    pub fn exactly_one() -> Self {
        Self(EXACTLY_ONE.to_string())
    }

    /// Get the axis key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the catch-all key.
    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }
}

impl std::ops::Deref for AxisKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for AxisKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AxisKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for AxisKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
