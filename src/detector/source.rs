//! Sources of candidate language preferences.

/// Supplies the runtime's language preferences, most preferred first.
///
/// Entries may be `None` when a preference slot is not reported. A source is
/// queried on every detection, so implementations should reflect the current
/// state of the runtime.
pub trait LanguageSource {
    /// Return the current candidate list.
    fn languages(&self) -> Vec<Option<String>>;
}

/// A fixed candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLanguageSource(pub Vec<Option<String>>);

impl StaticLanguageSource {
    /// Create a source where every entry is present.
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(languages.into_iter().map(|l| Some(l.into())).collect())
    }
}

impl LanguageSource for StaticLanguageSource {
    fn languages(&self) -> Vec<Option<String>> {
        self.0.clone()
    }
}

/// Environment variables consulted after `LANGUAGE`, in order.
pub const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads language preferences from POSIX locale environment variables.
///
/// Yields the colon-separated entries of `LANGUAGE`, then one slot each for
/// `LC_ALL`, `LC_MESSAGES` and `LANG`. Unset, empty, `C` and `POSIX`
/// values produce `None`.
pub struct EnvLanguageSource<F = fn(&str) -> Option<String>> {
    lookup: F,
}

impl EnvLanguageSource {
    /// Create a source backed by the process environment.
    pub fn new() -> Self {
        Self { lookup: env_var }
    }
}

impl Default for EnvLanguageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EnvLanguageSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Create a source backed by a custom variable lookup.
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).and_then(|value| posix_to_tag(&value))
    }
}

impl<F> LanguageSource for EnvLanguageSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn languages(&self) -> Vec<Option<String>> {
        let mut languages: Vec<Option<String>> = (self.lookup)("LANGUAGE")
            .map(|list| list.split(':').map(posix_to_tag).collect())
            .unwrap_or_default();

        languages.extend(LOCALE_VARS.iter().map(|key| self.var(key)));
        languages
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl<F> std::fmt::Debug for EnvLanguageSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvLanguageSource").finish_non_exhaustive()
    }
}

/// Convert a POSIX locale value to tag form.
///
/// Examples:
/// - "en_US.UTF-8" -> "en-US"
/// - "de_DE@euro" -> "de-DE"
/// - "C" -> `None`
pub fn posix_to_tag(value: &str) -> Option<String> {
    // Remove encoding and modifier suffixes
    let locale = value.split(['.', '@']).next().unwrap_or(value).trim();

    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }

    Some(locale.replace('_', "-"))
}
