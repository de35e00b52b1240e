//! Environment variable expansion for merged settings.

use serde_yaml::{Mapping, Value};

/// How `$VAR` references in merged settings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvExpansion {
    /// Leave every value exactly as parsed.
    Disabled,
    /// Expand `$VAR` and `${VAR}` in top-level string values.
    ///
    /// Unknown variables are left untouched. Nested values are not visited.
    /// Without the `env-expand` feature this behaves like [`Disabled`](Self::Disabled).
    #[default]
    TopLevelStrings,
}

impl EnvExpansion {
    /// Apply this policy to a merged mapping, reading the process environment.
    pub(crate) fn apply(self, values: &mut Mapping) {
        self.apply_with(values, |name| std::env::var(name).ok());
    }

    /// Apply this policy, resolving variable names through `lookup`.
    pub(crate) fn apply_with<F>(self, values: &mut Mapping, mut lookup: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        if self == Self::Disabled {
            return;
        }

        for (key, value) in values.iter_mut() {
            if let Value::String(raw) = value {
                if let Some(expanded) = expand_str(raw, &mut lookup) {
                    tracing::trace!(key = ?key, "expanded environment references");
                    *raw = expanded;
                }
            }
        }
    }
}

/// Returns the expanded string, or `None` when nothing changed.
#[cfg(feature = "env-expand")]
fn expand_str<F>(raw: &str, lookup: &mut F) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let expanded = shellexpand::env_with_context_no_errors(raw, |name| lookup(name));
    if expanded == raw {
        None
    } else {
        Some(expanded.into_owned())
    }
}

#[cfg(not(feature = "env-expand"))]
fn expand_str<F>(_raw: &str, _lookup: &mut F) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    None
}
