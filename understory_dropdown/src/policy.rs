// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veto policy returned by lifecycle hooks.

/// Answer from a hook consulted before a default action.
///
/// Hooks can return anything convertible into a `Policy`:
/// - `()` and `true` allow the action,
/// - `false` denies it,
/// - `Option<bool>` denies only on `Some(false)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Let the default action happen.
    #[default]
    Allow,
    /// Suppress the default action.
    Deny,
}

impl Policy {
    /// Returns `true` for [`Policy::Allow`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Policy {
    fn from(allow: bool) -> Self {
        if allow { Self::Allow } else { Self::Deny }
    }
}

impl From<()> for Policy {
    fn from((): ()) -> Self {
        Self::Allow
    }
}

impl From<Option<bool>> for Policy {
    fn from(answer: Option<bool>) -> Self {
        match answer {
            Some(false) => Self::Deny,
            Some(true) | None => Self::Allow,
        }
    }
}

/// Consult an optional hook; an absent hook allows.
pub(crate) fn consult<F>(hook: Option<&mut F>, ask: impl FnOnce(&mut F) -> Policy) -> Policy
where
    F: ?Sized,
{
    hook.map_or(Policy::Allow, ask)
}
