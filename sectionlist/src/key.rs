use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::CellKind;

/// Separator between the kind discriminant and the caller's base key.
pub const TOKEN_DELIMITER: char = ':';

/// Stable identity of a cell within one flattened snapshot.
///
/// Tokens are `"<kind><TOKEN_DELIMITER><base key>"`. Since no kind name contains the
/// delimiter, two tokens can only collide when both the kind and the base key match.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The kind prefix this token was built with.
    pub fn kind(&self) -> Option<CellKind> {
        let (prefix, _) = self.0.split_once(TOKEN_DELIMITER)?;
        CellKind::from_str_opt(prefix)
    }

    /// The caller-supplied base key (everything after the first delimiter).
    pub fn base_key(&self) -> &str {
        self.0
            .split_once(TOKEN_DELIMITER)
            .map(|(_, key)| key)
            .unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for IdentityToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the identity token for a cell of `kind` whose owner has `base_key`.
///
/// Pure and deterministic. Uniqueness across a snapshot relies on the caller's keys being
/// unique within their extraction scope; duplicates are not detected here (see
/// [`crate::FlatSequence::validate`]).
pub fn make_identity_token(kind: CellKind, base_key: &str) -> IdentityToken {
    let prefix = kind.as_str();
    let mut token = String::with_capacity(prefix.len() + 1 + base_key.len());
    token.push_str(prefix);
    token.push(TOKEN_DELIMITER);
    token.push_str(base_key);
    IdentityToken(token)
}

#[cfg(feature = "std")]
pub(crate) type TokenMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type TokenMap<K, V> = BTreeMap<K, V>;

pub(crate) type ReleaseMap = TokenMap<IdentityToken, u64>;
