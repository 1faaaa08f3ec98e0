//! Option vocabularies: typed enums, value providers and flag sets.
//!
//! Token matching is canonicalized: every `-` is removed and the comparison
//! ignores ASCII case, so `creation-time`, `CreationTime` and
//! `creationtime` are the same token.

use serde::Serialize;
use std::collections::BTreeSet;

/// A closed, fieldless enum usable as an option value.
pub trait OptionEnum: Copy + Eq + 'static {
    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// Declared member name (e.g. `CreationTime`).
    fn name(self) -> &'static str;

    /// Matches a token against the declared member names.
    fn from_name(token: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| canonical_eq(v.name(), token))
    }

    /// Sorted kebab-case member names, comma-separated.
    #[must_use]
    fn default_help_text() -> String {
        join_sorted(Self::VARIANTS.iter().map(|v| to_kebab_case(v.name())))
    }
}

/// Strategy that maps tokens to enum values.
pub trait ValueProvider<T> {
    /// Returns the value for a token, or `None` if the token is not accepted.
    fn try_parse(&self, token: &str) -> Option<T>;

    /// Sorted, comma-separated list of accepted literal tokens.
    fn help_text(&self) -> String;
}

/// Which vocabulary to match a token against.
pub enum Provider<'a, T> {
    /// Only the provider decides; member names are not consulted.
    With(&'a dyn ValueProvider<T>),
    /// Match against the declared member names.
    NoProvider,
}

impl<T> Clone for Provider<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Provider<'_, T> {}

impl<T: OptionEnum> Provider<'_, T> {
    /// Parses a token.
    #[must_use]
    pub fn parse(self, token: &str) -> Option<T> {
        match self {
            Self::With(provider) => provider.try_parse(token),
            Self::NoProvider => T::from_name(token),
        }
    }

    /// Help text listing accepted tokens.
    #[must_use]
    pub fn help_text(self) -> String {
        match self {
            Self::With(provider) => provider.help_text(),
            Self::NoProvider => T::default_help_text(),
        }
    }
}

/// A bare-flag literal with an optional short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagValue<T> {
    /// Literal token, as shown in help.
    pub value: &'static str,
    /// Short alias.
    pub short: Option<&'static str>,
    /// Value the token stands for.
    pub item: T,
}

impl<T> FlagValue<T> {
    /// Creates a flag with a short alias.
    pub const fn new(value: &'static str, short: &'static str, item: T) -> Self {
        Self {
            value,
            short: Some(short),
            item,
        }
    }

    /// Creates a flag without a short alias.
    pub const fn long(value: &'static str, item: T) -> Self {
        Self {
            value,
            short: None,
            item,
        }
    }

    /// Returns `true` if the token names this flag or its alias.
    #[must_use]
    pub fn is_value_or_short_value(&self, token: &str) -> bool {
        canonical_eq(self.value, token) || self.short.is_some_and(|s| canonical_eq(s, token))
    }
}

/// A `key=<VALUE>` sub-option with an optional short key.
///
/// Keys are matched exactly (no canonicalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOption {
    /// Primary key.
    pub key: &'static str,
    /// Short key.
    pub short: Option<&'static str>,
    /// Placeholder for the value in help text (e.g. `<NUM>`).
    pub placeholder: &'static str,
}

impl KeyOption {
    /// Creates a key with a short alias.
    #[must_use]
    pub const fn new(key: &'static str, short: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            short: Some(short),
            placeholder,
        }
    }

    /// Returns `true` if `key` is this key or its short form.
    #[must_use]
    pub fn is_key_or_short_key(&self, key: &str) -> bool {
        self.key == key || self.short == Some(key)
    }

    /// Help form, e.g. `max-count=<NUM>`.
    #[must_use]
    pub fn help(&self) -> String {
        format!("{}={}", self.key, self.placeholder)
    }
}

/// A static vocabulary of bare flags, keyed sub-options and positional
/// placeholders.
#[derive(Debug, Clone, Copy)]
pub struct OptionValueProvider<T: 'static> {
    flags: &'static [FlagValue<T>],
    keys: &'static [KeyOption],
    positional: &'static [&'static str],
}

impl<T> OptionValueProvider<T> {
    /// Creates a provider.
    #[must_use]
    pub const fn new(
        flags: &'static [FlagValue<T>],
        keys: &'static [KeyOption],
        positional: &'static [&'static str],
    ) -> Self {
        Self {
            flags,
            keys,
            positional,
        }
    }

    /// Bare flags of this vocabulary.
    #[must_use]
    pub fn flags(&self) -> &'static [FlagValue<T>] {
        self.flags
    }

    /// Keyed sub-options of this vocabulary.
    #[must_use]
    pub fn keys(&self) -> &'static [KeyOption] {
        self.keys
    }
}

impl<T: Copy> ValueProvider<T> for OptionValueProvider<T> {
    fn try_parse(&self, token: &str) -> Option<T> {
        self.flags
            .iter()
            .find(|f| f.is_value_or_short_value(token))
            .map(|f| f.item)
    }

    fn help_text(&self) -> String {
        join_sorted(
            self.positional
                .iter()
                .map(|p| (*p).to_string())
                .chain(self.flags.iter().map(|f| f.value.to_string()))
                .chain(self.keys.iter().map(KeyOption::help)),
        )
    }
}

/// Insertion-ordered set over a closed enum.
///
/// Replaces bitmask aggregation: [`FlagSet::insert`] and [`FlagSet::union`]
/// never duplicate a member, iteration follows first insertion, and equality
/// ignores order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FlagSet<T> {
    items: Vec<T>,
}

impl<T: Copy + Eq> FlagSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a member; returns `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Adds every member of `other` not yet present.
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        for item in other.iter() {
            self.insert(item);
        }
        self
    }

    /// Returns `true` if the member is present.
    #[must_use]
    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.items.iter().copied()
    }
}

impl<T: Copy + Eq> Default for FlagSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq> PartialEq for FlagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Copy + Eq> Eq for FlagSet<T> {}

impl<T: Copy + Eq> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T: Copy + Eq> Extend<T> for FlagSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// Removes every `-` from a token.
#[must_use]
pub fn canonicalize(token: &str) -> String {
    token.chars().filter(|c| *c != '-').collect()
}

fn canonical_eq(literal: &str, token: &str) -> bool {
    canonicalize(literal).eq_ignore_ascii_case(&canonicalize(token))
}

fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn join_sorted(items: impl Iterator<Item = String>) -> String {
    items.collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>().join(", ")
}
