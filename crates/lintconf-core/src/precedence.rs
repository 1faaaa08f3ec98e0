//! Layered lookup with a fixed precedence order.

/// Resolves a value from an ordered list of layers.
///
/// Layers are consulted in the order they are added; the first one that
/// yields a value wins and later layers are never evaluated.
///
/// ```
/// use lintconf_core::Precedence;
///
/// let value = Precedence::new()
///     .then(|| None)
///     .then(|| Some(2))
///     .then(|| Some(3))
///     .or(0);
/// assert_eq!(value, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Precedence<T> {
    resolved: Option<T>,
}

impl<T> Precedence<T> {
    /// Starts an empty lookup.
    pub fn new() -> Self {
        Self { resolved: None }
    }

    /// Adds the next layer.
    pub fn then(self, layer: impl FnOnce() -> Option<T>) -> Self {
        match self.resolved {
            Some(_) => self,
            None => Self { resolved: layer() },
        }
    }

    /// Returns the value of the first matching layer, if any.
    pub fn resolved(self) -> Option<T> {
        self.resolved
    }

    /// Returns the value of the first matching layer, or `fallback`.
    pub fn or(self, fallback: T) -> T {
        self.resolved.unwrap_or(fallback)
    }
}

impl<T> Default for Precedence<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn empty_lookup_uses_fallback() {
        assert_eq!(Precedence::<u8>::new().or(7), 7);
        assert_eq!(Precedence::<u8>::new().then(|| None).resolved(), None);
    }

    #[test]
    fn first_layer_wins() {
        let value = Precedence::new().then(|| Some("a")).then(|| Some("b")).or("c");
        assert_eq!(value, "a");
    }

    #[test]
    fn later_layers_are_not_evaluated() {
        let calls = Cell::new(0);
        let _ = Precedence::new()
            .then(|| Some(1))
            .then(|| {
                calls.set(calls.get() + 1);
                Some(2)
            })
            .or(0);
        assert_eq!(calls.get(), 0);
    }
}
