//! Scanner configuration for resource limits and tracing.
//!
//! This module provides [`ParseConfig`] for controlling scanner behavior,
//! including a nesting limit to prevent stack overflow on hostile input.
//!
//! # Recursion Limits
//!
//! Every speculative invocation ([`Scanner::parse`](crate::Scanner::parse),
//! [`peek`](crate::Scanner::peek), [`skip`](crate::Scanner::skip)) enters one
//! nesting level. Recursive grammars nest several levels per construct, so the
//! default limit is larger than a plain structural depth would need.
//!
//! # Example
//!
//! ```ignore
//! use tinyparsec_core::config::ParseConfig;
//!
//! // Use default limits (nesting depth: 512)
//! let config = ParseConfig::default();
//!
//! // Allow deeper nesting and show more input in trace lines
//! let config = ParseConfig::new()
//!     .with_max_recursion_depth(2048)
//!     .with_trace_preview(64);
//! ```

use crate::Error;

/// Configuration for scanner behavior and resource limits.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `max_recursion_depth` | 512 | Several invocation levels per nested construct |
/// | `trace_preview` | 24 | Keeps trace lines on one terminal line |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum allowed nesting of speculative invocations.
    ///
    /// Exceeding it fails the offending invocation with
    /// [`Error::RecursionLimitExceeded`].
    ///
    /// Default: 512
    pub max_recursion_depth: usize,

    /// Number of code points of remaining input shown by primitive trace lines.
    ///
    /// Default: 24
    pub trace_preview: usize,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_recursion_depth: 512,
        trace_preview: 24,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum nesting depth. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets how many code points of remaining input trace lines show.
    #[inline]
    pub const fn with_trace_preview(mut self, chars: usize) -> Self {
        self.trace_preview = chars;
        self
    }

    /// Disables the recursion limit.
    ///
    /// # Warning
    ///
    /// Only use this when parsing trusted input! Untrusted deeply-nested
    /// input can overflow the stack.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }
}

/// Tracks nesting depth during parsing.
///
/// The scanner enters the guard around every sub-invocation; the resulting
/// depth also drives trace indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionGuard {
    depth: usize,
}

impl RecursionGuard {
    /// Creates a new guard with depth 0.
    #[inline]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a nested context, incrementing depth.
    ///
    /// Returns `Err(Error::RecursionLimitExceeded)` if the new depth would
    /// exceed `limit`. The depth is incremented either way, so every `enter`
    /// must be paired with an `exit`.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), Error> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(Error::RecursionLimitExceeded {
                depth: self.depth,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Exit a nested context. Saturates at zero.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_defaults() {
        let config = ParseConfig::default();
        assert_eq!(config.max_recursion_depth, 512);
        assert_eq!(config.trace_preview, 24);
    }

    #[test]
    fn test_parse_config_builder() {
        let config = ParseConfig::new()
            .with_max_recursion_depth(256)
            .with_trace_preview(8);

        assert_eq!(config.max_recursion_depth, 256);
        assert_eq!(config.trace_preview, 8);
    }

    #[test]
    fn test_parse_config_disable_recursion() {
        let config = ParseConfig::new().disable_recursion_limit();
        assert_eq!(config.max_recursion_depth, usize::MAX);
    }

    #[test]
    fn test_recursion_guard_basic() {
        let mut guard = RecursionGuard::new();
        assert_eq!(guard.depth(), 0);

        guard.enter(8).unwrap();
        guard.enter(8).unwrap();
        assert_eq!(guard.depth(), 2);

        guard.exit();
        assert_eq!(guard.depth(), 1);
    }

    #[test]
    fn test_recursion_guard_limit_exceeded() {
        let mut guard = RecursionGuard::new();
        for _ in 0..3 {
            guard.enter(3).unwrap();
        }

        let result = guard.enter(3);
        assert!(matches!(
            result,
            Err(Error::RecursionLimitExceeded { depth: 4, limit: 3 })
        ));
    }

    #[test]
    fn test_recursion_guard_exit_saturates() {
        let mut guard = RecursionGuard::new();
        guard.exit();
        guard.exit();
        assert_eq!(guard.depth(), 0);
    }
}
