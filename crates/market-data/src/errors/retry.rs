/// Classification for retry policy.
///
/// Every retry in this system is operator-initiated (the user repeats the
/// action); the class describes what that repeat is likely to achieve.
///
/// | Class | Retry worthwhile? | Wait first? |
/// |-------|-------------------|-------------|
/// | `Never` | No | - |
/// | `WithBackoff` | Yes | Yes |
/// | `Retryable` | Yes | No |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The source answered with something unusable; repeating returns the same payload.
    Never,

    /// Transient pressure (rate limit, timeout). Retry after a pause.
    WithBackoff,

    /// The source or the network failed outright. Retry whenever the operator asks.
    Retryable,
}

impl RetryClass {
    /// Whether a manual retry can be expected to help.
    pub fn is_retryable(self) -> bool {
        !matches!(self, RetryClass::Never)
    }
}
