use std::time::Duration;

use thiserror::Error;

/// Errors raised by the slider when a caller breaks one of its preconditions.
///
/// Navigation requests made during the transition lock are not errors; they
/// are reported as [`crate::controller::Navigation::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("a slider needs at least one slide")]
    EmptySlides,
    #[error("autoplay interval must be at least 1ms (got {interval:?})")]
    InvalidInterval { interval: Duration },
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::SliderError;
    use std::time::Duration;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SliderError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "slide index 7 is out of range for 4 slides"
        );

        let err = SliderError::InvalidInterval {
            interval: Duration::ZERO,
        };
        assert!(err.to_string().contains("0ns"));
    }
}
