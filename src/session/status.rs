//! Session status state machine
//!
//! State IDs are designed for PostgreSQL storage as SMALLINT.
//! A session starts Pending (0) and moves to exactly one terminal state.

use std::fmt;

/// USSD session status
///
/// Terminal states: everything except Pending. The transition
/// Pending -> terminal happens exactly once, enforced by a
/// compare-and-swap on the stored state id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum SessionStatus {
    /// Initial state - session row created on the first callback round
    Pending = 0,

    /// Terminal: aggregator reported a completed session
    Success = 10,

    /// Terminal: end-user abandoned the session mid-menu
    Incomplete = 20,

    /// Terminal: aggregator-side failure
    Failed = -10,

    /// Terminal: session timed out on the telecom side
    Timeout = -20,

    /// Terminal: end-user cancelled the session
    Cancelled = -30,
}

impl SessionStatus {
    /// Check if this is a terminal state (no more transitions possible)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Pending)
    }

    /// Get the numeric state ID for PostgreSQL storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from PostgreSQL state ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(SessionStatus::Pending),
            10 => Some(SessionStatus::Success),
            20 => Some(SessionStatus::Incomplete),
            -10 => Some(SessionStatus::Failed),
            -20 => Some(SessionStatus::Timeout),
            -30 => Some(SessionStatus::Cancelled),
            _ => None,
        }
    }

    /// Get human-readable state name
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "Pending",
            SessionStatus::Success => "Success",
            SessionStatus::Incomplete => "Incomplete",
            SessionStatus::Failed => "Failed",
            SessionStatus::Timeout => "Timeout",
            SessionStatus::Cancelled => "Cancelled",
        }
    }

    /// Normalize a free-form aggregator status string into a terminal state.
    ///
    /// The completion notification carries a loosely-typed status from an
    /// external system; it is mapped here at the boundary and nowhere else.
    /// Unrecognized values normalize to Failed (with the caller expected to
    /// log the raw value).
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" | "completed" => SessionStatus::Success,
            "incomplete" => SessionStatus::Incomplete,
            "failed" | "failure" => SessionStatus::Failed,
            "timeout" | "timed out" => SessionStatus::Timeout,
            "cancelled" | "canceled" => SessionStatus::Cancelled,
            _ => SessionStatus::Failed,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i16> for SessionStatus {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        SessionStatus::from_id(value).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!SessionStatus::Pending.is_terminal());

        assert!(SessionStatus::Success.is_terminal());
        assert!(SessionStatus::Incomplete.is_terminal());
        assert!(SessionStatus::Failed.is_terminal());
        assert!(SessionStatus::Timeout.is_terminal());
        assert!(SessionStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_state_id_roundtrip() {
        let states = [
            SessionStatus::Pending,
            SessionStatus::Success,
            SessionStatus::Incomplete,
            SessionStatus::Failed,
            SessionStatus::Timeout,
            SessionStatus::Cancelled,
        ];

        for state in states {
            let id = state.id();
            let recovered = SessionStatus::from_id(id).unwrap();
            assert_eq!(state, recovered);
        }
    }

    #[test]
    fn test_invalid_state_id() {
        assert!(SessionStatus::from_id(999).is_none());
        assert!(SessionStatus::from_id(-999).is_none());
    }

    #[test]
    fn test_normalize_known_statuses() {
        assert_eq!(SessionStatus::normalize("Success"), SessionStatus::Success);
        assert_eq!(
            SessionStatus::normalize("incomplete"),
            SessionStatus::Incomplete
        );
        assert_eq!(SessionStatus::normalize("FAILED"), SessionStatus::Failed);
        assert_eq!(
            SessionStatus::normalize(" Timed Out "),
            SessionStatus::Timeout
        );
        assert_eq!(
            SessionStatus::normalize("Canceled"),
            SessionStatus::Cancelled
        );
    }

    #[test]
    fn test_normalize_unknown_falls_back_to_failed() {
        assert_eq!(
            SessionStatus::normalize("SomethingNew"),
            SessionStatus::Failed
        );
        assert_eq!(SessionStatus::normalize(""), SessionStatus::Failed);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionStatus::Pending.to_string(), "Pending");
        assert_eq!(SessionStatus::Success.to_string(), "Success");
    }
}
