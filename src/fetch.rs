//! External data fetcher plumbing shared by the weather and recipe clients
//!
//! Classifies HTTP failures into a small taxonomy with user-facing
//! messages, tracks the Idle -> Loading -> Success/Failed lifecycle, and
//! makes last-write-wins explicit: every request carries a monotonically
//! increasing sequence number and stale completions are discarded.

use std::time::Duration;

/// Client-side timeout applied to every external request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum user-triggered retry attempts after a failure
pub const MAX_RETRIES: u32 = 3;

/// Failure taxonomy for third-party API requests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("rate limited")]
    RateLimited,
    #[error("server error ({0})")]
    Server(u16),
    #[error("request timeout")]
    Timeout,
    #[error("offline")]
    Offline,
    #[error("invalid response shape")]
    InvalidShape,
}

impl FetchError {
    /// Classify an HTTP status code. Statuses below 400 never reach here.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FetchError::NotFound,
            401 | 403 => FetchError::Unauthorized,
            429 => FetchError::RateLimited,
            other => FetchError::Server(other),
        }
    }

    /// Classify a reqwest transport failure
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Offline
        } else if err.is_decode() {
            FetchError::InvalidShape
        } else {
            FetchError::Server(0)
        }
    }

    /// Message shown with the dismiss/retry affordance
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NotFound => {
                "Not found. Please check the spelling and try again.".to_string()
            }
            FetchError::Unauthorized => {
                "Invalid API key. Please check your configuration.".to_string()
            }
            FetchError::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            FetchError::Server(status) => {
                format!("Service error ({}). Please try again.", status)
            }
            FetchError::Timeout => {
                "Request timeout. Please check your connection and try again.".to_string()
            }
            FetchError::Offline => {
                "No internet connection. Please check your network and try again.".to_string()
            }
            FetchError::InvalidShape => "Invalid data received from the service.".to_string(),
        }
    }
}

/// Lifecycle of one request slot
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(FetchError),
}

/// Per-widget request tracker.
///
/// Owns the current state, the sequence counter that arbitrates
/// superseded requests, and the retry budget. A completion whose ticket
/// is stale (a newer request has started) is ignored, and a failure
/// never clobbers the last successful value.
#[derive(Debug)]
pub struct FetchSession<T> {
    state: FetchState<T>,
    last_success: Option<T>,
    next_seq: u64,
    current_seq: u64,
    retries: u32,
}

impl<T: Clone> FetchSession<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            last_success: None,
            next_seq: 0,
            current_seq: 0,
            retries: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Most recent successful value, kept across later failures
    pub fn last_success(&self) -> Option<&T> {
        self.last_success.as_ref()
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Whether a user-triggered retry is still allowed
    pub fn can_retry(&self) -> bool {
        self.retries < MAX_RETRIES
    }

    /// Start a new request, superseding any in-flight one. Returns the
    /// ticket that must accompany the completion.
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.current_seq = self.next_seq;
        self.state = FetchState::Loading;
        self.current_seq
    }

    /// Start a user-triggered retry, counting it against the budget.
    /// Returns None once the cap is reached.
    pub fn begin_retry(&mut self) -> Option<u64> {
        if !self.can_retry() {
            return None;
        }
        self.retries += 1;
        Some(self.begin())
    }

    /// Record a successful completion. Stale tickets are discarded.
    pub fn complete(&mut self, ticket: u64, value: T) -> bool {
        if ticket != self.current_seq {
            return false;
        }
        self.last_success = Some(value.clone());
        self.state = FetchState::Success(value);
        self.retries = 0;
        true
    }

    /// Record a failed completion. Stale tickets are discarded; the last
    /// successful value survives.
    pub fn fail(&mut self, ticket: u64, error: FetchError) -> bool {
        if ticket != self.current_seq {
            return false;
        }
        self.state = FetchState::Failed(error);
        true
    }
}

impl<T: Clone> Default for FetchSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(FetchError::from_status(404), FetchError::NotFound);
        assert_eq!(FetchError::from_status(401), FetchError::Unauthorized);
        assert_eq!(FetchError::from_status(429), FetchError::RateLimited);
        assert_eq!(FetchError::from_status(500), FetchError::Server(500));
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut session: FetchSession<u32> = FetchSession::new();
        let first = session.begin();
        let second = session.begin();

        // The superseded request resolves late; its value must not win.
        assert!(!session.complete(first, 1));
        assert!(session.complete(second, 2));
        assert_eq!(session.state(), &FetchState::Success(2));
    }

    #[test]
    fn test_failure_keeps_last_success() {
        let mut session: FetchSession<&str> = FetchSession::new();
        let ticket = session.begin();
        session.complete(ticket, "london");

        let ticket = session.begin();
        session.fail(ticket, FetchError::NotFound);

        assert_eq!(session.state(), &FetchState::Failed(FetchError::NotFound));
        assert_eq!(session.last_success(), Some(&"london"));
    }

    #[test]
    fn test_retry_budget() {
        let mut session: FetchSession<u32> = FetchSession::new();
        for _ in 0..MAX_RETRIES {
            let ticket = session.begin_retry().expect("retry within budget");
            session.fail(ticket, FetchError::Timeout);
        }
        assert!(session.begin_retry().is_none());
    }

    #[test]
    fn test_success_resets_retry_budget() {
        let mut session: FetchSession<u32> = FetchSession::new();
        let ticket = session.begin_retry().unwrap();
        session.complete(ticket, 7);
        assert_eq!(session.retries(), 0);
    }
}
