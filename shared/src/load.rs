//! Background fetch status.
//!
//! Every list or metrics fetch ends in `Ready` or `Failed`; failures are kept
//! so the view can show them instead of rendering an empty list.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready(T),
    /// The fetch failed; holds the message to display.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                match err.status() {
                    Some(status) => log::warn!("background fetch failed ({status}): {err}"),
                    None => log::warn!("background fetch failed: {err}"),
                }
                Self::Failed(err.display_message())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Marks a reload; a ready value stays on screen until replaced.
    pub fn mark_loading(&mut self) {
        if !matches!(self, Self::Ready(_)) {
            *self = Self::Loading;
        }
    }
}

impl<T: Clone> LoadState<Vec<T>> {
    /// Items to render; empty unless ready.
    pub fn items(&self) -> Vec<T> {
        self.value().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_visible() {
        let state: LoadState<Vec<u8>> = LoadState::from_result(Err(ApiError::RequestFailed {
            status: 500,
            body: r#"{"detail":"database down"}"#.into(),
        }));
        assert_eq!(state.error(), Some("database down"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_ready_value() {
        let state = LoadState::from_result(Ok(vec![1, 2]));
        assert_eq!(state.items(), vec![1, 2]);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_reload_keeps_previous_value() {
        let mut ready = LoadState::Ready(3);
        ready.mark_loading();
        assert_eq!(ready, LoadState::Ready(3));

        let mut failed = LoadState::<u8>::Failed("x".into());
        failed.mark_loading();
        assert!(failed.is_loading());
    }
}
