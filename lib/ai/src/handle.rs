//! Lazily constructed backend access.
//!
//! A [`BackendHandle`] is created once by the composition root and passed to
//! whoever needs a backend. The first successful `get_or_init` builds the
//! backend from the supplied credential; every later call reuses it, even if
//! a different credential is supplied.

use crate::backend::LlmBackend;
use crate::error::LlmError;
use crate::gemini::{GeminiBackend, GeminiConfig};
use rootcause::prelude::Report;
use std::sync::{Arc, OnceLock};
use tracing::debug;

type BackendFactory =
    dyn Fn(&str) -> Result<Arc<dyn LlmBackend>, Report<LlmError>> + Send + Sync;

/// Shared, construct-once access to a generative backend.
pub struct BackendHandle {
    slot: OnceLock<Arc<dyn LlmBackend>>,
    factory: Box<BackendFactory>,
}

impl BackendHandle {
    /// Creates an empty handle that builds backends with `factory`.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Result<Arc<dyn LlmBackend>, Report<LlmError>> + Send + Sync + 'static,
    {
        Self {
            slot: OnceLock::new(),
            factory: Box::new(factory),
        }
    }

    /// Creates an empty handle that builds [`GeminiBackend`]s.
    #[must_use]
    pub fn gemini(config: GeminiConfig) -> Self {
        Self::new(move |credential| {
            let backend = GeminiBackend::new(credential, config.clone())?;
            Ok(Arc::new(backend) as Arc<dyn LlmBackend>)
        })
    }

    /// Returns the backend, constructing it from `credential` if absent.
    ///
    /// # Errors
    ///
    /// Returns the factory's error if construction fails. The handle stays
    /// empty, so a later call may try again with another credential.
    pub fn get_or_init(&self, credential: &str) -> Result<Arc<dyn LlmBackend>, Report<LlmError>> {
        if let Some(backend) = self.slot.get() {
            return Ok(Arc::clone(backend));
        }

        let backend = (self.factory)(credential)?;
        debug!(model = backend.model(), "constructed generative backend");

        // A concurrent caller may have won the race; keep whichever landed first.
        Ok(Arc::clone(self.slot.get_or_init(|| backend)))
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandle")
            .field("model", &self.slot.get().map(|backend| backend.model().to_string()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn constructs_once_and_ignores_later_credentials() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let handle = BackendHandle::new(move |credential| {
            counter.fetch_add(1, Ordering::SeqCst);
            let config = GeminiConfig::default();
            Ok(Arc::new(GeminiBackend::new(credential, config)?) as Arc<dyn LlmBackend>)
        });
        assert!(handle.slot.get().is_none());

        let first = handle.get_or_init("key-one").expect("first");
        let second = handle.get_or_init("key-two").expect("second");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(handle.slot.get().is_some());
    }

    #[test]
    fn construction_failure_propagates_and_leaves_handle_empty() {
        let handle = BackendHandle::gemini(GeminiConfig::default());

        let err = handle.get_or_init("").err().expect("empty key");
        assert!(matches!(
            err.current_context(),
            LlmError::InvalidCredential { .. }
        ));
        assert!(handle.slot.get().is_none());

        let backend = handle.get_or_init("valid-key").expect("retry");
        assert_eq!(backend.model(), "gemini-2.5-flash");
    }

    #[test]
    fn debug_shows_model_once_built() {
        let handle = BackendHandle::gemini(GeminiConfig::default());
        assert!(format!("{handle:?}").contains("None"));
        handle.get_or_init("valid-key").expect("init");
        assert!(format!("{handle:?}").contains("gemini-2.5-flash"));
    }
}
