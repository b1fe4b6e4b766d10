//! Live preview synchronization.
//!
//! Maintains a best-effort, eventually-consistent textual preview of the
//! fully assembled prompt template, recomputed whenever the system prompt,
//! task prompt, or retrieval toggle changes.
//!
//! Failure handling is deliberate: a failed preview build leaves the
//! previous preview unchanged and is never surfaced to the user. Staleness
//! on failure is intentional, not a defect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use atelier_core::ports::{PreviewBuilder, PromptTemplateRequest};
use tokio::task::JoinHandle;

/// Owns the derived preview text and the in-flight recomputation guard.
///
/// Successive requests carry a monotonically increasing sequence token; a
/// response is applied only if its token is still the latest issued, so an
/// earlier request that resolves after a later one cannot roll the preview
/// back.
pub struct PreviewSynchronizer {
    builder: Arc<dyn PreviewBuilder>,
    latest_token: Arc<AtomicU64>,
    preview: Arc<Mutex<Option<String>>>,
}

impl PreviewSynchronizer {
    pub fn new(builder: Arc<dyn PreviewBuilder>) -> Self {
        Self {
            builder,
            latest_token: Arc::new(AtomicU64::new(0)),
            preview: Arc::new(Mutex::new(None)),
        }
    }

    /// The currently displayed preview text, if any request has succeeded.
    pub fn current(&self) -> Option<String> {
        self.preview
            .lock()
            .expect("preview state lock poisoned")
            .clone()
    }

    /// Issues an asynchronous recomputation against the preview builder.
    ///
    /// Fire-and-forget from the caller's perspective; the returned handle
    /// exists so hosts and tests can await settlement.
    pub fn request(
        &self,
        system_prompt: &str,
        task_prompt: &str,
        retrieval_disabled: bool,
    ) -> JoinHandle<()> {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        let request = PromptTemplateRequest {
            system_prompt: system_prompt.to_string(),
            task_prompt: task_prompt.to_string(),
            retrieval_disabled,
        };

        let builder = Arc::clone(&self.builder);
        let latest_token = Arc::clone(&self.latest_token);
        let preview = Arc::clone(&self.preview);

        tokio::spawn(async move {
            match builder.build_final_prompt(request).await {
                Ok(response) => {
                    if latest_token.load(Ordering::SeqCst) == token {
                        *preview.lock().expect("preview state lock poisoned") =
                            Some(response.final_prompt_template);
                    } else {
                        tracing::debug!(token, "discarding stale preview response");
                    }
                }
                Err(e) => {
                    // Keep the previous preview; this path is never
                    // surfaced to the user.
                    tracing::warn!("preview build failed, preview left unchanged: {}", e);
                }
            }
        })
    }
}
