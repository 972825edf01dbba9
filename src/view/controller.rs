//! Generation cycle orchestration for the question card.
//!
//! DESIGN
//! ======
//! One call to [`QuestionView::generate`] is one generation cycle:
//!
//! 1. mark loading; if a question is displayed, hide it and wait `fade_out`
//! 2. request a question for the topic as it was when the cycle started
//! 3. success: store it as pending, clear any error, wait `fade_in`, then
//!    copy pending into displayed
//!    failure: drop pending and displayed, store the error message
//!
//! Overlapping cycles are not blocked. Responses land in arrival order and
//! the last one wins. Each landed response bumps a cycle counter; a fade-in
//! only fires if no later response (or failure, or `close`) has landed since,
//! so an older question never flashes over a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::api::QuestionApi;
use super::state::ViewState;
use crate::wire::GenerationRequest;

pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(300);
pub const DEFAULT_FADE_IN: Duration = Duration::from_millis(100);

/// Delays that let exit and enter transitions finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTimings {
    pub fade_out: Duration,
    pub fade_in: Duration,
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self { fade_out: DEFAULT_FADE_OUT, fade_in: DEFAULT_FADE_IN }
    }
}

pub struct QuestionView {
    api: Arc<dyn QuestionApi>,
    timings: FadeTimings,
    state: watch::Sender<ViewState>,
    cycle: AtomicU64,
    closed: AtomicBool,
}

impl QuestionView {
    #[must_use]
    pub fn new(api: Arc<dyn QuestionApi>, timings: FadeTimings) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { api, timings, state, cycle: AtomicU64::new(0), closed: AtomicBool::new(false) }
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receive every state change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn set_topic(&self, topic: &str) {
        self.state.send_modify(|s| topic.clone_into(&mut s.topic));
    }

    pub fn toggle_topic_input(&self) {
        self.state
            .send_modify(|s| s.topic_input_visible = !s.topic_input_visible);
    }

    /// Cancel any pending fade-in. Requests already in flight still settle.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Run one generation cycle to completion.
    pub async fn generate(&self) {
        let mut topic = String::new();
        let mut had_question = false;
        self.state.send_modify(|s| {
            s.is_loading = true;
            topic.clone_from(&s.topic);
            had_question = s.displayed_question.take().is_some();
        });

        if had_question {
            tokio::time::sleep(self.timings.fade_out).await;
        }

        let result = self
            .api
            .generate_question(&GenerationRequest::for_topic(&topic))
            .await;
        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;

        match result {
            Ok(question) => {
                debug!(cycle, "view: question received");
                self.state.send_modify(|s| {
                    s.pending_question = Some(question);
                    s.error = None;
                    s.is_loading = false;
                });
                tokio::time::sleep(self.timings.fade_in).await;
                self.promote(cycle);
            }
            Err(err) => {
                warn!(cycle, error = %err, "view: question request failed");
                self.state.send_modify(|s| {
                    s.pending_question = None;
                    s.displayed_question = None;
                    s.error = Some(err.to_string());
                    s.is_loading = false;
                });
            }
        }
    }

    fn promote(&self, cycle: u64) {
        if self.closed.load(Ordering::SeqCst) || self.cycle.load(Ordering::SeqCst) != cycle {
            debug!(cycle, "view: stale fade-in skipped");
            return;
        }
        self.state.send_modify(|s| s.displayed_question.clone_from(&s.pending_question));
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
