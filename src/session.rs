use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Simulated progress advances by a fixed step per tick; the tick interval
/// varies per page.
pub const PROGRESS_STEP: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// Owned object URL for a local media preview. Revokes the URL when
/// replaced or dropped, so stale blob references never accumulate.
#[derive(Debug)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn for_file(file: &web_sys::File) -> Option<Self> {
        match web_sys::Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self(url)),
            Err(e) => {
                log::error!("Failed to create object URL: {e:?}");
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

/// Per-analysis-kind view state: phase, simulated progress, result, error,
/// preview URL, and a generation counter that makes each submission's
/// ticker and response verifiable as current or stale.
pub struct AnalysisSession<R: Send + Sync + 'static> {
    pub phase: RwSignal<AnalysisPhase>,
    pub progress: RwSignal<u32>,
    pub result: RwSignal<Option<R>>,
    pub error: RwSignal<Option<String>>,
    pub preview_url: RwSignal<Option<PreviewUrl>>,
    generation: RwSignal<u64>,
}

impl<R: Send + Sync + 'static> Clone for AnalysisSession<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for AnalysisSession<R> {}

impl<R: Clone + Send + Sync + 'static> AnalysisSession<R> {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(AnalysisPhase::Idle),
            progress: RwSignal::new(0),
            result: RwSignal::new(None),
            error: RwSignal::new(None),
            preview_url: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// A file was accepted: drop any stale result before anything else so
    /// the previous upload's output can never show for the new one.
    pub fn select(&self) {
        self.phase.set(AnalysisPhase::FileSelected);
        self.progress.set(0);
        self.result.set(None);
        self.error.set(None);
    }

    /// Replaces the media preview, revoking the previous URL before a new
    /// one is minted.
    pub fn set_preview(&self, file: &web_sys::File) {
        self.preview_url.set(None);
        self.preview_url.set(PreviewUrl::for_file(file));
    }

    pub fn preview(&self) -> Option<String> {
        self.preview_url
            .with(|url| url.as_ref().map(|u| u.as_str().to_owned()))
    }

    /// Starts a submission attempt and returns its generation token.
    /// Everything a prior attempt left behind is reset; the prior attempt's
    /// ticker and response become stale the moment this bumps the counter.
    pub fn begin(&self) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.phase.set(AnalysisPhase::Submitting);
        self.progress.set(0);
        self.result.set(None);
        self.error.set(None);
        generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }

    /// Records a successful response, unless a newer submission has started.
    pub fn succeed(&self, generation: u64, report: R) -> bool {
        if !self.is_current(generation) {
            log::debug!("dropping stale analysis response (generation {generation})");
            return false;
        }
        self.result.set(Some(report));
        self.error.set(None);
        self.phase.set(AnalysisPhase::Succeeded);
        true
    }

    /// Records a failed response, unless a newer submission has started.
    /// The result stays empty.
    pub fn fail(&self, generation: u64, message: String) -> bool {
        if !self.is_current(generation) {
            log::debug!("dropping stale analysis failure (generation {generation})");
            return false;
        }
        self.error.set(Some(message));
        self.phase.set(AnalysisPhase::Failed);
        true
    }

    /// The progress bar shows while a submission is underway and the
    /// simulated progress has not yet hit 100.
    pub fn in_progress(&self) -> bool {
        matches!(
            self.phase.get(),
            AnalysisPhase::Submitting | AnalysisPhase::Succeeded | AnalysisPhase::Failed
        ) && self.progress.get() < 100
    }

    /// Results display only when BOTH the simulated progress reached 100
    /// AND the current generation's response arrived; the two can resolve
    /// in either order.
    pub fn ready(&self) -> bool {
        self.phase.get() == AnalysisPhase::Succeeded
            && self.progress.get() >= 100
            && self.result.with(|r| r.is_some())
    }
}

/// Clamped, monotonic progress step.
pub fn advance(progress: u32) -> u32 {
    (progress + PROGRESS_STEP).min(100)
}

/// Starts a submission: bumps the generation, runs the cosmetic progress
/// ticker, and resolves the request future. Both the ticker and the
/// resolution check the generation, so a re-submission mid-flight silently
/// retires them instead of racing on shared state.
pub fn submit<R, Fut>(session: AnalysisSession<R>, tick_ms: u32, request: Fut)
where
    R: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<R, String>> + 'static,
{
    let generation = session.begin();
    run_progress_ticker(session, generation, tick_ms);
    spawn_local(async move {
        match request.await {
            Ok(report) => {
                session.succeed(generation, report);
            }
            Err(message) => {
                session.fail(generation, message);
            }
        }
    });
}

fn run_progress_ticker<R: Clone + Send + Sync + 'static>(
    session: AnalysisSession<R>,
    generation: u64,
    tick_ms: u32,
) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(tick_ms).await;
            if !session.is_current(generation) {
                break;
            }
            let next = advance(session.progress.get_untracked());
            session.progress.set(next);
            if next >= 100 {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_steps_and_clamps() {
        assert_eq!(advance(0), 10);
        assert_eq!(advance(90), 100);
        assert_eq!(advance(95), 100);
        assert_eq!(advance(100), 100);
    }

    #[test]
    fn select_clears_previous_attempt() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        let generation = session.begin();
        session.succeed(generation, "old result".into());
        session.progress.set(100);
        assert!(session.result.with(|r| r.is_some()));

        session.select();
        assert_eq!(session.phase.get(), AnalysisPhase::FileSelected);
        assert_eq!(session.progress.get(), 0);
        assert!(session.result.with(|r| r.is_none()));
        assert!(session.error.with(|e| e.is_none()));
    }

    #[test]
    fn success_requires_current_generation() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        let first = session.begin();
        let second = session.begin();

        // The first submission resolves after the second started: discarded.
        assert!(!session.succeed(first, "stale".into()));
        assert!(session.result.with(|r| r.is_none()));

        assert!(session.succeed(second, "fresh".into()));
        assert_eq!(session.result.get(), Some("fresh".to_string()));
        assert_eq!(session.phase.get(), AnalysisPhase::Succeeded);
    }

    #[test]
    fn failure_sets_error_and_keeps_result_empty() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        let generation = session.begin();
        assert!(session.fail(generation, "분석 실패: invalid format".into()));
        assert_eq!(session.phase.get(), AnalysisPhase::Failed);
        assert_eq!(session.error.get(), Some("분석 실패: invalid format".to_string()));
        assert!(session.result.with(|r| r.is_none()));
    }

    #[test]
    fn stale_failure_does_not_overwrite_fresh_success() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        let first = session.begin();
        let second = session.begin();
        session.succeed(second, "fresh".into());

        assert!(!session.fail(first, "too late".into()));
        assert_eq!(session.phase.get(), AnalysisPhase::Succeeded);
        assert!(session.error.with(|e| e.is_none()));
        assert_eq!(session.result.get(), Some("fresh".to_string()));
    }

    #[test]
    fn ready_needs_full_progress_and_result() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        let generation = session.begin();

        // Response first, progress still simulating: not ready.
        session.succeed(generation, "done".into());
        session.progress.set(90);
        assert!(!session.ready());

        // Progress catches up: ready.
        session.progress.set(100);
        assert!(session.ready());
    }

    #[test]
    fn progress_alone_never_displays_results() {
        let session: AnalysisSession<String> = AnalysisSession::new();
        session.begin();
        session.progress.set(100);
        assert!(!session.ready());
        assert!(!session.in_progress());
    }
}
