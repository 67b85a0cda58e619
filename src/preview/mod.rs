// SPDX-License-Identifier: MPL-2.0
//! Preview surface: one device mockup and the lifecycle of its embedded content.
//!
//! Each preview owns a small state machine:
//!
//! ```text
//!            mount / URL change / retry
//!                      │
//!                      ▼
//!                 ┌─────────┐  error signal          ┌──────────────────────────────┐
//!                 │ Loading │───────────────────────▶│ Failed(NetworkOrRenderFailure)│
//!                 └─────────┘                        └──────────────────────────────┘
//!                      │ success signal
//!          ┌───────────┴────────────┐
//!   surface empty             non-empty / denied
//!          ▼                        ▼
//! ┌──────────────────────────┐ ┌────────┐
//! │ Failed(EmbeddingBlocked) │ │ Loaded │
//! └──────────────────────────┘ └────────┘
//! ```
//!
//! Previews are independent: a failure in one never touches another.

pub mod chrome;

use crate::application::port::{
    LoadError, LoadRequest, LoadSignal, LoadedContent, PermissionProfile, SurfaceInspection,
};
use crate::domain::device::{DeviceDescriptor, DeviceId, FormFactor};

/// Why a preview failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The viewer reported a load error.
    NetworkOrRenderFailure,
    /// The page loaded but rendered nothing, most likely because it refuses framing.
    EmbeddingBlocked,
}

impl FailureKind {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FailureKind::NetworkOrRenderFailure => "preview-error-network",
            FailureKind::EmbeddingBlocked => "preview-error-blocked",
        }
    }
}

/// Lifecycle phase; the failure kind only exists while failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Loaded,
    Failed(FailureKind),
}

/// Messages for one preview.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the load issued under `generation`.
    Signal { generation: u64, signal: LoadSignal },
    /// User asked to try again.
    Retry,
}

/// Effects produced by a preview.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start loading content.
    Load(LoadRequest),
}

/// Issues load generations for every preview.
///
/// Generations never repeat, even when a device is unmounted and mounted
/// again, so a result can only match the load that issued it.
#[derive(Debug, Clone, Default)]
pub struct Generations {
    last: u64,
}

impl Generations {
    /// Next unused generation.
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// State of one mounted preview.
#[derive(Debug, Clone)]
pub struct State {
    device: DeviceId,
    form_factor: FormFactor,
    url: String,
    phase: Phase,
    /// Generation of the load in flight; results for any other are dropped.
    generation: u64,
    content: Option<LoadedContent>,
    error: Option<LoadError>,
}

impl State {
    /// Mounts a preview for `device` and returns the initial load.
    #[must_use]
    pub fn mount(
        device: &DeviceDescriptor,
        url: &str,
        generations: &mut Generations,
    ) -> (Self, LoadRequest) {
        let mut state = Self {
            device: device.id(),
            form_factor: device.form_factor,
            url: url.to_owned(),
            phase: Phase::Loading,
            generation: 0,
            content: None,
            error: None,
        };
        let request = state.begin_load(generations.next());
        (state, request)
    }

    /// Points the preview at `url` and restarts loading, even when the URL
    /// is unchanged.
    pub fn reload(&mut self, url: &str, generations: &mut Generations) -> LoadRequest {
        url.clone_into(&mut self.url);
        self.begin_load(generations.next())
    }

    /// Handle a preview message.
    pub fn handle(&mut self, message: Message, generations: &mut Generations) -> Effect {
        match message {
            Message::Signal { generation, signal } => {
                if generation != self.generation {
                    log::debug!(
                        "{}: dropping result of stale load {generation} (current {})",
                        self.device,
                        self.generation
                    );
                    return Effect::None;
                }
                self.apply_signal(signal);
                Effect::None
            }
            Message::Retry => {
                log::debug!("{}: retrying {}", self.device, self.url);
                Effect::Load(self.begin_load(generations.next()))
            }
        }
    }

    fn begin_load(&mut self, generation: u64) -> LoadRequest {
        self.generation = generation;
        self.phase = Phase::Loading;
        self.content = None;
        self.error = None;
        LoadRequest {
            device: self.device,
            form_factor: self.form_factor,
            url: self.url.clone(),
            generation: self.generation,
            profile: PermissionProfile::PREVIEW,
        }
    }

    fn apply_signal(&mut self, signal: LoadSignal) {
        match signal {
            LoadSignal::Loaded(content) => {
                // Only an observably empty surface counts as blocked. A denied
                // inspection carries no information and is treated as success.
                self.phase = match content.surface {
                    Ok(SurfaceInspection::Empty) => {
                        log::info!(
                            "{}: {} rendered empty, assuming framing is blocked",
                            self.device,
                            self.url
                        );
                        Phase::Failed(FailureKind::EmbeddingBlocked)
                    }
                    Ok(SurfaceInspection::NonEmpty) | Err(_) => Phase::Loaded,
                };
                self.content = Some(content);
            }
            LoadSignal::Error(err) => {
                log::warn!("{}: failed to load {}: {err}", self.device, self.url);
                self.phase = Phase::Failed(FailureKind::NetworkOrRenderFailure);
                self.error = Some(err);
            }
        }
    }

    #[must_use]
    pub fn device(&self) -> DeviceId {
        self.device
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self.phase {
            Phase::Failed(kind) => Some(kind),
            Phase::Loading | Phase::Loaded => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Summary of the last successful load, if any.
    #[must_use]
    pub fn content(&self) -> Option<&LoadedContent> {
        self.content.as_ref()
    }

    /// Technical detail of the last load error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::InspectionDenied;
    use crate::domain::device::catalog;

    fn loaded(surface: Result<SurfaceInspection, InspectionDenied>) -> LoadSignal {
        LoadSignal::Loaded(LoadedContent {
            final_url: "https://example.com/".into(),
            status: 200,
            bytes: 1024,
            title: Some("Example Domain".into()),
            surface,
        })
    }

    fn mounted(generations: &mut Generations) -> State {
        State::mount(&catalog::all()[0], "https://example.com", generations).0
    }

    fn signal(state: &State, signal: LoadSignal) -> Message {
        Message::Signal {
            generation: state.generation(),
            signal,
        }
    }

    #[test]
    fn mount_starts_loading_with_a_request() {
        let device = &catalog::all()[0];
        let mut generations = Generations::default();
        let (state, request) = State::mount(device, "https://example.com", &mut generations);
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(request.device, device.id());
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.generation, state.generation());
        assert_eq!(request.profile, PermissionProfile::PREVIEW);
    }

    #[test]
    fn success_with_content_marks_loaded() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let msg = signal(&state, loaded(Ok(SurfaceInspection::NonEmpty)));
        assert_eq!(state.handle(msg, &mut generations), Effect::None);
        assert_eq!(state.phase(), Phase::Loaded);
        assert!(state.failure_kind().is_none());
        assert!(state.content().is_some());
    }

    #[test]
    fn empty_surface_marks_embedding_blocked() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let msg = signal(&state, loaded(Ok(SurfaceInspection::Empty)));
        state.handle(msg, &mut generations);
        assert_eq!(state.failure_kind(), Some(FailureKind::EmbeddingBlocked));
    }

    #[test]
    fn denied_inspection_is_treated_as_success() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let msg = signal(&state, loaded(Err(InspectionDenied)));
        state.handle(msg, &mut generations);
        assert_eq!(state.phase(), Phase::Loaded);
    }

    #[test]
    fn load_error_fails_then_retry_reloads() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let msg = signal(&state, LoadSignal::Error(LoadError::Timeout));
        state.handle(msg, &mut generations);
        assert_eq!(
            state.phase(),
            Phase::Failed(FailureKind::NetworkOrRenderFailure)
        );
        assert_eq!(state.error(), Some(&LoadError::Timeout));

        let before = state.generation();
        let effect = state.handle(Message::Retry, &mut generations);
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.error().is_none());
        match effect {
            Effect::Load(request) => {
                assert!(request.generation > before);
                assert_eq!(request.generation, state.generation());
            }
            Effect::None => panic!("retry must reissue the load"),
        }
    }

    #[test]
    fn url_change_resets_loaded_preview() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let msg = signal(&state, loaded(Ok(SurfaceInspection::NonEmpty)));
        state.handle(msg, &mut generations);
        assert_eq!(state.phase(), Phase::Loaded);

        let request = state.reload("https://rust-lang.org", &mut generations);
        assert_eq!(request.url, "https://rust-lang.org");
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.content().is_none());
    }

    #[test]
    fn recommitting_the_same_url_still_reloads() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let before = state.generation();
        let request = state.reload("https://example.com", &mut generations);
        assert_ne!(request.generation, before);
        assert!(state.is_loading());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut generations = Generations::default();
        let mut state = mounted(&mut generations);
        let stale_generation = state.generation();
        state.reload("https://rust-lang.org", &mut generations);

        state.handle(
            Message::Signal {
                generation: stale_generation,
                signal: LoadSignal::Error(LoadError::Status(500)),
            },
            &mut generations,
        );
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn remounting_never_reuses_a_generation() {
        let mut generations = Generations::default();
        let device = &catalog::all()[0];
        let (first, _) = State::mount(device, "https://example.com", &mut generations);
        let (mut second, _) = State::mount(device, "https://rust-lang.org", &mut generations);
        assert_ne!(first.generation(), second.generation());

        let stale = signal(&first, loaded(Ok(SurfaceInspection::NonEmpty)));
        second.handle(stale, &mut generations);
        assert!(second.is_loading());
        assert!(second.content().is_none());
    }
}
