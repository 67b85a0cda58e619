// SPDX-License-Identifier: MPL-2.0
//! Top-level view state and its single dispatch point.
//!
//! Every user event, load result and timer tick reaches [`State::handle`],
//! which mutates the state and returns an [`Effect`] for the shell to run.
//! Nothing here touches iced tasks or the network, so every transition can
//! be exercised directly in tests.
//!
//! ```text
//!   Grid ◀──────── LayoutSelected ────────▶ Carousel
//!    │                                          │
//!    │ OpenFullscreen        OpenLightbox (stops auto-play)
//!    ▼                                          ▼
//!   Grid + fullscreen                     Carousel + lightbox
//! ```
//!
//! The set of mounted previews always equals the set of visible devices.
//! It is re-synced after every transition that can change visibility.

pub mod autoplay;
pub mod selection;
pub mod url_input;

pub use autoplay::{AutoPlay, AutoPlayHandle};
pub use selection::Selection;

use crate::application::port::LoadRequest;
use crate::config::{Config, DEFAULT_URL};
use crate::domain::device::{catalog, CarouselCategory, DeviceId, FormFactor, Orientation};
use crate::domain::LayoutMode;
use crate::error::UrlError;
use crate::layout::carousel::SLOT_STEP_DEGREES;
use crate::preview::{self, FailureKind};
use iced::Size;
use std::collections::{BTreeMap, BTreeSet};

/// Window size assumed until the first resize event arrives.
pub const INITIAL_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Messages handled by the orchestrator.
#[derive(Debug, Clone)]
pub enum Message {
    /// The URL field was edited.
    UrlInputChanged(String),
    /// The URL field was submitted.
    UrlSubmitted,
    LayoutSelected(LayoutMode),
    /// Grid filter; `None` shows every form factor.
    FilterSelected(Option<FormFactor>),
    OrientationToggled,
    OpenFullscreen(DeviceId),
    CloseFullscreen,
    DeviceSelected(CarouselCategory, DeviceId),
    OpenLightbox(DeviceId),
    CloseLightbox,
    /// Closes whichever of fullscreen or lightbox is open.
    CloseOverlay,
    TogglePlay,
    /// Rotate the carousel by one slot.
    Advance,
    AutoPlayTick(AutoPlayHandle),
    ViewportResized(Size),
    Preview(DeviceId, preview::Message),
}

/// Effects produced by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start these content loads.
    Load(Vec<LoadRequest>),
    /// A new target URL was committed and every mounted preview reloads.
    UrlCommitted { url: String, loads: Vec<LoadRequest> },
    /// A mounted preview just failed.
    PreviewFailed { device: DeviceId, kind: FailureKind },
}

impl Effect {
    fn load(requests: Vec<LoadRequest>) -> Self {
        if requests.is_empty() {
            Effect::None
        } else {
            Effect::Load(requests)
        }
    }
}

/// Startup values that override the configuration (CLI flags).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub layout: Option<LayoutMode>,
}

#[derive(Debug)]
pub struct State {
    target_url: String,
    pending_url_input: String,
    url_error: Option<UrlError>,
    layout_mode: LayoutMode,
    selection: Selection,
    /// Degrees, only ever increased by one slot step. Never wrapped.
    carousel_angle: f32,
    autoplay: AutoPlay,
    autoplay_on_enter: bool,
    active_filter: Option<FormFactor>,
    orientation: Orientation,
    fullscreen_device: Option<DeviceId>,
    lightbox_device: Option<DeviceId>,
    viewport: Size,
    card_size: Size,
    max_scale: f32,
    previews: BTreeMap<DeviceId, preview::State>,
    /// Outlives unmounted previews so a remounted device never reuses one.
    generations: preview::Generations,
}

impl State {
    /// Builds the initial state and the loads for every visible device.
    ///
    /// An invalid URL override leaves the configured default active and
    /// shows the validation error next to the field, as if it had been
    /// submitted. An invalid configured default falls back to
    /// [`DEFAULT_URL`] the same way.
    #[must_use]
    pub fn new(config: &Config, overrides: Overrides) -> (Self, Effect) {
        let (card_width, card_height) = config.card_size();
        let mut state = Self {
            target_url: DEFAULT_URL.to_owned(),
            pending_url_input: DEFAULT_URL.to_owned(),
            url_error: None,
            layout_mode: overrides
                .layout
                .or(config.general.layout)
                .unwrap_or_default(),
            selection: Selection::from_config(&config.carousel),
            carousel_angle: 0.0,
            autoplay: AutoPlay::default(),
            autoplay_on_enter: config.autoplay(),
            active_filter: None,
            orientation: config.grid.orientation.unwrap_or_default(),
            fullscreen_device: None,
            lightbox_device: None,
            viewport: INITIAL_VIEWPORT,
            card_size: Size::new(card_width, card_height),
            max_scale: config.max_scale(),
            previews: BTreeMap::new(),
            generations: preview::Generations::default(),
        };

        for url in std::iter::once(config.default_url().to_owned()).chain(overrides.url) {
            match url_input::normalize(&url) {
                Ok(normalized) => {
                    state.target_url = normalized.clone();
                    state.pending_url_input = normalized;
                    state.url_error = None;
                }
                Err(err) => {
                    log::warn!("ignoring startup URL: {err}");
                    state.pending_url_input = url;
                    state.url_error = Some(err);
                }
            }
        }

        if state.layout_mode == LayoutMode::Carousel && state.autoplay_on_enter {
            state.autoplay.start();
        }

        let loads = state.sync_previews();
        (state, Effect::load(loads))
    }

    /// Handle an orchestrator message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::UrlInputChanged(text) => {
                self.pending_url_input = text;
                Effect::None
            }
            Message::UrlSubmitted => self.commit_url(),
            Message::LayoutSelected(mode) => self.select_layout(mode),
            Message::FilterSelected(filter) => {
                self.active_filter = filter;
                Effect::load(self.sync_previews())
            }
            Message::OrientationToggled => {
                self.orientation = self.orientation.toggled();
                log::debug!("orientation is now {:?}", self.orientation);
                Effect::None
            }
            Message::OpenFullscreen(device) => {
                if self.layout_mode != LayoutMode::Grid || catalog::find(device).is_none() {
                    return Effect::None;
                }
                self.fullscreen_device = Some(device);
                Effect::load(self.sync_previews())
            }
            Message::CloseFullscreen => {
                self.fullscreen_device = None;
                Effect::load(self.sync_previews())
            }
            Message::DeviceSelected(category, device) => self.select_device(category, device),
            Message::OpenLightbox(device) => {
                if self.layout_mode != LayoutMode::Carousel || !self.selection.contains(device) {
                    return Effect::None;
                }
                self.lightbox_device = Some(device);
                if self.autoplay.stop() {
                    log::debug!("auto-play stopped by lightbox");
                }
                Effect::None
            }
            Message::CloseLightbox => {
                // Auto-play stays stopped until explicitly restarted.
                self.lightbox_device = None;
                Effect::None
            }
            Message::CloseOverlay => {
                if self.lightbox_device.is_some() {
                    self.handle(Message::CloseLightbox)
                } else if self.fullscreen_device.is_some() {
                    self.handle(Message::CloseFullscreen)
                } else {
                    Effect::None
                }
            }
            Message::TogglePlay => {
                if self.layout_mode != LayoutMode::Carousel || self.lightbox_device.is_some() {
                    return Effect::None;
                }
                if !self.autoplay.stop() {
                    self.autoplay.start();
                }
                log::debug!("auto-play playing: {}", self.autoplay.is_playing());
                Effect::None
            }
            Message::Advance => {
                self.advance();
                Effect::None
            }
            Message::AutoPlayTick(handle) => {
                if self.autoplay.accepts(handle) {
                    self.advance();
                } else {
                    log::debug!("dropping tick of cancelled auto-play {handle:?}");
                }
                Effect::None
            }
            Message::ViewportResized(size) => {
                self.viewport = size;
                Effect::None
            }
            Message::Preview(device, message) => self.forward_to_preview(device, message),
        }
    }

    fn commit_url(&mut self) -> Effect {
        match url_input::normalize(&self.pending_url_input) {
            Ok(normalized) => {
                log::info!("previewing {normalized}");
                self.target_url = normalized.clone();
                self.pending_url_input = normalized.clone();
                self.url_error = None;
                let generations = &mut self.generations;
                let loads = self
                    .previews
                    .values_mut()
                    .map(|preview| preview.reload(&normalized, generations))
                    .collect();
                Effect::UrlCommitted {
                    url: normalized,
                    loads,
                }
            }
            Err(err) => {
                log::debug!("rejected URL input: {err}");
                self.url_error = Some(err);
                Effect::None
            }
        }
    }

    fn select_layout(&mut self, mode: LayoutMode) -> Effect {
        if mode == self.layout_mode {
            return Effect::None;
        }
        log::debug!("layout {:?} -> {mode:?}", self.layout_mode);
        self.layout_mode = mode;
        self.fullscreen_device = None;
        self.lightbox_device = None;
        match mode {
            LayoutMode::Carousel if self.autoplay_on_enter => {
                self.autoplay.start();
            }
            LayoutMode::Carousel => {}
            LayoutMode::Grid => {
                self.autoplay.stop();
            }
        }
        Effect::load(self.sync_previews())
    }

    fn select_device(&mut self, category: CarouselCategory, device: DeviceId) -> Effect {
        let Some(descriptor) = catalog::find(device) else {
            return Effect::None;
        };
        match self.selection.set(category, descriptor) {
            Some(previous) if previous != device => {
                log::debug!("{category:?} slot: {previous} -> {device}");
                if self.lightbox_device == Some(previous) {
                    self.lightbox_device = None;
                }
                Effect::load(self.sync_previews())
            }
            Some(_) => Effect::None,
            None => {
                log::warn!("{device} does not fit the {category:?} slot");
                Effect::None
            }
        }
    }

    fn advance(&mut self) {
        self.carousel_angle += SLOT_STEP_DEGREES;
    }

    fn forward_to_preview(&mut self, device: DeviceId, message: preview::Message) -> Effect {
        let Some(preview) = self.previews.get_mut(&device) else {
            log::debug!("{device}: dropping message for unmounted preview");
            return Effect::None;
        };
        let was_failed = preview.failure_kind().is_some();
        match preview.handle(message, &mut self.generations) {
            preview::Effect::Load(request) => Effect::Load(vec![request]),
            preview::Effect::None => match preview.failure_kind() {
                Some(kind) if !was_failed => Effect::PreviewFailed { device, kind },
                _ => Effect::None,
            },
        }
    }

    /// Devices currently on screen.
    #[must_use]
    pub fn visible_devices(&self) -> BTreeSet<DeviceId> {
        match self.layout_mode {
            LayoutMode::Grid => catalog::filtered(self.active_filter)
                .map(|device| device.id())
                .chain(self.fullscreen_device)
                .collect(),
            LayoutMode::Carousel => self.selection.iter().map(|(_, device)| device).collect(),
        }
    }

    /// Unmounts previews that left the screen and mounts the new ones.
    fn sync_previews(&mut self) -> Vec<LoadRequest> {
        let visible = self.visible_devices();
        self.previews.retain(|device, _| visible.contains(device));

        let mut loads = Vec::new();
        for device in visible {
            if self.previews.contains_key(&device) {
                continue;
            }
            let Some(descriptor) = catalog::find(device) else {
                continue;
            };
            let (preview, request) =
                preview::State::mount(descriptor, &self.target_url, &mut self.generations);
            self.previews.insert(device, preview);
            loads.push(request);
        }
        if !loads.is_empty() {
            log::debug!("mounted {} previews", loads.len());
        }
        loads
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn pending_url_input(&self) -> &str {
        &self.pending_url_input
    }

    #[must_use]
    pub fn url_error(&self) -> Option<&UrlError> {
        self.url_error.as_ref()
    }

    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn carousel_angle(&self) -> f32 {
        self.carousel_angle
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Handle of the running auto-play timer, if any.
    #[must_use]
    pub fn autoplay_handle(&self) -> Option<AutoPlayHandle> {
        self.autoplay.handle()
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<FormFactor> {
        self.active_filter
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn fullscreen_device(&self) -> Option<DeviceId> {
        self.fullscreen_device
    }

    #[must_use]
    pub fn lightbox_device(&self) -> Option<DeviceId> {
        self.lightbox_device
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn card_size(&self) -> Size {
        self.card_size
    }

    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    #[must_use]
    pub fn preview(&self, device: DeviceId) -> Option<&preview::State> {
        self.previews.get(&device)
    }

    pub fn previews(&self) -> impl Iterator<Item = &preview::State> {
        self.previews.values()
    }
}
