// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between the orchestrator and iced.
//!
//! The `App` struct owns the orchestrator, the content viewer and the
//! notification manager. It forwards messages to the orchestrator and turns
//! the returned effects into iced tasks, so every policy decision stays in
//! [`orchestrator`] where it can be tested without a runtime.

mod message;
pub mod orchestrator;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ContentViewer, LoadRequest};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpContentViewer, UnavailableViewer};
use crate::preview::{self, FailureKind};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use orchestrator::Effect;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Prefix shared by every notification about a single preview.
const PREVIEW_NOTIFICATION_PREFIX: &str = "notification-preview-";

/// Confirms a newly committed target URL.
const URL_COMMITTED_KEY: &str = "notification-url-committed";

/// Shown when the HTTP client could not be built.
const VIEWER_UNAVAILABLE_KEY: &str = "notification-viewer-unavailable";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    orchestrator: orchestrator::State,
    viewer: Arc<dyn ContentViewer>,
    autoplay_interval: Duration,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("target_url", &self.orchestrator.target_url())
            .field("layout", &self.orchestrator.layout_mode())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = orchestrator::INITIAL_VIEWPORT.width;
pub const WINDOW_DEFAULT_HEIGHT: f32 = orchestrator::INITIAL_VIEWPORT.height;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, builds the HTTP viewer and starts the first
    /// preview loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());

        let (viewer, viewer_error): (Arc<dyn ContentViewer>, bool) =
            match HttpContentViewer::new(config.load_timeout()) {
                Ok(viewer) => (Arc::new(viewer), false),
                Err(err) => {
                    log::error!("previews disabled: {err}");
                    (Arc::new(UnavailableViewer::new(err.to_string())), true)
                }
            };

        let (mut app, task) = Self::with_viewer(flags, &config, viewer);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if viewer_error {
            app.notifications
                .push(notifications::Notification::error(VIEWER_UNAVAILABLE_KEY));
        }

        (app, task)
    }

    /// Builds the application around an already constructed viewer.
    fn with_viewer(
        flags: Flags,
        config: &Config,
        viewer: Arc<dyn ContentViewer>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let (orchestrator, effect) = orchestrator::State::new(
            config,
            orchestrator::Overrides {
                url: flags.url,
                layout: flags.layout,
            },
        );

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            orchestrator,
            viewer,
            autoplay_interval: config.autoplay_interval(),
            notifications: notifications::Manager::new(),
        };
        let task = app.run_effect(effect);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.orchestrator.target_url())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_autoplay_subscription(
                self.orchestrator.autoplay_handle(),
                self.autoplay_interval,
            ),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Orchestrator(message) => {
                let effect = self.orchestrator.handle(message);
                self.run_effect(effect)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Load(requests) => self.load_all(requests),
            Effect::UrlCommitted { url, loads } => {
                // Failures reported for the previous URL no longer apply.
                self.notifications
                    .clear_with_prefix(PREVIEW_NOTIFICATION_PREFIX);
                log::debug!("reloading {} previews for {url}", loads.len());
                self.notifications.push(
                    notifications::Notification::info(URL_COMMITTED_KEY).with_arg("url", &url),
                );
                self.load_all(loads)
            }
            Effect::PreviewFailed { device, kind } => {
                let key = match kind {
                    FailureKind::NetworkOrRenderFailure => "notification-preview-failed",
                    FailureKind::EmbeddingBlocked => "notification-preview-blocked",
                };
                self.notifications.push(
                    notifications::Notification::warning(key).with_arg("device", device.as_str()),
                );
                Task::none()
            }
        }
    }

    fn load_all(&self, requests: Vec<LoadRequest>) -> Task<Message> {
        Task::batch(requests.into_iter().map(|request| {
            let device = request.device;
            let generation = request.generation;
            Task::perform(self.viewer.load(request), move |signal| {
                Message::Orchestrator(orchestrator::Message::Preview(
                    device,
                    preview::Message::Signal { generation, signal },
                ))
            })
        }))
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            orchestrator: &self.orchestrator,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{LoadError, LoadSignal};
    use crate::domain::LayoutMode;
    use futures_util::future::BoxFuture;
    use std::fs;
    use tempfile::tempdir;

    /// Viewer whose loads never resolve; tests feed signals by hand.
    struct PendingViewer;

    impl ContentViewer for PendingViewer {
        fn load(&self, _request: LoadRequest) -> BoxFuture<'static, LoadSignal> {
            Box::pin(futures_util::future::pending())
        }
    }

    fn app_with(flags: Flags) -> App {
        let (app, _task) = App::with_viewer(flags, &Config::default(), Arc::new(PendingViewer));
        app
    }

    fn fail_preview(app: &mut App, device: crate::domain::device::DeviceId) {
        let generation = app
            .orchestrator
            .preview(device)
            .expect("preview is mounted")
            .generation();
        let _ = app.update(Message::Orchestrator(orchestrator::Message::Preview(
            device,
            preview::Message::Signal {
                generation,
                signal: LoadSignal::Error(LoadError::Timeout),
            },
        )));
    }

    #[test]
    fn flags_override_url_and_layout() {
        let app = app_with(Flags {
            url: Some("example.org".into()),
            layout: Some(LayoutMode::Carousel),
            ..Flags::default()
        });
        assert_eq!(app.orchestrator.target_url(), "https://example.org");
        assert_eq!(app.orchestrator.layout_mode(), LayoutMode::Carousel);
        assert!(app.title().starts_with("https://example.org - "));
    }

    #[test]
    fn failed_preview_raises_a_warning_toast() {
        let mut app = app_with(Flags::default());
        let device = *app
            .orchestrator
            .visible_devices()
            .iter()
            .next()
            .expect("grid shows devices");

        fail_preview(&mut app, device);
        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-preview-failed");
        assert_eq!(toast.message_args()[0].1, device.as_str());
    }

    #[test]
    fn committing_a_url_replaces_failure_toasts_with_a_confirmation() {
        let mut app = app_with(Flags::default());
        let device = *app
            .orchestrator
            .visible_devices()
            .iter()
            .next()
            .expect("grid shows devices");
        fail_preview(&mut app, device);
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::Orchestrator(
            orchestrator::Message::UrlInputChanged("https://example.net".into()),
        ));
        let _ = app.update(Message::Orchestrator(orchestrator::Message::UrlSubmitted));
        let toasts: Vec<_> = app.notifications.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message_key(), URL_COMMITTED_KEY);
        assert_eq!(toasts[0].message_args()[0].1, "https://example.net");
    }

    #[test]
    fn rejected_url_raises_no_toast() {
        let mut app = app_with(Flags::default());
        let _ = app.update(Message::Orchestrator(
            orchestrator::Message::UrlInputChanged("not a url".into()),
        ));
        let _ = app.update(Message::Orchestrator(orchestrator::Message::UrlSubmitted));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn invalid_config_file_shows_a_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write config");

        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        });
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_owned())
            .collect();
        assert!(
            keys.iter().any(|key| key == config::CONFIG_LOAD_WARNING_KEY),
            "{keys:?}"
        );
    }

    #[test]
    fn theme_follows_config() {
        let app = app_with(Flags::default());
        assert_eq!(app.theme(), ThemeMode::System.iced_theme());
    }
}
