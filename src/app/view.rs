// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: toolbar and active layout at the bottom, then the
//! fullscreen or lightbox overlay when one is open, then the toasts.

use super::Message;
use crate::app::orchestrator;
use crate::domain::LayoutMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Toast};
use crate::ui::{carousel, grid, overlay, toolbar};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub orchestrator: &'a orchestrator::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the toolbar, the active layout and any overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.orchestrator;
    let viewport = state.viewport();
    let area = body_area(viewport);

    let body = match state.layout_mode() {
        LayoutMode::Grid => grid::view(state, ctx.i18n, area),
        LayoutMode::Carousel => carousel::view(state, ctx.i18n, area),
    };

    let page: Element<'_, orchestrator::Message> = Column::new()
        .push(toolbar::view(toolbar::ViewContext {
            i18n: ctx.i18n,
            state,
        }))
        .push(Container::new(body).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page.map(Message::Orchestrator));

    if let Some(modal) = overlay::active(state)
        .and_then(|(kind, device)| overlay::view(state, ctx.i18n, kind, device, viewport))
    {
        layers = layers.push(modal.map(Message::Orchestrator));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

/// Space left for the layout below the toolbar.
fn body_area(viewport: Size) -> Size {
    Size::new(
        viewport.width,
        (viewport.height - sizing::TOOLBAR_HEIGHT).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn body_area_excludes_toolbar() {
        let area = body_area(Size::new(1000.0, 700.0));
        assert_eq!(area.width, 1000.0);
        assert_eq!(area.height, 700.0 - sizing::TOOLBAR_HEIGHT);
        assert_eq!(body_area(Size::new(100.0, 10.0)).height, 0.0);
    }

    #[test]
    fn view_renders_with_open_overlay() {
        let i18n = I18n::default();
        let notifications = notifications::Manager::new();
        let (mut state, _) =
            orchestrator::State::new(&Config::default(), orchestrator::Overrides::default());
        let device = *state
            .visible_devices()
            .iter()
            .next()
            .expect("grid shows devices");
        state.handle(orchestrator::Message::OpenFullscreen(device));

        let _element = view(ViewContext {
            i18n: &i18n,
            orchestrator: &state,
            notifications: &notifications,
        });
    }
}
