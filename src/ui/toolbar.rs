// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the devices: URL entry, layout switch and the controls of
//! the active layout.
//!
//! Grid mode shows the form-factor filter and the orientation toggle.
//! Carousel mode shows one device picker per category plus the play and
//! advance buttons.

use crate::app::orchestrator::{self, Message};
use crate::domain::device::{catalog, CarouselCategory, DeviceId, FormFactor, Orientation};
use crate::domain::LayoutMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a orchestrator::State,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let top = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(url_field(&ctx))
        .push(layout_switch(&ctx));

    let controls = match ctx.state.layout_mode() {
        LayoutMode::Grid => grid_controls(&ctx),
        LayoutMode::Carousel => carousel_controls(&ctx),
    };

    let mut content = Column::new().spacing(spacing::XS).push(top);
    if let Some(err) = ctx.state.url_error() {
        content = content.push(
            Text::new(ctx.i18n.tr(err.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }
    content = content.push(controls);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding(spacing::SM)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

fn url_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(
        &ctx.i18n.tr("toolbar-url-placeholder"),
        ctx.state.pending_url_input(),
    )
    .on_input(Message::UrlInputChanged)
    .on_submit(Message::UrlSubmitted)
    .padding(spacing::XS)
    .size(typography::BODY)
    .width(Length::Fill);

    let go = button(Text::new(ctx.i18n.tr("toolbar-go")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::UrlSubmitted)
        .style(styles::button::selected);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(input)
        .push(go)
        .into()
}

fn layout_switch<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    LayoutMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &mode| {
            row.push(
                button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::LayoutSelected(mode))
                    .style(styles::button::toggle(ctx.state.layout_mode() == mode)),
            )
        })
        .into()
}

fn grid_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.active_filter();
    let all = filter_button(ctx.i18n.tr("filter-all"), None, active);
    let filters = FormFactor::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).push(all),
        |row, &form_factor| {
            row.push(filter_button(
                ctx.i18n.tr(form_factor.i18n_key()),
                Some(form_factor),
                active,
            ))
        },
    );

    let orientation_key = match ctx.state.orientation() {
        Orientation::Portrait => "toolbar-orientation-portrait",
        Orientation::Landscape => "toolbar-orientation-landscape",
    };
    let orientation = button(Text::new(ctx.i18n.tr(orientation_key)).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::OrientationToggled)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(filters)
        .push(Space::new().width(Length::Fill))
        .push(orientation)
        .into()
}

fn filter_button<'a>(
    label: String,
    filter: Option<FormFactor>,
    active: Option<FormFactor>,
) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::FilterSelected(filter))
        .style(styles::button::toggle(filter == active))
        .into()
}

fn carousel_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pickers = CarouselCategory::ALL.iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Center),
        |row, &category| row.push(device_picker(ctx, category)),
    );

    let play_key = if ctx.state.is_playing() {
        "toolbar-pause"
    } else {
        "toolbar-play"
    };
    let play = button(Text::new(ctx.i18n.tr(play_key)).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::TogglePlay)
        .style(styles::button::toggle(ctx.state.is_playing()));
    let advance = button(Text::new(ctx.i18n.tr("toolbar-advance")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::Advance)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(pickers)
        .push(Space::new().width(Length::Fill))
        .push(play)
        .push(advance)
        .into()
}

fn device_picker<'a>(ctx: &ViewContext<'a>, category: CarouselCategory) -> Element<'a, Message> {
    let options: Vec<DeviceId> = catalog::for_category(category)
        .map(|device| device.id())
        .collect();
    let selected = ctx.state.selection().get(category);

    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(category.i18n_key())).size(typography::BODY_SM))
        .push(
            pick_list(options, Some(selected), move |device| {
                Message::DeviceSelected(category, device)
            })
            .text_size(typography::BODY_SM)
            .width(Length::Fixed(sizing::DEVICE_PICKER_WIDTH)),
        )
        .into()
}
