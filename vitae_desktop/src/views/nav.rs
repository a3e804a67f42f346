use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, mouse_area, row, stack, text, Column, Row, Space};
use iced::{Color, Element, Font, Length};
use iced_fonts::bootstrap;
use vitae_core::Site;

use crate::canvas::MenuBackdrop;
use crate::constants::{MENU_BUTTON_SIZE, MOBILE_MENU_ROW_HEIGHT, NAV_BAR_HEIGHT};
use crate::icons::section_icon;
use crate::message::Message;
use crate::styles::{icon_button_style, nav_bar_style, nav_link_style};
use crate::theme::PaletteColors;

/// Top bar: name plus the live region on the left, section links (or the
/// menu toggle on narrow windows) on the right. A startup `error` replaces
/// the live-region text.
pub fn nav_bar<'a>(site: &'a Site, pal: PaletteColors, error: Option<&'a str>) -> Element<'a, Message> {
    let nav = site.navigation();
    let name = &site.context().config().personal.name;

    let (status, status_color) = match error {
        Some(error) => (error, pal.danger),
        None => (nav.announcement().unwrap_or(""), pal.muted),
    };
    let brand = column![
        text(name.as_str()).size(18).font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        }),
        text(status)
            .size(11)
            .style(move |_| iced::widget::text::Style {
                color: Some(status_color)
            }),
    ]
    .spacing(2);

    let trailing: Element<'a, Message> = if nav.is_mobile() {
        let is_open = nav.is_menu_open();
        let glyph = if is_open {
            bootstrap::x_lg()
        } else {
            bootstrap::list()
        };
        button(
            container(glyph.size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(Message::ToggleMenu)
        .width(Length::Fixed(MENU_BUTTON_SIZE))
        .height(Length::Fixed(MENU_BUTTON_SIZE))
        .style(icon_button_style(pal, is_open))
        .into()
    } else {
        let highlighted = nav.highlighted();
        let mut links = Row::new().spacing(4).align_y(Vertical::Center);
        for section in nav.sections().iter() {
            links = links.push(
                button(text(section.title.as_str()).size(14))
                    .on_press(Message::NavClicked(section.id.clone()))
                    .padding([8, 12])
                    .style(nav_link_style(
                        pal,
                        section.is_active(),
                        highlighted == Some(section.id.as_str()),
                    )),
            );
        }
        links.into()
    };

    container(
        row![brand, Space::new().width(Length::Fill), trailing]
            .align_y(Vertical::Center)
            .padding([0, 24]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(NAV_BAR_HEIGHT))
    .align_y(Vertical::Center)
    .style(nav_bar_style(pal))
    .into()
}

/// Slide-down menu for narrow windows. Everything below the menu panel is a
/// click-away area that closes it.
pub fn mobile_menu<'a>(site: &'a Site, pal: PaletteColors) -> Element<'a, Message> {
    let nav = site.navigation();
    let progress = nav.menu_progress();
    let rows = nav.sections().len() as f32;
    let panel_height = rows * MOBILE_MENU_ROW_HEIGHT + 16.0;

    let alpha = progress.clamp(0.0, 1.0);
    let mut links = Column::new().padding([8, 16]);
    for section in nav.sections().iter() {
        let color = Color {
            a: alpha,
            ..if section.is_active() { pal.accent } else { pal.text }
        };
        links = links.push(
            button(
                row![
                    section_icon(&section.icon).size(16),
                    Space::new().width(Length::Fixed(12.0)),
                    text(section.title.as_str()),
                ]
                .align_y(Vertical::Center),
            )
            .on_press(Message::NavClicked(section.id.clone()))
            .width(Length::Fill)
            .height(Length::Fixed(MOBILE_MENU_ROW_HEIGHT))
            .style(move |theme, status| {
                let base = nav_link_style(pal, false, false)(theme, status);
                iced::widget::button::Style {
                    text_color: color,
                    ..base
                }
            }),
        );
    }

    let panel = stack![
        Canvas::new(MenuBackdrop::<Message>::new(progress, pal))
            .width(Length::Fill)
            .height(Length::Fixed(panel_height)),
        links,
    ];

    column![
        panel,
        mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
            .on_press(Message::OutsideClick),
    ]
    .into()
}
