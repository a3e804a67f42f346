use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Column, Space};
use iced::{Color, Element, Font, Length};
use iced_fonts::bootstrap;
use vitae_core::bindings::ElementKey;
use vitae_core::content::{Certification, ContactKind, Education, Experience};
use vitae_core::navigation::{RevealClass, Section};
use vitae_core::utils::config::{Config, SectionKind};

use super::{reveal_padding, PageView};
use crate::canvas::{EffectLayer, TiltCardCanvas, TiltCardState};
use crate::constants::*;
use crate::icons::{contact_icon, contact_label, section_icon};
use crate::layout::{body_height, content_width, rows_for, Row};
use crate::message::Message;
use crate::styles::{
    avatar_style, card_style, contact_button_style, nav_link_style, section_header_style,
    skill_bar_style, transparent_style,
};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// The scrollable page: every section header, the active one expanded.
/// Spacing mirrors [`crate::layout::PageLayout::compute`].
pub fn page<'a>(view: &PageView<'a>) -> Element<'a, Message> {
    let nav = view.site.navigation();
    let mut sections = Column::new().spacing(SECTION_GAP);
    for section in nav.sections().iter() {
        sections = sections.push(section_block(view, section));
    }

    let content = column![
        Space::new().height(Length::Fixed(PAGE_PADDING)),
        sections.width(Length::Fixed(content_width(view.viewport.x))),
        Space::new().height(Length::Fixed(PAGE_PADDING)),
    ];

    container(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(transparent_style())
        .into()
}

fn section_block<'a>(view: &PageView<'a>, section: &'a Section) -> Element<'a, Message> {
    let pal = view.palette;
    let active = section.is_active();
    let highlighted = view.site.navigation().highlighted() == Some(section.id.as_str());

    let chevron = if active {
        bootstrap::chevron_down()
    } else {
        bootstrap::chevron_right()
    };
    let header = container(
        button(
            row![
                section_icon(&section.icon).size(18),
                Space::new().width(Length::Fixed(10.0)),
                text(section.title.as_str()).size(18).font(BOLD),
                Space::new().width(Length::Fill),
                chevron.size(14),
            ]
            .align_y(Vertical::Center),
        )
        .on_press(Message::NavClicked(section.id.clone()))
        .padding([0, 16])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(nav_link_style(pal, active, highlighted)),
    )
    .height(Length::Fixed(SECTION_HEADER_HEIGHT))
    .align_y(Vertical::Center)
    .style(section_header_style(pal, active));

    if !active {
        return header.into();
    }

    let config = view.site.context().config();
    let rows = rows_for(section.kind, config);
    let class = RevealClass::for_kind(section.kind);
    let mut body = Column::new().spacing(CHILD_SPACING);
    for row in &rows {
        let element: Element<'a, Message> = match row {
            Row::Label { text: label, height } => container(
                text(label.clone())
                    .size(13)
                    .font(BOLD)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted),
                    }),
            )
            .height(Length::Fixed(*height))
            .align_y(Vertical::Bottom)
            .into(),
            Row::Child { index, height } => {
                let key = ElementKey::child(&section.id, *index);
                let amount = view.amount(&key);
                let child = child_element(view, config, section.kind, *index, key, amount);
                container(child)
                    .padding(reveal_padding(class, amount))
                    .width(Length::Fill)
                    .height(Length::Fixed(*height))
                    .clip(true)
                    .into()
            }
        };
        body = body.push(element);
    }

    column![
        header,
        container(body)
            .padding(SECTION_BODY_PADDING)
            .height(Length::Fixed(body_height(&rows))),
    ]
    .into()
}

fn child_element<'a>(
    view: &PageView<'a>,
    config: &'a Config,
    kind: SectionKind,
    index: usize,
    key: ElementKey,
    amount: f32,
) -> Element<'a, Message> {
    match kind {
        SectionKind::Profile if index == 0 => profile_card(view, config, amount),
        SectionKind::Profile => match config.personal.contact_links().into_iter().nth(index - 1) {
            Some((kind, url)) => contact_row(view, key, kind, url, amount),
            None => Space::new().into(),
        },
        SectionKind::Experience => match config.experience.get(index) {
            Some(entry) => experience_card(view, entry, amount),
            None => Space::new().into(),
        },
        SectionKind::Education => match config.education.get(index) {
            Some(entry) => education_card(view, entry, amount),
            None => Space::new().into(),
        },
        SectionKind::Skills => skill_row(view, config, key, index, amount),
        SectionKind::Certifications => match config.certifications.get(index) {
            Some(cert) => certification_card(view, key, cert, amount),
            None => Space::new().into(),
        },
        SectionKind::Additional => match config.additional.get(index) {
            Some(info) => card(
                view,
                row![
                    text(info.label.as_str()).width(Length::Fixed(200.0)).font(BOLD),
                    text(info.value.as_str()),
                ]
                .align_y(Vertical::Center)
                .into(),
                amount,
            ),
            None => Space::new().into(),
        },
    }
}

fn card<'a>(view: &PageView<'a>, content: Element<'a, Message>, amount: f32) -> Element<'a, Message> {
    container(content)
        .padding([12, 16])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(card_style(view.palette, amount))
        .into()
}

fn muted<'a>(view: &PageView<'a>, value: String, amount: f32) -> iced::widget::Text<'a> {
    let color = Color {
        a: amount,
        ..view.palette.muted
    };
    text(value)
        .size(13)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
}

fn profile_card<'a>(view: &PageView<'a>, config: &'a Config, amount: f32) -> Element<'a, Message> {
    let personal = &config.personal;
    let engine = view.site.engine();

    let avatar: Element<'a, Message> = match view.photo {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .into(),
        None => container(text(personal.initials()).size(32).font(BOLD))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(avatar_style(view.palette))
            .into(),
    };

    let typed = engine.typed_title(view.now_ms).unwrap_or(personal.title.as_str());
    let caret = if engine.is_typing(view.now_ms) { "▍" } else { "" };
    let accent = Color {
        a: amount,
        ..view.palette.accent
    };
    let title = text(format!("{}{}", typed, caret))
        .size(18)
        .style(move |_| iced::widget::text::Style { color: Some(accent) });

    let mut details = column![text(personal.name.as_str()).size(28).font(BOLD), title].spacing(6);
    if let Some(location) = &personal.location {
        details = details.push(muted(view, location.clone(), amount));
    }
    details = details.push(text(personal.summary.as_str()).size(14));

    card(
        view,
        row![avatar, details]
            .spacing(20)
            .align_y(Vertical::Center)
            .into(),
        amount,
    )
}

fn contact_row<'a>(
    view: &PageView<'a>,
    key: ElementKey,
    kind: ContactKind,
    url: String,
    amount: f32,
) -> Element<'a, Message> {
    let engine = view.site.engine();
    let ripples = engine.ripples(&key, view.now_ms).collect();
    let shine = engine.shine(&key, view.now_ms);
    let shown = url.trim_start_matches("mailto:").to_string();

    let link = button(
        row![
            contact_icon(kind).size(16),
            Space::new().width(Length::Fixed(10.0)),
            text(contact_label(kind)).font(BOLD),
            Space::new().width(Length::Fixed(12.0)),
            text(shown).size(13),
        ]
        .align_y(Vertical::Center),
    )
    .on_press(Message::LinkPressed(key.clone(), url))
    .padding([0, 14])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(contact_button_style(view.palette, amount));

    let layered = stack![
        Canvas::new(EffectLayer::<Message>::new(ripples, shine, view.palette))
            .width(Length::Fill)
            .height(Length::Fill),
        link,
    ];
    hover_area(key, layered.into())
}

/// Reports enter/move/leave for an element; positions are element-local.
fn hover_area<'a>(key: ElementKey, content: Element<'a, Message>) -> Element<'a, Message> {
    let moved = key.clone();
    let left = key.clone();
    mouse_area(content)
        .on_enter(Message::ElementEntered(key))
        .on_move(move |p| Message::ElementMoved(moved.clone(), p))
        .on_exit(Message::ElementLeft(left))
        .into()
}

fn period(start: impl std::fmt::Display, end: Option<String>) -> String {
    format!("{} – {}", start, end.unwrap_or_else(|| "actualidad".to_string()))
}

fn experience_card<'a>(view: &PageView<'a>, entry: &'a Experience, amount: f32) -> Element<'a, Message> {
    let mut place = entry.company.clone();
    if let Some(location) = &entry.location {
        place = format!("{} · {}", place, location);
    }
    let mut content = column![
        row![
            text(entry.role.as_str()).size(17).font(BOLD),
            Space::new().width(Length::Fill),
            muted(view, entry.duration_label(view.today), amount),
        ]
        .align_y(Vertical::Center),
        muted(
            view,
            format!(
                "{}  ·  {}",
                place,
                period(entry.start, entry.end.map(|e| e.to_string()))
            ),
            amount
        ),
    ]
    .spacing(6);
    for highlight in entry.highlights.iter().take(3) {
        content = content.push(text(format!("• {}", highlight)).size(13));
    }
    card(view, content.into(), amount)
}

fn education_card<'a>(view: &PageView<'a>, entry: &'a Education, amount: f32) -> Element<'a, Message> {
    let mut content = column![
        text(entry.degree.as_str()).size(16).font(BOLD),
        muted(
            view,
            format!(
                "{}  ·  {}",
                entry.institution,
                period(entry.start, entry.end.map(|e| e.to_string()))
            ),
            amount
        ),
    ]
    .spacing(6);
    if let Some(details) = &entry.details {
        content = content.push(text(details.as_str()).size(13));
    }
    card(view, content.into(), amount)
}

fn skill_row<'a>(
    view: &PageView<'a>,
    config: &'a Config,
    key: ElementKey,
    index: usize,
    amount: f32,
) -> Element<'a, Message> {
    let Some(skill) = config.skills.iter().flat_map(|c| c.items.iter()).nth(index) else {
        return Space::new().into();
    };
    let fill = view
        .site
        .engine()
        .skill_fill(&key, skill.fraction(), view.now_ms)
        .clamp(0.0, 1.0);
    let filled = (fill * 1000.0).round() as u16;

    let mut bar = row![].height(Length::Fixed(8.0)).width(Length::Fill);
    if filled > 0 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(skill_bar_style(view.palette, true, amount)),
        );
    }
    if filled < 1000 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(1000 - filled))
                .height(Length::Fill)
                .style(skill_bar_style(view.palette, false, amount)),
        );
    }

    row![
        text(skill.name.as_str()).width(Length::Fixed(160.0)),
        bar,
        text(format!("{}%", skill.level))
            .size(13)
            .width(Length::Fixed(48.0)),
    ]
    .spacing(12)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .into()
}

fn certification_card<'a>(
    view: &PageView<'a>,
    key: ElementKey,
    cert: &'a Certification,
    amount: f32,
) -> Element<'a, Message> {
    let engine = view.site.engine();
    let state = TiltCardState {
        angles: engine.tilt(&key),
        max_deg: engine.tilt_max_deg(),
        pointer: engine.tilt_pointer(&key),
        shine: engine.shine(&key, view.now_ms),
        alpha: amount,
    };
    let base = Color {
        a: 0.8,
        ..view.palette.surface_raised
    };

    let issuer = match cert.year {
        Some(year) => format!("{} · {}", cert.issuer, year),
        None => cert.issuer.clone(),
    };
    let mut heading = row![text(cert.name.as_str()).size(16).font(BOLD)].spacing(8);
    if cert.url.is_some() {
        heading = heading.push(bootstrap::box_arrow_up_right().size(12));
    }
    let text_color = Color {
        a: amount,
        ..view.palette.text
    };
    let label = container(column![heading, muted(view, issuer, amount)].spacing(6))
        .padding([14, 20])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(text_color),
            ..Default::default()
        });

    let layered = stack![
        Canvas::new(TiltCardCanvas::<Message>::new(state, base, view.palette))
            .width(Length::Fill)
            .height(Length::Fill),
        label,
    ];
    let content: Element<'a, Message> = match &cert.url {
        Some(url) => mouse_area(layered)
            .on_press(Message::LinkPressed(key.clone(), url.clone()))
            .interaction(iced::mouse::Interaction::Pointer)
            .into(),
        None => layered.into(),
    };
    hover_area(key, content)
}
