// SPDX-License-Identifier: MPL-2.0
//! Static landing-page sections: manifesto, services, systems, process,
//! differential, and audience.
//!
//! These blocks are pure presentation. They produce no messages, so every
//! view is generic over the parent's message type; all copy comes from the
//! Fluent bundles.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Numbered section header ("01 / QUÉ HACEMOS" and friends).
fn section_header<'a, M: 'a>(i18n: &I18n, number: &str, kicker_key: &str) -> Element<'a, M> {
    Text::new(format!("{} / {}", number, i18n.tr(kicker_key)))
        .size(typography::MONO_LABEL)
        .color(palette::TEXT_GRAY)
        .into()
}

fn offer_card<'a, M: 'a>(
    i18n: &I18n,
    title_key: &str,
    sub_key: &str,
    desc_key: &str,
) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(sub_key))
                .size(typography::MONO_LABEL)
                .color(palette::BRAND_RED),
        )
        .push(
            Text::new(i18n.tr(desc_key))
                .size(typography::BODY)
                .color(palette::TEXT_GRAY),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// "Productora Visual Integral" statement block.
pub fn manifesto<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let scene = Text::new(i18n.tr("manifesto-scene"))
        .size(typography::MONO_LABEL)
        .color(palette::TEXT_GRAY);

    let title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("manifesto-brand")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("manifesto-title")).size(typography::TITLE_LG));

    let statement = Text::new(i18n.tr("manifesto-statement"))
        .size(typography::LEAD)
        .color(palette::TEXT_GRAY);

    let badge = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr("manifesto-badge-kicker"))
                    .size(typography::CAPTION)
                    .color(palette::BRAND_RED),
            )
            .push(Text::new(i18n.tr("manifesto-badge")).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .style(styles::container::card);

    Column::new()
        .spacing(spacing::LG)
        .push(scene)
        .push(title)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(Container::new(statement).width(Length::FillPortion(2)))
                .push(Container::new(badge).width(Length::FillPortion(1))),
        )
        .into()
}

/// "Qué Hacemos": the three service columns.
pub fn services<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let lead = Text::new(i18n.tr("services-lead")).size(typography::LEAD);

    let columns = Row::new()
        .spacing(spacing::MD)
        .push(offer_card(
            i18n,
            "services-av-title",
            "services-av-sub",
            "services-av-desc",
        ))
        .push(offer_card(
            i18n,
            "services-photo-title",
            "services-photo-sub",
            "services-photo-desc",
        ))
        .push(offer_card(
            i18n,
            "services-post-title",
            "services-post-sub",
            "services-post-desc",
        ));

    Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n, "01", "services-kicker"))
        .push(lead)
        .push(columns)
        .into()
}

/// "Nuestros Sistemas": the four production offers.
pub fn systems<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let top = Row::new()
        .spacing(spacing::MD)
        .push(offer_card(
            i18n,
            "systems-integral-title",
            "systems-integral-sub",
            "systems-integral-desc",
        ))
        .push(offer_card(
            i18n,
            "systems-monthly-title",
            "systems-monthly-sub",
            "systems-monthly-desc",
        ));

    let bottom = Row::new()
        .spacing(spacing::MD)
        .push(offer_card(
            i18n,
            "systems-documentary-title",
            "systems-documentary-sub",
            "systems-documentary-desc",
        ))
        .push(offer_card(
            i18n,
            "systems-express-title",
            "systems-express-sub",
            "systems-express-desc",
        ));

    Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n, "02", "systems-kicker"))
        .push(Column::new().spacing(spacing::MD).push(top).push(bottom))
        .into()
}

/// "Cómo Trabajamos": the three numbered phases.
pub fn process<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let mut phases = Row::new().spacing(spacing::MD);
    for n in 1..=3 {
        let phase = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(i18n.tr(&format!("process-phase-{n}")))
                    .size(typography::MONO_LABEL)
                    .color(palette::BRAND_RED),
            )
            .push(Text::new(i18n.tr(&format!("process-title-{n}"))).size(typography::TITLE_SM))
            .push(
                Text::new(i18n.tr(&format!("process-desc-{n}")))
                    .size(typography::BODY)
                    .color(palette::TEXT_GRAY),
            );
        phases = phases.push(
            Container::new(phase)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n, "03", "process-kicker"))
        .push(phases)
        .into()
}

/// Differential: five label/value rows plus the closing line.
pub fn differential<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let mut rows = Column::new().spacing(spacing::SM);
    for n in 1..=5 {
        rows = rows.push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    Container::new(
                        Text::new(i18n.tr(&format!("differential-label-{n}")))
                            .size(typography::MONO_LABEL)
                            .color(palette::TEXT_GRAY),
                    )
                    .width(Length::Fixed(sizing::CONTENT_WIDTH * 0.22)),
                )
                .push(Text::new(i18n.tr(&format!("differential-value-{n}"))).size(typography::BODY)),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n, "04", "differential-kicker"))
        .push(rows)
        .push(
            Text::new(i18n.tr("differential-closing"))
                .size(typography::LEAD)
                .color(palette::WHITE),
        )
        .into()
}

/// "Para Quiénes": the five client profiles.
pub fn audience<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let mut profiles = Column::new().spacing(spacing::XS);
    for n in 1..=5 {
        profiles = profiles.push(
            Text::new(format!("— {}", i18n.tr(&format!("audience-profile-{n}"))))
                .size(typography::BODY)
                .color(palette::TEXT_GRAY),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n, "05", "audience-kicker"))
        .push(profiles)
        .into()
}
