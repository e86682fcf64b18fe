// SPDX-License-Identifier: MPL-2.0
//! Typography page: every variant, the color variants and a heading hierarchy.

use super::{bullets, page, section};
use crate::ui::components::Typography;
use crate::ui::design_tokens::spacing;
use crate::ui::variants::{TextColor, Variant};
use iced::alignment::Vertical;
use iced::widget::{Column, Row};
use iced::Element;

fn sample_text(variant: Variant) -> &'static str {
    match variant {
        Variant::H1 => "Heading 1",
        Variant::H2 => "Heading 2",
        Variant::H3 => "Heading 3",
        Variant::H4 => "Heading 4",
        Variant::H5 => "Heading 5",
        Variant::H6 => "Heading 6",
        Variant::P => "Paragraph text",
        Variant::Label => "Form label",
        Variant::Caption => "Caption text",
        Variant::Helper => "Helper text for form fields",
    }
}

/// Small print is muted, as on the reference page.
fn sample_color(variant: Variant) -> TextColor {
    match variant {
        Variant::Caption | Variant::Helper => TextColor::Muted,
        _ => TextColor::Default,
    }
}

fn all_variants<'a, Message: 'a>() -> Element<'a, Message> {
    Variant::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, &variant| {
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Center)
                    .push(
                        Typography::new(variant.name())
                            .variant(Variant::Caption)
                            .color(TextColor::Muted)
                            .view(),
                    )
                    .push(
                        Typography::new(sample_text(variant))
                            .variant(variant)
                            .color(sample_color(variant))
                            .view(),
                    ),
            )
        })
        .into()
}

fn color_variants<'a, Message: 'a>() -> Element<'a, Message> {
    TextColor::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &color| {
            let row = [Variant::H4, Variant::P, Variant::Caption]
                .iter()
                .fold(
                    Row::new().spacing(spacing::LG).align_y(Vertical::Center),
                    |row, &variant| {
                        row.push(
                            Typography::new(format!("{} {}", color.name(), variant.name()))
                                .variant(variant)
                                .color(color)
                                .view(),
                        )
                    },
                );
            column.push(row)
        })
        .into()
}

fn hierarchy<'a, Message: 'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Typography::new("Proper heading hierarchy")
                .variant(Variant::H1)
                .view(),
        )
        .push(Typography::new("Subsection").variant(Variant::H2).view())
        .push(Typography::new("Supporting content").view())
        .push(Typography::new("Do's and Don'ts").variant(Variant::H3).view())
        .push(bullets(&[
            "✓ Use semantic heading levels in order",
            "✓ Maintain sufficient color contrast",
            "✕ Don't use headings just for visual styling",
            "✕ Avoid tiny font sizes below 12px",
        ]))
        .into()
}

/// Render the typography page. It is stateless and emits no messages.
#[must_use]
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    page(
        "Typography",
        "Text variants from the design system.",
        vec![
            section(
                "All variants",
                "Every variant shown together for comparison.",
                all_variants(),
            ),
            section(
                "Colors",
                "Each color variant across a heading, body and caption size.",
                color_variants(),
            ),
            section(
                "Hierarchy",
                "Never skip heading levels; keep one h1 per page.",
                hierarchy(),
            ),
        ],
    )
}
