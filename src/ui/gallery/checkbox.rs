// SPDX-License-Identifier: MPL-2.0
//! Checkbox page: a single toggle, a group and the disabled states.

use super::{page, section};
use crate::ui::components::{Checkbox, Typography};
use crate::ui::design_tokens::spacing;
use crate::ui::variants::{TextColor, Variant};
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOption {
    pub id: u32,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    accepted: bool,
    group: Vec<GroupOption>,
}

impl Default for State {
    fn default() -> Self {
        let group = (1..=3)
            .map(|id| GroupOption {
                id,
                label: format!("Option {id}"),
                checked: id == 2,
            })
            .collect();
        Self {
            accepted: false,
            group,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AcceptToggled(bool),
    OptionToggled(u32),
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::AcceptToggled(checked) => self.accepted = checked,
            Message::OptionToggled(id) => {
                if let Some(option) = self.group.iter_mut().find(|o| o.id == id) {
                    option.checked = !option.checked;
                }
            }
        }
    }

    #[must_use]
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    #[must_use]
    pub fn group(&self) -> &[GroupOption] {
        &self.group
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.group.iter().filter(|o| o.checked).count()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let basic = Checkbox::new("Accept Terms", self.accepted)
            .on_toggle(Message::AcceptToggled)
            .view();

        let group = self
            .group
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, option| {
                let id = option.id;
                column.push(
                    Checkbox::new(option.label.clone(), option.checked)
                        .on_toggle(move |_| Message::OptionToggled(id))
                        .view(),
                )
            })
            .push(
                Typography::new(format!("{} of {} selected", self.selected_count(), self.group.len()))
                    .variant(Variant::Caption)
                    .color(TextColor::Muted)
                    .view(),
            );

        let disabled = Column::new()
            .spacing(spacing::SM)
            .push(Checkbox::new("Disabled unchecked", false).disabled(true).view())
            .push(Checkbox::new("Disabled checked", true).disabled(true).view());

        page(
            "Checkbox",
            "Labelled boolean toggles.",
            vec![
                section("Basic", "A single labelled checkbox.", basic),
                section(
                    "Group",
                    "Options toggle independently of each other.",
                    group,
                ),
                section(
                    "Disabled",
                    "Disabled checkboxes keep their value and ignore clicks.",
                    disabled,
                ),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_starts_with_second_option_checked() {
        let state = State::default();
        let checked: Vec<u32> = state
            .group()
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.id)
            .collect();
        assert_eq!(checked, vec![2]);
        assert!(!state.accepted());
    }

    #[test]
    fn toggling_an_option_flips_only_that_option() {
        let mut state = State::default();
        state.update(Message::OptionToggled(1));
        state.update(Message::OptionToggled(2));
        assert!(state.group()[0].checked);
        assert!(!state.group()[1].checked);
        assert!(!state.group()[2].checked);
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut state = State::default();
        state.update(Message::OptionToggled(42));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn accept_follows_toggle_value() {
        let mut state = State::default();
        state.update(Message::AcceptToggled(true));
        assert!(state.accepted());
        state.update(Message::AcceptToggled(false));
        assert!(!state.accepted());
    }

    #[test]
    fn view_renders() {
        let state = State::default();
        let _element = state.view();
    }
}
