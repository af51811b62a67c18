// SPDX-License-Identifier: MPL-2.0
//! New-asset form shown in the asset modal.
//!
//! Every field is validated on submit. Iced text inputs report no blur, so
//! after the first submit a field is revalidated each time it is edited.

use crate::forms::{FieldError, FieldRules, Form};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, row, text, text_input, Column, Space, Text};
use iced::{Element, Length, Theme};
use std::collections::HashMap;

/// Field names, in display order, with their label keys.
pub const FIELDS: [(&str, &str); 6] = [
    ("name", "asset-field-name"),
    ("code", "asset-field-code"),
    ("location", "asset-field-location"),
    ("contact", "asset-field-contact"),
    ("manual", "asset-field-manual"),
    ("hours", "asset-field-hours"),
];

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(&'static str, String),
    Submit,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Every field passed. Carries the trimmed values.
    Saved(HashMap<String, String>),
    Invalid(usize),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct State {
    form: Form,
    values: HashMap<String, String>,
    errors: HashMap<String, FieldError>,
    submitted: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let form = Form::new()
            .field("name", FieldRules::text().required().min_length(3).max_length(80))
            .field("code", asset_code_rules())
            .field("location", FieldRules::text().max_length(120))
            .field("contact", FieldRules::email())
            .field("manual", FieldRules::url())
            .field("hours", FieldRules::number().min(0.0).max(100_000.0));

        Self {
            form,
            values: HashMap::new(),
            errors: HashMap::new(),
            submitted: false,
        }
    }

    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    fn revalidate(&mut self, field: &str) {
        match self.form.validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(error) => {
                self.errors.insert(field.to_owned(), error);
            }
        }
    }
}

fn asset_code_rules() -> FieldRules {
    let rules = FieldRules::text().required();
    match rules.clone().pattern(r"^[A-Z]{3}-\d{2,}$") {
        Ok(with_pattern) => with_pattern,
        Err(error) => {
            log::error!("asset code pattern rejected: {error}");
            rules
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            state.values.insert(field.to_owned(), value);
            if state.submitted {
                state.revalidate(field);
            }
            Event::None
        }
        Message::Submit => {
            state.submitted = true;
            match state.form.validate(&state.values) {
                Ok(()) => {
                    let values = state
                        .values
                        .iter()
                        .map(|(k, v)| (k.clone(), v.trim().to_owned()))
                        .collect();
                    *state = State::new();
                    Event::Saved(values)
                }
                Err(errors) => {
                    let count = errors.len();
                    state.errors = errors.into_iter().collect();
                    Event::Invalid(count)
                }
            }
        }
        Message::Cancel => {
            *state = State::new();
            Event::Cancelled
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let fields = FIELDS
        .iter()
        .fold(Column::new().spacing(spacing::SM), |col, &(name, label)| {
            let mut group = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr(label)).size(typography::CAPTION))
                .push(
                    text_input("", state.value(name))
                        .on_input(move |value| Message::FieldChanged(name, value))
                        .padding(spacing::XS),
                );
            if let Some(error) = state.error(name) {
                group = group.push(
                    text(error.message(i18n))
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::DANGER_500),
                        }),
                );
            }
            col.push(group)
        });

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text(i18n.tr("form-cancel")).size(typography::BODY))
            .on_press(Message::Cancel)
            .style(styles::button::unselected),
        button(text(i18n.tr("form-save")).size(typography::BODY))
            .on_press(Message::Submit)
            .style(styles::button::primary),
    ]
    .spacing(spacing::XS);

    column![
        Text::new(i18n.tr("asset-modal-title")).size(typography::TITLE_MD),
        fields,
        buttons
    ]
    .spacing(spacing::MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State, field: &'static str, value: &str) {
        update(state, Message::FieldChanged(field, value.to_string()));
    }

    #[test]
    fn submit_with_empty_form_reports_required_fields() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::Submit), Event::Invalid(2));
        assert_eq!(state.error("name"), Some(&FieldError::Required));
        assert_eq!(state.error("code"), Some(&FieldError::Required));
    }

    #[test]
    fn errors_clear_as_fields_are_fixed_after_submit() {
        let mut state = State::new();
        update(&mut state, Message::Submit);
        fill(&mut state, "name", "Bomba de agua");
        assert!(state.error("name").is_none());
        fill(&mut state, "code", "bom-1");
        assert_eq!(state.error("code"), Some(&FieldError::Pattern));
    }

    #[test]
    fn valid_submit_returns_trimmed_values_and_resets() {
        let mut state = State::new();
        fill(&mut state, "name", "  Compresor  ");
        fill(&mut state, "code", "COM-07");
        fill(&mut state, "hours", "1200");

        match update(&mut state, Message::Submit) {
            Event::Saved(values) => {
                assert_eq!(values.get("name").map(String::as_str), Some("Compresor"));
            }
            other => panic!("expected saved, got {other:?}"),
        }
        assert_eq!(state.value("name"), "");
    }

    #[test]
    fn no_errors_shown_before_first_submit() {
        let mut state = State::new();
        fill(&mut state, "contact", "not-an-email");
        assert!(state.error("contact").is_none());
    }
}
