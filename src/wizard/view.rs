// SPDX-License-Identifier: MPL-2.0
//! Wizard messages, update and rendering.

use super::plan::{IntervalTime, PlanRequest, ScheduleType, UsageUnit};
use super::state::{Step, StepError, Wizard};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, text, text_input, Button, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Messages emitted by the wizard.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SelectAsset(u32),
    ScheduleTypeSelected(ScheduleType),
    IntervalTimeSelected(IntervalTime),
    IntervalUsageChanged(String),
    UsageUnitSelected(UsageUnit),
    TaskChanged(usize, String),
    AddTask,
    RemoveTask(usize),
    TechniciansChanged(String),
    EstimatedTimeChanged(String),
    SkillsChanged(String),
    Prev,
    Next,
    Finish,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Rejected(StepError),
    Submitted(PlanRequest),
    Cancelled,
}

/// Process a wizard message and return the corresponding event.
pub fn update(wizard: &mut Wizard, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            wizard.search_assets(&query);
        }
        Message::SelectAsset(id) => {
            wizard.select_asset(id);
        }
        Message::ScheduleTypeSelected(kind) => wizard.inputs_mut().schedule_type = kind,
        Message::IntervalTimeSelected(interval) => wizard.inputs_mut().interval_time = interval,
        Message::IntervalUsageChanged(value) => wizard.inputs_mut().interval_usage = value,
        Message::UsageUnitSelected(unit) => wizard.inputs_mut().usage_unit = unit,
        Message::TaskChanged(index, value) => wizard.set_task(index, value),
        Message::AddTask => wizard.add_task(),
        Message::RemoveTask(index) => wizard.remove_task(index),
        Message::TechniciansChanged(value) => wizard.inputs_mut().technicians = value,
        Message::EstimatedTimeChanged(value) => wizard.inputs_mut().estimated_time = value,
        Message::SkillsChanged(value) => wizard.inputs_mut().skills = value,
        Message::Prev => {
            wizard.prev();
        }
        Message::Next => {
            if let Err(error) = wizard.next() {
                return Event::Rejected(error);
            }
        }
        Message::Finish => {
            return match wizard.finish() {
                Ok(request) => Event::Submitted(request),
                Err(error) => Event::Rejected(error),
            };
        }
        Message::Cancel => return Event::Cancelled,
    }
    Event::None
}

/// Contextual data needed to render the wizard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub wizard: &'a Wizard,
}

/// Render the wizard body: step header, current step and navigation.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let step = ctx.wizard.step();
    let step_label = ctx.i18n.tr_with_args(
        "wizard-step-counter",
        &[
            ("current", &step.number().to_string()),
            ("total", &Step::ALL.len().to_string()),
        ],
    );

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("wizard-title")).size(typography::TITLE_MD))
        .push(Text::new(step_label).size(typography::CAPTION))
        .push(Text::new(ctx.i18n.tr(step.i18n_key())).size(typography::TITLE_SM));

    let body = match step {
        Step::Asset => view_asset(&ctx),
        Step::Schedule => view_schedule(&ctx),
        Step::Tasks => view_tasks(&ctx),
        Step::Resources => view_resources(&ctx),
        Step::Summary => view_summary(&ctx),
    };

    column![header, body, view_buttons(&ctx)]
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .style(if selected {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .into()
}

fn view_asset<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inputs = ctx.wizard.inputs();
    let search = text_input(&ctx.i18n.tr("wizard-asset-search"), &inputs.asset_query)
        .on_input(Message::QueryChanged)
        .padding(spacing::XS);

    let results = ctx
        .wizard
        .search_results()
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |col, asset| {
            col.push(
                button(text(asset.label()).size(typography::BODY))
                    .width(Length::Fill)
                    .on_press(Message::SelectAsset(asset.id))
                    .style(styles::button::menu_item),
            )
        });

    let selected = match &inputs.selected_asset {
        Some(asset) => ctx.i18n.tr_with_args(
            "wizard-asset-selected",
            &[("asset", &asset.label()), ("location", &asset.location)],
        ),
        None => ctx.i18n.tr("wizard-asset-none"),
    };

    column![search, results, Text::new(selected).size(typography::CAPTION)]
        .spacing(spacing::SM)
        .into()
}

fn view_schedule<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inputs = ctx.wizard.inputs();

    let kinds = Row::new()
        .spacing(spacing::XS)
        .push(choice(
            ctx.i18n.tr("schedule-type-time"),
            inputs.schedule_type == ScheduleType::Time,
            Message::ScheduleTypeSelected(ScheduleType::Time),
        ))
        .push(choice(
            ctx.i18n.tr("schedule-type-usage"),
            inputs.schedule_type == ScheduleType::Usage,
            Message::ScheduleTypeSelected(ScheduleType::Usage),
        ));

    let panel: Element<'a, Message> = match inputs.schedule_type {
        ScheduleType::Time => IntervalTime::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, interval| {
                row.push(choice(
                    ctx.i18n.tr(interval.i18n_key()),
                    inputs.interval_time == *interval,
                    Message::IntervalTimeSelected(*interval),
                ))
            })
            .into(),
        ScheduleType::Usage => {
            let units = UsageUnit::ALL
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, unit| {
                    row.push(choice(
                        ctx.i18n.tr(unit.i18n_key()),
                        inputs.usage_unit == *unit,
                        Message::UsageUnitSelected(*unit),
                    ))
                });
            column![
                text_input(&ctx.i18n.tr("wizard-usage-interval"), &inputs.interval_usage)
                    .on_input(Message::IntervalUsageChanged)
                    .padding(spacing::XS),
                units
            ]
            .spacing(spacing::SM)
            .into()
        }
    };

    column![kinds, panel].spacing(spacing::MD).into()
}

fn view_tasks<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("wizard-task-placeholder");
    let remove_label = ctx.i18n.tr("wizard-task-remove");

    let rows = ctx.wizard.inputs().tasks.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |col, (index, task)| {
            col.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(
                        text_input(&placeholder, task)
                            .on_input(move |value| Message::TaskChanged(index, value))
                            .padding(spacing::XS),
                    )
                    .push(
                        button(text(remove_label.clone()).size(typography::CAPTION))
                            .on_press(Message::RemoveTask(index))
                            .style(styles::button::danger),
                    ),
            )
        },
    );

    column![
        rows,
        button(text(ctx.i18n.tr("wizard-task-add")).size(typography::BODY))
            .on_press(Message::AddTask)
            .style(styles::button::unselected)
    ]
    .spacing(spacing::SM)
    .into()
}

fn view_resources<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inputs = ctx.wizard.inputs();
    column![
        text_input(&ctx.i18n.tr("wizard-technicians"), &inputs.technicians)
            .on_input(Message::TechniciansChanged)
            .padding(spacing::XS),
        text_input(&ctx.i18n.tr("wizard-estimated-time"), &inputs.estimated_time)
            .on_input(Message::EstimatedTimeChanged)
            .padding(spacing::XS),
        text_input(&ctx.i18n.tr("wizard-skills"), &inputs.skills)
            .on_input(Message::SkillsChanged)
            .padding(spacing::XS),
    ]
    .spacing(spacing::SM)
    .into()
}

fn view_summary<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let summary = ctx.wizard.summary();

    let schedule = match (summary.interval_time, summary.interval_usage, summary.usage_unit) {
        (Some(interval), _, _) => ctx.i18n.tr(interval.i18n_key()),
        (None, Some(amount), Some(unit)) => {
            format!("{amount} {}", ctx.i18n.tr(unit.i18n_key()))
        }
        _ => String::new(),
    };

    let tasks = summary
        .tasks
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |col, task| {
            col.push(Text::new(format!("• {task}")).size(typography::BODY))
        });

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("wizard-summary-asset")).size(typography::CAPTION))
        .push(Text::new(summary.asset_name.to_owned()).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("wizard-summary-schedule")).size(typography::CAPTION))
        .push(Text::new(schedule).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("wizard-summary-tasks")).size(typography::CAPTION))
        .push(tasks);

    if let Some(resources) = summary.resources {
        content = content
            .push(Text::new(ctx.i18n.tr("wizard-summary-resources")).size(typography::CAPTION))
            .push(
                Text::new(ctx.i18n.tr_with_args(
                    "wizard-summary-resources-line",
                    &[
                        ("technicians", &resources.technicians),
                        ("time", &resources.time),
                        ("skills", &resources.skills),
                    ],
                ))
                .size(typography::BODY),
            );
    }

    content.into()
}

fn nav_button<'a>(
    label: String,
    message: Message,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(message)
        .style(style)
}

fn view_buttons<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.wizard.buttons();
    let i18n = ctx.i18n;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .push(nav_button(
            i18n.tr("wizard-cancel"),
            Message::Cancel,
            styles::button::unselected,
        ))
        .push(Space::new().width(Length::Fill));

    if state.prev {
        row = row.push(nav_button(
            i18n.tr("wizard-prev"),
            Message::Prev,
            styles::button::unselected,
        ));
    }
    if state.next {
        row = row.push(nav_button(
            i18n.tr("wizard-next"),
            Message::Next,
            styles::button::primary,
        ));
    }
    if state.finish {
        row = row.push(nav_button(
            i18n.tr("wizard-finish"),
            Message::Finish,
            styles::button::primary,
        ));
    }
    row.into()
}
