// SPDX-License-Identifier: MPL-2.0
//! Step navigation, validation and data collection.

use super::plan::{
    Asset, IntervalTime, PlanData, PlanRequest, Resources, ScheduleType, Task, UsageUnit,
};
use std::fmt;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Asset,
    Schedule,
    Tasks,
    Resources,
    Summary,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Asset,
        Step::Schedule,
        Step::Tasks,
        Step::Resources,
        Step::Summary,
    ];

    /// One-based position.
    #[must_use]
    pub fn number(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn next(self) -> Option<Step> {
        Self::ALL.get(self as usize + 1).copied()
    }

    #[must_use]
    pub fn prev(self) -> Option<Step> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Step::Asset => "wizard-step-asset",
            Step::Schedule => "wizard-step-schedule",
            Step::Tasks => "wizard-step-tasks",
            Step::Resources => "wizard-step-resources",
            Step::Summary => "wizard-step-summary",
        }
    }
}

/// Why the wizard refused to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// Step 1 without a selected asset.
    MissingAsset,
    /// Step 3 with a blank task.
    EmptyTask,
    /// Step 3 with no task at all.
    NoTasks,
    /// `finish` before the summary step.
    NotFinished,
}

impl StepError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StepError::MissingAsset => "wizard-error-missing-asset",
            StepError::EmptyTask => "wizard-error-empty-task",
            StepError::NoTasks => "wizard-error-no-tasks",
            StepError::NotFinished => "wizard-error-not-finished",
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.i18n_key())
    }
}

impl std::error::Error for StepError {}

/// Which navigation buttons are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub prev: bool,
    pub next: bool,
    pub finish: bool,
}

/// What the summary step lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    pub asset_name: &'a str,
    pub schedule_type: Option<ScheduleType>,
    pub interval_time: Option<IntervalTime>,
    pub interval_usage: Option<&'a str>,
    pub usage_unit: Option<UsageUnit>,
    pub tasks: Vec<&'a str>,
    pub resources: Option<&'a Resources>,
}

/// Raw inputs, as currently entered on each step.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub asset_query: String,
    pub selected_asset: Option<Asset>,
    pub schedule_type: ScheduleType,
    pub interval_time: IntervalTime,
    pub interval_usage: String,
    pub usage_unit: UsageUnit,
    pub tasks: Vec<String>,
    pub technicians: String,
    pub estimated_time: String,
    pub skills: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            asset_query: String::new(),
            selected_asset: None,
            schedule_type: ScheduleType::default(),
            interval_time: IntervalTime::default(),
            interval_usage: String::new(),
            usage_unit: UsageUnit::default(),
            // One blank row to start typing into.
            tasks: vec![String::new()],
            technicians: String::new(),
            estimated_time: String::new(),
            skills: String::new(),
        }
    }
}

/// Preventive maintenance plan wizard.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    inputs: Inputs,
    data: PlanData,
    catalog: Vec<Asset>,
    results: Vec<Asset>,
}

impl Wizard {
    /// Creates a wizard searching over `catalog`.
    #[must_use]
    pub fn new(catalog: Vec<Asset>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Back to step 1 with blank inputs. The catalog is kept.
    pub fn reset(&mut self) {
        let catalog = std::mem::take(&mut self.catalog);
        *self = Self::new(catalog);
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    /// Data collected from completed steps.
    #[must_use]
    pub fn data(&self) -> &PlanData {
        &self.data
    }

    /// Validates the current step, collects its data and advances.
    ///
    /// # Errors
    ///
    /// Returns the validation failure and stays on the current step.
    pub fn next(&mut self) -> Result<Step, StepError> {
        self.validate_step()?;
        self.collect_step();
        if let Some(next) = self.step.next() {
            log::trace!("wizard: step {} -> {}", self.step.number(), next.number());
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves back one step without validating. Stays on step 1.
    pub fn prev(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Builds the creation request from the collected data.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NotFinished`] before the summary step.
    pub fn finish(&self) -> Result<PlanRequest, StepError> {
        if self.step != Step::Summary {
            return Err(StepError::NotFinished);
        }
        Ok(PlanRequest::new(self.data.clone()))
    }

    #[must_use]
    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            prev: self.step > Step::Asset,
            next: self.step < Step::Summary,
            finish: self.step == Step::Summary,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            asset_name: self.data.asset_name.as_deref().unwrap_or_default(),
            schedule_type: self.data.schedule_type,
            interval_time: self.data.interval_time,
            interval_usage: self.data.interval_usage.as_deref(),
            usage_unit: self.data.usage_unit,
            tasks: self
                .data
                .tasks
                .iter()
                .map(|t| t.description.as_str())
                .collect(),
            resources: self.data.resources.as_ref(),
        }
    }

    /// Filters the catalog by `query`. A blank query clears the results.
    pub fn search_assets(&mut self, query: &str) -> &[Asset] {
        self.inputs.asset_query = query.to_owned();
        let query = query.trim();
        self.results = if query.is_empty() {
            Vec::new()
        } else {
            self.catalog
                .iter()
                .filter(|a| a.matches(query))
                .cloned()
                .collect()
        };
        &self.results
    }

    #[must_use]
    pub fn search_results(&self) -> &[Asset] {
        &self.results
    }

    /// Selects an asset from the catalog. Unknown ids are ignored.
    pub fn select_asset(&mut self, id: u32) -> bool {
        match self.catalog.iter().find(|a| a.id == id) {
            Some(asset) => {
                self.inputs.selected_asset = Some(asset.clone());
                self.results.clear();
                true
            }
            None => {
                log::debug!("wizard: unknown asset id {id}");
                false
            }
        }
    }

    pub fn add_task(&mut self) {
        self.inputs.tasks.push(String::new());
    }

    pub fn remove_task(&mut self, index: usize) {
        if index < self.inputs.tasks.len() {
            self.inputs.tasks.remove(index);
        }
    }

    pub fn set_task(&mut self, index: usize, text: String) {
        if let Some(task) = self.inputs.tasks.get_mut(index) {
            *task = text;
        }
    }

    fn validate_step(&self) -> Result<(), StepError> {
        match self.step {
            Step::Asset if self.inputs.selected_asset.is_none() => Err(StepError::MissingAsset),
            Step::Tasks if self.inputs.tasks.is_empty() => Err(StepError::NoTasks),
            Step::Tasks if self.inputs.tasks.iter().any(|t| t.trim().is_empty()) => {
                Err(StepError::EmptyTask)
            }
            _ => Ok(()),
        }
    }

    fn collect_step(&mut self) {
        let inputs = &self.inputs;
        match self.step {
            Step::Asset => {
                if let Some(asset) = &inputs.selected_asset {
                    self.data.asset_id = Some(asset.id);
                    self.data.asset_name = Some(asset.label());
                }
            }
            Step::Schedule => {
                self.data.schedule_type = Some(inputs.schedule_type);
                match inputs.schedule_type {
                    ScheduleType::Time => {
                        self.data.interval_time = Some(inputs.interval_time);
                        self.data.interval_usage = None;
                        self.data.usage_unit = None;
                    }
                    ScheduleType::Usage => {
                        self.data.interval_time = None;
                        self.data.interval_usage = Some(inputs.interval_usage.trim().to_owned());
                        self.data.usage_unit = Some(inputs.usage_unit);
                    }
                }
            }
            Step::Tasks => {
                self.data.tasks = inputs
                    .tasks
                    .iter()
                    .map(|t| Task {
                        description: t.clone(),
                    })
                    .collect();
            }
            Step::Resources => {
                self.data.resources = Some(Resources {
                    technicians: inputs.technicians.clone(),
                    time: inputs.estimated_time.clone(),
                    skills: inputs.skills.clone(),
                });
            }
            Step::Summary => {}
        }
    }
}
