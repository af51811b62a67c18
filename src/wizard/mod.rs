// SPDX-License-Identifier: MPL-2.0
//! Preventive maintenance plan wizard.
//!
//! Five steps: asset, schedule, tasks, resources and summary. Moving forward
//! validates the current step and collects its inputs. Moving back never
//! validates. The summary step produces the [`PlanRequest`] that creates the
//! plan; sending it is up to the caller.
//!
//! - [`state`] - Steps, validation and collected data
//! - [`plan`] - Payload types and the request
//! - [`view`] - Messages, update and rendering

pub mod plan;
pub mod state;
pub mod view;

pub use plan::{
    Asset, IntervalTime, PlanData, PlanRequest, Resources, ScheduleType, Task, UsageUnit,
    PLAN_ENDPOINT,
};
pub use state::{ButtonState, Inputs, Step, StepError, Summary, Wizard};
pub use view::{update, view, Event, Message, ViewContext};
