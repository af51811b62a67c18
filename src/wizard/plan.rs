// SPDX-License-Identifier: MPL-2.0
//! Preventive plan payload and the request that submits it.

use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Endpoint that creates preventive plans.
pub const PLAN_ENDPOINT: &str = "/maintenance/api/preventive";

/// An asset a plan can be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub location: String,
}

impl Asset {
    pub fn new(
        id: u32,
        code: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Label shown once the asset is selected.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    /// Case-insensitive match on code, name or location.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.code, &self.name, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    #[default]
    Time,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalTime {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Annual,
}

impl IntervalTime {
    pub const ALL: [IntervalTime; 4] = [
        IntervalTime::Daily,
        IntervalTime::Weekly,
        IntervalTime::Monthly,
        IntervalTime::Annual,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            IntervalTime::Daily => "interval-daily",
            IntervalTime::Weekly => "interval-weekly",
            IntervalTime::Monthly => "interval-monthly",
            IntervalTime::Annual => "interval-annual",
        }
    }
}

impl fmt::Display for IntervalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntervalTime::Daily => "daily",
            IntervalTime::Weekly => "weekly",
            IntervalTime::Monthly => "monthly",
            IntervalTime::Annual => "annual",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageUnit {
    #[default]
    Hours,
    Km,
    Cycles,
}

impl UsageUnit {
    pub const ALL: [UsageUnit; 3] = [UsageUnit::Hours, UsageUnit::Km, UsageUnit::Cycles];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            UsageUnit::Hours => "usage-unit-hours",
            UsageUnit::Km => "usage-unit-km",
            UsageUnit::Cycles => "usage-unit-cycles",
        }
    }
}

impl fmt::Display for UsageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UsageUnit::Hours => "hours",
            UsageUnit::Km => "km",
            UsageUnit::Cycles => "cycles",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
}

/// People and time a plan needs. Values are sent as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resources {
    pub technicians: String,
    pub time: String,
    pub skills: String,
}

/// Data collected step by step. Fields stay `None` until their step is
/// completed, and a usage plan carries no time interval (and vice versa).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<ScheduleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_time: Option<IntervalTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_unit: Option<UsageUnit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
}

/// A ready-to-send plan creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub payload: PlanData,
}

impl PlanRequest {
    pub const CONTENT_TYPE: &'static str = "application/json";

    #[must_use]
    pub fn new(payload: PlanData) -> Self {
        Self {
            method: "POST",
            path: PLAN_ENDPOINT,
            payload,
        }
    }

    /// JSON request body.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be encoded.
    pub fn body(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_matches_ignore_case() {
        let asset = Asset::new(7, "BOM-03", "Bomba centrífuga", "Planta Norte");
        assert!(asset.matches("bomba"));
        assert!(asset.matches("bom-0"));
        assert!(asset.matches("NORTE"));
        assert!(!asset.matches("compresor"));
        assert_eq!(asset.label(), "BOM-03 - Bomba centrífuga");
    }

    #[test]
    fn time_plan_body_omits_usage_fields() {
        let payload = PlanData {
            asset_id: Some(7),
            asset_name: Some("Bomba".into()),
            schedule_type: Some(ScheduleType::Time),
            interval_time: Some(IntervalTime::Weekly),
            tasks: vec![Task {
                description: "Revisar sellos".into(),
            }],
            resources: Some(Resources {
                technicians: "2".into(),
                time: "1.5".into(),
                skills: "Mecánica".into(),
            }),
            ..PlanData::default()
        };
        let request = PlanRequest::new(payload);
        let body: serde_json::Value =
            serde_json::from_str(&request.body().expect("serializable")).expect("valid json");

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/maintenance/api/preventive");
        assert_eq!(
            body,
            json!({
                "asset_id": 7,
                "asset_name": "Bomba",
                "schedule_type": "time",
                "interval_time": "weekly",
                "tasks": [{ "description": "Revisar sellos" }],
                "resources": { "technicians": "2", "time": "1.5", "skills": "Mecánica" }
            })
        );
    }

    #[test]
    fn usage_plan_serializes_unit_lowercase() {
        let payload = PlanData {
            schedule_type: Some(ScheduleType::Usage),
            interval_usage: Some("500".into()),
            usage_unit: Some(UsageUnit::Km),
            ..PlanData::default()
        };
        let body = PlanRequest::new(payload).body().expect("serializable");
        assert!(body.contains(r#""usage_unit":"km""#));
        assert!(!body.contains("interval_time"));
    }
}
