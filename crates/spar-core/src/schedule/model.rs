//! Schedule domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Language;

/// Project phase, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Planning,
    Design,
    Development,
    Testing,
    Deployment,
}

impl PhaseKind {
    /// All phases in delivery order. Allocations sum to 100.
    pub const ALL: [PhaseKind; 5] = [
        Self::Planning,
        Self::Design,
        Self::Development,
        Self::Testing,
        Self::Deployment,
    ];

    /// Share of the total duration, in percent.
    pub fn allocation_percent(&self) -> u32 {
        match self {
            Self::Planning => 10,
            Self::Design => 20,
            Self::Development => 40,
            Self::Testing => 20,
            Self::Deployment => 10,
        }
    }

    /// Display name.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Planning) => "Planning",
            (Language::En, Self::Design) => "Design",
            (Language::En, Self::Development) => "Development",
            (Language::En, Self::Testing) => "Testing",
            (Language::En, Self::Deployment) => "Deployment",
            (Language::Es, Self::Planning) => "Planificación",
            (Language::Es, Self::Design) => "Diseño",
            (Language::Es, Self::Development) => "Desarrollo",
            (Language::Es, Self::Testing) => "Pruebas",
            (Language::Es, Self::Deployment) => "Despliegue",
        }
    }
}

/// A dated phase of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: PhaseKind,
    pub allocation_percent: u32,
    /// Sum of the allocations of the preceding phases.
    pub offset_percent: u32,
    pub day_count: u32,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
}

/// Five contiguous phases covering a requested duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start_date: NaiveDate,
    /// Duration the schedule was requested for.
    pub total_duration: i64,
    pub phases: Vec<Phase>,
    pub overall_end_date: NaiveDate,
    /// Sum of phase day counts. May differ from `total_duration`.
    pub total_scheduled_days: u32,
}

impl Schedule {
    /// Scheduled days minus requested days.
    ///
    /// Saturates for requested durations near `i64::MIN`.
    pub fn drift(&self) -> i64 {
        i64::from(self.total_scheduled_days).saturating_sub(self.total_duration)
    }

    /// Phase of the given kind.
    pub fn phase(&self, kind: PhaseKind) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == kind)
    }
}
