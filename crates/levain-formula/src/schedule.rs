//! Step grouping and timelines.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use levain_core::{Step, StepId};
use levain_timeparsing::{format_minutes, parse_duration};

/// A run of consecutive steps sharing a group id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepGroup<'a> {
    pub group_id: Option<String>,
    pub steps: Vec<&'a Step>,
}

impl StepGroup<'_> {
    pub fn flour_grams(&self) -> f64 {
        self.steps.iter().map(|s| s.flour_grams()).sum()
    }

    pub fn water_grams(&self) -> f64 {
        self.steps.iter().map(|s| s.water_grams()).sum()
    }
}

/// Cluster consecutive steps with the same group id, keeping order.
///
/// Only adjacent steps merge: `Day1, Day2, Day1` yields three groups.
/// Ungrouped neighbours form a group with no id.
pub fn group_steps(steps: &[Step]) -> Vec<StepGroup<'_>> {
    let mut groups: Vec<StepGroup<'_>> = Vec::new();
    for step in steps {
        let group_id = step.group_id();
        if let Some(last) = groups.last_mut() {
            if last.group_id == group_id {
                last.steps.push(step);
                continue;
            }
        }
        groups.push(StepGroup {
            group_id,
            steps: vec![step],
        });
    }
    groups
}

/// One step placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStep {
    pub id: StepId,
    pub name: String,
    /// Minutes from the first step's start.
    pub offset_minutes: f64,
    /// Parsed duration; 0 when the duration text is not recognized.
    pub minutes: f64,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

/// Steps laid end to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub steps: Vec<ScheduledStep>,
    pub total_minutes: f64,
    pub total_display: String,
    /// Number of steps whose duration could not be parsed.
    pub invalid: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

/// Lay steps end to end starting at `start`.
///
/// Without a start time only offsets are filled in. Steps with an
/// unrecognized duration take no time and are counted in
/// [`Timeline::invalid`].
pub fn timeline(steps: &[Step], start: Option<NaiveDateTime>) -> Timeline {
    let mut scheduled = Vec::with_capacity(steps.len());
    let mut offset = 0.0;
    let mut invalid = 0;
    let mut clock = start;

    for step in steps {
        let parsed = parse_duration(&step.duration);
        if !parsed.is_valid {
            invalid += 1;
        }
        let delta = parsed.to_time_delta().unwrap_or_else(TimeDelta::zero);
        let step_start = clock;
        let step_end = step_start.and_then(|t| t.checked_add_signed(delta));

        scheduled.push(ScheduledStep {
            id: step.id.clone(),
            name: step.name.clone(),
            offset_minutes: offset,
            minutes: parsed.minutes,
            valid: parsed.is_valid,
            start: step_start,
            end: step_end,
        });

        offset += parsed.minutes;
        clock = step_end;
    }

    Timeline {
        steps: scheduled,
        total_minutes: offset,
        total_display: format_minutes(offset),
        invalid,
        end: clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn steps() -> Vec<Step> {
        vec![
            Step::new("1", "Day1. Autolyse", "30 minutes"),
            Step::new("2", "Day1. Bulk Fermentation", "4 hours"),
            Step::new("3", "Day2. Bake", "35 minutes"),
            Step::new("4", "Cool", "1h"),
            Step::new("5", "Day1. Notes", "whenever"),
        ]
    }

    #[test]
    fn groups_consecutive_only() {
        let steps = steps();
        let groups = group_steps(&steps);
        let shape: Vec<(Option<&str>, usize)> = groups
            .iter()
            .map(|g| (g.group_id.as_deref(), g.steps.len()))
            .collect();
        assert_eq!(
            shape,
            vec![(Some("Day1"), 2), (Some("Day2"), 1), (None, 1), (Some("Day1"), 1)]
        );
    }

    #[test]
    fn group_totals() {
        let mut steps = vec![Step::new("1", "Day1. Autolyse", "30 minutes")];
        steps[0].ingredients = vec![
            levain_core::StepIngredient {
                name: "flour".into(),
                kind: levain_core::IngredientType::Flour,
                unit: "g".into(),
                default_value: 500.0,
                value: None,
                scaling: None,
            },
            levain_core::StepIngredient {
                name: "milk".into(),
                kind: levain_core::IngredientType::Water,
                unit: "g".into(),
                default_value: 0.0,
                value: Some(100.0),
                scaling: Some(0.9),
            },
        ];
        let groups = group_steps(&steps);
        assert_eq!(groups[0].flour_grams(), 500.0);
        assert_eq!(groups[0].water_grams(), 90.0);
    }

    #[test]
    fn empty_steps() {
        assert!(group_steps(&[]).is_empty());
        let t = timeline(&[], None);
        assert_eq!(t.total_minutes, 0.0);
        assert_eq!(t.total_display, "0 minutes");
        assert_eq!(t.end, None);
    }

    #[test]
    fn offsets_without_start() {
        let t = timeline(&steps(), None);
        let offsets: Vec<f64> = t.steps.iter().map(|s| s.offset_minutes).collect();
        assert_eq!(offsets, vec![0.0, 30.0, 270.0, 305.0, 365.0]);
        assert_eq!(t.total_minutes, 365.0);
        assert_eq!(t.total_display, "6h 5m");
        assert_eq!(t.invalid, 1);
        assert!(!t.steps[4].valid);
        assert!(t.steps.iter().all(|s| s.start.is_none()));
    }

    #[test]
    fn wall_clock_with_start() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 4)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let t = timeline(&steps(), Some(start));

        let at = |h, m| {
            NaiveDate::from_ymd_opt(2024, 5, 4)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
        };
        assert_eq!(t.steps[1].start, Some(at(8, 30)));
        assert_eq!(t.steps[2].end, Some(at(13, 5)));
        // invalid duration takes no time
        assert_eq!(t.steps[4].start, t.steps[4].end);
        assert_eq!(t.end, Some(at(14, 5)));
    }
}
