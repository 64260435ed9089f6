use super::model::{HaccpItem, HaccpLog, HaccpReminder};
use super::ranges::{SafeRange, parse_reading, safe_range_for};
use crate::config::GalleyConfig;
use ahash::AHashMap;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// A reading outside the safe range inferred for its item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation<'a> {
    pub log: &'a HaccpLog,
    pub item: &'a HaccpItem,
    pub reading: f64,
    pub range: SafeRange,
}

/// A reminder whose item has no log inside the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingCheck<'a> {
    pub reminder: &'a HaccpReminder,
    /// Whole hours since the item's most recent log, or the window length if it was never logged.
    pub hours_since_last_check: i64,
}

/// Everything a compliance dashboard needs, computed against one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub score: u32,
    pub total_logs: usize,
    pub violations: Vec<Violation<'a>>,
    pub overdue: Vec<&'a HaccpReminder>,
    pub missing: Vec<MissingCheck<'a>>,
    pub window_hours: i64,
}

/// Turns safety logs and reminders into a score and lists of open issues.
///
/// Every result is a pure function of the inputs and of the evaluation instant
/// fixed at construction. Logs that reference unknown items are ignored, never
/// counted against the score.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    now: DateTime<Utc>,
    config: GalleyConfig,
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::at(Utc::now())
    }
}

impl ComplianceEngine {
    /// Creates an engine evaluating against the current wall-clock time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine evaluating against a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            config: GalleyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GalleyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Percentage of logs that are not out of range, rounded to the nearest integer.
    ///
    /// An empty log list scores 100.
    pub fn compliance_score(&self, logs: &[HaccpLog], items: &[HaccpItem]) -> u32 {
        score(logs.len(), self.violations(logs, items).len())
    }

    /// Out-of-range readings, in log order.
    pub fn violations<'a>(
        &self,
        logs: &'a [HaccpLog],
        items: &'a [HaccpItem],
    ) -> Vec<Violation<'a>> {
        let index = item_index(items);
        logs.iter()
            .filter_map(|log| {
                let item = index.get(log.item_id.as_str()).copied()?;
                let range = safe_range_for(&item.name)?;
                let reading = parse_reading(log.value.as_deref()?)?;
                (!range.contains(reading)).then_some(Violation {
                    log,
                    item,
                    reading,
                    range,
                })
            })
            .collect()
    }

    /// Reminders whose due date has passed. Reminders without a due date are never overdue.
    pub fn overdue_reminders<'a>(&self, reminders: &'a [HaccpReminder]) -> Vec<&'a HaccpReminder> {
        reminders
            .iter()
            .filter(|reminder| reminder.next_check_due.is_some_and(|due| due < self.now))
            .collect()
    }

    /// Reminders whose item has no log within the trailing `window_hours`.
    pub fn missing_checks<'a>(
        &self,
        reminders: &'a [HaccpReminder],
        logs: &[HaccpLog],
        window_hours: i64,
    ) -> Vec<MissingCheck<'a>> {
        let window_start = Duration::try_hours(window_hours)
            .and_then(|window| self.now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut latest: AHashMap<&str, DateTime<Utc>> = AHashMap::new();
        for log in logs {
            latest
                .entry(log.item_id.as_str())
                .and_modify(|ts| *ts = (*ts).max(log.timestamp))
                .or_insert(log.timestamp);
        }

        reminders
            .iter()
            .filter_map(|reminder| {
                let last = latest.get(reminder.item_id.as_str()).copied();
                if last.is_some_and(|ts| ts >= window_start) {
                    return None;
                }
                let hours_since_last_check = last
                    .map(|ts| (self.now - ts).num_hours())
                    .unwrap_or(window_hours);
                Some(MissingCheck {
                    reminder,
                    hours_since_last_check,
                })
            })
            .collect()
    }

    /// Score, violations, overdue reminders and missing checks for the configured window.
    pub fn report<'a>(
        &self,
        logs: &'a [HaccpLog],
        items: &'a [HaccpItem],
        reminders: &'a [HaccpReminder],
    ) -> ComplianceReport<'a> {
        let window_hours = self.config.missing_check_window_hours;
        let violations = self.violations(logs, items);
        let report = ComplianceReport {
            generated_at: self.now,
            score: score(logs.len(), violations.len()),
            total_logs: logs.len(),
            violations,
            overdue: self.overdue_reminders(reminders),
            missing: self.missing_checks(reminders, logs, window_hours),
            window_hours,
        };
        tracing::debug!(
            score = report.score,
            violations = report.violations.len(),
            overdue = report.overdue.len(),
            missing = report.missing.len(),
            "Compliance report computed"
        );
        report
    }
}

fn item_index(items: &[HaccpItem]) -> AHashMap<&str, &HaccpItem> {
    let mut index = AHashMap::with_capacity(items.len());
    for item in items {
        index.entry(item.id.as_str()).or_insert(item);
    }
    index
}

fn score(total: usize, non_compliant: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let compliant = total.saturating_sub(non_compliant);
    (100.0 * compliant as f64 / total as f64).round() as u32
}

/// Compliance score against the current time. See [`ComplianceEngine::compliance_score`].
pub fn calculate_compliance_score(logs: &[HaccpLog], items: &[HaccpItem]) -> u32 {
    ComplianceEngine::new().compliance_score(logs, items)
}

/// Overdue reminders against the current time. See [`ComplianceEngine::overdue_reminders`].
pub fn get_overdue_reminders(reminders: &[HaccpReminder]) -> Vec<&HaccpReminder> {
    ComplianceEngine::new().overdue_reminders(reminders)
}

/// Missing checks against the current time. See [`ComplianceEngine::missing_checks`].
pub fn get_missing_checks<'a>(
    reminders: &'a [HaccpReminder],
    logs: &[HaccpLog],
    window_hours: i64,
) -> Vec<MissingCheck<'a>> {
    ComplianceEngine::new().missing_checks(reminders, logs, window_hours)
}
