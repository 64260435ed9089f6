use crate::costing::{CostBreakdown, CostSummary, LineSource, UnpricedReason};
use crate::haccp::{ComplianceReport, TemperatureTrend, Trend};

/// Formats engine results into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per ingredient followed by the total.
    pub fn format_breakdown(breakdown: &CostBreakdown) -> String {
        let mut out = String::new();
        for line in &breakdown.lines {
            let detail = match &line.source {
                LineSource::Catalog {
                    purchase_unit,
                    unit_cost,
                    purchase_quantity,
                } => format!(
                    "{} {} @ {}/{}",
                    Self::format_number(*purchase_quantity),
                    purchase_unit,
                    Self::format_money(*unit_cost),
                    purchase_unit
                ),
                LineSource::SubRecipe {
                    recipe_id,
                    batch_cost,
                    yield_divisor,
                    yield_quantity,
                } => format!(
                    "{} of '{}' ({} / {} per yield unit)",
                    Self::format_number(*yield_quantity),
                    recipe_id,
                    Self::format_money(*batch_cost),
                    Self::format_number(*yield_divisor)
                ),
                LineSource::Unpriced { reason } => Self::format_reason(*reason).to_string(),
            };
            out.push_str(&format!(
                "  {:<24} {:>8} {:<4} {:>10}  {}\n",
                line.ingredient,
                Self::format_number(line.quantity),
                line.unit,
                Self::format_money(line.contribution()),
                detail
            ));
        }
        out.push_str(&format!(
            "  {:<24} {:>24}\n",
            "Total",
            Self::format_money(breakdown.total)
        ));
        out
    }

    pub fn format_summary(summary: &CostSummary) -> String {
        let mut out = format!(
            "Recipe '{}': batch {}, per serving {}",
            summary.recipe_id,
            Self::format_money(summary.total),
            Self::format_money(summary.per_serving)
        );
        if let Some(pct) = summary.food_cost_percentage {
            out.push_str(&format!(", food cost {:.1}%", pct));
        }
        out
    }

    /// Score headline followed by one section per non-empty issue list.
    pub fn format_compliance(report: &ComplianceReport<'_>) -> String {
        let mut out = format!(
            "Compliance score: {}% ({} logs, {} violations)\n",
            report.score,
            report.total_logs,
            report.violations.len()
        );

        if !report.violations.is_empty() {
            out.push_str("Violations:\n");
            for v in &report.violations {
                let author = if v.log.author.is_empty() {
                    "unknown"
                } else {
                    v.log.author.as_str()
                };
                out.push_str(&format!(
                    "  {} {}: {} outside [{}, {}] (logged by {})\n",
                    v.log.timestamp.format("%Y-%m-%d %H:%M"),
                    v.item.name,
                    Self::format_number(v.reading),
                    Self::format_number(v.range.min),
                    Self::format_number(v.range.max),
                    author
                ));
            }
        }

        if !report.overdue.is_empty() {
            out.push_str("Overdue reminders:\n");
            for reminder in &report.overdue {
                if let Some(due) = reminder.next_check_due {
                    out.push_str(&format!(
                        "  {} (item {}) was due {}\n",
                        reminder.id,
                        reminder.item_id,
                        due.format("%Y-%m-%d %H:%M")
                    ));
                }
            }
        }

        if !report.missing.is_empty() {
            out.push_str(&format!(
                "Missing checks in the last {}h:\n",
                report.window_hours
            ));
            for missing in &report.missing {
                out.push_str(&format!(
                    "  {} (item {}): {}h since last check\n",
                    missing.reminder.id, missing.reminder.item_id, missing.hours_since_last_check
                ));
            }
        }
        out
    }

    pub fn format_trend(item_name: &str, trend: &TemperatureTrend) -> String {
        let arrow = match trend.trend {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        };
        format!(
            "{}: {} readings, avg {:.1}, min {}, max {}, {}, {} flagged",
            item_name,
            trend.readings,
            trend.average,
            Self::format_number(trend.min),
            Self::format_number(trend.max),
            arrow,
            trend.out_of_range_count
        )
    }

    fn format_reason(reason: UnpricedReason) -> &'static str {
        match reason {
            UnpricedReason::NoCatalogEntry => "no catalog price",
            UnpricedReason::MissingSubRecipe => "sub-recipe not found",
            UnpricedReason::Cycle => "sub-recipe cycle",
            UnpricedReason::TooDeep => "sub-recipe nesting too deep",
        }
    }

    /// Whole numbers print without a fractional part.
    fn format_number(n: f64) -> String {
        if n.fract() == 0.0 {
            format!("{}", n as i64)
        } else {
            format!("{}", (n * 1000.0).round() / 1000.0)
        }
    }

    fn format_money(n: f64) -> String {
        format!("{:.2}", n)
    }
}
