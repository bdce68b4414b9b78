use std::collections::HashSet;

use serde::Serialize;

use crate::models::match_row::{EmployeeId, MatchRow};

/// Competency-group match rate of one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBreakdownRow {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub competency_group: String,
    pub group_match_rate: f64,
}

/// Item-level comparison of an employee's score against the benchmark baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBreakdownRow {
    pub full_name: String,
    pub competency_group: String,
    pub competency_item: String,
    pub user_score: Option<f64>,
    pub baseline_score: Option<f64>,
    pub item_match_rate: f64,
}

/// Per-group view: every item row repeats its group rate, so rows are
/// deduplicated on the full projected tuple, keeping the first occurrence.
pub fn group_breakdown(rows: &[MatchRow]) -> Vec<GroupBreakdownRow> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| {
            seen.insert((
                &row.employee_id,
                row.full_name.as_str(),
                row.competency_group.as_str(),
                rate_key(row.group_match_rate),
            ))
        })
        .map(|row| GroupBreakdownRow {
            employee_id: row.employee_id.clone(),
            full_name: row.full_name.clone(),
            competency_group: row.competency_group.clone(),
            group_match_rate: row.group_match_rate,
        })
        .collect()
}

// -0.0 and 0.0 are the same rate.
fn rate_key(rate: f64) -> u64 {
    if rate == 0.0 {
        0.0_f64.to_bits()
    } else {
        rate.to_bits()
    }
}

/// Per-item view; one entry per row, in service order.
pub fn item_breakdown(rows: &[MatchRow]) -> Vec<ItemBreakdownRow> {
    rows.iter()
        .map(|row| ItemBreakdownRow {
            full_name: row.full_name.clone(),
            competency_group: row.competency_group.clone(),
            competency_item: row.competency_item.clone(),
            user_score: row.user_score,
            baseline_score: row.baseline_score,
            item_match_rate: row.item_match_rate,
        })
        .collect()
}
