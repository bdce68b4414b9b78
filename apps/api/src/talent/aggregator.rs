use std::collections::HashMap;

use serde::Serialize;

use crate::models::match_row::{EmployeeId, EmployeeKey, MatchRow};

/// One employee with the mean final match rate across all of their rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEmployee {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub directorate: String,
    pub role: String,
    pub grade: String,
    pub final_match_rate: f64,
}

struct Accumulator {
    first_row: usize,
    total: f64,
    count: usize,
}

/// Groups rows by employee identity and ranks them by mean final match rate,
/// highest first. Exact ties keep the order in which the employees first
/// appear in `rows`.
///
/// Every row counts toward the mean, including repeated
/// `(employee, group, item)` rows.
pub fn rank_employees(rows: &[MatchRow]) -> Vec<RankedEmployee> {
    let mut groups: HashMap<EmployeeKey<'_>, Accumulator> = HashMap::new();
    let mut order: Vec<EmployeeKey<'_>> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let key = row.employee_key();
        let acc = groups.entry(key).or_insert_with(|| {
            order.push(key);
            Accumulator {
                first_row: index,
                total: 0.0,
                count: 0,
            }
        });
        acc.total += row.final_match_rate;
        acc.count += 1;
    }

    let mut ranked: Vec<RankedEmployee> = order
        .into_iter()
        .map(|key| {
            let acc = &groups[&key];
            let row = &rows[acc.first_row];
            RankedEmployee {
                employee_id: row.employee_id.clone(),
                full_name: row.full_name.clone(),
                directorate: row.directorate.clone(),
                role: row.role.clone(),
                grade: row.grade.clone(),
                final_match_rate: acc.total / acc.count as f64,
            }
        })
        .collect();

    // sort_by is stable, so equal means keep first-appearance order
    ranked.sort_by(|a, b| b.final_match_rate.total_cmp(&a.final_match_rate));
    ranked
}
