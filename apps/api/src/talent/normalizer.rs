use serde_json::Value;

use crate::models::match_row::{EmployeeId, MatchRow, RawMatchRow};
use crate::talent::TalentError;

/// Coerces the numeric columns of every row, then keeps the rows whose role
/// matches `target_role` case-insensitively.
///
/// All rows are coerced before filtering: a malformed rate anywhere in the
/// response aborts the run rather than disappearing with the filtered rows.
pub fn normalize(
    raw_rows: Vec<RawMatchRow>,
    target_role: &str,
) -> Result<Vec<MatchRow>, TalentError> {
    let coerced = raw_rows
        .into_iter()
        .enumerate()
        .map(|(index, raw)| coerce_row(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let target = target_role.trim().to_lowercase();
    let rows: Vec<MatchRow> = coerced
        .into_iter()
        .filter(|row| row.role.to_lowercase() == target)
        .collect();

    if rows.is_empty() {
        return Err(TalentError::NoCandidates {
            role: target_role.trim().to_string(),
        });
    }

    Ok(rows)
}

fn coerce_row(index: usize, raw: RawMatchRow) -> Result<MatchRow, TalentError> {
    Ok(MatchRow {
        group_match_rate: require_rate(index, "out_tgv_match_rate", &raw.group_match_rate)?,
        item_match_rate: require_rate(index, "out_tv_match_rate", &raw.item_match_rate)?,
        final_match_rate: require_rate(index, "out_final_match_rate", &raw.final_match_rate)?,
        user_score: coerce_number(&raw.user_score),
        baseline_score: coerce_number(&raw.baseline_score),
        employee_id: require_employee_id(index, &raw.employee_id)?,
        full_name: raw.full_name,
        directorate: raw.directorate,
        role: raw.role,
        grade: raw.grade,
        competency_group: raw.competency_group,
        competency_item: raw.competency_item,
    })
}

fn require_rate(index: usize, field: &'static str, value: &Value) -> Result<f64, TalentError> {
    coerce_number(value).ok_or_else(|| TalentError::DataIntegrity {
        row: index,
        field,
        value: value.to_string(),
    })
}

/// Integer or non-blank text ids; anything else cannot identify an employee.
fn require_employee_id(index: usize, value: &Value) -> Result<EmployeeId, TalentError> {
    let id = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    };
    id.map(EmployeeId::new).ok_or_else(|| TalentError::DataIntegrity {
        row: index,
        field: "out_employee_id",
        value: value.to_string(),
    })
}

/// Numbers and numeric strings coerce; NaN and infinities never do.
/// Scores go through this directly: they are display-only, so an
/// unreadable score is shown as missing.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_row(
        id: &str,
        name: &str,
        role: &str,
        group: &str,
        item: &str,
        final_rate: Value,
    ) -> RawMatchRow {
        serde_json::from_value(json!({
            "out_employee_id": id,
            "out_fullname": name,
            "out_directorate": "Analytics",
            "out_role": role,
            "out_grade": "III",
            "out_tgv_name": group,
            "out_tv_name": item,
            "out_user_score": 4,
            "out_baseline_score": 3.5,
            "out_tgv_match_rate": 75.0,
            "out_tv_match_rate": "80",
            "out_final_match_rate": final_rate
        }))
        .expect("valid raw row")
    }

    #[test]
    fn test_role_filter_is_case_insensitive() {
        let rows = vec![
            raw_row("E1", "Ayu", "Data Analyst", "Cognitive", "Numeracy", json!(85)),
            raw_row("E2", "Budi", "HRBP", "Cognitive", "Numeracy", json!(60)),
        ];

        let normalized = normalize(rows, "data analyst").unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].full_name, "Ayu");
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let rows = vec![raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(" 72.5 "))];
        let normalized = normalize(rows, "HRBP").unwrap();
        assert_eq!(normalized[0].final_match_rate, 72.5);
        assert_eq!(normalized[0].item_match_rate, 80.0);
        assert_eq!(normalized[0].user_score, Some(4.0));
    }

    #[test]
    fn test_non_numeric_rate_is_data_integrity_error() {
        let rows = vec![
            raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(90)),
            raw_row("E2", "Budi", "HRBP", "Drive", "Grit", json!("n/a")),
        ];

        match normalize(rows, "HRBP") {
            Err(TalentError::DataIntegrity { row, field, value }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "out_final_match_rate");
                assert_eq!(value, "\"n/a\"");
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_row_of_other_role_still_fails() {
        let rows = vec![
            raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(90)),
            raw_row("E2", "Budi", "Sales Supervisor", "Drive", "Grit", json!(null)),
        ];
        assert!(matches!(
            normalize(rows, "HRBP"),
            Err(TalentError::DataIntegrity { row: 1, .. })
        ));
    }

    #[test]
    fn test_nan_text_is_rejected() {
        let rows = vec![raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!("NaN"))];
        assert!(matches!(
            normalize(rows, "HRBP"),
            Err(TalentError::DataIntegrity { .. })
        ));
    }

    #[test]
    fn test_no_rows_for_role_is_no_candidates() {
        let rows = vec![raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(90))];
        match normalize(rows, "  Brand Executive ") {
            Err(TalentError::NoCandidates { role }) => assert_eq!(role, "Brand Executive"),
            other => panic!("expected NoCandidates, got {other:?}"),
        }
    }

    #[test]
    fn test_null_score_is_allowed() {
        let mut row = raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(90));
        row.user_score = Value::Null;
        let normalized = normalize(vec![row], "HRBP").unwrap();
        assert_eq!(normalized[0].user_score, None);
    }

    #[test]
    fn test_non_numeric_score_is_shown_as_missing() {
        let mut row = raw_row("E1", "Ayu", "Data Analyst", "Drive", "Grit", json!(90));
        row.user_score = json!("N/A");
        row.baseline_score = json!("not assessed");

        let normalized = normalize(vec![row], "Data Analyst").unwrap();
        assert_eq!(normalized[0].user_score, None);
        assert_eq!(normalized[0].baseline_score, None);
        assert_eq!(normalized[0].final_match_rate, 90.0);
    }

    #[test]
    fn test_integer_employee_id_becomes_text() {
        let mut row = raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(90));
        row.employee_id = json!(312);
        let normalized = normalize(vec![row], "HRBP").unwrap();
        assert_eq!(normalized[0].employee_id.as_str(), "312");
    }

    #[test]
    fn test_unusable_employee_id_names_the_row() {
        for bad_id in [json!(null), json!(31.5), json!("  ")] {
            let mut row = raw_row("E2", "Budi", "HRBP", "Drive", "Grit", json!(90));
            row.employee_id = bad_id.clone();
            let rows = vec![raw_row("E1", "Ayu", "HRBP", "Drive", "Grit", json!(80)), row];

            match normalize(rows, "HRBP") {
                Err(TalentError::DataIntegrity { row, field, value }) => {
                    assert_eq!(row, 1);
                    assert_eq!(field, "out_employee_id");
                    assert_eq!(value, bad_id.to_string());
                }
                other => panic!("expected DataIntegrity for {bad_id}, got {other:?}"),
            }
        }
    }
}
