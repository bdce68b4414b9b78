use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque employee identifier. The match function returns either integer or
/// text ids depending on the source table; the normalizer renders both as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        EmployeeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of `run_talent_match` exactly as received.
/// The id, rate and score columns stay untyped until the normalizer coerces them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatchRow {
    #[serde(rename = "out_employee_id", default)]
    pub employee_id: Value,
    #[serde(rename = "out_fullname", default, deserialize_with = "nullable_text")]
    pub full_name: String,
    #[serde(rename = "out_directorate", default, deserialize_with = "nullable_text")]
    pub directorate: String,
    #[serde(rename = "out_role", default, deserialize_with = "nullable_text")]
    pub role: String,
    #[serde(rename = "out_grade", default, deserialize_with = "nullable_text")]
    pub grade: String,
    #[serde(rename = "out_tgv_name", default, deserialize_with = "nullable_text")]
    pub competency_group: String,
    #[serde(rename = "out_tv_name", default, deserialize_with = "nullable_text")]
    pub competency_item: String,
    #[serde(rename = "out_user_score", default)]
    pub user_score: Value,
    #[serde(rename = "out_baseline_score", default)]
    pub baseline_score: Value,
    #[serde(rename = "out_tgv_match_rate", default)]
    pub group_match_rate: Value,
    #[serde(rename = "out_tv_match_rate", default)]
    pub item_match_rate: Value,
    #[serde(rename = "out_final_match_rate", default)]
    pub final_match_rate: Value,
}

/// A match row with its numeric fields coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub directorate: String,
    pub role: String,
    pub grade: String,
    pub competency_group: String,
    pub competency_item: String,
    pub user_score: Option<f64>,
    pub baseline_score: Option<f64>,
    pub group_match_rate: f64,
    pub item_match_rate: f64,
    pub final_match_rate: f64,
}

/// Borrowed `(employee_id, full_name, directorate, role, grade)` grouping key.
pub type EmployeeKey<'a> = (&'a EmployeeId, &'a str, &'a str, &'a str, &'a str);

impl MatchRow {
    pub fn employee_key(&self) -> EmployeeKey<'_> {
        (
            &self.employee_id,
            &self.full_name,
            &self.directorate,
            &self.role,
            &self.grade,
        )
    }
}

#[cfg(test)]
impl MatchRow {
    /// A Data Analyst row with fixed identity fields apart from id and name.
    pub(crate) fn sample(
        id: &str,
        name: &str,
        group: &str,
        item: &str,
        group_rate: f64,
        final_rate: f64,
    ) -> Self {
        MatchRow {
            employee_id: EmployeeId::new(id),
            full_name: name.to_string(),
            directorate: "Analytics".to_string(),
            role: "Data Analyst".to_string(),
            grade: "III".to_string(),
            competency_group: group.to_string(),
            competency_item: item.to_string(),
            user_score: Some(4.0),
            baseline_score: Some(3.5),
            group_match_rate: group_rate,
            item_match_rate: 80.0,
            final_match_rate: final_rate,
        }
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}
