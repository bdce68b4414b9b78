use serde::Serialize;

use crate::models::match_row::MatchRow;
use crate::talent::aggregator::{rank_employees, RankedEmployee};
use crate::talent::breakdown::{
    group_breakdown, item_breakdown, GroupBreakdownRow, ItemBreakdownRow,
};
use crate::talent::insights::{extract_insight, TalentInsight};
use crate::talent::TalentError;

pub const TOP_CANDIDATE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub value: f64,
}

/// Data for a bar chart; rendering is left to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightView {
    #[serde(flatten)]
    pub insight: TalentInsight,
    pub summary_markdown: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub ranked: Vec<RankedEmployee>,
    pub group_breakdown: Vec<GroupBreakdownRow>,
    pub item_breakdown: Vec<ItemBreakdownRow>,
    pub top_candidates: BarChart,
    pub group_chart: BarChart,
    pub insight: InsightView,
}

/// Builds every view of the dashboard from normalized, role-filtered rows.
pub fn build_dashboard(role_name: &str, rows: &[MatchRow]) -> Result<Dashboard, TalentError> {
    let ranked = rank_employees(rows);
    let insight = extract_insight(&ranked, rows)?;
    let group_breakdown = group_breakdown(rows);

    let top_candidates = BarChart {
        title: format!("Top {TOP_CANDIDATE_LIMIT} {role_name} Candidates"),
        x_label: "Employee",
        y_label: "Final Match Rate (%)",
        points: ranked
            .iter()
            .take(TOP_CANDIDATE_LIMIT)
            .map(|employee| ChartPoint {
                label: employee.full_name.clone(),
                series: None,
                value: employee.final_match_rate,
            })
            .collect(),
    };

    let group_chart = BarChart {
        title: format!("TGV Match Breakdown for {role_name}"),
        x_label: "Employee",
        y_label: "TGV Match Rate (%)",
        points: group_breakdown
            .iter()
            .map(|row| ChartPoint {
                label: row.full_name.clone(),
                series: Some(row.competency_group.clone()),
                value: row.group_match_rate,
            })
            .collect(),
    };

    let summary_markdown = insight.summary_markdown();

    Ok(Dashboard {
        item_breakdown: item_breakdown(rows),
        group_breakdown,
        top_candidates,
        group_chart,
        insight: InsightView {
            insight,
            summary_markdown,
        },
        ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_analyst_scenario() {
        let rows = vec![
            MatchRow::sample("E1", "Ayu", "Cognitive", "Numeracy", 80.0, 85.0),
            MatchRow::sample("E1", "Ayu", "Drive", "Grit", 90.0, 95.0),
            MatchRow::sample("E2", "Budi", "Cognitive", "Numeracy", 60.0, 60.0),
        ];

        let dashboard = build_dashboard("Data Analyst", &rows).unwrap();
        let ranking: Vec<(&str, f64)> = dashboard
            .ranked
            .iter()
            .map(|r| (r.employee_id.as_str(), r.final_match_rate))
            .collect();
        assert_eq!(ranking, vec![("E1", 90.0), ("E2", 60.0)]);
        assert_eq!(dashboard.insight.insight.top_candidate.full_name, "Ayu");
        assert_eq!(dashboard.insight.insight.strongest_row.competency_group, "Drive");
        assert_eq!(dashboard.top_candidates.title, "Top 10 Data Analyst Candidates");
        assert_eq!(dashboard.item_breakdown.len(), 3);
        assert_eq!(dashboard.group_chart.points.len(), 3);
    }

    #[test]
    fn test_top_candidates_capped_at_ten() {
        let rows: Vec<MatchRow> = (0..14)
            .map(|i| {
                let id = format!("E{i}");
                MatchRow::sample(&id, &id, "Drive", "Grit", 50.0, 50.0 + i as f64)
            })
            .collect();

        let dashboard = build_dashboard("Data Analyst", &rows).unwrap();
        assert_eq!(dashboard.ranked.len(), 14);
        assert_eq!(dashboard.top_candidates.points.len(), TOP_CANDIDATE_LIMIT);
        assert_eq!(dashboard.top_candidates.points[0].label, "E13");
    }

    #[test]
    fn test_insight_serializes_flat_with_summary() {
        let rows = vec![MatchRow::sample("E1", "Ayu", "Drive", "Grit", 88.0, 91.0)];
        let dashboard = build_dashboard("Data Analyst", &rows).unwrap();

        let json = serde_json::to_value(&dashboard.insight).unwrap();
        assert_eq!(json["top_candidate"]["full_name"], "Ayu");
        assert_eq!(json["strongest_row"]["competency_group"], "Drive");
        assert!(json["summary_markdown"]
            .as_str()
            .unwrap()
            .contains("91.00%"));
    }
}
