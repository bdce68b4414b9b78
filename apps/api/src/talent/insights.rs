use serde::Serialize;

use crate::models::match_row::MatchRow;
use crate::talent::aggregator::RankedEmployee;
use crate::talent::TalentError;

/// The best-ranked candidate and the competency group they score highest on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentInsight {
    pub top_candidate: RankedEmployee,
    pub strongest_row: MatchRow,
}

/// Picks `ranked[0]` and, among that employee's rows, the one with the highest
/// group match rate. Equal maxima resolve to the earliest row in `rows`.
///
/// Callers must handle the no-candidate case first; an empty ranking is a
/// contract violation reported as `EmptyResult`.
pub fn extract_insight(
    ranked: &[RankedEmployee],
    rows: &[MatchRow],
) -> Result<TalentInsight, TalentError> {
    let top = ranked.first().ok_or(TalentError::EmptyResult)?;

    let strongest = rows
        .iter()
        .filter(|row| {
            row.employee_key()
                == (
                    &top.employee_id,
                    top.full_name.as_str(),
                    top.directorate.as_str(),
                    top.role.as_str(),
                    top.grade.as_str(),
                )
        })
        .fold(None::<&MatchRow>, |best, row| match best {
            Some(current) if row.group_match_rate <= current.group_match_rate => Some(current),
            _ => Some(row),
        })
        .ok_or(TalentError::EmptyResult)?;

    Ok(TalentInsight {
        top_candidate: top.clone(),
        strongest_row: strongest.clone(),
    })
}

impl TalentInsight {
    /// Markdown block shown under "Insights Summary".
    pub fn summary_markdown(&self) -> String {
        let top = &self.top_candidate;
        let strongest = &self.strongest_row;
        format!(
            "**Top Candidate:** {}  \n\
             **Directorate:** {}  \n\
             **Role:** {}  \n\
             **Grade:** {}  \n\
             **Final Match Rate:** {:.2}%  \n\
             **Strongest TGV:** {} ({:.2}%)",
            top.full_name,
            top.directorate,
            top.role,
            top.grade,
            top.final_match_rate,
            strongest.competency_group,
            strongest.group_match_rate,
        )
    }
}
