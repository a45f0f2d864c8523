//! Consultant-facing CSV export of assessment summaries.

use std::io::Write;

use serde::Serialize;

use crate::advisor::repository::AssessmentRecord;

#[derive(Debug, Serialize)]
struct AssessmentExportRow<'a> {
    assessment_id: &'a str,
    status: &'static str,
    top_pathway: Option<&'static str>,
    top_score: Option<i16>,
    eligible_pathways: String,
}

/// Write one summary row per record. Headers come from the row struct, so
/// the export shape is stable across callers.
pub fn export_summaries<W: Write>(
    records: &[AssessmentRecord],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        let top = record.results.as_deref().and_then(|results| results.first());
        let eligible_pathways = record
            .results
            .as_deref()
            .map(|results| {
                results
                    .iter()
                    .filter(|result| result.eligible)
                    .map(|result| result.pathway.label())
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default();

        csv_writer.serialize(AssessmentExportRow {
            assessment_id: &record.profile.assessment_id.0,
            status: record.status.label(),
            top_pathway: top.map(|result| result.pathway.label()),
            top_score: top.map(|result| result.readiness_score),
            eligible_pathways,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
