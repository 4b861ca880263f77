//! DailyMed drug-name lookup.
//!
//! Queries `/services/v2/drugnames.json` and filters the listing for the
//! requested name case-insensitively. DailyMed's labeling data carries the
//! disposal note, when one exists, that the resolver appends to the catalog
//! instruction.

use crate::{EnrichClient, error::EnrichError, http::check_response};

#[derive(serde::Deserialize)]
struct DrugNamesResponse {
    #[serde(default)]
    data: Vec<DrugNameEntry>,
}

#[derive(serde::Deserialize)]
struct DrugNameEntry {
    drug_name: String,
    disposal_info: Option<String>,
}

/// One matched DailyMed listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrugListing {
    /// Drug name as DailyMed records it.
    pub name: String,
    /// Disposal note from the labeling data, when present.
    pub disposal_note: Option<String>,
}

impl EnrichClient {
    /// Look up a medicine name in the DailyMed drug-name listing.
    ///
    /// Returns `None` when DailyMed has no matching listing — a perfectly
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError`] if the HTTP request fails, the registry
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn dailymed_drug_name(&self, name: &str) -> Result<Option<DrugListing>, EnrichError> {
        let url = format!("{}/services/v2/drugnames.json", self.dailymed_base);
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: DrugNamesResponse = resp.json().await?;
        Ok(data
            .data
            .into_iter()
            .find(|entry| entry.drug_name.eq_ignore_ascii_case(name))
            .map(|entry| DrugListing {
                name: entry.drug_name,
                disposal_note: entry.disposal_info,
            }))
    }
}
