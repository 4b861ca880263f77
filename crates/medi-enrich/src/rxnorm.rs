//! RxNorm drug-concept lookup.
//!
//! Queries `/REST/drugs.json?name=` and flattens the concept groups into a
//! plain list of concepts.

use crate::{EnrichClient, error::EnrichError, http::check_response};

#[derive(serde::Deserialize)]
struct DrugsResponse {
    #[serde(rename = "drugGroup")]
    drug_group: Option<DrugGroup>,
}

#[derive(serde::Deserialize)]
struct DrugGroup {
    #[serde(rename = "conceptGroup", default)]
    concept_group: Vec<ConceptGroup>,
}

#[derive(serde::Deserialize)]
struct ConceptGroup {
    tty: Option<String>,
    #[serde(rename = "conceptProperties", default)]
    concept_properties: Vec<ConceptProperties>,
}

#[derive(serde::Deserialize)]
struct ConceptProperties {
    rxcui: String,
    name: String,
}

/// Normalized RxNorm drug concept.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrugConcept {
    /// RxNorm concept unique identifier.
    pub rxcui: String,
    /// Concept name (ingredient, brand, or clinical drug).
    pub name: String,
    /// Term type (`IN`, `BN`, `SCD`, ...), when the group carries one.
    pub tty: Option<String>,
}

impl EnrichClient {
    /// Look up RxNorm drug concepts for a medicine name.
    ///
    /// An unknown name yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError`] if the HTTP request fails, the registry
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn rxnorm_drugs(&self, name: &str) -> Result<Vec<DrugConcept>, EnrichError> {
        let url = format!(
            "{}/REST/drugs.json?name={}",
            self.rxnorm_base,
            urlencoding::encode(name)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: DrugsResponse = resp.json().await?;
        let Some(group) = data.drug_group else {
            return Ok(Vec::new());
        };

        Ok(group
            .concept_group
            .into_iter()
            .flat_map(|cg| {
                let tty = cg.tty;
                cg.concept_properties
                    .into_iter()
                    .map(move |cp| DrugConcept {
                        rxcui: cp.rxcui,
                        name: cp.name,
                        tty: tty.clone(),
                    })
            })
            .collect())
    }
}
