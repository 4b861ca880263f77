//! # medi-enrich
//!
//! Public drug registry clients for Medisort.
//!
//! Looks medicine names up in the two registries the product consults:
//! - DailyMed (`/services/v2/drugnames.json`) for listings and disposal notes
//! - RxNorm (`/REST/drugs.json`) for normalized drug concepts
//!
//! Enrichment is strictly optional: the resolver's catalog text stands on
//! its own, and every caller of this crate treats a failure here as a
//! degraded (not failed) scan. Base URLs are injected so tests can point at
//! a local fixture server.

mod dailymed;
mod error;
mod http;
mod rxnorm;

pub use dailymed::DrugListing;
pub use error::EnrichError;
pub use rxnorm::DrugConcept;

use std::time::Duration;

/// Merged view of both registries for one medicine name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MedicineInfo {
    /// The name as queried.
    pub name: String,
    /// Disposal note from the DailyMed listing, when one matched.
    pub disposal_note: Option<String>,
    /// RxNorm concepts for the name; empty when RxNorm does not know it.
    pub concepts: Vec<DrugConcept>,
}

/// HTTP client for querying the drug registries.
#[derive(Debug)]
pub struct EnrichClient {
    http: reqwest::Client,
    dailymed_base: String,
    rxnorm_base: String,
}

impl EnrichClient {
    /// Create a client against the given registry base URLs.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(
        dailymed_base: impl Into<String>,
        rxnorm_base: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("HTTP client should build");
        Self {
            http,
            dailymed_base: dailymed_base.into().trim_end_matches('/').to_string(),
            rxnorm_base: rxnorm_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Query both registries and merge the results.
    ///
    /// Mirrors the product's medicine-info aggregation: both lookups run
    /// concurrently and the call fails if either registry does, leaving the
    /// degrade decision to the caller.
    ///
    /// # Errors
    ///
    /// Returns the first [`EnrichError`] from either lookup.
    pub async fn medicine_info(&self, name: &str) -> Result<MedicineInfo, EnrichError> {
        let (listing, concepts) =
            tokio::try_join!(self.dailymed_drug_name(name), self.rxnorm_drugs(name))?;

        Ok(MedicineInfo {
            name: name.to_string(),
            disposal_note: listing.and_then(|l| l.disposal_note),
            concepts,
        })
    }
}
