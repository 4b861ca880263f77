//! # medi-pipeline
//!
//! Scan pipeline orchestration: extract → classify → resolve.
//!
//! Orchestrates the end-to-end handling of one scan request:
//! 1. Extract features with `medi-extract` (under
//!    [`tokio::task::spawn_blocking`] — image decode is the pipeline's one
//!    blocking operation)
//! 2. Classify with `medi-classify` (deterministic, rule-table driven)
//! 3. Resolve instructions with `medi-resolve` against a catalog snapshot
//! 4. Optionally append a registry disposal note via `medi-enrich`
//!
//! Every invocation is independent and stateless across requests: share one
//! [`ScanPipeline`] behind an `Arc` and call [`ScanPipeline::scan`]
//! concurrently from as many tasks as the host cares to run. The whole
//! pipeline is bounded by the configured scan timeout; on expiry the
//! in-flight result is discarded, never partially applied.

mod error;
pub mod telemetry;

pub use error::PipelineError;

use std::time::Duration;

use medi_classify::ClassifierParams;
use medi_config::MedisortConfig;
use medi_core::entities::{ClassificationResult, DisposalInstruction, ScanRequest};
use medi_core::enums::ScanStage;
use medi_core::errors::advance_stage;
use medi_core::responses::ScanResponse;
use medi_enrich::EnrichClient;
use medi_resolve::{Catalog, CatalogHandle};

/// Result of one completed scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Terminal lifecycle stage; always [`ScanStage::Resolved`] on success.
    pub stage: ScanStage,
    /// The classification with its evidence trail.
    pub result: ClassificationResult,
    /// The instruction that served the scan (registry note appended when
    /// enrichment contributed one).
    pub instruction: DisposalInstruction,
    /// Serializable boundary response.
    pub response: ScanResponse,
}

/// The scan pipeline: one per process, shared across requests.
#[derive(Debug)]
pub struct ScanPipeline {
    config: MedisortConfig,
    params: ClassifierParams,
    catalog: CatalogHandle,
    enrich: Option<EnrichClient>,
}

impl ScanPipeline {
    /// Build a pipeline from validated configuration.
    ///
    /// Loads the instruction catalog (operator file when configured, the
    /// built-in otherwise) and constructs the registry client if enrichment
    /// is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] when the configuration fails
    /// validation and [`PipelineError::Catalog`] when the catalog cannot be
    /// loaded.
    pub fn new(config: MedisortConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let catalog = match &config.resolver.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };

        let enrich = config.enrich.enabled.then(|| {
            EnrichClient::new(
                config.enrich.dailymed_base_url.clone(),
                config.enrich.rxnorm_base_url.clone(),
                Duration::from_secs(config.enrich.timeout_secs),
            )
        });

        let params = ClassifierParams {
            confidence_threshold: config.classifier.confidence_threshold,
            tie_epsilon: config.classifier.tie_epsilon,
            text_alpha: config.classifier.text_alpha,
        };

        Ok(Self {
            config,
            params,
            catalog: CatalogHandle::new(catalog),
            enrich,
        })
    }

    /// The catalog handle, for out-of-band content reloads.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Run one scan, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Timeout`] on deadline expiry, otherwise any
    /// stage error. Low confidence is not an error: it arrives as a flagged
    /// success in the outcome.
    pub async fn scan(&self, request: ScanRequest) -> Result<ScanOutcome, PipelineError> {
        let deadline = Duration::from_secs(self.config.pipeline.scan_timeout_secs);
        let outcome = match tokio::time::timeout(deadline, self.run(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(PipelineError::Timeout(deadline)),
        };

        if let Err(error) = &outcome {
            tracing::warn!(
                stage = %ScanStage::Failed,
                status = error.status(),
                %error,
                "scan terminated"
            );
        }
        outcome
    }

    async fn run(&self, request: ScanRequest) -> Result<ScanOutcome, PipelineError> {
        let stage = ScanStage::Received;
        let ScanRequest {
            image,
            name,
            jurisdiction,
        } = request;

        // Stage 1: extract, off the async executor.
        let max_bytes = self.config.extract.max_image_bytes;
        let extract_name = name.clone();
        let features = tokio::task::spawn_blocking(move || {
            medi_extract::extract(&image, extract_name.as_deref(), max_bytes)
        })
        .await
        .map_err(|error| PipelineError::Internal(format!("extraction task died: {error}")))??;

        // Stage 2: classify.
        let result = medi_classify::classify(&features, &self.params);
        let stage = advance_stage(stage, ScanStage::Classified)?;

        // Stage 3: resolve against a consistent catalog snapshot.
        let jurisdiction = jurisdiction
            .unwrap_or_else(|| self.config.resolver.default_jurisdiction.clone());
        let snapshot = self.catalog.snapshot();
        let mut instruction = snapshot.resolve(result.category, &jurisdiction)?.clone();
        let stage = advance_stage(stage, ScanStage::Resolved)?;

        // Stage 4: best-effort registry note.
        if let Some(note) = self.enrichment_note(name.as_deref()).await {
            instruction.text.push_str("\n\n");
            instruction.text.push_str(&note);
        }

        let response = ScanResponse::from_parts(&result, &instruction);
        tracing::info!(
            category = %result.category,
            confidence = result.confidence,
            low_confidence = result.low_confidence,
            jurisdiction = %instruction.jurisdiction,
            "scan resolved"
        );

        Ok(ScanOutcome {
            stage,
            result,
            instruction,
            response,
        })
    }

    /// Fetch the registry disposal note for the scan, when enrichment is on
    /// and the caller supplied a name. Any registry failure degrades to the
    /// catalog text with a warning; enrichment can never fail the pipeline.
    async fn enrichment_note(&self, name: Option<&str>) -> Option<String> {
        let client = self.enrich.as_ref()?;
        let name = name?;
        match client.medicine_info(name).await {
            Ok(info) => info.disposal_note,
            Err(error) => {
                tracing::warn!(%error, "registry enrichment failed; using catalog text only");
                None
            }
        }
    }
}
