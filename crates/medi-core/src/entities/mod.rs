//! Entity structs for the Medisort scan domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Entities are immutable on the request
//! path: a `ScanRequest` is consumed by one pipeline invocation, and a
//! `DisposalInstruction` is only replaced by a catalog reload.

mod classification;
mod feature;
mod instruction;
mod scan_request;

pub use classification::{CategoryScore, ClassificationResult};
pub use feature::{FeatureRecord, VisualProfile};
pub use instruction::DisposalInstruction;
pub use scan_request::ScanRequest;
