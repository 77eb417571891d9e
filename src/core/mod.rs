//! Core consultation logic
//!
//! Catalog of consultations, source reading, the advisor that talks to a
//! provider, and the markdown report writer.

pub mod advisor;
pub mod consultation;
pub mod report;
pub mod sources;
