//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [Notations and normalisation](./p01_notation/index.html)
//!  - [The individual pipeline stages](./p02_pipeline/index.html)
//!  - [Truth tables and their export](./p03_truth_tables/index.html)
//!

pub mod p01_notation;
pub mod p02_pipeline;
pub mod p03_truth_tables;
