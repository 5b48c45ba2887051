//! Dataset
//!
//! The immutable observation table behind every chart:
//!
//! - **types**: `Observation` rows and the `Dataset` table
//! - **loader**: parsing the embedded JSON literal
//! - **error**: Error types
//!
//! The table is built once at startup and shared read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use covid_dashboard::dataset::Dataset;
//!
//! let dataset = Dataset::embedded().unwrap();
//! assert_eq!(dataset.countries(), vec!["United States", "India"]);
//! assert_eq!(dataset.for_country("India").count(), 3);
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::EMBEDDED_DATA;
pub use types::{Dataset, Observation};
