//! Icon catalog: records, assembly, summary, persistence and self-check.
//!
//! `IconRecord` mirrors `schema/icon_catalog.schema.json`; the assembler
//! produces records in enumeration order, the writer persists them, and
//! `schema::validate_catalog` checks a written document against both the
//! schema and the rule set.

pub mod assembler;
pub mod model;
pub mod schema;
pub mod summary;
pub mod writer;

pub use assembler::{Catalog, CatalogAssembler, resolution_counts};
pub use model::{IconRecord, IconSource, Resolution, UNCATEGORIZED, asset_path};
pub use schema::{CATALOG_SCHEMA_TEXT, catalog_schema, validate_catalog};
pub use summary::CatalogSummary;
pub use writer::{render_catalog, write_catalog};
