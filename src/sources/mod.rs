//! Collaborator sources scraped without executing them: the icon enumeration
//! and the icon component that decides each icon's rendering source.

pub mod components;
pub mod enumeration;

pub use components::{ComponentSourceSpec, IconSourceMap};
pub use enumeration::{Enumeration, load_enumeration, parse_enum_identifiers};
