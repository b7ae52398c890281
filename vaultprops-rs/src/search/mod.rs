//! Condition queries and vault-wide listings.

pub mod aggregate;
pub mod matcher;
pub mod parser;
pub mod types;

pub use aggregate::{all_property_names, all_tag_names, all_values_of, property_names_of, tag_counts};
pub use matcher::{evaluate, load_for_query, matches_all, select_documents};
pub use parser::{parse_condition, parse_conditions, parse_conditions_json};
pub use types::*;
