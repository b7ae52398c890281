//! Parsers backing the built-in metadata index.

pub mod frontmatter;
pub mod tag;

pub use frontmatter::{
    extract_frontmatter, index_frontmatter, locate_frontmatter, parse_frontmatter_with_path,
    split_body,
};
pub use tag::parse_tags;
