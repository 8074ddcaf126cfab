//! Routes uniquely locate every schema item within one of the top-level
//! schema collections (e.g. `[query]/Users/Search`).

mod schema_item_collection;
mod schema_item_path;

pub use schema_item_collection::SchemaItemCollection;
pub use schema_item_path::SchemaItemPath;
pub use schema_item_path::is_valid_graph_name;

#[cfg(test)]
mod tests;
