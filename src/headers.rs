use indexmap::IndexMap;

/// Response headers keyed by lowercase name, in emission order.
pub type Headers = IndexMap<String, String>;
