use serde::{Deserialize, Serialize};

/// One distinct category value with the number of entities carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub name: String,
    pub count: usize,
}

impl CategoryFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
        }
    }
}
