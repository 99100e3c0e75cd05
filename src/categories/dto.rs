use serde::Deserialize;

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// Partial update; only provided fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_no_changes() {
        let payload: UpdateCategoryRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.name.is_none());
    }
}
