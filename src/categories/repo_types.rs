use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Category record in the database. Everything fetched through the repo is
/// active, so the deletion marker is never selected into this type.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_with_camel_case_rfc3339_timestamps() {
        let category = Category {
            id: Uuid::nil(),
            name: "Beverages".into(),
            created_at: datetime!(2024-05-01 12:00:00 UTC),
            updated_at: datetime!(2024-05-02 08:30:00 UTC),
        };

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["name"], "Beverages");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["updatedAt"], "2024-05-02T08:30:00Z");
    }
}
