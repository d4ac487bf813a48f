use super::DatabaseId;

pub const SINGERS_DDL: &str = "CREATE TABLE Singers (
    SingerId   INT64 NOT NULL,
    FirstName  STRING(1024),
    LastName   STRING(1024),
    SingerInfo BYTES(MAX)
) PRIMARY KEY (SingerId)";

pub const ALBUMS_DDL: &str = "CREATE TABLE Albums (
    SingerId     INT64 NOT NULL,
    AlbumId      INT64 NOT NULL,
    AlbumTitle   STRING(MAX)
) PRIMARY KEY (SingerId, AlbumId),
INTERLEAVE IN PARENT Singers ON DELETE CASCADE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseRequest {
    pub parent: String,
    pub create_statement: String,
    pub extra_statements: Vec<String>,
}

impl CreateDatabaseRequest {
    /// Request for `id` with the `Singers`/`Albums` sample schema.
    pub fn with_sample_schema(id: &DatabaseId) -> Self {
        Self {
            parent: id.parent().to_string(),
            create_statement: format!("CREATE DATABASE `{}`", id.name()),
            extra_statements: vec![SINGERS_DDL.to_string(), ALBUMS_DDL.to_string()],
        }
    }
}
