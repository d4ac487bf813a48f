pub mod database_id;
pub mod mutation;
pub mod schema;
pub mod statement;

pub use database_id::DatabaseId;
pub use mutation::{Mutation, MutationOp, Value};
pub use schema::CreateDatabaseRequest;
pub use statement::{ColumnKind, Row, Statement};
