//! SeaORM entities
//!
//! Table definitions used by the PostgreSQL adapters.

pub mod properties;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

/// Create the tables this service needs if they do not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create = schema.create_table_from_entity(properties::Entity);
    create.if_not_exists();
    db.execute(backend.build(&create)).await?;

    Ok(())
}
