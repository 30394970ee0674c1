//! `properties` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    /// house | shop | land
    pub kind: String,
    pub country: String,
    pub state: Option<String>,
    pub city: String,
    pub address: String,
    /// Ordered `[{"lat": .., "lng": ..}]` vertices
    #[sea_orm(column_type = "JsonBinary")]
    pub boundary: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
