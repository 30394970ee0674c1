//! PostgreSQL adapter for PropertyRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use crate::domain::entities::{Location, NewProperty, Point, Property, PropertyId};
use crate::domain::ports::PropertyRepository;
use crate::entity::properties;
use crate::error::DomainError;

/// PostgreSQL implementation of PropertyRepository
pub struct PostgresPropertyRepository {
    db: DatabaseConnection,
}

impl PostgresPropertyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map write errors, surfacing the unique name constraint
fn write_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::name_taken(),
        _ => DomainError::Database(e.to_string()),
    }
}

fn boundary_json(boundary: &[Point]) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(boundary).map_err(|e| DomainError::Internal(e.to_string()))
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn create(&self, property: &NewProperty) -> Result<Property, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = properties::ActiveModel {
            id: Set(PropertyId::new().0),
            name: Set(property.name.clone()),
            kind: Set(property.kind.to_string()),
            country: Set(property.location.country.clone()),
            state: Set(property.location.state.clone()),
            city: Set(property.location.city.clone()),
            address: Set(property.location.address.clone()),
            boundary: Set(boundary_json(&property.boundary)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        result.try_into()
    }

    async fn find_all(
        &self,
        limit: Option<u64>,
        offset: u64,
    ) -> Result<Vec<Property>, DomainError> {
        let results = properties::Entity::find()
            .order_by_asc(properties::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Property::try_from).collect()
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, DomainError> {
        let result = properties::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Property::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Property>, DomainError> {
        let result = properties::Entity::find()
            .filter(properties::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Property::try_from).transpose()
    }

    async fn update(
        &self,
        id: &PropertyId,
        property: &NewProperty,
    ) -> Result<Option<Property>, DomainError> {
        let Some(existing) = properties::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        active_model.name = Set(property.name.clone());
        active_model.kind = Set(property.kind.to_string());
        active_model.country = Set(property.location.country.clone());
        active_model.state = Set(property.location.state.clone());
        active_model.city = Set(property.location.city.clone());
        active_model.address = Set(property.location.address.clone());
        active_model.boundary = Set(boundary_json(&property.boundary)?);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let result = active_model
            .update(&self.db)
            .await
            .map_err(write_error)?;

        result.try_into().map(Some)
    }

    async fn delete(&self, id: &PropertyId) -> Result<bool, DomainError> {
        let result = properties::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<properties::Model> for Property {
    type Error = DomainError;

    fn try_from(model: properties::Model) -> Result<Self, Self::Error> {
        let kind = model.kind.parse().map_err(DomainError::Internal)?;
        let boundary: Vec<Point> = serde_json::from_value(model.boundary).map_err(|e| {
            DomainError::Internal(format!("Corrupt boundary on property {}: {}", model.id, e))
        })?;

        Ok(Property {
            id: PropertyId(model.id),
            name: model.name,
            kind,
            location: Location {
                country: model.country,
                state: model.state,
                city: model.city,
                address: model.address,
            },
            boundary,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
