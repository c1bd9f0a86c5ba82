use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::model::asset::TargetKey;

/// User-declared stockpile targets, keyed by the full natural tuple.
///
/// The aggregation engine only reads; `upsert` and `delete` are the write
/// discipline exercised by the user-facing target CRUD surface.
pub struct StockpileTargetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockpileTargetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<entity::stockpile_target::Model>, DbErr> {
        entity::prelude::StockpileTarget::find()
            .filter(entity::stockpile_target::Column::UserId.eq(user_id))
            .order_by_asc(entity::stockpile_target::Column::TypeId)
            .order_by_asc(entity::stockpile_target::Column::LocationId)
            .all(self.db)
            .await
    }

    /// Insert or update the target for one natural key.
    ///
    /// Nullable key parts (container, division) are matched with IS NULL, so
    /// a target on a loose station asset never collides with a contained one.
    pub async fn upsert(
        &self,
        user_id: i64,
        key: &TargetKey,
        desired_quantity: i64,
        notes: Option<String>,
    ) -> Result<entity::stockpile_target::Model, DbErr> {
        let existing = self.find_by_key(user_id, key).await?;

        match existing {
            Some(model) => {
                let mut active: entity::stockpile_target::ActiveModel = model.into();
                active.desired_quantity = ActiveValue::Set(desired_quantity);
                active.notes = ActiveValue::Set(notes);
                active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                active.update(self.db).await
            }
            None => {
                entity::stockpile_target::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    type_id: ActiveValue::Set(key.type_id),
                    owner_kind: ActiveValue::Set(key.owner_kind.as_str().to_string()),
                    owner_id: ActiveValue::Set(key.owner_id),
                    location_id: ActiveValue::Set(key.location_id),
                    container_id: ActiveValue::Set(key.container_id),
                    division_number: ActiveValue::Set(key.division_number),
                    desired_quantity: ActiveValue::Set(desired_quantity),
                    notes: ActiveValue::Set(notes),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn delete(&self, user_id: i64, key: &TargetKey) -> Result<bool, DbErr> {
        match self.find_by_key(user_id, key).await? {
            Some(model) => {
                model.delete(self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_key(
        &self,
        user_id: i64,
        key: &TargetKey,
    ) -> Result<Option<entity::stockpile_target::Model>, DbErr> {
        let mut query = entity::prelude::StockpileTarget::find()
            .filter(entity::stockpile_target::Column::UserId.eq(user_id))
            .filter(entity::stockpile_target::Column::TypeId.eq(key.type_id))
            .filter(
                entity::stockpile_target::Column::OwnerKind
                    .eq(key.owner_kind.as_str().to_string()),
            )
            .filter(entity::stockpile_target::Column::OwnerId.eq(key.owner_id))
            .filter(entity::stockpile_target::Column::LocationId.eq(key.location_id));

        query = match key.container_id {
            Some(container_id) => {
                query.filter(entity::stockpile_target::Column::ContainerId.eq(container_id))
            }
            None => query.filter(entity::stockpile_target::Column::ContainerId.is_null()),
        };

        query = match key.division_number {
            Some(division) => {
                query.filter(entity::stockpile_target::Column::DivisionNumber.eq(division))
            }
            None => query.filter(entity::stockpile_target::Column::DivisionNumber.is_null()),
        };

        query.one(self.db).await
    }
}
