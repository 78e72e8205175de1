use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::database::entities::{sample_data, sample_data::Entity as SampleDataEntity};
use crate::database::seed_data;
use crate::errors::{StoreError, StoreResult};
use crate::services::json_columns::{self, JsonObject};

const DATA_COLUMN: &str = "data";

/// A sample-data row with its `data` payload decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SampleData {
    pub id: i32,
    pub data_type: String,
    pub category: String,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub data: JsonObject,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<sample_data::Model> for SampleData {
    type Error = StoreError;

    fn try_from(model: sample_data::Model) -> StoreResult<Self> {
        let data = json_columns::decode_object(DATA_COLUMN, &model.data)?;

        Ok(SampleData {
            id: model.id,
            data_type: model.data_type,
            category: model.category,
            data,
            created_at: model.created_at,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was inserted; holds the number of rows written.
    Seeded(usize),
    /// Rows already existed, nothing was written.
    AlreadyInitialized,
}

impl SeedOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SeedOutcome::Seeded(_) => "Sample data initialized successfully",
            SeedOutcome::AlreadyInitialized => "Sample data already initialized",
        }
    }
}

#[derive(Clone)]
pub struct SampleDataService {
    db: DatabaseConnection,
}

impl SampleDataService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> StoreResult<Vec<SampleData>> {
        let rows = SampleDataEntity::find()
            .order_by_asc(sample_data::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(SampleData::try_from).collect()
    }

    /// Rows whose `data_type` matches exactly (case-sensitive).
    pub async fn list_by_type(&self, data_type: &str) -> StoreResult<Vec<SampleData>> {
        let rows = SampleDataEntity::find()
            .filter(sample_data::Column::DataType.eq(data_type))
            .order_by_asc(sample_data::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(SampleData::try_from).collect()
    }

    /// Inserts the seed catalog unless any sample data already exists.
    ///
    /// The existence check and the bulk insert share one transaction; a failed
    /// insert leaves the table untouched. Two seeders racing on separate
    /// connections can still both pass the check.
    pub async fn seed(&self) -> StoreResult<SeedOutcome> {
        let txn = self.db.begin().await?;

        if SampleDataEntity::find().one(&txn).await?.is_some() {
            txn.rollback().await?;
            info!("Sample data already exists, skipping seed data creation");
            return Ok(SeedOutcome::AlreadyInitialized);
        }

        let now = Utc::now();
        let rows = seed_data::catalog()
            .into_iter()
            .map(|entry| -> StoreResult<sample_data::ActiveModel> {
                Ok(sample_data::ActiveModel {
                    data_type: Set(entry.data_type.to_string()),
                    category: Set(entry.category.to_string()),
                    data: Set(json_columns::encode(DATA_COLUMN, &entry.data)?),
                    created_at: Set(now),
                    ..Default::default()
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let inserted = rows.len();
        SampleDataEntity::insert_many(rows).exec(&txn).await?;
        txn.commit().await?;

        info!("Seeded {} sample data rows", inserted);
        Ok(SeedOutcome::Seeded(inserted))
    }
}
