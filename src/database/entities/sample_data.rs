use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub data_type: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
