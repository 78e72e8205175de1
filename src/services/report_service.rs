use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::database::entities::{reports, reports::Entity as Reports};
use crate::errors::{StoreError, StoreResult};
use crate::services::json_columns::{self, Layout};

const ENTITY: &str = "Report";
const LAYOUT_COLUMN: &str = "layout";

/// A report as returned to callers, with `layout` decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct Report {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub layout: Layout,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<reports::Model> for Report {
    type Error = StoreError;

    fn try_from(model: reports::Model) -> StoreResult<Self> {
        let layout = json_columns::decode_layout(LAYOUT_COLUMN, model.layout.as_deref())?;

        Ok(Report {
            id: model.id,
            name: model.name,
            description: model.description.unwrap_or_default(),
            layout,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Fields accepted when creating a report.
///
/// `name` is optional at the type level so a missing name surfaces as a
/// validation error rather than a body-shape error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NewReport {
    pub name: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<Object>>))]
    pub layout: Option<Layout>,
}

impl NewReport {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }
}

/// Partial update. `None` (field absent or `null`) leaves the stored value as is;
/// a provided `layout` replaces the whole block list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReportPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<Object>>))]
    pub layout: Option<Layout>,
}

impl ReportPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.layout.is_none()
    }
}

#[derive(Clone)]
pub struct ReportService {
    db: DatabaseConnection,
}

impl ReportService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All reports in primary-key order
    pub async fn list(&self) -> StoreResult<Vec<Report>> {
        let models = Reports::find()
            .order_by_asc(reports::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Report::try_from).collect()
    }

    pub async fn create(&self, input: NewReport) -> StoreResult<Report> {
        let name = validate_name(input.name.as_deref())?;
        let layout = input.layout.unwrap_or_default();
        let now = Utc::now();

        let report = reports::ActiveModel {
            name: Set(name),
            description: Set(Some(input.description.unwrap_or_default())),
            layout: Set(Some(json_columns::encode(LAYOUT_COLUMN, &layout)?)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let report = report.insert(&self.db).await?;
        info!("Created report {} with {} layout blocks", report.id, layout.len());

        Report::try_from(report)
    }

    pub async fn get(&self, id: i32) -> StoreResult<Report> {
        Report::try_from(self.find_model(id).await?)
    }

    pub async fn update(&self, id: i32, patch: ReportPatch) -> StoreResult<Report> {
        let model = self.find_model(id).await?;
        if patch.is_empty() {
            debug!("Empty patch for report {}, touching updated_at only", id);
        }
        let mut report = model.into_active_model();

        if let Some(name) = patch.name.as_deref() {
            report.name = Set(validate_name(Some(name))?);
        }

        if let Some(description) = patch.description {
            report.description = Set(Some(description));
        }

        if let Some(layout) = &patch.layout {
            report.layout = Set(Some(json_columns::encode(LAYOUT_COLUMN, layout)?));
        }

        // Refreshed on every successful update, including empty patches.
        report.updated_at = Set(Utc::now());

        let report = report.update(&self.db).await?;
        debug!("Updated report {}", report.id);

        Report::try_from(report)
    }

    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = Reports::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found(ENTITY, id));
        }

        info!("Deleted report {}", id);
        Ok(())
    }

    async fn find_model(&self, id: i32) -> StoreResult<reports::Model> {
        Reports::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }
}

fn validate_name(name: Option<&str>) -> StoreResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        Some(_) => Err(StoreError::validation("Report name cannot be empty")),
        None => Err(StoreError::validation("Report name is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(layout: Option<&str>, description: Option<&str>) -> reports::Model {
        let now = Utc::now();
        reports::Model {
            id: 3,
            name: "Q1 Report".to_string(),
            description: description.map(str::to_string),
            layout: layout.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(Some("Q1")).unwrap(), "Q1");
        assert!(matches!(validate_name(None), Err(StoreError::Validation(_))));
        assert!(matches!(
            validate_name(Some("   ")),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_model_with_null_columns_maps_to_defaults() {
        let report = Report::try_from(model(None, None)).unwrap();
        assert_eq!(report.description, "");
        assert!(report.layout.is_empty());
    }

    #[test]
    fn test_model_layout_is_decoded() {
        let report =
            Report::try_from(model(Some(r#"[{"type":"header","text":"Q1"}]"#), Some("d")))
                .unwrap();
        assert_eq!(
            serde_json::to_value(&report.layout).unwrap(),
            json!([{"type": "header", "text": "Q1"}])
        );
        assert_eq!(report.description, "d");
    }

    #[test]
    fn test_corrupt_layout_fails_clearly() {
        let err = Report::try_from(model(Some("not json"), None)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Serialization { column: "layout", .. }
        ));
    }

    #[test]
    fn test_patch_treats_null_like_absent() {
        let patch: ReportPatch =
            serde_json::from_value(json!({"name": null, "description": null})).unwrap();
        assert!(patch.is_empty());

        let patch: ReportPatch = serde_json::from_value(json!({"layout": []})).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.layout, Some(Layout::new()));
    }
}
