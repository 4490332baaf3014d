pub mod args;
pub mod errors;
pub mod helpers;
pub mod xlsx;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sheet::Sheet;
use errors::DataSetError;
use xlsx::{Workbook, rectangular};

/// Additional-service rebates keyed by `"<company>-<carrier>"`.
pub type AdditionalServices = IndexMap<String, Vec<ServiceDiscount>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDiscount {
    pub service: String,
    pub discount: i64,
}

/// One named dataset of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSet {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub data: DataSetData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DataSetData {
    Normal(Sheet),
    Integrated(Sheet),
    Additional(AdditionalServices),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSetKind {
    Normal,
    Integrated,
    Additional,
}

impl DataSet {
    pub fn kind(&self) -> DataSetKind {
        match self.data {
            DataSetData::Normal(_) => DataSetKind::Normal,
            DataSetData::Integrated(_) => DataSetKind::Integrated,
            DataSetData::Additional(_) => DataSetKind::Additional,
        }
    }

    /// Sheet of a policy dataset; `None` for integrated and additional ones.
    pub fn policy_sheet(&self) -> Option<&Sheet> {
        match &self.data {
            DataSetData::Normal(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub fn additional_services(&self) -> Option<&AdditionalServices> {
        match &self.data {
            DataSetData::Additional(services) => Some(services),
            _ => None,
        }
    }
}

/// First additional-service dataset, if any.
pub fn find_additional(datasets: &[DataSet]) -> Option<&AdditionalServices> {
    datasets.iter().find_map(DataSet::additional_services)
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub xlsx: Option<String>,
    #[serde(default)]
    pub subsidy: Option<String>,
}

/// Workspace file: settings plus one table per dataset, in file order.
#[derive(Debug, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub settings: Settings,
    #[serde(flatten)]
    pub datasets: IndexMap<String, DataSetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DataSetEntry {
    #[serde(rename = "type")]
    pub kind: DataSetKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub source: Option<EntrySource>,
}

/// Mutually exclusive content sources.
#[derive(Debug, Deserialize)]
pub enum EntrySource {
    /// `#WorksheetName` inside the workbook.
    #[serde(rename = "sheet")]
    Sheet(String),
    #[serde(rename = "rows")]
    Rows(Vec<Vec<String>>),
    #[serde(rename = "services")]
    Services(AdditionalServices),
}

pub fn load_workspace(path: &str) -> Result<Workspace, DataSetError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DataSetError::FileError(format!("failed to read {}: {}", path, e)))?;

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let workspace: Workspace = match ext.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| DataSetError::ParseError(e.to_string()))?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&text).map_err(|e| DataSetError::ParseError(e.to_string()))?
        }
        "json" => serde_json::from_str(&text).map_err(|e| DataSetError::ParseError(e.to_string()))?,
        _ => {
            return Err(DataSetError::FileError(format!(
                "unsupported workspace format: {}",
                path
            )));
        }
    };

    tracing::debug!(path, datasets = workspace.datasets.len(), "loaded workspace");
    Ok(workspace)
}

impl Workspace {
    /// Workbook named by `override_path`, else by `settings.xlsx`.
    pub fn open_workbook(&self, override_path: Option<&str>) -> Result<Option<Workbook>, DataSetError> {
        match override_path.or(self.settings.xlsx.as_deref()) {
            Some(path) => Workbook::open(path).map(Some),
            None => Ok(None),
        }
    }

    pub fn resolve(&self, workbook: Option<&Workbook>) -> Result<Vec<DataSet>, DataSetError> {
        self.datasets
            .iter()
            .map(|(id, entry)| {
                entry
                    .resolve(id, workbook)
                    .map_err(|e| DataSetError::InDataSet {
                        name: id.clone(),
                        source: Box::new(e),
                    })
            })
            .collect()
    }
}

impl DataSetEntry {
    fn resolve(&self, id: &str, workbook: Option<&Workbook>) -> Result<DataSet, DataSetError> {
        let data = match (self.kind, &self.source) {
            (DataSetKind::Additional, Some(EntrySource::Services(services))) => {
                DataSetData::Additional(services.clone())
            }
            (DataSetKind::Additional, None) => DataSetData::Additional(IndexMap::new()),
            (DataSetKind::Additional, Some(_)) => {
                return Err(DataSetError::InvalidSource(
                    "additional datasets take 'services', not a sheet".to_string(),
                ));
            }
            (kind, source) => {
                let sheet = Self::resolve_sheet(id, source.as_ref(), workbook)?;
                if kind == DataSetKind::Integrated {
                    DataSetData::Integrated(sheet)
                } else {
                    DataSetData::Normal(sheet)
                }
            }
        };

        Ok(DataSet {
            id: id.to_string(),
            name: self.name.clone().unwrap_or_else(|| id.to_string()),
            created_at: self.created_at.clone(),
            data,
        })
    }

    fn resolve_sheet(
        id: &str,
        source: Option<&EntrySource>,
        workbook: Option<&Workbook>,
    ) -> Result<Sheet, DataSetError> {
        match source {
            Some(EntrySource::Rows(rows)) => Ok(rectangular(rows.clone())),
            Some(EntrySource::Sheet(reference)) => {
                let sheet_name = reference.strip_prefix('#').ok_or_else(|| {
                    DataSetError::InvalidSource(format!(
                        "sheet reference must start with '#' prefix, got: {}",
                        reference
                    ))
                })?;
                let workbook =
                    workbook.ok_or_else(|| DataSetError::MissingWorkbook(id.to_string()))?;
                workbook.sheet(sheet_name)
            }
            Some(EntrySource::Services(_)) => Err(DataSetError::InvalidSource(
                "'services' is only valid for additional datasets".to_string(),
            )),
            None => Err(DataSetError::InvalidSource(
                "expected 'sheet' or 'rows'".to_string(),
            )),
        }
    }
}

/// Splits out the integrated sheet to fill: `wanted` by id, else the first integrated dataset.
pub fn select_integrated<'a>(
    datasets: &'a [DataSet],
    wanted: Option<&str>,
) -> Result<(&'a DataSet, &'a Sheet), DataSetError> {
    datasets
        .iter()
        .filter(|ds| wanted.is_none_or(|id| ds.id == id))
        .find_map(|ds| match &ds.data {
            DataSetData::Integrated(sheet) => Some((ds, sheet)),
            _ => None,
        })
        .ok_or_else(|| {
            DataSetError::IntegratedNotFound(wanted.unwrap_or("<first>").to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSPACE_TOML: &str = r#"
[settings]
subsidy = "public.json"

[sk_policy]
type = "normal"
name = "SK 정책"
rows = [["", "SK"], ["", "공시"]]

[dashboard]
type = "integrated"
rows = [["", "SK"], ["", "공시", "extra"]]

[extras]
type = "additional"
services = { "대리점A-SK" = [{ service = "보험", discount = 20000 }] }
"#;

    #[test]
    fn toml_workspace_resolves_in_order() {
        let workspace: Workspace = toml::from_str(WORKSPACE_TOML).unwrap();
        assert_eq!(workspace.settings.subsidy.as_deref(), Some("public.json"));

        let datasets = workspace.resolve(None).unwrap();
        let ids: Vec<_> = datasets.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["sk_policy", "dashboard", "extras"]);
        assert_eq!(datasets[0].name, "SK 정책");
        assert_eq!(datasets[1].kind(), DataSetKind::Integrated);

        let (_, integrated) = select_integrated(&datasets, None).unwrap();
        assert_eq!(integrated.col_count(), 3);

        let services = find_additional(&datasets).unwrap();
        assert_eq!(services["대리점A-SK"][0].discount, 20000);
    }

    #[test]
    fn sheet_reference_without_workbook_fails() {
        let workspace: Workspace = toml::from_str(
            r##"
[a]
type = "normal"
sheet = "#Policies"
"##,
        )
        .unwrap();
        let err = workspace.resolve(None).unwrap_err();
        assert!(matches!(err, DataSetError::InDataSet { .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn missing_integrated_dataset_is_reported() {
        let datasets = vec![DataSet {
            id: "only".into(),
            name: "only".into(),
            created_at: None,
            data: DataSetData::Normal(Sheet::blank(5, 2)),
        }];
        assert!(select_integrated(&datasets, None).is_err());
        assert!(select_integrated(&datasets, Some("only")).is_err());
    }

    #[test]
    fn dataset_json_is_tagged_by_type() {
        let ds: DataSet = serde_json::from_str(
            r#"{"id":"x","name":"X","type":"additional","data":{"A-KT":[{"service":"s","discount":5}]}}"#,
        )
        .unwrap();
        assert_eq!(ds.kind(), DataSetKind::Additional);
        assert!(ds.policy_sheet().is_none());
    }
}
