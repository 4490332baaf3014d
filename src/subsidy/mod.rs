pub mod args;
pub mod errors;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sheet::SheetIndex;
use errors::SubsidyError;

/// Join type that draws the number-port subsidy; every other join type draws the device one.
pub const NUMBER_PORT: &str = "번호이동";

/// Snapshot of the publicly disclosed subsidy table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicSubsidyData {
    pub manufacturers: IndexMap<String, Manufacturer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_monthly_fees: Option<IndexMap<String, Vec<i64>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(default)]
    pub models: Vec<DeviceModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceModel {
    pub model_number: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub support_info: SupportInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportInfo {
    #[serde(default)]
    pub sections: Vec<SupportSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportSection {
    #[serde(default)]
    pub carriers: IndexMap<String, CarrierSupport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierSupport {
    #[serde(default)]
    pub plan_name: String,
    pub monthly_fee: i64,
    #[serde(default)]
    pub device_support: i64,
    #[serde(default)]
    pub number_port_support: i64,
}

impl CarrierSupport {
    pub fn amount_for(&self, join_type: &str) -> i64 {
        if join_type == NUMBER_PORT {
            self.number_port_support
        } else {
            self.device_support
        }
    }
}

impl PublicSubsidyData {
    pub fn load(path: &str) -> Result<Self, SubsidyError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SubsidyError::FileError(format!("failed to read {}: {}", path, e)))?;
        let data = Self::from_json(&text)?;
        tracing::debug!(
            path,
            manufacturers = data.manufacturers.len(),
            models = data.model_count(),
            "loaded public subsidy data"
        );
        Ok(data)
    }

    pub fn from_json(text: &str) -> Result<Self, SubsidyError> {
        serde_json::from_str(text).map_err(|e| SubsidyError::InvalidData(e.to_string()))
    }

    pub fn model_count(&self) -> usize {
        self.manufacturers.values().map(|m| m.models.len()).sum()
    }

    pub fn models<'a>(&'a self, model_number: &'a str) -> impl Iterator<Item = &'a DeviceModel> + 'a {
        self.manufacturers
            .values()
            .flat_map(|m| m.models.iter())
            .filter(move |model| model.model_number == model_number)
    }

    /// Selectable monthly fees published for a carrier.
    pub fn monthly_fees_for(&self, carrier: &str) -> &[i64] {
        self.carrier_monthly_fees
            .as_ref()
            .and_then(|fees| fees.get(carrier))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First positive subsidy for the model, carrier and either fee.
    ///
    /// A zero amount is not an offer, so the search keeps going past it.
    pub fn find_support(
        &self,
        standard_model: &str,
        carrier: &str,
        fees: &[i64],
        join_type: &str,
    ) -> Option<i64> {
        self.models(standard_model)
            .flat_map(|model| model.support_info.sections.iter())
            .filter_map(|section| section.carriers.get(carrier))
            .filter(|support| fees.contains(&support.monthly_fee))
            .map(|support| support.amount_for(join_type))
            .find(|amount| *amount > 0)
    }
}

/// Public subsidy for the device of `row` under the offer of `col`, in currency units.
///
/// Returns 0 whenever there is nothing to look up: no standard model on the row,
/// no monthly fee on the plan header, no carrier, or no subsidy data loaded.
pub fn get_public_support_amount(
    row: usize,
    col: usize,
    index: &SheetIndex,
    public: Option<&PublicSubsidyData>,
) -> i64 {
    let Some(public) = public else {
        return 0;
    };
    let Some(standard_model) = index
        .device(row)
        .and_then(|d| d.standard_model())
        .filter(|s| !s.is_empty())
    else {
        return 0;
    };
    let Some(header) = index.header(col) else {
        return 0;
    };
    if header.carrier.is_empty() {
        return 0;
    }

    let fees: Vec<i64> = header.plan_header().fees().collect();
    if fees.is_empty() {
        return 0;
    }

    public
        .find_support(standard_model, &header.carrier, &fees, &header.join_type)
        .unwrap_or(0)
}
