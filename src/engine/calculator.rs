use serde::Serialize;

use crate::dataset::{DataSet, find_additional};
use crate::sheet::encoding::leading_number;
use crate::sheet::{Sheet, SheetIndex};
use crate::subsidy::{PublicSubsidyData, get_public_support_amount};

/// Policy support and final amounts are expressed in this many currency units.
pub const AMOUNT_UNIT: i64 = 10_000;

/// Net price of one offer and the components it was built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FinalAmount {
    /// Net price in units of 10,000; negative means the offer pays out.
    pub final_amount: i64,
    pub price: i64,
    /// Units of 10,000.
    pub policy_support: i64,
    pub public_support: i64,
    pub additional_service: i64,
}

impl FinalAmount {
    /// Offers without policy support are not priced.
    pub fn is_priced(&self) -> bool {
        self.policy_support > 0 || self.final_amount != 0
    }
}

pub fn calculate_final_amount(
    row: usize,
    col: usize,
    index: &SheetIndex,
    datasets: &[DataSet],
    public: Option<&PublicSubsidyData>,
    current: &Sheet,
) -> FinalAmount {
    let price = index.device(row).and_then(|d| d.price).unwrap_or(0);
    let policy_support = leading_number(current.get(row, col)).unwrap_or(0);
    let public_support = get_public_support_amount(row, col, index, public);
    let additional_service = index
        .header(col)
        .map_or(0, |header| additional_service_total(datasets, &header.service_key()));

    let final_amount = if policy_support == 0 {
        0
    } else {
        net_amount(price, policy_support, public_support, additional_service)
    };

    FinalAmount {
        final_amount,
        price,
        policy_support,
        public_support,
        additional_service,
    }
}

/// `floor((price - policy * 10000 - public - additional) / 10000)`.
pub fn net_amount(price: i64, policy_support: i64, public_support: i64, additional_service: i64) -> i64 {
    let net = price
        .saturating_sub(policy_support.saturating_mul(AMOUNT_UNIT))
        .saturating_sub(public_support)
        .saturating_sub(additional_service);
    net.div_euclid(AMOUNT_UNIT)
}

/// Sum of rebates registered for `"<company>-<carrier>"` in the additional-service dataset.
pub fn additional_service_total(datasets: &[DataSet], key: &str) -> i64 {
    find_additional(datasets)
        .and_then(|services| services.get(key))
        .map_or(0, |items| items.iter().map(|item| item.discount).sum())
}
