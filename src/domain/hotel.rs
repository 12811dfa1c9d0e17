use std::fmt;

use serde::{Deserialize, Serialize};

/// Status token a supplier reports when it contributed rates.
pub const SUCCESS_TOKEN: &str = "success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub price: f64,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub supplier_a: String,
    pub supplier_b: String,
}

impl Diagnostics {
    pub fn label(&self) -> SupplierLabel {
        supplier_label(&self.supplier_a, &self.supplier_b)
    }
}

/// Decoded result of one search: the hotel list plus supplier diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub hotels: Vec<Hotel>,
    pub diagnostics: Option<Diagnostics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierLabel {
    SupplierA,
    SupplierB,
    BestOfBoth,
}

impl fmt::Display for SupplierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SupplierA => "Supplier A",
            Self::SupplierB => "Supplier B",
            Self::BestOfBoth => "Best of A or B",
        })
    }
}

fn is_success(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case(SUCCESS_TOKEN)
}

/// Which supplier the shown rates came from, given both status tokens.
pub fn supplier_label(supplier_a: &str, supplier_b: &str) -> SupplierLabel {
    match (is_success(supplier_a), is_success(supplier_b)) {
        (true, false) => SupplierLabel::SupplierA,
        (false, true) => SupplierLabel::SupplierB,
        _ => SupplierLabel::BestOfBoth,
    }
}

/// Formats a price in its shortest form, without a trailing `.0` for whole amounts.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{price}")
    }
}
