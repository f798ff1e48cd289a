use serde::Serialize;

use phonehub_catalog::Item;
use phonehub_recommend::ScoredItem;

/// Fixed projection of an item for export. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub name: String,
    pub price: u32,
    pub camera: u8,
    pub battery: u8,
    pub performance: u8,
    pub display: u8,
    pub brand: String,
    pub storage: String,
    pub ram: String,
}

impl ExportRecord {
    /// Column headers, in field order.
    pub const COLUMNS: [&'static str; 9] = [
        "name",
        "price",
        "camera",
        "battery",
        "performance",
        "display",
        "brand",
        "storage",
        "ram",
    ];
}

impl From<&Item> for ExportRecord {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            camera: item.camera,
            battery: item.battery,
            performance: item.performance,
            display: item.display,
            brand: item.brand.clone(),
            storage: item.storage.clone(),
            ram: item.ram.clone(),
        }
    }
}

impl From<&ScoredItem> for ExportRecord {
    fn from(scored: &ScoredItem) -> Self {
        Self::from(&scored.item)
    }
}
