//! # Dashboard Views
//!
//! Data behind the non-table views: market rankings, acquisition
//! metrics, builder brands, the property map, and the assistant's
//! greeting. None of it shares state with the table pipeline.

mod content;
mod market;
mod map;

pub use content::{chatbot_messages, companies, metrics, ChatMessage, Company, Metric};
pub use map::{map_data, LatLng, MapData, MapPin, MapPolygon};
pub use market::{market_data, MarketData, MarketTable, MsaValue, SITE_PLAN_FILTER};

use serde::Serialize;

use crate::table::Record;

/// Acquisition view: headline metrics plus every listing
#[derive(Debug, Clone, Serialize)]
pub struct AcquisitionData {
    pub metrics: Vec<Metric>,
    #[serde(rename = "tableData")]
    pub table_data: Vec<Record>,
}

pub fn acquisition_data(records: &[Record]) -> AcquisitionData {
    AcquisitionData {
        metrics: metrics(),
        table_data: records.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample;

    #[test]
    fn test_acquisition_data_shape() {
        let data = acquisition_data(&sample::property_listings());
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["metrics"].as_array().unwrap().len(), 6);
        assert_eq!(json["tableData"].as_array().unwrap().len(), 8);
        assert_eq!(json["tableData"][0]["builder"], "Blue Velvet Group | 3 Roots");
    }
}
