//! Market view: four "Top 10 MSA" rankings derived from the MSA list.
//!
//! Values are synthetic. A `date` selection scales every figure, and the
//! site-plan filter scales them further.

use serde::Serialize;

/// Filter value that boosts the market figures
pub const SITE_PLAN_FILTER: &str = "Builders with available Site Plan";

const MSAS: [&str; 10] = [
    "Orlando-Kissimmee-Sanford",
    "Houston-Pasadena-The Woodlands",
    "Austin-Round Rock-San Marcos",
    "Tampa-St.Petersburg-Clearwater",
    "Chicago-Naperville-Elgin",
    "Indianapolis-Carmel-Greenwood",
    "Atlanta-Sandy Springs-Roswell",
    "Las Vegas-Henderson-North Las Vegas",
    "Dallas-Fort Worth-Arlington",
    "San Antonio-New Braunfels",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MsaValue {
    pub msa: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketTable {
    pub title: String,
    pub columns: Vec<String>,
    pub data: Vec<MsaValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketData {
    #[serde(rename = "tableData")]
    pub table_data: Vec<MarketTable>,
}

#[derive(Debug, Clone, Copy)]
struct Multipliers {
    data: f64,
    percentage: f64,
}

impl Multipliers {
    fn resolve(filter: Option<&str>, date: Option<&str>) -> Self {
        let mut m = Multipliers {
            data: 1.0,
            percentage: 1.0,
        };

        if date.is_some_and(|d| !d.is_empty()) {
            let index = (MSAS.len() % 12) as f64;
            m.data = 0.8 + index * 0.1;
            m.percentage = 0.9 + index * 0.05;
        }

        if filter == Some(SITE_PLAN_FILTER) {
            m.data *= 1.2;
            m.percentage *= 1.1;
        }

        m
    }
}

/// Build the four market rankings
pub fn market_data(filter: Option<&str>, date: Option<&str>) -> MarketData {
    let m = Multipliers::resolve(filter, date);

    let homes = |step: f64| -> Vec<MsaValue> {
        rank(|i| {
            let value = (8000.0 * m.data * (1.0 + i * step)).floor() as u64;
            group_thousands(value)
        })
    };
    let percent = |step: f64| -> Vec<MsaValue> {
        rank(|i| format!("{:.1}%", 16.0 * m.percentage * (1.0 + i * step)))
    };

    MarketData {
        table_data: vec![
            table("Top 10 MSA by Homes Closed", "Homes Closed", homes(0.05)),
            table("Top 10 MSA by Average Price Increase", "Price Increase", percent(0.02)),
            table("Top 10 MSA by Sales Pace", "Homes Closed", homes(0.03)),
            table("Top 10 MSA by New Homes Added", "Price Increase", percent(0.015)),
        ],
    }
}

fn rank(value: impl Fn(f64) -> String) -> Vec<MsaValue> {
    MSAS.iter()
        .enumerate()
        .map(|(i, msa)| MsaValue {
            msa: msa.to_string(),
            value: value(i as f64),
        })
        .collect()
}

fn table(title: &str, value_column: &str, data: Vec<MsaValue>) -> MarketTable {
    MarketTable {
        title: title.to_string(),
        columns: vec!["MSA".to_string(), value_column.to_string()],
        data,
    }
}

/// `12345` → `"12,345"`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(8000), "8,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_baseline_values() {
        let data = market_data(None, None);
        assert_eq!(data.table_data.len(), 4);

        let closed = &data.table_data[0];
        assert_eq!(closed.title, "Top 10 MSA by Homes Closed");
        assert_eq!(closed.columns, vec!["MSA", "Homes Closed"]);
        assert_eq!(closed.data.len(), 10);
        assert_eq!(closed.data[0].msa, "Orlando-Kissimmee-Sanford");
        assert_eq!(closed.data[0].value, "8,000");
        assert_eq!(closed.data[2].value, "8,800");

        let increase = &data.table_data[1];
        assert_eq!(increase.data[0].value, "16.0%");
    }

    #[test]
    fn test_site_plan_filter_boosts_figures() {
        let data = market_data(Some(SITE_PLAN_FILTER), None);
        assert_eq!(data.table_data[0].data[0].value, "9,600");
        assert_eq!(data.table_data[1].data[0].value, "17.6%");
    }

    #[test]
    fn test_date_scales_figures() {
        let data = market_data(None, Some("2025-01"));
        assert_eq!(data.table_data[0].data[0].value, "14,400");
        assert_eq!(data.table_data[1].data[0].value, "22.4%");
    }

    #[test]
    fn test_unrelated_filter_ignored() {
        assert_eq!(market_data(Some("Everything"), None), market_data(None, None));
    }
}
