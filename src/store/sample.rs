//! Sample property listings served when no data file is configured.

use serde_json::json;

use crate::table::Record;

/// The eight sample listings, ids 1 through 8
pub fn property_listings() -> Vec<Record> {
    let rows = [
        (1, "Blue Velvet Group | 3 Roots", "3 Roots", "$999,988", "4232", "699", "Active", "West"),
        (2, "Mulholland drive", "3 Roots", "$999,988", "4232", "699", "Pending", "South"),
        (3, "Eraser head", "3 Roots", "$999,988", "4232", "699", "Active", "North"),
        (4, "Lost Highway", "3 Roots", "$999,988", "4232", "699", "Completed", "East"),
        (5, "Twin Peaks", "3 Roots", "$999,988", "4232", "699", "Active", "West"),
        (
            6,
            "Blue Velvet Group | 4 Roots",
            "4 Roots",
            "$1,199,988",
            "5232",
            "799",
            "Active",
            "West",
        ),
        (7, "Mulholland drive II", "4 Roots", "$1,199,988", "5232", "799", "Pending", "South"),
        (8, "Eraser head II", "4 Roots", "$1,199,988", "5232", "799", "Active", "North"),
    ];

    rows.into_iter()
        .filter_map(|(id, builder, lots, price, sqft, avg_price, status, region)| {
            Record::from_value(json!({
                "id": id,
                "builder": builder,
                "lots": lots,
                "price": price,
                "sqft": sqft,
                "avgPrice": avg_price,
                "status": status,
                "region": region,
            }))
        })
        .collect()
}
