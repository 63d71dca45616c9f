//! Map view: development pins and district polygons.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPolygon {
    pub id: u32,
    pub name: String,
    pub coordinates: Vec<LatLng>,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub pins: Vec<MapPin>,
    pub polygons: Vec<MapPolygon>,
}

fn pins() -> Vec<MapPin> {
    [
        (1, "Orlando Development", 28.5383, -81.3792, "residential", "$450,000", "active"),
        (2, "Houston Complex", 29.7604, -95.3698, "commercial", "$1,200,000", "pending"),
        (3, "Austin Heights", 30.2672, -97.7431, "residential", "$650,000", "active"),
        (4, "Tampa Bay Project", 27.9506, -82.4572, "mixed", "$850,000", "completed"),
        (5, "Chicago Downtown", 41.8781, -87.6298, "commercial", "$2,500,000", "active"),
        (6, "Indianapolis Center", 39.7684, -86.1581, "residential", "$380,000", "pending"),
        (7, "Atlanta Metro", 33.749, -84.388, "mixed", "$720,000", "active"),
        (8, "Las Vegas Strip", 36.1699, -115.1398, "commercial", "$3,100,000", "active"),
    ]
    .into_iter()
    .map(|(id, name, lat, lng, kind, price, status)| MapPin {
        id,
        name: name.to_string(),
        lat,
        lng,
        kind: kind.to_string(),
        price: price.to_string(),
        status: status.to_string(),
    })
    .collect()
}

fn square(id: u32, name: &str, lat: f64, lng: f64, color: &str) -> MapPolygon {
    MapPolygon {
        id,
        name: name.to_string(),
        coordinates: vec![
            LatLng { lat, lng },
            LatLng { lat: lat + 0.01, lng },
            LatLng { lat: lat + 0.01, lng: lng + 0.01 },
            LatLng { lat, lng: lng + 0.01 },
        ],
        color: color.to_string(),
        opacity: 0.3,
    }
}

fn polygons() -> Vec<MapPolygon> {
    vec![
        square(1, "Downtown District", 28.5383, -81.3792, "#3B82F6"),
        square(2, "Suburban Area", 29.7604, -95.3698, "#10B981"),
    ]
}

/// Pins matching `kind` and `status` exactly (each optional), plus all polygons
pub fn map_data(kind: Option<&str>, status: Option<&str>) -> MapData {
    let pins = pins()
        .into_iter()
        .filter(|p| kind.map_or(true, |k| p.kind == k))
        .filter(|p| status.map_or(true, |s| p.status == s))
        .collect();

    MapData {
        pins,
        polygons: polygons(),
    }
}
