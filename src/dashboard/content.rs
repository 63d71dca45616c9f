//! Headline metrics, builder brands, and assistant greetings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub logo: String,
    pub bg_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
}

pub fn metrics() -> Vec<Metric> {
    [
        ("Community", "$1,781", None),
        ("Total Homes", "$1,781", None),
        ("Average Price Per Sq. Ft", "$207", None),
        ("Total No. of Homes Sold", "$169,580", None),
        ("Sales Pace", "$9,999", Some("-99% since last month")),
        ("Price Increase", "$9,999", Some("-31% since last month")),
    ]
    .into_iter()
    .map(|(label, value, change)| Metric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.map(str::to_string),
    })
    .collect()
}

pub fn companies() -> Vec<Company> {
    [
        ("kb HOME", "bg-yellow-400", "text-black"),
        ("NVR", "bg-red-800", "text-white"),
        ("LENNAR", "bg-blue-600", "text-white"),
        ("RICHMOND AMERICAN HOMES", "bg-red-600", "text-white"),
        ("tri pointe HOMES", "bg-white", "text-gray-800"),
        ("SMITH DOUGLAS HOMES", "bg-white", "text-green-600"),
    ]
    .into_iter()
    .map(|(name, bg, text)| Company {
        name: name.to_string(),
        logo: name.to_string(),
        bg_color: bg.to_string(),
        text_color: text.to_string(),
    })
    .collect()
}

/// The assistant's opening messages, stamped with `now`
pub fn chatbot_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    [
        "Hello! I'm your real estate analytics assistant. How can I help you today?",
        "I can help you with market analysis, property data, and investment insights.",
        "Try asking me about market trends, property prices, or specific locations.",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, message)| ChatMessage {
        id: i as u32 + 1,
        kind: "bot".to_string(),
        message: message.to_string(),
        timestamp: timestamp.clone(),
    })
    .collect()
}
