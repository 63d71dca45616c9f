//! realtydash - Real-estate analytics dashboard API
//!
//! A filter/sort/paginate table pipeline served over an authenticated
//! JSON API, plus the client-side controller that drives it.

pub mod auth;
pub mod cli;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod http_server;
pub mod store;
pub mod table;
