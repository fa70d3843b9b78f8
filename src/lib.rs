pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
