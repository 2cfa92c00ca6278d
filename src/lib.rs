pub mod config;
pub mod dispatch;
pub mod domain;
pub mod form;
pub mod mail;
pub mod routes;
pub mod run;
pub mod startup;
pub mod telemetry;
pub mod utils;
