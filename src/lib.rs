pub mod configuration;
mod routers;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod views;

pub use routers::pages;
