pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;
pub mod uploads;

pub use startup::run;
