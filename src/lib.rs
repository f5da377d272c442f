pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod relay_client;
pub mod reveal;
pub mod site;
pub mod telemetry;
pub mod utils;
