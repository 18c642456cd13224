pub mod audit;
pub mod standardization_config;
pub mod vendor_import;
