pub mod endpoints;
pub mod regions;
pub mod sweep;
