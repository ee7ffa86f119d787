pub mod patient;
pub mod record;
pub mod risk;
pub mod soap;
