pub mod account_service;
pub mod activity_service;
pub mod query_service;
pub mod schema_service;
