pub mod backend_health_handler;
pub mod index_handler;
pub mod match_event_handler;
pub mod match_handler;
pub mod request_errors;
