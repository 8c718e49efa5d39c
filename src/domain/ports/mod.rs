pub mod clock;
pub mod diagnostic_context;
pub mod metric_factory;
pub mod session_repository;
pub mod vacation_repository;
