pub mod calendar_service;
pub mod growth_service;
pub mod projection_service;
