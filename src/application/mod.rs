// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod display_renderer;
pub mod input_watcher;
pub mod weather_repository;
