// Application layer - Use cases and repository contracts
pub mod clock_repository;
pub mod dashboard_controller;
