// Infrastructure layer - External dependencies and adapters
pub mod open_meteo;
pub mod terminal;
