// Domain layer - Weather models and pure mapping logic
pub mod codec;
pub mod conditions;
pub mod session;
