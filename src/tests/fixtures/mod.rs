// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod commands;
pub mod expenses;
pub mod http;
pub mod state;
pub mod trips;
