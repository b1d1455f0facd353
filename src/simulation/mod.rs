pub mod linalg;
pub mod error;
pub mod states;
pub mod params;
pub mod forcing;
pub mod integrator;
pub mod steady_state;
pub mod scenario;
