//! Stock deployments built on the engine.

pub mod capitals;
