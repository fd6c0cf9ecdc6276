//! Progress reporting for traffic simulations

pub mod reporter;
