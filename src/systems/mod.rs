//! Stock leaf systems.
//!
//! Small concrete systems built on the leaf protocol, usable directly or as
//! templates for application-defined systems.

mod integrator;
mod zero_order_hold;

pub use integrator::Integrator;
pub use zero_order_hold::ZeroOrderHold;
