//! dynsim - leaf-system foundation for dynamical-system simulation
//!
//! The leaf-node layer of a hierarchical simulation framework: a [`System`]
//! declares typed input/output ports and the shape of its continuous and
//! discrete state; a [`Context`] holds the actual state values for one
//! simulation run. An external stepping loop owns time: it asks the system
//! for the next scheduled update instant, advances to it, and applies the
//! returned discrete updates.
//!
//! # Architecture
//!
//! - A system is configured once (ports, periodic schedule) and then shared
//!   immutably by any number of runs; each run owns its own context.
//! - All state and output storage is `nalgebra::DVector`, sized from the
//!   declarations and zero-initialized.
//! - The whole core is generic over the [`Scalar`] carrying time and state,
//!   so the same system runs with `f64` or with a differentiable scalar for
//!   sensitivity analysis. Scheduling arithmetic is only defined for scalars
//!   implementing [`RealScalar`]; for anything else a scheduling query is a
//!   fatal error, selected per type at compile time.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynsim::prelude::*;
//! use nalgebra::DVector;
//!
//! // Sample an external signal every 10 ms.
//! let zoh = ZeroOrderHold::<f64>::new(0.01, 1);
//! let mut context = zoh.create_default_context();
//! let mut output = zoh.allocate_output(&context);
//!
//! let actions = zoh.calc_next_update_time(&context);
//! context.set_time(actions.time);
//! context.fix_input(0, DVector::from_element(1, 2.5));
//!
//! let mut next = zoh.allocate_difference_variables();
//! for event in &actions.events {
//!     zoh.do_discrete_update(&context, event, &mut next);
//! }
//! *context.discrete_state_mut() = next;
//! zoh.calc_output(&context, &mut output);
//! ```

pub mod context;
pub mod events;
pub mod output;
pub mod port;
pub mod scalar;
pub mod state;
pub mod system;
pub mod systems;

pub use context::Context;
pub use events::{ActionKind, DiscreteEvent, PeriodicEvent, UpdateActions};
pub use output::{OutputPort, SystemOutput};
pub use port::{PortDataKind, PortDescriptor};
pub use scalar::{RealScalar, Scalar};
pub use state::{ContinuousState, DiscreteState};
pub use system::{System, SystemConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::events::{ActionKind, DiscreteEvent, PeriodicEvent, UpdateActions};
    pub use crate::output::{OutputPort, SystemOutput};
    pub use crate::port::{PortDataKind, PortDescriptor};
    pub use crate::scalar::{RealScalar, Scalar};
    pub use crate::state::{ContinuousState, DiscreteState};
    pub use crate::system::{System, SystemConfig};
    pub use crate::systems::{Integrator, ZeroOrderHold};
}
