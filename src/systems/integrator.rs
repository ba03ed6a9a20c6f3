//! Vector integrator: continuous state driven by its input.

use crate::context::Context;
use crate::output::SystemOutput;
use crate::port::PortDescriptor;
use crate::scalar::Scalar;
use crate::state::ContinuousState;
use crate::system::{System, SystemConfig};

/// Integrates its input: the continuous state is the integral, the output
/// equals the state, and the derivative handed to the integration loop
/// equals the input.
#[derive(Debug, Clone)]
pub struct Integrator<T: Scalar> {
    config: SystemConfig<T>,
    width: usize,
}

impl<T: Scalar> Integrator<T> {
    /// Create an integrator over a vector of the given `width`.
    pub fn new(width: usize) -> Self {
        let mut config = SystemConfig::new();
        config.declare_input_port();
        config.declare_output_port(PortDescriptor::vector(width));
        Self { config, width }
    }

    /// Width of the integrated vector.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<T: Scalar> System<T> for Integrator<T> {
    fn config(&self) -> &SystemConfig<T> {
        &self.config
    }

    fn allocate_continuous_state(&self) -> ContinuousState<T> {
        ContinuousState::zeros(self.width)
    }

    fn calc_time_derivatives(&self, context: &Context<T>, derivatives: &mut ContinuousState<T>) {
        match context.input(0) {
            Some(input) => derivatives.vector_mut().copy_from(input),
            // An unconnected input integrates nothing.
            None => derivatives.vector_mut().fill(T::zero()),
        }
    }

    fn calc_output(&self, context: &Context<T>, output: &mut SystemOutput<T>) {
        output
            .port_mut(0)
            .value_mut()
            .copy_from(context.continuous_state().vector());
    }
}
