//! Zero-order hold: samples its input on a periodic schedule.

use crate::context::Context;
use crate::events::DiscreteEvent;
use crate::output::SystemOutput;
use crate::port::PortDescriptor;
use crate::scalar::Scalar;
use crate::state::DiscreteState;
use crate::system::{System, SystemConfig};

/// Latches its input vector into discrete state on every periodic update and
/// outputs the held sample in between.
///
/// One input port, one vector output of the same width, discrete state of
/// that width. The first sample is taken at `t = period`.
#[derive(Debug, Clone)]
pub struct ZeroOrderHold<T: Scalar> {
    config: SystemConfig<T>,
    width: usize,
}

impl<T: Scalar> ZeroOrderHold<T> {
    /// Create a hold of vector `width` sampling every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive.
    pub fn new(period: T, width: usize) -> Self {
        let mut config = SystemConfig::new();
        config.declare_input_port();
        config.declare_output_port(PortDescriptor::vector(width));
        config.declare_update_period(period);
        Self { config, width }
    }

    /// Width of the sampled vector.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<T: Scalar> System<T> for ZeroOrderHold<T> {
    fn config(&self) -> &SystemConfig<T> {
        &self.config
    }

    fn allocate_discrete_state(&self) -> DiscreteState<T> {
        DiscreteState::zeros(self.width)
    }

    fn do_discrete_update(
        &self,
        context: &Context<T>,
        _event: &DiscreteEvent,
        next: &mut DiscreteState<T>,
    ) {
        // Latch the current input; an unconnected input keeps the zeros the
        // result storage was allocated with.
        if let Some(input) = context.input(0) {
            next.vector_mut().copy_from(input);
        }
    }

    fn calc_output(&self, context: &Context<T>, output: &mut SystemOutput<T>) {
        output
            .port_mut(0)
            .value_mut()
            .copy_from(context.discrete_state().vector());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    #[test]
    fn test_zoh_context_shape() {
        let zoh = ZeroOrderHold::<f64>::new(0.1, 3);
        let context = zoh.create_default_context();

        assert_eq!(context.num_input_ports(), 1);
        assert!(context.continuous_state().is_empty());
        assert_eq!(context.discrete_state().len(), 3);
    }

    #[test]
    fn test_zoh_first_tick_at_period() {
        let zoh = ZeroOrderHold::<f64>::new(0.1, 1);
        let context = zoh.create_default_context();
        let actions = zoh.calc_next_update_time(&context);
        assert_eq!(actions.time, 0.1);
        assert_eq!(actions.events.len(), 1);
    }

    #[test]
    fn test_zoh_latches_input() {
        let zoh = ZeroOrderHold::<f64>::new(0.1, 2);
        let mut context = zoh.create_default_context();
        context.fix_input(0, DVector::from_vec(vec![3.0, -1.0]));

        let mut next = zoh.allocate_difference_variables();
        let event = DiscreteEvent {
            action: crate::events::ActionKind::DiscreteUpdate,
        };
        zoh.do_discrete_update(&context, &event, &mut next);

        assert_eq!(next.vector()[0], 3.0);
        assert_eq!(next.vector()[1], -1.0);
    }

    #[test]
    fn test_zoh_output_is_held_sample() {
        let zoh = ZeroOrderHold::<f64>::new(0.1, 2);
        let mut context = zoh.create_default_context();
        context
            .discrete_state_mut()
            .vector_mut()
            .copy_from(&DVector::from_vec(vec![7.0, 8.0]));

        let mut output = zoh.allocate_output(&context);
        zoh.calc_output(&context, &mut output);

        assert_eq!(output.port(0).value()[0], 7.0);
        assert_eq!(output.port(0).value()[1], 8.0);
    }

    #[test]
    fn test_zoh_unconnected_input_holds_zero() {
        let zoh = ZeroOrderHold::<f64>::new(0.1, 2);
        let context = zoh.create_default_context();

        let mut next = zoh.allocate_difference_variables();
        let event = DiscreteEvent {
            action: crate::events::ActionKind::DiscreteUpdate,
        };
        zoh.do_discrete_update(&context, &event, &mut next);

        assert!(next.vector().iter().all(|v| *v == 0.0));
    }
}
