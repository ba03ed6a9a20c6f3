//! Per-run simulation context.

use nalgebra::DVector;

use crate::scalar::Scalar;
use crate::state::{ContinuousState, DiscreteState};

/// Run-time state container for one simulation execution.
///
/// A context is produced by [`System::create_default_context`] and owned
/// exclusively by one stepping loop. The system it was created from stays
/// immutable and can be shared by any number of concurrent runs, each with
/// its own context. State vector sizes are fixed at creation and never
/// change during the run.
///
/// [`System::create_default_context`]: crate::system::System::create_default_context
#[derive(Debug, Clone)]
pub struct Context<T: Scalar> {
    time: T,
    continuous_state: ContinuousState<T>,
    discrete_state: DiscreteState<T>,
    inputs: Vec<Option<DVector<T>>>,
}

impl<T: Scalar> Context<T> {
    pub(crate) fn new(
        num_input_ports: usize,
        continuous_state: ContinuousState<T>,
        discrete_state: DiscreteState<T>,
    ) -> Self {
        Self {
            time: T::zero(),
            continuous_state,
            discrete_state,
            inputs: vec![None; num_input_ports],
        }
    }

    /// Current simulated time.
    pub fn time(&self) -> &T {
        &self.time
    }

    /// Set the simulated time. The stepping loop advances time; the core
    /// never does so on its own.
    pub fn set_time(&mut self, time: T) {
        self.time = time;
    }

    pub fn continuous_state(&self) -> &ContinuousState<T> {
        &self.continuous_state
    }

    pub fn continuous_state_mut(&mut self) -> &mut ContinuousState<T> {
        &mut self.continuous_state
    }

    pub fn discrete_state(&self) -> &DiscreteState<T> {
        &self.discrete_state
    }

    pub fn discrete_state_mut(&mut self) -> &mut DiscreteState<T> {
        &mut self.discrete_state
    }

    /// Number of input-port slots in the cache.
    pub fn num_input_ports(&self) -> usize {
        self.inputs.len()
    }

    /// Fix the cached value of input port `port`.
    ///
    /// # Panics
    ///
    /// Panics if `port` is out of range.
    pub fn fix_input(&mut self, port: usize, value: DVector<T>) {
        self.inputs[port] = Some(value);
    }

    /// Cached value of input port `port`, if one has been fixed.
    pub fn input(&self, port: usize) -> Option<&DVector<T>> {
        self.inputs[port].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_at_time_zero() {
        let context = Context::<f64>::new(2, ContinuousState::empty(), DiscreteState::empty());
        assert_eq!(*context.time(), 0.0);
        assert_eq!(context.num_input_ports(), 2);
        assert!(context.input(0).is_none());
        assert!(context.input(1).is_none());
    }

    #[test]
    fn test_fix_input() {
        let mut context = Context::<f64>::new(1, ContinuousState::empty(), DiscreteState::empty());
        context.fix_input(0, DVector::from_element(3, 1.5));

        let value = context.input(0).unwrap();
        assert_eq!(value.len(), 3);
        assert_eq!(value[0], 1.5);
    }

    #[test]
    #[should_panic]
    fn test_fix_input_out_of_range() {
        let mut context = Context::<f64>::new(1, ContinuousState::empty(), DiscreteState::empty());
        context.fix_input(1, DVector::from_element(1, 0.0));
    }
}
