//! System configuration and the leaf-system protocol.

use nalgebra::DVector;

use crate::context::Context;
use crate::events::{ActionKind, DiscreteEvent, PeriodicEvent, UpdateActions};
use crate::output::{OutputPort, SystemOutput};
use crate::port::{PortDataKind, PortDescriptor};
use crate::scalar::Scalar;
use crate::state::{ContinuousState, DiscreteState};

/// Declared configuration of a leaf system: input-port count, output port
/// descriptors and the periodic update schedule.
///
/// Configuration is write-once: a system fills its config while being
/// constructed and leaves it untouched afterwards, so any number of runs can
/// read it concurrently.
#[derive(Debug, Clone)]
pub struct SystemConfig<T: Scalar> {
    num_input_ports: usize,
    output_ports: Vec<PortDescriptor>,
    periodic_events: Vec<PeriodicEvent<T>>,
}

impl<T: Scalar> SystemConfig<T> {
    pub fn new() -> Self {
        Self {
            num_input_ports: 0,
            output_ports: Vec::new(),
            periodic_events: Vec::new(),
        }
    }

    /// Declare one input port; returns its index.
    pub fn declare_input_port(&mut self) -> usize {
        self.num_input_ports += 1;
        self.num_input_ports - 1
    }

    /// Declare one output port; returns its index.
    pub fn declare_output_port(&mut self, descriptor: PortDescriptor) -> usize {
        self.output_ports.push(descriptor);
        self.output_ports.len() - 1
    }

    /// Declare a periodic discrete update with its first occurrence at
    /// `offset` and every `period` thereafter.
    ///
    /// Replaces any previously declared schedule: at most one declaration's
    /// worth of events is active at a time.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive or `offset` is negative.
    pub fn declare_periodic_update(&mut self, period: T, offset: T) {
        assert!(
            period > T::zero(),
            "update period must be positive, got {:?}",
            period
        );
        assert!(
            offset >= T::zero(),
            "update offset must be non-negative, got {:?}",
            offset
        );
        self.periodic_events = vec![PeriodicEvent {
            period,
            offset,
            event: DiscreteEvent {
                action: ActionKind::DiscreteUpdate,
            },
        }];
    }

    /// Declare a periodic discrete update whose first tick lands at
    /// `period`. Shorthand for a zero offset.
    pub fn declare_update_period(&mut self, period: T) {
        self.declare_periodic_update(period, T::zero());
    }

    /// Number of declared input ports.
    pub fn num_input_ports(&self) -> usize {
        self.num_input_ports
    }

    /// Declared output ports, in declaration order.
    pub fn output_ports(&self) -> &[PortDescriptor] {
        &self.output_ports
    }

    /// Currently active periodic events.
    pub fn periodic_events(&self) -> &[PeriodicEvent<T>] {
        &self.periodic_events
    }
}

impl<T: Scalar> Default for SystemConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The leaf-system protocol: state and output allocation plus scheduling.
///
/// Concrete systems implement [`config`](System::config) and override the
/// extension points they need; everything else is provided. A system is
/// immutable once configured and may be shared by any number of concurrent
/// runs, each holding its own [`Context`].
pub trait System<T: Scalar> {
    /// The system's declared configuration.
    fn config(&self) -> &SystemConfig<T>;

    /// Shape of the continuous state. Defaults to no state; systems with
    /// continuous state variables override.
    fn allocate_continuous_state(&self) -> ContinuousState<T> {
        ContinuousState::empty()
    }

    /// Shape of the discrete state. Defaults to no state; systems with
    /// discrete state variables override.
    fn allocate_discrete_state(&self) -> DiscreteState<T> {
        DiscreteState::empty()
    }

    /// Storage for one output port.
    ///
    /// The default allocates a zeroed vector of the declared width and has
    /// no generic representation for other data kinds; systems exposing
    /// abstract-valued ports must override.
    ///
    /// # Panics
    ///
    /// Panics if `descriptor` is not vector-valued.
    fn allocate_output_vector(&self, descriptor: &PortDescriptor) -> DVector<T> {
        assert!(
            descriptor.kind() == PortDataKind::Vector,
            "default output allocation supports only vector-valued ports"
        );
        DVector::from_element(descriptor.width(), T::zero())
    }

    /// Write the system's outputs for the current context. Default: no-op;
    /// systems with output ports override.
    fn calc_output(&self, _context: &Context<T>, _output: &mut SystemOutput<T>) {}

    /// Write the continuous-state derivatives for the current context.
    /// Default: no-op; systems with continuous state override.
    fn calc_time_derivatives(
        &self,
        _context: &Context<T>,
        _derivatives: &mut ContinuousState<T>,
    ) {
    }

    /// Compute the discrete state after `event` fires, writing it into
    /// `next`. Default: no-op; systems with discrete state override.
    fn do_discrete_update(
        &self,
        _context: &Context<T>,
        _event: &DiscreteEvent,
        _next: &mut DiscreteState<T>,
    ) {
    }

    /// Side effect taken when a publish event fires. Default: no-op.
    fn do_publish(&self, _context: &Context<T>, _event: &DiscreteEvent) {}

    /// Build a fresh context sized to this system's declarations, with
    /// zero-initialized state and an unset input cache. Called once per run;
    /// update and derivative computations may assume the returned state
    /// vectors are exactly the declared sizes.
    fn create_default_context(&self) -> Context<T> {
        Context::new(
            self.config().num_input_ports(),
            self.allocate_continuous_state(),
            self.allocate_discrete_state(),
        )
    }

    /// Allocate output storage: one container per declared output port, in
    /// declaration order. Allocation only; context state is neither read nor
    /// written.
    fn allocate_output(&self, _context: &Context<T>) -> SystemOutput<T> {
        let ports = self
            .config()
            .output_ports()
            .iter()
            .map(|descriptor| OutputPort::new(self.allocate_output_vector(descriptor)))
            .collect();
        SystemOutput::new(ports)
    }

    /// Freshly allocated storage shaped like the continuous state, for
    /// derivative results.
    fn allocate_time_derivatives(&self) -> ContinuousState<T> {
        self.allocate_continuous_state()
    }

    /// Freshly allocated storage shaped like the discrete state, for
    /// discrete-update results.
    fn allocate_difference_variables(&self) -> DiscreteState<T> {
        self.allocate_discrete_state()
    }

    /// Next instant at which scheduled discrete updates fire, with the batch
    /// of events tied at that instant.
    ///
    /// For numeric scalars this scans the periodic registry; with nothing
    /// registered the result time is positive infinity. For scalar types
    /// without sample-time arithmetic the query is fatal. Systems with
    /// aperiodic update schedules override.
    fn calc_next_update_time(&self, context: &Context<T>) -> UpdateActions<T> {
        T::calc_next_update_time(self.config().periodic_events(), context.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stateless {
        config: SystemConfig<f64>,
    }

    impl Stateless {
        fn new() -> Self {
            Self {
                config: SystemConfig::new(),
            }
        }
    }

    impl System<f64> for Stateless {
        fn config(&self) -> &SystemConfig<f64> {
            &self.config
        }
    }

    #[test]
    fn test_config_declarations() {
        let mut config = SystemConfig::<f64>::new();
        assert_eq!(config.declare_input_port(), 0);
        assert_eq!(config.declare_input_port(), 1);
        assert_eq!(config.declare_output_port(PortDescriptor::vector(3)), 0);

        assert_eq!(config.num_input_ports(), 2);
        assert_eq!(config.output_ports().len(), 1);
        assert_eq!(config.output_ports()[0].width(), 3);
    }

    #[test]
    fn test_periodic_declaration_replaces_prior_schedule() {
        let mut config = SystemConfig::<f64>::new();
        config.declare_periodic_update(1.0, 0.0);
        config.declare_periodic_update(2.0, 0.5);

        let events = config.periodic_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].period, 2.0);
        assert_eq!(events[0].offset, 0.5);
        assert_eq!(events[0].event.action, ActionKind::DiscreteUpdate);
    }

    #[test]
    #[should_panic(expected = "update period must be positive")]
    fn test_zero_period_is_fatal() {
        SystemConfig::<f64>::new().declare_periodic_update(0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "update period must be positive")]
    fn test_negative_period_is_fatal() {
        SystemConfig::<f64>::new().declare_periodic_update(-1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "update offset must be non-negative")]
    fn test_negative_offset_is_fatal() {
        SystemConfig::<f64>::new().declare_periodic_update(1.0, -0.5);
    }

    #[test]
    fn test_default_context_has_no_state() {
        let system = Stateless::new();
        let context = system.create_default_context();
        assert!(context.continuous_state().is_empty());
        assert!(context.discrete_state().is_empty());
        assert_eq!(context.num_input_ports(), 0);
    }

    #[test]
    fn test_stateless_system_never_updates() {
        let system = Stateless::new();
        let context = system.create_default_context();
        let actions = system.calc_next_update_time(&context);
        assert!(actions.time.is_infinite());
        assert!(actions.events.is_empty());
    }

    #[test]
    #[should_panic(expected = "only vector-valued ports")]
    fn test_default_allocator_rejects_abstract_ports() {
        let system = Stateless::new();
        system.allocate_output_vector(&PortDescriptor::abstract_valued());
    }
}
