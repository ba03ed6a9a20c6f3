//! Output storage allocated per run.

use nalgebra::DVector;

use crate::scalar::Scalar;

/// Storage for one output port: a freshly allocated vector sized from the
/// port's descriptor. Its lifetime is independent of any context;
/// computation steps fill it in explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPort<T: Scalar> {
    data: DVector<T>,
}

impl<T: Scalar> OutputPort<T> {
    pub(crate) fn new(data: DVector<T>) -> Self {
        Self { data }
    }

    /// Vector width of this port.
    pub fn width(&self) -> usize {
        self.data.len()
    }

    pub fn value(&self) -> &DVector<T> {
        &self.data
    }

    pub fn value_mut(&mut self) -> &mut DVector<T> {
        &mut self.data
    }
}

/// Ordered set of output ports, one per declared output descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemOutput<T: Scalar> {
    ports: Vec<OutputPort<T>>,
}

impl<T: Scalar> SystemOutput<T> {
    pub(crate) fn new(ports: Vec<OutputPort<T>>) -> Self {
        Self { ports }
    }

    pub fn num_ports(&self) -> usize {
        self.ports.len()
    }

    /// Port at `index`, in declaration order.
    pub fn port(&self, index: usize) -> &OutputPort<T> {
        &self.ports[index]
    }

    pub fn port_mut(&mut self, index: usize) -> &mut OutputPort<T> {
        &mut self.ports[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputPort<T>> {
        self.ports.iter()
    }
}
