//! Zero-initialized state storage for simulation contexts.

use nalgebra::DVector;

use crate::scalar::Scalar;

/// Continuous state vector, advanced by externally-driven numerical
/// integration between discrete events.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousState<T: Scalar> {
    data: DVector<T>,
}

impl<T: Scalar> ContinuousState<T> {
    /// Allocate `len` zero-initialized continuous state variables.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: DVector::from_element(len, T::zero()),
        }
    }

    /// State with no variables.
    pub fn empty() -> Self {
        Self::zeros(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Backing vector.
    pub fn vector(&self) -> &DVector<T> {
        &self.data
    }

    /// Mutable backing vector.
    pub fn vector_mut(&mut self) -> &mut DVector<T> {
        &mut self.data
    }
}

/// Discrete (difference) state vector, rewritten only at scheduled discrete
/// event times.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteState<T: Scalar> {
    data: DVector<T>,
}

impl<T: Scalar> DiscreteState<T> {
    /// Allocate `len` zero-initialized discrete state variables.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: DVector::from_element(len, T::zero()),
        }
    }

    /// State with no variables.
    pub fn empty() -> Self {
        Self::zeros(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Backing vector.
    pub fn vector(&self) -> &DVector<T> {
        &self.data
    }

    /// Mutable backing vector.
    pub fn vector_mut(&mut self) -> &mut DVector<T> {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_are_zero_initialized() {
        let xc = ContinuousState::<f64>::zeros(4);
        assert_eq!(xc.len(), 4);
        assert!(xc.vector().iter().all(|v| *v == 0.0));

        let xd = DiscreteState::<f64>::zeros(2);
        assert_eq!(xd.len(), 2);
        assert!(xd.vector().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_empty_state() {
        assert!(ContinuousState::<f64>::empty().is_empty());
        assert!(DiscreteState::<f64>::empty().is_empty());
    }
}
