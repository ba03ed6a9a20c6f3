//! Scalar representations for simulated time and state.
//!
//! The core is generic over the scalar carrying time and state values, so the
//! same leaf system can run with plain floating point or with a
//! differentiable (dual-number) representation for sensitivity analysis.

use std::any;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use crate::events::schedule;
use crate::events::{PeriodicEvent, UpdateActions};

/// Base scalar representation for time and state values.
///
/// Every scalar can be stored, cloned, compared and zero-initialized. Whether
/// sample-time arithmetic is defined on top of that is decided per concrete
/// type by [`Scalar::calc_next_update_time`]: the default body rejects the
/// query, and numeric scalars override it with the real computation. The
/// selection happens at monomorphization time, not through a runtime flag.
pub trait Scalar: Clone + PartialEq + PartialOrd + Debug + 'static {
    /// Additive identity, used to zero-fill freshly allocated state.
    fn zero() -> Self;

    /// Computes the next update time over `events` at the current `time`.
    ///
    /// # Panics
    ///
    /// The default implementation panics unconditionally: there is no
    /// meaningful notion of "next update time" outside the real line.
    /// Scalars implementing [`RealScalar`] override this with
    /// [`schedule::next_update_time`].
    fn calc_next_update_time(
        _events: &[PeriodicEvent<Self>],
        _time: &Self,
    ) -> UpdateActions<Self> {
        panic!(
            "next update time is not defined for non-numeric scalar type `{}`",
            any::type_name::<Self>()
        );
    }
}

/// Scalars supporting real arithmetic and sample-time computations.
///
/// `f64` and `f32` implement this; a differentiable scalar can too, provided
/// its comparisons and rounding act on the value part.
pub trait RealScalar:
    Scalar + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Multiplicative identity.
    fn one() -> Self;

    /// Positive infinity, the "nothing scheduled" time.
    fn infinity() -> Self;

    /// Largest integral value not greater than `self`.
    fn floor(&self) -> Self;

    /// Smallest integral value not less than `self`.
    fn ceil(&self) -> Self;
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn calc_next_update_time(events: &[PeriodicEvent<Self>], time: &Self) -> UpdateActions<Self> {
        schedule::next_update_time(events, time)
    }
}

impl RealScalar for f64 {
    fn one() -> Self {
        1.0
    }

    fn infinity() -> Self {
        f64::INFINITY
    }

    fn floor(&self) -> Self {
        f64::floor(*self)
    }

    fn ceil(&self) -> Self {
        f64::ceil(*self)
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn calc_next_update_time(events: &[PeriodicEvent<Self>], time: &Self) -> UpdateActions<Self> {
        schedule::next_update_time(events, time)
    }
}

impl RealScalar for f32 {
    fn one() -> Self {
        1.0
    }

    fn infinity() -> Self {
        f32::INFINITY
    }

    fn floor(&self) -> Self {
        f32::floor(*self)
    }

    fn ceil(&self) -> Self {
        f32::ceil(*self)
    }
}
