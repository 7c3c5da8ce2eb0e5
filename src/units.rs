//! Unit-typed views of elapsed time.
//!
//! Intervals measure their length as a [`chrono::TimeDelta`]. This module
//! bridges that representation to `qtty` quantities so callers can read a
//! duration in whichever time unit suits them (seconds, hours, days, ...)
//! with the unit checked at compile time.

use chrono::TimeDelta;
use qtty::{Quantity, Second, Unit};

/// Marker trait for units measuring elapsed time.
///
/// Automatically implemented for every unit sharing the dimension of
/// [`Second`], so `Hour`, `Minute`, `Day` and friends all qualify while
/// lengths or masses are rejected at compile time.
pub trait TimeUnit: Unit<Dim = <Second as Unit>::Dim> {}

impl<U> TimeUnit for U where U: Unit<Dim = <Second as Unit>::Dim> {}

/// Converts a [`TimeDelta`] into a quantity of the requested time unit.
///
/// Sub-second precision is kept down to the nanosecond.
///
/// # Example
///
/// ```rust
/// use chrono::TimeDelta;
/// use qtty::Minute;
/// use chronospan::units::to_quantity;
///
/// let minutes = to_quantity::<Minute>(TimeDelta::seconds(90));
/// assert!((minutes.value() - 1.5).abs() < 1e-12);
/// ```
pub fn to_quantity<U: TimeUnit>(delta: TimeDelta) -> Quantity<U> {
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9;
    Quantity::<Second>::new(seconds).to::<U>()
}
