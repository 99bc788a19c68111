use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Source geometry, source concentration, diffusion, and decay coefficients
/// may be zero but never negative.
///
/// # Examples
///
/// ```
/// use plume_models::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let diffusion = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(diffusion.into_inner(), 0.0);
///
/// // Associated constructor:
/// let decay = NonNegative::new(0.1).unwrap();
/// assert_eq!(decay.into_inner(), 0.1);
///
/// // Error cases:
/// assert!(NonNegative::new(-0.1).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn lengths() {
        let thickness = Length::new::<meter>(0.0);
        assert!(NonNegative::new(thickness).is_ok());

        let thickness = Length::new::<meter>(-1.0);
        assert!(NonNegative::new(thickness).is_err());
    }
}
