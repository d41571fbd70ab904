use {
    crate::{Fraction, IsZero, MathError, MathResult, NumberConst, Sign},
    std::{
        fmt::Display,
        ops::{Div, Rem},
    },
};

/// Describes basic checked operations that all math types must implement.
pub trait Number: Sized {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;
}

// ---------------------------------- fraction ---------------------------------

impl<U> Number for Fraction<U>
where
    U: Number + NumberConst + IsZero + Sign + Copy + Display + PartialEq + PartialOrd,
    U: Div<Output = U> + Rem<Output = U>,
{
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.validate()?;
        other.validate()?;

        if self.denominator != other.denominator {
            Ok(Self::new(
                self.numerator
                    .checked_mul(other.denominator)?
                    .checked_add(other.numerator.checked_mul(self.denominator)?)?,
                self.denominator.checked_mul(other.denominator)?,
            ))
        } else {
            Ok(Self::new(
                self.numerator.checked_add(other.numerator)?,
                self.denominator,
            ))
        }
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.validate()?;
        other.validate()?;

        if self.denominator != other.denominator {
            Ok(Self::new(
                self.numerator
                    .checked_mul(other.denominator)?
                    .checked_sub(other.numerator.checked_mul(self.denominator)?)?,
                self.denominator.checked_mul(other.denominator)?,
            ))
        } else {
            Ok(Self::new(
                self.numerator.checked_sub(other.numerator)?,
                self.denominator,
            ))
        }
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.validate()?;
        other.validate()?;

        Ok(Self::new(
            self.numerator.checked_mul(other.numerator)?,
            self.denominator.checked_mul(other.denominator)?,
        ))
    }

    /// Multiply by the reciprocal of `other`.
    ///
    /// `other` having a zero numerator is deliberately not an error: the
    /// result then carries a zero denominator and is simply invalid.
    fn checked_div(self, other: Self) -> MathResult<Self> {
        self.validate()?;
        other.validate()?;

        Ok(Self::new(
            self.numerator.checked_mul(other.denominator)?,
            self.denominator.checked_mul(other.numerator)?,
        ))
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number {
    ($t:ty) => {
        impl Number for $t {
            fn checked_add(self, other: Self) -> MathResult<Self> {
                self.checked_add(other)
                    .ok_or_else(|| MathError::overflow_add(self, other))
            }

            fn checked_sub(self, other: Self) -> MathResult<Self> {
                self.checked_sub(other)
                    .ok_or_else(|| MathError::overflow_sub(self, other))
            }

            fn checked_mul(self, other: Self) -> MathResult<Self> {
                self.checked_mul(other)
                    .ok_or_else(|| MathError::overflow_mul(self, other))
            }

            fn checked_div(self, other: Self) -> MathResult<Self> {
                self.checked_div(other)
                    .ok_or_else(|| MathError::division_by_zero(self))
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number!($t);
        )+
    };
}

impl_number! {
    i8, i16, i32, i64, i128,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use crate::{MathError, Number};

    #[test]
    fn checked_ops_surface_overflow() {
        assert!(matches!(
            Number::checked_add(i8::MAX, 1),
            Err(MathError::OverflowAdd { .. })
        ));
        assert!(matches!(
            Number::checked_sub(i8::MIN, 1),
            Err(MathError::OverflowSub { .. })
        ));
        assert!(matches!(
            Number::checked_mul(i8::MAX, 2),
            Err(MathError::OverflowMul { .. })
        ));
        assert!(matches!(
            Number::checked_div(1_i8, 0),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn checked_ops_pass_through() {
        assert_eq!(Number::checked_add(3_i32, 4).unwrap(), 7);
        assert_eq!(Number::checked_sub(3_i32, 4).unwrap(), -1);
        assert_eq!(Number::checked_mul(3_i32, 4).unwrap(), 12);
        assert_eq!(Number::checked_div(12_i32, 4).unwrap(), 3);
    }
}
