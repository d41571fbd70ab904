use {
    crate::{IsZero, MathError, MathResult, Number, NumberConst, Sign},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display},
        mem,
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    },
};

// ------------------------------- generic type --------------------------------

/// An exact ratio of two fixed-width signed integers, kept in lowest terms
/// whenever both fields are known and nonzero.
///
/// A zero denominator never raises an error by itself; it marks the value as
/// invalid, which arithmetic reports through [`MathError`] and the queries
/// report through in-band sentinels. See [`Fraction::is_valid`].
///
/// The sign is not normalized: a negative value may sit in either field.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Default, Debug, Clone, Copy,
)]
pub struct Fraction<U> {
    pub(crate) numerator: U,
    pub(crate) denominator: U,
    pub(crate) denominator_set: bool,
}

impl<U> Fraction<U> {
    /// Create a new [`Fraction`] _without_ reducing it, marking the
    /// denominator as initialized.
    ///
    /// ```rust
    /// use frac_math::Fraction32;
    ///
    /// let unreduced = Fraction32::raw(6, 8);
    /// assert_eq!(unreduced.numerator(), 6);
    /// assert_eq!(unreduced.denominator(), 8);
    /// ```
    pub const fn raw(numerator: U, denominator: U) -> Self {
        Self {
            numerator,
            denominator,
            denominator_set: true,
        }
    }
}

impl<U> Fraction<U>
where
    U: Copy,
{
    pub fn numerator(&self) -> U {
        self.numerator
    }

    pub fn denominator(&self) -> U {
        self.denominator
    }
}

impl<U> Fraction<U>
where
    U: IsZero,
{
    /// A fraction is invalid iff its denominator is zero.
    pub fn is_valid(&self) -> bool {
        self.denominator.is_non_zero()
    }
}

impl<U> Fraction<U>
where
    U: NumberConst + IsZero + Sign + Copy + Display + PartialEq + PartialOrd,
    U: Div<Output = U> + Rem<Output = U>,
{
    /// Create a fraction from a numerator and a denominator, in that order,
    /// and bring it to lowest terms.
    ///
    /// The fields are stored first and reduced once both are known, which is
    /// the same observable behavior as assigning them one by one through
    /// [`set_numerator`](Self::set_numerator) and
    /// [`set_denominator`](Self::set_denominator): the numerator lands while
    /// the denominator is still zero, so only the denominator assignment can
    /// trigger the reduction.
    pub fn new(numerator: U, denominator: U) -> Self {
        let mut fraction = Self {
            numerator,
            denominator,
            denominator_set: true,
        };
        fraction.reduce();
        fraction
    }

    /// Store a new numerator, reducing if the denominator is already nonzero.
    pub fn set_numerator(&mut self, numerator: U) {
        self.numerator = numerator;
        self.reduce();
    }

    /// Store a new denominator, reducing if the numerator is already nonzero.
    ///
    /// Marks the denominator as initialized even when the new value is zero,
    /// which is what separates the two sentinel renderings of [`Display`].
    pub fn set_denominator(&mut self, denominator: U) {
        self.denominator = denominator;
        self.denominator_set = true;
        self.reduce();
    }

    /// Negate the fraction.
    pub fn checked_neg(self) -> MathResult<Self> {
        self.validate()?;

        Ok(Self::new(self.numerator.checked_neg()?, self.denominator))
    }

    /// The reciprocal: numerator and denominator swapped.
    ///
    /// Inverting a fraction with a zero numerator yields a zero-denominator,
    /// hence invalid, fraction rather than an error, consistent with
    /// [`Number::checked_div`].
    pub fn checked_inv(self) -> MathResult<Self> {
        self.validate()?;

        Ok(Self::new(self.denominator, self.numerator))
    }

    pub(crate) fn validate(&self) -> MathResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(MathError::zero_denominator::<Self>(format!(
                "{}/{}",
                self.numerator, self.denominator
            )))
        }
    }

    /// Bring the fraction to lowest terms in place.
    ///
    /// A no-op while either field is zero. `checked_abs` fails only for
    /// `U::MIN`, in which case the value is left unreduced.
    fn reduce(&mut self) {
        if self.numerator.is_zero() || self.denominator.is_zero() {
            return;
        }

        let (Ok(n), Ok(d)) = (self.numerator.checked_abs(), self.denominator.checked_abs())
        else {
            return;
        };

        let divisor = gcd(n, d);
        if divisor != U::ONE {
            self.numerator = self.numerator / divisor;
            self.denominator = self.denominator / divisor;
        }
    }
}

/// Iterative Euclidean algorithm over positive operands.
///
/// Swaps the operands so the larger one is the dividend, then keeps taking
/// remainders until one reaches zero. Callers must not pass zero (the guards
/// in `reduce` uphold this); if one operand is zero anyway, the other is
/// returned.
fn gcd<U>(mut x: U, mut y: U) -> U
where
    U: IsZero + Copy + PartialOrd + Rem<Output = U>,
{
    if x < y {
        mem::swap(&mut x, &mut y);
    }

    while y.is_non_zero() {
        let remainder = x % y;
        x = y;
        y = remainder;
    }

    x
}

/// Equality compares the stored numerator and denominator verbatim; whether
/// the denominator was ever assigned does not participate. Two fractions of
/// equal mathematical value but different stored representations, e.g.
/// `Fraction32::raw(2, 4)` and `Fraction32::new(1, 2)`, do NOT compare equal.
impl<U> PartialEq for Fraction<U>
where
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<U> Eq for Fraction<U> where U: Eq {}

impl<U> Display for Fraction<U>
where
    U: IsZero + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.denominator_set {
            return f.write_str("denominator is not initialized");
        }

        if self.denominator.is_zero() {
            return f.write_str("denominator is set to 0");
        }

        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<U> Add for Fraction<U>
where
    Self: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Sub for Fraction<U>
where
    Self: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Mul for Fraction<U>
where
    Self: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Div for Fraction<U>
where
    Self: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Neg for Fraction<U>
where
    U: NumberConst + IsZero + Sign + Copy + Display + PartialEq + PartialOrd,
    U: Div<Output = U> + Rem<Output = U>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> AddAssign for Fraction<U>
where
    Self: Number + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U> SubAssign for Fraction<U>
where
    Self: Number + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U> MulAssign for Fraction<U>
where
    Self: Number + Copy,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<U> DivAssign for Fraction<U>
where
    Self: Number + Copy,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ------------------------------ concrete types -------------------------------

macro_rules! generate_fraction {
    (
        bits = $bits:literal,
        doc  = $doc:literal,
    ) => {
        paste::paste! {
            #[doc = $doc]
            pub type [<Fraction $bits>] = Fraction<[<i $bits>]>;

            impl [<Fraction $bits>] {
                /// The floating-point quotient of numerator over denominator.
                ///
                /// Returns `f64::MAX` as an in-band sentinel if the fraction
                /// is invalid.
                pub fn to_f64(self) -> f64 {
                    if !self.is_valid() {
                        return f64::MAX;
                    }

                    self.numerator as f64 / self.denominator as f64
                }
            }
        }
    };
}

generate_fraction! {
    bits = 8,
    doc  = "Ratio of two 8-bit signed integers.",
}

generate_fraction! {
    bits = 16,
    doc  = "Ratio of two 16-bit signed integers.",
}

generate_fraction! {
    bits = 32,
    doc  = "Ratio of two 32-bit signed integers.",
}

generate_fraction! {
    bits = 64,
    doc  = "Ratio of two 64-bit signed integers.",
}

generate_fraction! {
    bits = 128,
    doc  = "Ratio of two 128-bit signed integers.",
}

// ----------------------------------- tests -----------------------------------
