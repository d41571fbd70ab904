use {std::any::type_name, thiserror::Error};

#[derive(Debug, Error)]
pub enum MathError {
    #[error("operand has a zero denominator: {ty}({value})")]
    ZeroDenominator { ty: &'static str, value: String },

    #[error("addition overflow: {a} + {b} > {ty}::MAX")]
    OverflowAdd {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("subtraction overflow: {a} - {b} < {ty}::MIN")]
    OverflowSub {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("multiplication overflow: {a} * {b} > {ty}::MAX")]
    OverflowMul {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("negation overflow: -({a}) > {ty}::MAX")]
    OverflowNeg { ty: &'static str, a: String },

    #[error("absolute value overflow: |{a}| > {ty}::MAX")]
    OverflowAbs { ty: &'static str, a: String },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: String },
}

impl MathError {
    pub fn zero_denominator<T>(value: impl ToString) -> Self {
        Self::ZeroDenominator {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }

    pub fn overflow_add<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_sub<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowSub {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_mul<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowMul {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_neg<T: ToString>(a: T) -> Self {
        Self::OverflowNeg {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }

    pub fn overflow_abs<T: ToString>(a: T) -> Self {
        Self::OverflowAbs {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }

    pub fn division_by_zero(a: impl ToString) -> Self {
        Self::DivisionByZero { a: a.to_string() }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
