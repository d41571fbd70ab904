mod error;
mod fraction;
mod is_zero;
mod number;
mod number_const;
mod sign;

pub use {error::*, fraction::*, is_zero::*, number::*, number_const::*, sign::*};

// ---------------------------------- testing ----------------------------------

#[cfg(test)]
mod test_utils;
