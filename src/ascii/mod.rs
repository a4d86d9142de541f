pub mod line;
pub mod number;

pub use line::rest_of_line;
pub use number::{
    exponent, integer, non_negative_integer, number, real_number, sign, whole_number,
};
