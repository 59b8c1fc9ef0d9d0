mod errors;
mod ntt;
mod univariate_polynomial;

pub mod prelude;

pub use errors::ArithErrors;
pub use ntt::{
    evaluate_over_domain, find_primitive_root, interpolate, is_primitive_root_of_unity,
    ntt_inverse, ntt_transform, polynomial_multiply,
};
pub use univariate_polynomial::{
    divide, divide_by_linear, divide_by_vanishing, evaluate, poly_eq, strip_trailing_zeros,
};
