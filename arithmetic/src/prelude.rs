pub use crate::{
    divide, divide_by_linear, divide_by_vanishing, evaluate, evaluate_over_domain,
    find_primitive_root, interpolate, is_primitive_root_of_unity, ntt_inverse, ntt_transform,
    poly_eq, polynomial_multiply, strip_trailing_zeros, ArithErrors,
};
pub use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
