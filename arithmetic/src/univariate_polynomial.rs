// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Coefficient-vector operations for univariate polynomials.
//!
//! Polynomials are little-endian coefficient sequences: `coeffs[i]` is the
//! coefficient of `x^i`. Trailing zeros are tolerated by every routine and
//! removed on normalization; the zero polynomial normalizes to the empty
//! vector.

use crate::ArithErrors;
use ark_ff::{Field, PrimeField};
use ark_std::{vec, vec::Vec};

/// Evaluate `coeffs` at `point` via Horner's rule. The empty sequence
/// evaluates to zero everywhere.
pub fn evaluate<F: PrimeField>(coeffs: &[F], point: &F) -> F {
    coeffs
        .iter()
        .rev()
        .fold(F::zero(), |acc, coeff| acc * point + coeff)
}

/// Remove trailing zero coefficients in place.
pub fn strip_trailing_zeros<F: Field>(coeffs: &mut Vec<F>) {
    while coeffs.last().map_or(false, |c| c.is_zero()) {
        coeffs.pop();
    }
}

/// Compare two coefficient sequences up to trailing zeros.
pub fn poly_eq<F: Field>(a: &[F], b: &[F]) -> bool {
    let longest = a.len().max(b.len());
    (0..longest).all(|i| {
        let lhs = a.get(i).copied().unwrap_or_else(F::zero);
        let rhs = b.get(i).copied().unwrap_or_else(F::zero);
        lhs == rhs
    })
}

/// Schoolbook long division of `num` by `den`, returning the quotient and
/// discarding the remainder.
///
/// Both operands are normalized first. Returns the zero polynomial when
/// `deg num < deg den`.
pub fn divide<F: PrimeField>(num: &[F], den: &[F]) -> Result<Vec<F>, ArithErrors> {
    let mut remainder = num.to_vec();
    strip_trailing_zeros(&mut remainder);
    let mut den = den.to_vec();
    strip_trailing_zeros(&mut den);

    if den.is_empty() {
        return Err(ArithErrors::DivisionByZero);
    }
    if remainder.len() < den.len() {
        return Ok(Vec::new());
    }

    let lead_inv = den[den.len() - 1]
        .inverse()
        .ok_or(ArithErrors::DivisionByZero)?;
    let mut quotient = vec![F::zero(); remainder.len() - den.len() + 1];

    while remainder.len() >= den.len() {
        let shift = remainder.len() - den.len();
        let coeff = remainder[remainder.len() - 1] * lead_inv;
        quotient[shift] = coeff;
        for (i, den_coeff) in den.iter().enumerate() {
            remainder[shift + i] -= coeff * den_coeff;
        }
        // the top coefficient cancels by construction
        strip_trailing_zeros(&mut remainder);
    }

    Ok(quotient)
}

/// Synthetic division of `coeffs` by the linear factor `(x - point)`.
///
/// Returns `(quotient, remainder)`; the remainder equals
/// `evaluate(coeffs, point)`, so the quotient is also the witness
/// polynomial of `coeffs - coeffs(point)` at `point`.
pub fn divide_by_linear<F: PrimeField>(coeffs: &[F], point: &F) -> (Vec<F>, F) {
    let mut coeffs = coeffs.to_vec();
    strip_trailing_zeros(&mut coeffs);

    if coeffs.len() <= 1 {
        let remainder = coeffs.first().copied().unwrap_or_else(F::zero);
        return (Vec::new(), remainder);
    }

    let mut quotient = vec![F::zero(); coeffs.len() - 1];
    let mut carry = coeffs[coeffs.len() - 1];
    for i in (1..coeffs.len()).rev() {
        quotient[i - 1] = carry;
        carry = coeffs[i - 1] + *point * carry;
    }

    (quotient, carry)
}

/// Divide `coeffs` by the vanishing polynomial `x^order - 1` of the
/// order-`order` multiplicative subgroup, in O(deg) time.
///
/// Works by an in-place reduction from the top coefficient down: `a[i]`
/// moves into the quotient slot `i - order` and folds into `a[i - order]`.
/// Returns `(quotient, remainder)` with `deg remainder < order`, both
/// normalized. Callers proving exact divisibility must check that the
/// remainder is empty.
pub fn divide_by_vanishing<F: PrimeField>(
    coeffs: &[F],
    order: usize,
) -> Result<(Vec<F>, Vec<F>), ArithErrors> {
    if order == 0 {
        // x^0 - 1 is the zero polynomial
        return Err(ArithErrors::DivisionByZero);
    }

    let mut remainder = coeffs.to_vec();
    strip_trailing_zeros(&mut remainder);
    if remainder.len() <= order {
        return Ok((Vec::new(), remainder));
    }

    let mut quotient = vec![F::zero(); remainder.len() - order];
    for i in (order..remainder.len()).rev() {
        let coeff = remainder[i];
        quotient[i - order] = coeff;
        remainder[i - order] += coeff;
        remainder[i] = F::zero();
    }

    remainder.truncate(order);
    strip_trailing_zeros(&mut remainder);
    Ok((quotient, remainder))
}
