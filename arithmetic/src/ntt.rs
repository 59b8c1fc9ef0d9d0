// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Number-theoretic transform over a prime field.
//!
//! A radix-2 decimation-in-time transform: bit-reversal permutation
//! followed by butterfly layers, operating in place on a slice whose
//! length is a power of two. The field must have enough two-adicity for
//! the requested size.

use crate::{errors::ArithErrors, univariate_polynomial::strip_trailing_zeros};
use ark_ff::{BigInteger, PrimeField};
use ark_std::{format, string::ToString, vec::Vec};

/// Reverse the low `log_n` bits of `index`.
fn bit_reverse(index: usize, log_n: u32) -> usize {
    let mut result = 0;
    for bit in 0..log_n {
        result <<= 1;
        result |= (index >> bit) & 1;
    }
    result
}

/// Check that `omega` generates the multiplicative subgroup of exactly
/// `order` elements, i.e. `omega^order = 1` and `omega^(order/2) = -1`.
pub fn is_primitive_root_of_unity<F: PrimeField>(omega: &F, order: usize) -> bool {
    if order < 2 || !order.is_power_of_two() {
        return false;
    }
    omega.pow([order as u64]).is_one() && omega.pow([(order / 2) as u64]) == -F::one()
}

/// Find a primitive `order`-th root of unity by raising successive small
/// field elements to the power `(p - 1) / order`.
///
/// `order` must be a power of two no larger than the two-adic subgroup of
/// the field; beyond that no root exists and the search would never
/// terminate.
pub fn find_primitive_root<F: PrimeField>(order: usize) -> Result<F, ArithErrors> {
    if order < 2 || !order.is_power_of_two() {
        return Err(ArithErrors::InvalidSize(format!(
            "subgroup order must be a power of two >= 2, got {}",
            order
        )));
    }
    let log_order = order.trailing_zeros();
    if log_order > F::TWO_ADICITY {
        return Err(ArithErrors::InvalidRoot(format!(
            "field has two-adicity {}, no subgroup of order 2^{}",
            F::TWO_ADICITY,
            log_order
        )));
    }

    let mut exponent = F::MODULUS;
    exponent.sub_with_borrow(&F::BigInt::from(1u64));
    exponent.divn(log_order);

    let mut candidate = 2u64;
    loop {
        let omega = F::from(candidate).pow(exponent);
        if is_primitive_root_of_unity(&omega, order) {
            return Ok(omega);
        }
        candidate += 1;
    }
}

/// In-place forward transform of `values` by the primitive root `omega`.
///
/// On return `values[i]` holds the evaluation of the input polynomial at
/// `omega^i`. The length must be a power of two.
pub fn ntt_transform<F: PrimeField>(values: &mut [F], omega: &F) -> Result<(), ArithErrors> {
    let n = values.len();
    if !n.is_power_of_two() {
        return Err(ArithErrors::InvalidSize(format!(
            "transform length must be a power of two, got {}",
            n
        )));
    }
    let log_n = n.trailing_zeros();

    for i in 0..n {
        let j = bit_reverse(i, log_n);
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let stage_twiddle = omega.pow([(n / len) as u64]);
        for block in values.chunks_mut(len) {
            let mut twiddle = F::one();
            for i in 0..len / 2 {
                let lo = block[i];
                let hi = block[i + len / 2] * twiddle;
                block[i] = lo + hi;
                block[i + len / 2] = lo - hi;
                twiddle *= stage_twiddle;
            }
        }
        len <<= 1;
    }

    Ok(())
}

/// In-place inverse transform: forward transform by `omega^-1`, then
/// scale by `n^-1`.
pub fn ntt_inverse<F: PrimeField>(values: &mut [F], omega: &F) -> Result<(), ArithErrors> {
    let omega_inv = omega
        .inverse()
        .ok_or_else(|| ArithErrors::InvalidRoot("zero is not a root of unity".to_string()))?;
    ntt_transform(values, &omega_inv)?;

    // the length is a power of two below p, hence invertible
    let n_inv = F::from(values.len() as u64)
        .inverse()
        .ok_or_else(|| ArithErrors::InvalidSize("empty transform".to_string()))?;
    for value in values.iter_mut() {
        *value *= n_inv;
    }
    Ok(())
}

/// Recover coefficients from evaluations over the subgroup generated by
/// `omega`.
pub fn interpolate<F: PrimeField>(evals: &[F], omega: &F) -> Result<Vec<F>, ArithErrors> {
    let mut coeffs = evals.to_vec();
    ntt_inverse(&mut coeffs, omega)?;
    Ok(coeffs)
}

/// Multiply two coefficient vectors by pointwise multiplication in the
/// evaluation domain.
///
/// Inputs are zero-padded to the next power of two at least `|a| + |b|`;
/// `omega` must be a primitive root of exactly that padded order. The
/// result keeps the padded length, trailing zeros included.
pub fn polynomial_multiply<F: PrimeField>(
    a: &[F],
    b: &[F],
    omega: &F,
) -> Result<Vec<F>, ArithErrors> {
    let padded_len = (a.len() + b.len()).next_power_of_two();
    if !is_primitive_root_of_unity(omega, padded_len) {
        return Err(ArithErrors::InvalidRoot(format!(
            "supplied root does not generate the order-{} domain",
            padded_len
        )));
    }

    let mut lhs = a.to_vec();
    lhs.resize(padded_len, F::zero());
    let mut rhs = b.to_vec();
    rhs.resize(padded_len, F::zero());

    ntt_transform(&mut lhs, omega)?;
    ntt_transform(&mut rhs, omega)?;
    for (l, r) in lhs.iter_mut().zip(rhs.iter()) {
        *l *= r;
    }
    ntt_inverse(&mut lhs, omega)?;

    Ok(lhs)
}

/// Evaluate `coeffs` on every element of the subgroup generated by
/// `omega`, padding or NTT-reducing as needed.
///
/// Unlike [`ntt_transform`] this accepts polynomials of any length: the
/// coefficients are first reduced modulo `x^order - 1`, which preserves
/// evaluations on the subgroup.
pub fn evaluate_over_domain<F: PrimeField>(
    coeffs: &[F],
    omega: &F,
    order: usize,
) -> Result<Vec<F>, ArithErrors> {
    if !is_primitive_root_of_unity(omega, order) {
        return Err(ArithErrors::InvalidRoot(format!(
            "supplied root does not generate the order-{} domain",
            order
        )));
    }

    let mut reduced = coeffs.to_vec();
    strip_trailing_zeros(&mut reduced);
    if reduced.len() > order {
        for i in (order..reduced.len()).rev() {
            let coeff = reduced[i];
            reduced[i - order] += coeff;
        }
        reduced.truncate(order);
    }
    reduced.resize(order, F::zero());
    ntt_transform(&mut reduced, omega)?;
    Ok(reduced)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::univariate_polynomial::{evaluate, poly_eq};
    use ark_bls12_381::Fr;
    use ark_ff::{Field, One, Zero};
    use ark_std::{collections::BTreeSet, test_rng, vec, UniformRand};

    #[test]
    fn test_round_trip() {
        let omega = find_primitive_root::<Fr>(8).unwrap();
        let original: Vec<Fr> = (1u64..=8).map(Fr::from).collect();

        let mut values = original.clone();
        ntt_transform(&mut values, &omega).unwrap();
        assert_ne!(values, original);
        ntt_inverse(&mut values, &omega).unwrap();
        assert_eq!(values, original);
    }

    #[test]
    fn test_round_trip_random_sizes() {
        let mut rng = test_rng();
        for log_n in 0..=6u32 {
            let n = 1usize << log_n;
            let omega = if n >= 2 {
                find_primitive_root::<Fr>(n).unwrap()
            } else {
                Fr::one()
            };
            let original: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
            let mut values = original.clone();
            ntt_transform(&mut values, &omega).unwrap();
            ntt_inverse(&mut values, &omega).unwrap();
            assert_eq!(values, original);
        }
    }

    #[test]
    fn test_transform_is_subgroup_evaluation() {
        let mut rng = test_rng();
        let n = 16usize;
        let omega = find_primitive_root::<Fr>(n).unwrap();
        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();

        let mut values = coeffs.clone();
        ntt_transform(&mut values, &omega).unwrap();

        let mut point = Fr::one();
        for value in values.iter() {
            assert_eq!(*value, evaluate(&coeffs, &point));
            point *= omega;
        }
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let omega = find_primitive_root::<Fr>(8).unwrap();
        let mut values = vec![Fr::one(); 6];
        assert!(matches!(
            ntt_transform(&mut values, &omega),
            Err(ArithErrors::InvalidSize(_))
        ));
    }

    #[test]
    fn test_primitive_root_contract() {
        for order in [2usize, 4, 8, 64, 1024] {
            let omega = find_primitive_root::<Fr>(order).unwrap();
            assert!(omega.pow([order as u64]).is_one());
            assert_eq!(omega.pow([(order / 2) as u64]), -Fr::one());

            // the powers enumerate `order` distinct elements
            let mut seen = BTreeSet::new();
            let mut current = Fr::one();
            for _ in 0..order {
                seen.insert(current);
                current *= omega;
            }
            assert_eq!(seen.len(), order);
        }

        assert!(matches!(
            find_primitive_root::<Fr>(6),
            Err(ArithErrors::InvalidSize(_))
        ));
        assert!(matches!(
            find_primitive_root::<Fr>(0),
            Err(ArithErrors::InvalidSize(_))
        ));
        // BLS12-381's scalar field has two-adicity 32
        assert!(matches!(
            find_primitive_root::<Fr>(1 << 33),
            Err(ArithErrors::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_multiply_small() {
        // (1 + 2x)(3 + x) = 3 + 7x + 2x^2
        let omega = find_primitive_root::<Fr>(4).unwrap();
        let a = vec![Fr::from(1u64), Fr::from(2u64)];
        let b = vec![Fr::from(3u64), Fr::from(1u64)];
        let product = polynomial_multiply(&a, &b, &omega).unwrap();
        assert_eq!(product.len(), 4);
        assert!(poly_eq(
            &product,
            &[Fr::from(3u64), Fr::from(7u64), Fr::from(2u64)]
        ));

        // (1 + x + x^2)(1 - x) = 1 - x^3
        let omega = find_primitive_root::<Fr>(8).unwrap();
        let a = vec![Fr::one(), Fr::one(), Fr::one()];
        let b = vec![Fr::one(), -Fr::one()];
        let product = polynomial_multiply(&a, &b, &omega).unwrap();
        assert_eq!(product.len(), 8);
        assert!(poly_eq(
            &product,
            &[Fr::one(), Fr::zero(), Fr::zero(), -Fr::one()]
        ));
    }

    #[test]
    fn test_multiply_matches_schoolbook() {
        let mut rng = test_rng();
        let omega = find_primitive_root::<Fr>(32).unwrap();
        for _ in 0..10 {
            let a: Vec<Fr> = (0..13).map(|_| Fr::rand(&mut rng)).collect();
            let b: Vec<Fr> = (0..12).map(|_| Fr::rand(&mut rng)).collect();

            let mut expected = vec![Fr::zero(); a.len() + b.len() - 1];
            for (i, ai) in a.iter().enumerate() {
                for (j, bj) in b.iter().enumerate() {
                    expected[i + j] += *ai * bj;
                }
            }

            let product = polynomial_multiply(&a, &b, &omega).unwrap();
            assert!(poly_eq(&product, &expected));
        }
    }

    #[test]
    fn test_multiply_rejects_wrong_order_root() {
        // |a| + |b| = 4 pads to 4; an order-8 root must be refused
        let omega = find_primitive_root::<Fr>(8).unwrap();
        let a = vec![Fr::from(1u64), Fr::from(2u64)];
        let b = vec![Fr::from(3u64), Fr::from(1u64)];
        assert!(matches!(
            polynomial_multiply(&a, &b, &omega),
            Err(ArithErrors::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_interpolate() {
        let mut rng = test_rng();
        let n = 8usize;
        let omega = find_primitive_root::<Fr>(n).unwrap();
        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();

        let mut evals = coeffs.clone();
        ntt_transform(&mut evals, &omega).unwrap();
        let recovered = interpolate(&evals, &omega).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn test_evaluate_over_domain() {
        let mut rng = test_rng();
        let order = 8usize;
        let omega = find_primitive_root::<Fr>(order).unwrap();
        // degree well above the subgroup order
        let coeffs: Vec<Fr> = (0..3 * order + 3).map(|_| Fr::rand(&mut rng)).collect();

        let evals = evaluate_over_domain(&coeffs, &omega, order).unwrap();
        let mut point = Fr::one();
        for eval in evals.iter() {
            assert_eq!(*eval, evaluate(&coeffs, &point));
            point *= omega;
        }
    }
}
