// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Main module for the univariate KZG commitment scheme

use crate::pcs::{
    prelude::Commitment, PCSError, PolynomialCommitmentScheme, StructuredReferenceString,
};
use arithmetic::divide_by_linear;
use ark_ec::{
    pairing::Pairing, scalar_mul::variable_base::VariableBaseMSM, AffineRepr, CurveGroup,
};
use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    borrow::Borrow, end_timer, format, marker::PhantomData, rand::CryptoRng, rand::RngCore,
    start_timer, vec, vec::Vec, One,
};
use srs::{UnivariateProverParam, UnivariateUniversalParams, UnivariateVerifierParam};
use std::ops::Mul;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) mod srs;

/// KZG Polynomial Commitment Scheme on univariate polynomial.
pub struct UnivariateKzgPCS<E: Pairing> {
    #[doc(hidden)]
    phantom: PhantomData<E>,
}

/// Proof of opening: the witness for one evaluation claim.
#[derive(CanonicalSerialize, CanonicalDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UnivariateKzgProof<E: Pairing> {
    /// the opening point
    pub point: E::ScalarField,
    /// the evaluation claimed at the point
    pub eval: E::ScalarField,
    /// commitment to the quotient `(p(x) - eval) / (x - point)`
    pub proof: E::G1Affine,
}

impl<E: Pairing> PolynomialCommitmentScheme<E> for UnivariateKzgPCS<E> {
    // Parameters
    type ProverParam = UnivariateProverParam<E::G1Affine>;
    type VerifierParam = UnivariateVerifierParam<E>;
    type SRS = UnivariateUniversalParams<E>;
    // Polynomial and its associated types
    type Polynomial = DensePolynomial<E::ScalarField>;
    type Point = E::ScalarField;
    type Evaluation = E::ScalarField;
    type Commitment = Commitment<E>;
    type Proof = UnivariateKzgProof<E>;

    /// Build SRS for testing.
    ///
    /// - For univariate polynomials, `supported_degree` is the maximum
    ///   degree.
    ///
    /// WARNING: THIS FUNCTION IS FOR TESTING PURPOSE ONLY.
    /// THE OUTPUT SRS SHOULD NOT BE USED IN PRODUCTION.
    fn gen_srs_for_testing<R: RngCore + CryptoRng>(
        rng: &mut R,
        supported_degree: usize,
    ) -> Result<Self::SRS, PCSError> {
        Self::SRS::gen_srs_for_testing(rng, supported_degree)
    }

    /// Trim the universal parameters to specialize the public parameters.
    fn trim(
        srs: impl Borrow<Self::SRS>,
        supported_degree: usize,
    ) -> Result<(Self::ProverParam, Self::VerifierParam), PCSError> {
        srs.borrow().trim(supported_degree)
    }

    /// Generate a commitment for a polynomial.
    /// Note that the scheme is not hiding.
    fn commit(
        prover_param: impl Borrow<Self::ProverParam>,
        poly: &Self::Polynomial,
    ) -> Result<Self::Commitment, PCSError> {
        let prover_param = prover_param.borrow();
        let commit_time =
            start_timer!(|| format!("Committing to polynomial of degree {} ", poly.degree()));

        if poly.degree() >= prover_param.powers_of_g.len() {
            return Err(PCSError::DegreeTooLarge(
                poly.degree(),
                prover_param.powers_of_g.len() - 1,
            ));
        }

        let (num_leading_zeros, plain_coeffs) = skip_leading_zeros_and_convert_to_bigints(poly);

        let msm_time = start_timer!(|| "MSM to compute commitment to plaintext poly");
        let commitment = E::G1::msm_bigint(
            &prover_param.powers_of_g[num_leading_zeros..],
            &plain_coeffs,
        )
        .into_affine();
        end_timer!(msm_time);

        end_timer!(commit_time);
        Ok(Commitment(commitment))
    }

    /// On input a polynomial `p` and a point, output a proof for the
    /// evaluation of `p` at the point.
    ///
    /// The evaluation is recomputed here from the polynomial (it is the
    /// remainder of the synthetic division) rather than accepted from
    /// the caller.
    fn open(
        prover_param: impl Borrow<Self::ProverParam>,
        polynomial: &Self::Polynomial,
        point: &Self::Point,
    ) -> Result<Self::Proof, PCSError> {
        let prover_param = prover_param.borrow();
        let open_time =
            start_timer!(|| format!("Opening polynomial of degree {}", polynomial.degree()));

        if polynomial.degree() >= prover_param.powers_of_g.len() {
            return Err(PCSError::DegreeTooLarge(
                polynomial.degree(),
                prover_param.powers_of_g.len() - 1,
            ));
        }

        let witness_time = start_timer!(|| "Computing witness polynomial");
        let (witness_coeffs, eval) = divide_by_linear(polynomial.coeffs(), point);
        let witness_polynomial = DensePolynomial::from_coefficients_vec(witness_coeffs);
        end_timer!(witness_time);

        let (num_leading_zeros, witness_coeffs) =
            skip_leading_zeros_and_convert_to_bigints(&witness_polynomial);

        let proof = E::G1::msm_bigint(
            &prover_param.powers_of_g[num_leading_zeros..],
            &witness_coeffs,
        )
        .into_affine();

        end_timer!(open_time);
        Ok(UnivariateKzgProof {
            point: *point,
            eval,
            proof,
        })
    }

    /// Verify that `value` is the evaluation at `point` of the polynomial
    /// committed inside `commitment`.
    ///
    /// Checks the pairing equation
    /// `e(C - [value] g, h) = e(w, [tau] h - [point] h)`, which holds iff
    /// `(x - point)` divides `p(x) - value`.
    fn verify(
        verifier_param: &Self::VerifierParam,
        commitment: &Self::Commitment,
        point: &Self::Point,
        value: &Self::Evaluation,
        proof: &Self::Proof,
    ) -> Result<bool, PCSError> {
        let check_time = start_timer!(|| "Checking evaluation");
        let pairing_inputs: Vec<(E::G1Prepared, E::G2Prepared)> = vec![
            (
                (verifier_param.g.mul(value) - proof.proof.mul(point)
                    - commitment.0.into_group())
                .into_affine()
                .into(),
                verifier_param.h.into(),
            ),
            (proof.proof.into(), verifier_param.beta_h.into()),
        ];

        let p1 = pairing_inputs.iter().map(|(a, _)| a.clone());
        let p2 = pairing_inputs.iter().map(|(_, a)| a.clone());

        let res = E::multi_pairing(p1, p2).0.is_one();

        end_timer!(check_time, || format!("Result: {}", res));
        Ok(res)
    }
}

fn skip_leading_zeros_and_convert_to_bigints<F: PrimeField, P: DenseUVPolynomial<F>>(
    p: &P,
) -> (usize, Vec<F::BigInt>) {
    let mut num_leading_zeros = 0;
    while num_leading_zeros < p.coeffs().len() && p.coeffs()[num_leading_zeros].is_zero() {
        num_leading_zeros += 1;
    }
    let coeffs = convert_to_bigints(&p.coeffs()[num_leading_zeros..]);
    (num_leading_zeros, coeffs)
}

fn convert_to_bigints<F: PrimeField>(p: &[F]) -> Vec<F::BigInt> {
    let to_bigint_time = start_timer!(|| "Converting polynomial coeffs to bigints");
    let coeffs = ark_std::cfg_iter!(p)
        .map(|s| s.into_bigint())
        .collect::<Vec<_>>();
    end_timer!(to_bigint_time);
    coeffs
}
