// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Main module for the SumCheck protocol.

use crate::{
    pcs::{
        prelude::{Commitment, UnivariateKzgProof},
        PolynomialCommitmentScheme,
    },
    poly_iop::{errors::PolyIOPErrors, utils::absorb_subgroup, PolyIOP},
};
use arithmetic::divide_by_vanishing;
use ark_ec::pairing::Pairing;
use ark_ff::{Field, One};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use ark_std::{end_timer, format, start_timer, vec::Vec, Zero};
use transcript::IOPTranscript;

/// A SumCheck for a committed polynomial `q` proves that the evaluations
/// of `q` over the multiplicative subgroup generated by `omega` add up
/// to a claimed sum `s`.
///
/// The protocol rests on the decomposition
///
/// `q(x) - s/order = f(x) * (x^order - 1) + x * p(x)`
///
/// with `deg p < order - 1`: a polynomial of degree below `order` sums
/// to `order` times its constant term over the subgroup, so subtracting
/// `s/order` cancels exactly that term when the claim is true.
///
/// Prover steps:
/// 1. shift the constant term of `q` by `s/order`
/// 2. divide by the vanishing polynomial; the in-place reduction leaves
///    the remainder alongside the quotient `f`
/// 3. check the remainder invariants (zero constant term, degree below
///    the subgroup order) and peel off one factor of `x` to obtain `p`
/// 4. commit to `q`, `f` and `p`; absorb the claimed sum and all three
///    commitments; squeeze the challenge `r`; open all three at `r`
///
/// Verifier steps:
/// 1. re-absorb and re-derive `r`
/// 2. check the three openings at the re-derived `r`
/// 3. check `q(r) = f(r) * (r^order - 1) + s/order + r * p(r)`
///
/// The proof is three commitments and three openings regardless of
/// degree.
pub trait SumCheck<E, PCS>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<E>,
{
    type SumCheckProof;
    type Transcript;

    /// Initialize the system with a transcript.
    ///
    /// This function is optional -- in the case where a SumCheck is
    /// a building block for a more complex protocol, the transcript
    /// may be initialized by this complex protocol, and passed to the
    /// SumCheck prover/verifier.
    fn init_transcript() -> Self::Transcript;

    /// Generate a proof that the evaluations of `poly` over the subgroup
    /// generated by `omega` sum to `sum`.
    fn prove(
        pcs_param: &PCS::ProverParam,
        poly: &PCS::Polynomial,
        omega: &E::ScalarField,
        order: usize,
        sum: &E::ScalarField,
        transcript: &mut Self::Transcript,
    ) -> Result<Self::SumCheckProof, PolyIOPErrors>;

    /// Verify the claimed sum using the proof.
    fn verify(
        verifier_param: &PCS::VerifierParam,
        proof: &Self::SumCheckProof,
        omega: &E::ScalarField,
        order: usize,
        sum: &E::ScalarField,
        transcript: &mut Self::Transcript,
    ) -> Result<bool, PolyIOPErrors>;
}

/// A sum check proof consists of commitments to the polynomial, to the
/// quotient `f` by the vanishing polynomial, and to the shifted
/// remainder `p`, with one opening of each at the challenge point.
#[derive(Clone, Debug)]
pub struct SumCheckProof<E, PCS>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<E>,
{
    pub poly_comm: PCS::Commitment,
    pub quotient_comm: PCS::Commitment,
    pub remainder_comm: PCS::Commitment,
    pub poly_opening: PCS::Proof,
    pub quotient_opening: PCS::Proof,
    pub remainder_opening: PCS::Proof,
}

impl<E, PCS> SumCheck<E, PCS> for PolyIOP<E::ScalarField>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<
        E,
        Polynomial = DensePolynomial<E::ScalarField>,
        Point = E::ScalarField,
        Evaluation = E::ScalarField,
        Commitment = Commitment<E>,
        Proof = UnivariateKzgProof<E>,
    >,
{
    type SumCheckProof = SumCheckProof<E, PCS>;
    type Transcript = IOPTranscript<E::ScalarField>;

    fn init_transcript() -> Self::Transcript {
        IOPTranscript::<E::ScalarField>::new(b"Initializing SumCheck transcript")
    }

    fn prove(
        pcs_param: &PCS::ProverParam,
        poly: &PCS::Polynomial,
        omega: &E::ScalarField,
        order: usize,
        sum: &E::ScalarField,
        transcript: &mut Self::Transcript,
    ) -> Result<Self::SumCheckProof, PolyIOPErrors> {
        let start = start_timer!(|| "sum_check prove");

        absorb_subgroup(transcript, omega, order)?;

        let order_inv = E::ScalarField::from(order as u64)
            .inverse()
            .ok_or_else(|| {
                PolyIOPErrors::InvalidParameters("subgroup order is not invertible".to_string())
            })?;

        // g(x) = q(x) - s/order
        let mut shifted = poly.coeffs().to_vec();
        if shifted.is_empty() {
            shifted.push(E::ScalarField::zero());
        }
        shifted[0] -= *sum * order_inv;

        let (quotient, remainder) = divide_by_vanishing(&shifted, order)?;

        // when the claimed sum is correct the constant term of the
        // remainder has been cancelled; anything else disproves the claim
        if remainder.first().map_or(false, |c| !c.is_zero()) {
            return Err(PolyIOPErrors::BadRemainder(format!(
                "nonzero constant term {} in the remainder",
                remainder[0]
            )));
        }
        if remainder.len() > order {
            return Err(PolyIOPErrors::BadRemainder(format!(
                "remainder of length {} exceeds the subgroup order {}",
                remainder.len(),
                order
            )));
        }

        // the remainder is x * p(x); drop the zero constant term
        let low_coeffs: Vec<E::ScalarField> = if remainder.is_empty() {
            Vec::new()
        } else {
            remainder[1..].to_vec()
        };
        let quotient = DensePolynomial::from_coefficients_vec(quotient);
        let low = DensePolynomial::from_coefficients_vec(low_coeffs);

        let poly_comm = PCS::commit(pcs_param, poly)?;
        let quotient_comm = PCS::commit(pcs_param, &quotient)?;
        let remainder_comm = PCS::commit(pcs_param, &low)?;
        transcript.append_field_element(b"s", sum)?;
        transcript.append_serializable_element(b"q(x)", &poly_comm)?;
        transcript.append_serializable_element(b"f(x)", &quotient_comm)?;
        transcript.append_serializable_element(b"p(x)", &remainder_comm)?;

        let r = transcript.get_and_append_challenge(b"r")?;

        let poly_opening = PCS::open(pcs_param, poly, &r)?;
        let quotient_opening = PCS::open(pcs_param, &quotient, &r)?;
        let remainder_opening = PCS::open(pcs_param, &low, &r)?;

        end_timer!(start);
        Ok(SumCheckProof {
            poly_comm,
            quotient_comm,
            remainder_comm,
            poly_opening,
            quotient_opening,
            remainder_opening,
        })
    }

    fn verify(
        verifier_param: &PCS::VerifierParam,
        proof: &Self::SumCheckProof,
        omega: &E::ScalarField,
        order: usize,
        sum: &E::ScalarField,
        transcript: &mut Self::Transcript,
    ) -> Result<bool, PolyIOPErrors> {
        let start = start_timer!(|| "sum_check verify");

        absorb_subgroup(transcript, omega, order)?;
        transcript.append_field_element(b"s", sum)?;
        transcript.append_serializable_element(b"q(x)", &proof.poly_comm)?;
        transcript.append_serializable_element(b"f(x)", &proof.quotient_comm)?;
        transcript.append_serializable_element(b"p(x)", &proof.remainder_comm)?;

        let r = transcript.get_and_append_challenge(b"r")?;

        for (comm, opening) in [
            (&proof.poly_comm, &proof.poly_opening),
            (&proof.quotient_comm, &proof.quotient_opening),
            (&proof.remainder_comm, &proof.remainder_opening),
        ] {
            if !PCS::verify(verifier_param, comm, &r, &opening.eval, opening)? {
                end_timer!(start);
                return Ok(false);
            }
        }

        let order_inv = E::ScalarField::from(order as u64)
            .inverse()
            .ok_or_else(|| {
                PolyIOPErrors::InvalidParameters("subgroup order is not invertible".to_string())
            })?;
        let vanishing_at_r = r.pow([order as u64]) - E::ScalarField::one();

        // q(r) = f(r) (r^order - 1) + s/order + r p(r)
        let res = proof.poly_opening.eval
            == proof.quotient_opening.eval * vanishing_at_r
                + *sum * order_inv
                + r * proof.remainder_opening.eval;

        end_timer!(start);
        Ok(res)
    }
}

/// Run the SumCheck prover and verifier back to back over matching
/// Fiat-Shamir transcripts, proving that the evaluations of `poly` over
/// the subgroup generated by `omega` sum to `sum`.
///
/// This compiles both roles into one procedure; it is meant for drivers
/// and tests, not for deployments where prover and verifier are
/// different parties.
pub fn sum_check<E, PCS>(
    pcs_param: &PCS::ProverParam,
    verifier_param: &PCS::VerifierParam,
    poly: &PCS::Polynomial,
    omega: &E::ScalarField,
    order: usize,
    sum: &E::ScalarField,
) -> Result<bool, PolyIOPErrors>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<
        E,
        Polynomial = DensePolynomial<E::ScalarField>,
        Point = E::ScalarField,
        Evaluation = E::ScalarField,
        Commitment = Commitment<E>,
        Proof = UnivariateKzgProof<E>,
    >,
{
    let mut transcript = <PolyIOP<E::ScalarField> as SumCheck<E, PCS>>::init_transcript();
    let proof = <PolyIOP<E::ScalarField> as SumCheck<E, PCS>>::prove(
        pcs_param,
        poly,
        omega,
        order,
        sum,
        &mut transcript,
    )?;

    let mut transcript = <PolyIOP<E::ScalarField> as SumCheck<E, PCS>>::init_transcript();
    <PolyIOP<E::ScalarField> as SumCheck<E, PCS>>::verify(
        verifier_param,
        &proof,
        omega,
        order,
        sum,
        &mut transcript,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pcs::prelude::UnivariateKzgPCS;
    use arithmetic::{evaluate, find_primitive_root};
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_std::{rand::{rngs::StdRng, SeedableRng}, vec, UniformRand};

    type PCS = UnivariateKzgPCS<Bls12_381>;

    fn subgroup_sum(poly: &DensePolynomial<Fr>, omega: &Fr, order: usize) -> Fr {
        let mut sum = Fr::zero();
        let mut current = Fr::one();
        for _ in 0..order {
            sum += evaluate(poly.coeffs(), &current);
            current *= omega;
        }
        sum
    }

    #[test]
    fn test_literal_scenario() -> Result<(), PolyIOPErrors> {
        let mut rng = StdRng::seed_from_u64(0);
        let order = 4usize;
        let omega = find_primitive_root::<Fr>(order)?;
        let srs = PCS::gen_srs_for_testing(&mut rng, 16)?;
        let (pk, vk) = PCS::trim(&srs, 16)?;

        // q(x) = x^4 - 1 + 5: the vanishing part sums to zero over the
        // subgroup, the constant contributes 4 * 5 = 20
        let poly = DensePolynomial::from_coefficients_vec(vec![
            Fr::from(4u64),
            Fr::zero(),
            Fr::zero(),
            Fr::zero(),
            Fr::one(),
        ]);
        let sum = Fr::from(20u64);
        assert!(sum_check::<Bls12_381, PCS>(
            &pk, &vk, &poly, &omega, order, &sum
        )?);

        // an incorrect claimed sum breaks the decomposition
        let wrong_sum = Fr::from(21u64);
        assert!(matches!(
            sum_check::<Bls12_381, PCS>(&pk, &vk, &poly, &omega, order, &wrong_sum),
            Err(PolyIOPErrors::BadRemainder(_))
        ));
        Ok(())
    }

    #[test]
    fn test_random_polys_accepted() -> Result<(), PolyIOPErrors> {
        let mut rng = StdRng::seed_from_u64(0);
        let srs = PCS::gen_srs_for_testing(&mut rng, 64)?;
        let (pk, vk) = PCS::trim(&srs, 64)?;

        for order in [2usize, 8, 16] {
            let omega = find_primitive_root::<Fr>(order)?;
            for _ in 0..5 {
                // degree far above the subgroup order, so that both the
                // quotient and the remainder polynomials are nontrivial
                let poly = DensePolynomial::<Fr>::rand(order + 20, &mut rng);
                let sum = subgroup_sum(&poly, &omega, order);
                assert!(sum_check::<Bls12_381, PCS>(
                    &pk, &vk, &poly, &omega, order, &sum
                )?);

                let wrong_sum = sum + Fr::one();
                assert!(matches!(
                    sum_check::<Bls12_381, PCS>(&pk, &vk, &poly, &omega, order, &wrong_sum),
                    Err(PolyIOPErrors::BadRemainder(_))
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn test_low_degree_poly() -> Result<(), PolyIOPErrors> {
        let mut rng = StdRng::seed_from_u64(0);
        let order = 8usize;
        let omega = find_primitive_root::<Fr>(order)?;
        let srs = PCS::gen_srs_for_testing(&mut rng, 16)?;
        let (pk, vk) = PCS::trim(&srs, 16)?;

        // degree below the subgroup order: the quotient is zero and the
        // whole shifted polynomial is remainder
        let poly = DensePolynomial::<Fr>::rand(order - 2, &mut rng);
        let sum = subgroup_sum(&poly, &omega, order);
        assert!(sum_check::<Bls12_381, PCS>(
            &pk, &vk, &poly, &omega, order, &sum
        )?);

        // the zero polynomial sums to zero
        let zero_poly = DensePolynomial::zero();
        assert!(sum_check::<Bls12_381, PCS>(
            &pk,
            &vk,
            &zero_poly,
            &omega,
            order,
            &Fr::zero()
        )?);
        assert!(matches!(
            sum_check::<Bls12_381, PCS>(&pk, &vk, &zero_poly, &omega, order, &Fr::one()),
            Err(PolyIOPErrors::BadRemainder(_))
        ));
        Ok(())
    }

    #[test]
    fn test_verifier_rejects_mismatched_sum() -> Result<(), PolyIOPErrors> {
        let mut rng = StdRng::seed_from_u64(0);
        let order = 8usize;
        let omega = find_primitive_root::<Fr>(order)?;
        let srs = PCS::gen_srs_for_testing(&mut rng, 32)?;
        let (pk, vk) = PCS::trim(&srs, 32)?;

        let poly = DensePolynomial::<Fr>::rand(order + 10, &mut rng);
        let sum = subgroup_sum(&poly, &omega, order);

        let mut transcript = <PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::init_transcript();
        let proof = <PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::prove(
            &pk,
            &poly,
            &omega,
            order,
            &sum,
            &mut transcript,
        )?;

        let mut transcript = <PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::init_transcript();
        assert!(<PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::verify(
            &vk,
            &proof,
            &omega,
            order,
            &sum,
            &mut transcript,
        )?);

        // a verifier given a different claimed sum must reject the same
        // proof: the transcript diverges and so does the identity
        let wrong_sum = sum + Fr::one();
        let mut transcript = <PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::init_transcript();
        assert!(!<PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::verify(
            &vk,
            &proof,
            &omega,
            order,
            &wrong_sum,
            &mut transcript,
        )?);

        // forged evaluation on the remainder opening
        let mut forged_opening = proof.remainder_opening.clone();
        forged_opening.eval += Fr::one();
        let forged = SumCheckProof::<Bls12_381, PCS> {
            poly_comm: proof.poly_comm,
            quotient_comm: proof.quotient_comm,
            remainder_comm: proof.remainder_comm,
            poly_opening: proof.poly_opening.clone(),
            quotient_opening: proof.quotient_opening.clone(),
            remainder_opening: forged_opening,
        };
        let mut transcript = <PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::init_transcript();
        assert!(!<PolyIOP<Fr> as SumCheck<Bls12_381, PCS>>::verify(
            &vk,
            &forged,
            &omega,
            order,
            &sum,
            &mut transcript,
        )?);

        Ok(())
    }
}
