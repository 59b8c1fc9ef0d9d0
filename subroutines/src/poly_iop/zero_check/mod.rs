// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Main module for the ZeroCheck protocol.

use crate::{
    pcs::{
        prelude::{Commitment, UnivariateKzgProof},
        PolynomialCommitmentScheme,
    },
    poly_iop::{
        errors::PolyIOPErrors,
        utils::{absorb_subgroup, first_non_vanishing_point},
        PolyIOP,
    },
};
use arithmetic::divide_by_vanishing;
use ark_ec::pairing::Pairing;
use ark_ff::{Field, One};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use ark_std::{end_timer, format, start_timer};
use transcript::IOPTranscript;

/// A ZeroCheck for a committed polynomial `q` proves that `q(h) = 0` for
/// every element `h` of the multiplicative subgroup generated by `omega`.
///
/// Prover steps:
/// 1. check that `q` vanishes on the subgroup (honest-prover assertion)
/// 2. compute the quotient `f = q / (x^order - 1)`
/// 3. commit to `q` and `f`, absorb both commitments, squeeze the
///    challenge `r`
/// 4. open both polynomials at `r`
///
/// Verifier steps:
/// 1. re-absorb the commitments and re-derive `r`
/// 2. check both openings at the re-derived `r`
/// 3. check `q(r) = f(r) * (r^order - 1)`
///
/// The proof is two commitments and two openings regardless of degree.
pub trait ZeroCheck<E, PCS>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<E>,
{
    type ZeroCheckProof;
    type Transcript;

    /// Initialize the system with a transcript.
    ///
    /// This function is optional -- in the case where a ZeroCheck is
    /// a building block for a more complex protocol, the transcript
    /// may be initialized by this complex protocol, and passed to the
    /// ZeroCheck prover/verifier.
    fn init_transcript() -> Self::Transcript;

    /// Generate a proof that the polynomial vanishes on the subgroup
    /// generated by `omega` of the given order.
    fn prove(
        pcs_param: &PCS::ProverParam,
        poly: &PCS::Polynomial,
        omega: &E::ScalarField,
        order: usize,
        transcript: &mut Self::Transcript,
    ) -> Result<Self::ZeroCheckProof, PolyIOPErrors>;

    /// Verify the claim using the proof.
    fn verify(
        verifier_param: &PCS::VerifierParam,
        proof: &Self::ZeroCheckProof,
        omega: &E::ScalarField,
        order: usize,
        transcript: &mut Self::Transcript,
    ) -> Result<bool, PolyIOPErrors>;
}

/// A zero check proof consists of commitments to the polynomial and to
/// its quotient by the vanishing polynomial, with one opening of each at
/// the challenge point.
#[derive(Clone, Debug)]
pub struct ZeroCheckProof<E, PCS>
where
    E: Pairing,
    PCS: PolynomialCommitmentScheme<E>,
{
    pub poly_comm: PCS::Commitment,
    pub quotient_comm: PCS::Commitment,
    pub poly_opening: PCS::Proof,
    pub quotient_opening: PCS::Proof,
}

impl<E, PCS> ZeroCheck<E, PCS> for PolyIOP<E::ScalarField>
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
    type ZeroCheckProof = ZeroCheckProof<E, PCS>;
    type Transcript = IOPTranscript<E::ScalarField>;

    fn init_transcript() -> Self::Transcript {
        IOPTranscript::<E::ScalarField>::new(b"Initializing ZeroCheck transcript")
    }

    fn prove(
        pcs_param: &PCS::ProverParam,
        poly: &PCS::Polynomial,
        omega: &E::ScalarField,
        order: usize,
        transcript: &mut Self::Transcript,
    ) -> Result<Self::ZeroCheckProof, PolyIOPErrors> {
        let start = start_timer!(|| "zero_check prove");

        absorb_subgroup(transcript, omega, order)?;

        if let Some(point) = first_non_vanishing_point(poly.coeffs(), omega, order) {
            return Err(PolyIOPErrors::NotVanishing(format!(
                "polynomial does not vanish at subgroup element {}",
                point
            )));
        }

        let (quotient, remainder) = divide_by_vanishing(poly.coeffs(), order)?;
        // vanishing on every power of omega pins the residue mod
        // x^order - 1 only when omega has full order; a surviving
        // remainder means the claim fails on the rest of the subgroup
        if !remainder.is_empty() {
            return Err(PolyIOPErrors::NotVanishing(
                "polynomial is not divisible by the vanishing polynomial".to_string(),
            ));
        }
        let quotient = DensePolynomial::from_coefficients_vec(quotient);

        let poly_comm = PCS::commit(pcs_param, poly)?;
        let quotient_comm = PCS::commit(pcs_param, &quotient)?;
        transcript.append_serializable_element(b"q(x)", &poly_comm)?;
        transcript.append_serializable_element(b"f(x)", &quotient_comm)?;

        let r = transcript.get_and_append_challenge(b"r")?;

        let poly_opening = PCS::open(pcs_param, poly, &r)?;
        let quotient_opening = PCS::open(pcs_param, &quotient, &r)?;

        end_timer!(start);
        Ok(ZeroCheckProof {
            poly_comm,
            quotient_comm,
            poly_opening,
            quotient_opening,
        })
    }

    fn verify(
        verifier_param: &PCS::VerifierParam,
        proof: &Self::ZeroCheckProof,
        omega: &E::ScalarField,
        order: usize,
        transcript: &mut Self::Transcript,
    ) -> Result<bool, PolyIOPErrors> {
        let start = start_timer!(|| "zero_check verify");

        absorb_subgroup(transcript, omega, order)?;
        transcript.append_serializable_element(b"q(x)", &proof.poly_comm)?;
        transcript.append_serializable_element(b"f(x)", &proof.quotient_comm)?;

        // openings are checked at the re-derived challenge, never at a
        // point the prover claims
        let r = transcript.get_and_append_challenge(b"r")?;

        if !PCS::verify(
            verifier_param,
            &proof.poly_comm,
            &r,
            &proof.poly_opening.eval,
            &proof.poly_opening,
        )? {
            end_timer!(start);
            return Ok(false);
        }
        if !PCS::verify(
            verifier_param,
            &proof.quotient_comm,
            &r,
            &proof.quotient_opening.eval,
            &proof.quotient_opening,
        )? {
            end_timer!(start);
            return Ok(false);
        }

        let vanishing_at_r = r.pow([order as u64]) - E::ScalarField::one();
        let res = proof.poly_opening.eval == proof.quotient_opening.eval * vanishing_at_r;

        end_timer!(start);
        Ok(res)
    }
}

/// Run the ZeroCheck prover and verifier back to back over matching
/// Fiat-Shamir transcripts, proving that `poly` vanishes on the subgroup
/// generated by `omega` of the given order.
///
/// This compiles both roles into one procedure; it is meant for drivers
/// and tests, not for deployments where prover and verifier are
/// different parties.
pub fn zero_test<E, PCS>(
    pcs_param: &PCS::ProverParam,
    verifier_param: &PCS::VerifierParam,
    poly: &PCS::Polynomial,
    omega: &E::ScalarField,
    order: usize,
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
    let mut transcript = <PolyIOP<E::ScalarField> as ZeroCheck<E, PCS>>::init_transcript();
    let proof = <PolyIOP<E::ScalarField> as ZeroCheck<E, PCS>>::prove(
        pcs_param,
        poly,
        omega,
        order,
        &mut transcript,
    )?;

    let mut transcript = <PolyIOP<E::ScalarField> as ZeroCheck<E, PCS>>::init_transcript();
    <PolyIOP<E::ScalarField> as ZeroCheck<E, PCS>>::verify(
        verifier_param,
        &proof,
        omega,
        order,
        &mut transcript,
    )
}
