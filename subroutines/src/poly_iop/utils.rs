// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Helpers shared by the poly-IOP protocols.

use crate::poly_iop::errors::PolyIOPErrors;
use ark_ff::PrimeField;
use ark_std::format;
use transcript::IOPTranscript;

/// Check that `(omega, order)` describes a multiplicative subgroup and
/// absorb it into the transcript.
///
/// Both prover and verifier call this before any commitment is absorbed,
/// so the derived challenges are bound to the evaluation domain.
pub(crate) fn absorb_subgroup<F: PrimeField>(
    transcript: &mut IOPTranscript<F>,
    omega: &F,
    order: usize,
) -> Result<(), PolyIOPErrors> {
    if order == 0 {
        return Err(PolyIOPErrors::InvalidParameters(
            "subgroup order must be positive".to_string(),
        ));
    }
    if !omega.pow([order as u64]).is_one() {
        return Err(PolyIOPErrors::InvalidParameters(format!(
            "generator does not have order dividing {}",
            order
        )));
    }

    transcript.append_message(b"subgroup order", &(order as u64).to_le_bytes())?;
    transcript.append_field_element(b"subgroup generator", omega)?;
    Ok(())
}

/// Iterate the subgroup elements `1, omega, omega^2, ...` and return the
/// first on which `coeffs` does not evaluate to zero, if any.
pub(crate) fn first_non_vanishing_point<F: PrimeField>(
    coeffs: &[F],
    omega: &F,
    order: usize,
) -> Option<F> {
    let mut current = F::one();
    for _ in 0..order {
        if !arithmetic::evaluate(coeffs, &current).is_zero() {
            return Some(current);
        }
        current *= omega;
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;
    use arithmetic::find_primitive_root;
    use ark_bls12_381::Fr;
    use ark_ff::{One, Zero};

    #[test]
    fn test_absorb_subgroup_rejects_bad_domains() {
        let mut transcript = IOPTranscript::<Fr>::new(b"test");
        assert!(absorb_subgroup(&mut transcript, &Fr::one(), 0).is_err());
        // 3 is not a 4th root of unity
        assert!(absorb_subgroup(&mut transcript, &Fr::from(3u64), 4).is_err());

        let omega = find_primitive_root::<Fr>(4).unwrap();
        assert!(absorb_subgroup(&mut transcript, &omega, 4).is_ok());
    }

    #[test]
    fn test_first_non_vanishing_point() {
        let omega = find_primitive_root::<Fr>(4).unwrap();
        // x^4 - 1 vanishes on the whole subgroup
        let vanishing = [-Fr::one(), Fr::zero(), Fr::zero(), Fr::zero(), Fr::one()];
        assert!(first_non_vanishing_point(&vanishing, &omega, 4).is_none());

        // x - 1 only vanishes at 1, caught at the second element
        let linear = [-Fr::one(), Fr::one()];
        assert_eq!(first_non_vanishing_point(&linear, &omega, 4), Some(omega));
    }
}
