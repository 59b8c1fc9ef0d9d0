// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Implementing the structured reference string for the univariate KZG
//! scheme: power tables `[tau^i] g` in G1 and `[tau^i] h` in G2 for a
//! secret `tau` that exists only inside the generation ceremony.

use crate::pcs::{PCSError, StructuredReferenceString};
use ark_ec::{pairing::Pairing, scalar_mul::fixed_base::FixedBase, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    end_timer, format,
    rand::{CryptoRng, RngCore},
    start_timer,
    string::ToString,
    vec::Vec,
    One, UniformRand,
};

/// Universal parameters of the univariate KZG scheme.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct UnivariateUniversalParams<E: Pairing> {
    /// `powers_of_g[i] = [tau^i] g`, for i in 0..=max_degree
    pub powers_of_g: Vec<E::G1Affine>,
    /// `powers_of_h[i] = [tau^i] h`, for i in 0..=max_degree
    pub powers_of_h: Vec<E::G2Affine>,
}

impl<E: Pairing> UnivariateUniversalParams<E> {
    /// The largest supported polynomial degree.
    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len() - 1
    }
}

/// Prover parameters: the G1 power table, truncated to the supported
/// degree.
#[derive(Clone, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct UnivariateProverParam<C: AffineRepr> {
    /// `powers_of_g[i] = [tau^i] g`
    pub powers_of_g: Vec<C>,
}

/// Verifier parameters: the generators and `[tau] h`, all the pairing
/// check needs.
#[derive(Clone, Copy, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct UnivariateVerifierParam<E: Pairing> {
    /// generator of G1
    pub g: E::G1Affine,
    /// generator of G2
    pub h: E::G2Affine,
    /// `[tau] h`
    pub beta_h: E::G2Affine,
}

impl<E: Pairing> StructuredReferenceString<E> for UnivariateUniversalParams<E> {
    type ProverParam = UnivariateProverParam<E::G1Affine>;
    type VerifierParam = UnivariateVerifierParam<E>;

    /// Extract the prover parameters from the public parameters.
    fn extract_prover_param(&self, supported_degree: usize) -> Self::ProverParam {
        Self::ProverParam {
            powers_of_g: self.powers_of_g[..=supported_degree].to_vec(),
        }
    }

    /// Extract the verifier parameters from the public parameters.
    fn extract_verifier_param(&self, _supported_degree: usize) -> Self::VerifierParam {
        Self::VerifierParam {
            g: self.powers_of_g[0],
            h: self.powers_of_h[0],
            beta_h: self.powers_of_h[1],
        }
    }

    /// Trim the universal parameters to specialize the public parameters
    /// for polynomials of at most `supported_degree`.
    fn trim(
        &self,
        supported_degree: usize,
    ) -> Result<(Self::ProverParam, Self::VerifierParam), PCSError> {
        if supported_degree > self.max_degree() {
            return Err(PCSError::InvalidParameters(format!(
                "SRS supports degree {}, requested {}",
                self.max_degree(),
                supported_degree
            )));
        }
        Ok((
            self.extract_prover_param(supported_degree),
            self.extract_verifier_param(supported_degree),
        ))
    }

    /// Build SRS for testing.
    /// WARNING: THIS FUNCTION IS FOR TESTING PURPOSE ONLY.
    /// THE OUTPUT SRS SHOULD NOT BE USED IN PRODUCTION.
    fn gen_srs_for_testing<R: RngCore + CryptoRng>(
        rng: &mut R,
        max_degree: usize,
    ) -> Result<Self, PCSError> {
        if max_degree == 0 {
            return Err(PCSError::InvalidParameters(
                "degree bound must be positive".to_string(),
            ));
        }

        let total_timer = start_timer!(|| "SRS generation");

        // The ceremony secret. It must not outlive this function.
        let tau = E::ScalarField::rand(rng);
        let g = E::G1::rand(rng);
        let h = E::G2::rand(rng);

        let mut powers_of_tau = Vec::with_capacity(max_degree + 1);
        let mut current = E::ScalarField::one();
        for _ in 0..=max_degree {
            powers_of_tau.push(current);
            current *= tau;
        }

        let scalar_bits = E::ScalarField::MODULUS_BIT_SIZE as usize;
        let window_size = FixedBase::get_mul_window_size(max_degree + 1);

        let g1_timer = start_timer!(|| "G1 power table");
        let g_table = FixedBase::get_window_table(scalar_bits, window_size, g);
        let powers_of_g = E::G1::normalize_batch(&FixedBase::msm::<E::G1>(
            scalar_bits,
            window_size,
            &g_table,
            &powers_of_tau,
        ));
        end_timer!(g1_timer);

        let g2_timer = start_timer!(|| "G2 power table");
        let h_table = FixedBase::get_window_table(scalar_bits, window_size, h);
        let powers_of_h = E::G2::normalize_batch(&FixedBase::msm::<E::G2>(
            scalar_bits,
            window_size,
            &h_table,
            &powers_of_tau,
        ));
        end_timer!(g2_timer);

        end_timer!(total_timer);
        Ok(Self {
            powers_of_g,
            powers_of_h,
        })
    }
}
