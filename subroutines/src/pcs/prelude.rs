// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

//! Prelude
pub use crate::pcs::{
    errors::PCSError,
    structs::Commitment,
    univariate_kzg::{
        srs::{UnivariateProverParam, UnivariateUniversalParams, UnivariateVerifierParam},
        UnivariateKzgPCS, UnivariateKzgProof,
    },
    PolynomialCommitmentScheme, StructuredReferenceString,
};
