// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

use ark_ff::PrimeField;
use std::marker::PhantomData;

mod errors;
pub mod prelude;
pub mod sum_check;
mod utils;
pub mod zero_check;

#[derive(Clone, Debug, Default, Copy, PartialEq, Eq)]
/// Struct for PolyIOP protocol.
/// It has an associated type `F` that defines the prime field the
/// univariate polynomials operate on.
///
/// A PolyIOP may be instantiated with one of the following:
/// - ZeroCheck protocol.
/// - SumCheck protocol.
///
/// The systematic way to invoke a specific protocol is, for example,
///     `<PolyIOP<F> as ZeroCheck<E, PCS>>::prove()`
pub struct PolyIOP<F: PrimeField> {
    /// Associated field
    #[doc(hidden)]
    phantom: PhantomData<F>,
}
