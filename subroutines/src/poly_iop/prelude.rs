// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

pub use crate::poly_iop::{
    errors::PolyIOPErrors,
    sum_check::{sum_check, SumCheck, SumCheckProof},
    zero_check::{zero_test, ZeroCheck, ZeroCheckProof},
    PolyIOP,
};
