// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

pub mod pcs;
pub mod poly_iop;

pub use pcs::prelude::*;
pub use poly_iop::prelude::*;
