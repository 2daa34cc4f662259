/*
 * SPDX-FileCopyrightText: 2026 The dense-diameter developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use utils::traits::*;
}

/// Use `use dense_diameter::prelude::*;` to import common utilities, modules
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::diameter::{self, Diameter, DiameterError};
    pub use algo::floyd_warshall;
    pub use traits::*;
    pub use utils::{DistanceMatrix, RandomDistanceMatrix, ShapeError, DEFAULT_SENTINEL};
}
