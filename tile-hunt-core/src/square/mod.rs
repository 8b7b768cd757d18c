//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod finder;

pub use self::finder::{largest_square, largest_square_dense};
