// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod income;
pub mod profiles;
pub mod sync;
pub mod wishes;
