// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod ledger;
pub mod models;
pub mod pairing;
pub mod parser;
pub mod projection;
pub mod reconcile;
pub mod store;
pub mod sync;
pub mod utils;
pub mod wishlist;
