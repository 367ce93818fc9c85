// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Recoverable domain errors. None of these are fatal to the session; the
/// command layer reports them and leaves state untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("no wish with id '{0}'")]
    WishNotFound(String),
    #[error("no income record with id '{0}'")]
    RecordNotFound(String),
    #[error("invalid sync code")]
    InvalidSyncCode,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("the undo window has expired")]
    UndoExpired,
    #[error("this device is already paired; run `nestegg unpair` first")]
    AlreadyPaired,
}

pub type Result<T> = std::result::Result<T, Error>;
