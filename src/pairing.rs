// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::FamilyConfig;
use crate::utils::new_id;

pub fn is_paired(config: &FamilyConfig) -> bool {
    config.family_id.is_some()
}

/// Stamp a fresh family identity and unlock the app. This is a local
/// identity stamp, not a handshake: `paired_user_id` stays unset.
pub fn start(config: &mut FamilyConfig) -> Result<String> {
    if config.family_id.is_some() {
        return Err(Error::AlreadyPaired);
    }
    let id = new_id("family");
    config.family_id = Some(id.clone());
    config.paired_user_id = None;
    Ok(id)
}

/// Return to the unpaired state. Income and wish data are never cleared by
/// unpairing; callers must collect an explicit acknowledgment first.
pub fn unpair(config: &mut FamilyConfig) {
    config.family_id = None;
    config.paired_user_id = None;
}
