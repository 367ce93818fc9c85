// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::{IncomeRecord, SyncPayload, Wish};

/// Serialize the full local data set to the text a code encoder (QR or
/// otherwise) would render. No chunking or size negotiation; payload-size
/// limits are the transport's problem.
pub fn encode_payload(records: &[IncomeRecord], wishes: &[Wish]) -> anyhow::Result<String> {
    let payload = SyncPayload {
        records: records.to_vec(),
        wishes: wishes.to_vec(),
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Decode scanned text. Anything that is not JSON with both `records` and
/// `wishes` arrays is rejected before any merge happens.
pub fn decode_payload(text: &str) -> Result<SyncPayload> {
    serde_json::from_str::<SyncPayload>(text.trim()).map_err(|_| Error::InvalidSyncCode)
}
