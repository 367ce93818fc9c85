// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two household members. Exactly two; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserId {
    Husband,
    Wife,
}

impl UserId {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "husband" | "h" => Some(UserId::Husband),
            "wife" | "w" => Some(UserId::Wife),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserId::Husband => "husband",
            UserId::Wife => "wife",
        }
    }
}

/// A single income (or loss) event. Immutable except for explicit edits of
/// amount/source/category; `id` and `timestamp` never change once minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub id: String,
    pub user_id: UserId,
    pub amount: Decimal, // signed; negative = expense/loss
    pub source: String,
    pub category: String,
    pub timestamp: i64, // epoch millis
}

/// Append-only element of a wish's savings history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsContribution {
    pub amount: Decimal,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishStatus {
    Pending,
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub current_saved_amount: Decimal,
    pub status: WishStatus,
    pub user_id: UserId,
    pub image_url: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub savings_history: Vec<SavingsContribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}

/// One profile per member, independently editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profiles {
    pub husband: UserProfile,
    pub wife: UserProfile,
}

impl Profiles {
    pub fn get(&self, user: UserId) -> &UserProfile {
        match user {
            UserId::Husband => &self.husband,
            UserId::Wife => &self.wife,
        }
    }

    pub fn get_mut(&mut self, user: UserId) -> &mut UserProfile {
        match user {
            UserId::Husband => &mut self.husband,
            UserId::Wife => &mut self.wife,
        }
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Profiles {
            husband: UserProfile {
                name: "Husband".to_string(),
                avatar: "\u{1F468}\u{1F3FB}\u{200D}\u{1F4BB}".to_string(),
            },
            wife: UserProfile {
                name: "Wife".to_string(),
                avatar: "\u{1F469}\u{1F3FB}\u{200D}\u{1F3A8}".to_string(),
            },
        }
    }
}

/// Gates access to the app: the device is "paired" once `family_id` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyConfig {
    pub family_id: Option<String>,
    pub paired_user_id: Option<String>,
}

/// Wire contract for device sync; this is the full JSON the code-exchange
/// collaborator renders and scans. Both fields are required: a payload
/// missing either one is not a sync code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncPayload {
    pub records: Vec<IncomeRecord>,
    pub wishes: Vec<Wish>,
}

/// The single restorable deleted wish. Last delete wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUndo {
    pub wish: Wish,
    pub expires_at: i64,
}
