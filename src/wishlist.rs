// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{PendingUndo, SavingsContribution, UserId, Wish, WishStatus};
use crate::utils::new_id;

/// How long a removed wish stays restorable.
pub const UNDO_WINDOW_MS: i64 = 6_000;

pub struct NewWishInput {
    pub title: String,
    pub target_amount: Decimal,
    pub user_id: UserId,
    pub image_url: String,
}

fn find_mut<'a>(wishes: &'a mut [Wish], id: &str) -> Result<&'a mut Wish> {
    wishes
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| Error::WishNotFound(id.to_string()))
}

pub fn create(wishes: &mut Vec<Wish>, input: NewWishInput) -> Result<Wish> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(Error::Validation("wish title must not be empty".into()));
    }
    if input.target_amount <= Decimal::ZERO {
        return Err(Error::Validation("target amount must be positive".into()));
    }
    let id = new_id("wish");
    let image_url = if input.image_url.trim().is_empty() {
        format!("https://api.dicebear.com/7.x/identicon/svg?seed={id}")
    } else {
        input.image_url
    };
    let wish = Wish {
        id,
        title,
        target_amount: input.target_amount,
        current_saved_amount: Decimal::ZERO,
        status: WishStatus::Pending,
        user_id: input.user_id,
        image_url,
        is_pinned: false,
        savings_history: Vec::new(),
    };
    wishes.push(wish.clone());
    Ok(wish)
}

/// Append one contribution. Each call is a distinct event; there is no
/// dedupe, so callers must not replay.
pub fn contribute(wishes: &mut [Wish], id: &str, amount: Decimal, now: i64) -> Result<Wish> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(
            "contribution amount must be positive".into(),
        ));
    }
    let wish = find_mut(wishes, id)?;
    wish.savings_history.push(SavingsContribution {
        amount,
        timestamp: now,
    });
    let saved = wish.current_saved_amount + amount;
    wish.current_saved_amount = saved.min(wish.target_amount);
    wish.status = if saved >= wish.target_amount {
        WishStatus::Completed
    } else {
        WishStatus::Ongoing
    };
    Ok(wish.clone())
}

pub fn rename(wishes: &mut [Wish], id: &str, title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::Validation("wish title must not be empty".into()));
    }
    find_mut(wishes, id)?.title = title.to_string();
    Ok(())
}

/// Change the target. History and saved amount are left untouched; status is
/// recomputed right away, so lowering the target to or below the saved
/// amount completes the wish immediately (and raising the target of a
/// completed wish reopens it).
pub fn retarget(wishes: &mut [Wish], id: &str, target_amount: Decimal) -> Result<Wish> {
    if target_amount <= Decimal::ZERO {
        return Err(Error::Validation("target amount must be positive".into()));
    }
    let wish = find_mut(wishes, id)?;
    wish.target_amount = target_amount;
    wish.status = if wish.current_saved_amount >= target_amount {
        WishStatus::Completed
    } else if wish.savings_history.is_empty() {
        WishStatus::Pending
    } else {
        WishStatus::Ongoing
    };
    Ok(wish.clone())
}

pub fn toggle_pin(wishes: &mut [Wish], id: &str) -> Result<bool> {
    let wish = find_mut(wishes, id)?;
    wish.is_pinned = !wish.is_pinned;
    Ok(wish.is_pinned)
}

pub fn set_image(wishes: &mut [Wish], id: &str, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::Validation("image url must not be empty".into()));
    }
    find_mut(wishes, id)?.image_url = url.trim().to_string();
    Ok(())
}

/// Immediate removal. The removed entity is returned so the caller can hold
/// it for the undo window.
pub fn remove(wishes: &mut Vec<Wish>, id: &str) -> Result<Wish> {
    let idx = wishes
        .iter()
        .position(|w| w.id == id)
        .ok_or_else(|| Error::WishNotFound(id.to_string()))?;
    Ok(wishes.remove(idx))
}

/// Arm the undo slot with a just-removed wish, replacing whatever was there.
pub fn stash_undo(slot: &mut Option<PendingUndo>, wish: Wish, now: i64) {
    *slot = Some(PendingUndo {
        wish,
        expires_at: now + UNDO_WINDOW_MS,
    });
}

/// Re-insert the pending removed wish with its original id and fields. The
/// slot is consumed either way; an expired reference is simply dropped.
pub fn restore(wishes: &mut Vec<Wish>, slot: &mut Option<PendingUndo>, now: i64) -> Result<Wish> {
    let pending = slot.take().ok_or(Error::NothingToUndo)?;
    if now > pending.expires_at {
        return Err(Error::UndoExpired);
    }
    if wishes.iter().any(|w| w.id == pending.wish.id) {
        return Err(Error::Validation(format!(
            "wish '{}' already exists",
            pending.wish.id
        )));
    }
    wishes.push(pending.wish.clone());
    Ok(pending.wish)
}

/// Replace the manual order. `sequence` must list every current wish id
/// exactly once; pinned items still sort to the front at display time.
pub fn reorder(wishes: &mut Vec<Wish>, sequence: &[String]) -> Result<()> {
    if sequence.len() != wishes.len() {
        return Err(Error::Validation(
            "reorder sequence must list every wish exactly once".into(),
        ));
    }
    // validate the full permutation before touching anything
    let mut order = Vec::with_capacity(sequence.len());
    let mut used = vec![false; wishes.len()];
    for id in sequence {
        let pos = wishes
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| Error::WishNotFound(id.clone()))?;
        if used[pos] {
            return Err(Error::Validation(format!("duplicate id '{id}' in sequence")));
        }
        used[pos] = true;
        order.push(pos);
    }
    let next: Vec<Wish> = order.into_iter().map(|i| wishes[i].clone()).collect();
    *wishes = next;
    Ok(())
}

/// Display ordering: pinned first (stable among themselves), then the manual
/// order. Applied at read time, never stored.
pub fn display_order(wishes: &[Wish]) -> Vec<&Wish> {
    let mut out: Vec<&Wish> = wishes.iter().filter(|w| w.is_pinned).collect();
    out.extend(wishes.iter().filter(|w| !w.is_pinned));
    out
}
