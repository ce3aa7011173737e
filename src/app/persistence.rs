// SPDX-License-Identifier: MPL-2.0
//! Writes remembered preferences back to `settings.toml`.

use super::config::{self, Config};
use crate::domain::body::{Gender, Side};

/// Remembers the last chosen gender and side as the next startup variant.
///
/// Guarded during tests to keep isolation: unit tests check the in-memory
/// config instead.
pub fn persist_variant_preference(config: &mut Config, gender: Gender, side: Side) {
    config.diagram.initial_gender = Some(gender);
    config.diagram.initial_side = Some(side);

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        log::warn!("failed to save config: {}", error);
    }
}
