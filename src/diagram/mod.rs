// SPDX-License-Identifier: MPL-2.0
//! Body-diagram loading: fetch the markup of a variant and turn it into a
//! hit-testable scene.

pub mod geometry;
pub mod markup;
pub mod scene;
pub mod source;

pub use geometry::{Bounds, DiagramPoint, FillRule, Outline};
pub use scene::{DiagramScene, Region};
pub use source::DiagramSource;

use crate::domain::body::{DiagramVariant, ZoneCatalog};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Fetches and parses the diagram for `variant`.
///
/// Parsing runs on the blocking pool so large drawings do not stall the
/// executor.
///
/// # Errors
///
/// Propagates retrieval errors from [`DiagramSource::fetch`] and parse errors
/// from [`DiagramScene::parse`].
pub async fn load(
    source: Arc<DiagramSource>,
    catalog: Arc<ZoneCatalog>,
    variant: DiagramVariant,
) -> Result<Arc<DiagramScene>> {
    log::debug!("loading diagram {}", source.locate(variant));
    let markup = source.fetch(variant).await?;

    tokio::task::spawn_blocking(move || DiagramScene::parse(variant, markup, &catalog))
        .await
        .map_err(|e| Error::Svg(format!("diagram parse task failed: {}", e)))?
        .map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::body::{Gender, Side, View, ZoneId};

    #[tokio::test(flavor = "multi_thread")]
    async fn embedded_full_front_has_a_head_region() {
        let scene = load(
            Arc::new(DiagramSource::Embedded),
            Arc::new(ZoneCatalog::builtin()),
            DiagramVariant::full(Gender::Male, Side::Front),
        )
        .await
        .expect("embedded diagram loads");

        assert!(scene.region(&ZoneId::new("head").expect("id")).is_some());
        assert!(scene.regions().len() > 5);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn embedded_head_views_have_no_head_region() {
        for gender in Gender::ALL {
            for side in Side::ALL {
                let scene = load(
                    Arc::new(DiagramSource::Embedded),
                    Arc::new(ZoneCatalog::builtin()),
                    DiagramVariant::new(gender, side, View::Head),
                )
                .await
                .expect("embedded diagram loads");
                assert!(scene.region(&ZoneId::new("head").expect("id")).is_none());
                assert!(!scene.regions().is_empty());
            }
        }
    }
}
