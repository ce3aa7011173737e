// SPDX-License-Identifier: MPL-2.0
//! Parsed body diagram: the raw markup plus a flat list of clickable regions.
//!
//! The markup is rendered into a `usvg` tree, then walked once to pull out
//! each identifiable region with its outline in diagram coordinates and its
//! catalog label. Click handling works on this structure only; it never goes
//! back to the markup.
//!
//! Filled shapes without a region id (decorations, text, images) are kept as
//! occluders in paint order: a click on one hits nothing, even when a region
//! lies underneath it.

use super::geometry::{DiagramPoint, FillRule, Outline};
use super::markup::{self, RegionIds};
use crate::domain::body::{DiagramVariant, ZoneCatalog, ZoneId, ZoneLabel};
use crate::error::{Error, Result};
use resvg::usvg;

/// One clickable region of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: ZoneId,
    label: ZoneLabel,
    outline: Outline,
}

impl Region {
    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &ZoneLabel {
        &self.label
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}

#[derive(Debug, Clone)]
pub struct DiagramScene {
    variant: DiagramVariant,
    width: f32,
    height: f32,
    markup: Vec<u8>,
    regions: Vec<Region>,
    /// Everything that takes clicks, bottom to top.
    layers: Vec<Layer>,
}

#[derive(Debug, Clone, PartialEq)]
enum Layer {
    /// Index into `regions`.
    Region(usize),
    Occluder(Outline),
}

impl Layer {
    fn contains(&self, regions: &[Region], point: DiagramPoint) -> bool {
        match self {
            Layer::Region(index) => regions
                .get(*index)
                .is_some_and(|region| region.outline.contains(point)),
            Layer::Occluder(outline) => outline.contains(point),
        }
    }
}

impl DiagramScene {
    /// Parses diagram markup and labels its regions from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if the markup is not a well-formed SVG document
    /// or has empty dimensions.
    pub fn parse(variant: DiagramVariant, markup: Vec<u8>, catalog: &ZoneCatalog) -> Result<Self> {
        let ids = markup::scan_region_ids(&markup)?;
        let tree = usvg::Tree::from_data(&markup, &usvg::Options::default())?;

        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut collector = Collector {
            ids: &ids,
            catalog,
            regions: Vec::with_capacity(ids.len()),
            layers: Vec::new(),
        };
        collector.walk(tree.root());
        let Collector {
            regions, layers, ..
        } = collector;

        Ok(Self {
            variant,
            width: size.width(),
            height: size.height(),
            markup,
            regions,
            layers,
        })
    }

    #[must_use]
    pub fn variant(&self) -> DiagramVariant {
        self.variant
    }

    /// Intrinsic size of the drawing in diagram units.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn markup(&self) -> &[u8] {
        &self.markup
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn region(&self, id: &ZoneId) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == *id)
    }

    /// Topmost region under `point`. Later shapes are painted over earlier
    /// ones, so the search runs back to front and stops at the first shape
    /// containing the point; an occluder there means no region is hit.
    #[must_use]
    pub fn hit_test(&self, point: DiagramPoint) -> Option<&Region> {
        match self
            .layers
            .iter()
            .rev()
            .find(|layer| layer.contains(&self.regions, point))?
        {
            Layer::Region(index) => self.regions.get(*index),
            Layer::Occluder(_) => None,
        }
    }
}

struct Collector<'a> {
    ids: &'a RegionIds,
    catalog: &'a ZoneCatalog,
    regions: Vec<Region>,
    layers: Vec<Layer>,
}

impl Collector<'_> {
    fn walk(&mut self, group: &usvg::Group) {
        for node in group.children() {
            match node {
                usvg::Node::Group(child) => self.walk(child),
                usvg::Node::Path(path) => self.path(path),
                usvg::Node::Text(text) => self.walk(text.flattened()),
                usvg::Node::Image(_) => {
                    let rect = node.abs_bounding_box();
                    let corners = vec![
                        DiagramPoint::new(rect.left(), rect.top()),
                        DiagramPoint::new(rect.right(), rect.top()),
                        DiagramPoint::new(rect.right(), rect.bottom()),
                        DiagramPoint::new(rect.left(), rect.bottom()),
                    ];
                    if let Some(outline) = Outline::from_polygons(vec![corners], FillRule::NonZero)
                    {
                        self.layers.push(Layer::Occluder(outline));
                    }
                }
            }
        }
    }

    fn path(&mut self, path: &usvg::Path) {
        let rule = match path.fill().map(usvg::Fill::rule) {
            Some(usvg::FillRule::EvenOdd) => FillRule::EvenOdd,
            _ => FillRule::NonZero,
        };
        let region_id = if self.ids.contains(path.id()) {
            ZoneId::new(path.id())
        } else {
            None
        };

        let Some(id) = region_id else {
            // Unfilled strokes are transparent to clicks inside them.
            if path.is_visible() && path.fill().is_some() {
                if let Some(outline) =
                    Outline::from_path(path.data(), path.abs_transform(), rule)
                {
                    self.layers.push(Layer::Occluder(outline));
                }
            }
            return;
        };

        let Some(outline) = Outline::from_path(path.data(), path.abs_transform(), rule) else {
            log::debug!("region '{}' encloses no area, skipped", id);
            return;
        };
        let label = self.catalog.resolve(&id);
        self.layers.push(Layer::Region(self.regions.len()));
        self.regions.push(Region { id, label, outline });
    }
}
