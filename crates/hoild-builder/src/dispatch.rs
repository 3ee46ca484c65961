//! Layout-tag dispatch.

use std::num::NonZeroUsize;

use serde::Serialize;

use hoild_content::ContentBlock;

use crate::sequence::SectionInstruction;

/// The one tag whose consecutive runs are numbered.
pub const GROUPING_TAG: &str = "image_content_section";

/// Closed set of section renderers.
///
/// Identifiers, not markup: the render layer maps each variant to its actual
/// visual component. Adding a CMS layout tag without wiring a variant here
/// is a visible change to the dispatch tables below, not a silent drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRenderer {
    // Landing-page family
    HomeHero,
    InnerPageBanner,
    ImageContent,
    HomeUsp,
    SpecialHeading,
    ServicesSlider,
    InsightsSlider,
    RevenueCalculator,
    TestimonialSlider,
    Contact,
    // Inner-page family
    InnerHero,
    ContentBlock,
    TwoColumnContent,
    SpecialHeadingWithCta,
    ThreeColStructure,
    TwoColStructure,
    InnerUsp,
    Accordion,
    Tabs,
}

/// A tag→renderer mapping for one page family.
///
/// The table is closed: a tag is either mapped, explicitly ignored (layouts
/// authored in the CMS but deliberately unrendered), or unknown. Unknown
/// tags are dropped from the output and logged, so a typo'd tag shows up in
/// diagnostics instead of silently vanishing from the live page.
pub struct DispatchTable {
    name: &'static str,
    entries: &'static [(&'static str, SectionRenderer)],
    ignored: &'static [&'static str],
}

/// Landing-page family table.
static TOP_LEVEL: DispatchTable = DispatchTable {
    name: "top_level",
    entries: &[
        ("banner", SectionRenderer::HomeHero),
        ("inner_page_banner", SectionRenderer::InnerPageBanner),
        ("image_content_section", SectionRenderer::ImageContent),
        ("usp_section", SectionRenderer::HomeUsp),
        ("speacial_heading", SectionRenderer::SpecialHeading),
        ("services_section", SectionRenderer::ServicesSlider),
        ("insights_section", SectionRenderer::InsightsSlider),
        ("calculator_section", SectionRenderer::RevenueCalculator),
        ("testimonial_section", SectionRenderer::TestimonialSlider),
        ("contact_section", SectionRenderer::Contact),
    ],
    ignored: &[],
};

/// Inner-page family table.
///
/// The ignored tags exist in the CMS field group but have no renderer yet.
static INNER: DispatchTable = DispatchTable {
    name: "inner",
    entries: &[
        ("inner_hero_section", SectionRenderer::InnerHero),
        ("content_block", SectionRenderer::ContentBlock),
        ("two_column_content_section", SectionRenderer::TwoColumnContent),
        ("contact_section", SectionRenderer::Contact),
        ("special_heading_with_cta", SectionRenderer::SpecialHeadingWithCta),
        ("three_col_structure", SectionRenderer::ThreeColStructure),
        ("two_col_structure", SectionRenderer::TwoColStructure),
        ("usp_section", SectionRenderer::InnerUsp),
        ("accordian", SectionRenderer::Accordion),
        ("tabs", SectionRenderer::Tabs),
    ],
    ignored: &[
        "cta_section",
        "faq_section",
        "feature_grid_section",
        "process_section",
        "stats_section",
    ],
};

impl DispatchTable {
    /// The landing-page family table.
    #[must_use]
    pub fn top_level() -> &'static Self {
        &TOP_LEVEL
    }

    /// The inner-page family table.
    #[must_use]
    pub fn inner() -> &'static Self {
        &INNER
    }

    /// Look up the renderer for a layout tag.
    #[must_use]
    pub fn renderer_for(&self, tag: &str) -> Option<SectionRenderer> {
        self.entries
            .iter()
            .find(|(entry_tag, _)| *entry_tag == tag)
            .map(|&(_, renderer)| renderer)
    }

    /// Whether a tag is a known-but-unrendered layout.
    #[must_use]
    pub fn is_ignored(&self, tag: &str) -> bool {
        self.ignored.contains(&tag)
    }
}

/// Map an ordered block list to its render sequence.
///
/// Pure and total: never fails, degrades by omission. Unknown tags produce
/// no entry (no gap marker, document order is the only slot semantics) and
/// are logged unless explicitly ignored by the table. Consecutive runs of
/// [`GROUPING_TAG`] blocks of length two or more get 1-based ordinals.
#[must_use]
pub fn dispatch(table: &DispatchTable, blocks: &[ContentBlock]) -> Vec<SectionInstruction> {
    let ordinals = group_ordinals(blocks);

    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let Some(renderer) = table.renderer_for(&block.layout) else {
                if !table.is_ignored(&block.layout) {
                    tracing::warn!(
                        table = table.name,
                        tag = %block.layout,
                        index,
                        "unknown layout tag dropped"
                    );
                }
                return None;
            };
            Some(SectionInstruction {
                key: index,
                renderer,
                props: block.fields.clone(),
                ordinal: ordinals[index],
            })
        })
        .collect()
}

/// Compute run ordinals for the grouping tag.
///
/// One left-to-right scan: each maximal run of consecutive grouping blocks
/// of length >= 2 numbers its members 1-based; singleton runs and all other
/// blocks get `None`.
fn group_ordinals(blocks: &[ContentBlock]) -> Vec<Option<NonZeroUsize>> {
    let mut ordinals = vec![None; blocks.len()];
    let mut run_start = None;

    for index in 0..=blocks.len() {
        let in_group = blocks
            .get(index)
            .is_some_and(|block| block.layout == GROUPING_TAG);

        if in_group {
            run_start.get_or_insert(index);
        } else if let Some(start) = run_start.take()
            && index - start >= 2
        {
            for (position, ordinal) in ordinals[start..index].iter_mut().enumerate() {
                *ordinal = NonZeroUsize::new(position + 1);
            }
        }
    }

    ordinals
}
