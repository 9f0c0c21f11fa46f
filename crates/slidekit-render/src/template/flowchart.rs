//! Flow chart template.
//!
//! Nodes carry their own canvas positions; arrows connect node centers
//! by id. An arrow whose endpoint id no longer resolves is skipped
//! silently - the editor cascade normally prevents that state, but a
//! renderer never crashes on content.

use std::collections::HashMap;

use slidekit_model::subdoc::{self, ArrowStyle, FlowArrow, FlowNode, LegendItem, NodeShape};
use slidekit_model::{Language, Page};

use crate::constants::{CAPTION_FONT, CONTENT_X};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const LEGEND_Y: f32 = 496.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_STEP: f32 = 140.0;

fn node_center(node: &FlowNode) -> (f32, f32) {
    (node.x + node.width / 2.0, node.y + node.height / 2.0)
}

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);

    let nodes: Vec<FlowNode> = subdoc::decode_or_default(page.raw("nodes").unwrap_or_default());
    let arrows: Vec<FlowArrow> =
        subdoc::decode_or_default(page.raw("arrows").unwrap_or_default());
    let legend: Vec<LegendItem> =
        subdoc::decode_or_default(page.raw("legend").unwrap_or_default());

    let centers: HashMap<&str, (f32, f32)> = nodes
        .iter()
        .map(|n| (n.id.as_str(), node_center(n)))
        .collect();

    // Arrows under nodes so boxes overdraw the line ends
    for arrow in &arrows {
        let (Some(&from), Some(&to)) = (
            centers.get(arrow.source_id.as_str()),
            centers.get(arrow.target_id.as_str()),
        ) else {
            continue;
        };
        tree.push(VisualNode::Line {
            from,
            to,
            color: theme.muted.clone(),
            dashed: arrow.style == ArrowStyle::Dashed,
        });
        if let Some(label) = &arrow.label {
            tree.push(
                VisualNode::text(
                    Rect::new(
                        (from.0 + to.0) / 2.0 - 60.0,
                        (from.1 + to.1) / 2.0 - 20.0,
                        120.0,
                        18.0,
                    ),
                    resolve::local_text(label, lang),
                    CAPTION_FONT,
                    theme.muted.clone(),
                )
                .centered(),
            );
        }
    }

    for node in &nodes {
        let rect = Rect::new(node.x, node.y, node.width, node.height);
        let fill = if node.color.is_empty() {
            theme.surface.clone()
        } else {
            node.color.clone()
        };
        let stroke = match node.shape {
            NodeShape::Diamond => theme.accent.clone(),
            _ => theme.muted.clone(),
        };
        tree.push(VisualNode::Frame {
            rect,
            fill: Some(fill),
            stroke: Some(stroke),
            children: vec![
                VisualNode::text(
                    rect.inset(6.0),
                    resolve::local_text(&node.label, lang),
                    14,
                    theme.text.clone(),
                )
                .centered(),
            ],
        });
    }

    for (i, item) in legend.iter().enumerate() {
        let x = CONTENT_X + i as f32 * LEGEND_STEP;
        tree.push(VisualNode::box_fill(
            Rect::new(x, LEGEND_Y, LEGEND_SWATCH, LEGEND_SWATCH),
            if item.color.is_empty() {
                theme.accent.clone()
            } else {
                item.color.clone()
            },
        ));
        tree.push(VisualNode::text(
            Rect::new(x + LEGEND_SWATCH + 6.0, LEGEND_Y - 2.0, LEGEND_STEP - 24.0, 16.0),
            resolve::local_text(&item.label, lang),
            CAPTION_FONT,
            theme.muted.clone(),
        ));
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{ContentValue, PageType};

    #[test]
    fn test_arrows_connect_node_centers() {
        let theme = RenderTheme::default();
        let page = Page::new(PageType::FlowChart, 0);
        let tree = render(&page, Language::En, &theme);

        let nodes: Vec<FlowNode> =
            subdoc::decode_or_default(page.raw("nodes").unwrap());
        let lines: Vec<_> = tree
            .nodes
            .iter()
            .filter(|n| matches!(n, VisualNode::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 1);
        if let VisualNode::Line { from, to, .. } = lines[0] {
            assert_eq!(*from, node_center(&nodes[0]));
            assert_eq!(*to, node_center(&nodes[1]));
        }
    }

    #[test]
    fn test_dangling_arrow_is_skipped() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::FlowChart, 0);
        let nodes = vec![FlowNode::at(100.0, 100.0)];
        let arrows = vec![FlowArrow::between(nodes[0].id.clone(), "gone")];
        page.content
            .insert("nodes".into(), ContentValue::Raw(subdoc::encode(&nodes)));
        page.content
            .insert("arrows".into(), ContentValue::Raw(subdoc::encode(&arrows)));

        let tree = render(&page, Language::En, &theme);
        assert!(!tree.nodes.iter().any(|n| matches!(n, VisualNode::Line { .. })));
    }
}
