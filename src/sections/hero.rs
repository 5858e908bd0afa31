//! Hero section - identity banner plus the anchor navigation bar.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::Person;
use crate::render::{Node, NodeKind};
use crate::sections::{container_pose, nested_pose, staggered};
use crate::types::SectionId;

use super::profile_for;

/// Render the hero. The navigation child lists every anchored section as
/// a scroll affordance; its buttons stagger on the nested clock.
pub fn render(data: Option<&Person>, entered: bool) -> Option<Node> {
    let person = data?;
    let profile = profile_for(SectionId::Hero);

    let mut identity = Node::badge(person.initials(), &person.name);
    identity.style.emphasis = true;

    let nav_buttons = SectionId::all()
        .iter()
        .filter_map(|section| section.anchor())
        .enumerate()
        .map(|(index, anchor)| {
            Node::new(NodeKind::Button {
                label: anchor.to_string(),
                enabled: true,
            })
            .with_hover(HoverKind::Chip)
            .with_pose(nested_pose(&profile, index, entered))
        });
    let nav = Node::block().with_children(nav_buttons);

    let children = staggered(
        &profile,
        entered,
        vec![
            identity,
            Node::text(&person.title),
            Node::text(&person.bio),
            nav,
        ],
    );

    Some(
        Node::new(NodeKind::Section(SectionId::Hero))
            .with_pose(container_pose(&profile, entered))
            .with_children(children),
    )
}

/// Scheduler shape: four direct children, the nav's buttons nested.
pub fn child_specs(_data: &Person) -> Vec<ChildSpec> {
    let anchors = SectionId::all()
        .iter()
        .filter(|s| s.anchor().is_some())
        .count();
    vec![
        ChildSpec::default(),
        ChildSpec::default(),
        ChildSpec::default(),
        ChildSpec {
            nested: anchors,
            fine: 0,
        },
    ]
}
