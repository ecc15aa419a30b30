//! Free layout: children stay where the caller put them.

use tessera_render::{Rect, Size};
use tessera_style::Theme;

use super::{Arrangement, Layout};

/// Leaves child positions untouched and grows the container to cover every
/// child, measured from the container's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeLayout;

impl Layout for FreeLayout {
    fn arrange(&self, children: &[Option<Rect>], _theme: &Theme) -> Arrangement {
        let size = children.iter().flatten().fold(Size::ZERO, |acc, child| {
            Size::new(
                acc.width.max(child.right()),
                acc.height.max(child.bottom()),
            )
        });
        Arrangement {
            positions: children
                .iter()
                .map(|slot| slot.map(|child| child.origin))
                .collect(),
            size,
        }
    }
}
