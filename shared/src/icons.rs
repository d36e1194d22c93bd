// Toolbar icon assets.
// Icons are fixed per action and looked up from static tables; hosts cannot
// swap them, only leave them out through a custom composition.

use crate::actions::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Prettify,
    Merge,
    Copy,
    CodeSnippet,
}

/// Stroke-drawn SVG data for one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAsset {
    pub view_box: &'static str,
    pub stroke_width: &'static str,
    pub paths: &'static [&'static str],
}

const PRETTIFY: IconAsset = IconAsset {
    view_box: "0 0 24 24",
    stroke_width: "1.5",
    paths: &[
        "M3.75 6.75h16.5M3.75 12h10.5m-10.5 5.25h16.5",
        "M18 9.75l1.5 1.5L18 12.75",
    ],
};

const MERGE: IconAsset = IconAsset {
    view_box: "0 0 24 24",
    stroke_width: "1.5",
    paths: &[
        "M6 3.75v4.5a3.75 3.75 0 0 0 3.75 3.75h4.5A3.75 3.75 0 0 1 18 15.75v4.5",
        "M18 3.75v4.5a3.75 3.75 0 0 1-3.75 3.75",
        "M15.75 18 18 20.25 20.25 18",
    ],
};

const COPY: IconAsset = IconAsset {
    view_box: "0 0 24 24",
    stroke_width: "1.5",
    paths: &[
        "M8.25 7.5V5.25A1.5 1.5 0 0 1 9.75 3.75h9a1.5 1.5 0 0 1 1.5 1.5v9a1.5 1.5 0 0 1-1.5 1.5H16.5",
        "M5.25 8.25h9a1.5 1.5 0 0 1 1.5 1.5v9a1.5 1.5 0 0 1-1.5 1.5h-9a1.5 1.5 0 0 1-1.5-1.5v-9a1.5 1.5 0 0 1 1.5-1.5Z",
    ],
};

const CODE_SNIPPET: IconAsset = IconAsset {
    view_box: "0 0 24 24",
    stroke_width: "1.5",
    paths: &["M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5"],
};

/// Indexed by `ActionId as usize`, in `ActionId::ALL` order.
const ACTION_ICONS: [Option<IconId>; 6] = [
    Some(IconId::Prettify),
    Some(IconId::Merge),
    Some(IconId::Copy),
    None,
    None,
    None,
];

impl IconId {
    pub fn asset(self) -> &'static IconAsset {
        match self {
            IconId::Prettify => &PRETTIFY,
            IconId::Merge => &MERGE,
            IconId::Copy => &COPY,
            IconId::CodeSnippet => &CODE_SNIPPET,
        }
    }

    pub fn for_action(action: ActionId) -> Option<IconId> {
        ACTION_ICONS[action as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_action_order() {
        for (index, action) in ActionId::ALL.iter().enumerate() {
            assert_eq!(*action as usize, index);
        }
    }

    #[test]
    fn test_primary_actions_are_iconified() {
        assert_eq!(IconId::for_action(ActionId::Prettify), Some(IconId::Prettify));
        assert_eq!(IconId::for_action(ActionId::Merge), Some(IconId::Merge));
        assert_eq!(IconId::for_action(ActionId::Copy), Some(IconId::Copy));
        assert_eq!(IconId::for_action(ActionId::CopyCurl), None);
        assert_eq!(IconId::for_action(ActionId::CopyPython), None);
        assert_eq!(IconId::for_action(ActionId::CopyNodejs), None);
    }

    #[test]
    fn test_every_asset_has_paths() {
        for icon in [IconId::Prettify, IconId::Merge, IconId::Copy, IconId::CodeSnippet] {
            let asset = icon.asset();
            assert!(!asset.paths.is_empty(), "{:?} has no path data", icon);
            assert_eq!(asset.view_box, "0 0 24 24");
        }
    }
}
