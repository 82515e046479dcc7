use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Kinds of items a launcher places on its grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// An application launcher icon.
    Application,
    /// A pinned shortcut.
    Shortcut,
    /// A folder of icons.
    Folder,
    /// A hosted app widget.
    AppWidget,
    /// A widget provided by the launcher itself.
    CustomAppWidget,
    /// A deep shortcut published by an application.
    DeepShortcut,
}

impl ItemType {
    /// Row-eligibility category for this item type.
    #[must_use]
    pub const fn category(self) -> ItemCategory {
        match self {
            Self::AppWidget | Self::CustomAppWidget | Self::Shortcut => ItemCategory::WidgetLike,
            Self::Application | Self::Folder | Self::DeepShortcut => ItemCategory::Other,
        }
    }
}

/// Two-way split of item types that decides which rows they may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Widgets and shortcuts: placed above the reserved bottom band.
    WidgetLike,
    /// Everything else: placed inside the reserved bottom band.
    Other,
}

impl From<ItemType> for ItemCategory {
    fn from(t: ItemType) -> Self {
        t.category()
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::WidgetLike => write!(f, "widget"),
            Self::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_like_types() {
        assert_eq!(ItemType::AppWidget.category(), ItemCategory::WidgetLike);
        assert_eq!(
            ItemType::CustomAppWidget.category(),
            ItemCategory::WidgetLike
        );
        assert_eq!(ItemType::Shortcut.category(), ItemCategory::WidgetLike);
    }

    #[test]
    fn other_types() {
        for t in [
            ItemType::Application,
            ItemType::Folder,
            ItemType::DeepShortcut,
        ] {
            assert_eq!(ItemCategory::from(t), ItemCategory::Other);
        }
    }

    #[test]
    fn item_type_parses_from_ron() {
        let t: ItemType = ron::from_str("CustomAppWidget").unwrap();
        assert_eq!(t, ItemType::CustomAppWidget);
    }
}
