//! Five-field style selection used for both the draft and committed state.

use crate::options::{
    BackgroundColor, ContentWidth, FieldValue, FontColor, FontFamily, FontSize, StyleField,
    StyleOption,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete set of style choices. Every field is always populated.
///
/// `Default` is the well-known reset target:
/// `open-sans / 18 / black / white / 800`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StyleSelection {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

impl StyleSelection {
    /// Field/option pairs in panel order.
    pub fn fields(&self) -> [(StyleField, &'static StyleOption); 5] {
        [
            (StyleField::FontFamily, self.font_family.option()),
            (StyleField::FontSize, self.font_size.option()),
            (StyleField::FontColor, self.font_color.option()),
            (StyleField::BackgroundColor, self.background_color.option()),
            (StyleField::ContentWidth, self.content_width.option()),
        ]
    }

    /// Fields whose value differs from `other`, in panel order.
    pub fn changed_fields(&self, other: &StyleSelection) -> Vec<StyleField> {
        self.fields()
            .iter()
            .zip(other.fields().iter())
            .filter(|((_, ours), (_, theirs))| ours != theirs)
            .map(|((field, _), _)| *field)
            .collect()
    }
}

impl fmt::Display for StyleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (field, option)) in self.fields().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", field.key(), option.value)?;
        }
        Ok(())
    }
}
