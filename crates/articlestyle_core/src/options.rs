//! Option catalogs and typed field values for the style panel.
//!
//! Each style field gets a newtype over a `&'static StyleOption` taken from
//! that field's catalog, so a value outside the catalog cannot be built.

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label/value pair shown by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// The five independently selectable style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl StyleField {
    /// All fields in panel order.
    pub const ALL: [StyleField; 5] = [
        StyleField::FontFamily,
        StyleField::FontSize,
        StyleField::FontColor,
        StyleField::BackgroundColor,
        StyleField::ContentWidth,
    ];

    /// Stable snake_case key used in JSON and log output.
    pub fn key(self) -> &'static str {
        match self {
            StyleField::FontFamily => "font_family",
            StyleField::FontSize => "font_size",
            StyleField::FontColor => "font_color",
            StyleField::BackgroundColor => "background_color",
            StyleField::ContentWidth => "content_width",
        }
    }

    /// Picker title shown above the control.
    pub fn title(self) -> &'static str {
        match self {
            StyleField::FontFamily => "Font",
            StyleField::FontSize => "Font size",
            StyleField::FontColor => "Font color",
            StyleField::BackgroundColor => "Background color",
            StyleField::ContentWidth => "Content width",
        }
    }

    /// Catalog of valid options for this field.
    pub fn options(self) -> &'static [StyleOption] {
        match self {
            StyleField::FontFamily => FONT_FAMILY_OPTIONS,
            StyleField::FontSize => FONT_SIZE_OPTIONS,
            StyleField::FontColor => COLOR_OPTIONS,
            StyleField::BackgroundColor => COLOR_OPTIONS,
            StyleField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }
}

/// Font families offered by the panel.
pub const FONT_FAMILY_OPTIONS: &[StyleOption] = &[
    StyleOption {
        label: "Open Sans",
        value: "open-sans",
    },
    StyleOption {
        label: "Ubuntu",
        value: "ubuntu",
    },
    StyleOption {
        label: "Cormorant Garamond",
        value: "cormorant-garamond",
    },
    StyleOption {
        label: "Days One",
        value: "days-one",
    },
    StyleOption {
        label: "Merriweather",
        value: "merriweather",
    },
    StyleOption {
        label: "PT Mono",
        value: "PT-mono",
    },
];

/// Font sizes offered by the radio group. Values are pixel counts.
pub const FONT_SIZE_OPTIONS: &[StyleOption] = &[
    StyleOption {
        label: "18px",
        value: "18",
    },
    StyleOption {
        label: "25px",
        value: "25",
    },
    StyleOption {
        label: "38px",
        value: "38",
    },
];

/// Color swatches shared by the font and background pickers.
pub const COLOR_OPTIONS: &[StyleOption] = &[
    StyleOption {
        label: "Black",
        value: "black",
    },
    StyleOption {
        label: "White",
        value: "white",
    },
    StyleOption {
        label: "Gray",
        value: "gray",
    },
    StyleOption {
        label: "Pink",
        value: "pink",
    },
    StyleOption {
        label: "Bright pink",
        value: "bright-pink",
    },
    StyleOption {
        label: "Yellow",
        value: "yellow",
    },
    StyleOption {
        label: "Green",
        value: "green",
    },
    StyleOption {
        label: "Blue",
        value: "blue",
    },
    StyleOption {
        label: "Purple",
        value: "purple",
    },
];

/// Content widths. Values are pixel counts.
pub const CONTENT_WIDTH_OPTIONS: &[StyleOption] = &[
    StyleOption {
        label: "Narrow",
        value: "600",
    },
    StyleOption {
        label: "Medium",
        value: "800",
    },
    StyleOption {
        label: "Wide",
        value: "1394",
    },
];

const COLOR_SWATCHES: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("gray", [0xC4, 0xC4, 0xC4]),
    ("pink", [0xFE, 0xAF, 0xE8]),
    ("bright-pink", [0xFD, 0x24, 0xAF]),
    ("yellow", [0xFF, 0xC8, 0x02]),
    ("green", [0x80, 0xD9, 0x94]),
    ("blue", [0x6F, 0xC1, 0xFD]),
    ("purple", [0x5F, 0x00, 0xA1]),
];

fn swatch_rgb(value: &str) -> [u8; 3] {
    COLOR_SWATCHES
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, rgb)| *rgb)
        .unwrap_or([0x00, 0x00, 0x00])
}

fn pixel_value(value: &str) -> f32 {
    value.parse::<f32>().unwrap_or(0.0)
}

/// Shared behavior of the typed field values.
pub trait FieldValue: Copy + Eq + Default + fmt::Debug + 'static {
    /// Field this value belongs to.
    const FIELD: StyleField;

    /// Every valid value, in catalog order.
    fn all() -> Vec<Self>;

    /// Look up a value by its catalog `value` string.
    fn from_value(value: &str) -> Option<Self>;

    /// The catalog entry backing this value.
    fn option(self) -> &'static StyleOption;

    /// Parse a catalog value, reporting which field rejected it.
    ///
    /// # Errors
    /// Returns [`AppError::UnknownOption`] when `value` (after trimming) is not
    /// in this field's catalog.
    fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_value(value.trim()).ok_or_else(|| AppError::UnknownOption {
            field: Self::FIELD.key(),
            value: value.to_string(),
        })
    }

    fn label(self) -> &'static str {
        self.option().label
    }

    fn value(self) -> &'static str {
        self.option().value
    }
}

macro_rules! field_value {
    ($(#[$meta:meta])* $name:ident, $field:expr, $catalog:ident, $default:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(&'static StyleOption);

        impl FieldValue for $name {
            const FIELD: StyleField = $field;

            fn all() -> Vec<Self> {
                $catalog.iter().map($name).collect()
            }

            fn from_value(value: &str) -> Option<Self> {
                $catalog
                    .iter()
                    .find(|option| option.value == value)
                    .map($name)
            }

            fn option(self) -> &'static StyleOption {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_value($default).unwrap_or(Self(&$catalog[0]))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0.label)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.0.value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                <Self as FieldValue>::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

field_value!(
    /// Selected font family.
    FontFamily,
    StyleField::FontFamily,
    FONT_FAMILY_OPTIONS,
    "open-sans"
);
field_value!(
    /// Selected font size.
    FontSize,
    StyleField::FontSize,
    FONT_SIZE_OPTIONS,
    "18"
);
field_value!(
    /// Selected text color.
    FontColor,
    StyleField::FontColor,
    COLOR_OPTIONS,
    "black"
);
field_value!(
    /// Selected page background color.
    BackgroundColor,
    StyleField::BackgroundColor,
    COLOR_OPTIONS,
    "white"
);
field_value!(
    /// Selected maximum content width.
    ContentWidth,
    StyleField::ContentWidth,
    CONTENT_WIDTH_OPTIONS,
    "800"
);

impl FontFamily {
    /// Whether the family should render with a fixed-width font stack.
    pub fn is_monospace(self) -> bool {
        self.value().ends_with("-mono")
    }
}

impl FontSize {
    pub fn px(self) -> f32 {
        pixel_value(self.value())
    }
}

impl ContentWidth {
    pub fn px(self) -> f32 {
        pixel_value(self.value())
    }
}

impl FontColor {
    pub fn rgb(self) -> [u8; 3] {
        swatch_rgb(self.value())
    }
}

impl BackgroundColor {
    pub fn rgb(self) -> [u8; 3] {
        swatch_rgb(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_catalog_default<T: FieldValue>(expected: &str) {
        let default = T::default();
        assert_eq!(default.value(), expected);
        assert!(
            T::FIELD.options().iter().any(|option| option.value == expected),
            "{} default missing from catalog",
            T::FIELD.key()
        );
    }

    #[test]
    fn defaults_come_from_their_catalogs() {
        assert_catalog_default::<FontFamily>("open-sans");
        assert_catalog_default::<FontSize>("18");
        assert_catalog_default::<FontColor>("black");
        assert_catalog_default::<BackgroundColor>("white");
        assert_catalog_default::<ContentWidth>("800");
    }

    #[test]
    fn catalog_values_are_unique_per_field() {
        for field in StyleField::ALL {
            let options = field.options();
            for (idx, option) in options.iter().enumerate() {
                assert!(
                    options[idx + 1..].iter().all(|other| other.value != option.value),
                    "duplicate {} value {}",
                    field.key(),
                    option.value
                );
            }
        }
    }

    #[test]
    fn parse_trims_and_rejects_unknown_values() {
        assert_eq!(
            FontFamily::parse("  PT-mono ").expect("known family").label(),
            "PT Mono"
        );
        match ContentWidth::parse("1024") {
            Err(AppError::UnknownOption { field, value }) => {
                assert_eq!(field, "content_width");
                assert_eq!(value, "1024");
            }
            other => panic!("expected unknown option error, got {:?}", other),
        }
    }

    #[test]
    fn every_color_option_has_a_swatch() {
        for color in FontColor::all() {
            let known = COLOR_SWATCHES.iter().any(|(name, _)| *name == color.value());
            assert!(known, "no swatch for {}", color.value());
        }
        assert_eq!(BackgroundColor::default().rgb(), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn pixel_fields_parse_their_values() {
        assert_eq!(FontSize::default().px(), 18.0);
        assert_eq!(ContentWidth::default().px(), 800.0);
        let wide = ContentWidth::from_value("1394").expect("wide width");
        assert_eq!(wide.px(), 1394.0);
    }

    #[test]
    fn only_mono_family_is_monospace() {
        let mono: Vec<_> = FontFamily::all()
            .into_iter()
            .filter(|family| family.is_monospace())
            .map(|family| family.value())
            .collect();
        assert_eq!(mono, vec!["PT-mono"]);
    }
}
