//! LVGL symbol tags for icons.
//!
//! Icons are drawn with primitives in the preview; on the target they map to
//! LVGL's built-in symbol font. The inspector reports the macro name so it
//! can be pasted straight into `lv_label_set_text()`.

/// Built-in LVGL symbols used by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LvSymbol {
    Settings,
    Audio,
    Plus,
    Home,
    SdCard,
    Wifi,
    Usb,
    Power,
    Left,
}

impl LvSymbol {
    /// The C macro naming this symbol.
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Settings => "LV_SYMBOL_SETTINGS",
            Self::Audio => "LV_SYMBOL_AUDIO",
            Self::Plus => "LV_SYMBOL_PLUS",
            Self::Home => "LV_SYMBOL_HOME",
            Self::SdCard => "LV_SYMBOL_SD_CARD",
            Self::Wifi => "LV_SYMBOL_WIFI",
            Self::Usb => "LV_SYMBOL_USB",
            Self::Power => "LV_SYMBOL_POWER",
            Self::Left => "LV_SYMBOL_LEFT",
        }
    }
}
