//! Theme management
//!
//! A [`Theme`] bundles every style the widgets read: the base rect style,
//! label style, the three button states, the font, and an optional panel kit.
//! Themes are replaced wholesale; there is no inheritance or partial merge.

use core::fmt;

use embedded_graphics::mono_font::{MonoFont, ascii::FONT_5X8};

use super::colors::{BLACK, DARK_GRAY, DARK_GREEN, GRAY, GREEN, LIGHT_GRAY, WHITE};
use super::panel_kit::PanelKit;
use super::style::{ButtonStyle, RectStyle};
use crate::ui::core::InteractionState;

// ============================================================================
// Font reference
// ============================================================================

/// Handle to a static mono font.
///
/// Two handles compare equal when their fonts share glyph metrics and glyph
/// image data. Font constants have no stable address to compare, and the
/// character-to-glyph mapping is not compared.
#[derive(Clone, Copy)]
pub struct FontRef(pub &'static MonoFont<'static>);

impl FontRef {
    pub fn font(&self) -> &'static MonoFont<'static> {
        self.0
    }
}

impl Default for FontRef {
    fn default() -> Self {
        Self(&FONT_5X8)
    }
}

impl PartialEq for FontRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.image == other.0.image
            && self.0.character_size == other.0.character_size
            && self.0.character_spacing == other.0.character_spacing
            && self.0.baseline == other.0.baseline
    }
}

impl Eq for FontRef {}

impl fmt::Debug for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.0.character_size;
        write!(f, "FontRef({}x{})", size.width, size.height)
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Kinds of element a theme styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Rect,
    Label,
    Button,
}

/// Complete visual configuration for one frame's widgets
///
/// # Examples
///
/// ```ignore
/// // Library default: green on black
/// let theme = Theme::default();
///
/// // Gray theme with a panel kit at atlas block (0, 0)
/// let theme = Theme::basic().with_panel_kit(PanelKit::block(AtlasPos::new(0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Plain rects and panels
    pub base: RectStyle,

    /// Labels
    pub label: RectStyle,

    /// Buttons, per interaction state
    pub button: ButtonStyle,

    /// Font for labels, buttons and text
    pub font: FontRef,

    /// Tiles for [`panel`](crate::ui::Frame::panel); panels draw nothing without one
    pub panel_kit: Option<PanelKit>,
}

impl Default for Theme {
    /// Returns the terminal theme
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Green phosphor on black
    pub fn terminal() -> Self {
        Self {
            base: RectStyle::new(Some(GREEN), BLACK),
            label: RectStyle::new(None, GREEN),
            button: ButtonStyle {
                normal: RectStyle::new(Some(BLACK), GREEN).with_border(DARK_GREEN, 0),
                hover: RectStyle::new(Some(BLACK), GREEN).with_border(GREEN, 1),
                active: RectStyle::new(Some(GREEN), BLACK).with_border(BLACK, 1),
            },
            font: FontRef::default(),
            panel_kit: None,
        }
    }

    /// Light text on dark gray
    pub fn basic() -> Self {
        Self {
            base: RectStyle::new(Some(DARK_GRAY), LIGHT_GRAY).with_border(GRAY, 1),
            label: RectStyle::new(None, LIGHT_GRAY),
            button: ButtonStyle {
                normal: RectStyle::new(Some(GRAY), WHITE).with_border(LIGHT_GRAY, 1),
                hover: RectStyle::new(Some(LIGHT_GRAY), WHITE).with_border(WHITE, 2),
                active: RectStyle::new(Some(DARK_GRAY), WHITE).with_border(BLACK, 1),
            },
            font: FontRef::default(),
            panel_kit: None,
        }
    }

    /// Black and white
    pub fn mono() -> Self {
        let base = RectStyle::new(Some(BLACK), WHITE).with_border(WHITE, 1);
        let inverted = RectStyle::new(Some(WHITE), BLACK).with_border(WHITE, 1);
        Self {
            base,
            label: RectStyle::new(None, WHITE),
            button: ButtonStyle {
                normal: base,
                hover: base.with_border(WHITE, 2),
                active: inverted,
            },
            font: FontRef::default(),
            panel_kit: None,
        }
    }

    /// Black text on a green console
    pub fn console() -> Self {
        let base = RectStyle::new(Some(GREEN), BLACK).with_border(BLACK, 1);
        Self {
            base,
            label: RectStyle::new(None, BLACK),
            button: ButtonStyle {
                normal: base,
                hover: base.with_border(BLACK, 2),
                active: RectStyle::new(Some(BLACK), GREEN).with_border(GREEN, 1),
            },
            font: FontRef::default(),
            panel_kit: None,
        }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = FontRef(font);
        self
    }

    pub fn with_panel_kit(mut self, kit: PanelKit) -> Self {
        self.panel_kit = Some(kit);
        self
    }

    /// Style for a widget kind in a given interaction state.
    ///
    /// Only buttons distinguish states; every other kind has one style.
    pub fn style_for(&self, kind: WidgetKind, state: InteractionState) -> RectStyle {
        match kind {
            WidgetKind::Rect => self.base,
            WidgetKind::Label => self.label,
            WidgetKind::Button => match state {
                InteractionState::Normal => self.button.normal,
                InteractionState::Hover => self.button.hover,
                InteractionState::Active => self.button.active,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn test_style_for_button_states() {
        let theme = Theme::terminal();
        assert_eq!(
            theme.style_for(WidgetKind::Button, InteractionState::Normal),
            theme.button.normal
        );
        assert_eq!(
            theme.style_for(WidgetKind::Button, InteractionState::Hover),
            theme.button.hover
        );
        assert_eq!(
            theme.style_for(WidgetKind::Button, InteractionState::Active),
            theme.button.active
        );
    }

    #[test]
    fn test_style_for_ignores_state_on_static_kinds() {
        let theme = Theme::basic();
        assert_eq!(
            theme.style_for(WidgetKind::Rect, InteractionState::Active),
            theme.base
        );
        assert_eq!(
            theme.style_for(WidgetKind::Label, InteractionState::Hover),
            theme.label
        );
    }

    #[test]
    fn test_font_ref_equality() {
        assert_eq!(FontRef::default(), FontRef(&FONT_5X8));
        assert_ne!(FontRef::default(), FontRef(&FONT_6X10));
        // same cell size, different glyph sets
        assert_ne!(
            FontRef(&FONT_5X8),
            FontRef(&embedded_graphics::mono_font::iso_8859_1::FONT_5X8)
        );
        assert_eq!(Theme::mono().with_font(&FONT_6X10).font, FontRef(&FONT_6X10));
    }
}
