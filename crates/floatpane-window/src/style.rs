#![forbid(unsafe_code)]

//! Emitted style state.
//!
//! The host renders a window from this struct alone: CSS-ready pixel strings
//! plus the stacking value. Positions are relative to the offset origin, not
//! to the document, so the host can assign them directly to an absolutely
//! positioned element.

use floatpane_core::Rect;

use crate::config::WindowOptions;
use crate::host::OffsetOrigin;

/// Style values for one window, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStyle {
    /// Width style string.
    pub width: String,
    /// Height style string.
    pub height: String,
    /// Left position style string, relative to the offset origin.
    pub left: String,
    /// Top position style string, relative to the offset origin.
    pub top: String,
    /// Stacking value.
    pub z_index: i32,
}

impl WindowStyle {
    /// Pre-mount style: the raw option strings, verbatim.
    pub(crate) fn from_options(options: &WindowOptions) -> Self {
        Self {
            width: options.init_width.clone(),
            height: options.init_height.clone(),
            left: options.init_left.clone(),
            top: options.init_top.clone(),
            z_index: 1,
        }
    }

    /// Update position strings from an absolute rect and the offset origin.
    pub(crate) fn set_position(&mut self, rect: &Rect, origin: OffsetOrigin) {
        let (offset_x, offset_y) = match origin {
            OffsetOrigin::Document => (0.0, 0.0),
            OffsetOrigin::Element(point) => (point.x, point.y),
        };
        self.left = px(rect.left - offset_x);
        self.top = px(rect.top - offset_y);
    }

    /// Update size strings from an absolute rect.
    pub(crate) fn set_size(&mut self, rect: &Rect) {
        self.width = px(rect.width);
        self.height = px(rect.height);
    }
}

/// Format a pixel value as a CSS length.
fn px(value: f64) -> String {
    format!("{value}px")
}
