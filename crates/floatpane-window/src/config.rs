#![forbid(unsafe_code)]

//! Window configuration.

/// Options recognized at window creation.
///
/// The initial width/height/left/top are measurement strings (`"500px"`,
/// `"40%"`, ...) passed through verbatim to the style layer; the core only
/// ever works with measured pixel rects.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    /// Explicit identity; empty means manager-issued.
    pub id: String,
    /// Title shown by the host's title bar.
    pub title: String,
    /// How the host resolves the boundary element. Opaque to the core.
    pub boundary_selector: String,
    /// Initial width (style string).
    pub init_width: String,
    /// Initial height (style string).
    pub init_height: String,
    /// Initial left position (style string).
    pub init_left: String,
    /// Initial top position (style string).
    pub init_top: String,
    /// Center the window in the boundary at mount.
    pub init_centered: bool,
    /// Maximize immediately at mount (no stacking change, no notification).
    pub init_maximize: bool,
    /// Explicit stacking value; overrides a manager-issued one.
    pub z_index: Option<i32>,
    /// The window may be closed.
    pub allow_close: bool,
    /// The window may be maximized.
    pub allow_maximize: bool,
    /// The window may be minimized.
    pub allow_minimize: bool,
    /// The window may be dragged.
    pub allow_drag: bool,
    /// The window may be resized.
    pub allow_resize: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            boundary_selector: "body".to_string(),
            init_width: "500px".to_string(),
            init_height: "300px".to_string(),
            init_left: "0".to_string(),
            init_top: "0".to_string(),
            init_centered: false,
            init_maximize: false,
            z_index: None,
            allow_close: true,
            allow_maximize: true,
            allow_minimize: true,
            allow_drag: true,
            allow_resize: true,
        }
    }
}

impl WindowOptions {
    /// Options with every default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit identity.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the boundary selector carried for the host.
    #[must_use]
    pub fn boundary_selector(mut self, selector: impl Into<String>) -> Self {
        self.boundary_selector = selector.into();
        self
    }

    /// Set the initial size style strings.
    #[must_use]
    pub fn init_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.init_width = width.into();
        self.init_height = height.into();
        self
    }

    /// Set the initial position style strings.
    #[must_use]
    pub fn init_position(mut self, left: impl Into<String>, top: impl Into<String>) -> Self {
        self.init_left = left.into();
        self.init_top = top.into();
        self
    }

    /// Center the window at mount.
    #[must_use]
    pub fn init_centered(mut self, centered: bool) -> Self {
        self.init_centered = centered;
        self
    }

    /// Maximize the window at mount.
    #[must_use]
    pub fn init_maximize(mut self, maximize: bool) -> Self {
        self.init_maximize = maximize;
        self
    }

    /// Set an explicit stacking value.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Allow or forbid closing.
    #[must_use]
    pub fn allow_close(mut self, allow: bool) -> Self {
        self.allow_close = allow;
        self
    }

    /// Allow or forbid maximizing.
    #[must_use]
    pub fn allow_maximize(mut self, allow: bool) -> Self {
        self.allow_maximize = allow;
        self
    }

    /// Allow or forbid minimizing.
    #[must_use]
    pub fn allow_minimize(mut self, allow: bool) -> Self {
        self.allow_minimize = allow;
        self
    }

    /// Allow or forbid dragging.
    #[must_use]
    pub fn allow_drag(mut self, allow: bool) -> Self {
        self.allow_drag = allow;
        self
    }

    /// Allow or forbid resizing.
    #[must_use]
    pub fn allow_resize(mut self, allow: bool) -> Self {
        self.allow_resize = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::WindowOptions;

    #[test]
    fn defaults_are_permissive() {
        let options = WindowOptions::default();
        assert!(options.id.is_empty());
        assert_eq!(options.boundary_selector, "body");
        assert_eq!(options.init_width, "500px");
        assert_eq!(options.init_height, "300px");
        assert_eq!(options.init_left, "0");
        assert_eq!(options.init_top, "0");
        assert!(!options.init_centered);
        assert!(!options.init_maximize);
        assert_eq!(options.z_index, None);
        assert!(options.allow_close);
        assert!(options.allow_maximize);
        assert!(options.allow_minimize);
        assert!(options.allow_drag);
        assert!(options.allow_resize);
    }

    #[test]
    fn builder_sets_fields() {
        let options = WindowOptions::new()
            .id("editor")
            .title("Editor")
            .init_size("640px", "480px")
            .init_position("10px", "20px")
            .init_centered(true)
            .z_index(40)
            .allow_resize(false);

        assert_eq!(options.id, "editor");
        assert_eq!(options.title, "Editor");
        assert_eq!(options.init_width, "640px");
        assert_eq!(options.init_height, "480px");
        assert_eq!(options.init_left, "10px");
        assert_eq!(options.init_top, "20px");
        assert!(options.init_centered);
        assert_eq!(options.z_index, Some(40));
        assert!(!options.allow_resize);
    }
}
