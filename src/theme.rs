use std::fmt;

/// Class placed on the document root while the dark palette is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Root element class for this palette, `None` for light.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some(DARK_CLASS),
            Self::Light => None,
        }
    }

    /// Root `class` attribute for this palette, keeping unrelated classes of `current`.
    pub fn root_class_name(self, current: &str) -> String {
        let mut classes: Vec<&str> = current
            .split_whitespace()
            .filter(|class| *class != DARK_CLASS)
            .collect();
        classes.extend(self.root_class());
        classes.join(" ")
    }

    /// Picks between the dark and light variant of a class string.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    pub fn page_class(self) -> &'static str {
        self.pick(
            "bg-black text-white min-h-screen transition-colors duration-300",
            "bg-white text-black min-h-screen transition-colors duration-300",
        )
    }

    pub fn heading_class(self) -> &'static str {
        self.pick("text-white", "text-black")
    }

    pub fn muted_class(self) -> &'static str {
        self.pick("text-gray-400", "text-gray-600")
    }

    pub fn body_class(self) -> &'static str {
        self.pick("text-gray-300", "text-gray-600")
    }

    pub fn link_class(self) -> &'static str {
        self.pick(
            "text-purple-400 hover:text-purple-300",
            "text-purple-600 hover:text-purple-500",
        )
    }

    pub fn nav_item_class(self) -> &'static str {
        self.pick(
            "text-gray-300 hover:text-white",
            "text-gray-600 hover:text-black",
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}
