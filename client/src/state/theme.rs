//! Dark/light theme as an explicit context value.
//!
//! DESIGN
//! ======
//! Components never touch the document to restyle it. They read
//! `RwSignal<ThemeState>` from context and derive class names through the pure
//! helpers here; the shell applies the root class to its wrapper element.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    /// Class list for the application root.
    pub fn root_class(self) -> &'static str {
        if self.dark { "App dark" } else { "App" }
    }

    /// `base` with the `dark` modifier appended when dark mode is on.
    pub fn modifier(self, base: &str) -> String {
        if self.dark {
            format!("{base} dark")
        } else {
            base.to_owned()
        }
    }

    /// Label of the toggle button: names the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        if self.dark { "LIGHT MODE" } else { "DARK MODE" }
    }
}
