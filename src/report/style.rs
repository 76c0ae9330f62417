// Text decoration applied to already-formatted report fragments

use console::Style;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Semantic role of a report fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Passed,
    Failed,
    Pending,
    Title,
    Head,
    Duration,
    Info,
}

type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Maps each [`Role`] to a text transform. Roles without an entry render
/// unchanged.
#[derive(Clone, Default)]
pub struct Palette {
    transforms: HashMap<Role, Transform>,
}

impl Palette {
    /// No decoration at all
    pub fn plain() -> Self {
        Self::default()
    }

    /// Terminal colors. `console` drops the escape codes by itself when
    /// colors are disabled for the process.
    pub fn styled() -> Self {
        Self::plain()
            .with_style(Role::Passed, Style::new().green())
            .with_style(Role::Failed, Style::new().red())
            .with_style(Role::Pending, Style::new().cyan())
            .with_style(Role::Title, Style::new().white())
            .with_style(Role::Head, Style::new().white())
            .with_style(Role::Duration, Style::new().dim())
            .with_style(Role::Info, Style::new().white())
    }

    /// Set the transform for a role
    pub fn with<F>(mut self, role: Role, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transforms.insert(role, Arc::new(transform));
        self
    }

    pub fn with_style(self, role: Role, style: Style) -> Self {
        self.with(role, move |text| style.apply_to(text).to_string())
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.transforms.get(&role) {
            Some(transform) => transform(text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("roles", &self.transforms.keys().collect::<Vec<_>>())
            .finish()
    }
}
