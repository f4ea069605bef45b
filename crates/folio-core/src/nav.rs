/// Which page section is showing, driven by the `.control` nav buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionNav {
    active: Option<String>,
}

/// Result of selecting a section: what to deactivate and what to activate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavChange {
    pub previous: Option<String>,
    pub next: String,
}

impl SectionNav {
    pub fn new(initial: Option<String>) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Select `id`. Returns `None` for an empty id; re-selecting the active
    /// section still returns a change so the caller can repair stray classes.
    pub fn select(&mut self, id: &str) -> Option<NavChange> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let previous = self.active.replace(id.to_string());
        Some(NavChange {
            previous,
            next: id.to_string(),
        })
    }
}
