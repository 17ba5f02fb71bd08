//! Document state for the playground.
//! The preview viewport lives in `state::ViewportController`; this reducer only tracks
//! what has been committed to the preview and whether the editor has moved on since.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaygroundState {
    /// Markup currently shown in the preview, exactly as committed.
    pub committed: String,
    /// Editor text differs from `committed`.
    pub dirty: bool,
    pub commits: u32,
}

impl PlaygroundState {
    pub fn with_document(markup: impl Into<String>) -> Self {
        Self {
            committed: markup.into(),
            ..Default::default()
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PlaygroundAction {
    /// The user edited the editor; carries the full current text.
    EditorChanged { text: String },
    /// The editor text was pushed into the preview.
    Committed { markup: String },
}

impl Reducible for PlaygroundState {
    type Action = PlaygroundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlaygroundAction::*;
        match action {
            EditorChanged { text } => {
                let dirty = text != self.committed;
                if dirty == self.dirty {
                    return self;
                }
                let mut new = (*self).clone();
                new.dirty = dirty;
                Rc::new(new)
            }
            Committed { markup } => {
                let mut new = (*self).clone();
                new.committed = markup;
                new.dirty = false;
                new.commits = new.commits.saturating_add(1);
                Rc::new(new)
            }
        }
    }
}
