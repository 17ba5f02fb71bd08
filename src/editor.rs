use web_sys::HtmlTextAreaElement;
use yew::NodeRef;

/// The text editing widget as seen by the rest of the app: its current text, nothing else.
pub trait EditorAdapter {
    fn text(&self) -> String;
}

/// Adapter over the `<textarea>` rendered by `EditorPane`.
#[derive(Clone, PartialEq, Default)]
pub struct TextAreaAdapter {
    node: NodeRef,
}

impl TextAreaAdapter {
    pub fn node_ref(&self) -> NodeRef {
        self.node.clone()
    }
}

impl EditorAdapter for TextAreaAdapter {
    fn text(&self) -> String {
        self.node
            .cast::<HtmlTextAreaElement>()
            .map(|ta| ta.value())
            .unwrap_or_default()
    }
}
