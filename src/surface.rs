//! The `<svg>` preview element behind a small trait, so viewport updates and commits can be
//! exercised without a browser.

use web_sys::SvgsvgElement;

use crate::editor::EditorAdapter;
use crate::state::{ScreenTransform, Viewport};

pub trait RenderSurface {
    fn set_view_box(&self, view: &Viewport);
    /// Replaces the whole content; no parsing or escaping.
    fn set_content(&self, markup: &str);
    /// Local → screen transform at this moment.
    fn screen_transform(&self) -> Option<ScreenTransform>;
}

#[derive(Clone)]
pub struct SvgSurface {
    svg: SvgsvgElement,
}

impl SvgSurface {
    pub fn new(svg: SvgsvgElement) -> Self {
        Self { svg }
    }

    fn current_view_box(&self) -> Option<Viewport> {
        self.svg
            .get_attribute("viewBox")
            .and_then(|raw| Viewport::parse_view_box(&raw))
    }
}

impl RenderSurface for SvgSurface {
    fn set_view_box(&self, view: &Viewport) {
        self.svg.set_attribute("viewBox", &view.to_view_box()).ok();
    }

    fn set_content(&self, markup: &str) {
        self.svg.set_inner_html(markup);
    }

    fn screen_transform(&self) -> Option<ScreenTransform> {
        if let Some(m) = self.svg.get_screen_ctm() {
            return Some(ScreenTransform {
                a: m.a() as f64,
                b: m.b() as f64,
                c: m.c() as f64,
                d: m.d() as f64,
                e: m.e() as f64,
                f: m.f() as f64,
            });
        }
        // No CTM (detached or not laid out yet): rebuild the default meet mapping.
        let view = self.current_view_box()?;
        let rect = self.svg.get_bounding_client_rect();
        ScreenTransform::for_viewport(&view, rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Copies the editor text into the surface verbatim and returns what was committed.
pub fn commit(editor: &impl EditorAdapter, surface: &impl RenderSurface) -> String {
    let markup = editor.text();
    surface.set_content(&markup);
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeEditor(String);

    impl EditorAdapter for FakeEditor {
        fn text(&self) -> String {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        content: RefCell<String>,
        view_box: RefCell<Option<Viewport>>,
    }

    impl RenderSurface for FakeSurface {
        fn set_view_box(&self, view: &Viewport) {
            *self.view_box.borrow_mut() = Some(*view);
        }
        fn set_content(&self, markup: &str) {
            *self.content.borrow_mut() = markup.to_string();
        }
        fn screen_transform(&self) -> Option<ScreenTransform> {
            Some(ScreenTransform::IDENTITY)
        }
    }

    #[test]
    fn commit_copies_text_verbatim() {
        let surface = FakeSurface::default();
        let editor = FakeEditor(r#"<rect width="10" height="10"/>"#.into());
        let committed = commit(&editor, &surface);
        assert_eq!(&*surface.content.borrow(), r#"<rect width="10" height="10"/>"#);
        assert_eq!(committed, r#"<rect width="10" height="10"/>"#);
    }

    #[test]
    fn malformed_markup_is_not_touched() {
        let surface = FakeSurface::default();
        *surface.content.borrow_mut() = "<circle/>".into();
        let raw = "<g><rect & </ nonsense \"'";
        commit(&FakeEditor(raw.into()), &surface);
        assert_eq!(&*surface.content.borrow(), raw);
        commit(&FakeEditor(String::new()), &surface);
        assert_eq!(&*surface.content.borrow(), "");
        assert!(surface.view_box.borrow().is_none());
    }
}
