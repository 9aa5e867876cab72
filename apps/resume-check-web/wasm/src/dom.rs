//! Page element bindings
//!
//! Looks up every element the checker drives once at mount, and applies a
//! [`Frame`] by toggling classes and text. Nothing here decides what to
//! show; that comes from the frame.

use resume_check_core::{Frame, Tab};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, SvgElement};

/// Handles to the static elements of the page
pub struct Dom {
    pub document: Document,
    pub root: Element,
    pub theme_toggle: Element,
    pub drop_zone: Element,
    pub file_input: HtmlInputElement,
    pub file_row: Element,
    pub file_name: Element,
    pub file_ext: HtmlElement,
    pub remove_file: Element,
    pub btn_analyze: HtmlButtonElement,
    pub upload_view: Element,
    pub loader: Element,
    pub results_view: Element,
    pub error_msg: Element,
    pub btn_back: Element,
    /// "Check another resume" button; optional in the host page
    pub btn_new: Option<Element>,
    pub score_arc: SvgElement,
    pub score_num: HtmlElement,
    pub verdict: Element,
    pub meta_chips: Element,
    pub stat_pass: Element,
    pub stat_warn: Element,
    pub stat_fail: Element,
    pub cat_overview: Element,
    pub tab_details: Element,
    pub tab_tips: Element,
}

impl Dom {
    /// Bind to the current document.
    ///
    /// # Errors
    /// Returns a JsValue error naming the first missing or mistyped element
    pub fn bind() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("Document has no root element"))?;

        Ok(Self {
            theme_toggle: by_id(&document, "themeToggle")?,
            drop_zone: by_id(&document, "dropZone")?,
            file_input: by_id(&document, "fileInput")?,
            file_row: by_id(&document, "fileRow")?,
            file_name: by_id(&document, "fileName")?,
            file_ext: by_id(&document, "fileExt")?,
            remove_file: by_id(&document, "removeFile")?,
            btn_analyze: by_id(&document, "btnAnalyze")?,
            upload_view: by_id(&document, "uploadView")?,
            loader: by_id(&document, "loader")?,
            results_view: by_id(&document, "resultsView")?,
            error_msg: by_id(&document, "errorMsg")?,
            btn_back: by_id(&document, "btnBack")?,
            btn_new: document.get_element_by_id("btnNew"),
            score_arc: by_id(&document, "scoreArc")?,
            score_num: by_id(&document, "scoreNum")?,
            verdict: by_id(&document, "verdict")?,
            meta_chips: by_id(&document, "metaChips")?,
            stat_pass: by_id(&document, "statPass")?,
            stat_warn: by_id(&document, "statWarn")?,
            stat_fail: by_id(&document, "statFail")?,
            cat_overview: by_id(&document, "catOverview")?,
            tab_details: by_id(&document, Tab::Details.panel_id())?,
            tab_tips: by_id(&document, Tab::Tips.panel_id())?,
            root,
            document,
        })
    }

    /// Element for a summary counter id ("statPass", "statWarn", "statFail")
    pub fn counter(&self, id: &str) -> Option<&Element> {
        match id {
            "statPass" => Some(&self.stat_pass),
            "statWarn" => Some(&self.stat_warn),
            "statFail" => Some(&self.stat_fail),
            _ => None,
        }
    }

    pub fn tab_panel(&self, tab: Tab) -> &Element {
        match tab {
            Tab::Details => &self.tab_details,
            Tab::Tips => &self.tab_tips,
        }
    }

    /// Every `.tab-btn` on the page
    pub fn tab_buttons(&self) -> Result<Vec<Element>, JsValue> {
        query_all(&self.document, ".tab-btn")
    }

    /// Apply a frame to the static elements.
    pub fn paint_frame(&self, frame: &Frame) -> Result<(), JsValue> {
        set_class(&self.upload_view, "hidden", !frame.upload_visible)?;
        set_class(&self.loader, "visible", frame.loader_visible)?;
        set_class(&self.results_view, "visible", frame.results_visible)?;
        set_class(&self.btn_back, "visible", frame.back_visible)?;
        set_class(&self.drop_zone, "drag-over", frame.drag_over)?;

        match &frame.file_row {
            Some(row) => {
                self.file_name.set_text_content(Some(&row.name));
                self.file_ext.set_text_content(Some(row.badge_label));
                let style = self.file_ext.style();
                style.set_property("background", row.palette.background)?;
                style.set_property("color", row.palette.foreground)?;
                set_class(&self.file_row, "visible", true)?;
            }
            None => {
                set_class(&self.file_row, "visible", false)?;
                self.file_input.set_value("");
            }
        }

        set_class(&self.btn_analyze, "visible", frame.submit_visible)?;
        self.btn_analyze.set_disabled(!frame.submit_enabled);

        match &frame.error {
            Some(message) => {
                self.error_msg.set_text_content(Some(message));
                set_class(&self.error_msg, "visible", true)?;
            }
            None => set_class(&self.error_msg, "visible", false)?,
        }

        for button in self.tab_buttons()? {
            let active = button.get_attribute("data-tab").as_deref() == Some(frame.active_tab.as_str());
            set_class(&button, "active", active)?;
        }
        for tab in Tab::ALL {
            set_class(self.tab_panel(tab), "active", tab == frame.active_tab)?;
        }

        let entries = self.tab_details.query_selector_all(".category")?;
        for (i, open) in frame.expanded.iter().enumerate() {
            if let Some(entry) = entries.item(i as u32) {
                let entry: Element = entry.dyn_into()?;
                set_class(&entry, "open", *open)?;
            }
        }

        Ok(())
    }
}

/// Look up an element by id and cast it.
fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Create an element with a class name.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create an element with a class name and text content.
pub fn create_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = create(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Set one inline style property on an element that supports inline styles.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style().set_property(property, value)?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_set_class_toggles() {
        let el = create(&document(), "div", "card").unwrap();
        set_class(&el, "open", true).unwrap();
        assert!(el.class_list().contains("open"));
        set_class(&el, "open", false).unwrap();
        assert!(!el.class_list().contains("open"));
        assert!(el.class_list().contains("card"));
    }

    #[wasm_bindgen_test]
    fn test_create_text_uses_text_content() {
        let el = create_text(&document(), "span", "", "<b>not markup</b>").unwrap();
        assert_eq!(el.text_content().unwrap(), "<b>not markup</b>");
        assert_eq!(el.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn test_bind_reports_missing_element() {
        let err = Dom::bind().err().unwrap();
        assert!(err.as_string().unwrap().starts_with("Missing element #"));
    }
}
