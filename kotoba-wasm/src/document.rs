//! Live-DOM implementation of [`DocumentView`].

use crate::errors::describe;
use kotoba_core::{
    ContentMode, DocumentView, Error, Language, LocalizedText, Result, ToggleConfig,
    TranslatableElement, TranslatableImage,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// [`DocumentView`] over the live DOM, addressed through the configured names.
pub struct WebDocumentView {
    document: Document,
    config: ToggleConfig,
}

impl WebDocumentView {
    /// View over `document`.
    pub fn new(document: Document, config: ToggleConfig) -> Self {
        Self { document, config }
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self.document.query_selector_all(selector).map_err(js_err)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn control(&self, language: Language) -> Option<Element> {
        self.document
            .get_element_by_id(self.config.controls.id_for(language))
    }
}

fn js_err(e: JsValue) -> Error {
    Error::document(describe(&e))
}

impl DocumentView for WebDocumentView {
    type Node = Element;

    fn set_document_language(&mut self, code: &str) -> Result<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| Error::document("document has no root element"))?;
        root.set_attribute("lang", code).map_err(js_err)
    }

    fn scan_elements(&self) -> Result<Vec<TranslatableElement<Element>>> {
        let attrs = &self.config.attributes;
        Ok(self
            .query_all(&self.config.element_selector())?
            .into_iter()
            .map(|el| TranslatableElement {
                key: el.get_attribute(&attrs.key).unwrap_or_default(),
                text: LocalizedText::new(
                    el.get_attribute(&attrs.japanese),
                    el.get_attribute(&attrs.english),
                ),
                text_only: el.tag_name().eq_ignore_ascii_case("title")
                    || el.has_attribute(&attrs.text_only),
                node: el,
            })
            .collect())
    }

    fn write_content(&mut self, node: &Element, content: &str, mode: ContentMode) -> Result<()> {
        match mode {
            ContentMode::Text => node.set_text_content(Some(content)),
            ContentMode::Markup => node.set_inner_html(content),
        }
        Ok(())
    }

    fn scan_images(&self) -> Result<Vec<TranslatableImage<Element>>> {
        let attrs = &self.config.attributes;
        Ok(self
            .query_all(&self.config.image_selector())?
            .into_iter()
            .map(|img| TranslatableImage {
                alt: LocalizedText::new(
                    img.get_attribute(&attrs.japanese_alt),
                    img.get_attribute(&attrs.english_alt),
                ),
                node: img,
            })
            .collect())
    }

    fn write_alt(&mut self, node: &Element, alt: &str) -> Result<()> {
        node.set_attribute("alt", alt).map_err(js_err)
    }

    fn has_control(&self, language: Language) -> bool {
        self.control(language).is_some()
    }

    fn set_control_active(&mut self, language: Language, active: bool) -> Result<()> {
        let control = self.control(language).ok_or_else(|| {
            Error::document(format!("no element #{}", self.config.controls.id_for(language)))
        })?;
        let class = &self.config.controls.active_class;
        let list = control.class_list();
        if active {
            list.add_1(class).map_err(js_err)
        } else {
            list.remove_1(class).map_err(js_err)
        }
    }
}
