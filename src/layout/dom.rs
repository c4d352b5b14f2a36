//! Browser layout reader
//!
//! Queries the live DOM on every call. Elements are located by the CSS
//! selectors in [`PlacementConfig`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::LayoutReader;
use crate::error::LayoutError;
use crate::models::PlacementConfig;

/// Layout reader backed by `window` and `document`
#[derive(Clone, Debug)]
pub struct DomLayout {
    container_selector: String,
    panel_selector: String,
}

impl DomLayout {
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            container_selector: config.container_selector.clone(),
            panel_selector: config.panel_selector.clone(),
        }
    }

    fn window() -> Result<Window, LayoutError> {
        web_sys::window().ok_or(LayoutError::NoWindow)
    }

    fn document() -> Result<Document, LayoutError> {
        Self::window()?.document().ok_or(LayoutError::NoDocument)
    }

    fn find(selector: &str) -> Result<Element, LayoutError> {
        Self::document()?
            .query_selector(selector)
            .map_err(|_| LayoutError::InvalidSelector(selector.to_string()))?
            .ok_or_else(|| LayoutError::ElementNotFound(selector.to_string()))
    }
}

impl LayoutReader for DomLayout {
    fn container_top_offset(&self) -> Result<f64, LayoutError> {
        let container = Self::find(&self.container_selector)?;
        Ok(container.get_bounding_client_rect().top())
    }

    fn panel_height(&self) -> Option<f64> {
        let panel = Self::find(&self.panel_selector).ok()?;
        let height = match panel.dyn_ref::<HtmlElement>() {
            Some(html) => f64::from(html.offset_height()),
            None => panel.get_bounding_client_rect().height(),
        };
        // A panel that is not laid out yet reports zero
        (height > 0.0).then_some(height)
    }

    fn viewport_height(&self) -> Result<f64, LayoutError> {
        let value = Self::window()?
            .inner_height()
            .map_err(|_| LayoutError::ReadFailed("window.innerHeight"))?;
        let height = value
            .as_f64()
            .ok_or(LayoutError::NotANumber("window.innerHeight"))?;
        if !height.is_finite() {
            return Err(LayoutError::NonFinite("window.innerHeight"));
        }
        Ok(height)
    }
}
