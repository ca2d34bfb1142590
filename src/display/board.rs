use super::{DisplaySurface, LookupError};
use std::collections::BTreeMap;

/// In-memory set of named text elements; the renderer draws from this.
///
/// Elements exist only if they were declared up front. New elements start
/// with empty text.
#[derive(Debug, Clone, Default)]
pub struct ElementBoard {
    elements: BTreeMap<String, String>,
}

impl ElementBoard {
    pub fn with_elements<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn standard() -> Self {
        Self::with_elements(["left", "middle", "right"])
    }

    pub fn text(&self, element: &str) -> Option<&str> {
        self.elements.get(element).map(|t| t.as_str())
    }
}

impl DisplaySurface for ElementBoard {
    fn set_text(&mut self, element: &str, text: &str) -> Result<(), LookupError> {
        let slot = self.elements.get_mut(element).ok_or_else(|| LookupError {
            element: element.to_string(),
        })?;
        slot.clear();
        slot.push_str(text);
        Ok(())
    }
}
