//! Host-independent widget surface for one bound field.
//!
//! Hosts (a terminal dashboard, a browser binding, tests) implement
//! [`FieldSurface`] so the synchronization logic never touches a concrete
//! rendering environment.

/// Read/write access to the text input and slider of one field.
pub trait FieldSurface {
    /// Current raw text of the input.
    fn text(&self) -> &str;

    /// Replace the input text.
    fn set_text(&mut self, text: String);

    /// Current slider position.
    fn slider(&self) -> f64;

    /// Move the slider.
    fn set_slider(&mut self, value: f64);

    /// Set the slider fill indicator, in percent.
    fn set_fill(&mut self, percent: f64);
}

/// In-memory widget state, used by the terminal host and by tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldWidgets {
    /// Text shown in the input.
    pub text: String,
    /// Slider position.
    pub slider: f64,
    /// Fill indicator in percent.
    pub fill: f64,
}

impl FieldWidgets {
    /// Widgets initialized to `value`, with no fill computed yet.
    #[must_use]
    pub fn with_value(value: f64) -> Self {
        Self {
            text: crate::field::display_value(value),
            slider: value,
            fill: 0.0,
        }
    }
}

impl FieldSurface for FieldWidgets {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn slider(&self) -> f64 {
        self.slider
    }

    fn set_slider(&mut self, value: f64) {
        self.slider = value;
    }

    fn set_fill(&mut self, percent: f64) {
        self.fill = percent;
    }
}
