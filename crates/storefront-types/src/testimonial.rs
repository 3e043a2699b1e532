use serde::{Deserialize, Serialize};

/// A customer quote shown in the testimonial slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl Testimonial {
    pub fn new(author: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            quote: quote.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
