use thiserror::Error;

/// Errors from parsing display-formatted prices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price text is empty")]
    Empty,

    #[error("malformed price text: {text:?}")]
    Malformed { text: String },
}

/// Errors from loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu item {title:?} has an unparseable price: {source}")]
    InvalidPrice {
        title: String,
        #[source]
        source: PriceError,
    },

    #[error("catalog has no menu items")]
    EmptyMenu,

    #[error("catalog has no testimonials")]
    NoTestimonials,
}
