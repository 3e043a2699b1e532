//! Configuration for the storefront page model

use serde::{Deserialize, Serialize};
use storefront_types::{CategorySelection, NAIRA};

use crate::error::ConfigError;

/// Main storefront configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Checkout link configuration
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Currency display
    #[serde(default)]
    pub currency: CurrencyConfig,

    /// Testimonial slider
    #[serde(default)]
    pub testimonials: TestimonialConfig,

    /// Decorative effects
    #[serde(default)]
    pub effects: EffectsConfig,

    /// Page copy and thresholds
    #[serde(default)]
    pub page: PageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Checkout link configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Messaging service base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Destination phone number, digits only
    #[serde(default = "default_destination")]
    pub destination: String,

    /// First line of the order message
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Last line of the order message
    #[serde(default = "default_closing")]
    pub closing: String,

    /// Warning shown when checking out an empty cart
    #[serde(default = "default_empty_cart_warning")]
    pub empty_cart_warning: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            destination: default_destination(),
            greeting: default_greeting(),
            closing: default_closing(),
            empty_cart_warning: default_empty_cart_warning(),
        }
    }
}

/// Currency display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Glyph prefixed to formatted prices and stripped when parsing them
    #[serde(default = "default_glyph")]
    pub glyph: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            glyph: default_glyph(),
        }
    }
}

/// Testimonial slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialConfig {
    /// Auto-advance period in milliseconds
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,

    /// Run the auto-advance ticker
    #[serde(default = "default_true")]
    pub auto_advance: bool,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            auto_advance: true,
        }
    }
}

/// Decorative effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,

    #[serde(default = "default_sparkle_count")]
    pub sparkle_count: usize,

    /// Fixed RNG seed; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            sparkle_count: default_sparkle_count(),
            seed: None,
        }
    }
}

/// Page copy and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Scroll offset past which the back-to-top control is shown
    #[serde(default = "default_back_to_top_px")]
    pub back_to_top_threshold_px: u32,

    /// How long an add-to-cart trigger stays in its "added" state
    #[serde(default = "default_add_flash_ms")]
    pub add_flash_ms: u64,

    #[serde(default = "default_empty_cart_message")]
    pub empty_cart_message: String,

    #[serde(default = "default_contact_ack")]
    pub contact_ack: String,

    /// Menu tab active at load, `all` or a category tag
    #[serde(default = "default_initial_category")]
    pub initial_category: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold_px: default_back_to_top_px(),
            add_flash_ms: default_add_flash_ms(),
            empty_cart_message: default_empty_cart_message(),
            contact_ack: default_contact_ack(),
            initial_category: default_initial_category(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://wa.me".to_string()
}

fn default_destination() -> String {
    "2348045120378".to_string()
}

fn default_greeting() -> String {
    "Hello Cilla Bites! I would like to place an order:".to_string()
}

fn default_closing() -> String {
    "Please contact me to finalize my order. Thank you!".to_string()
}

fn default_empty_cart_warning() -> String {
    "Your cart is empty!".to_string()
}

fn default_glyph() -> String {
    NAIRA.to_string()
}

fn default_auto_advance_ms() -> u64 {
    5000
}

fn default_particle_count() -> usize {
    30
}

fn default_sparkle_count() -> usize {
    20
}

fn default_back_to_top_px() -> u32 {
    300
}

fn default_add_flash_ms() -> u64 {
    500
}

fn default_empty_cart_message() -> String {
    "Your cart is empty".to_string()
}

fn default_contact_ack() -> String {
    "Thank you for your message! We will contact you shortly.".to_string()
}

fn default_initial_category() -> String {
    CategorySelection::ALL_TAG.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PageConfig {
    pub fn initial_selection(&self) -> CategorySelection {
        self.initial_category.parse().unwrap_or_default()
    }
}

impl StorefrontConfig {
    /// Load configuration: defaults, then an optional file, then
    /// `STOREFRONT_`-prefixed environment variables
    /// (e.g. `STOREFRONT_CHECKOUT__DESTINATION`).
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&StorefrontConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("STOREFRONT")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: StorefrontConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the page model cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = url::Url::parse(&self.checkout.endpoint).map_err(|e| {
            ConfigError::Invalid {
                field: "checkout.endpoint",
                reason: e.to_string(),
            }
        })?;
        if !matches!(endpoint.scheme(), "https" | "http") {
            return Err(ConfigError::Invalid {
                field: "checkout.endpoint",
                reason: format!("unsupported scheme {}", endpoint.scheme()),
            });
        }

        let destination = &self.checkout.destination;
        if destination.is_empty() || !destination.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                field: "checkout.destination",
                reason: format!("expected digits only, got {:?}", destination),
            });
        }

        if self.currency.glyph.is_empty() {
            return Err(ConfigError::Invalid {
                field: "currency.glyph",
                reason: "must not be empty".to_string(),
            });
        }

        if self.testimonials.auto_advance_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "testimonials.auto_advance_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
