//! The storefront page model.
//!
//! [`Storefront`] owns every piece of page state and handles one
//! [`PageEvent`] at a time. Each handler runs to completion and returns
//! the [`PageEffect`]s the host should apply, so mutation-then-render
//! sequences are never interleaved.
//!
//! Every cart mutation is followed by a full re-render; the previous
//! [`CartView`] is discarded and its control bindings go with it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_types::{Catalog, CategorySelection};
use tracing::{debug, info, instrument, warn};

use crate::cart::CartStore;
use crate::checkout::{CheckoutComposer, CheckoutLink};
use crate::config::StorefrontConfig;
use crate::effects::{ElementBox, Reveal, ScrollReveal};
use crate::error::{CheckoutError, FilterError, StorefrontResult};
use crate::filter::{MenuFilter, MenuView};
use crate::render::{CartRenderer, CartView, LineAction};
use crate::rotator::{TestimonialRotator, TestimonialView};

/// Contents of the contact form at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// User interactions and timer firings.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Add-to-cart trigger on a menu entry
    AddToCart { item: usize },
    /// A per-line control from the latest cart render
    Line { action: LineAction, index: usize },
    OpenCart,
    CloseCart,
    /// Click on the cart panel backdrop
    CartBackdrop,
    Checkout,
    SelectCategory(CategorySelection),
    NextTestimonial,
    PrevTestimonial,
    /// Auto-advance timer fired
    AutoAdvance,
    Scroll { offset_px: u32 },
    /// Layout of the revealable elements after a scroll or resize
    Viewport {
        height: f64,
        elements: Vec<ElementBox>,
    },
    BackToTop,
    SubmitContact(ContactForm),
    ToggleNav,
    /// Click anywhere outside the nav menu and its toggle
    OutsideNavClick,
}

/// What the host should do after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PageEffect {
    /// Replace the cart list, badge and total with this view
    CartRendered(CartView),
    /// Show the add trigger's "added" state for `duration`
    FlashAdded { item: usize, duration: Duration },
    /// Blocking user-facing message
    Alert { message: String },
    OpenExternal { url: String, new_context: bool },
    CartPanel { open: bool },
    MenuFiltered(MenuView),
    TestimonialShown(TestimonialView),
    BackToTopVisible { visible: bool },
    /// Apply [`Reveal::CLASS`] to elements that just came into view
    Revealed { reveals: Vec<Reveal> },
    ScrollTo { top: u32, smooth: bool },
    ContactFormReset,
    NavMenu { open: bool },
}

pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    renderer: CartRenderer,
    composer: CheckoutComposer,
    filter: MenuFilter,
    rotator: TestimonialRotator,
    reveal: ScrollReveal,
    cart_view: CartView,
    cart_open: bool,
    nav_open: bool,
    back_to_top_visible: bool,
    last_checkout: Option<CheckoutLink>,
}

impl Storefront {
    /// Build the page. The catalog is validated up front so that adding a
    /// menu entry can never hit an unparseable price later.
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> StorefrontResult<Self> {
        config.validate()?;
        catalog.validate(&config.currency.glyph)?;

        let renderer = CartRenderer::new(
            config.currency.glyph.clone(),
            config.page.empty_cart_message.clone(),
        );
        let composer = CheckoutComposer::new(&config.checkout)?;
        let filter = MenuFilter::with_initial(&catalog, config.page.initial_selection())?;
        let rotator = TestimonialRotator::new(catalog.testimonials.len())?;
        let cart = CartStore::new();
        let cart_view = renderer.render(&cart);

        info!(
            menu_items = catalog.menu.len(),
            categories = filter.tabs().len() - 1,
            testimonials = rotator.len(),
            "Storefront ready"
        );

        Ok(Self {
            config,
            catalog,
            cart,
            renderer,
            composer,
            filter,
            rotator,
            reveal: ScrollReveal::default(),
            cart_view,
            cart_open: false,
            nav_open: false,
            back_to_top_visible: false,
            last_checkout: None,
        })
    }

    /// Effects for the initial paint.
    pub fn init(&mut self) -> Vec<PageEffect> {
        vec![
            self.rerender(),
            PageEffect::MenuFiltered(self.filter.view(&self.catalog)),
            PageEffect::TestimonialShown(self.rotator.view(&self.catalog.testimonials)),
        ]
    }

    /// Handle an event. Internal failures are logged and leave the page
    /// unchanged.
    pub fn handle(&mut self, event: PageEvent) -> Vec<PageEffect> {
        match self.dispatch(event) {
            Ok(effects) => effects,
            Err(e) => {
                warn!(error = %e, "Page event handler failed");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, event: PageEvent) -> StorefrontResult<Vec<PageEffect>> {
        let effects = match event {
            PageEvent::AddToCart { item } => self.add_to_cart(item)?,
            PageEvent::Line { action, index } => {
                match action {
                    LineAction::Decrement => {
                        self.cart.decrement(index)?;
                    }
                    LineAction::Increment => {
                        self.cart.increment(index)?;
                    }
                    LineAction::Remove => {
                        self.cart.remove(index)?;
                    }
                }
                vec![self.rerender()]
            }
            PageEvent::OpenCart => self.set_cart_open(true),
            PageEvent::CloseCart | PageEvent::CartBackdrop => self.set_cart_open(false),
            PageEvent::Checkout => self.checkout()?,
            PageEvent::SelectCategory(selection) => {
                self.filter.select(selection)?;
                vec![PageEffect::MenuFiltered(self.filter.view(&self.catalog))]
            }
            PageEvent::NextTestimonial | PageEvent::AutoAdvance => {
                self.rotator.next();
                vec![self.testimonial_effect()]
            }
            PageEvent::PrevTestimonial => {
                self.rotator.prev();
                vec![self.testimonial_effect()]
            }
            PageEvent::Scroll { offset_px } => self.scroll(offset_px),
            PageEvent::Viewport { height, elements } => {
                let reveals = self.reveal.observe(height, &elements);
                if reveals.is_empty() {
                    Vec::new()
                } else {
                    vec![PageEffect::Revealed { reveals }]
                }
            }
            PageEvent::BackToTop => vec![PageEffect::ScrollTo {
                top: 0,
                smooth: true,
            }],
            PageEvent::SubmitContact(form) => self.submit_contact(form),
            PageEvent::ToggleNav => {
                self.nav_open = !self.nav_open;
                vec![PageEffect::NavMenu {
                    open: self.nav_open,
                }]
            }
            PageEvent::OutsideNavClick => {
                if self.nav_open {
                    self.nav_open = false;
                    vec![PageEffect::NavMenu { open: false }]
                } else {
                    Vec::new()
                }
            }
        };
        Ok(effects)
    }

    fn add_to_cart(&mut self, item: usize) -> StorefrontResult<Vec<PageEffect>> {
        let entry = self.catalog.menu.get(item).ok_or(FilterError::ItemOutOfRange {
            index: item,
            len: self.catalog.menu.len(),
        })?;
        self.cart.add_item(entry, &self.config.currency.glyph)?;

        Ok(vec![
            PageEffect::FlashAdded {
                item,
                duration: Duration::from_millis(self.config.page.add_flash_ms),
            },
            self.rerender(),
        ])
    }

    fn checkout(&mut self) -> StorefrontResult<Vec<PageEffect>> {
        let link = match self.composer.compose(&self.cart, &self.cart_view.total_text) {
            Ok(link) => link,
            Err(CheckoutError::EmptyCart) => {
                return Ok(vec![PageEffect::Alert {
                    message: self.config.checkout.empty_cart_warning.clone(),
                }]);
            }
            Err(e) => return Err(e.into()),
        };

        let url = link.url.clone();
        self.last_checkout = Some(link);
        self.cart_open = false;
        self.cart.clear();

        Ok(vec![
            PageEffect::OpenExternal {
                url,
                new_context: true,
            },
            PageEffect::CartPanel { open: false },
            self.rerender(),
        ])
    }

    fn scroll(&mut self, offset_px: u32) -> Vec<PageEffect> {
        let visible = offset_px > self.config.page.back_to_top_threshold_px;
        if visible == self.back_to_top_visible {
            return Vec::new();
        }
        self.back_to_top_visible = visible;
        vec![PageEffect::BackToTopVisible { visible }]
    }

    fn submit_contact(&mut self, form: ContactForm) -> Vec<PageEffect> {
        debug!(blank = form.is_blank(), "Contact form submitted, nothing transmitted");
        vec![
            PageEffect::Alert {
                message: self.config.page.contact_ack.clone(),
            },
            PageEffect::ContactFormReset,
        ]
    }

    fn set_cart_open(&mut self, open: bool) -> Vec<PageEffect> {
        self.cart_open = open;
        vec![PageEffect::CartPanel { open }]
    }

    fn rerender(&mut self) -> PageEffect {
        self.cart_view = self.renderer.render(&self.cart);
        PageEffect::CartRendered(self.cart_view.clone())
    }

    fn testimonial_effect(&self) -> PageEffect {
        PageEffect::TestimonialShown(self.rotator.view(&self.catalog.testimonials))
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The most recent cart render.
    pub fn cart_view(&self) -> &CartView {
        &self.cart_view
    }

    pub fn menu_view(&self) -> MenuView {
        self.filter.view(&self.catalog)
    }

    pub fn testimonial_view(&self) -> TestimonialView {
        self.rotator.view(&self.catalog.testimonials)
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn rotator(&self) -> &TestimonialRotator {
        &self.rotator
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn scroll_reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// The last link handed to the messaging service, if any.
    pub fn last_checkout(&self) -> Option<&CheckoutLink> {
        self.last_checkout.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{RevealGroup, RevealTarget};
    use storefront_types::{Category, Price};

    fn page() -> Storefront {
        let mut page = Storefront::new(Catalog::default(), StorefrontConfig::default()).unwrap();
        page.init();
        page
    }

    fn rendered(effects: &[PageEffect]) -> &CartView {
        effects
            .iter()
            .find_map(|effect| match effect {
                PageEffect::CartRendered(view) => Some(view),
                _ => None,
            })
            .expect("cart was not re-rendered")
    }

    #[test]
    fn test_init_renders_empty_cart() {
        let mut page = Storefront::new(Catalog::default(), StorefrontConfig::default()).unwrap();
        let effects = page.init();
        assert_eq!(effects.len(), 3);
        let view = rendered(&effects);
        assert_eq!(view.total_text, "₦0");
        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty"));
    }

    #[test]
    fn test_add_flashes_and_renders() {
        let mut page = page();
        let effects = page.handle(PageEvent::AddToCart { item: 0 });
        assert_eq!(
            effects[0],
            PageEffect::FlashAdded {
                item: 0,
                duration: Duration::from_millis(500),
            }
        );
        let view = rendered(&effects);
        assert_eq!(view.count, 1);
        assert_eq!(view.lines[0].title, "Jollof Rice");
        assert_eq!(view.total_text, "₦3,500");
    }

    #[test]
    fn test_line_controls_rerender() {
        let mut page = page();
        page.handle(PageEvent::AddToCart { item: 0 });
        page.handle(PageEvent::AddToCart { item: 7 });

        let effects = page.handle(PageEvent::Line {
            action: LineAction::Increment,
            index: 1,
        });
        assert_eq!(rendered(&effects).total, Price::new(3500 + 2 * 1500));

        let effects = page.handle(PageEvent::Line {
            action: LineAction::Remove,
            index: 0,
        });
        let view = rendered(&effects);
        assert_eq!(view.count, 1);
        assert_eq!(view.lines[0].title, "Chapman");
        assert_eq!(view.lines[0].index, 0);
    }

    #[test]
    fn test_bad_index_is_silent() {
        let mut page = page();
        page.handle(PageEvent::AddToCart { item: 0 });
        let effects = page.handle(PageEvent::Line {
            action: LineAction::Remove,
            index: 5,
        });
        assert!(effects.is_empty());
        assert_eq!(page.cart().len(), 1);

        assert!(page.handle(PageEvent::AddToCart { item: 99 }).is_empty());
        assert!(page.dispatch(PageEvent::AddToCart { item: 99 }).is_err());
    }

    #[test]
    fn test_empty_checkout_alerts_only() {
        let mut page = page();
        page.handle(PageEvent::OpenCart);
        let effects = page.handle(PageEvent::Checkout);
        assert_eq!(
            effects,
            vec![PageEffect::Alert {
                message: "Your cart is empty!".into()
            }]
        );
        assert!(page.is_cart_open());
        assert!(page.last_checkout().is_none());
    }

    #[test]
    fn test_checkout_clears_and_closes() {
        let mut page = page();
        page.handle(PageEvent::AddToCart { item: 0 });
        page.handle(PageEvent::Line {
            action: LineAction::Increment,
            index: 0,
        });
        page.handle(PageEvent::OpenCart);

        let effects = page.handle(PageEvent::Checkout);
        match &effects[0] {
            PageEffect::OpenExternal { url, new_context } => {
                assert!(new_context);
                assert!(url.starts_with("https://wa.me/2348045120378?text="));
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(effects[1], PageEffect::CartPanel { open: false });
        let view = rendered(&effects);
        assert!(view.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty"));

        let link = page.last_checkout().unwrap();
        assert!(link.message.contains("• Jollof Rice - Quantity: 2"));
        assert!(link.message.contains("Total: ₦7,000"));
        assert!(page.cart().is_empty());
        assert!(!page.is_cart_open());
    }

    #[test]
    fn test_cart_panel() {
        let mut page = page();
        assert_eq!(page.handle(PageEvent::OpenCart), vec![PageEffect::CartPanel { open: true }]);
        assert!(page.is_cart_open());
        page.handle(PageEvent::CartBackdrop);
        assert!(!page.is_cart_open());
        page.handle(PageEvent::OpenCart);
        page.handle(PageEvent::CloseCart);
        assert!(!page.is_cart_open());
    }

    #[test]
    fn test_filter_event() {
        let mut page = page();
        let effects = page.handle(PageEvent::SelectCategory(CategorySelection::Tag(
            Category::new("swallow"),
        )));
        match &effects[0] {
            PageEffect::MenuFiltered(view) => {
                assert_eq!(view.visible_titles(), vec!["Pounded Yam & Egusi", "Amala & Ewedu"]);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert!(page
            .handle(PageEvent::SelectCategory(CategorySelection::Tag(Category::new("soup"))))
            .is_empty());
    }

    #[test]
    fn test_manual_and_auto_testimonials_share_index() {
        let mut page = page();
        page.handle(PageEvent::NextTestimonial);
        page.handle(PageEvent::AutoAdvance);
        assert_eq!(page.rotator().current(), 2);
        let effects = page.handle(PageEvent::AutoAdvance);
        match &effects[0] {
            PageEffect::TestimonialShown(view) => assert_eq!(view.index, 0),
            other => panic!("unexpected effect {other:?}"),
        }
        page.handle(PageEvent::PrevTestimonial);
        assert_eq!(page.rotator().current(), 2);
    }

    #[test]
    fn test_back_to_top() {
        let mut page = page();
        assert!(page.handle(PageEvent::Scroll { offset_px: 300 }).is_empty());
        assert_eq!(
            page.handle(PageEvent::Scroll { offset_px: 301 }),
            vec![PageEffect::BackToTopVisible { visible: true }]
        );
        assert!(page.handle(PageEvent::Scroll { offset_px: 900 }).is_empty());
        assert_eq!(
            page.handle(PageEvent::BackToTop),
            vec![PageEffect::ScrollTo {
                top: 0,
                smooth: true
            }]
        );
        assert_eq!(
            page.handle(PageEvent::Scroll { offset_px: 0 }),
            vec![PageEffect::BackToTopVisible { visible: false }]
        );
    }

    #[test]
    fn test_contact_form() {
        let mut page = page();
        let form = ContactForm {
            name: "Bola".into(),
            email: "bola@example.com".into(),
            phone: String::new(),
            message: "Do you cater weddings?".into(),
        };
        let effects = page.handle(PageEvent::SubmitContact(form));
        assert_eq!(
            effects,
            vec![
                PageEffect::Alert {
                    message: "Thank you for your message! We will contact you shortly.".into()
                },
                PageEffect::ContactFormReset,
            ]
        );
    }

    #[test]
    fn test_nav_toggle() {
        let mut page = page();
        assert!(page.handle(PageEvent::OutsideNavClick).is_empty());
        page.handle(PageEvent::ToggleNav);
        assert!(page.is_nav_open());
        assert_eq!(
            page.handle(PageEvent::OutsideNavClick),
            vec![PageEffect::NavMenu { open: false }]
        );
        page.handle(PageEvent::ToggleNav);
        page.handle(PageEvent::ToggleNav);
        assert!(!page.is_nav_open());
    }

    #[test]
    fn test_rejects_invalid_catalog() {
        let mut catalog = Catalog::default();
        catalog.testimonials.clear();
        assert!(Storefront::new(catalog, StorefrontConfig::default()).is_err());
    }

    #[test]
    fn test_initial_category_from_config() {
        let mut config = StorefrontConfig::default();
        config.page.initial_category = "drinks".into();
        let page = Storefront::new(Catalog::default(), config).unwrap();
        assert_eq!(page.filter().active(), &CategorySelection::Tag(Category::new("drinks")));
        assert_eq!(page.menu_view().visible_titles(), vec!["Chapman", "Zobo"]);

        let mut config = StorefrontConfig::default();
        config.page.initial_category = "desserts".into();
        assert!(Storefront::new(Catalog::default(), config).is_err());
    }

    fn menu_box(index: usize, top: f64) -> ElementBox {
        ElementBox {
            target: RevealTarget {
                group: RevealGroup::MenuItem,
                index,
            },
            top,
            height: 300.0,
        }
    }

    #[test]
    fn test_viewport_reveals_once() {
        let mut page = page();
        let layout = vec![menu_box(0, 200.0), menu_box(1, 540.0), menu_box(2, 900.0)];

        let effects = page.handle(PageEvent::Viewport {
            height: 800.0,
            elements: layout.clone(),
        });
        match &effects[..] {
            [PageEffect::Revealed { reveals }] => {
                let indices: Vec<usize> = reveals.iter().map(|r| r.target.index).collect();
                assert_eq!(indices, vec![0, 1]);
                assert_eq!(reveals[0].animation_delay, Duration::from_millis(100));
            }
            other => panic!("unexpected effects {other:?}"),
        }

        // Same layout again: nothing new.
        assert!(page
            .handle(PageEvent::Viewport {
                height: 800.0,
                elements: layout,
            })
            .is_empty());

        // Scrolled down 500 px.
        let effects = page.handle(PageEvent::Viewport {
            height: 800.0,
            elements: vec![menu_box(0, -300.0), menu_box(1, 40.0), menu_box(2, 400.0)],
        });
        assert!(matches!(
            &effects[..],
            [PageEffect::Revealed { reveals }] if reveals.len() == 1 && reveals[0].target.index == 2
        ));
        assert_eq!(page.scroll_reveal().revealed_count(), 3);
    }
}
