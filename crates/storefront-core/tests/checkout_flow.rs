//! End-to-end checkout through the page model.

use percent_encoding::percent_decode_str;
use storefront_core::{LineAction, PageEffect, PageEvent, Storefront, StorefrontConfig};
use storefront_types::Catalog;

fn storefront() -> Storefront {
    let mut page = Storefront::new(Catalog::default(), StorefrontConfig::default()).unwrap();
    page.init();
    page
}

#[test]
fn empty_checkout_warns_and_changes_nothing() {
    let mut page = storefront();
    let before = page.cart_view().clone();

    let effects = page.handle(PageEvent::Checkout);

    assert_eq!(
        effects,
        vec![PageEffect::Alert {
            message: "Your cart is empty!".into()
        }]
    );
    assert!(!effects
        .iter()
        .any(|e| matches!(e, PageEffect::OpenExternal { .. })));
    assert_eq!(page.cart_view(), &before);
    assert!(page.last_checkout().is_none());
}

#[test]
fn jollof_checkout_then_render_is_empty() {
    let mut page = storefront();
    page.handle(PageEvent::AddToCart { item: 0 });
    page.handle(PageEvent::Line {
        action: LineAction::Increment,
        index: 0,
    });
    assert_eq!(page.cart().lines()[0].title, "Jollof Rice");
    assert_eq!(page.cart().lines()[0].quantity, 2);

    let effects = page.handle(PageEvent::Checkout);

    let url = effects
        .iter()
        .find_map(|e| match e {
            PageEffect::OpenExternal { url, .. } => Some(url.clone()),
            _ => None,
        })
        .unwrap();
    let text = percent_decode_str(url.split_once("?text=").unwrap().1)
        .decode_utf8()
        .unwrap();
    assert_eq!(
        text,
        "Hello Cilla Bites! I would like to place an order:\n\n\
         • Jollof Rice - Quantity: 2\n\
         \nTotal: ₦7,000\n\n\
         Please contact me to finalize my order. Thank you!"
    );

    assert!(page.cart().is_empty());
    let view = page.cart_view();
    assert_eq!(view.count, 0);
    assert_eq!(view.total_text, "₦0");
    assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty"));
}

#[test]
fn duplicate_adds_list_twice_in_message() {
    let mut page = storefront();
    page.handle(PageEvent::AddToCart { item: 8 });
    page.handle(PageEvent::AddToCart { item: 8 });
    page.handle(PageEvent::Checkout);

    let message = &page.last_checkout().unwrap().message;
    assert_eq!(message.matches("• Zobo - Quantity: 1").count(), 2);
    assert!(message.contains("Total: ₦1,600"));
}

#[test]
fn custom_destination_is_used() {
    let mut config = StorefrontConfig::default();
    config.checkout.destination = "2348000000001".into();
    let mut page = Storefront::new(Catalog::default(), config).unwrap();

    page.handle(PageEvent::AddToCart { item: 9 });
    let effects = page.handle(PageEvent::Checkout);
    assert!(matches!(
        &effects[0],
        PageEffect::OpenExternal { url, .. } if url.starts_with("https://wa.me/2348000000001?text=")
    ));
    assert!(page.last_checkout().unwrap().message.contains("₦120,000"));
}
