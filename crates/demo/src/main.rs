//! Terminal walkthrough of one storefront session.
//!
//! Plays the role of both the trigger source and the rendering collaborator:
//! a scripted click sequence goes in, badge counts / list orders /
//! notification banners come out on stdout.

use anyhow::Result;
use chrono::Utc;

use furnish_auth::Credentials;
use furnish_catalog::ProductRecord;
use furnish_session::{BadgeCounts, Notification, RenderSink, SessionState, StoreAction};

/// Renders to stdout what the pages would paint into the DOM.
struct TerminalSink;

impl RenderSink for TerminalSink {
    fn badges(&mut self, counts: &BadgeCounts) {
        match serde_json::to_string(counts) {
            Ok(json) => println!("badges   {json}"),
            Err(err) => eprintln!("badges   <unserializable: {err}>"),
        }
    }

    fn product_list(&mut self, products: &[ProductRecord]) {
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        println!("grid     {}", names.join(" | "));
    }

    fn notification(&mut self, notification: &Notification) {
        println!("[{}] {}", notification.kind, notification.message);
    }
}

fn showroom() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Modern Sofa", 650.0, 4.9),
        ProductRecord::new("Wooden Chair", 120.0, 4.5),
        ProductRecord::new("Dining Table", 300.0, 4.8),
        ProductRecord::new("Floor Lamp", 45.0, 4.2),
        ProductRecord::new("Lounge Chair", 210.0, 4.6),
    ]
}

fn main() -> Result<()> {
    furnish_observability::init();

    let mut session = SessionState::new(showroom());
    let mut sink = TerminalSink;
    println!("session  {}", session.id());

    let script = [
        StoreAction::ToggleWishlist("Wooden Chair".into()),
        StoreAction::AddToCart { name: "Floor Lamp".into(), price: 45.0 },
        StoreAction::AddToCart { name: "Floor Lamp".into(), price: 45.0 },
        StoreAction::AddToCompare("Wooden Chair".into()),
        StoreAction::AddToCompare("Lounge Chair".into()),
        StoreAction::AddToCompare("Modern Sofa".into()),
        StoreAction::AddToCompare("Dining Table".into()),
        StoreAction::CompareNow,
        StoreAction::Sort("price-low".into()),
        StoreAction::Filter("chair".into()),
        StoreAction::FilterByMaxPrice(250.0),
        StoreAction::Search("oak desk".into()),
        StoreAction::SubscribeNewsletter("shopper@example.com".into()),
        StoreAction::SubmitLogin(Credentials::new("shopper@example.com", "hunter22")),
    ];

    for action in script {
        session.dispatch(action, Utc::now(), &mut sink);
    }

    Ok(())
}
