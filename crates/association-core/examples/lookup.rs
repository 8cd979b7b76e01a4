use association_core::{
    adapter_fn, Association, Associations, KeyAdapter, Token, ValueValidator,
};
use serde_json::json;
use std::sync::Arc;

struct Order {
    customer: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let adapter: Arc<dyn KeyAdapter> = Arc::new(adapter_fn(|o: &Order| o.customer));

    let tiers = Association::from_parts(
        [("alice", json!("gold")), ("bob", json!(3))],
        Some(adapter.clone()),
        Some(ValueValidator::string()),
    );
    let history = Associations::with_adapter(
        [("alice", vec![120, 80]), ("carol", vec![15])],
        Some(adapter),
    );

    for order in [
        Order { customer: "alice" },
        Order { customer: "bob" },
        Order { customer: "carol" },
    ] {
        let token = Token::object(&order);
        let tier = match tiers.get_or(token, &json!("none")) {
            Ok(tier) => tier.to_string(),
            Err(err) => format!("<{}>", err),
        };
        let totals = history.get_or(token, &[]).unwrap_or_default();
        println!("{}: tier {}, past orders {:?}", order.customer, tier, totals);
    }

    if let Err(err) = tiers.set("dave", json!("silver")) {
        eprintln!("{}", err);
    }
}
