//! Demo catalog seeding.

use catalog_lib::{InMemoryProductRepository, Product, ProductRepository};
use chrono::{Days, NaiveDate, Utc};

fn product(id: &str, name: &str, description: &str, release: NaiveDate) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        logo: format!("https://cdn.example.com/logos/{id}.png"),
        date_release: release,
        date_revision: Product::revision_for(release).unwrap_or(release),
    }
}

/// Builds an in-memory repository pre-loaded with a demo product catalog.
/// Release dates are spread over the coming year so they pass validation
/// regardless of when the demo runs.
pub async fn demo_repository() -> InMemoryProductRepository {
    let repo = InMemoryProductRepository::new();
    let today = Utc::now().date_naive();

    let entries: [(&str, &str, &str); 12] = [
        ("visa-gold", "Visa Gold", "Mid-tier credit card with travel insurance"),
        ("visa-plat", "Visa Platinum", "Premium credit card with lounge access"),
        ("amex-green", "Amex Green", "Entry charge card with rewards points"),
        ("amex-black", "Amex Centurion", "Invitation-only charge card"),
        ("mc-world", "Mastercard World", "International card with concierge service"),
        ("debit-base", "Debit Basic", "No-fee debit card for everyday payments"),
        ("save-plus", "Savings Plus", "High-yield savings account product"),
        ("loan-auto", "Auto Loan", "Fixed-rate vehicle financing product"),
        ("loan-home", "Home Mortgage", "Long-term mortgage with flexible terms"),
        ("fund-idx", "Index Fund", "Low-cost diversified index fund"),
        ("ins-life", "Life Insurance", "Term life insurance with level premiums"),
        ("ins-home", "Home Insurance", "Property coverage with flood protection"),
    ];

    for (i, (id, name, description)) in entries.into_iter().enumerate() {
        let release = today
            .checked_add_days(Days::new(30 * i as u64))
            .unwrap_or(today);
        if let Err(e) = repo.create(product(id, name, description, release)).await {
            log::warn!("[seed] skipping {id}: {e}");
        }
    }

    repo
}
