//! # Catalog
//!
//! The shop's price list: every garment, per category, with the price of
//! each cleaning service it is offered with.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog::default()  ─┐                                                 │
//! │  Catalog::from_toml() ├──► validate ──► Catalog (immutable)             │
//! │  Catalog::from_json() ┘                     │                           │
//! │                                             ├──► intake lookups          │
//! │                                             └──► longest_name() ──► tags │
//! │                                                                         │
//! │  Loaded once at startup, passed by reference, never mutated.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A service that is not offered is an absent price (`None`), never `0.00`.
//!
//! ## File Format
//! ```toml
//! [[ladies]]
//! name = "Eve Dress"
//! prices = { specialist = "21.00" }
//!
//! [[gentlemen]]
//! name = "Coat"
//! prices = { standard = "9.95", specialist = "13.93" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{optional_amount, Money};
use crate::types::{Category, OrderLine, Service};
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Entries
// =============================================================================

/// Prices of the two services for one garment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrices {
    #[serde(default, with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub standard: Option<Money>,
    #[serde(default, with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub specialist: Option<Money>,
}

impl ServicePrices {
    pub const fn new(standard: Option<Money>, specialist: Option<Money>) -> Self {
        ServicePrices {
            standard,
            specialist,
        }
    }

    /// Price of `service`, or `None` if it is not offered.
    pub fn get(&self, service: Service) -> Option<Money> {
        match service {
            Service::Standard => self.standard,
            Service::Specialist => self.specialist,
        }
    }

    pub fn is_available(&self, service: Service) -> bool {
        self.get(service).is_some()
    }
}

/// One garment on the price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub prices: ServicePrices,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, standard: Option<i64>, specialist: Option<i64>) -> Self {
        CatalogEntry {
            name: name.into(),
            prices: ServicePrices::new(
                standard.map(Money::from_pence),
                specialist.map(Money::from_pence),
            ),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// On-disk shape of a catalog; converted through [`Catalog::new`] so that
/// every loaded catalog is validated.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    gentlemen: Vec<CatalogEntry>,
    #[serde(default)]
    ladies: Vec<CatalogEntry>,
}

/// Immutable, validated price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    gentlemen: Vec<CatalogEntry>,
    ladies: Vec<CatalogEntry>,
    #[serde(skip)]
    longest_name: usize,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Rules
    /// - At least one product overall
    /// - Names are valid and unique (case-insensitively) within a category
    /// - Each product offers at least one service, at a positive price
    pub fn new(gentlemen: Vec<CatalogEntry>, ladies: Vec<CatalogEntry>) -> CoreResult<Self> {
        if gentlemen.is_empty() && ladies.is_empty() {
            return Err(ValidationError::Required {
                field: "catalog products".to_string(),
            }
            .into());
        }

        for entries in [&gentlemen, &ladies] {
            validate_entries(entries)?;
        }

        let longest_name = longest_name_of(&gentlemen, &ladies);

        Ok(Catalog {
            gentlemen,
            ladies,
            longest_name,
        })
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json(contents: &str) -> CoreResult<Self> {
        let file: CatalogFile = serde_json::from_str(contents)?;
        Catalog::new(file.gentlemen, file.ladies)
    }

    /// Parses and validates a TOML catalog.
    pub fn from_toml(contents: &str) -> CoreResult<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Catalog::new(file.gentlemen, file.ladies)
    }

    /// Products of a category, in listing order.
    pub fn products(&self, category: Category) -> &[CatalogEntry] {
        match category {
            Category::Gentlemen => &self.gentlemen,
            Category::Ladies => &self.ladies,
        }
    }

    /// Finds a product by name, ignoring case and surrounding whitespace.
    pub fn lookup(&self, category: Category, name: &str) -> CoreResult<&CatalogEntry> {
        let name = name.trim();
        self.products(category)
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::ProductNotFound {
                category,
                name: name.to_string(),
            })
    }

    /// Resolves the price of a service for a product.
    pub fn price(&self, category: Category, name: &str, service: Service) -> CoreResult<Money> {
        let entry = self.lookup(category, name)?;
        entry
            .prices
            .get(service)
            .ok_or_else(|| CoreError::ServiceUnavailable {
                product: entry.name.clone(),
                service,
            })
    }

    /// Builds a priced order line using the catalog's spelling of the name.
    pub fn order_line(
        &self,
        category: Category,
        name: &str,
        service: Service,
    ) -> CoreResult<OrderLine> {
        let entry = self.lookup(category, name)?;
        let price = self.price(category, &entry.name, service)?;
        Ok(OrderLine {
            name: entry.name.clone(),
            category,
            service,
            price,
        })
    }

    /// Character length of the longest product name across every category.
    ///
    /// Tags are sized from this so that every tag the shop prints has the
    /// same width, whatever the order contains.
    pub fn longest_name(&self) -> usize {
        self.longest_name
    }

    /// Total number of products across categories.
    pub fn len(&self) -> usize {
        self.gentlemen.len() + self.ladies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The shop's standard price list.
impl Default for Catalog {
    fn default() -> Self {
        let ladies = vec![
            CatalogEntry::new("Dress", Some(800), Some(1120)),
            CatalogEntry::new("Eve Dress", None, Some(2100)),
            CatalogEntry::new("2 Pc Suit", Some(1200), Some(1680)),
            CatalogEntry::new("Jacket", Some(750), Some(910)),
            CatalogEntry::new("Shirt", Some(650), Some(910)),
            CatalogEntry::new("Blouse", Some(650), Some(910)),
        ];
        let gentlemen = vec![
            CatalogEntry::new("2 Pc Suit", Some(1200), Some(1680)),
            CatalogEntry::new("2 Pc Eve Suit", None, Some(1680)),
            CatalogEntry::new("Jacket", Some(750), Some(1050)),
            CatalogEntry::new("Trousers", Some(650), Some(910)),
            CatalogEntry::new("Shirt", Some(650), Some(910)),
            CatalogEntry::new("Coat", Some(995), Some(1393)),
        ];

        let longest_name = longest_name_of(&gentlemen, &ladies);

        Catalog {
            gentlemen,
            ladies,
            longest_name,
        }
    }
}

fn longest_name_of(gentlemen: &[CatalogEntry], ladies: &[CatalogEntry]) -> usize {
    gentlemen
        .iter()
        .chain(ladies)
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0)
}

fn validate_entries(entries: &[CatalogEntry]) -> CoreResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        validate_product_name(&entry.name)?;

        let offered = Service::ALL
            .iter()
            .any(|service| entry.prices.is_available(*service));
        if !offered {
            return Err(ValidationError::Required {
                field: format!("price for {}", entry.name),
            }
            .into());
        }
        for price in Service::ALL.iter().filter_map(|service| entry.prices.get(*service)) {
            validate_price(price)?;
        }

        let duplicate = entries[..index]
            .iter()
            .any(|earlier| earlier.name.eq_ignore_ascii_case(&entry.name));
        if duplicate {
            return Err(ValidationError::Duplicate {
                field: "product".to_string(),
                value: entry.name.clone(),
            }
            .into());
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_passes_validation() {
        let default = Catalog::default();
        let rebuilt = Catalog::new(
            default.products(Category::Gentlemen).to_vec(),
            default.products(Category::Ladies).to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, default);
        assert_eq!(default.len(), 12);
    }

    #[test]
    fn test_longest_name_spans_categories() {
        // "2 Pc Eve Suit" only exists for Gentlemen
        assert_eq!(Catalog::default().longest_name(), 13);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::default();
        let entry = catalog.lookup(Category::Ladies, "eve dress").unwrap();
        assert_eq!(entry.name, "Eve Dress");

        assert!(matches!(
            catalog.lookup(Category::Gentlemen, "Dress"),
            Err(CoreError::ProductNotFound { .. })
        ));
    }

    #[test]
    fn test_price_of_unavailable_service() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog
                .price(Category::Ladies, "Eve Dress", Service::Specialist)
                .unwrap(),
            Money::from_pence(2100)
        );
        assert!(matches!(
            catalog.price(Category::Ladies, "Eve Dress", Service::Standard),
            Err(CoreError::ServiceUnavailable { .. })
        ));
    }

    #[test]
    fn test_order_line_uses_catalog_spelling() {
        let catalog = Catalog::default();
        let line = catalog
            .order_line(Category::Gentlemen, "2 PC SUIT", Service::Specialist)
            .unwrap();
        assert_eq!(line.name, "2 Pc Suit");
        assert_eq!(line.price, Money::from_pence(1680));
    }

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(
            r#"
            [[ladies]]
            name = "Ball Gown"
            prices = { specialist = "25.50" }

            [[gentlemen]]
            name = "Tie"
            prices = { standard = "3", specialist = "4.5" }
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.longest_name(), 9);
        assert_eq!(
            catalog.price(Category::Gentlemen, "tie", Service::Specialist).unwrap(),
            Money::from_pence(450)
        );
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"{"ladies":[{"name":"Scarf","prices":{"standard":"2.00"}}]}"#,
        )
        .unwrap();
        assert!(catalog.products(Category::Gentlemen).is_empty());
        assert_eq!(catalog.products(Category::Ladies)[0].name, "Scarf");
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        // Nothing at all
        assert!(Catalog::from_json("{}").is_err());
        // Zero price; unavailable services are left out instead
        assert!(Catalog::from_json(
            r#"{"ladies":[{"name":"Dress","prices":{"standard":"0.00"}}]}"#
        )
        .is_err());
        // No service offered
        assert!(Catalog::from_json(r#"{"ladies":[{"name":"Dress"}]}"#).is_err());
        // Duplicate within a category
        assert!(Catalog::from_json(
            r#"{"ladies":[
                {"name":"Dress","prices":{"standard":"8.00"}},
                {"name":"dress","prices":{"standard":"9.00"}}
            ]}"#
        )
        .is_err());
        // Malformed
        assert!(matches!(
            Catalog::from_toml("[[ladies]\nname="),
            Err(CoreError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_rejects_price_above_limit() {
        let result = Catalog::from_json(
            r#"{"ladies":[{"name":"Gown","prices":{"standard":"92000000000000000.00"}}]}"#,
        );
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::TooLarge { .. }))
        ));

        // The limit itself is still a valid price
        let catalog = Catalog::from_json(
            r#"{"ladies":[{"name":"Gown","prices":{"specialist":"10000.00"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            catalog.price(Category::Ladies, "gown", Service::Specialist).unwrap(),
            Money::from_pence(1_000_000)
        );
    }

    #[test]
    fn test_prices_may_be_bare_numbers() {
        let catalog = Catalog::from_toml(
            r#"
            [[ladies]]
            name = "Dress"
            prices = { standard = 8.00, specialist = 11.2 }

            [[gentlemen]]
            name = "Coat"
            prices = { standard = 10 }
            "#,
        )
        .unwrap();

        assert_eq!(
            catalog.price(Category::Ladies, "Dress", Service::Specialist).unwrap(),
            Money::from_pence(1120)
        );
        assert_eq!(
            catalog.price(Category::Gentlemen, "Coat", Service::Standard).unwrap(),
            Money::from_pence(1000)
        );
    }

    #[test]
    fn test_same_name_in_both_categories_is_allowed() {
        let catalog = Catalog::from_json(
            r#"{
                "ladies":[{"name":"Shirt","prices":{"standard":"6.50"}}],
                "gentlemen":[{"name":"Shirt","prices":{"standard":"6.50"}}]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
