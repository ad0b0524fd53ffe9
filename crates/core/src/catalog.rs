use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};

/// Seed catalog shipped with every fresh session.
struct ProductSeed {
    id: &'static str,
    name: &'static str,
    unit_price: i64,
}

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed { id: "prod-tomato-paste", name: "Tomato Paste", unit_price: 4 },
    ProductSeed { id: "prod-soy-milk", name: "Soy Milk", unit_price: 8 },
    ProductSeed { id: "prod-coconut", name: "Coconut", unit_price: 7 },
    ProductSeed { id: "prod-carrot", name: "Carrot", unit_price: 1 },
    ProductSeed { id: "prod-cupcake", name: "Cupcake", unit_price: 2 },
];

/// The product collection. Insertion order is display order; no re-sorting
/// ever happens. Ids are unique across the collection (seed ids are distinct
/// slugs, generated ids are process-unique).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seed() -> Self {
        Self::new(
            PRODUCT_SEEDS
                .iter()
                .map(|seed| {
                    Product::new(
                        ProductId(seed.id.to_string()),
                        seed.name,
                        Decimal::from(seed.unit_price),
                    )
                })
                .collect(),
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Flip the `selected` flag of the matching product, leaving every other
    /// product untouched. Returns a new collection so that consumers holding
    /// the previous snapshot are unaffected. An unknown id produces a
    /// collection equal to this one; no error is surfaced.
    pub fn toggle_selection(&self, product_id: &ProductId) -> Catalog {
        Catalog {
            products: self
                .products
                .iter()
                .cloned()
                .map(|mut product| {
                    if &product.id == product_id {
                        product.selected = !product.selected;
                    }
                    product
                })
                .collect(),
        }
    }

    /// Add a product at the end of the collection. Uniqueness is carried by
    /// id generation; no re-check happens here.
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }
}
