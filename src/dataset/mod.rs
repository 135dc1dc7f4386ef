use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub sales: Vec<u64>,
}

impl Product {
    pub fn new(name: impl Into<String>, sales: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            sales,
        }
    }
}

/// Ordered product list. Row order on the page follows this order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    products: Vec<Product>,
}

impl Dataset {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
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
}

impl From<Vec<Product>> for Dataset {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

/// The built-in sample the page is rendered from.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Product::new("Product A", vec![10, 5, 8]),
        Product::new("Product B", vec![3, 7]),
        Product::new("Product C", vec![5, 5, 5, 5]),
    ])
}
