use serde::{Deserialize, Serialize};

use crate::engine::errors::AggregateError;

/// Sales region dimension. The label tables are owned here as immutable
/// constants; there is no ambient registry to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const COUNT: usize = 4;
    pub const ALL: [Region; Region::COUNT] =
        [Region::North, Region::South, Region::East, Region::West];

    pub fn from_label(label: &str) -> Option<Region> {
        match label {
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            "East" => Some(Region::East),
            "West" => Some(Region::West),
            _ => None,
        }
    }

    /// Fallible lookup carrying enough context to locate the bad record.
    pub fn resolve(label: &str, index: usize) -> Result<Region, AggregateError> {
        Region::from_label(label).ok_or_else(|| AggregateError::UnknownRegion {
            value: label.to_string(),
            index,
        })
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Product dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    Laptop,
    Phone,
    Tablet,
    Monitor,
    Keyboard,
}

impl Product {
    pub const COUNT: usize = 5;
    pub const ALL: [Product; Product::COUNT] = [
        Product::Laptop,
        Product::Phone,
        Product::Tablet,
        Product::Monitor,
        Product::Keyboard,
    ];

    pub fn from_label(label: &str) -> Option<Product> {
        match label {
            "Laptop" => Some(Product::Laptop),
            "Phone" => Some(Product::Phone),
            "Tablet" => Some(Product::Tablet),
            "Monitor" => Some(Product::Monitor),
            "Keyboard" => Some(Product::Keyboard),
            _ => None,
        }
    }

    pub fn resolve(label: &str, index: usize) -> Result<Product, AggregateError> {
        Product::from_label(label).ok_or_else(|| AggregateError::UnknownProduct {
            value: label.to_string(),
            index,
        })
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Product::Laptop => "Laptop",
            Product::Phone => "Phone",
            Product::Tablet => "Tablet",
            Product::Monitor => "Monitor",
            Product::Keyboard => "Keyboard",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Flat slot address for the dense grouping arena: one slot per
/// (region, product) combination, products varying fastest.
#[inline]
pub fn slot_index(region: Region, product: Product) -> usize {
    region.index() * Product::COUNT + product.index()
}
