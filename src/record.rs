//! Record shape and field addressing for the catalog.

use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// A stored car listing.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `price` holds digits only at rest; grouping belongs to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub brand: String,
    pub price: String,
}

/// The two caller-editable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Brand,
    Price,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Price => "price",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "brand" => Ok(Field::Brand),
            "price" => Ok(Field::Price),
            other => Err(Error::InvalidField(other.to_string())),
        }
    }
}

/// A validated listing ready for insertion.
///
/// Construction rejects empty brands and non-numeric prices, and strips
/// whitespace grouping from the price so the stored value is digits only.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub brand: String,
    pub price: String,
}

impl NewListing {
    pub fn new(brand: &str, price: &str) -> Result<Self> {
        let brand = brand.trim();
        if brand.is_empty() {
            return Err(Error::InvalidListing("brand must not be empty".to_string()));
        }

        let stripped: String = price.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidListing(format!("price '{price}' is not numeric")));
        }

        Ok(Self {
            brand: brand.to_string(),
            price: stripped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_listing_strips_grouping() {
        let listing = NewListing::new("Honda", "25 000").unwrap();
        assert_eq!(listing.brand, "Honda");
        assert_eq!(listing.price, "25000");
    }

    #[test]
    fn test_new_listing_rejects_empty_brand() {
        assert!(NewListing::new("", "25000").is_err());
        assert!(NewListing::new("   ", "25000").is_err());
    }

    #[test]
    fn test_new_listing_rejects_non_numeric_price() {
        assert!(NewListing::new("Honda", "cheap").is_err());
        assert!(NewListing::new("Honda", "25k").is_err());
        assert!(NewListing::new("Honda", "").is_err());
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("brand".parse::<Field>().unwrap(), Field::Brand);
        assert_eq!("Price".parse::<Field>().unwrap(), Field::Price);
        assert!("colour".parse::<Field>().is_err());
        assert_eq!(Field::Brand.as_str(), "brand");
    }
}
