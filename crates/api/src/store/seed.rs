//! Startup catalog sample.
//!
//! The store begins with eight products and four categories so a fresh
//! deployment serves a browsable shop without any admin work.

use rust_decimal::Decimal;

use copperleaf_core::{Category, CategoryId, Product, ProductId};

pub fn products() -> Vec<Product> {
    fn product(
        id: i64,
        title: &str,
        description: &str,
        cents: i64,
        image: &str,
        category: &str,
        rating_tenths: i64,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            price: Decimal::new(cents, 2),
            image: image.to_string(),
            category: category.to_string(),
            rating: Decimal::new(rating_tenths, 1),
            in_stock: true,
        }
    }

    vec![
        product(
            1,
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and premium sound quality. Perfect for music lovers and professionals.",
            29999,
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Electronics",
            48,
        ),
        product(
            2,
            "Organic Coffee Beans",
            "Premium organic coffee beans sourced from sustainable farms. Rich flavor and aromatic blend for the perfect morning brew.",
            2499,
            "https://images.pexels.com/photos/894695/pexels-photo-894695.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Food & Beverages",
            46,
        ),
        product(
            3,
            "Minimalist Desk Lamp",
            "Modern LED desk lamp with adjustable brightness and sleek design. Perfect for home office or study spaces.",
            8999,
            "https://images.pexels.com/photos/1166644/pexels-photo-1166644.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Home & Garden",
            47,
        ),
        product(
            4,
            "Vintage Leather Wallet",
            "Handcrafted leather wallet with multiple compartments and timeless design. Made from premium genuine leather.",
            7999,
            "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Fashion",
            49,
        ),
        product(
            5,
            "Ceramic Plant Pot Set",
            "Beautiful set of ceramic plant pots in various sizes. Perfect for indoor plants and modern home decoration.",
            4999,
            "https://images.pexels.com/photos/1005058/pexels-photo-1005058.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Home & Garden",
            45,
        ),
        product(
            6,
            "Artisan Chocolate Gift Box",
            "Luxury chocolate gift box with artisan chocolates made from finest ingredients. Perfect for special occasions.",
            3999,
            "https://images.pexels.com/photos/918327/pexels-photo-918327.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Food & Beverages",
            48,
        ),
        product(
            7,
            "Smart Fitness Watch",
            "Advanced fitness tracker with heart rate monitoring, GPS, and smartphone connectivity. Track your health goals.",
            19999,
            "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Electronics",
            44,
        ),
        product(
            8,
            "Bamboo Kitchen Utensil Set",
            "Eco-friendly bamboo kitchen utensil set with modern design. Sustainable and durable for everyday cooking.",
            3499,
            "https://images.pexels.com/photos/1143754/pexels-photo-1143754.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Home & Garden",
            46,
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    fn category(id: i64, name: &str, image: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            image: Some(image.to_string()),
        }
    }

    vec![
        category(
            1,
            "Electronics",
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        category(
            2,
            "Food & Beverages",
            "https://images.pexels.com/photos/894695/pexels-photo-894695.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        category(
            3,
            "Home & Garden",
            "https://images.pexels.com/photos/1166644/pexels-photo-1166644.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        category(
            4,
            "Fashion",
            "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_dense_from_one() {
        let ids: Vec<i64> = products().iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_categories_cover_product_categories() {
        let names: HashSet<String> = categories().into_iter().map(|c| c.name).collect();
        assert!(products().iter().all(|p| names.contains(&p.category)));
    }
}
