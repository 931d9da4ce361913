//! Built-in page datasets.
//!
//! Hard-coded product data for each listing page. Ids restart at 1 on every
//! page.

use storefront_core::Money;

use crate::product::{Product, ProductId};

const UNSPLASH: &str = "https://images.unsplash.com/";
const CARD_PARAMS: &str = "?auto=format&fit=crop&w=800&q=80";

const KID_SIZES: [&str; 5] = ["3-4Y", "4-5Y", "5-6Y", "6-7Y", "7-8Y"];
const WAIST_SIZES: [&str; 5] = ["28", "30", "32", "34", "36"];
const ONE_SIZE: [&str; 1] = ["One Size"];

fn image(photo: &str) -> String {
    format!("{UNSPLASH}{photo}{CARD_PARAMS}")
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    name: &str,
    dollars: u64,
    photo: &str,
    category: &str,
    description: &str,
    sizes: &[&str],
    in_stock: bool,
) -> Product {
    Product::new(ProductId(id), name, Money::usd(dollars), category)
        .with_image(image(photo))
        .with_description(description)
        .with_sizes(sizes.iter().copied())
        .with_stock(in_stock)
}

pub fn kids() -> Vec<Product> {
    vec![
        item(
            1,
            "Colorful T-Shirt Set",
            39,
            "photo-1519238263530-99bdd11df2ea",
            "Kids",
            "Fun and comfortable t-shirt set perfect for active kids.",
            &KID_SIZES,
            true,
        ),
        item(
            2,
            "Kids Denim Collection",
            49,
            "photo-1519238360324-0fc58c85f8de",
            "Kids",
            "Durable denim pieces designed for everyday adventures.",
            &KID_SIZES,
            true,
        ),
        item(
            3,
            "Party Dress",
            59,
            "photo-1518831959646-742c3a14ebf7",
            "Kids",
            "Elegant party dress for special occasions.",
            &KID_SIZES[..4],
            true,
        ),
        item(
            4,
            "Sports Set",
            45,
            "photo-1519241047957-be31d7379a5d",
            "Kids",
            "Comfortable sports set for active kids.",
            &KID_SIZES[1..],
            true,
        ),
    ]
}

pub fn watches() -> Vec<Product> {
    vec![
        item(
            1,
            "Luxury Chronograph",
            599,
            "photo-1524592094714-0f0654e20314",
            "Watches",
            "Premium chronograph watch with Swiss movement.",
            &ONE_SIZE,
            true,
        ),
        item(
            2,
            "Smart Watch Pro",
            399,
            "photo-1579586337278-3befd40fd17a",
            "Watches",
            "Advanced smartwatch with health monitoring features.",
            &ONE_SIZE,
            true,
        ),
        item(
            3,
            "Classic Gold Watch",
            799,
            "photo-1522312346375-d1a52e2b99b3",
            "Watches",
            "Timeless gold-plated watch with leather strap.",
            &ONE_SIZE,
            false,
        ),
        item(
            4,
            "Minimalist Watch",
            299,
            "photo-1508685096489-7aacd43bd3b1",
            "Watches",
            "Clean, minimalist design with premium materials.",
            &ONE_SIZE,
            true,
        ),
    ]
}

pub fn mens_jackets() -> Vec<Product> {
    vec![
        item(
            1,
            "Leather Bomber Jacket",
            299,
            "photo-1520975954732-35dd22299614",
            "Jackets",
            "Classic leather bomber jacket with premium details.",
            &["S", "M", "L", "XL"],
            true,
        ),
        item(
            2,
            "Denim Jacket",
            149,
            "photo-1495105787522-5334e3ffa0ef",
            "Jackets",
            "Timeless denim jacket with authentic wash.",
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        item(
            3,
            "Wool Blazer",
            249,
            "photo-1507679799987-c73779587ccf",
            "Jackets",
            "Sophisticated wool blazer for formal occasions.",
            &["S", "M", "L"],
            true,
        ),
        item(
            4,
            "Raincoat",
            179,
            "photo-1544736779-4ee183d05e51",
            "Jackets",
            "Waterproof raincoat with modern design.",
            &["M", "L", "XL"],
            false,
        ),
    ]
}

pub fn mens_pants() -> Vec<Product> {
    vec![
        item(
            1,
            "Premium Denim Jeans",
            149,
            "photo-1542272604-787c3835535d",
            "Pants",
            "Premium selvedge denim jeans with perfect fit.",
            &WAIST_SIZES,
            true,
        ),
        item(
            2,
            "Chino Trousers",
            89,
            "photo-1473966968600-fa801b869a1a",
            "Pants",
            "Classic chino trousers for versatile style.",
            &WAIST_SIZES,
            true,
        ),
        item(
            3,
            "Slim Fit Dress Pants",
            119,
            "photo-1594633313593-bab3825d0caf",
            "Pants",
            "Modern slim fit dress pants for formal occasions.",
            &WAIST_SIZES[1..],
            true,
        ),
        item(
            4,
            "Cargo Pants",
            99,
            "photo-1517438476312-10d79c077509",
            "Pants",
            "Functional cargo pants with multiple pockets.",
            &WAIST_SIZES[1..4],
            false,
        ),
    ]
}

pub fn mens_shirts() -> Vec<Product> {
    vec![
        item(
            1,
            "Classic Oxford Shirt",
            89,
            "photo-1602810318383-e386cc2a3ccf",
            "Shirts",
            "A timeless Oxford shirt crafted from premium cotton, perfect for both casual and formal occasions.",
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        item(
            2,
            "Linen Summer Shirt",
            69,
            "photo-1489987707025-afc232f7ea0f",
            "Shirts",
            "Breathable linen shirt perfect for summer days.",
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        item(
            3,
            "Denim Work Shirt",
            79,
            "photo-1588359348347-9bc6cbbb689e",
            "Shirts",
            "Rugged denim work shirt with authentic details.",
            &["S", "M", "L", "XL"],
            true,
        ),
        item(
            4,
            "Striped Cotton Shirt",
            59,
            "photo-1596755094514-f87e34085b2c",
            "Shirts",
            "Classic striped cotton shirt for a refined casual look.",
            &["XS", "S", "M", "L"],
            false,
        ),
    ]
}

/// Home page "Trending Products" strip; mixes departments.
pub fn trending() -> Vec<Product> {
    vec![
        item(
            1,
            "Classic Oxford Shirt",
            89,
            "photo-1602810318383-e386cc2a3ccf",
            "Men",
            "A timeless Oxford shirt crafted from premium cotton, perfect for both casual and formal occasions.",
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        item(
            2,
            "Floral Summer Dress",
            129,
            "photo-1572804013309-59a88b7e92f1",
            "Women",
            "Light and airy floral dress, ideal for summer days and special occasions.",
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        item(
            3,
            "Kids Denim Collection",
            79,
            "photo-1519238263530-99bdd11df2ea",
            "Kids",
            "Durable and stylish denim pieces designed for active kids.",
            &KID_SIZES,
            true,
        ),
        item(
            4,
            "Luxury Chronograph Watch",
            599,
            "photo-1524592094714-0f0654e20314",
            "Watches",
            "Premium chronograph watch featuring Swiss movement and sapphire crystal.",
            &ONE_SIZE,
            false,
        ),
        item(
            5,
            "Designer Handbag",
            299,
            "photo-1584917865442-de89df76afd3",
            "Women",
            "Elegant designer handbag made from genuine leather with gold-tone hardware.",
            &ONE_SIZE,
            true,
        ),
        item(
            6,
            "Premium Denim Jeans",
            149,
            "photo-1542272604-787c3835535d",
            "Men",
            "Premium selvedge denim jeans with a perfect slim fit and exceptional durability.",
            &WAIST_SIZES,
            true,
        ),
        item(
            7,
            "Kids Party Dress",
            89,
            "photo-1518831959646-742c3a14ebf7",
            "Kids",
            "Charming party dress for special occasions, featuring delicate details and comfortable fit.",
            &KID_SIZES,
            true,
        ),
        item(
            8,
            "Smart Watch Pro",
            399,
            "photo-1579586337278-3befd40fd17a",
            "Watches",
            "Advanced smartwatch with health monitoring features and premium build quality.",
            &ONE_SIZE,
            true,
        ),
    ]
}
