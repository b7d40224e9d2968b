// ABOUTME: Keyword heuristics that assign a dish category from its name
// ABOUTME: Used when the catalog has no category column or leaves a cell empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Category used when no keyword matches
pub const GENERIC_CATEGORY: &str = "generic";

/// Ordered keyword table; the first matching row wins
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "curry",
        &["dal", "lentil", "sambar", "curry", "paneer", "chicken", "fish", "gravy"],
    ),
    ("rice", &["rice", "biryani", "pulao", "khichdi"]),
    (
        "flatbread",
        &["roti", "chapati", "naan", "paratha", "bread", "toast", "wrap"],
    ),
    ("soup", &["soup", "broth", "rasam"]),
    ("salad", &["salad", "sprouts", "cucumber"]),
    (
        "breakfast_item",
        &["oats", "porridge", "cereal", "muesli", "upma", "poha", "idli", "dosa", "omelette"],
    ),
    (
        "beverage",
        &["milk", "shake", "tea", "coffee", "juice", "lassi", "smoothie"],
    ),
    ("fruit", &["apple", "banana", "fruit", "papaya", "mango", "orange"]),
];

/// Infer a category for a dish name
///
/// ```
/// use mealwise::catalog::infer_category;
///
/// assert_eq!(infer_category("Vegetable Biryani"), "rice");
/// assert_eq!(infer_category("Mystery Dish"), "generic");
/// ```
#[must_use]
pub fn infer_category(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(GENERIC_CATEGORY, |(category, _)| category)
}
