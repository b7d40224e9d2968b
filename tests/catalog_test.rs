// ABOUTME: Integration tests for food catalog CSV loading
// ABOUTME: Covers header aliases, fail-fast row validation, category inference and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;

use common::{sample_catalog, SAMPLE_CATALOG_PATH};
use mealwise::catalog::FoodCatalog;
use mealwise::errors::{AppError, CatalogError, ErrorCode};
use mealwise::models::{DietTag, MealType};
use tempfile::NamedTempFile;

fn parse(csv: &str) -> Result<FoodCatalog, CatalogError> {
    FoodCatalog::from_reader(csv.as_bytes())
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();

    assert_eq!(catalog.len(), 90);
    assert!(!catalog.is_empty());
    assert_eq!(
        catalog.source().and_then(|path| path.to_str()),
        Some(SAMPLE_CATALOG_PATH)
    );

    let first = &catalog.items()[0];
    assert_eq!(first.name, "Vegetable Poha");
    assert!((first.calories - 276.0).abs() < f64::EPSILON);
    assert_eq!(first.diet, DietTag::Veg);
    assert_eq!(first.meal_type, Some(MealType::Breakfast));
}

#[test]
fn test_sample_catalog_summary() {
    let summary = sample_catalog().summary();

    assert_eq!(summary.total, 90);
    assert_eq!(summary.veg, 65);
    assert_eq!(summary.non_veg, 25);
    assert_eq!(summary.by_meal_type.get("Lunch"), Some(&28));
    assert_eq!(summary.by_meal_type.get("Breakfast"), Some(&26));
    assert_eq!(summary.by_meal_type.get("Dinner"), Some(&25));
    assert_eq!(summary.by_meal_type.get("Snack"), Some(&11));
    assert_eq!(summary.by_category.values().sum::<usize>(), 90);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "food_item,calories,protein_g,carbs_g,fat_g,diet").unwrap();
    writeln!(file, "Dal Tadka,180,9,22,6,veg").unwrap();
    writeln!(file, "Fish Curry,320,28,8,20,non-veg").unwrap();

    let catalog = FoodCatalog::load_from_path(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.source(), Some(file.path()));
    assert_eq!(catalog.items()[1].diet, DietTag::NonVeg);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FoodCatalog::load_from_path("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::StorageError);
}

#[test]
fn test_header_aliases_are_case_insensitive() {
    let catalog = parse(
        " Food , KCAL,Protein,Carbohydrates_g,FATS,Veg_NonVeg,Meal_Time\n\
         Egg Curry,310,18,9,22,Non Veg,Dinner\n\
         Poha,250,5,45,6,Vegetarian,\n",
    )
    .unwrap();

    let items = catalog.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Egg Curry");
    assert!((items[0].protein_g - 18.0).abs() < f64::EPSILON);
    assert_eq!(items[0].diet, DietTag::NonVeg);
    assert_eq!(items[0].meal_type, Some(MealType::Dinner));
    assert_eq!(items[1].diet, DietTag::Veg);
    assert_eq!(items[1].meal_type, None);
}

#[test]
fn test_missing_required_column() {
    let err = parse("food_item,calories,protein_g,carbs_g,diet\nPoha,250,5,45,veg\n").unwrap_err();

    assert!(matches!(err, CatalogError::MissingColumn { column: "fat_g" }));
}

#[test]
fn test_malformed_row_reports_line_number() {
    let err = parse(
        "food_item,calories,protein_g,carbs_g,fat_g,diet\n\
         Poha,250,5,45,6,veg\n\
         Upma,lots,6,40,8,veg\n",
    )
    .unwrap_err();

    match err {
        CatalogError::MalformedRow { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("calories"), "{reason}");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn test_negative_and_missing_values_are_rejected() {
    let negative = parse("food_item,calories,protein_g,carbs_g,fat_g,diet\nPoha,250,-5,45,6,veg\n")
        .unwrap_err();
    assert!(
        matches!(&negative, CatalogError::MalformedRow { line: 2, reason } if reason.contains("non-negative"))
    );

    let blank = parse("food_item,calories,protein_g,carbs_g,fat_g,diet\n,250,5,45,6,veg\n").unwrap_err();
    assert!(
        matches!(&blank, CatalogError::MalformedRow { line: 2, reason } if reason.contains("missing value"))
    );

    let short = parse("food_item,calories,protein_g,carbs_g,fat_g,diet\nPoha,250,5\n").unwrap_err();
    assert!(matches!(short, CatalogError::MalformedRow { line: 2, .. }));
}

#[test]
fn test_unknown_diet_tag_is_rejected() {
    let err = parse("food_item,calories,protein_g,carbs_g,fat_g,diet\nPoha,250,5,45,6,pescatarian\n")
        .unwrap_err();

    assert!(err.to_string().contains("unknown diet tag 'pescatarian'"));
}

#[test]
fn test_unknown_meal_means_any_meal() {
    let catalog = parse(
        "food_item,calories,protein_g,carbs_g,fat_g,diet,meal\n\
         Masala Chai,120,3,15,5,veg,teatime\n",
    )
    .unwrap();

    assert_eq!(catalog.items()[0].meal_type, None);
    assert_eq!(catalog.summary().by_meal_type.get("Any"), Some(&1));
}

#[test]
fn test_category_column_or_inference() {
    let with_column = parse(
        "food_item,calories,protein_g,carbs_g,fat_g,diet,category\n\
         Jeera Rice,210,4,40,4,veg,Staple\n\
         Tomato Soup,90,2,14,3,veg,\n",
    )
    .unwrap();
    assert_eq!(with_column.items()[0].category, "staple");
    assert_eq!(with_column.items()[1].category, "soup");

    let inferred = parse(
        "food_item,calories,protein_g,carbs_g,fat_g,diet\n\
         Paneer Fried Rice,420,14,60,14,veg\n\
         Mystery Box,300,10,30,10,veg\n",
    )
    .unwrap();
    assert_eq!(inferred.items()[0].category, "curry");
    assert_eq!(inferred.items()[1].category, mealwise::catalog::GENERIC_CATEGORY);
}

#[test]
fn test_header_only_catalog_is_empty() {
    let catalog = parse("food_item,calories,protein_g,carbs_g,fat_g,diet\n").unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.summary().total, 0);
}
