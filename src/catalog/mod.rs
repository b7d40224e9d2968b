// ABOUTME: Food catalog loading from CSV with header aliases and fail-fast row validation
// ABOUTME: Holds the shared read-only list of FoodItems used by every planning request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Food Catalog
//!
//! The catalog is read once at startup and shared behind `Arc`.
//!
//! ## Accepted columns
//!
//! Headers are trimmed and compared case-insensitively.
//!
//! | Field      | Aliases                                 | Required |
//! |------------|-----------------------------------------|----------|
//! | name       | `food_item`, `food`, `name`             | yes      |
//! | calories   | `calories`, `kcal`                      | yes      |
//! | protein    | `protein_g`, `protein`                  | yes      |
//! | carbs      | `carbs_g`, `carbohydrates_g`, `carbs`   | yes      |
//! | fat        | `fat_g`, `fats`, `fat`                  | yes      |
//! | diet       | `diet`, `veg_nonveg`, `type`            | yes      |
//! | meal       | `meal`, `meal_time`                     | no       |
//! | category   | `category`                              | no       |
//!
//! A row with a missing required value, an unparsable or negative number, or
//! an unknown diet tag aborts loading with `CatalogError::MalformedRow`.

mod categorize;

pub use categorize::{infer_category, GENERIC_CATEGORY};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::errors::CatalogError;
use crate::models::{DietTag, FoodItem, MealType};

const NAME_ALIASES: &[&str] = &["food_item", "food", "name"];
const CALORIE_ALIASES: &[&str] = &["calories", "kcal"];
const PROTEIN_ALIASES: &[&str] = &["protein_g", "protein"];
const CARB_ALIASES: &[&str] = &["carbs_g", "carbohydrates_g", "carbs"];
const FAT_ALIASES: &[&str] = &["fat_g", "fats", "fat"];
const DIET_ALIASES: &[&str] = &["diet", "veg_nonveg", "type"];
const MEAL_ALIASES: &[&str] = &["meal", "meal_time"];
const CATEGORY_ALIASES: &[&str] = &["category"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    calories: usize,
    protein: usize,
    carbs: usize,
    fat: usize,
    diet: usize,
    meal: Option<usize>,
    category: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();

        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|header| header == alias))
        };
        let require = |column: &'static str, aliases: &[&str]| {
            find(aliases).ok_or(CatalogError::MissingColumn { column })
        };

        Ok(Self {
            name: require("food_item", NAME_ALIASES)?,
            calories: require("calories", CALORIE_ALIASES)?,
            protein: require("protein_g", PROTEIN_ALIASES)?,
            carbs: require("carbs_g", CARB_ALIASES)?,
            fat: require("fat_g", FAT_ALIASES)?,
            diet: require("diet", DIET_ALIASES)?,
            meal: find(MEAL_ALIASES),
            category: find(CATEGORY_ALIASES),
        })
    }
}

/// Immutable list of food items shared by all planning requests
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<Arc<FoodItem>>,
    source: Option<PathBuf>,
}

impl FoodCatalog {
    /// Build a catalog from in-memory items
    #[must_use]
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
            source: None,
        }
    }

    /// Load a catalog from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be opened, otherwise any
    /// error from [`FoodCatalog::from_reader`]
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());

        info!(items = catalog.len(), "Food catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` for an incomplete header, `MalformedRow` for the
    /// first invalid data row, or `Csv` if the input is not valid CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CatalogError::Csv(e.to_string()))?
            .clone();
        let columns = ColumnMap::from_headers(&headers)?;
        if columns.category.is_none() {
            debug!("Catalog has no category column, inferring categories from names");
        }

        let mut items = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| CatalogError::Csv(e.to_string()))?;
            let line = record.position().map_or(0, csv::Position::line);
            items.push(Arc::new(parse_row(&record, &columns, line)?));
        }

        Ok(Self {
            items,
            source: None,
        })
    }

    /// All items in file order
    #[must_use]
    pub fn items(&self) -> &[Arc<FoodItem>] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// File the catalog was loaded from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Item counts per diet tag, category and meal slot
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            total: self.items.len(),
            ..CatalogSummary::default()
        };

        for item in &self.items {
            match item.diet {
                DietTag::Veg => summary.veg += 1,
                DietTag::NonVeg => summary.non_veg += 1,
            }
            *summary.by_category.entry(item.category.clone()).or_default() += 1;
            let meal = item
                .meal_type
                .map_or_else(|| "Any".to_owned(), |meal| meal.to_string());
            *summary.by_meal_type.entry(meal).or_default() += 1;
        }

        summary
    }
}

/// Aggregate counts describing a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Total number of items
    pub total: usize,
    /// Vegetarian items
    pub veg: usize,
    /// Non-vegetarian items
    pub non_veg: usize,
    /// Items per category
    pub by_category: BTreeMap<String, usize>,
    /// Items per meal slot ("Any" when untyped)
    pub by_meal_type: BTreeMap<String, usize>,
}

fn parse_row(record: &StringRecord, columns: &ColumnMap, line: u64) -> Result<FoodItem, CatalogError> {
    let name = required_cell(record, columns.name, "food_item", line)?.to_owned();

    let diet_cell = required_cell(record, columns.diet, "diet", line)?;
    let diet = DietTag::parse_lossy(diet_cell)
        .ok_or_else(|| CatalogError::malformed_row(line, format!("unknown diet tag '{diet_cell}'")))?;

    let meal_type = columns
        .meal
        .and_then(|index| record.get(index))
        .filter(|cell| !cell.is_empty())
        .and_then(|cell| {
            let parsed = MealType::from_str_lossy(cell);
            if parsed.is_none() {
                debug!(line, meal = cell, "Unknown meal slot, item usable at any meal");
            }
            parsed
        });

    let category = columns
        .category
        .and_then(|index| record.get(index))
        .filter(|cell| !cell.is_empty())
        .map_or_else(|| infer_category(&name).to_owned(), str::to_lowercase);

    Ok(FoodItem {
        calories: number_cell(record, columns.calories, "calories", line)?,
        protein_g: number_cell(record, columns.protein, "protein_g", line)?,
        carbs_g: number_cell(record, columns.carbs, "carbs_g", line)?,
        fat_g: number_cell(record, columns.fat, "fat_g", line)?,
        name,
        category,
        diet,
        meal_type,
    })
}

fn required_cell<'r>(
    record: &'r StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<&'r str, CatalogError> {
    record
        .get(index)
        .filter(|cell| !cell.is_empty())
        .ok_or_else(|| CatalogError::malformed_row(line, format!("missing value for '{column}'")))
}

fn number_cell(record: &StringRecord, index: usize, column: &str, line: u64) -> Result<f64, CatalogError> {
    let cell = required_cell(record, index, column, line)?;
    let value: f64 = cell.parse().map_err(|_| {
        CatalogError::malformed_row(line, format!("'{column}' is not a number: '{cell}'"))
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::malformed_row(
            line,
            format!("'{column}' must be a non-negative number, got {value}"),
        ));
    }
    Ok(value)
}
