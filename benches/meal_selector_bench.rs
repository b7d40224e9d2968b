// ABOUTME: Criterion benchmarks for profile analysis and weekly meal selection
// ABOUTME: Measures the greedy selector against the bundled and synthetic catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Criterion benchmarks for the planning pipeline.
//!
//! Each pick ranks the whole catalog and sorts what is left for the day, so the
//! selector is O(days x items-per-day x catalog log catalog) and the synthetic
//! catalogs show how it scales with catalog size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealwise::catalog::FoodCatalog;
use mealwise::config::PlannerConfig;
use mealwise::intelligence::{analyze_profile, select_meal_plan};
use mealwise::models::{
    ActivityLevel, DietTag, DietaryPreference, FoodItem, Gender, Goal, MealType, UserProfile,
};

const SAMPLE_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/food_catalog.csv");

fn reference_profile(preference: DietaryPreference) -> UserProfile {
    UserProfile::new(
        30,
        175.0,
        70.0,
        Gender::Male,
        ActivityLevel::ModeratelyActive,
        preference,
        Goal::Maintenance,
    )
}

/// Deterministic catalog of `count` items between 40 and 700 kcal
#[allow(clippy::cast_precision_loss)]
fn synthetic_catalog(count: usize) -> Vec<Arc<FoodItem>> {
    const MEALS: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    (0..count)
        .map(|index| {
            let calories = 40.0 + ((index * 37) % 660) as f64;
            Arc::new(FoodItem {
                name: format!("Dish {index}"),
                category: "generic".to_owned(),
                calories,
                protein_g: calories * 0.25 / 4.0,
                carbs_g: calories * 0.5 / 4.0,
                fat_g: calories * 0.25 / 9.0,
                diet: if index % 3 == 0 { DietTag::NonVeg } else { DietTag::Veg },
                meal_type: Some(MEALS[index % MEALS.len()]),
            })
        })
        .collect()
}

fn bench_analyze_profile(c: &mut Criterion) {
    let config = PlannerConfig::default();
    let profile = reference_profile(DietaryPreference::Veg);

    c.bench_function("analyze_profile", |b| {
        b.iter(|| analyze_profile(black_box(&profile), &config.nutrition));
    });
}

fn bench_weekly_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_plan");
    let config = PlannerConfig::default();
    let Ok(catalog) = FoodCatalog::load_from_path(SAMPLE_CATALOG_PATH) else {
        return;
    };

    for preference in [DietaryPreference::Veg, DietaryPreference::NonVeg] {
        let profile = reference_profile(preference);
        let Ok(analysis) = analyze_profile(&profile, &config.nutrition) else {
            continue;
        };

        group.bench_with_input(
            BenchmarkId::new("sample_catalog", preference),
            &analysis.targets,
            |b, targets| {
                b.iter(|| {
                    select_meal_plan(
                        black_box(targets),
                        preference,
                        catalog.items(),
                        &config.selection,
                    )
                });
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_catalog_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_scaling");
    let config = PlannerConfig::default();
    let Ok(analysis) = analyze_profile(
        &reference_profile(DietaryPreference::NonVeg),
        &config.nutrition,
    ) else {
        return;
    };

    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                select_meal_plan(
                    black_box(&analysis.targets),
                    DietaryPreference::NonVeg,
                    catalog,
                    &config.selection,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_analyze_profile,
    bench_weekly_plan,
    bench_catalog_scaling
);
criterion_main!(benches);
