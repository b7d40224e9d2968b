// ABOUTME: Human-readable rendering of plans, targets and catalog summaries
// ABOUTME: Prints each day meal by meal and shows the insight source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::path::Path;
use std::sync::Arc;

use mealwise::catalog::CatalogSummary;
use mealwise::models::{
    FoodItem, HealthAnalysis, InsightSource, MacroTargets, PlanResult, UserProfile,
};

/// Display a complete plan result
pub fn display_plan(result: &PlanResult) {
    display_analysis(&result.profile, &result.analysis);

    let plan = &result.plan;
    println!(
        "\n{}-DAY {} PLAN (tolerance ±{:.0} kcal)",
        plan.days.len(),
        plan.dietary_preference.to_string().to_uppercase(),
        plan.tolerance_kcal
    );
    println!("{}", "=".repeat(60));

    for day in &plan.days {
        println!(
            "\nDay {}: {:.0} kcal (target {:.0}) | P {:.0} g  C {:.0} g  F {:.0} g",
            day.day,
            day.totals.calories,
            day.target_calories,
            day.totals.protein_g,
            day.totals.carbs_g,
            day.totals.fat_g
        );
        for meal in &day.meals {
            println!(
                "   {} ({:.0}/{:.0} kcal): {}",
                meal.meal,
                meal.totals.calories,
                meal.target_calories,
                item_list(&meal.items)
            );
        }
    }

    let average = plan.average_totals();
    println!(
        "\nDaily average: {:.0} kcal | P {:.0} g  C {:.0} g  F {:.0} g",
        average.calories, average.protein_g, average.carbs_g, average.fat_g
    );

    println!("\nCOACH'S NOTE");
    println!("{}", "=".repeat(60));
    println!("{}", result.insight.text);
    match &result.insight.source {
        InsightSource::Llm { provider, model } => println!("   (written by {provider} / {model})"),
        InsightSource::Fallback { reason } => println!("   (built-in summary: {reason})"),
    }
    println!(
        "\nGenerated {}",
        result.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Display biometrics and daily targets
pub fn display_analysis(profile: &UserProfile, analysis: &HealthAnalysis) {
    let bio = &analysis.biometrics;
    let who = profile.name.as_deref().unwrap_or("Your");
    let possessive = if profile.name.is_some() { "'s" } else { "" };

    println!("{who}{possessive} targets ({}, {})", profile.goal, profile.activity_level);
    println!("{}", "=".repeat(60));
    println!("   BMI:  {:.1} ({})", bio.bmi, bio.bmi_category);
    println!("   BMR:  {:.0} kcal/day", bio.bmr);
    println!("   TDEE: {:.0} kcal/day", bio.tdee);
    display_targets(&analysis.targets);
}

fn display_targets(targets: &MacroTargets) {
    println!("   Target: {:.0} kcal/day", targets.calories);
    println!(
        "   Macros: {:.0} g protein | {:.0} g carbs | {:.0} g fat",
        targets.protein_g, targets.carbs_g, targets.fat_g
    );
}

/// Display catalog statistics
pub fn display_catalog_summary(path: &Path, summary: &CatalogSummary) {
    println!("Food catalog: {}", path.display());
    println!("{}", "=".repeat(60));
    println!(
        "   Items: {} ({} veg, {} non-veg)",
        summary.total, summary.veg, summary.non_veg
    );

    println!("\n   By category:");
    for (category, count) in &summary.by_category {
        println!("      {category:<16} {count}");
    }

    println!("\n   By meal:");
    for (meal, count) in &summary.by_meal_type {
        println!("      {meal:<16} {count}");
    }
}

fn item_list(items: &[Arc<FoodItem>]) -> String {
    items
        .iter()
        .map(|item| format!("{} ({:.0} kcal)", item.name, item.calories))
        .collect::<Vec<_>>()
        .join(", ")
}
