// ABOUTME: Meal selector: diet filtering and greedy calorie-matching day plans split into meals
// ABOUTME: Deterministic selection honoring meal budgets, pairings, tolerance and repetition caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Meal Selector Module
//!
//! Builds a `MealPlan` from daily `MacroTargets` and a food catalog.
//!
//! Each day is split into the configured meal slots. A slot gets its share of
//! the daily calories and macros, except the last one which takes whatever the
//! day still needs. Slots are filled greedily: among the eligible items, take
//! the one whose calories are closest to the slot's remaining budget. An item
//! is eligible when
//! - it was not already picked that day,
//! - it is still under the plan-wide repetition cap,
//! - its calories fit within `remaining + slot tolerance`,
//! - adding it moves the slot total closer to its budget,
//! - the day can still reach `target - tolerance` with the items left.
//!
//! Candidates are searched in three pools: sides that pair with the slot's
//! first dish, items served at that meal (or at any meal), then every item.
//! Within a pool, items that are fresh win over items eaten in the last
//! `variety_window_days` days, which win over items already at their share of
//! `max_uses_per_item` for this point of the plan.
//!
//! Candidates within `tie_epsilon_kcal` of each other are ranked by how close
//! their protein/carb/fat grams are to the remaining macro budget, then by
//! catalog order.

use crate::config::{MealSlotConfig, SelectionConfig};
use mealwise_core::errors::PlanError;
use mealwise_core::models::{
    DayPlan, DietaryPreference, FoodItem, MacroTargets, MacroTotals, MealPlan, MealType,
    PlannedMeal,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

/// Items of `catalog` allowed for `preference`, in catalog order
#[must_use]
pub fn filter_for_preference(
    catalog: &[Arc<FoodItem>],
    preference: DietaryPreference,
) -> Vec<Arc<FoodItem>> {
    catalog
        .iter()
        .filter(|item| item.diet.allowed_for(preference))
        .cloned()
        .collect()
}

/// Build a meal plan of `config.plan_days` days
///
/// # Errors
///
/// Returns `PlanError::InsufficientCatalog` if no item matches the preference
/// or a day cannot reach `target - tolerance`
#[instrument(skip_all, fields(preference = %preference, target_kcal = targets.calories))]
pub fn select_meal_plan(
    targets: &MacroTargets,
    preference: DietaryPreference,
    catalog: &[Arc<FoodItem>],
    config: &SelectionConfig,
) -> Result<MealPlan, PlanError> {
    let candidates = filter_for_preference(catalog, preference);
    if candidates.is_empty() {
        return Err(PlanError::insufficient_catalog(
            preference.to_string(),
            "no food items match the dietary preference",
        ));
    }

    let tolerance = config.tolerance_for(targets.calories);
    let mut usage = Usage::new(candidates.len());
    let mut days = Vec::with_capacity(usize::from(config.plan_days));

    for day_number in 1..=config.plan_days {
        let freshness = usage.freshness(day_number, config);
        let mut selection = DaySelection::new(&candidates, freshness, tolerance, config);
        let day = selection.select_day(day_number, targets);

        if day.totals.calories < targets.calories - tolerance {
            return Err(PlanError::insufficient_catalog(
                preference.to_string(),
                format!(
                    "day {day_number} reached only {:.0} of {:.0} kcal (tolerance {tolerance:.0} kcal)",
                    day.totals.calories, targets.calories
                ),
            ));
        }

        usage.record(day_number, &selection.picked);
        debug!(
            day = day_number,
            meals = day.meals.len(),
            items = day.item_count(),
            calories = day.totals.calories,
            "Day planned"
        );
        days.push(day);
    }

    info!(
        days = days.len(),
        candidates = candidates.len(),
        tolerance_kcal = tolerance,
        "Meal plan selected"
    );

    Ok(MealPlan {
        dietary_preference: preference,
        tolerance_kcal: tolerance,
        days,
    })
}

/// How willing the selector is to use an item today, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Freshness {
    /// Not eaten within the variety window and under its spread quota
    Fresh,
    /// Eaten within the variety window
    Recent,
    /// Already at its spread quota for this day of the plan
    OverQuota,
}

const FRESHNESS_LEVELS: [Freshness; 3] = [Freshness::Fresh, Freshness::Recent, Freshness::OverQuota];

/// Plan-wide item usage
struct Usage {
    uses: Vec<u32>,
    last_day: Vec<Option<u8>>,
}

impl Usage {
    fn new(len: usize) -> Self {
        Self {
            uses: vec![0; len],
            last_day: vec![None; len],
        }
    }

    /// Freshness of every candidate on `day`, `None` once an item hits the cap
    fn freshness(&self, day: u8, config: &SelectionConfig) -> Vec<Option<Freshness>> {
        let quota = config.spread_quota(day);
        self.uses
            .iter()
            .zip(&self.last_day)
            .map(|(&uses, last_day)| {
                if uses >= config.max_uses_per_item {
                    None
                } else if uses >= quota {
                    Some(Freshness::OverQuota)
                } else if last_day.is_some_and(|last| day - last <= config.variety_window_days) {
                    Some(Freshness::Recent)
                } else {
                    Some(Freshness::Fresh)
                }
            })
            .collect()
    }

    fn record(&mut self, day: u8, picked: &[bool]) {
        for (index, _) in picked.iter().enumerate().filter(|(_, picked)| **picked) {
            self.uses[index] += 1;
            self.last_day[index] = Some(day);
        }
    }
}

/// Where the selector looks for the next item of a meal
#[derive(Debug, Clone, Copy)]
enum Pool<'a> {
    /// Items of the meal whose category pairs with its first dish
    Paired(&'a [String]),
    /// Items served at the meal or at any meal
    Meal,
    /// Every usable item
    Any,
}

impl Pool<'_> {
    fn admits(self, item: &FoodItem, meal: MealType) -> bool {
        let serves_meal = item.meal_type.is_none() || item.meal_type == Some(meal);
        match self {
            Self::Paired(sides) => serves_meal && sides.contains(&item.category),
            Self::Meal => serves_meal,
            Self::Any => true,
        }
    }
}

/// Calorie and macro budget of one meal slot
#[derive(Debug, Clone, Copy)]
struct SlotBudget {
    targets: MacroTargets,
    band: f64,
}

impl SlotBudget {
    fn share(targets: &MacroTargets, slot: &MealSlotConfig, tolerance: f64) -> Self {
        Self {
            targets: MacroTargets {
                calories: targets.calories * slot.share,
                protein_g: targets.protein_g * slot.share,
                carbs_g: targets.carbs_g * slot.share,
                fat_g: targets.fat_g * slot.share,
            },
            band: tolerance * slot.share,
        }
    }

    fn rest_of_day(targets: &MacroTargets, eaten: &MacroTotals, tolerance: f64) -> Self {
        Self {
            targets: MacroTargets {
                calories: targets.calories - eaten.calories,
                protein_g: targets.protein_g - eaten.protein_g,
                carbs_g: targets.carbs_g - eaten.carbs_g,
                fat_g: targets.fat_g - eaten.fat_g,
            },
            band: tolerance,
        }
    }
}

/// Ranking of one eligible candidate
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    calorie_deviation: f64,
    macro_deviation: f64,
}

impl Candidate {
    fn beats(&self, other: &Self, epsilon: f64) -> bool {
        if self.calorie_deviation < other.calorie_deviation - epsilon {
            return true;
        }
        if (self.calorie_deviation - other.calorie_deviation).abs() <= epsilon {
            return self.macro_deviation < other.macro_deviation;
        }
        false
    }
}

/// Selection state for a single day
struct DaySelection<'a> {
    candidates: &'a [Arc<FoodItem>],
    freshness: Vec<Option<Freshness>>,
    picked: Vec<bool>,
    picked_count: usize,
    tolerance: f64,
    config: &'a SelectionConfig,
}

impl<'a> DaySelection<'a> {
    fn new(
        candidates: &'a [Arc<FoodItem>],
        freshness: Vec<Option<Freshness>>,
        tolerance: f64,
        config: &'a SelectionConfig,
    ) -> Self {
        Self {
            candidates,
            freshness,
            picked: vec![false; candidates.len()],
            picked_count: 0,
            tolerance,
            config,
        }
    }

    fn select_day(&mut self, day_number: u8, targets: &MacroTargets) -> DayPlan {
        let config = self.config;
        let mut day = DayPlan::new(day_number, targets.calories);
        let slot_count = config.meal_slots.len();

        for (position, slot) in config.meal_slots.iter().enumerate() {
            let budget = if position + 1 == slot_count {
                SlotBudget::rest_of_day(targets, &day.totals, self.tolerance)
            } else {
                SlotBudget::share(targets, slot, self.tolerance)
            };

            let mut meal = PlannedMeal::new(slot.meal, budget.targets.calories);
            while self.picked_count < config.max_items_per_day {
                let day_remaining = day.remaining_calories() - meal.totals.calories;
                let Some(index) = self.pick_next(&meal, &budget, day_remaining) else {
                    break;
                };

                self.picked[index] = true;
                self.picked_count += 1;
                meal.push(Arc::clone(&self.candidates[index]));
            }

            trace!(
                day = day_number,
                meal = %meal.meal,
                items = meal.items.len(),
                calories = meal.totals.calories,
                budget = meal.target_calories,
                "Meal filled"
            );
            day.push_meal(meal);
        }

        day
    }

    fn pick_next(&self, meal: &PlannedMeal, budget: &SlotBudget, day_remaining: f64) -> Option<usize> {
        let remaining = budget.targets.calories - meal.totals.calories;
        if remaining <= 0.0 {
            return None;
        }

        let available = self.available_calories();
        let sides = meal
            .items
            .first()
            .map(|main| self.config.pairings_for(&main.category))
            .filter(|sides| !sides.is_empty());
        let pools = sides
            .map(Pool::Paired)
            .into_iter()
            .chain([Pool::Meal, Pool::Any]);

        for pool in pools {
            for limit in FRESHNESS_LEVELS {
                let best = self.best_in(pool, limit, meal, budget, remaining, |calories| {
                    calories + Self::rest_capacity(&available, self.slots_after_next(), calories)
                        >= day_remaining - self.tolerance
                });
                if best.is_some() {
                    return best;
                }
            }
        }

        None
    }

    fn best_in(
        &self,
        pool: Pool<'_>,
        limit: Freshness,
        meal: &PlannedMeal,
        budget: &SlotBudget,
        remaining: f64,
        day_reachable: impl Fn(f64) -> bool,
    ) -> Option<usize> {
        let remaining_protein = budget.targets.protein_g - meal.totals.protein_g;
        let remaining_carbs = budget.targets.carbs_g - meal.totals.carbs_g;
        let remaining_fat = budget.targets.fat_g - meal.totals.fat_g;

        let mut best: Option<Candidate> = None;
        for (index, item) in self.candidates.iter().enumerate() {
            let allowed = matches!(self.freshness[index], Some(level) if level <= limit);
            if self.picked[index] || !allowed || !pool.admits(item, meal.meal) {
                continue;
            }
            // Must fit the upper band and leave the total strictly closer to the budget
            if item.calories > remaining + budget.band
                || item.calories <= 0.0
                || item.calories >= 2.0 * remaining
            {
                continue;
            }
            if !day_reachable(item.calories) {
                continue;
            }

            let candidate = Candidate {
                index,
                calorie_deviation: (remaining - item.calories).abs(),
                macro_deviation: (remaining_protein - item.protein_g).abs()
                    + (remaining_carbs - item.carbs_g).abs()
                    + (remaining_fat - item.fat_g).abs(),
            };

            match best {
                Some(current) if !candidate.beats(&current, self.config.tie_epsilon_kcal) => {}
                _ => best = Some(candidate),
            }
        }

        best.map(|candidate| candidate.index)
    }

    /// Calories of usable items not yet picked today, largest first
    fn available_calories(&self) -> Vec<f64> {
        let mut calories: Vec<f64> = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.picked[*index] && self.freshness[*index].is_some())
            .map(|(_, item)| item.calories)
            .collect();
        calories.sort_by(|a, b| b.total_cmp(a));
        calories
    }

    /// Items the day may still take after the next pick
    const fn slots_after_next(&self) -> usize {
        self.config
            .max_items_per_day
            .saturating_sub(self.picked_count + 1)
    }

    /// Most calories `slots` more items could add once an item of `calories` is taken
    ///
    /// `available` is sorted largest first and still contains that item.
    fn rest_capacity(available: &[f64], slots: usize, calories: f64) -> f64 {
        if available.len() <= slots || calories >= available[slots] {
            let top: f64 = available.iter().take(slots + 1).sum();
            top - calories
        } else {
            available.iter().take(slots).sum()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use mealwise_core::models::DietTag;

    fn food(name: &str, calories: f64, protein_g: f64, diet: DietTag) -> Arc<FoodItem> {
        Arc::new(FoodItem {
            name: name.to_owned(),
            category: "generic".to_owned(),
            calories,
            protein_g,
            carbs_g: 0.0,
            fat_g: 0.0,
            diet,
            meal_type: None,
        })
    }

    fn dish(name: &str, calories: f64, meal: MealType, category: &str) -> Arc<FoodItem> {
        Arc::new(FoodItem {
            name: name.to_owned(),
            category: category.to_owned(),
            calories,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            diet: DietTag::Veg,
            meal_type: Some(meal),
        })
    }

    fn targets(calories: f64, protein_g: f64) -> MacroTargets {
        MacroTargets {
            calories,
            protein_g,
            carbs_g: 0.0,
            fat_g: 0.0,
        }
    }

    fn one_day() -> SelectionConfig {
        SelectionConfig {
            plan_days: 1,
            ..SelectionConfig::default()
        }
    }

    fn names(plan: &MealPlan) -> Vec<&str> {
        plan.items().map(|item| item.name.as_str()).collect()
    }

    fn meal_names(day: &DayPlan) -> Vec<(MealType, Vec<&str>)> {
        day.meals
            .iter()
            .map(|meal| {
                let names = meal.items.iter().map(|item| item.name.as_str()).collect();
                (meal.meal, names)
            })
            .collect()
    }

    #[test]
    fn test_calorie_tie_broken_by_macro_deviation() {
        let catalog = vec![
            food("low protein", 500.0, 5.0, DietTag::Veg),
            food("high protein", 500.3, 40.0, DietTag::Veg),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(500.0, 40.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(names(&plan), vec!["high protein"]);
    }

    #[test]
    fn test_full_tie_keeps_catalog_order() {
        let catalog = vec![
            food("first", 500.0, 10.0, DietTag::Veg),
            food("second", 500.0, 10.0, DietTag::Veg),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(500.0, 10.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(names(&plan), vec!["first"]);
    }

    #[test]
    fn test_clear_calorie_winner_ignores_macros() {
        let catalog = vec![
            food("protein bomb", 400.0, 80.0, DietTag::Veg),
            food("exact", 500.0, 0.0, DietTag::Veg),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(500.0, 80.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(names(&plan), vec!["exact"]);
    }

    #[test]
    fn test_candidate_above_upper_band_is_skipped() {
        // Tolerance is 75 kcal, so 1080 overshoots a 1000 kcal target
        let catalog = vec![
            food("too big", 1080.0, 0.0, DietTag::Veg),
            food("half", 500.0, 0.0, DietTag::Veg),
            food("other half", 480.0, 0.0, DietTag::Veg),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(1000.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(names(&plan), vec!["half", "other half"]);
    }

    #[test]
    fn test_item_not_repeated_within_a_day() {
        let catalog = vec![food("only", 400.0, 0.0, DietTag::Veg)];
        let result = select_meal_plan(
            &targets(800.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        );

        assert!(matches!(
            result,
            Err(PlanError::InsufficientCatalog { .. })
        ));
    }

    #[test]
    fn test_slots_prefer_items_served_at_that_meal() {
        let catalog = vec![
            dish("Lunch twin", 250.0, MealType::Lunch, "generic"),
            dish("Poha", 250.0, MealType::Breakfast, "generic"),
            dish("Dal Rice", 400.0, MealType::Lunch, "generic"),
            dish("Paneer", 350.0, MealType::Dinner, "generic"),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(1000.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(
            meal_names(&plan.days[0]),
            vec![
                (MealType::Breakfast, vec!["Poha"]),
                (MealType::Lunch, vec!["Dal Rice"]),
                (MealType::Dinner, vec!["Paneer"]),
            ]
        );
        assert!((plan.days[0].meals[0].target_calories - 250.0).abs() < 1e-9);
        assert!((plan.days[0].meals[1].target_calories - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_slot_falls_back_to_any_meal() {
        let catalog = vec![
            dish("Thali", 400.0, MealType::Lunch, "generic"),
            dish("Khichdi", 350.0, MealType::Lunch, "generic"),
            dish("Wrap", 250.0, MealType::Lunch, "generic"),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(1000.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(
            meal_names(&plan.days[0]),
            vec![
                (MealType::Breakfast, vec!["Wrap"]),
                (MealType::Lunch, vec!["Thali"]),
                (MealType::Dinner, vec!["Khichdi"]),
            ]
        );
    }

    #[test]
    fn test_side_pairs_with_main_dish() {
        // Cookie and Rice tie on calories; only Rice pairs with a curry
        let catalog = vec![
            dish("Toast", 250.0, MealType::Breakfast, "flatbread"),
            dish("Dal", 300.0, MealType::Lunch, "curry"),
            dish("Cookie", 100.0, MealType::Lunch, "snack"),
            dish("Rice", 100.0, MealType::Lunch, "rice"),
            dish("Soup", 350.0, MealType::Dinner, "soup"),
        ];
        let Ok(plan) = select_meal_plan(
            &targets(1000.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &one_day(),
        ) else {
            panic!("plan should be selected");
        };

        assert_eq!(
            meal_names(&plan.days[0])[1],
            (MealType::Lunch, vec!["Dal", "Rice"])
        );
    }

    #[test]
    fn test_consecutive_days_rotate_items() {
        let catalog = vec![
            dish("Idli", 250.0, MealType::Breakfast, "generic"),
            dish("Upma", 250.0, MealType::Breakfast, "generic"),
            dish("Rajma", 400.0, MealType::Lunch, "generic"),
            dish("Kadhi", 400.0, MealType::Lunch, "generic"),
            dish("Palak", 350.0, MealType::Dinner, "generic"),
            dish("Korma", 350.0, MealType::Dinner, "generic"),
        ];
        let config = SelectionConfig {
            plan_days: 3,
            ..SelectionConfig::default()
        };
        let Ok(plan) = select_meal_plan(
            &targets(1000.0, 0.0),
            DietaryPreference::Veg,
            &catalog,
            &config,
        ) else {
            panic!("plan should be selected");
        };

        let days: Vec<Vec<&str>> = plan
            .days
            .iter()
            .map(|day| day.items().map(|item| item.name.as_str()).collect())
            .collect();
        assert_eq!(days[0], ["Idli", "Rajma", "Palak"]);
        assert_eq!(days[1], ["Upma", "Kadhi", "Korma"]);
        // Both choices were eaten within the window, so catalog order decides
        assert_eq!(days[2], ["Idli", "Rajma", "Palak"]);
    }

    #[test]
    fn test_rest_capacity_excludes_the_candidate() {
        let available = [500.0, 400.0, 300.0, 200.0];
        // Candidate among the top two: the next two largest remain
        assert!((DaySelection::rest_capacity(&available, 2, 400.0) - 800.0).abs() < 1e-9);
        // Candidate below the top two: the top two remain
        assert!((DaySelection::rest_capacity(&available, 2, 200.0) - 900.0).abs() < 1e-9);
        // More slots than items: everything else remains
        assert!((DaySelection::rest_capacity(&available, 9, 300.0) - 1100.0).abs() < 1e-9);
    }
}
