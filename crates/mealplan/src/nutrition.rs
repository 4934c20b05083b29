use std::collections::BTreeMap;

use foodprep_shared::MealType;
use serde::Serialize;

use crate::MealEntry;

pub const DAILY_CALORIE_GOAL: u32 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealBreakdown {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snack: u32,
}

impl MealBreakdown {
    pub fn get(&self, meal_type: MealType) -> u32 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    fn add(&mut self, meal_type: MealType, calories: u32) {
        let slot = match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        };
        *slot = slot.saturating_add(calories);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieGoal {
    pub goal: u32,
    /// Percentage of the goal reached, capped at 100.
    pub progress: f64,
    pub remaining: u32,
    pub goal_reached: bool,
}

impl CalorieGoal {
    pub fn new(total: u32, goal: u32) -> Self {
        let progress = if goal == 0 {
            100.0
        } else {
            (f64::from(total) / f64::from(goal) * 100.0).min(100.0)
        };

        Self {
            goal,
            progress,
            remaining: goal.saturating_sub(total),
            goal_reached: total >= goal,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyNutrition {
    pub date: String,
    pub total_calories: u32,
    pub meal_breakdown: MealBreakdown,
    pub goal: CalorieGoal,
    pub meals: Vec<MealEntry>,
}

impl DailyNutrition {
    /// Aggregate the meals planned on `date`. Dangling entries count as 0.
    pub fn new(date: impl Into<String>, meals: Vec<MealEntry>) -> Self {
        let mut total_calories = 0u32;
        let mut meal_breakdown = MealBreakdown::default();

        for meal in meals.iter() {
            total_calories = total_calories.saturating_add(meal.calories());
            meal_breakdown.add(meal.meal_type, meal.calories());
        }

        Self {
            date: date.into(),
            total_calories,
            meal_breakdown,
            goal: CalorieGoal::new(total_calories, DAILY_CALORIE_GOAL),
            meals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyNutrition {
    pub start: String,
    pub end: String,
    /// Only dates with at least one planned meal appear.
    pub daily_totals: BTreeMap<String, u32>,
    pub average: u32,
}

impl WeeklyNutrition {
    pub fn new(start: impl Into<String>, end: impl Into<String>, meals: &[MealEntry]) -> Self {
        let daily_totals = daily_totals(meals);
        let average = average_calories(&daily_totals);

        Self {
            start: start.into(),
            end: end.into(),
            daily_totals,
            average,
        }
    }
}

pub fn daily_totals(meals: &[MealEntry]) -> BTreeMap<String, u32> {
    let mut totals = BTreeMap::new();

    for meal in meals {
        let total: &mut u32 = totals.entry(meal.date.to_owned()).or_default();
        *total = total.saturating_add(meal.calories());
    }

    totals
}

/// Mean of the present daily totals rounded half up, 0 for an empty week.
pub fn average_calories(totals: &BTreeMap<String, u32>) -> u32 {
    if totals.is_empty() {
        return 0;
    }

    let count = totals.len() as u64;
    let sum: u64 = totals.values().map(|v| u64::from(*v)).sum();

    ((sum * 2 + count) / (count * 2)) as u32
}
