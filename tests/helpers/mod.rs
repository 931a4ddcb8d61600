//! Snapshot fixtures shared by the CLI tests

#![allow(dead_code)]

use std::path::PathBuf;

use platewise::Snapshot;
use platewise_shared::{Meal, MealPlanRecord, MealType};
use temp_dir::TempDir;
use time::macros::date;

pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        meals: vec![
            Meal::new("chili", "Beef Chili").with_tags(["dinner", "spicy"]),
            Meal::new("curry", "Chicken Curry").with_tags(["dinner"]),
            Meal::new("porridge", "Oat Porridge").with_tags(["breakfast"]),
            Meal::new("soup", "Lentil Soup").with_tags(["lunch", "dinner", "vegetarian"]),
        ],
        plans: vec![
            MealPlanRecord::new("p1", "curry", date!(2025 - 03 - 18), MealType::Dinner),
            MealPlanRecord::new("p2", "curry", date!(2025 - 03 - 04), MealType::Dinner),
            MealPlanRecord::new("p3", "soup", date!(2025 - 03 - 06), MealType::Lunch),
            MealPlanRecord::new("p4", "chili", date!(2025 - 03 - 21), MealType::Dinner),
        ],
    }
}

/// Writes the snapshot as JSON inside `dir` and returns its path
pub fn write_snapshot(dir: &TempDir, snapshot: &Snapshot) -> anyhow::Result<PathBuf> {
    let path = dir.child("snapshot.json");
    std::fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;

    Ok(path)
}
