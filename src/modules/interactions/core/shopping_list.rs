// Shopping list aggregation.
//
// Purpose
// - Fold the ingredient lines of every recipe in a cart into one line per
//   (ingredient name, measurement unit) with the summed amount.
//
// Boundaries
// - Pure. No input or output, nothing cached between calls.
// - Grouping is an exact, case sensitive match. "g" and "gram" stay apart.
// - A total that does not fit a Decimal is an error, never a panic.

use crate::modules::interactions::core::recipe::RecipeIngredientLine;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("total amount of {ingredient_name} ({measurement_unit}) overflowed")]
pub struct AmountOverflow {
    pub ingredient_name: String,
    pub measurement_unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_amount: Decimal,
}

impl AggregatedLine {
    pub fn render(&self) -> String {
        format!(
            "{} ({}) — {}",
            self.ingredient_name,
            self.measurement_unit,
            self.total_amount.normalize()
        )
    }
}

/// Sorted by ingredient name, then unit.
pub fn aggregate<I>(lines: I) -> Result<Vec<AggregatedLine>, AmountOverflow>
where
    I: IntoIterator<Item = RecipeIngredientLine>,
{
    let mut totals: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for line in lines {
        let key = (line.ingredient_name, line.measurement_unit);
        let current = totals.get(&key).copied().unwrap_or(Decimal::ZERO);
        let Some(total) = current.checked_add(line.amount) else {
            return Err(AmountOverflow {
                ingredient_name: key.0,
                measurement_unit: key.1,
            });
        };
        totals.insert(key, total);
    }
    Ok(totals
        .into_iter()
        .map(|((ingredient_name, measurement_unit), total_amount)| AggregatedLine {
            ingredient_name,
            measurement_unit,
            total_amount,
        })
        .collect())
}

pub fn render(lines: &[AggregatedLine]) -> String {
    lines
        .iter()
        .map(AggregatedLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}
