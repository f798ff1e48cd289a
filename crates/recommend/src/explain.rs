use serde::Serialize;

use phonehub_catalog::{Capability, Item};
use phonehub_core::ValueObject;

use crate::usage::PrimaryUse;

/// Number of features quoted in the features line.
const FEATURES_QUOTED: usize = 3;

/// Which aspect of the match a reason describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    /// The capability that matters for the primary use is strong.
    UsageFit,
    /// The price sits comfortably below the budget.
    Value,
    /// Headline features of the item.
    Features,
}

/// One line of a recommendation's justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reason {
    pub kind: ReasonKind,
    pub text: String,
}

impl ValueObject for Reason {}

impl Reason {
    fn new(kind: ReasonKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Thresholds and wording for the usage-fit line of one primary use.
struct UsageRule {
    capability: Capability,
    high: u8,
    mid: u8,
    high_text: fn(u8) -> String,
    mid_text: fn(u8) -> String,
}

fn usage_rule(primary_use: PrimaryUse) -> Option<UsageRule> {
    match primary_use {
        PrimaryUse::Photography => Some(UsageRule {
            capability: Capability::Camera,
            high: 90,
            mid: 80,
            high_text: |v| {
                format!("Exceptional camera quality ({v}/100) perfect for photography enthusiasts")
            },
            mid_text: |v| format!("Very good camera ({v}/100) suitable for most photography needs"),
        }),
        PrimaryUse::Gaming => Some(UsageRule {
            capability: Capability::Performance,
            high: 90,
            mid: 80,
            high_text: |v| format!("Top-tier performance ({v}/100) handles any game smoothly"),
            mid_text: |v| format!("Good gaming performance ({v}/100) for most mobile games"),
        }),
        PrimaryUse::BatteryLife => Some(UsageRule {
            capability: Capability::Battery,
            high: 85,
            mid: 75,
            high_text: |v| format!("Excellent battery life ({v}/100) for all-day usage"),
            mid_text: |v| format!("Good battery life ({v}/100) for regular usage"),
        }),
        PrimaryUse::General => None,
    }
}

fn usage_reason(item: &Item, primary_use: PrimaryUse) -> Option<Reason> {
    let rule = usage_rule(primary_use)?;
    let value = item.capability(rule.capability);
    let text = if value >= rule.high {
        (rule.high_text)(value)
    } else if value >= rule.mid {
        (rule.mid_text)(value)
    } else {
        return None;
    };
    Some(Reason::new(ReasonKind::UsageFit, text))
}

fn value_reason(item: &Item, budget: u32) -> Option<Reason> {
    // price <= 0.8 * budget, in integers to keep the boundary exact.
    let scaled_price = u64::from(item.price) * 10;
    let budget_u64 = u64::from(budget);

    let text = if scaled_price <= budget_u64 * 8 {
        format!(
            "Great value at ${} - well within your ${budget} budget",
            item.price
        )
    } else if scaled_price <= budget_u64 * 9 {
        format!("Good value at ${} for the features offered", item.price)
    } else {
        return None;
    };
    Some(Reason::new(ReasonKind::Value, text))
}

fn features_reason(item: &Item) -> Option<Reason> {
    if item.features.is_empty() {
        return None;
    }
    let quoted: Vec<&str> = item
        .features
        .iter()
        .take(FEATURES_QUOTED)
        .map(String::as_str)
        .collect();
    Some(Reason::new(
        ReasonKind::Features,
        format!("Key features: {}", quoted.join(", ")),
    ))
}

/// Why `item` suits a query with this primary use and budget.
///
/// Lines come in a fixed order: usage fit, value, features. A condition that
/// does not hold contributes no line.
pub fn explain(item: &Item, primary_use: PrimaryUse, budget: u32) -> Vec<Reason> {
    [
        usage_reason(item, primary_use),
        value_reason(item, budget),
        features_reason(item),
    ]
    .into_iter()
    .flatten()
    .collect()
}
