//! Read-only aggregation views over a group order.
//!
//! Derives the kitchen-facing summary: entries aggregated by dough + filling,
//! totals per dough, the grand total, and the shareable kitchen message. The
//! message text is a compatibility surface reproduced byte-for-byte, so the
//! recipient's kitchen workflow keeps parsing it; do not restyle it.

use crate::types::{Dough, Filling, GroupOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One aggregated line: everyone's pupusas of the same dough and filling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPupusa {
    /// Dough base of the group
    pub dough: Dough,
    /// Filling of the group
    pub filling: Filling,
    /// Summed quantity across all people, always at least 1
    pub quantity: u32,
}

/// Total quantity per dough
///
/// Both doughs are always reported; a dough nobody ordered reports 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoughTotals {
    /// Total maize-dough pupusas
    pub maiz: u32,
    /// Total rice-dough pupusas
    pub arroz: u32,
}

impl DoughTotals {
    /// Returns the total for one dough
    #[must_use]
    pub const fn get(self, dough: Dough) -> u32 {
        match dough {
            Dough::Maiz => self.maiz,
            Dough::Arroz => self.arroz,
        }
    }
}

/// Everything needed to display or share an order summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Entries aggregated by dough + filling, in display order
    pub aggregated: Vec<AggregatedPupusa>,
    /// Per-dough totals
    pub dough_totals: DoughTotals,
    /// Grand total across the whole order
    pub total: u32,
    /// The shareable kitchen message
    pub message: String,
}

/// Derives the read-only summary for an order
///
/// Aggregation sums quantities over all people per (dough, filling) pair.
/// Output order is maize before rice, then alphabetical by the filling's
/// display name. Zero-quantity entries cannot occur.
#[must_use]
pub fn derive_summary(order: &GroupOrder) -> OrderSummary {
    let aggregated = aggregate(order);

    let mut dough_totals = DoughTotals::default();
    for entry in &aggregated {
        match entry.dough {
            Dough::Maiz => dough_totals.maiz += entry.quantity,
            Dough::Arroz => dough_totals.arroz += entry.quantity,
        }
    }

    let total = aggregated.iter().map(|entry| entry.quantity).sum();
    let message = kitchen_message(order, &aggregated, total);

    OrderSummary {
        aggregated,
        dough_totals,
        total,
        message,
    }
}

fn aggregate(order: &GroupOrder) -> Vec<AggregatedPupusa> {
    let mut by_type: HashMap<(Dough, Filling), u32> = HashMap::new();
    for person in &order.people {
        for pupusa in &person.pupusas {
            *by_type.entry((pupusa.dough, pupusa.filling)).or_insert(0) += pupusa.quantity;
        }
    }

    let mut aggregated: Vec<_> = by_type
        .into_iter()
        .map(|((dough, filling), quantity)| AggregatedPupusa {
            dough,
            filling,
            quantity,
        })
        .collect();

    // Maize before rice, then by display name (not by serde code)
    aggregated.sort_by(|a, b| {
        a.dough
            .cmp(&b.dough)
            .then_with(|| a.filling.display_name().cmp(b.filling.display_name()))
    });

    aggregated
}

/// Renders the shareable kitchen message
///
/// Layout: group header, aggregated detail section, per-person breakdown
/// (people with nothing ordered are skipped), divider, grand total. Singular
/// "1 pupusa" only in the per-person totals; the grand total always reads
/// "pupusas".
fn kitchen_message(order: &GroupOrder, aggregated: &[AggregatedPupusa], total: u32) -> String {
    let mut message = String::new();

    message.push_str(&format!("*{}*\n", order.group_name));
    message.push_str("👨‍🍳 *Resumen para Cocina*\n\n");

    message.push_str("*Detalle del Pedido:*\n");
    if aggregated.is_empty() {
        message.push_str("No hay pupusas en el pedido\n");
    } else {
        for entry in aggregated {
            message.push_str(&format!(
                "{} {} de {} de {}\n",
                entry.filling.emoji(),
                entry.quantity,
                entry.filling.display_name(),
                entry.dough.display_name()
            ));
        }
    }
    message.push('\n');

    message.push_str("*Resumen por Persona:*\n\n");
    for person in &order.people {
        let person_total = person.total_quantity();
        if person_total == 0 {
            continue;
        }

        let plural = if person_total == 1 { "" } else { "s" };
        message.push_str(&format!(
            "*{}:* {} pupusa{}\n",
            person.name, person_total, plural
        ));

        for pupusa in &person.pupusas {
            message.push_str(&format!(
                "  • {} de {} de {}\n",
                pupusa.quantity,
                pupusa.dough.display_name().to_lowercase(),
                pupusa.filling.display_name()
            ));
        }

        message.push('\n');
    }

    message.push_str("━━━━━━━━━━━━━━━━\n");
    message.push_str(&format!("*Total: {total} pupusas*\n"));

    message
}
