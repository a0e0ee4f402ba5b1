//! CLI demo for the group pupusa order.
//!
//! Walks the whole order lifecycle: create a group, rename people, add and
//! remove pupusas, derive the kitchen summary (text and JSON), then reset.

use pupusada::{
    derive_summary, Dough, Filling, OrderAction, OrderEnvironment, OrderReducer, OrderState,
};
use pupusada_core::environment::UuidIds;
use pupusada_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pupusada=debug,pupusada_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Pupusada: Group Order Demo ===\n");

    // Create environment and store
    let env = OrderEnvironment::new(Arc::new(UuidIds));
    let mut store = Store::new(OrderState::new(), OrderReducer::new(), env);

    // Start an order for the table
    println!("Creating group 'Mesa 3 - Familia López' for 4 people...");
    store.send(OrderAction::CreateGroup {
        group_name: "Mesa 3 - Familia López".to_string(),
        people_count: 4,
    });

    let people = store
        .state(|s| {
            s.order
                .as_ref()
                .map(|order| order.people.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
        })
        .ok_or("no active order after CreateGroup")?;

    // Rename the first two people
    println!("Renaming Persona 1 to 'Ana' and Persona 2 to 'Carlos'...");
    store.send(OrderAction::RenamePerson {
        person_id: people[0].clone(),
        new_name: "Ana".to_string(),
    });
    store.send(OrderAction::RenamePerson {
        person_id: people[1].clone(),
        new_name: "Carlos".to_string(),
    });

    // Take everyone's pupusas; identical combos stay distinct entries
    println!("Adding pupusas...");
    for (person_id, dough, filling, quantity) in [
        (&people[0], Dough::Maiz, Filling::Queso, 3),
        (&people[0], Dough::Maiz, Filling::Revueltas, 2),
        (&people[0], Dough::Maiz, Filling::Queso, 1),
        (&people[1], Dough::Arroz, Filling::Queso, 2),
        (&people[1], Dough::Arroz, Filling::Pollo, 1),
        (&people[2], Dough::Maiz, Filling::Loca, 1),
    ] {
        store.send(OrderAction::AddPupusa {
            person_id: person_id.clone(),
            dough,
            filling,
            quantity,
        });
    }

    print_order(&store);

    // Carlos changes his mind about the chicken one
    let last_of_carlos = store
        .state(|s| {
            s.order
                .as_ref()
                .and_then(|order| order.person(&people[1]))
                .and_then(|person| person.pupusas.last())
                .map(|pupusa| pupusa.id.clone())
        })
        .ok_or("Carlos has no pupusas to remove")?;

    println!("\nRemoving Carlos' last entry...");
    store.send(OrderAction::RemovePupusa {
        person_id: people[1].clone(),
        pupusa_id: last_of_carlos,
    });

    print_order(&store);

    // Derive the kitchen summary
    let summary = store
        .state(|s| s.order.as_ref().map(derive_summary))
        .ok_or("no active order to summarize")?;

    println!("\n--- Kitchen message ---");
    print!("{}", summary.message);
    println!("--- End of message ---");

    println!("\nSummary as JSON:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Back to a clean slate
    println!("\nResetting the order...");
    store.send(OrderAction::ResetOrder);
    let has_order = store.state(|s| s.order.is_some());
    println!("Active order after reset: {has_order}");

    println!("\n=== Demo Complete ===");
    Ok(())
}

/// Prints the current order, one person per line with their entries
fn print_order(store: &Store<OrderReducer>) {
    let state = store.state(std::clone::Clone::clone);
    let Some(order) = state.order else {
        println!("(no active order)");
        return;
    };

    println!("\nPedido: {}", order.group_name);
    for person in &order.people {
        println!("  {}: {} pupusas", person.name, person.total_quantity());
        for pupusa in &person.pupusas {
            println!(
                "    {} {}x {} de {}",
                pupusa.filling.emoji(),
                pupusa.quantity,
                pupusa.filling.display_name(),
                pupusa.dough.display_name()
            );
        }
    }
    println!("  Ver Resumen ({} pupusas)", order.total_quantity());
}
