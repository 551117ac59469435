//! Furnish — storefront session and room-designer demo driver.
//!
//! The storefront and designer cores are libraries driven by a host UI in
//! production; this binary exercises them end to end from the terminal:
//! `catalog` prints the built-in product list, `session` walks a scripted
//! shopping-and-decorating session. All state is memory-only and discarded
//! on exit.

mod services;
mod state;

use std::sync::Arc;

use catalog::Catalog;
use clap::{Parser, Subcommand};
use designer::engine::Engine;
use designer::input::{Key, PointerPoint};
use designer::scene::Customization;

use crate::services::{cart, favorites, order};
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "furnish", about = "Furnish storefront and room-designer demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in furniture catalog.
    Catalog,
    /// Run a scripted storefront + designer session.
    Session,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin().expect("built-in catalog is valid");

    match cli.command {
        Command::Catalog => list_catalog(&catalog),
        Command::Session => run_session(catalog),
    }
}

fn list_catalog(catalog: &Catalog) {
    for entry in catalog.entries() {
        let stock = if entry.in_stock { "" } else { "  (out of stock)" };
        println!("{:>3}  {:<45} {:>10.2}  {}{stock}", entry.id, entry.name, entry.price, entry.category);
    }
}

fn run_session(catalog: Catalog) {
    let mut state = AppState::new(catalog);

    // Shop: a sofa set and coffee tables, second thoughts about the desk.
    cart::add_to_cart(&mut state, 28, 1, Customization::default()).expect("sofa is in the catalog");
    cart::add_to_cart(&mut state, 29, 1, Customization::default()).expect("table is in the catalog");
    cart::set_quantity(&mut state, 29, 2);
    cart::add_to_cart(&mut state, 24, 1, Customization::default()).expect("desk is in the catalog");
    cart::remove_from_cart(&mut state, 24);
    println!("cart: {} items, subtotal {:.2}", cart::cart_count(&state), cart::cart_subtotal(&state));

    // Star the armchair for later.
    favorites::toggle_favorite(&mut state, 30);
    if favorites::is_favorite(&state, 30) {
        let names: Vec<&str> =
            favorites::favorite_entries(&state).iter().map(|entry| entry.name.as_str()).collect();
        println!("favorites: {}", names.join(", "));
    }

    // Check out and follow the order into fulfillment; a second impulse
    // order gets cancelled while still pending.
    let order_id = order::place_order(&mut state).expect("cart is not empty");
    order::update_status(&mut state, order_id, order::OrderStatus::Processing)
        .expect("pending order can start processing");

    cart::add_to_cart(&mut state, 30, 1, Customization::default()).expect("armchair is in the catalog");
    let impulse = order::place_order(&mut state).expect("cart is not empty");
    order::cancel_order(&mut state, impulse).expect("pending order can be cancelled");
    let refund = order::get_order(&state, impulse).expect("cancelled order is still on the books");
    tracing::info!(id = %refund.id, total = refund.total, "impulse order cancelled");

    for placed in order::orders(&state) {
        let tail = if placed.status.is_terminal() { " (closed)" } else { "" };
        println!("order {} [{}]{tail} total {:.2}", placed.id, placed.status.label(), placed.total);
    }

    // Arrange the sofa in a room: drag it toward a wall, turn it, fine-tune.
    let sofa = Arc::clone(state.catalog.get(28).expect("sofa is in the catalog"));
    let mut engine = Engine::seeded(&sofa, &Customization { scale: None, color: Some("#8B4513".to_string()) });
    engine.resize_room(6.0, 4.0, 3.0);

    engine.on_pointer_down(PointerPoint::new(0.0, 0.0), Some(0));
    engine.on_pointer_move(PointerPoint::new(0.9, -0.8));
    engine.on_pointer_up();
    engine.on_key_down(Key::R);
    engine.on_key_down(Key::R);
    engine.on_key_down(Key::ArrowLeft);

    let frame = engine.frame();
    println!(
        "room {}x{}x{} m, {} item(s):",
        frame.dimensions.width, frame.dimensions.length, frame.dimensions.height,
        frame.items.len()
    );
    for item in frame.items {
        println!(
            "  {} at ({:.2}, {:.2}) yaw {:.2} rad scale {:.2}",
            item.entry.name, item.position.x, item.position.z, item.yaw(), item.scale
        );
    }
}
