use anyhow::{Result, bail};
use cart::{CartAction, CartSession, CartSlot, CartState, menu};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use client::{Submission, confirmation_view, submit_order, success_route};

const SERVER_ENV: &str = "QUANAN_SERVER";
const DEFAULT_SERVER: &str = "http://localhost:1111";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the menu, optionally one category label (e.g. "Đồ Uống")
    Menu { category: Option<String> },

    /// Add one of a menu item to the cart
    Add { id: String },

    /// Remove an item from the cart
    Remove { id: String },

    /// Set an item's quantity (0 removes it)
    Set { id: String, quantity: i64 },

    /// Show the cart with totals
    Show,

    /// Empty the cart
    Clear,

    /// Submit the cart as an order
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Render the confirmation view for a submitted order
    Confirm {
        #[arg(long)]
        order_id: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut session = CartSession::open(CartSlot::from_env());

    match args.command {
        Command::Menu { category } => {
            let label = category.as_deref().unwrap_or("Tất Cả");

            for item in menu::by_category(label) {
                println!(
                    "{} {} ({}): {}",
                    item.image,
                    item.name,
                    item.id,
                    menu::format_currency(item.price)
                );

                if let Some(description) = &item.description {
                    println!("   {description}");
                }
            }
        }

        Command::Add { id } => {
            let Some(item) = menu::find(&id) else {
                bail!("Không tìm thấy món: {id}");
            };

            session.dispatch(CartAction::Add(item.clone()));
            print_cart(session.state());
        }

        Command::Remove { id } => {
            session.dispatch(CartAction::Remove(id));
            print_cart(session.state());
        }

        Command::Set { id, quantity } => {
            session.dispatch(CartAction::SetQuantity { id, quantity });
            print_cart(session.state());
        }

        Command::Show => print_cart(session.state()),

        Command::Clear => {
            session.dispatch(CartAction::Clear);
            print_cart(session.state());
        }

        Command::Submit { name, notes } => {
            let server =
                std::env::var(SERVER_ENV).unwrap_or_else(|_| DEFAULT_SERVER.to_string());
            let http = reqwest::Client::new();

            match submit_order(&http, &server, &mut session, &name, &notes).await {
                Submission::Accepted { order_id, name } => {
                    println!("{}", success_route(&order_id, &name));
                    println!();
                    println!("{}", confirmation_view(Some(&order_id), Some(&name)));
                }
                Submission::Rejected { message } => {
                    eprintln!("{message}");
                    std::process::exit(1);
                }
            }
        }

        Command::Confirm { order_id, name } => {
            println!(
                "{}",
                confirmation_view(order_id.as_deref(), name.as_deref())
            );
        }
    }

    Ok(())
}

fn print_cart(state: &CartState) {
    if state.is_empty() {
        println!("Giỏ hàng trống");
        return;
    }

    for entry in &state.items {
        println!(
            "{}x {} = {}",
            entry.quantity,
            entry.item.name,
            menu::format_currency(entry.line_total())
        );
    }

    println!("Tổng số món: {}", state.total_items);
    println!("Tổng cộng: {}", menu::format_currency(state.total_price));
}
