mod items;
mod lists;
mod model;
mod session;
mod store;

use clap::{CommandFactory, Parser, Subcommand};
use model::{ShoppingItem, ShoppingList};
use session::Session;
use store::JsonFileStore;

#[derive(Parser)]
#[command(name = "sl", about = "Shoplist — local shopping-list manager")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create a new shopping list
    Add { name: String },
    /// Show all lists, optionally filtered by a name substring
    Ls { query: Option<String> },
    /// Rename a list
    Rename { id: u32, name: String },
    /// Delete a list and all its items
    Rm { id: u32 },
    /// Show one list's items and total price
    Show { id: u32 },
    /// Print a list's total price
    Total { id: u32 },
    /// Manage the items of a list
    Item {
        #[command(subcommand)]
        action: ItemCmd,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ItemCmd {
    /// Add an item to a list
    Add {
        list_id: u32,
        name: String,
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        purchased: bool,
    },
    /// Remove an item from a list
    Rm { list_id: u32, item_id: u32 },
    /// Update fields of an item
    Update {
        list_id: u32,
        item_id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        quantity: Option<f64>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        purchased: Option<bool>,
    },
    /// Mark an item purchased (shorthand for --purchased true)
    Bought { list_id: u32, item_id: u32 },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Cmd::Add { name } => {
            let mut session = open_session()?;
            let id = session
                .add_list(ShoppingList::new(name))
                .map_err(|e| e.to_string())?;
            println!("created list {id}");
            Ok(())
        }
        Cmd::Ls { query } => {
            let mut session = open_session()?;
            if session.lists().is_empty() {
                println!("no lists");
                return Ok(());
            }
            if let Some(q) = query {
                session.set_search(q);
            }
            print_lists_header();
            for list in session.visible_lists() {
                print_lists_row(list);
            }
            Ok(())
        }
        Cmd::Rename { id, name } => {
            let mut session = open_session()?;
            session.rename_list(id, &name).map_err(|e| e.to_string())?;
            println!("renamed list {id}");
            Ok(())
        }
        Cmd::Rm { id } => {
            let mut session = open_session()?;
            session.delete_list(id).map_err(|e| e.to_string())?;
            println!("deleted list {id}");
            Ok(())
        }
        Cmd::Show { id } => {
            let mut session = open_session()?;
            let list = select_list(&mut session, id)?;
            println!(
                "{} (created {})",
                list.name,
                list.date_created.format("%Y-%m-%d")
            );
            if list.items.is_empty() {
                println!("no items");
            } else {
                print_items_header();
                for item in &list.items {
                    print_items_row(item);
                }
            }
            println!("total: {}", session.total_price());
            Ok(())
        }
        Cmd::Total { id } => {
            let mut session = open_session()?;
            select_list(&mut session, id)?;
            println!("total: {}", session.total_price());
            Ok(())
        }
        Cmd::Item { action } => match action {
            ItemCmd::Add {
                list_id,
                name,
                quantity,
                price,
                description,
                purchased,
            } => {
                let mut session = open_session()?;
                select_list(&mut session, list_id)?;
                let mut candidate = ShoppingItem::new(name);
                candidate.quantity = quantity;
                candidate.price = price;
                candidate.description = description;
                candidate.purchased = purchased;
                let id = session
                    .add_item(candidate)
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("no list with id {list_id}"))?;
                println!("added item {id}");
                Ok(())
            }
            ItemCmd::Rm { list_id, item_id } => {
                let mut session = open_session()?;
                select_list(&mut session, list_id)?;
                session.delete_item(item_id).map_err(|e| e.to_string())?;
                println!("deleted item {item_id}");
                Ok(())
            }
            ItemCmd::Update {
                list_id,
                item_id,
                name,
                quantity,
                price,
                description,
                purchased,
            } => {
                let mut session = open_session()?;
                let current = find_item(select_list(&mut session, list_id)?, item_id)?;
                let updated = ShoppingItem {
                    id: current.id,
                    name: name.unwrap_or(current.name),
                    quantity: quantity.unwrap_or(current.quantity),
                    price: price.unwrap_or(current.price),
                    description: description.or(current.description),
                    purchased: purchased.unwrap_or(current.purchased),
                };
                session.update_item(updated).map_err(|e| e.to_string())?;
                println!("updated item {item_id}");
                Ok(())
            }
            ItemCmd::Bought { list_id, item_id } => {
                let mut session = open_session()?;
                let mut item = find_item(select_list(&mut session, list_id)?, item_id)?;
                item.purchased = true;
                session.update_item(item).map_err(|e| e.to_string())?;
                println!("item {item_id} marked purchased");
                Ok(())
            }
        },
        Cmd::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn open_session() -> Result<Session, String> {
    Session::open(Box::new(JsonFileStore::new("."))).map_err(|e| e.to_string())
}

/// Select `id` for editing and hand back a copy of the list, or a usage error
/// if there is no such list.
fn select_list(session: &mut Session, id: u32) -> Result<ShoppingList, String> {
    if !session.select(id) {
        return Err(format!("no list with id {id}"));
    }
    session
        .selected()
        .cloned()
        .ok_or_else(|| format!("no list with id {id}"))
}

fn find_item(list: ShoppingList, item_id: u32) -> Result<ShoppingItem, String> {
    list.items
        .into_iter()
        .find(|i| i.id == item_id)
        .ok_or_else(|| format!("no item with id {item_id}"))
}

fn print_lists_header() {
    println!("{:<5} {:<12} {:<6} {}", "ID", "CREATED", "ITEMS", "NAME");
    println!("{}", "-".repeat(50));
}

fn print_lists_row(list: &ShoppingList) {
    println!(
        "{:<5} {:<12} {:<6} {}",
        list.id,
        list.date_created.format("%Y-%m-%d"),
        list.items.len(),
        list.name
    );
}

fn print_items_header() {
    println!(
        "{:<5} {:<4} {:<20} {:>8} {:>10}  {}",
        "ID", "", "NAME", "QTY", "PRICE", "DESCRIPTION"
    );
    println!("{}", "-".repeat(60));
}

fn print_items_row(item: &ShoppingItem) {
    println!(
        "{:<5} {:<4} {:<20} {:>8} {:>10}  {}",
        item.id,
        if item.purchased { "[x]" } else { "[ ]" },
        item.name,
        item.quantity,
        item.price,
        item.description.as_deref().unwrap_or("")
    );
}
