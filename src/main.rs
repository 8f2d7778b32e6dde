use anyhow::{Context, Result, anyhow};
use clap::{Args as ClapArgs, Parser, Subcommand};
use shoplistbill::{
    Bill, Command, CommandOutcome, ItemForm, ListStore,
    config::Settings,
    dispatch,
    storage::{FileStore, ItemRepository},
    utils::message::share_message,
};
use tracing::{Level, info};

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the config file path.", global = true)]
    pub config: Option<String>,

    #[arg(
        long,
        help = "(Optional) Overrides the directory the list is saved in.",
        global = true
    )]
    pub data_dir: Option<String>,

    #[arg(long, help = "(Optional) Enables debug logging.", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
    /// Adds an item to the list.
    Add(ItemArgs),
    /// Replaces the item at row NO.
    Edit {
        #[arg(help = "Row number as shown by `list`.")]
        no: usize,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Deletes the item at row NO.
    Delete {
        #[arg(help = "Row number as shown by `list`.")]
        no: usize,
    },
    /// Prints the bill.
    List,
    /// Clears the entire list.
    Clear,
    /// Prints a fixed-width bill summary for sharing.
    Share,
}

#[derive(ClapArgs)]
pub struct ItemArgs {
    #[arg(long, help = "Item name.")]
    pub name: String,

    #[arg(long, help = "Quantity.", default_value = "")]
    pub qty: String,

    #[arg(long, help = "Quantity unit (kg, g, l, ml, unit).", default_value = "unit")]
    pub unit: String,

    #[arg(long, help = "(Optional) Secondary quantity.", default_value = "")]
    pub sub_qty: String,

    #[arg(long, help = "(Optional) Secondary quantity unit.", default_value = "none")]
    pub sub_unit: String,

    #[arg(long, help = "Price charged per basis quantity.", default_value = "")]
    pub price: String,

    #[arg(long, help = "Basis quantity the price is quoted for.", default_value = "1")]
    pub per_qty: String,

    #[arg(long, help = "Basis quantity unit.", default_value = "unit")]
    pub per_unit: String,
}

impl From<ItemArgs> for ItemForm {
    fn from(args: ItemArgs) -> Self {
        Self {
            name: args.name,
            qty_main: args.qty,
            unit_main: args.unit,
            qty_sub: args.sub_qty,
            unit_sub: args.sub_unit,
            price_amount: args.price,
            price_basis_qty: args.per_qty,
            price_basis_unit: args.per_unit,
        }
    }
}

fn row_index(no: usize) -> Result<usize> {
    no.checked_sub(1)
        .ok_or_else(|| anyhow!("row numbers start at 1"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut settings = Settings::load(&args.config)?;
    if let Some(dir) = args.data_dir {
        settings.storage.data_dir = dir.into();
    }
    let symbol = settings.display.currency_symbol.as_str();

    info!("Using data directory {}", settings.storage.data_dir.display());
    let repo = ItemRepository::new(FileStore::new(&settings.storage.data_dir));
    let mut list = ListStore::from_items(repo.load());

    let outcome = match args.action {
        Action::Add(item) => {
            let draft = ItemForm::from(item).into_draft();
            Some(dispatch(&mut list, &repo, Command::Submit(draft))?)
        }
        Action::Edit { no, item } => {
            dispatch(&mut list, &repo, Command::BeginEdit(row_index(no)?))
                .context("no such row")?;
            let draft = ItemForm::from(item).into_draft();
            Some(dispatch(&mut list, &repo, Command::Submit(draft))?)
        }
        Action::Delete { no } => Some(
            dispatch(&mut list, &repo, Command::Delete(row_index(no)?)).context("no such row")?,
        ),
        Action::Clear => Some(dispatch(&mut list, &repo, Command::ClearAll)?),
        Action::List => None,
        Action::Share => {
            println!(
                "{}",
                share_message(&settings.display.title, list.items(), symbol)
            );
            return Ok(());
        }
    };

    match outcome {
        Some(CommandOutcome::Added { index }) => println!("Added row {}", index + 1),
        Some(CommandOutcome::Replaced { index }) => println!("Updated row {}", index + 1),
        Some(CommandOutcome::Deleted { index, item }) => {
            println!("Deleted row {} ({})", index + 1, item.name)
        }
        Some(CommandOutcome::Cleared) => println!("Cleared the list"),
        _ => {}
    }

    println!("{}", Bill::from_list(&list, symbol));

    Ok(())
}
