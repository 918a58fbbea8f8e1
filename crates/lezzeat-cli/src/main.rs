use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lezzeat_core::{
    logging, CheckoutError, ItemId, LoginForm, MenuSection, Notice, Notifier, OrderFilter,
    OrderStatus, SignupForm, StoreError, Storefront, StorefrontConfig, UserProfile,
};
use std::io::{self, Write};
use std::path::PathBuf;

/// Prints notices the way the app shows its alerts
///
/// Notices go to stderr so stdout carries only command output.
struct ConsoleNotifier<W> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, notice: &Notice) {
        // A closed terminal is not worth failing the order over
        let _ = writeln!(self.out, "== {} ==\n{}\n", notice.title, notice.body);
    }
}

fn cli() -> Command {
    Command::new("lezzeat")
        .version(lezzeat_core::VERSION)
        .about("LezzEat campus canteen storefront")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("menu")
                .about("Show the menu")
                .arg(
                    Arg::new("section")
                        .long("section")
                        .value_parser(MenuSection::ALL.map(MenuSection::key))
                        .help("Only this section"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("slots")
                .about("List pickup times")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("order")
                .about("Place an order")
                .arg(
                    Arg::new("item")
                        .long("item")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("Menu item as ID or IDxQTY, repeatable"),
                )
                .arg(
                    Arg::new("slot")
                        .long("slot")
                        .required(true)
                        .help("Pickup time label, e.g. \"12:00 PM\""),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducible OTPs"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("history")
                .about("Show past orders")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_parser(OrderStatus::ALL.map(OrderStatus::key))
                        .help("Only orders in this status"),
                ),
        )
        .subcommand(Command::new("profile").about("Show the profile card"))
        .subcommand(
            Command::new("login")
                .about("Sign in")
                .arg(Arg::new("username").long("username").default_value(""))
                .arg(Arg::new("password").long("password").default_value("")),
        )
        .subcommand(
            Command::new("signup")
                .about("Create an account")
                .arg(Arg::new("name").long("name").default_value(""))
                .arg(Arg::new("username").long("username").default_value(""))
                .arg(Arg::new("roll-number").long("roll-number").default_value(""))
                .arg(Arg::new("email").long("email").default_value(""))
                .arg(Arg::new("password").long("password").default_value(""))
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .default_value(""),
                ),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn load_config(matches: &ArgMatches) -> Result<StorefrontConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StorefrontConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StorefrontConfig::new(),
    };
    if let Some(level) = matches.get_one::<String>("log-level") {
        config = config.with_log_level(level);
    }
    if matches.get_flag("log-json") {
        config.logging.json = true;
    }
    Ok(config)
}

/// `7` or `7x3`
fn parse_item(spec: &str) -> Result<(ItemId, u32)> {
    let (id, quantity) = match spec.split_once(['x', 'X']) {
        Some((id, qty)) => {
            let qty = qty
                .parse::<u32>()
                .with_context(|| format!("bad quantity in {spec:?}"))?;
            (id, qty)
        }
        None => (spec, 1),
    };
    let id = id
        .trim()
        .parse::<u32>()
        .with_context(|| format!("bad item id in {spec:?}"))?;
    if quantity == 0 {
        bail!("quantity must be positive in {spec:?}");
    }
    Ok((ItemId(id), quantity))
}

fn string_arg(args: &ArgMatches, name: &str) -> String {
    args.get_one::<String>(name).cloned().unwrap_or_default()
}

fn show_menu(store: &Storefront, args: &ArgMatches) -> Result<()> {
    let only = args
        .get_one::<String>("section")
        .and_then(|key| MenuSection::from_key(key));
    let currency = &store.config().currency_symbol;

    if args.get_flag("json") {
        let sections: Vec<_> = store
            .catalog()
            .sections()
            .filter(|(section, _)| !only.is_some_and(|s| s != *section))
            .map(|(section, items)| serde_json::json!({ "section": section, "items": items }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for (section, items) in store.catalog().sections() {
        if only.is_some_and(|s| s != section) {
            continue;
        }
        println!("{}", section.title());
        for item in items {
            println!(
                "  [{:>2}] {:<18} {:>10}  {}",
                item.id,
                item.name,
                item.price.display_with(currency),
                item.category
            );
        }
        println!();
    }
    Ok(())
}

fn show_slots(store: &Storefront, args: &ArgMatches) -> Result<()> {
    let slots: Vec<_> = store.slot_window().iter().collect();
    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }
    println!("Available pickup times: {}", store.slot_window().describe());
    for slot in &slots {
        println!("  {slot}");
    }
    Ok(())
}

fn place_order(store: &mut Storefront, args: &ArgMatches, out: &mut impl Write) -> Result<()> {
    for spec in args.get_many::<String>("item").into_iter().flatten() {
        let (id, quantity) = parse_item(spec)?;
        let current = store.add_to_cart(id)?;
        if quantity > 1 {
            store.set_quantity(id, current.saturating_add(quantity - 1))?;
        }
    }

    let currency = store.config().currency_symbol.clone();
    let json = args.get_flag("json");
    if !json {
        for line in store.cart_lines() {
            writeln!(
                out,
                "{} x{}  {}",
                line.item.name,
                line.quantity,
                line.line_total().display_with(&currency)
            )?;
        }
        for (label, value) in store.totals().rows(&currency) {
            writeln!(out, "{label:<12} {value:>10}")?;
        }
        writeln!(out)?;
    }

    store.begin_checkout()?;
    let slot = string_arg(args, "slot");
    store.select_pickup(&slot)?;
    let confirmation = store.confirm_order()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &confirmation)?;
        writeln!(out)?;
    }
    Ok(())
}

fn show_history(store: &Storefront, args: &ArgMatches) {
    let filter = args
        .get_one::<String>("status")
        .and_then(|key| OrderStatus::from_key(key))
        .map_or(OrderFilter::All, OrderFilter::Status);
    let currency = &store.config().currency_symbol;

    for order in store.order_history(filter) {
        println!("{}  [{}]", order.order_number, order.status);
        println!("  Placed: {}  Pickup: {}", order.placed_time, order.pickup_time);
        for item in &order.items {
            println!("  {} - {}", item.name, item.detail(currency));
        }
        println!("  Total: {}  ({})", order.total.display_with(currency), order.payment_status);
        if let Some(otp) = &order.otp {
            println!("  OTP: {otp}");
        }
        println!();
    }
}

fn show_profile(profile: &UserProfile) {
    println!("{}", profile.name);
    for field in profile.fields() {
        let lock = if field.editable { "" } else { " (locked)" };
        println!("  {:<15} {}{lock}", field.label, field.value);
    }
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = load_config(matches)?;
    if let Some(("order", args)) = matches.subcommand() {
        if let Some(seed) = args.get_one::<u64>("seed") {
            config = config.with_otp_seed(*seed);
        }
    }
    logging::init(&config.logging);

    let mut store = Storefront::builder(config)
        .notifier(ConsoleNotifier::stderr())
        .start()?;

    match matches.subcommand() {
        Some(("menu", args)) => show_menu(&store, args)?,
        Some(("slots", args)) => show_slots(&store, args)?,
        Some(("order", args)) => place_order(&mut store, args, &mut io::stdout().lock())?,
        Some(("history", args)) => show_history(&store, args),
        Some(("profile", _)) => show_profile(store.profile()),
        Some(("login", args)) => {
            let form = LoginForm {
                username: string_arg(args, "username"),
                password: string_arg(args, "password"),
            };
            let session = store.login(&form).await?;
            println!("Signed in as {}", session.username);
        }
        Some(("signup", args)) => {
            let form = SignupForm {
                name: string_arg(args, "name"),
                username: string_arg(args, "username"),
                roll_number: string_arg(args, "roll-number"),
                email: string_arg(args, "email"),
                password: string_arg(args, "password"),
                confirm_password: string_arg(args, "confirm-password"),
            };
            store.sign_up(&form).await?;
        }
        _ => unreachable!("subcommand is required"),
    }

    store.shutdown();
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(&matches).await {
        // The storefront already raised these as notices
        let shown = e.downcast_ref::<StoreError>().is_some_and(|e| {
            matches!(
                e,
                StoreError::Validation(_) | StoreError::Checkout(CheckoutError::EmptyCart)
            )
        });
        if !shown {
            eprintln!("error: {e:#}");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_specs() {
        assert_eq!(parse_item("4").unwrap(), (ItemId(4), 1));
        assert_eq!(parse_item("1x2").unwrap(), (ItemId(1), 2));
        assert_eq!(parse_item("12X3").unwrap(), (ItemId(12), 3));
        assert!(parse_item("1x0").is_err());
        assert!(parse_item("chai").is_err());
        assert!(parse_item("1x").is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn order_requires_item_and_slot() {
        assert!(cli().try_get_matches_from(["lezzeat", "order", "--slot", "9:30 AM"]).is_err());
        let matches = cli()
            .try_get_matches_from([
                "lezzeat", "order", "--item", "1x2", "--item", "5", "--slot", "9:30 AM",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let items: Vec<_> = args.get_many::<String>("item").unwrap().collect();
        assert_eq!(items, ["1x2", "5"]);
    }

    fn quiet_store() -> Storefront {
        Storefront::builder(StorefrontConfig::new().with_otp_seed(1))
            .notifier(ConsoleNotifier { out: io::sink() })
            .start()
            .unwrap()
    }

    fn order_args(argv: &[&str]) -> ArgMatches {
        let matches = cli()
            .try_get_matches_from(["lezzeat", "order"].iter().chain(argv).copied())
            .unwrap();
        matches.subcommand_matches("order").unwrap().clone()
    }

    #[test]
    fn json_order_output_is_pure_json() {
        let mut store = quiet_store();
        let args = order_args(&["--item", "1x2", "--slot", "12:00 PM", "--json"]);
        let mut stdout = Vec::new();
        place_order(&mut store, &args, &mut stdout).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(value["pickup_time"]["label"], "12:00 PM");
        assert_eq!(value["otp"].as_u64().unwrap().to_string().len(), 6);
    }

    #[test]
    fn notices_do_not_reach_command_output() {
        let mut notices = Vec::new();
        let mut notifier = ConsoleNotifier { out: &mut notices };
        notifier.notify(&Notice::new("Order Confirmed!", "OTP: 123456"));
        assert_eq!(
            String::from_utf8(notices).unwrap(),
            "== Order Confirmed! ==\nOTP: 123456\n\n"
        );
    }

    #[test]
    fn large_quantities_are_set_in_one_step() {
        let mut store = quiet_store();
        let args = order_args(&[
            "--item", "1x4000000000", "--item", "1x2", "--item", "5", "--slot", "9:30 AM",
        ]);
        place_order(&mut store, &args, &mut io::sink()).unwrap();

        assert_eq!(store.cart().quantity_of(ItemId(1)), 4_000_000_002);
        assert_eq!(store.cart().quantity_of(ItemId(5)), 1);
    }
}
