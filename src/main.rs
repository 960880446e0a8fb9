use chrono::Weekday;
use clap::Parser;
use reservation_desk::config::cli::{BookArgs, Command};
use reservation_desk::core::schedule::operating_hours;
use reservation_desk::core::validator::validate_field;
use reservation_desk::core::{Clock, Field, Guests, TimeSlot};
use reservation_desk::utils::{logger, validation::Validate};
use reservation_desk::{
    AppConfig, CliConfig, ConsoleNotifier, FixedClock, ReservationForm, ReservationService,
    SubmitStatus, SystemClock,
};

const EXIT_CONFIG_ERROR: i32 = 1;
const EXIT_REJECTED: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting reservation-desk CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration load failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let tz = match config.timezone() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::error!("❌ Configuration load failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    tracing::debug!("🕒 Restaurant time zone: {}", tz);

    let exit_code = match &cli.now {
        Some(now) => run(&cli.command, &config, FixedClock::parse(now, tz)?).await?,
        None => run(&cli.command, &config, SystemClock::new(tz)).await?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<C: Clock>(command: &Command, config: &AppConfig, clock: C) -> anyhow::Result<i32> {
    match command {
        Command::Hours => {
            print_hours();
            Ok(0)
        }
        Command::Slots { date } => Ok(print_slots(date, clock)),
        Command::Book(args) => book(args, config, clock).await,
    }
}

fn print_hours() {
    let week = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    for weekday in week {
        let hours = operating_hours(weekday);
        let label = |hour: u32| TimeSlot::new(hour).map(|s| s.to_string()).unwrap_or_default();
        println!(
            "{:<4} seatings {} - {} (closes {})",
            weekday.to_string(),
            label(hours.first_slot),
            label(hours.last_slot),
            label(hours.closes)
        );
    }
}

fn print_slots<C: Clock>(date: &str, clock: C) -> i32 {
    if let Some(error) = validate_field(Field::Date, date, clock.now().date_naive()) {
        eprintln!("❌ {}", error);
        return EXIT_REJECTED;
    }

    let mut form = ReservationForm::new(clock);
    form.change(Field::Date, date);
    let slots = form.open_time_selector().to_vec();

    if let Some(error) = form.visible_error(Field::Time) {
        eprintln!("❌ {}", error);
        return EXIT_REJECTED;
    }
    if slots.is_empty() {
        println!("No available times on {}.", date);
        return EXIT_REJECTED;
    }

    for slot in slots {
        println!("{}", slot);
    }
    0
}

async fn book<C: Clock>(args: &BookArgs, config: &AppConfig, clock: C) -> anyhow::Result<i32> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        return Ok(EXIT_CONFIG_ERROR);
    }

    let service = ReservationService::new(config.api_client()?);
    let mut form = ReservationForm::new(clock);

    form.change(Field::Name, args.name.as_str());
    form.change(Field::Email, args.email.as_str());
    form.change(Field::Phone, args.phone.as_deref().unwrap_or_default());
    form.change(Field::Date, args.date.as_str());
    for field in [Field::Name, Field::Email, Field::Phone, Field::Date] {
        form.blur(field);
    }

    let offered = form.open_time_selector().to_vec();
    tracing::debug!("Offered slots: {:?}", offered);

    // "19:00" 也接受，統一成選單上的標籤
    let time = args
        .time
        .parse::<TimeSlot>()
        .map(|slot| slot.to_string())
        .unwrap_or_else(|_| args.time.clone());
    form.change(Field::Time, time);
    form.blur(Field::Time);

    if let Some(guests) = Guests::new(args.guests) {
        form.set_guests(guests);
    }
    form.set_newsletter_signup(args.newsletter);

    match form.submit(&service, &ConsoleNotifier).await {
        SubmitStatus::Completed(outcome) if outcome.success => Ok(0),
        SubmitStatus::Completed(_) => Ok(EXIT_REJECTED),
        SubmitStatus::Rejected | SubmitStatus::Busy => {
            for field in Field::ALL {
                if let Some(error) = form.visible_error(field) {
                    eprintln!("   {}: {}", field, error);
                }
            }
            Ok(EXIT_REJECTED)
        }
    }
}
