mod config;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use saju_rs::{
    ALL_ELEMENTS, BirthChart, BirthInput, BirthTime, DaewoonCalculator, FiveElement, GanJi,
    Gender, LowPrecisionSun, SolarTermCalculator, TimeUnit, all_gapja, birth_chart,
    compatibility, compatibility_score, day_compatibility, gapja_by_code, luck_pillars,
};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "saju", about = "Korean Four Pillars and Daewoon CLI")]
struct Cli {
    /// TOML config file (falls back to $SAJU_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    date: NaiveDate,
    /// Treat the date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// Lunar leap month (only with --lunar)
    #[arg(long, requires = "lunar")]
    leap: bool,
    /// Birth time (HH:MM or HH:MM:SS, KST)
    #[arg(long, value_parser = parse_time, conflicts_with = "unit")]
    time: Option<NaiveTime>,
    /// Birth time unit by name, e.g. 진시
    #[arg(long, value_parser = parse_unit)]
    unit: Option<TimeUnit>,
    /// Gender: m/f, male/female, 남/여
    #[arg(long, value_parser = parse_gender, default_value = "m")]
    gender: Gender,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth
    Saju {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Daewoon direction, starting age and decade sequence
    Daewoon {
        #[command(flatten)]
        birth: BirthArgs,
        /// Number of periods to list (default from config)
        #[arg(long)]
        periods: Option<usize>,
        /// Date for the current period (default today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Luck pillars, balance and day compatibility on a date
    Luck {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query date (default today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Solar term of a date and the surrounding node terms
    Term {
        /// Civil date (YYYY-MM-DD, KST)
        date: NaiveDate,
    },
    /// Time unit of a clock time
    Unit {
        /// Clock time (HH:MM or HH:MM:SS, KST)
        #[arg(value_parser = parse_time)]
        time: NaiveTime,
    },
    /// Gapja catalog: one entry by code or name, or all 60
    Gapja {
        /// Code 1-60 or two-syllable name
        #[arg(value_parser = parse_pillar)]
        pillar: Option<GanJi>,
    },
    /// Compatibility score of two pillars (code or name)
    Compat {
        #[arg(value_parser = parse_pillar)]
        a: GanJi,
        #[arg(value_parser = parse_pillar)]
        b: GanJi,
        /// Day-pillar analysis with the harmony bonus
        #[arg(long)]
        day: bool,
    },
    /// Five-element relation of two elements (목/화/토/금/수 or English)
    Element {
        #[arg(value_parser = parse_element)]
        a: FiveElement,
        #[arg(value_parser = parse_element)]
        b: FiveElement,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("expected HH:MM or HH:MM:SS, got {s}"))
}

fn parse_unit(s: &str) -> Result<TimeUnit, String> {
    TimeUnit::find(s).map_err(|e| e.to_string())
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    s.parse().map_err(|e: saju_rs::SajuError| e.to_string())
}

fn parse_pillar(s: &str) -> Result<GanJi, String> {
    match s.parse::<u8>() {
        Ok(code) => GanJi::from_code(code)
            .ok_or_else(|| format!("gapja code out of range: {code} (1-60)")),
        Err(_) => GanJi::find(s).map_err(|e| e.to_string()),
    }
}

fn parse_element(s: &str) -> Result<FiveElement, String> {
    match ALL_ELEMENTS.iter().find(|e| e.english_name().eq_ignore_ascii_case(s)) {
        Some(e) => Ok(*e),
        None => FiveElement::find(s).map_err(|e| e.to_string()),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_config(path: Option<&PathBuf>) -> CliConfig {
    CliConfig::resolve(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_chart(config: &CliConfig, birth: &BirthArgs) -> BirthChart {
    let time = match (birth.time, birth.unit) {
        (Some(t), _) => BirthTime::Exact(t),
        (None, Some(u)) => BirthTime::Unit(u),
        (None, None) => {
            eprintln!("Birth time required: --time HH:MM or --unit <name>");
            std::process::exit(1);
        }
    };
    let mut input = if birth.lunar {
        BirthInput::lunar(birth.date, time, birth.gender)
    } else {
        BirthInput::solar(birth.date, time, birth.gender)
    };
    input.leap_month = birth.leap;
    let sun = LowPrecisionSun::with_offset(config.utc_offset_minutes);
    let chart = birth_chart(sun, &config.lunar_calendar(), &input).unwrap_or_else(|e| {
        eprintln!("Failed to build chart: {e}");
        std::process::exit(1);
    });
    if chart.degraded {
        eprintln!("warning: calendar conversion unavailable, date used as given");
    }
    chart
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn describe(g: GanJi) -> String {
    format!(
        "{} ({}) {}/{}",
        g.two_letters(),
        g.hanja(),
        g.stem().element().name(),
        g.branch().element().name()
    )
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    let sun = LowPrecisionSun::with_offset(config.utc_offset_minutes);

    match cli.command {
        Commands::Saju { birth } => {
            let chart = require_chart(&config, &birth);
            if cli.json {
                print_json(&chart);
                return;
            }
            println!("Solar date: {}", chart.solar_date);
            let l = chart.lunar_date;
            let leap = if l.leap { " (윤달)" } else { "" };
            println!("Lunar date: {}-{:02}-{:02}{leap}", l.year, l.month, l.day);
            println!("Saju:       {}", chart.saju);
            println!("  년주 {}", describe(chart.saju.yearly()));
            println!("  월주 {}", describe(chart.saju.monthly()));
            println!("  일주 {}", describe(chart.saju.daily()));
            println!("  시주 {}", describe(chart.saju.hourly()));
            println!("Day master: {}", chart.saju.day_master().name());
            let missing: Vec<&str> =
                chart.saju.missing_elements().iter().map(|e| e.name()).collect();
            if !missing.is_empty() {
                println!("Missing:    {}", missing.join(", "));
            }
        }

        Commands::Daewoon { birth, periods, on } => {
            let chart = require_chart(&config, &birth);
            let calc = DaewoonCalculator::with_config(sun, config.daewoon);
            let direction = calc.direction(chart.gender(), chart.saju.yearly().stem().polarity());
            let starting_age = calc
                .starting_age_for(chart.solar_date, direction)
                .unwrap_or_else(|e| {
                    eprintln!("Starting age search failed: {e}");
                    std::process::exit(1);
                });
            let n = periods.unwrap_or(config.periods);
            let list = calc.sequence_n(chart.saju.monthly(), direction, starting_age, n);
            let on = on.unwrap_or_else(today);
            let current = calc
                .current(chart.solar_date, chart.gender(), &chart.saju, on)
                .unwrap_or_else(|e| {
                    eprintln!("Current period search failed: {e}");
                    std::process::exit(1);
                });
            if cli.json {
                print_json(&serde_json::json!({
                    "direction": direction,
                    "starting_age": starting_age,
                    "periods": list,
                    "date": on,
                    "korean_age": calc.korean_age(chart.solar_date, on),
                    "current": current,
                }));
                return;
            }
            println!("Direction:    {} ({})", direction.name(), direction.korean_name());
            println!("Starting age: {starting_age}");
            for p in &list {
                let mark = if Some(*p) == current { "  <- current" } else { "" };
                println!("  {p}{mark}");
            }
            println!(
                "Korean age on {on}: {}",
                calc.korean_age(chart.solar_date, on)
            );
            if current.is_none() {
                println!("No daewoon in force yet");
            }
        }

        Commands::Luck { birth, on } => {
            let chart = require_chart(&config, &birth);
            let on = on.unwrap_or_else(today);
            let luck = luck_pillars(sun, config.daewoon, &chart, on).unwrap_or_else(|e| {
                eprintln!("Luck pillar search failed: {e}");
                std::process::exit(1);
            });
            if cli.json {
                print_json(&luck);
                return;
            }
            match luck.daewoon {
                Some(p) => {
                    println!("대운 {} (ages {}-{})", describe(p.ganji), p.start_age, p.end_age);
                }
                None => println!("대운 -"),
            }
            println!("세운 {}", describe(luck.yearly));
            println!("월운 {}", describe(luck.monthly));
            println!("일운 {}", describe(luck.daily));
            println!("Natal: {}", luck.natal);
            let b = luck.balance;
            let shares: Vec<String> = ALL_ELEMENTS
                .iter()
                .map(|e| format!("{} {} ({:.1}%)", e.name(), b.count(*e), b.percentage(*e)))
                .collect();
            println!("Balance: {}", shares.join(", "));
            println!("  score {:.2} ({})", b.score, b.level.korean_name());
            let c = luck.compatibility;
            println!(
                "Day compatibility: {} ({}), {}{}",
                c.score,
                c.level.korean_name(),
                c.relation.korean_name(),
                if c.harmony { ", 육합" } else { "" }
            );
        }

        Commands::Term { date } => {
            let terms = SolarTermCalculator::with_config(sun, config.daewoon.term_search);
            let lon = terms.longitude(date);
            let term = terms.exact_term_for_date(date);
            let node = terms.term_for_date(date);
            let prev = terms.prev_node_term(date);
            let next = terms.next_node_term(date);
            let (prev, next) = match (prev, next) {
                (Ok(p), Ok(n)) => (p, n),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("Term search failed: {e}");
                    std::process::exit(1);
                }
            };
            if cli.json {
                print_json(&serde_json::json!({
                    "date": date,
                    "longitude_deg": lon,
                    "term": term,
                    "node_term": node,
                    "month_branch": node.branch().name(),
                    "prev_node": prev,
                    "next_node": next,
                }));
                return;
            }
            println!("Solar longitude: {lon:.4} deg");
            println!("Term:      {} ({})", term.name(), term.hanja());
            println!("Node term: {} -> {}월", node.name(), node.branch().name());
            println!("Started:   {} {} ({} days ago)", prev.term.name(), prev.date, prev.days);
            println!("Next:      {} {} (in {} days)", next.term.name(), next.date, next.days);
        }

        Commands::Unit { time } => {
            let unit = TimeUnit::from_time(time);
            let (h, m) = unit.start_hm();
            if cli.json {
                print_json(&unit);
                return;
            }
            println!("{} (from {h:02}:{m:02}, branch {})", unit.name(), unit.branch().name());
        }

        Commands::Gapja { pillar } => match pillar {
            Some(g) => {
                let Some(e) = gapja_by_code(g.code()) else {
                    eprintln!("Unknown gapja: {g}");
                    std::process::exit(1);
                };
                if cli.json {
                    print_json(&e);
                    return;
                }
                println!(
                    "{:>2} {} ({}) {}/{} {} {}띠",
                    e.code,
                    e.korean_name,
                    e.ganji.hanja(),
                    e.stem_element.name(),
                    e.branch_element.name(),
                    e.polarity.name(),
                    e.animal
                );
            }
            None => {
                let all: Vec<_> = all_gapja().collect();
                if cli.json {
                    print_json(&all);
                    return;
                }
                for e in all {
                    let hanja = e.ganji.hanja();
                    println!("{:>2} {} ({hanja}) {}띠", e.code, e.korean_name, e.animal);
                }
            }
        },

        Commands::Compat { a, b, day } => {
            if day {
                let c = day_compatibility(a, b);
                if cli.json {
                    print_json(&c);
                    return;
                }
                println!(
                    "{} vs {}: {} ({}), {}{}",
                    a,
                    b,
                    c.score,
                    c.level.korean_name(),
                    c.relation.korean_name(),
                    if c.harmony { ", 육합" } else { "" }
                );
                return;
            }
            let score = compatibility_score(a.code(), b.code()).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if cli.json {
                print_json(&serde_json::json!({ "a": a, "b": b, "score": score }));
                return;
            }
            println!("{a} vs {b}: {score}");
        }

        Commands::Element { a, b } => {
            let relation = compatibility(a, b);
            if cli.json {
                print_json(&serde_json::json!({
                    "a": a,
                    "b": b,
                    "relation": relation,
                    "score": relation.score(),
                }));
                return;
            }
            println!(
                "{} -> {}: {} ({}), score {}",
                a.name(),
                b.name(),
                relation.name(),
                relation.korean_name(),
                relation.score()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn time_formats() {
        assert_eq!(parse_time("07:30").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(
            parse_time("23:45:10").unwrap(),
            NaiveTime::from_hms_opt(23, 45, 10).unwrap()
        );
        assert!(parse_time("7h30").is_err());
    }

    #[test]
    fn pillar_by_code_or_name() {
        assert_eq!(parse_pillar("31").unwrap().two_letters(), "갑오");
        assert_eq!(parse_pillar("갑오").unwrap().code(), 31);
        assert!(parse_pillar("0").is_err());
        assert!(parse_pillar("61").is_err());
        assert!(parse_pillar("갑축").is_err());
    }

    #[test]
    fn element_names() {
        assert_eq!(parse_element("목").unwrap(), FiveElement::Wood);
        assert_eq!(parse_element("Metal").unwrap(), FiveElement::Metal);
        assert!(parse_element("air").is_err());
    }

    #[test]
    fn birth_args_parse() {
        let cli = Cli::try_parse_from([
            "saju", "saju", "2000-03-17", "--time", "10:30", "--gender", "여",
        ])
        .unwrap();
        let Commands::Saju { birth } = cli.command else {
            panic!("expected saju subcommand");
        };
        assert_eq!(birth.gender, Gender::Female);
        assert_eq!(birth.time, NaiveTime::from_hms_opt(10, 30, 0));
        assert!(!birth.lunar);
    }

    #[test]
    fn leap_requires_lunar() {
        let r = Cli::try_parse_from(["saju", "saju", "2000-02-12", "--unit", "사시", "--leap"]);
        assert!(r.is_err());
    }
}
