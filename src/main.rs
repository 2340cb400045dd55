use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use zodiac_reading::adapters::export::{export_history, ExportFormat};
use zodiac_reading::config::cli::{Command, CompatArgs, HistoryArgs, HoroscopeArgs, ProfileArgs};
use zodiac_reading::core::engine::DynReadingEngine;
use zodiac_reading::core::{narrative, sign_resolver, ConfigProvider};
use zodiac_reading::domain::model::{
    CompatibilityReport, HoroscopeReport, Person, Profile, ReadingHistory,
};
use zodiac_reading::utils::error::{ErrorSeverity, ReadingError};
use zodiac_reading::utils::{logger, validation::Validate};
use zodiac_reading::{BirthDate, CliConfig, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose || config.verbose_logging());
    }

    tracing::info!("Starting zodiac-reading");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut engine = DynReadingEngine::from_config(&config);

    if let Err(e) = run(&cli.command, &config, &mut engine) {
        tracing::error!(
            "❌ Reading failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(
    command: &Command,
    config: &TomlConfig,
    engine: &mut DynReadingEngine,
) -> Result<(), ReadingError> {
    let as_json = config.output_format() == "json";

    match command {
        Command::Sign { date } => {
            let date: BirthDate = date.parse()?;
            print_sign(&date, as_json)
        }
        Command::Horoscope(args) => horoscope(args, config, engine, as_json),
        Command::Compat(args) => compat(args, config, engine, as_json),
        Command::History(args) => history(args, config, engine, as_json),
        Command::Profile(args) => profile(args, config, engine, as_json),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ReadingError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_sign(date: &BirthDate, as_json: bool) -> Result<(), ReadingError> {
    let sign = sign_resolver::resolve_date(date);

    if as_json {
        return print_json(&serde_json::json!({
            "date": date.to_string(),
            "zodiacSign": sign,
            "element": sign.element().to_string(),
            "rulingPlanet": sign.ruling_planet(),
            "traits": narrative::traits(sign),
        }));
    }

    println!("{} {}", sign.glyph(), sign);
    println!("  Element: {}", sign.element());
    println!("  Ruling Planet: {}", sign.ruling_planet());
    println!("  Traits: {}", narrative::traits(sign).join(", "));
    Ok(())
}

fn horoscope(
    args: &HoroscopeArgs,
    config: &TomlConfig,
    engine: &mut DynReadingEngine,
    as_json: bool,
) -> Result<(), ReadingError> {
    let person = Person {
        name: args.name.clone(),
        date_of_birth: args.date.parse()?,
        time_of_birth: args.time.clone(),
        location: args.location.clone(),
    };

    let report = engine.horoscope(&person)?;
    if args.save {
        save_enabled(config)?;
        let record = engine.save_horoscope(config.user_id(), &report)?;
        tracing::info!("📁 Saved horoscope reading {}", record.id);
    }

    if as_json {
        return print_json(&report);
    }
    print_horoscope(&report);
    Ok(())
}

fn compat(
    args: &CompatArgs,
    config: &TomlConfig,
    engine: &mut DynReadingEngine,
    as_json: bool,
) -> Result<(), ReadingError> {
    let first = Person {
        name: args.name1.clone(),
        date_of_birth: args.date1.parse()?,
        time_of_birth: args.time1.clone(),
        location: None,
    };
    let second = Person {
        name: args.name2.clone(),
        date_of_birth: args.date2.parse()?,
        time_of_birth: args.time2.clone(),
        location: None,
    };

    let report = engine.compatibility(&first, &second)?;
    if args.save {
        save_enabled(config)?;
        let record = engine.save_compatibility(config.user_id(), &report)?;
        tracing::info!("📁 Saved compatibility reading {}", record.id);
    }

    if as_json {
        return print_json(&report);
    }
    print_compatibility(&report);
    Ok(())
}

fn history(
    args: &HistoryArgs,
    config: &TomlConfig,
    engine: &mut DynReadingEngine,
    as_json: bool,
) -> Result<(), ReadingError> {
    save_enabled(config)?;
    let history = engine.history(config.user_id())?;

    if let Some(format) = &args.export {
        let format: ExportFormat = format.parse()?;
        match &args.out {
            Some(path) => {
                export_history(&history, format, File::create(path)?)?;
                println!("📁 Exported history to: {}", path);
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                export_history(&history, format, &mut handle)?;
                handle.flush()?;
            }
        }
        return Ok(());
    }

    if as_json {
        return print_json(&history);
    }
    print_history(&history, config.user_id());
    Ok(())
}

fn profile(
    args: &ProfileArgs,
    config: &TomlConfig,
    engine: &mut DynReadingEngine,
    as_json: bool,
) -> Result<(), ReadingError> {
    save_enabled(config)?;
    let user_id = config.user_id();

    let current = if args.has_updates() {
        let mut profile = engine.profile(user_id)?.unwrap_or_else(|| Profile {
            id: user_id.to_string(),
            ..Profile::default()
        });
        if let Some(v) = &args.full_name {
            profile.full_name = Some(v.clone());
        }
        if let Some(v) = &args.username {
            profile.username = Some(v.clone());
        }
        if let Some(v) = &args.birth_date {
            profile.birth_date = Some(v.clone());
        }
        if let Some(v) = &args.birth_time {
            profile.birth_time = Some(v.clone());
        }
        if let Some(v) = &args.birth_location {
            profile.birth_location = Some(v.clone());
        }
        Some(engine.upsert_profile(profile)?)
    } else {
        engine.profile(user_id)?
    };

    match current {
        Some(profile) if as_json => print_json(&profile),
        Some(profile) => {
            println!("👤 Profile {}", profile.id);
            println!("  Name: {}", profile.full_name.as_deref().unwrap_or("-"));
            println!("  Username: {}", profile.username.as_deref().unwrap_or("-"));
            println!("  Birth date: {}", profile.birth_date.as_deref().unwrap_or("-"));
            println!("  Birth time: {}", profile.birth_time.as_deref().unwrap_or("-"));
            println!("  Location: {}", profile.birth_location.as_deref().unwrap_or("-"));
            let sign = profile.zodiac_sign.as_deref().unwrap_or("-");
            println!("  Zodiac sign: {}", sign);
            if profile.zodiac_sign.is_some() {
                println!("  Traits: {}", narrative::traits_for_name(sign).join(", "));
            }
            Ok(())
        }
        None => {
            println!("No profile stored for '{}'", user_id);
            Ok(())
        }
    }
}

fn save_enabled(config: &TomlConfig) -> Result<(), ReadingError> {
    if !config.history_enabled() {
        return Err(ReadingError::ConfigValidationError {
            field: "history.enabled".to_string(),
            message: "reading history is disabled".to_string(),
        });
    }
    Ok(())
}

fn print_horoscope(report: &HoroscopeReport) {
    let reading = &report.reading;
    println!("🔮 {} - {}", report.person.name, reading.zodiac_sign);
    println!("  Born: {}", report.person.date_of_birth);
    if let Some(time) = &report.person.time_of_birth {
        println!("  Time: {}", time);
    }
    if let Some(location) = &report.person.location {
        println!("  Location: {}", location);
    }
    println!("  Traits: {}", reading.traits.join(", "));
    println!();
    println!("✨ Life Path\n{}\n", reading.horoscope);
    println!("🌙 Forecast\n{}\n", reading.forecast);
    println!("💼 Career\n{}\n", reading.career_forecast);
    println!("❤️ Love\n{}\n", reading.love_forecast);
    println!("🏠 Family\n{}\n", reading.family_forecast);
    println!("💰 Finance\n{}\n", reading.finance_forecast);
    println!("🍀 Lucky Cycle\n{}", reading.lucky_cycle);
}

fn print_compatibility(report: &CompatibilityReport) {
    let result = &report.compatibility;
    for summary in [&report.person1, &report.person2] {
        let sign = summary.zodiac_sign;
        println!(
            "{} {} - {} ({}, {})",
            sign.glyph(),
            summary.person.name,
            sign,
            sign.element(),
            sign.ruling_planet()
        );
        let top: Vec<&str> = summary.traits.iter().take(3).map(String::as_str).collect();
        println!("  Traits: {}", top.join(", "));
    }
    println!();
    println!("💞 Cosmic Compatibility Score: {}% (grade {})", result.score, result.grade());
    println!();
    println!("❤️ Romantic Potential\n{}\n", result.romantic_potential);
    println!("💬 Communication Style\n{}\n", result.communication_style);
    println!("⚠️ Challenges\n{}\n", result.challenges);
    println!("✨ Love Energy\n{}", result.love_energy);
}

fn print_history(history: &ReadingHistory, user_id: &str) {
    println!("📋 Reading history for '{}'", user_id);
    println!();
    println!("🔮 Horoscope readings: {}", history.horoscopes.len());
    for record in &history.horoscopes {
        println!("  {} {} {}", record.created_at.format("%Y-%m-%d %H:%M"), record.reading_type, record.id);
    }
    println!();
    println!("💞 Compatibility readings: {}", history.compatibilities.len());
    for record in &history.compatibilities {
        let score = record
            .compatibility_score
            .map(|s| format!("{}%", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {} & {} {}",
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.person1_name,
            record.person2_name,
            score
        );
    }
}
