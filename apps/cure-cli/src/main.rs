mod config;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use cure_concrete::{
    ConcreteModel, ConcreteSpecification, CuringHistory, CuringInterval, DevelopmentClass, Edition,
    PropertyReport, Samples, StrengthClass,
};
use cure_core::{in_celsius, in_days, in_gpa, in_mpa, mpa};
use error::{CliError, CliResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cure-cli")]
#[command(about = "Concrete strength and stiffness development under real curing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate strength and stiffness at one or more ages
    Evaluate {
        /// YAML configuration file (flags override its values)
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        concrete: ConcreteArgs,
        /// Ages in days, comma separated
        #[arg(long, value_delimiter = ',')]
        age: Vec<f64>,
        /// Curing temperatures in °C, comma separated
        #[arg(long, value_delimiter = ',')]
        temperature: Vec<f64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the strength and development classes of an edition
    Classes {
        #[arg(long, default_value = "2023")]
        edition: Edition,
    },
    /// Properties after a curing history of DAYS@CELSIUS periods
    Maturity {
        #[command(flatten)]
        concrete: ConcreteArgs,
        /// Curing period, e.g. 3@5 for three days at 5 °C (repeatable)
        #[arg(long = "interval", required = true, value_parser = parse_interval)]
        intervals: Vec<CuringInterval>,
    },
}

#[derive(clap::Args)]
struct ConcreteArgs {
    #[arg(long)]
    edition: Option<Edition>,
    /// Strength class label, e.g. C30/37
    #[arg(long)]
    strength_class: Option<StrengthClass>,
    /// Development class label: S/N/R (2004) or CS/CN/CR (2023)
    #[arg(long)]
    development_class: Option<DevelopmentClass>,
    /// Reference age in days
    #[arg(long)]
    reference_age: Option<f64>,
    /// Aggregate coefficient k_E (2023)
    #[arg(long)]
    k_e: Option<f64>,
    /// Use the constant activation energy instead of the linear expression
    #[arg(long)]
    constant_activation_energy: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            config,
            concrete,
            age,
            temperature,
            format,
        } => cmd_evaluate(config, &concrete, age, temperature, format),
        Commands::Classes { edition } => cmd_classes(edition),
        Commands::Maturity {
            concrete,
            intervals,
        } => cmd_maturity(&concrete, intervals),
    }
}

fn parse_interval(s: &str) -> Result<CuringInterval, String> {
    let (duration, temperature) = s
        .split_once('@')
        .ok_or_else(|| format!("expected DAYS@CELSIUS, got '{s}'"))?;
    let duration: f64 = duration
        .trim()
        .parse()
        .map_err(|e| format!("bad duration '{duration}': {e}"))?;
    let temperature: f64 = temperature
        .trim()
        .parse()
        .map_err(|e| format!("bad temperature '{temperature}': {e}"))?;
    Ok(CuringInterval::new(duration, temperature))
}

fn samples_from(values: Vec<f64>) -> Option<Samples> {
    match values.len() {
        0 => None,
        1 => Some(Samples::Scalar(values[0])),
        _ => Some(Samples::Series(values)),
    }
}

/// Build the model from optional base values and command-line overrides.
fn build_model(
    base_edition: Edition,
    base: Option<ConcreteSpecification>,
    args: &ConcreteArgs,
) -> ConcreteModel {
    let edition = args.edition.unwrap_or(base_edition);
    let mut spec = base.unwrap_or_else(|| ConcreteSpecification::for_edition(edition));
    if let Some(class) = args.strength_class {
        spec.strength_class = class;
    }
    match args.development_class {
        Some(class) => spec.development_class = class,
        None => {
            // Defaults filled in by the config loader do not know the edition
            let standard = edition.standard();
            if !standard
                .table()
                .development_classes()
                .contains(&spec.development_class)
            {
                let fallback = standard.default_development_class();
                tracing::warn!(
                    configured = %spec.development_class,
                    used = %fallback,
                    %edition,
                    "development class not tabulated by edition, using its default"
                );
                spec.development_class = fallback;
            }
        }
    }
    if let Some(t_ref) = args.reference_age {
        spec.reference_age = t_ref;
    }
    if let Some(k_e) = args.k_e {
        spec.aggregate_coefficient = k_e;
    }
    if args.constant_activation_energy {
        spec.use_linear_activation_energy = false;
    }
    ConcreteModel::with_specification(edition, spec)
}

fn cmd_evaluate(
    config: Option<PathBuf>,
    args: &ConcreteArgs,
    age: Vec<f64>,
    temperature: Vec<f64>,
    format: OutputFormat,
) -> CliResult<()> {
    let mut model = match config {
        Some(path) => {
            let file = config::load_yaml(&path)?;
            build_model(file.edition, file.concrete, args)
        }
        None => build_model(Edition::En2023, None, args),
    };
    if let Some(age) = samples_from(age) {
        model.spec.current_age = age;
    }
    if let Some(temperature) = samples_from(temperature) {
        model.spec.curing_temperature = temperature;
    }

    let report = PropertyReport::from_model(&model)?;
    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report_json(&report))?),
    }
    Ok(())
}

fn print_report(report: &PropertyReport) {
    println!("{}", report.edition);
    println!(
        "  {} / {} (coefficient {:.2})",
        report.strength_class, report.development_class, report.development_class_coefficient
    );
    println!("  Reference age:   {:.0} days", in_days(report.reference_age));
    println!("  f_ck:            {:.1} MPa", in_mpa(report.characteristic_strength));
    println!("  f_cm:            {:.1} MPa", in_mpa(report.mean_strength));
    println!("  E_cm:            {:.1} GPa", in_gpa(report.modulus));
    println!();
    println!(
        "  {:>8} {:>8} {:>10} {:>8} {:>10} {:>10} {:>10}",
        "t [d]", "T [°C]", "t_T [d]", "beta_cc", "f_cm(t)", "f_ck(t)", "E_cm(t)"
    );
    for row in &report.rows {
        println!(
            "  {:>8.2} {:>8.1} {:>10.2} {:>8.4} {:>10.1} {:>10.1} {:>10.1}",
            in_days(row.age),
            in_celsius(row.curing_temperature),
            in_days(row.equivalent_age),
            row.development_coefficient.value,
            in_mpa(row.mean_strength),
            in_mpa(row.characteristic_strength),
            in_gpa(row.modulus),
        );
    }
}

fn report_json(report: &PropertyReport) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = report
        .rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "age_days": in_days(row.age),
                "curing_temperature_c": in_celsius(row.curing_temperature),
                "equivalent_age_days": in_days(row.equivalent_age),
                "beta_cc": row.development_coefficient.value,
                "f_cm_t_mpa": in_mpa(row.mean_strength),
                "f_ck_t_mpa": in_mpa(row.characteristic_strength),
                "e_cm_t_mpa": in_mpa(row.modulus),
            })
        })
        .collect();
    serde_json::json!({
        "edition": report.edition,
        "strength_class": report.strength_class,
        "development_class": report.development_class,
        "development_class_coefficient": report.development_class_coefficient,
        "reference_age_days": in_days(report.reference_age),
        "f_ck_mpa": in_mpa(report.characteristic_strength),
        "f_cm_mpa": in_mpa(report.mean_strength),
        "e_cm_mpa": in_mpa(report.modulus),
        "ages": rows,
    })
}

fn cmd_classes(edition: Edition) -> CliResult<()> {
    let table = edition.standard().table();
    println!("{edition}");
    println!("Strength classes:");
    for class in table.strength_classes() {
        println!("  {:<9} f_ck = {:.0} MPa", class, table.lookup_fck(class)?);
    }
    let classes: Vec<String> = table
        .development_classes()
        .iter()
        .map(|c| c.to_string())
        .collect();
    println!("Development classes: {}", classes.join(", "));
    Ok(())
}

fn cmd_maturity(args: &ConcreteArgs, intervals: Vec<CuringInterval>) -> CliResult<()> {
    if intervals.is_empty() {
        return Err(CliError::InvalidArg(
            "at least one --interval is required".to_string(),
        ));
    }
    let model = build_model(Edition::En2004, None, args);
    let total_days: f64 = intervals.iter().map(|i| i.duration).sum();
    let props = model.properties_for(&CuringHistory::Intervals(intervals))?;

    println!("{}", model.edition());
    println!("  Real age:        {:.2} days", total_days);
    println!("  Equivalent age:  {:.2} days", props.equivalent_age);
    println!("  beta_cc:         {:.4}", props.development_coefficient);
    println!("  f_cm(t):         {:.1} MPa", props.mean_strength);
    println!("  f_ck(t):         {:.1} MPa", props.characteristic_strength);
    println!("  E_cm(t):         {:.1} GPa", in_gpa(mpa(props.modulus)));
    Ok(())
}
