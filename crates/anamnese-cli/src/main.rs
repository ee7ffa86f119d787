use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};

use anamnese_cli::commands::{self, IdentificationUpdate, VitalsUpdate};
use anamnese_cli::{config, logging};
use anamnese_core::models::patient::{PatientType, PediatricSubType};
use anamnese_instruments::scoring::QuestionId;
use anamnese_storage::FileDraftStore;
use anamnese_vitals::{z_score_color, ColorTag, Interpretation, VitalSign};

#[derive(Parser)]
#[command(name = "anamnese")]
#[command(about = "Guided clinical intake: draft, vitals, IVCF-20 and summary")]
struct Cli {
    /// Draft store directory (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Draft key (overrides the config file)
    #[arg(long, global = true)]
    draft_key: Option<String>,

    /// Write log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a blank draft, replacing the current one
    New {
        /// adult, pediatric, geriatric or soap (defaults to the config)
        #[arg(long = "type")]
        patient_type: Option<PatientType>,
        /// Pediatric sub-type: neonate, infant, preschool, school, adolescent
        #[arg(long)]
        sub_type: Option<PediatricSubType>,
    },
    /// Fill in the patient's identification
    Identify {
        #[arg(long)]
        name: Option<String>,
        /// Age as written, e.g. "86 anos", "3 meses", "45 dias"
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        sex: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        marital_status: Option<String>,
        #[arg(long)]
        occupation: Option<String>,
        #[arg(long)]
        birthplace: Option<String>,
        #[arg(long)]
        residence: Option<String>,
        /// Pediatric records: parent or guardian
        #[arg(long)]
        guardian: Option<String>,
        #[arg(long)]
        schooling: Option<String>,
        /// Geriatric records: main caregiver
        #[arg(long)]
        caregiver: Option<String>,
    },
    /// Enter vital signs and print their interpretation
    Vitals {
        /// Blood pressure, "systolic/diastolic"
        #[arg(long)]
        pa: Option<String>,
        /// Heart rate (bpm)
        #[arg(long)]
        fc: Option<String>,
        /// Respiratory rate (breaths/min)
        #[arg(long)]
        fr: Option<String>,
        /// Temperature (°C)
        #[arg(long)]
        temp: Option<String>,
        /// SpO2 (%)
        #[arg(long)]
        sat: Option<String>,
        /// Weight (kg)
        #[arg(long)]
        weight: Option<String>,
        /// Height (cm)
        #[arg(long)]
        height: Option<String>,
        /// Head circumference (cm)
        #[arg(long)]
        pc: Option<String>,
    },
    /// Apply the IVCF-20 frailty index to the draft
    Ivcf20 {
        /// Answer as QUESTION=POINTS, e.g. q6=6 (repeatable)
        #[arg(long = "answer", value_parser = commands::parse_answer)]
        answers: Vec<(QuestionId, u8)>,
    },
    /// Print the clinical summary
    Summary {
        /// Also write a DOCX; without a path it goes next to the draft
        #[arg(long, num_args = 0..=1)]
        docx: Option<Option<PathBuf>>,
        /// Custom Tera template file
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print the draft as JSON
    Show,
    /// Delete the draft
    Clear,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_json)?;

    let config = config::load_or_init(&config::config_dir()?)?
        .with_overrides(cli.data_dir, cli.draft_key);
    let store = FileDraftStore::new(&config.data_dir, &config.draft_key)?;

    match cli.command {
        Commands::New {
            patient_type,
            sub_type,
        } => {
            let patient_type = patient_type.unwrap_or(config.default_patient_type);
            let record = commands::new_draft(&store, patient_type, sub_type)?;
            println!("Started {} draft {}", record.patient_type, record.record_id);
            println!("Saved to {}", store.path().display());
        }
        Commands::Identify {
            name,
            age,
            sex,
            color,
            marital_status,
            occupation,
            birthplace,
            residence,
            guardian,
            schooling,
            caregiver,
        } => {
            let identification = commands::identify(
                &store,
                IdentificationUpdate {
                    name,
                    age,
                    sex,
                    color,
                    marital_status,
                    occupation,
                    birthplace,
                    residence,
                    guardian,
                    schooling,
                    caregiver,
                },
            )?;
            let shown = |text: &str| {
                if text.trim().is_empty() {
                    "--".to_string()
                } else {
                    text.to_string()
                }
            };
            println!("Name   {}", shown(&identification.name));
            println!("Age    {}", shown(&identification.age));
            println!("Sex    {}", shown(&identification.sex));
        }
        Commands::Vitals {
            pa,
            fc,
            fr,
            temp,
            sat,
            weight,
            height,
            pc,
        } => {
            let report = commands::update_vitals(
                &store,
                VitalsUpdate {
                    blood_pressure: pa,
                    heart_rate: fc,
                    respiratory_rate: fr,
                    temperature: temp,
                    saturation: sat,
                    weight,
                    height,
                    head_circumference: pc,
                },
            )?;
            for sign in VitalSign::ALL {
                print_line(
                    sign.label(),
                    sign.raw(&report.vitals),
                    sign.unit(),
                    report.interpretation.get(sign),
                );
            }
            if let Some(bmi) = &report.bmi {
                print_line("BMI", &report.vitals.bmi, "kg/m²", bmi);
            }
            if let Some(growth) = &report.growth {
                for (label, z) in [
                    ("Weight z", &growth.weight),
                    ("Height z", &growth.height),
                    ("BMI z", &growth.bmi),
                    ("HC z", &growth.head_circumference),
                ] {
                    if let Some(z) = z {
                        let flag = match z_score_color(Some(z.as_str())) {
                            ColorTag::Danger => "outside 2 SD",
                            _ => "",
                        };
                        println!("{label:<10} {z:>7}  {flag}");
                    }
                }
            }
        }
        Commands::Ivcf20 { answers } => {
            let result = commands::run_ivcf20(&store, &answers)?;
            println!("IVCF-20: {} points ({})", result.total_score, result.level);
            println!("{}", result.result_text);
        }
        Commands::Summary { docx, template } => {
            let template = template
                .map(|path| {
                    std::fs::read_to_string(&path)
                        .wrap_err_with(|| format!("failed to read template {}", path.display()))
                })
                .transpose()?;
            let rendered = commands::render(&store, template.as_deref())?;
            println!("{rendered}");

            if let Some(target) = docx {
                let bytes = commands::render_docx(&rendered)?;
                let path = match target {
                    Some(path) => {
                        std::fs::write(&path, &bytes)
                            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                        path
                    }
                    None => store.save_summary_docx(&bytes)?,
                };
                tracing::info!(path = %path.display(), "summary docx written");
            }
        }
        Commands::Show => {
            println!("{}", commands::show(&store)?);
        }
        Commands::Clear => {
            commands::clear(&store)?;
            println!("Draft {} cleared", store.key());
        }
    }

    Ok(())
}

fn print_line(label: &str, raw: &str, unit: &str, interpretation: &Interpretation) {
    let value = if raw.trim().is_empty() {
        "--".to_string()
    } else {
        format!("{} {unit}", raw.trim())
    };
    println!("{label:<6} {value:<16} {}", interpretation.label);
}
