use crate::infra::build_service;
use career_match::assessment::Recommendation;
use career_match::config::{AppConfig, RankingConfig, SectorSettings};
use career_match::error::AppError;
use career_match::psychometrics::{AnswerMap, Domain, Trait};
use career_match::sectors::eligibility::education_label;
use career_match::sectors::{RankedSectorView, SectorConfigError, SectorTables};
use clap::Args;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct SectorPathArgs {
    /// Directory holding sector_catalog.json, sector_gates.json and sector_weights.json
    #[arg(long)]
    pub(crate) dir: Option<PathBuf>,
    /// Weights table to use instead of the configured one (.json or .csv)
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// JSON answers file, either a flat key/value map or {"answers": {...}}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Question bank to score against (defaults to the configured bank)
    #[arg(long)]
    pub(crate) questions: Option<PathBuf>,
    /// Number of eligible sectors to shortlist
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    #[command(flatten)]
    pub(crate) sectors: SectorPathArgs,
    /// Print the full recommendation as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    Wrapped { answers: AnswerMap },
    Flat(AnswerMap),
}

impl AnswersFile {
    fn into_answers(self) -> AnswerMap {
        match self {
            AnswersFile::Wrapped { answers } | AnswersFile::Flat(answers) => answers,
        }
    }
}

pub(crate) fn load_answers(path: &Path) -> Result<AnswerMap, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let file: AnswersFile = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
    Ok(file.into_answers())
}

fn apply_sector_paths(settings: &mut SectorSettings, args: SectorPathArgs) {
    if let Some(dir) = args.dir {
        *settings = SectorSettings {
            row_tolerance: settings.row_tolerance,
            ..SectorSettings::in_dir(dir)
        };
    }
    if let Some(weights) = args.weights {
        settings.weights_path = weights;
    }
}

pub(crate) fn run_sector_validation(args: SectorPathArgs) -> Result<(), AppError> {
    let mut settings = AppConfig::load()?.sectors;
    apply_sector_paths(&mut settings, args);

    let tables = SectorTables::load(&settings)?;
    let report = tables.validate(settings.row_tolerance);

    println!("Sector tables");
    println!("- catalog: {}", settings.catalog_path.display());
    println!("- gates:   {}", settings.gates_path.display());
    println!("- weights: {}", settings.weights_path.display());
    println!("- {} sectors in the weights table", report.sector_count);

    if report.is_valid() {
        println!("No problems found.");
        return Ok(());
    }

    println!("{} problem(s):", report.problems.len());
    for problem in &report.problems {
        println!("  - {problem}");
    }
    Err(SectorConfigError::Invalid {
        problems: report.problems,
    }
    .into())
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        questions,
        top_n,
        sectors,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    apply_sector_paths(&mut config.sectors, sectors);
    if let Some(path) = questions {
        config.questions.path = path;
    }
    if let Some(top_n) = top_n {
        config.ranking = RankingConfig::new(top_n);
    }

    let service = build_service(&config)?;
    let answers = load_answers(&answers)?;
    let recommendation = service.recommend(&answers)?;

    if json {
        match serde_json::to_string_pretty(&recommendation) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Recommendation payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_recommendation(&recommendation));
    }
    Ok(())
}

pub(crate) fn render_recommendation(recommendation: &Recommendation) -> String {
    let Recommendation {
        profile,
        attributes,
        ranking,
    } = recommendation;
    let mut out = String::new();

    let _ = writeln!(out, "Candidate");
    let _ = writeln!(
        out,
        "- education: {}",
        attributes
            .education
            .map(education_label)
            .unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(
        out,
        "- age: {}",
        attributes
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(
        out,
        "- district: {} ({})",
        attributes.district.as_deref().unwrap_or("unknown"),
        attributes.state_code
    );

    let _ = writeln!(
        out,
        "\nProfile | IPIP {:.1} | SJT {:.1} | composite {:.1}",
        profile.ipip_overall, profile.sjt_overall, profile.composite
    );
    for domain in Domain::ordered() {
        let _ = writeln!(
            out,
            "  - {} {}: {:.1}",
            domain.code(),
            domain.label(),
            profile.domain_pct(domain)
        );
    }
    let _ = writeln!(out, "Work-style traits:");
    for trait_ in Trait::ordered() {
        let score = profile.trait_score(trait_);
        let _ = writeln!(
            out,
            "  - {} {}: {:.1} (ipip {:.1} | sjt {:.1})",
            trait_.code(),
            trait_.label(),
            score.blended,
            score.from_ipip,
            score.from_sjt
        );
    }

    let _ = writeln!(out, "\nTop eligible sectors");
    if ranking.top_eligible.is_empty() {
        let _ = writeln!(out, "  none: every sector has at least one unmet requirement");
    }
    for (rank, view) in ranking.top_eligible.iter().enumerate() {
        write_sector(&mut out, rank + 1, view);
    }
    let _ = writeln!(out, "Eligible cutoff: {:.1}", ranking.eligible_cutoff);

    if !ranking.near_miss.is_empty() {
        let _ = writeln!(out, "\nNear misses");
        for (rank, view) in ranking.near_miss.iter().enumerate() {
            write_sector(&mut out, rank + 1, view);
            for reason in &view.reasons {
                let _ = writeln!(out, "       needs: {reason}");
            }
        }
    }

    out
}

fn write_sector(out: &mut String, rank: usize, view: &RankedSectorView) {
    let _ = writeln!(
        out,
        "  {rank:>2}. {} [{:.1}] {}",
        view.name,
        view.score,
        view.top_traits.join(", ")
    );
}
