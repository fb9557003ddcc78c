//! # fol-cli
//!
//! Command-line front end (`folc`) for the proof assistant: `prove` runs
//! the search driver against a parsed goal, `explain` renders a proven
//! goal's derivation, `init` seeds the logic or Peano axiom schemas into a
//! knowledge base file, and `inspect` prints its size.
//!
//! All command logic lives here rather than in `main.rs`, which is a thin
//! wrapper that prints `Error: {e}` and exits 1 on failure.

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use fol_kb::KnowledgeBase;
use fol_kernel::schemas;
use fol_search::{ProofDriver, DEFAULT_MAX_ROUNDS, DEFAULT_TIMEOUT_SECS};
use fol_syntax::parse_formula;
use fol_term::{LogicExpr, NumericExpr};

/// Default knowledge base file, used when `--db` is not given.
const DEFAULT_DB_PATH: &str = "kb.json";

#[derive(Parser)]
#[command(name = "folc")]
#[command(about = "An automated proof assistant for first-order logic over Peano arithmetic")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a proof of `goal`, saving the knowledge base on success.
    Prove {
        /// The goal, in surface syntax (e.g. "x+0=x").
        goal: String,
        /// Round budget for the search. Defaults to 20.
        #[arg(long)]
        max_rounds: Option<usize>,
        /// Disable forward chaining.
        #[arg(long)]
        no_forward: bool,
        /// Print round-by-round progress.
        #[arg(long)]
        verbose: bool,
        /// Wall-clock timeout in seconds. Defaults to 10.
        #[arg(long)]
        timeout: Option<u64>,
        /// Path to the knowledge base file.
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Render a proven goal's derivation as a numbered, topologically
    /// sorted list of steps.
    Explain {
        /// The goal, in surface syntax.
        goal: String,
        /// Path to the knowledge base file.
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Seed a family of axiom schemas into a knowledge base file.
    Init {
        #[command(subcommand)]
        family: InitFamily,
    },
    /// Print interned-node and proven-sentence counts.
    Inspect {
        /// Path to the knowledge base file.
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum InitFamily {
    /// Seed the propositional logic schemas L1-L3.
    Logic {
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Seed the Peano arithmetic schemas P1-P7.
    Peano {
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

/// Parses arguments and dispatches to the matching command. The library
/// entry point; `main.rs` only handles error display and the exit code.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Prove { goal, max_rounds, no_forward, verbose, timeout, db } => {
            cmd_prove(&goal, max_rounds, no_forward, verbose, timeout, db_path(db))
        }
        Commands::Explain { goal, db } => cmd_explain(&goal, db_path(db)),
        Commands::Init { family: InitFamily::Logic { db } } => cmd_init_logic(db_path(db)),
        Commands::Init { family: InitFamily::Peano { db } } => cmd_init_peano(db_path(db)),
        Commands::Inspect { db } => cmd_inspect(db_path(db)),
    }
}

fn db_path(db: Option<PathBuf>) -> PathBuf {
    db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

fn load_or_empty(path: &PathBuf) -> Result<KnowledgeBase, Box<dyn std::error::Error>> {
    if path.exists() {
        Ok(KnowledgeBase::load(path)?)
    } else {
        Ok(KnowledgeBase::new())
    }
}

fn cmd_prove(
    goal: &str,
    max_rounds: Option<usize>,
    no_forward: bool,
    verbose: bool,
    timeout: Option<u64>,
    db: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = load_or_empty(&db)?;
    let goal = parse_formula(goal)?;
    let goal = kb.intern(goal);

    let driver = ProofDriver::new(Rc::clone(&goal))
        .with_max_rounds(max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS))
        .with_timeout(Duration::from_secs(timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)))
        .with_forward_chaining(!no_forward)
        .with_verbose(verbose);

    let outcome = driver.prove(&mut kb);
    match outcome {
        fol_search::ProofOutcome::Proved { rounds } => {
            println!("Proved {goal} in {rounds} round(s).");
            kb.save(&db)?;
        }
        fol_search::ProofOutcome::TimedOut { rounds } => {
            println!("Timed out after {rounds} round(s); {goal} is not proven.");
        }
        fol_search::ProofOutcome::RoundsExhausted => {
            println!("Round budget exhausted; {goal} is not proven.");
        }
    }
    Ok(())
}

fn cmd_explain(goal: &str, db: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let kb = load_or_empty(&db)?;
    let goal = parse_formula(goal)?;
    let goal = kb.lookup(&goal).unwrap_or(goal);
    let text = fol_explain::render(&goal, &kb)?;
    print!("{text}");
    Ok(())
}

fn cmd_init_logic(db: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = load_or_empty(&db)?;
    let a = LogicExpr::var("A");
    let b = LogicExpr::var("B");
    let c = LogicExpr::var("C");

    let axioms = [schemas::logic_l1(&a, &b), schemas::logic_l2(&a, &b, &c), schemas::logic_l3(&a, &b)];
    println!("Marking logic axioms as proven...");
    for (i, axiom) in axioms.into_iter().enumerate() {
        println!("{}. {axiom}", i + 1);
        kb.mark_proven(axiom, "Logic Axiom", Vec::new());
    }
    kb.save(&db)?;
    Ok(())
}

fn cmd_init_peano(db: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = load_or_empty(&db)?;
    let x = NumericExpr::var("x");
    let y = NumericExpr::var("y");

    let axioms = [
        schemas::peano_p1(&x),
        schemas::peano_p2(&x, &y),
        schemas::peano_p3(&x),
        schemas::peano_p4(&x, &y),
        schemas::peano_p5(&x),
        schemas::peano_p6(&x, &y),
        schemas::peano_p7(&x),
    ];
    println!("Marking Peano axioms as proven...");
    for (i, axiom) in axioms.into_iter().enumerate() {
        println!("{}. {axiom}", i + 1);
        kb.mark_proven(axiom, "Peano Axiom", Vec::new());
    }
    kb.save(&db)?;
    Ok(())
}

fn cmd_inspect(db: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let kb = load_or_empty(&db)?;
    println!("--- Knowledge base: {} ---", db.display());
    println!("interned sentences: {}", kb.len());
    println!("proven sentences:   {}", kb.proven_len());
    for sentence in kb.proven_sentences() {
        let provenance = kb.get_provenance(sentence).expect("every proven sentence has a provenance record");
        println!("[{}] {sentence}", kb.display_provenance(provenance));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logic_then_prove_closes_an_instance_of_l1() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kb.json");

        cmd_init_logic(db.clone()).unwrap();
        cmd_prove("P->(Q->P)", None, false, false, None, db.clone()).unwrap();

        let kb = KnowledgeBase::load(&db).unwrap();
        let p = LogicExpr::var("P");
        let q = LogicExpr::var("Q");
        let goal = p.implies(&q.implies(&p));
        assert!(kb.is_proven(&goal));
    }

    #[test]
    fn init_peano_seeds_seven_axioms() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kb.json");
        cmd_init_peano(db.clone()).unwrap();
        let kb = KnowledgeBase::load(&db).unwrap();
        assert_eq!(kb.proven_len(), 7);
    }

    #[test]
    fn explain_without_a_prior_prove_reports_not_proven() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kb.json");
        let result = cmd_explain("x=x", db);
        assert!(result.is_err());
    }

    #[test]
    fn inspect_reports_zero_for_a_missing_db_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("does-not-exist.json");
        cmd_inspect(db).unwrap();
    }
}
