//! The round-based proof search driver.
//!
//! Combines direct inference, matching against already-proven sentences,
//! backward chaining over proven implications, and (optionally) forward
//! chaining, bounded by a round limit, a wall-clock timeout, and
//! complexity-biased pruning of the candidate queue.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

use fol_kb::KnowledgeBase;
use fol_kernel::{modus_ponens, universal_generalization};
use fol_match::match_term;
use fol_term::LogicExpr;

use crate::complexity::logic_complexity;
use crate::instantiate::instantiate;

/// New sub-goals contributed by a single proven implication, per round.
pub const MAX_GUESSES_PER_IMPLICATION: usize = 3;
/// New sub-goals admitted into the queue in a single round, before the
/// simplest ones are kept and the rest dropped.
pub const MAX_NEW_GUESSES_PER_ROUND: usize = 20;
/// Total queue size before the simplest formulas are kept and the rest
/// dropped.
pub const MAX_TOTAL_GUESSES: usize = 50;
/// Default round limit for a CLI invocation that does not override it.
pub const DEFAULT_MAX_ROUNDS: usize = 20;
/// Default wall-clock timeout, in seconds, for a CLI invocation that does
/// not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// How often, in match attempts, forward chaining polls the wall clock.
const FORWARD_CHAIN_POLL_INTERVAL: usize = 100;

/// How a [`ProofDriver::prove`] run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofOutcome {
    /// The goal was proven, after this many completed rounds.
    Proved { rounds: usize },
    /// The wall-clock timeout elapsed before the goal was proven.
    TimedOut { rounds: usize },
    /// The round limit was reached before the goal was proven.
    RoundsExhausted,
}

impl ProofOutcome {
    /// `true` if the goal was proven.
    pub fn succeeded(&self) -> bool {
        matches!(self, ProofOutcome::Proved { .. })
    }
}

/// A configured proof search over a single goal.
///
/// `ProofDriver` carries only configuration; the knowledge base it
/// searches against, and all of the queue/history state for a given
/// attempt, are local to one [`ProofDriver::prove`] call. There is no
/// state that outlives a single search beyond what is written into the
/// knowledge base itself.
pub struct ProofDriver {
    goal: Rc<LogicExpr>,
    max_rounds: usize,
    timeout: Duration,
    enable_forward: bool,
    verbose: bool,
}

impl ProofDriver {
    /// A driver for `goal` with the default round limit, timeout, and
    /// forward chaining enabled.
    pub fn new(goal: Rc<LogicExpr>) -> Self {
        ProofDriver {
            goal,
            max_rounds: DEFAULT_MAX_ROUNDS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            enable_forward: true,
            verbose: false,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_forward_chaining(mut self, enabled: bool) -> Self {
        self.enable_forward = enabled;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn log(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("{}", message.as_ref());
        }
    }

    /// Runs the search to completion against `kb`, mutating it with every
    /// derivation made along the way — including ones made during a round
    /// that ultimately times out or exhausts its round budget.
    pub fn prove(&self, kb: &mut KnowledgeBase) -> ProofOutcome {
        let start = Instant::now();
        let mut guesses: Vec<Rc<LogicExpr>> = vec![Rc::clone(&self.goal)];
        let mut history: HashSet<Rc<LogicExpr>> = HashSet::new();
        history.insert(Rc::clone(&self.goal));

        for round in 0..self.max_rounds {
            if kb.is_proven(&self.goal) {
                return ProofOutcome::Proved { rounds: round };
            }
            if start.elapsed() > self.timeout {
                return ProofOutcome::TimedOut { rounds: round };
            }

            guesses.retain(|g| !kb.is_proven(g));
            let surviving = std::mem::take(&mut guesses);

            let mut new_subgoals: Vec<Rc<LogicExpr>> = Vec::new();
            let mut implication_budget: HashMap<Rc<LogicExpr>, usize> = HashMap::new();

            for g in &surviving {
                if kb.is_proven(g) {
                    continue;
                }
                if self.direct_inference(kb, g) {
                    self.log(format!("round {round}: closed {g} by direct inference"));
                    if kb.is_proven(&self.goal) {
                        return ProofOutcome::Proved { rounds: round };
                    }
                    continue;
                }
                if self.match_against_proven(kb, g) {
                    self.log(format!("round {round}: closed {g} by matching a proven sentence"));
                    if kb.is_proven(&self.goal) {
                        return ProofOutcome::Proved { rounds: round };
                    }
                    continue;
                }
                self.backward_chain(kb, g, &mut history, &mut implication_budget, &mut new_subgoals);
                guesses.push(Rc::clone(g));
            }

            if self.enable_forward {
                self.forward_chain(kb, start);
                if kb.is_proven(&self.goal) {
                    return ProofOutcome::Proved { rounds: round };
                }
            }

            cap_by_complexity(&mut new_subgoals, MAX_NEW_GUESSES_PER_ROUND);
            guesses.extend(new_subgoals);
            cap_by_complexity(&mut guesses, MAX_TOTAL_GUESSES);
        }

        ProofOutcome::RoundsExhausted
    }

    /// Direct inference: Modus Ponens against a proven implication whose
    /// consequent is exactly `g`, or Universal Generalization if `g` is
    /// `Forall(v, body)` and `body` is already proven.
    fn direct_inference(&self, kb: &mut KnowledgeBase, g: &Rc<LogicExpr>) -> bool {
        let snapshot = kb.proven_snapshot();
        for candidate in &snapshot {
            if let LogicExpr::Implies(antecedent, consequent) = candidate.as_ref() {
                if consequent.as_ref() != g.as_ref() {
                    continue;
                }
                let Some(antecedent_proven) = kb.lookup(antecedent) else {
                    continue;
                };
                if !kb.is_proven(&antecedent_proven) {
                    continue;
                }
                if modus_ponens(kb, candidate, &antecedent_proven).is_ok() {
                    return true;
                }
            }
        }
        if let LogicExpr::Forall(var, body) = g.as_ref() {
            if let Some(body_proven) = kb.lookup(body) {
                if kb.is_proven(&body_proven)
                    && universal_generalization(kb, &body_proven, var).is_ok()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Matches every proven sentence as a pattern against `g`. A
    /// successful match soundly reproduces `g` when instantiated (see
    /// [`fol_match`]'s match-soundness property), so the first match found
    /// closes `g`.
    fn match_against_proven(&self, kb: &mut KnowledgeBase, g: &Rc<LogicExpr>) -> bool {
        let snapshot = kb.proven_snapshot();
        for pattern in &snapshot {
            let Some(bindings) = match_term(pattern, g) else {
                continue;
            };
            let instance = kb.intern(instantiate(pattern, &bindings));
            let tag = instance_tag(kb, pattern);
            kb.mark_proven(instance, &tag, vec![Rc::clone(pattern)]);
            return true;
        }
        false
    }

    /// Backward chaining: for each proven `F = P -> Q`, matches `Q`
    /// against `g`. A match materializes the instantiated implication (as
    /// proven) and enqueues its instantiated antecedent as a new sub-goal,
    /// unless it is already in `history`. `implication_budget` caps how
    /// many sub-goals a single implication may contribute within one
    /// round.
    fn backward_chain(
        &self,
        kb: &mut KnowledgeBase,
        g: &Rc<LogicExpr>,
        history: &mut HashSet<Rc<LogicExpr>>,
        implication_budget: &mut HashMap<Rc<LogicExpr>, usize>,
        new_subgoals: &mut Vec<Rc<LogicExpr>>,
    ) {
        let snapshot = kb.proven_snapshot();
        for candidate in &snapshot {
            let LogicExpr::Implies(antecedent, consequent) = candidate.as_ref() else {
                continue;
            };
            let used = implication_budget.get(candidate).copied().unwrap_or(0);
            if used >= MAX_GUESSES_PER_IMPLICATION {
                continue;
            }
            let Some(bindings) = match_term(consequent, g) else {
                continue;
            };
            let tag = instance_tag(kb, candidate);
            let instantiated_implication = kb.intern(instantiate(candidate, &bindings));
            kb.mark_proven(instantiated_implication, &tag, vec![Rc::clone(candidate)]);

            let subgoal = kb.intern(instantiate(antecedent, &bindings));
            if history.contains(&subgoal) {
                continue;
            }
            history.insert(Rc::clone(&subgoal));
            new_subgoals.push(subgoal);
            implication_budget.insert(Rc::clone(candidate), used + 1);
        }
    }

    /// Forward chaining: for every pair of a proven implication `I = P ->
    /// Q` and a proven fact, matches `P` against the fact; a match
    /// instantiates `I` and applies Modus Ponens directly, without waiting
    /// for the new fact to appear as a goal's sub-goal.
    fn forward_chain(&self, kb: &mut KnowledgeBase, start: Instant) {
        let snapshot = kb.proven_snapshot();
        let mut iterations = 0usize;
        for candidate in &snapshot {
            let LogicExpr::Implies(antecedent, _) = candidate.as_ref() else {
                continue;
            };
            for fact in &snapshot {
                iterations += 1;
                if iterations % FORWARD_CHAIN_POLL_INTERVAL == 0 && start.elapsed() > self.timeout
                {
                    return;
                }
                if kb.is_proven(&self.goal) {
                    return;
                }
                let Some(bindings) = match_term(antecedent, fact) else {
                    continue;
                };
                let tag = instance_tag(kb, candidate);
                let instantiated_implication = kb.intern(instantiate(candidate, &bindings));
                kb.mark_proven(instantiated_implication.clone(), &tag, vec![Rc::clone(candidate)]);
                let _ = modus_ponens(kb, &instantiated_implication, fact);
            }
        }
    }
}

fn instance_tag(kb: &KnowledgeBase, source: &Rc<LogicExpr>) -> String {
    let method = kb
        .get_provenance(source)
        .expect("source drawn from the proven set always has a provenance record")
        .method();
    format!("Instance of {}", kb.method_name(method))
}

fn cap_by_complexity(terms: &mut Vec<Rc<LogicExpr>>, cap: usize) {
    if terms.len() > cap {
        terms.sort_by_key(|t| logic_complexity(t));
        terms.truncate(cap);
    }
}
