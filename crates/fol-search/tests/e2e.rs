//! Cross-crate proof search scenarios: each pulls in `fol_kb`, `fol_kernel`,
//! and `fol_term` together, exercising the driver the way an `init`
//! bootstrap followed by a `prove` command would.

use std::rc::Rc;

use fol_kb::KnowledgeBase;
use fol_kernel::modus_ponens;
use fol_kernel::schemas::{logic_l1, logic_l2, peano_p7};
use fol_search::{ProofDriver, ProofOutcome};
use fol_term::{LogicExpr, NumericExpr};

fn zero() -> Rc<NumericExpr> {
    Rc::new(NumericExpr::Zero)
}

/// Scenario 1: the Hilbert-style proof of `A -> A` from `L1` and `L2`.
/// The two schema instances and the first Modus Ponens are set up by
/// hand (mirroring how an `init` bootstrap or an explicit proof script
/// would build them); the driver is left to find only the last step,
/// by direct inference.
#[test]
fn identity_is_proven_from_l1_and_l2() {
    let mut kb = KnowledgeBase::new();
    let a = LogicExpr::var("A");

    let l1_a_a = logic_l1(&a, &a);
    kb.mark_proven(Rc::clone(&l1_a_a), "Logic Axiom", Vec::new());

    let l1_a_implies_a = logic_l1(&a, &a.implies(&a));
    kb.mark_proven(Rc::clone(&l1_a_implies_a), "Logic Axiom", Vec::new());

    let l2 = logic_l2(&a, &a.implies(&a), &a);
    kb.mark_proven(Rc::clone(&l2), "Logic Axiom", Vec::new());

    let lemma = modus_ponens(&mut kb, &l2, &l1_a_implies_a).unwrap();
    assert_eq!(lemma.to_string(), "((A\u{2192}(A\u{2192}A))\u{2192}(A\u{2192}A))");

    let goal = a.implies(&a);
    let outcome = ProofDriver::new(Rc::clone(&goal))
        .with_max_rounds(5)
        .with_forward_chaining(false)
        .prove(&mut kb);

    assert!(outcome.succeeded(), "expected A -> A to be proven, got {outcome:?}");
    assert!(kb.is_proven(&goal));
    let provenance = kb.get_provenance(&goal).unwrap();
    assert_eq!(kb.method_name(provenance.method()), "Modus Ponens");
}

/// Scenario 2: `0 = 0` is proven purely by matching the universally
/// quantified-free instance of P7 (`x = x`) against the goal, binding
/// the meta-variable to `0`.
#[test]
fn reflexivity_transports_by_matching_a_proven_schema() {
    let mut kb = KnowledgeBase::new();
    let x = NumericExpr::var("x");
    kb.mark_proven(peano_p7(&x), "Peano Axiom", Vec::new());

    let goal = LogicExpr::equals(&zero(), &zero());
    let outcome = ProofDriver::new(Rc::clone(&goal))
        .with_forward_chaining(false)
        .prove(&mut kb);

    assert!(outcome.succeeded());
    let provenance = kb.get_provenance(&goal).unwrap();
    assert_eq!(kb.method_name(provenance.method()), "Instance of Peano Axiom");
}

/// Scenario 3: Modus Ponens closure. A proven `P` and a proven `P -> Q`
/// should let the driver close `Q` by direct inference in one round.
#[test]
fn modus_ponens_closure_proves_the_consequent() {
    let mut kb = KnowledgeBase::new();
    let p = LogicExpr::equals(&zero(), &zero());
    let q = LogicExpr::var("Q");
    kb.mark_proven(Rc::clone(&p), "Peano Axiom", Vec::new());
    kb.mark_proven(p.implies(&q), "Logic Axiom", Vec::new());

    let outcome = ProofDriver::new(Rc::clone(&q)).prove(&mut kb);
    assert!(outcome.succeeded());
}

/// Scenario 4: Universal Generalization. A proven body with no
/// dependency on a free hypothesis in `var` can be generalized directly.
#[test]
fn universal_generalization_closes_a_forall_goal() {
    let mut kb = KnowledgeBase::new();
    let x = NumericExpr::var("x");
    let body = LogicExpr::equals(&x, &x);
    kb.mark_proven(Rc::clone(&body), "Peano Axiom", Vec::new());

    let goal = LogicExpr::forall("x", &body);
    let outcome = ProofDriver::new(Rc::clone(&goal)).prove(&mut kb);
    assert!(outcome.succeeded());
}

/// An unreachable goal exhausts its round budget without ever being
/// marked proven, and without panicking or looping forever.
#[test]
fn an_unreachable_goal_exhausts_its_round_budget() {
    let mut kb = KnowledgeBase::new();
    let x = NumericExpr::var("x");
    kb.mark_proven(peano_p7(&x), "Peano Axiom", Vec::new());

    let goal = LogicExpr::var("Unreachable");
    let outcome = ProofDriver::new(Rc::clone(&goal))
        .with_max_rounds(3)
        .with_forward_chaining(false)
        .prove(&mut kb);

    assert_eq!(outcome, ProofOutcome::RoundsExhausted);
    assert!(!kb.is_proven(&goal));
}
