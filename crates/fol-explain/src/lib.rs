//! # fol-explain
//!
//! Turns a proven sentence's dependency graph into a flat, numbered
//! derivation: a topological sort of everything the goal depended on,
//! followed by a render pass that gives each step a number and expresses
//! its dependencies as references to earlier step numbers.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use fol_kb::KnowledgeBase;
use fol_term::LogicExpr;

/// Returned when [`explain`] is asked to explain a sentence that isn't
/// (yet) proven in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotProven {
    pub goal: Rc<LogicExpr>,
}

impl fmt::Display for NotProven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not proven in the current knowledge base", self.goal)
    }
}

impl std::error::Error for NotProven {}

/// One line of a rendered derivation: a step number, the sentence proved
/// at that step, and the reason it holds.
#[derive(Debug, Clone)]
pub struct Step {
    pub number: usize,
    pub sentence: Rc<LogicExpr>,
    pub reason: String,
}

/// Returns every sentence `target` transitively depended on, dependencies
/// before dependents, ending in `target` itself.
///
/// Empty if `target` isn't proven. A sentence already proven by the time
/// it's visited (including `target`'s own dependencies revisited through
/// more than one path) is listed once, at its first topological position.
pub fn topological_sort(target: &Rc<LogicExpr>, kb: &KnowledgeBase) -> Vec<Rc<LogicExpr>> {
    if !kb.is_proven(target) {
        return Vec::new();
    }
    let mut visited: HashSet<Rc<LogicExpr>> = HashSet::new();
    let mut sorted = Vec::new();
    visit(target, kb, &mut visited, &mut sorted);
    sorted
}

fn visit(
    node: &Rc<LogicExpr>,
    kb: &KnowledgeBase,
    visited: &mut HashSet<Rc<LogicExpr>>,
    sorted: &mut Vec<Rc<LogicExpr>>,
) {
    if visited.contains(node) {
        return;
    }
    visited.insert(Rc::clone(node));

    if let Some(provenance) = kb.get_provenance(node) {
        for dependency in provenance.dependencies() {
            visit(dependency, kb, visited, sorted);
        }
    }

    sorted.push(Rc::clone(node));
}

/// Builds the numbered step list for `target`, or [`NotProven`] if it
/// isn't proven.
pub fn explain(target: &Rc<LogicExpr>, kb: &KnowledgeBase) -> Result<Vec<Step>, NotProven> {
    let steps = topological_sort(target, kb);
    if steps.is_empty() {
        return Err(NotProven { goal: Rc::clone(target) });
    }

    let mut step_numbers = std::collections::HashMap::new();
    for (i, sentence) in steps.iter().enumerate() {
        step_numbers.insert(Rc::clone(sentence), i + 1);
    }

    let mut rendered = Vec::with_capacity(steps.len());
    for (i, sentence) in steps.into_iter().enumerate() {
        let number = i + 1;
        let provenance = kb
            .get_provenance(&sentence)
            .expect("every node visited by topological_sort came from a proven-set traversal");
        let method = kb.method_name(provenance.method());

        let mut reason = method.to_string();
        let dep_refs: Vec<String> = provenance
            .dependencies()
            .iter()
            .map(|dep| match step_numbers.get(dep) {
                Some(n) => format!("#{n}"),
                None => dep.to_string(),
            })
            .collect();
        if !dep_refs.is_empty() {
            reason.push_str(" using ");
            reason.push_str(&dep_refs.join(", "));
        }
        if let Some(metadata) = provenance.metadata() {
            if !metadata.is_empty() {
                let formatted: Vec<String> = metadata.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                reason.push_str(" [");
                reason.push_str(&formatted.join(", "));
                reason.push(']');
            }
        }

        rendered.push(Step { number, sentence, reason });
    }
    Ok(rendered)
}

/// Renders `target`'s derivation as LaTeX-proof-style text, one paragraph
/// per step: `N. sentence` followed by an indented `Reason: ...` line.
pub fn render(target: &Rc<LogicExpr>, kb: &KnowledgeBase) -> Result<String, NotProven> {
    let steps = explain(target, kb)?;
    let mut out = format!("Proof Explanation for: {target}\n\n");
    for step in &steps {
        out.push_str(&format!("{}. {}\n", step.number, step.sentence));
        out.push_str(&format!("   Reason: {}\n\n", step.reason));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fol_term::NumericExpr;

    fn zero() -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Zero)
    }

    #[test]
    fn an_unproven_goal_is_reported_as_not_proven() {
        let kb = KnowledgeBase::new();
        let goal = LogicExpr::equals(&zero(), &zero());
        let err = explain(&goal, &kb).unwrap_err();
        assert_eq!(err.goal, goal);
    }

    #[test]
    fn an_axiom_with_no_dependencies_is_a_single_step() {
        let mut kb = KnowledgeBase::new();
        let goal = LogicExpr::equals(&zero(), &zero());
        let goal = kb.mark_proven(goal, "Peano Axiom", Vec::new());

        let steps = explain(&goal, &kb).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[0].reason, "Peano Axiom");
    }

    #[test]
    fn dependencies_are_numbered_before_their_dependent() {
        let mut kb = KnowledgeBase::new();
        let p = LogicExpr::equals(&zero(), &zero());
        let p = kb.mark_proven(p, "Peano Axiom", Vec::new());
        let q = LogicExpr::var("Q");
        let implication = kb.mark_proven(p.implies(&q), "Logic Axiom", Vec::new());
        let consequent = kb.mark_proven(Rc::clone(&q), "Modus Ponens", vec![Rc::clone(&implication), Rc::clone(&p)]);

        let steps = explain(&consequent, &kb).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].sentence, consequent);
        assert_eq!(steps[2].reason, "Modus Ponens using #1, #2");
    }

    #[test]
    fn a_shared_dependency_is_listed_only_once() {
        let mut kb = KnowledgeBase::new();
        let p = LogicExpr::equals(&zero(), &zero());
        let p = kb.mark_proven(p, "Peano Axiom", Vec::new());
        let q = kb.mark_proven(LogicExpr::var("Q"), "Logic Axiom", vec![Rc::clone(&p)]);
        let r = kb.mark_proven(LogicExpr::var("R"), "Logic Axiom", vec![Rc::clone(&p), Rc::clone(&q)]);

        let steps = explain(&r, &kb).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].sentence, p);
        assert_eq!(steps[1].sentence, q);
        assert_eq!(steps[2].sentence, r);
    }

    #[test]
    fn a_step_with_metadata_renders_a_bracketed_suffix() {
        let mut kb = KnowledgeBase::new();
        let goal = LogicExpr::var("P");
        let mut metadata = std::collections::BTreeMap::new();
        metadata.insert("var".to_string(), "x".to_string());
        let goal = kb.mark_proven_with_metadata(goal, "Induction Schema", Vec::new(), Some(metadata));

        let steps = explain(&goal, &kb).unwrap();
        assert_eq!(steps[0].reason, "Induction Schema [var: x]");
    }

    #[test]
    fn render_includes_the_goal_header_and_reasons() {
        let mut kb = KnowledgeBase::new();
        let goal = LogicExpr::equals(&zero(), &zero());
        let goal = kb.mark_proven(goal, "Peano Axiom", Vec::new());
        let text = render(&goal, &kb).unwrap();
        assert!(text.starts_with("Proof Explanation for: 0=0\n"));
        assert!(text.contains("1. 0=0\n"));
        assert!(text.contains("Reason: Peano Axiom"));
    }
}
