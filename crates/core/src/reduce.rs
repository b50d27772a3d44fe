use crate::graph::{EdgeKind, LabeledEdge};

/// Composes two consecutive labeled edges `X -> Y -> Z` into `X -> Z`, per
/// the reduction table of spec.md §4.E. Returns `None` if no rule applies.
///
/// `e1.to` must equal `e2.from`; this is a precondition of every call site
/// (both the Dijkstra fold in `lower_case` and the moat combination with the
/// originating lower-case edge), never an independent fact to check here.
pub fn reduce(e1: &LabeledEdge, e2: &LabeledEdge) -> Option<LabeledEdge> {
    debug_assert_eq!(e1.to, e2.from, "reduce() requires e1.to == e2.from");

    let value = e1.value + e2.value;

    let (kind, letter) = match (e1.kind, e2.kind) {
        // No-case: Plain . Plain -> Plain
        (EdgeKind::Plain, EdgeKind::Plain) => (EdgeKind::Plain, None),
        // Upper-case: Plain . UpperCase -> UpperCase
        (EdgeKind::Plain, EdgeKind::UpperCase) => (EdgeKind::UpperCase, e2.letter),
        // Lower-case: LowerCase . Plain -> Plain, guarded on e2.value < 0
        (EdgeKind::LowerCase, EdgeKind::Plain) if e2.value < 0.0 => (EdgeKind::Plain, None),
        // Cross-case: LowerCase . UpperCase -> UpperCase, guarded on e2.value < 0
        // and distinct letters
        (EdgeKind::LowerCase, EdgeKind::UpperCase)
            if e2.value < 0.0 && e1.letter != e2.letter =>
        {
            (EdgeKind::UpperCase, e2.letter)
        }
        _ => return None,
    };

    // Label removal: a non-negative upper-case constraint is implied by the
    // plain constraint, so strengthen it to Plain.
    let (kind, letter) = if kind == EdgeKind::UpperCase && value >= 0.0 {
        (EdgeKind::Plain, None)
    } else {
        (kind, letter)
    };

    Some(LabeledEdge {
        from: e1.from,
        to: e2.to,
        value,
        kind,
        letter,
    })
}
