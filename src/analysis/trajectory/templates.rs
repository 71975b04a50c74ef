//! Explanation table for axis-to-axis shifts.

use crate::core::coordinate::Axis;

/// Fixed text for one ordered (from, to) axis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryTemplate {
    /// What the shift means
    pub interpretation: &'static str,
    /// What to do about it
    pub recommendations: &'static [&'static str],
}

/// Text used when no dominant shift exists.
pub const ALIGNED: TrajectoryTemplate = TrajectoryTemplate {
    interpretation: "Name and implementation point the same way; no dominant shift between axes.",
    recommendations: &["No change needed: the name describes what the body does."],
};

/// Template for an ordered pair of distinct axes; `None` on the diagonal.
pub fn template(from: Axis, to: Axis) -> Option<&'static TrajectoryTemplate> {
    use Axis::*;

    match (from, to) {
        (Love, Love) | (Justice, Justice) | (Power, Power) | (Wisdom, Wisdom) => None,

        (Love, Justice) => Some(&TrajectoryTemplate {
            interpretation: "The name promises communication or integration, but the body mostly checks and enforces rules.",
            recommendations: &[
                "Rename with a checking verb such as validate_, verify_ or ensure_.",
                "If connecting is the real job, move the checks into a separate guard.",
            ],
        }),
        (Love, Power) => Some(&TrajectoryTemplate {
            interpretation: "The name promises communication or integration, but the body mostly changes state.",
            recommendations: &[
                "Rename with a verb that states the change, such as update_ or apply_.",
                "Split the state changes out from the notification or messaging code.",
            ],
        }),
        (Love, Wisdom) => Some(&TrajectoryTemplate {
            interpretation: "The name promises communication or integration, but the body mostly reads or computes.",
            recommendations: &[
                "Rename to describe what is computed or retrieved.",
                "Check that the message or connection the name promises actually happens.",
            ],
        }),
        (Justice, Love) => Some(&TrajectoryTemplate {
            interpretation: "The name promises validation, but the body mostly sends, connects or notifies.",
            recommendations: &[
                "Rename with a communication verb such as notify_ or send_.",
                "Keep validation functions free of outbound communication.",
            ],
        }),
        (Justice, Power) => Some(&TrajectoryTemplate {
            interpretation: "The name promises validation, but the body mostly changes state. Callers expect a check, not a side effect.",
            recommendations: &[
                "Split into a pure check and a separately named function that applies the change.",
                "If the mutation is intended, rename with a verb that says so.",
            ],
        }),
        (Justice, Wisdom) => Some(&TrajectoryTemplate {
            interpretation: "The name promises validation, but the body mostly looks things up or computes.",
            recommendations: &[
                "Rename to describe the lookup or calculation.",
                "Add the missing checks, or drop the validation wording from the name.",
            ],
        }),
        (Power, Love) => Some(&TrajectoryTemplate {
            interpretation: "The name promises an action or change, but the body mostly communicates with other components.",
            recommendations: &[
                "Rename with a communication verb such as send_, publish_ or dispatch_.",
                "If a change is expected, make sure it happens here rather than downstream.",
            ],
        }),
        (Power, Justice) => Some(&TrajectoryTemplate {
            interpretation: "The name promises an action or change, but the body mostly checks conditions.",
            recommendations: &[
                "Rename with a checking verb if no change is meant to occur.",
                "Otherwise confirm the promised action is not missing.",
            ],
        }),
        (Power, Wisdom) => Some(&TrajectoryTemplate {
            interpretation: "The name promises an action or change, but the body only reads or computes. The change the name describes does not happen.",
            recommendations: &[
                "Rename with a query verb such as get_, compute_ or find_.",
                "If the change is expected, implement it or call the function that does.",
            ],
        }),
        (Wisdom, Love) => Some(&TrajectoryTemplate {
            interpretation: "The name promises information retrieval, but the body mostly sends, connects or notifies.",
            recommendations: &[
                "Rename with a communication verb so callers know messages go out.",
                "Separate the query from the outbound communication.",
            ],
        }),
        (Wisdom, Justice) => Some(&TrajectoryTemplate {
            interpretation: "The name promises information retrieval, but the body mostly enforces rules.",
            recommendations: &[
                "Rename with a checking verb such as validate_ or ensure_.",
                "Move enforcement out of accessors so reads stay predictable.",
            ],
        }),
        (Wisdom, Power) => Some(&TrajectoryTemplate {
            interpretation: "The name reads like a query, but the body mutates or destroys state. Callers will not expect the side effect.",
            recommendations: &[
                "Rename with a verb that states the mutation, such as delete_, update_ or save_.",
                "If retrieval is the intent, remove the side effects.",
                "Split into a query and a command.",
            ],
        }),
    }
}

/// Template for a body that exercises `to` while the name over-promised nothing.
pub fn toward(to: Axis) -> &'static TrajectoryTemplate {
    match to {
        Axis::Love => &TrajectoryTemplate {
            interpretation: "The body mostly sends, connects or notifies, and the name does not say so.",
            recommendations: &["Add a communication verb such as notify_, send_ or publish_ to the name."],
        },
        Axis::Justice => &TrajectoryTemplate {
            interpretation: "The body mostly checks and enforces rules, and the name does not say so.",
            recommendations: &["Add a checking verb such as validate_, verify_ or ensure_ to the name."],
        },
        Axis::Power => &TrajectoryTemplate {
            interpretation: "The body mostly changes or destroys state, and the name does not say so.",
            recommendations: &[
                "Add a verb that states the change, such as update_, delete_ or save_.",
                "Callers cannot tell from the name that this function has side effects.",
            ],
        },
        Axis::Wisdom => &TrajectoryTemplate {
            interpretation: "The body mostly reads or computes, and the name does not say so.",
            recommendations: &["Add a query verb such as get_, compute_ or find_ to the name."],
        },
    }
}

/// Template for a name that promises `from` with no clear replacement in the body.
pub fn away(from: Axis) -> &'static TrajectoryTemplate {
    match from {
        Axis::Love => &TrajectoryTemplate {
            interpretation: "The name promises communication or integration that the body does not clearly perform.",
            recommendations: &["Check that the message or connection actually happens, or drop it from the name."],
        },
        Axis::Justice => &TrajectoryTemplate {
            interpretation: "The name promises validation that the body does not clearly perform.",
            recommendations: &["Add the missing checks, or drop the validation wording from the name."],
        },
        Axis::Power => &TrajectoryTemplate {
            interpretation: "The name promises an action or change that the body does not clearly perform.",
            recommendations: &["Implement the change, call the function that does it, or rename."],
        },
        Axis::Wisdom => &TrajectoryTemplate {
            interpretation: "The name promises information retrieval that the body does not clearly perform.",
            recommendations: &["Return the promised value, or rename to what the body actually does."],
        },
    }
}
