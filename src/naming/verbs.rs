//! Curated verb table for name suggestions.
//!
//! Weights are `[love, justice, power, wisdom]`, kept close to the lexicon
//! so a suggested verb resolves near the profile it was picked for.

pub(crate) const CURATED_VERBS: &[(&str, [f64; 4])] = &[
    // connection and communication
    ("notify", [0.8, 0.0, 0.1, 0.1]),
    ("send", [0.7, 0.0, 0.3, 0.0]),
    ("publish", [0.6, 0.0, 0.3, 0.1]),
    ("connect", [0.8, 0.0, 0.2, 0.0]),
    ("share", [0.8, 0.0, 0.2, 0.0]),
    ("dispatch", [0.5, 0.0, 0.4, 0.1]),
    ("sync", [0.6, 0.2, 0.2, 0.0]),
    ("report", [0.3, 0.0, 0.0, 0.7]),
    // validation and rules
    ("validate", [0.0, 0.95, 0.0, 0.05]),
    ("check", [0.0, 0.9, 0.0, 0.1]),
    ("verify", [0.0, 0.9, 0.0, 0.1]),
    ("ensure", [0.0, 0.8, 0.2, 0.0]),
    ("enforce", [0.0, 0.6, 0.4, 0.0]),
    ("authorize", [0.0, 0.8, 0.2, 0.0]),
    ("filter", [0.0, 0.7, 0.1, 0.2]),
    ("compare", [0.0, 0.8, 0.0, 0.2]),
    ("audit", [0.0, 0.7, 0.0, 0.3]),
    ("guard", [0.1, 0.8, 0.1, 0.0]),
    // action and mutation
    ("create", [0.0, 0.0, 0.9, 0.1]),
    ("delete", [0.0, 0.05, 0.95, 0.0]),
    ("remove", [0.0, 0.1, 0.9, 0.0]),
    ("update", [0.0, 0.1, 0.8, 0.1]),
    ("save", [0.0, 0.1, 0.9, 0.0]),
    ("write", [0.0, 0.0, 0.9, 0.1]),
    ("apply", [0.0, 0.1, 0.8, 0.1]),
    ("execute", [0.0, 0.0, 1.0, 0.0]),
    ("reset", [0.0, 0.1, 0.9, 0.0]),
    ("process", [0.0, 0.1, 0.7, 0.2]),
    ("handle", [0.3, 0.3, 0.4, 0.0]),
    ("transform", [0.0, 0.0, 0.4, 0.6]),
    ("build", [0.1, 0.0, 0.8, 0.1]),
    // information and analysis
    ("get", [0.0, 0.05, 0.0, 0.95]),
    ("fetch", [0.1, 0.0, 0.0, 0.9]),
    ("find", [0.0, 0.1, 0.0, 0.9]),
    ("load", [0.0, 0.0, 0.2, 0.8]),
    ("compute", [0.0, 0.1, 0.1, 0.8]),
    ("calculate", [0.0, 0.1, 0.0, 0.9]),
    ("analyze", [0.0, 0.1, 0.0, 0.9]),
    ("parse", [0.0, 0.2, 0.0, 0.8]),
    ("record", [0.0, 0.4, 0.0, 0.6]),
    ("evaluate", [0.0, 0.3, 0.0, 0.7]),
    ("describe", [0.1, 0.0, 0.0, 0.9]),
];
