//! Built-in calibration tables for the lexicon.
//!
//! Weights are `[love, justice, power, wisdom]`. They are calibration data;
//! projects adjust them through override documents rather than code.

/// Single-word entries.
pub(crate) const BUILTIN_WORDS: &[(&str, [f64; 4])] = &[
    // Love: connection, communication, integration
    ("send", [0.7, 0.0, 0.3, 0.0]),
    ("notify", [0.8, 0.0, 0.1, 0.1]),
    ("connect", [0.8, 0.0, 0.2, 0.0]),
    ("share", [0.8, 0.0, 0.2, 0.0]),
    ("help", [0.9, 0.0, 0.0, 0.1]),
    ("support", [0.8, 0.1, 0.0, 0.1]),
    ("join", [0.7, 0.0, 0.3, 0.0]),
    ("merge", [0.6, 0.1, 0.3, 0.0]),
    ("link", [0.8, 0.0, 0.1, 0.1]),
    ("attach", [0.7, 0.0, 0.3, 0.0]),
    ("bind", [0.6, 0.1, 0.3, 0.0]),
    ("greet", [1.0, 0.0, 0.0, 0.0]),
    ("welcome", [1.0, 0.0, 0.0, 0.0]),
    ("message", [0.8, 0.0, 0.0, 0.2]),
    ("communicate", [0.9, 0.0, 0.0, 0.1]),
    ("broadcast", [0.7, 0.0, 0.3, 0.0]),
    ("publish", [0.6, 0.0, 0.3, 0.1]),
    ("subscribe", [0.8, 0.0, 0.1, 0.1]),
    ("invite", [0.9, 0.0, 0.1, 0.0]),
    ("introduce", [0.8, 0.0, 0.0, 0.2]),
    ("collaborate", [0.9, 0.1, 0.0, 0.0]),
    ("sync", [0.6, 0.2, 0.2, 0.0]),
    ("synchronize", [0.6, 0.2, 0.2, 0.0]),
    ("combine", [0.6, 0.0, 0.3, 0.1]),
    ("integrate", [0.7, 0.1, 0.2, 0.0]),
    ("unite", [0.9, 0.0, 0.1, 0.0]),
    ("bridge", [0.8, 0.0, 0.1, 0.1]),
    ("respond", [0.7, 0.1, 0.0, 0.2]),
    ("reply", [0.8, 0.0, 0.0, 0.2]),
    ("serve", [0.7, 0.0, 0.2, 0.1]),
    ("give", [0.8, 0.0, 0.2, 0.0]),
    ("offer", [0.8, 0.0, 0.1, 0.1]),
    ("care", [1.0, 0.0, 0.0, 0.0]),
    ("protect", [0.6, 0.3, 0.1, 0.0]),
    ("emit", [0.6, 0.0, 0.3, 0.1]),
    ("dispatch", [0.5, 0.0, 0.4, 0.1]),
    ("forward", [0.7, 0.0, 0.2, 0.1]),
    ("recover", [0.5, 0.3, 0.2, 0.0]),
    ("yield", [0.5, 0.0, 0.0, 0.5]),
    ("await", [0.4, 0.4, 0.2, 0.0]),
    ("print", [0.6, 0.0, 0.1, 0.3]),
    ("display", [0.5, 0.0, 0.1, 0.4]),
    ("show", [0.5, 0.0, 0.1, 0.4]),
    ("add", [0.4, 0.0, 0.6, 0.0]),
    ("append", [0.3, 0.0, 0.7, 0.0]),
    // Justice: validation, rules, ordering
    ("validate", [0.0, 0.95, 0.0, 0.05]),
    ("check", [0.0, 0.9, 0.0, 0.1]),
    ("verify", [0.0, 0.9, 0.0, 0.1]),
    ("ensure", [0.0, 0.8, 0.2, 0.0]),
    ("assert", [0.0, 1.0, 0.0, 0.0]),
    ("compare", [0.0, 0.8, 0.0, 0.2]),
    ("filter", [0.0, 0.7, 0.1, 0.2]),
    ("sort", [0.0, 0.7, 0.2, 0.1]),
    ("order", [0.0, 0.8, 0.1, 0.1]),
    ("test", [0.0, 0.8, 0.0, 0.2]),
    ("confirm", [0.1, 0.8, 0.0, 0.1]),
    ("approve", [0.1, 0.8, 0.1, 0.0]),
    ("authorize", [0.0, 0.8, 0.2, 0.0]),
    ("authenticate", [0.0, 0.8, 0.1, 0.1]),
    ("permit", [0.1, 0.8, 0.1, 0.0]),
    ("allow", [0.1, 0.8, 0.1, 0.0]),
    ("deny", [0.0, 0.8, 0.2, 0.0]),
    ("reject", [0.0, 0.7, 0.3, 0.0]),
    ("enforce", [0.0, 0.6, 0.4, 0.0]),
    ("audit", [0.0, 0.7, 0.0, 0.3]),
    ("balance", [0.1, 0.8, 0.1, 0.0]),
    ("judge", [0.0, 0.8, 0.0, 0.2]),
    ("rule", [0.0, 0.9, 0.1, 0.0]),
    ("constrain", [0.0, 0.8, 0.2, 0.0]),
    ("guard", [0.1, 0.8, 0.1, 0.0]),
    ("sanitize", [0.0, 0.7, 0.3, 0.0]),
    ("normalize", [0.0, 0.6, 0.2, 0.2]),
    ("match", [0.0, 0.8, 0.0, 0.2]),
    ("equals", [0.0, 0.9, 0.0, 0.1]),
    ("correct", [0.0, 0.7, 0.2, 0.1]),
    ("is", [0.0, 0.8, 0.0, 0.2]),
    ("has", [0.0, 0.7, 0.0, 0.3]),
    ("can", [0.0, 0.8, 0.0, 0.2]),
    ("should", [0.0, 0.9, 0.0, 0.1]),
    ("logic", [0.0, 0.85, 0.0, 0.15]),
    ("iterate", [0.0, 0.4, 0.4, 0.2]),
    ("manage", [0.2, 0.4, 0.4, 0.0]),
    ("schedule", [0.1, 0.6, 0.3, 0.0]),
    ("limit", [0.0, 0.8, 0.2, 0.0]),
    ("require", [0.0, 0.9, 0.1, 0.0]),
    ("expect", [0.0, 0.8, 0.0, 0.2]),
    // Power: action, mutation, execution
    ("create", [0.0, 0.0, 0.9, 0.1]),
    ("delete", [0.0, 0.05, 0.95, 0.0]),
    ("remove", [0.0, 0.1, 0.9, 0.0]),
    ("destroy", [0.0, 0.0, 1.0, 0.0]),
    ("update", [0.0, 0.1, 0.8, 0.1]),
    ("modify", [0.0, 0.1, 0.9, 0.0]),
    ("change", [0.0, 0.1, 0.9, 0.0]),
    ("set", [0.0, 0.1, 0.9, 0.0]),
    ("save", [0.0, 0.1, 0.9, 0.0]),
    ("write", [0.0, 0.0, 0.9, 0.1]),
    ("store", [0.0, 0.1, 0.8, 0.1]),
    ("persist", [0.0, 0.1, 0.9, 0.0]),
    ("insert", [0.0, 0.0, 0.9, 0.1]),
    ("execute", [0.0, 0.0, 1.0, 0.0]),
    ("run", [0.0, 0.0, 1.0, 0.0]),
    ("process", [0.0, 0.1, 0.7, 0.2]),
    ("build", [0.1, 0.0, 0.8, 0.1]),
    ("make", [0.0, 0.0, 0.9, 0.1]),
    ("generate", [0.0, 0.0, 0.7, 0.3]),
    ("produce", [0.1, 0.0, 0.8, 0.1]),
    ("start", [0.0, 0.0, 1.0, 0.0]),
    ("stop", [0.0, 0.1, 0.9, 0.0]),
    ("kill", [0.0, 0.0, 1.0, 0.0]),
    ("terminate", [0.0, 0.1, 0.9, 0.0]),
    ("launch", [0.0, 0.0, 1.0, 0.0]),
    ("trigger", [0.1, 0.0, 0.9, 0.0]),
    ("force", [0.0, 0.0, 1.0, 0.0]),
    ("raise", [0.0, 0.3, 0.7, 0.0]),
    ("throw", [0.0, 0.3, 0.7, 0.0]),
    ("apply", [0.0, 0.1, 0.8, 0.1]),
    ("commit", [0.0, 0.1, 0.9, 0.0]),
    ("push", [0.1, 0.0, 0.9, 0.0]),
    ("upload", [0.3, 0.0, 0.7, 0.0]),
    ("clear", [0.0, 0.1, 0.9, 0.0]),
    ("reset", [0.0, 0.1, 0.9, 0.0]),
    ("purge", [0.0, 0.1, 0.9, 0.0]),
    ("drop", [0.0, 0.0, 1.0, 0.0]),
    ("truncate", [0.0, 0.1, 0.9, 0.0]),
    ("assign", [0.0, 0.0, 0.8, 0.2]),
    ("accumulate", [0.0, 0.0, 0.6, 0.4]),
    ("mutate", [0.0, 0.0, 1.0, 0.0]),
    ("transform", [0.0, 0.0, 0.4, 0.6]),
    ("convert", [0.0, 0.0, 0.4, 0.6]),
    ("render", [0.2, 0.0, 0.5, 0.3]),
    ("handle", [0.3, 0.3, 0.4, 0.0]),
    ("open", [0.1, 0.0, 0.8, 0.1]),
    ("close", [0.0, 0.1, 0.9, 0.0]),
    ("put", [0.0, 0.0, 0.9, 0.1]),
    ("pop", [0.0, 0.0, 0.8, 0.2]),
    ("replace", [0.0, 0.1, 0.9, 0.0]),
    ("install", [0.0, 0.1, 0.9, 0.0]),
    ("init", [0.1, 0.1, 0.8, 0.0]),
    ("initialize", [0.1, 0.1, 0.8, 0.0]),
    ("import", [0.3, 0.0, 0.0, 0.7]),
    // Wisdom: information, retrieval, analysis
    ("get", [0.0, 0.05, 0.0, 0.95]),
    ("read", [0.0, 0.0, 0.1, 0.9]),
    ("fetch", [0.1, 0.0, 0.0, 0.9]),
    ("find", [0.0, 0.1, 0.0, 0.9]),
    ("search", [0.0, 0.1, 0.0, 0.9]),
    ("query", [0.0, 0.1, 0.0, 0.9]),
    ("load", [0.0, 0.0, 0.2, 0.8]),
    ("lookup", [0.0, 0.0, 0.0, 1.0]),
    ("retrieve", [0.0, 0.0, 0.0, 1.0]),
    ("calculate", [0.0, 0.1, 0.0, 0.9]),
    ("compute", [0.0, 0.1, 0.1, 0.8]),
    ("analyze", [0.0, 0.1, 0.0, 0.9]),
    ("parse", [0.0, 0.2, 0.0, 0.8]),
    ("inspect", [0.0, 0.2, 0.0, 0.8]),
    ("evaluate", [0.0, 0.3, 0.0, 0.7]),
    ("measure", [0.0, 0.2, 0.0, 0.8]),
    ("count", [0.0, 0.1, 0.0, 0.9]),
    ("estimate", [0.0, 0.1, 0.0, 0.9]),
    ("predict", [0.0, 0.0, 0.0, 1.0]),
    ("learn", [0.1, 0.0, 0.0, 0.9]),
    ("understand", [0.1, 0.0, 0.0, 0.9]),
    ("know", [0.0, 0.0, 0.0, 1.0]),
    ("explain", [0.2, 0.0, 0.0, 0.8]),
    ("describe", [0.1, 0.0, 0.0, 0.9]),
    ("summarize", [0.1, 0.0, 0.0, 0.9]),
    ("report", [0.3, 0.0, 0.0, 0.7]),
    ("log", [0.1, 0.1, 0.0, 0.8]),
    ("record", [0.0, 0.4, 0.0, 0.6]),
    ("trace", [0.0, 0.1, 0.0, 0.9]),
    ("track", [0.0, 0.2, 0.0, 0.8]),
    ("monitor", [0.1, 0.2, 0.0, 0.7]),
    ("observe", [0.0, 0.0, 0.0, 1.0]),
    ("view", [0.1, 0.0, 0.0, 0.9]),
    ("list", [0.0, 0.1, 0.0, 0.9]),
    ("detect", [0.0, 0.2, 0.0, 0.8]),
    ("discover", [0.0, 0.0, 0.0, 1.0]),
    ("recognize", [0.0, 0.1, 0.0, 0.9]),
    ("classify", [0.0, 0.3, 0.0, 0.7]),
    ("interpret", [0.0, 0.1, 0.0, 0.9]),
    ("resolve", [0.0, 0.4, 0.0, 0.6]),
    ("extract", [0.0, 0.0, 0.2, 0.8]),
    ("scan", [0.0, 0.1, 0.0, 0.9]),
    ("index", [0.0, 0.2, 0.0, 0.8]),
    ("cache", [0.0, 0.0, 0.4, 0.6]),
    ("remember", [0.1, 0.0, 0.0, 0.9]),
    ("recall", [0.0, 0.0, 0.0, 1.0]),
    ("information", [0.0, 0.0, 0.0, 1.0]),
    ("knowledge", [0.0, 0.0, 0.0, 1.0]),
    ("wisdom", [0.0, 0.0, 0.0, 1.0]),
    ("reference", [0.1, 0.0, 0.0, 0.9]),
    ("debug", [0.0, 0.2, 0.0, 0.8]),
    ("peek", [0.0, 0.0, 0.0, 1.0]),
    ("format", [0.2, 0.1, 0.1, 0.6]),
    ("serialize", [0.1, 0.1, 0.3, 0.5]),
    ("deserialize", [0.0, 0.1, 0.2, 0.7]),
    ("encode", [0.1, 0.1, 0.3, 0.5]),
    ("decode", [0.0, 0.1, 0.2, 0.7]),
];

/// Compound phrases, matched greedily before single words.
pub(crate) const BUILTIN_PHRASES: &[(&str, [f64; 4])] = &[
    ("look up", [0.0, 0.0, 0.0, 1.0]),
    ("set up", [0.3, 0.1, 0.6, 0.0]),
    ("tear down", [0.0, 0.1, 0.9, 0.0]),
    ("clean up", [0.0, 0.3, 0.7, 0.0]),
    ("log in", [0.4, 0.6, 0.0, 0.0]),
    ("log out", [0.4, 0.5, 0.1, 0.0]),
    ("sign in", [0.4, 0.6, 0.0, 0.0]),
    ("get or create", [0.0, 0.0, 0.6, 0.4]),
    ("find or create", [0.0, 0.0, 0.6, 0.4]),
    ("health check", [0.1, 0.5, 0.0, 0.4]),
];

/// Context-qualified entries: `(token, context tag, weights)`, evaluated in order.
pub(crate) const BUILTIN_CONTEXT_RULES: &[(&str, &str, [f64; 4])] = &[
    // bookkeeping sets record what happened
    ("add", "receiver~seen", [0.0, 0.4, 0.0, 0.6]),
    ("add", "receiver~visited", [0.0, 0.4, 0.0, 0.6]),
    ("add", "receiver~processed", [0.0, 0.4, 0.0, 0.6]),
    ("append", "receiver~history", [0.0, 0.4, 0.0, 0.6]),
    ("append", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    // loggers record as well
    ("info", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    ("debug", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    ("warning", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    ("error", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    ("write", "receiver~log", [0.0, 0.4, 0.0, 0.6]),
    // hashers compute
    ("update", "receiver~hash", [0.0, 0.1, 0.2, 0.7]),
    ("update", "receiver~digest", [0.0, 0.1, 0.2, 0.7]),
    ("update", "receiver~sha", [0.0, 0.1, 0.2, 0.7]),
    // os.path.join composes, thread.join waits
    ("join", "receiver=path", [0.0, 0.3, 0.0, 0.7]),
    ("join", "receiver~thread", [0.3, 0.5, 0.2, 0.0]),
    // queues hand work to someone else
    ("put", "receiver~queue", [0.5, 0.0, 0.5, 0.0]),
    ("get", "receiver~queue", [0.5, 0.0, 0.2, 0.3]),
];
