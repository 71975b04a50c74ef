//! Concepts and the context predicates that disambiguate them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::errors::{HarmonizerError, Result};

/// Where a concept token was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "site", rename_all = "snake_case")]
pub enum ConceptContext {
    /// Name, documentation, or a structural node kind
    #[default]
    Free,
    /// Fragment of a called member's name
    Call {
        /// Receiver expression text, lowercased; `None` for bare calls
        receiver: Option<String>,
    },
}

impl ConceptContext {
    /// Context for a call, normalizing the receiver text.
    pub fn call(receiver: Option<&str>) -> Self {
        Self::Call {
            receiver: receiver
                .map(|r| r.trim().to_lowercase())
                .filter(|r| !r.is_empty()),
        }
    }

    fn receiver(&self) -> Option<&str> {
        match self {
            Self::Call { receiver } => receiver.as_deref(),
            Self::Free => None,
        }
    }
}

/// A token plus the context it was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Concept {
    /// Lowercased token text
    pub token: String,
    /// Observation context
    #[serde(default)]
    pub context: ConceptContext,
}

impl Concept {
    /// Concept from a name, docstring, or structural node kind.
    pub fn free(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            context: ConceptContext::Free,
        }
    }

    /// Concept from a call site.
    pub fn call(token: impl Into<String>, receiver: Option<&str>) -> Self {
        Self {
            token: token.into(),
            context: ConceptContext::call(receiver),
        }
    }
}

/// Guard on a lexicon entry; the entry applies only when the predicate holds.
///
/// The textual tag form is what override documents use:
/// `receiver=<name>`, `receiver~<fragment>`, `member`, `bare`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ContextPredicate {
    /// Member call whose receiver's last dotted segment equals the name
    ReceiverIs(String),
    /// Member call whose receiver text contains the fragment
    ReceiverContains(String),
    /// Any member call
    MemberCall,
    /// Call with no receiver
    BareCall,
}

impl ContextPredicate {
    /// Parse a context tag.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        let invalid = || {
            HarmonizerError::construction(format!(
                "invalid context tag '{tag}', expected receiver=<name>, receiver~<fragment>, member or bare"
            ))
        };

        if let Some(name) = tag.strip_prefix("receiver=") {
            let name = name.trim().trim_start_matches('_').to_lowercase();
            if name.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::ReceiverIs(name));
        }
        if let Some(fragment) = tag.strip_prefix("receiver~") {
            let fragment = fragment.trim().to_lowercase();
            if fragment.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::ReceiverContains(fragment));
        }
        match tag {
            "member" => Ok(Self::MemberCall),
            "bare" => Ok(Self::BareCall),
            _ => Err(invalid()),
        }
    }

    /// Canonical tag form.
    pub fn tag(&self) -> String {
        match self {
            Self::ReceiverIs(name) => format!("receiver={name}"),
            Self::ReceiverContains(fragment) => format!("receiver~{fragment}"),
            Self::MemberCall => "member".to_string(),
            Self::BareCall => "bare".to_string(),
        }
    }

    /// Whether a concept observed in `context` satisfies this predicate.
    pub fn matches(&self, context: &ConceptContext) -> bool {
        let ConceptContext::Call { .. } = context else {
            return false;
        };
        let receiver = context.receiver();
        match self {
            Self::ReceiverIs(name) => receiver
                .map(|r| last_segment(r) == name.as_str())
                .unwrap_or(false),
            Self::ReceiverContains(fragment) => receiver
                .map(|r| r.contains(fragment.as_str()))
                .unwrap_or(false),
            Self::MemberCall => receiver.is_some(),
            Self::BareCall => receiver.is_none(),
        }
    }
}

/// `self._seen` -> `seen`, `os.path` -> `path`
fn last_segment(receiver: &str) -> &str {
    receiver
        .rsplit('.')
        .next()
        .unwrap_or(receiver)
        .trim_end_matches("()")
        .trim_start_matches('_')
}

impl fmt::Display for ContextPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl TryFrom<String> for ContextPredicate {
    type Error = HarmonizerError;

    fn try_from(tag: String) -> Result<Self> {
        Self::parse(&tag)
    }
}

impl From<ContextPredicate> for String {
    fn from(predicate: ContextPredicate) -> Self {
        predicate.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_tags() {
        for tag in ["receiver=seen", "receiver~log", "member", "bare"] {
            assert_eq!(ContextPredicate::parse(tag).unwrap().tag(), tag);
        }
        assert_eq!(
            ContextPredicate::parse("receiver=_Seen").unwrap(),
            ContextPredicate::ReceiverIs("seen".to_string())
        );
        assert!(ContextPredicate::parse("receiver=").is_err());
        assert!(ContextPredicate::parse("owner=seen").is_err());
    }

    #[test]
    fn test_receiver_is_matches_last_segment() {
        let predicate = ContextPredicate::ReceiverIs("seen".to_string());
        assert!(predicate.matches(&ConceptContext::call(Some("self._seen"))));
        assert!(predicate.matches(&ConceptContext::call(Some("seen"))));
        assert!(!predicate.matches(&ConceptContext::call(Some("self.unseen_items"))));
        assert!(!predicate.matches(&ConceptContext::call(None)));
        assert!(!predicate.matches(&ConceptContext::Free));
    }

    #[test]
    fn test_receiver_contains_is_case_insensitive() {
        let predicate = ContextPredicate::ReceiverContains("visited".to_string());
        assert!(predicate.matches(&ConceptContext::call(Some("self.Visited_Nodes"))));
        assert!(!predicate.matches(&ConceptContext::call(Some("self.queue"))));
    }

    #[test]
    fn test_member_and_bare_calls() {
        let member = ConceptContext::call(Some("client"));
        let bare = ConceptContext::call(None);
        assert!(ContextPredicate::MemberCall.matches(&member));
        assert!(!ContextPredicate::MemberCall.matches(&bare));
        assert!(ContextPredicate::BareCall.matches(&bare));
        assert!(!ContextPredicate::BareCall.matches(&ConceptContext::Free));
    }

    #[test]
    fn test_blank_receiver_is_bare() {
        assert_eq!(ConceptContext::call(Some("  ")), ConceptContext::call(None));
    }
}
