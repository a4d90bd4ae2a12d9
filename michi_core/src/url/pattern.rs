#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSegment {
    Literal(String), // A literal segment, e.g. "users"
    Param(String), // A named parameter segment, e.g. ":id" (name stored lower-cased)
    Wildcard, // A splat segment, "*"
}

impl PatternSegment {
    /// Classify one route-template segment.
    ///
    /// `*` is a wildcard, a leading `:` marks a named parameter, everything
    /// else is a literal. Parameter names are stored lower-cased so lookups
    /// are case-insensitive; literal segments keep their case.
    pub fn classify<T: AsRef<str>>(segment: T) -> Self {
        let segment = segment.as_ref();
        if segment == "*" {
            Self::Wildcard
        } else if let Some(name) = segment.strip_prefix(':') {
            Self::Param(name.to_lowercase())
        } else {
            Self::Literal(segment.to_string())
        }
    }

    /// Check if this pattern segment matches the given request segment
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            PatternSegment::Literal(literal) => literal == segment,
            PatternSegment::Param(_) | PatternSegment::Wildcard => true,
        }
    }

    /// The bound parameter name, for `Param` segments only.
    pub fn name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternSegment::Literal(segment) => write!(f, "Literal: {}", segment),
            PatternSegment::Param(name) => write!(f, ":{}", name),
            PatternSegment::Wildcard => write!(f, "*"),
        }
    }
}
