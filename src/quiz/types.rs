use serde::{Deserialize, Serialize};

/// One of the eight color cards of the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardId {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl CardId {
    pub const ALL: [CardId; 8] = [
        CardId::A,
        CardId::B,
        CardId::C,
        CardId::D,
        CardId::E,
        CardId::F,
        CardId::G,
        CardId::H,
    ];

    /// Parse a card symbol. Only the single upper-case letters `A`..`H` are valid.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "A" => Some(CardId::A),
            "B" => Some(CardId::B),
            "C" => Some(CardId::C),
            "D" => Some(CardId::D),
            "E" => Some(CardId::E),
            "F" => Some(CardId::F),
            "G" => Some(CardId::G),
            "H" => Some(CardId::H),
            _ => None,
        }
    }

    /// Lookup digit for this card (`A` is `0`, `H` is `7`).
    pub fn digit(&self) -> char {
        match self {
            CardId::A => '0',
            CardId::B => '1',
            CardId::C => '2',
            CardId::D => '3',
            CardId::E => '4',
            CardId::F => '5',
            CardId::G => '6',
            CardId::H => '7',
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CardId::A => "A",
            CardId::B => "B",
            CardId::C => "C",
            CardId::D => "D",
            CardId::E => "E",
            CardId::F => "F",
            CardId::G => "G",
            CardId::H => "H",
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Ordered card symbols chosen in one round.
///
/// Raw symbols are kept as given so that unknown values reach the encoder,
/// which decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    symbols: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a compact string such as `"ABCDEFGH"` into one symbol per
    /// non-whitespace character.
    pub fn from_letters(letters: &str) -> Self {
        Self::new(letters.chars().filter(|c| !c.is_whitespace()).map(String::from))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<CardId>> for Selection {
    fn from(cards: Vec<CardId>) -> Self {
        Self::new(cards.iter().map(CardId::symbol))
    }
}

impl From<&[CardId]> for Selection {
    fn from(cards: &[CardId]) -> Self {
        Self::new(cards.iter().map(CardId::symbol))
    }
}

/// Lookup namespace; each one is served by its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Personality, derived from the first two picks.
    P,
    /// Current state, derived from the third and fourth picks.
    X,
}

impl Namespace {
    pub fn prefix(&self) -> char {
        match self {
            Namespace::P => 'p',
            Namespace::X => 'x',
        }
    }
}

/// Namespace-prefixed two-digit key, e.g. `p01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey {
    namespace: Namespace,
    digits: [char; 2],
}

impl LookupKey {
    pub fn new(namespace: Namespace, first: char, second: char) -> Self {
        Self {
            namespace,
            digits: [first, second],
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn as_string(&self) -> String {
        let mut key = String::with_capacity(3);
        key.push(self.namespace.prefix());
        key.push(self.digits[0]);
        key.push(self.digits[1]);
        key
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Outcome of a completed quiz. Only built once both lookups succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    personality: String,
    current_state: String,
}

impl TestResult {
    pub fn new(personality: impl Into<String>, current_state: impl Into<String>) -> Self {
        Self {
            personality: personality.into(),
            current_state: current_state.into(),
        }
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn current_state(&self) -> &str {
        &self.current_state
    }
}
