use crate::{
    Result,
    constants::{ADMIN_CARDS, MAX_CARD_ID_LENGTH, MAX_UID_LENGTH},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Card identifier: the decimal rendering of a card UID.
///
/// The reader delivers the UID as raw bytes; the terminal reads them as a
/// little-endian unsigned integer and keeps its decimal string. Two cards are
/// the same card exactly when these strings are equal.
///
/// # Security
/// This type implements constant-time comparison to prevent timing attacks
/// when comparing card identifiers during access decisions.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Create a card identifier from its decimal text.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidCardFormat` if:
    /// - The identifier is empty
    /// - The identifier contains anything other than ASCII digits
    /// - The identifier is longer than 39 digits
    pub fn new(id: &str) -> Result<Self> {
        let id = id.trim();

        if id.is_empty() {
            return Err(Error::InvalidCardFormat(
                "Card identifier cannot be empty".to_string(),
            ));
        }

        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidCardFormat(format!(
                "Card identifier must be decimal, got '{id}'"
            )));
        }

        if id.len() > MAX_CARD_ID_LENGTH {
            return Err(Error::InvalidCardFormat(format!(
                "Card identifier must be at most {MAX_CARD_ID_LENGTH} digits, got {}",
                id.len()
            )));
        }

        Ok(CardId(id.to_string()))
    }

    /// Decode a card identifier from raw UID bytes (little-endian, unsigned).
    ///
    /// # Errors
    /// Returns `Error::InvalidUid` if the UID is empty or longer than 16 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagkeeper_core::CardId;
    ///
    /// let card = CardId::from_uid(&[0x01, 0x02, 0x03, 0x04]).unwrap();
    /// assert_eq!(card.as_str(), "67305985");
    /// ```
    pub fn from_uid(uid: &[u8]) -> Result<Self> {
        if uid.is_empty() {
            return Err(Error::InvalidUid {
                message: "UID cannot be empty".to_string(),
            });
        }

        if uid.len() > MAX_UID_LENGTH {
            return Err(Error::InvalidUid {
                message: format!(
                    "UID must be at most {MAX_UID_LENGTH} bytes, got {}",
                    uid.len()
                ),
            });
        }

        let value = uid
            .iter()
            .rev()
            .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));

        Ok(CardId(value.to_string()))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardId::new(s)
    }
}

impl TryFrom<String> for CardId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        CardId::new(&value)
    }
}

impl From<CardId> for String {
    fn from(card: CardId) -> Self {
        card.0
    }
}

/// Constant-time comparison implementation for CardId
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for CardId {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::hash::Hash for CardId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Privileged cards that open the admin menu.
///
/// The production set is compiled in ([`ADMIN_CARDS`]); other sets are only
/// built by tests and host tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSet(Vec<CardId>);

impl AdminSet {
    /// Create an admin set from arbitrary identifiers.
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut set = Vec::new();
        for card in cards {
            if !set.contains(&card) {
                set.push(card);
            }
        }
        AdminSet(set)
    }

    /// The compiled-in admin set.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ADMIN_CARDS.iter().filter_map(|id| CardId::new(id).ok()))
    }

    /// Returns `true` if the card is privileged.
    #[must_use]
    pub fn contains(&self, card: &CardId) -> bool {
        self.0.contains(card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AdminSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Set of cards allowed through the door.
///
/// Stored as a JSON array of identifiers. Duplicates found in a stored file
/// are collapsed on load so the set never holds the same card twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CardId>", into = "Vec<CardId>")]
pub struct Whitelist {
    cards: Vec<CardId>,
}

impl Whitelist {
    /// Create an empty whitelist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the card is whitelisted.
    #[must_use]
    pub fn contains(&self, card: &CardId) -> bool {
        self.cards.contains(card)
    }

    /// Add a card. Returns `false` if it was already present.
    pub fn insert(&mut self, card: CardId) -> bool {
        if self.contains(&card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Remove a card. Returns `false` if it was not present.
    pub fn remove(&mut self, card: &CardId) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter()
    }
}

impl From<Vec<CardId>> for Whitelist {
    fn from(cards: Vec<CardId>) -> Self {
        let mut whitelist = Whitelist::new();
        for card in cards {
            whitelist.insert(card);
        }
        whitelist
    }
}

impl From<Whitelist> for Vec<CardId> {
    fn from(whitelist: Whitelist) -> Self {
        whitelist.cards
    }
}

/// Outcome of the access decision for one scanned card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Privileged card: access granted and the admin menu opens.
    Admin,
    /// Whitelisted card: access granted.
    Granted,
    /// Unknown card: access denied.
    Denied,
}

impl AccessDecision {
    /// Decide access for a card. Admin membership is checked first.
    #[must_use]
    pub fn decide(card: &CardId, admins: &AdminSet, whitelist: &Whitelist) -> Self {
        if admins.contains(card) {
            AccessDecision::Admin
        } else if whitelist.contains(card) {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }

    /// Returns `true` for both granting outcomes.
    #[inline]
    #[must_use]
    pub fn is_grant(self) -> bool {
        !matches!(self, AccessDecision::Denied)
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccessDecision::Admin => write!(f, "Admin"),
            AccessDecision::Granted => write!(f, "Granted"),
            AccessDecision::Denied => write!(f, "Denied"),
        }
    }
}
