//! Enumerated-code translation tables for the marketplace query contract.

/// What to do with a token the table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedToken {
    /// Silently drop the token.
    Drop,
    /// Keep the token verbatim.
    PassThrough,
    /// Keep the token, lowercased.
    Lowercase,
}

/// Immutable token→code mapping with an explicit fallback policy. The
/// drop vs. pass-through split is part of the target's query contract and
/// must not be unified.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
    unmapped: UnmappedToken,
}

impl CodeTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        unmapped: UnmappedToken,
    ) -> Self {
        Self { entries, unmapped }
    }

    /// Translate one token, applying the table's fallback policy when it
    /// is not an exact match.
    pub fn translate(&self, token: &str) -> Option<String> {
        for (name, code) in self.entries {
            if *name == token {
                return Some((*code).to_string());
            }
        }
        match self.unmapped {
            UnmappedToken::Drop => None,
            UnmappedToken::PassThrough => Some(token.to_string()),
            UnmappedToken::Lowercase => Some(token.to_lowercase()),
        }
    }

    /// Translate a list of tokens, keeping input order.
    pub fn translate_all<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        tokens.into_iter().filter_map(|token| self.translate(token)).collect()
    }
}


/// 1 = apartment, 2 = house, 3 = land, 4 = parking.
pub const REAL_ESTATE_TYPES: CodeTable = CodeTable::new(
    &[
        ("appartement", "1"),
        ("maison", "2"),
        ("terrain", "3"),
        ("parking", "4"),
    ],
    UnmappedToken::Drop,
);

pub const AD_TYPES: CodeTable = CodeTable::new(
    &[("offres", "offer"), ("demandes", "demand")],
    UnmappedToken::Drop,
);

pub const SALE_TYPES: CodeTable = CodeTable::new(
    &[("ancien", "old"), ("neuf", "new"), ("viager", "viager")],
    UnmappedToken::Drop,
);

pub const OUTSIDE_ACCESS: CodeTable = CodeTable::new(
    &[
        ("balcon", "balcony"),
        ("terrasse", "terrace"),
        ("jardin", "garden"),
        ("piscine", "pool"),
    ],
    UnmappedToken::PassThrough,
);

pub const FLOOR_POSITIONS: CodeTable = CodeTable::new(
    &[
        ("rdc", "ground_floor"),
        ("eleve", "not_ground_floor"),
        ("dernier", "last_floor"),
    ],
    UnmappedToken::PassThrough,
);

/// Ordinal condition codes, best ("1") to needs-work ("5").
pub const GLOBAL_CONDITIONS: CodeTable = CodeTable::new(
    &[
        ("tres_bon", "1"),
        ("bon", "2"),
        ("renove", "3"),
        ("rafraichir", "4"),
        ("travaux", "5"),
    ],
    UnmappedToken::Drop,
);

/// Energy ratings, plus the blank / not-applicable sentinels.
pub const ENERGY_RATES: CodeTable = CodeTable::new(
    &[
        ("A", "a"),
        ("B", "b"),
        ("C", "c"),
        ("D", "d"),
        ("E", "e"),
        ("F", "f"),
        ("G", "g"),
        ("vierge", "blank"),
        ("non_soumis", "not_applicable"),
    ],
    UnmappedToken::Lowercase,
);
