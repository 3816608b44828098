//! `EthiopianMonth` — the thirteen months of the Ethiopian year.

/// Month of the Ethiopian year.
///
/// Variants are numbered 1–13 (Meskerem = 1, Pagume = 13).  Months 1–12 have
/// 30 days; Pagume is the short epagomenal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miazia (8).
    Miazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13), the epagomenal month.
    Pagume = 13,
}

impl EthiopianMonth {
    /// All months in calendar order.
    pub const ALL: [EthiopianMonth; 13] = [
        EthiopianMonth::Meskerem,
        EthiopianMonth::Tikimt,
        EthiopianMonth::Hidar,
        EthiopianMonth::Tahsas,
        EthiopianMonth::Tir,
        EthiopianMonth::Yekatit,
        EthiopianMonth::Megabit,
        EthiopianMonth::Miazia,
        EthiopianMonth::Ginbot,
        EthiopianMonth::Sene,
        EthiopianMonth::Hamle,
        EthiopianMonth::Nehase,
        EthiopianMonth::Pagume,
    ];

    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=13 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for Pagume.
    pub fn is_epagomenal(&self) -> bool {
        matches!(self, EthiopianMonth::Pagume)
    }

    /// The following month, or `None` after Pagume.
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Return the Amharic name (`"መስከረም"`, `"ጥቅምት"`, …).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            EthiopianMonth::Meskerem => "መስከረም",
            EthiopianMonth::Tikimt => "ጥቅምት",
            EthiopianMonth::Hidar => "ኅዳር",
            EthiopianMonth::Tahsas => "ታኅሣሥ",
            EthiopianMonth::Tir => "ጥር",
            EthiopianMonth::Yekatit => "የካቲት",
            EthiopianMonth::Megabit => "መጋቢት",
            EthiopianMonth::Miazia => "ሚያዚያ",
            EthiopianMonth::Ginbot => "ግንቦት",
            EthiopianMonth::Sene => "ሰኔ",
            EthiopianMonth::Hamle => "ሐምሌ",
            EthiopianMonth::Nehase => "ነሐሴ",
            EthiopianMonth::Pagume => "ጳጉሜን",
        }
    }

    /// Return the English transliteration (`"Meskerem"`, `"Tikimt"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            EthiopianMonth::Meskerem => "Meskerem",
            EthiopianMonth::Tikimt => "Tikimt",
            EthiopianMonth::Hidar => "Hidar",
            EthiopianMonth::Tahsas => "Tahsas",
            EthiopianMonth::Tir => "Tir",
            EthiopianMonth::Yekatit => "Yekatit",
            EthiopianMonth::Megabit => "Megabit",
            EthiopianMonth::Miazia => "Miazia",
            EthiopianMonth::Ginbot => "Ginbot",
            EthiopianMonth::Sene => "Sene",
            EthiopianMonth::Hamle => "Hamle",
            EthiopianMonth::Nehase => "Nehase",
            EthiopianMonth::Pagume => "Pagume",
        }
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amharic_name())
    }
}

impl From<EthiopianMonth> for u8 {
    fn from(m: EthiopianMonth) -> u8 {
        m as u8
    }
}
