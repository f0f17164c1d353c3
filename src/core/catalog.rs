//! Content catalog - per-level item identifiers, lives/time budgets, and
//! the identifier-to-description lookup.
//!
//! Level data is static and authored here; [`LevelDefinition::new`] validates
//! it so a malformed level (empty or duplicate identifiers) fails at
//! level-start time instead of corrupting a running board.

use thiserror::Error;

/// Number of authored levels
pub const LEVEL_COUNT: usize = 5;

const LEVEL_ITEMS: [&[&str]; LEVEL_COUNT] = [
    &["SIT", "JPCS", "SOE", "SOA"],
    &["TDG", "TAJ", "GTS", "Halcons", "SBHTM", "SAFA"],
    &["SE", "SAS", "SCJ", "SC", "SEB", "OBRA", "DDC", "Musika Divinista"],
    &[
        "Miss DWCC Organization",
        "SAO",
        "SAYM",
        "Phoenix Debate Council",
        "DivinisTanghalan",
        "DWCC Saver-G",
        "Peer Facilitators' Club",
        "Mangyan Student Organization",
        "DWCC Rotaract Club of Calapan",
        "Missionary Families of Christ",
    ],
    &[
        "DWCC Brass Band",
        "Association of Student Grantees",
        "ATEMS",
        "AJE",
        "AMMS",
        "CELT",
        "PE Mentors",
        "AHRMS",
        "LIA",
        "SYFINEX",
        "JPIA",
        "SVD Co-Missionary",
    ],
];

const LIVES_BY_LEVEL: [u32; LEVEL_COUNT] = [5, 10, 15, 20, 25];
const TIME_LIMIT_SECS_BY_LEVEL: [u32; LEVEL_COUNT] = [0, 0, 60, 90, 120];

/// Shown for identifiers without an authored description
pub const FALLBACK_DESCRIPTION: &str = "Part of the DWCC community.";

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("SIT", "School of Information Technology — The academic unit that trains future IT professionals."),
    ("JPCS", "Junior Philippine Computer Society — An organization for IT student leadership and skills."),
    ("SOE", "School of Education — Prepares future teachers and educators."),
    ("SOA", "School of Accountancy — Academic unit for future Certified Public Accountants."),
    ("TDG", "The DWCC Gazette — The official campus publication of DWCC."),
    ("TAJ", "The Accountants Journal — Research publication of the Accountancy department."),
    ("GTS", "Guild of Tourism Students — Organization representing tourism students."),
    ("Halcons", "The DWCC Halcons — Official athletic team of DWCC."),
    ("SBHTM", "School of Business Hospitality and Tourism Management — Academic unit in business and tourism."),
    ("SAFA", "School of Architecture and Fine Arts — Trains students in creative and architectural design."),
    ("SE", "School of Engineering — College for aspiring engineers."),
    ("SAS", "School of Arts and Sciences — Handles general education and liberal arts programs."),
    ("SCJ", "School of Criminal Justice — Trains students in criminology and law enforcement."),
    ("SC", "Student Council — Highest governing body of the student community."),
    ("SEB", "Student Electoral Board — Oversees campus-wide elections."),
    ("OBRA", "Obra Divinista — Official arts and creative production guild."),
    ("DDC", "DWCC Dance Company — Performing arts and dance troupe."),
    ("Musika Divinista", "Musika Divinista — Official music choir and ensemble of DWCC."),
    ("Miss DWCC Organization", "The official organization behind the Miss DWCC pageant."),
    ("SAO", "Student Affairs Office — Handles all student services and concerns."),
    ("SAYM", "Saint Arnold Youth Ministry — Religious formation group for students."),
    ("Phoenix Debate Council", "Phoenix Debate Council — Competitive public speaking and debate group."),
    ("DivinisTanghalan", "DivinisTanghalan — Theater performance and stage acting guild."),
    ("DWCC Saver-G", "Campus group focused on environmental preservation and sustainability."),
    ("Peer Facilitators' Club", "Peer support and counseling advocacy group."),
    ("Mangyan Student Organization", "Organization of DWCC students belonging to the Mangyan tribes."),
    ("DWCC Rotaract Club of Calapan", "Community service club affiliated with Rotary International."),
    ("Association of Student Grantees", "Organization for scholarship and grant beneficiaries."),
    ("ATEMS", "Alliance for Transformative Education through Mathematics and Science — STEM academic organization."),
    ("AJE", "Association of Junior Executives — Business administration student group."),
    ("AMMS", "Association of Marketing Management Students — Business and marketing events group."),
    ("LIA", "Legion of Imaginative Artists — Intellectual and academic literary circle."),
    ("SYFINEX", "SYFINEX — Financial literacy and investment organization."),
    ("JPIA", "Junior Philippine Institute of Accountants — National accounting student organization."),
    ("SVD Co-Missionary", "SVD Co-Missionary — Religious volunteer and mission assistance group."),
];

/// Errors in authored level data.
///
/// These are configuration errors: with correctly authored content they are
/// never produced at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown level index: {0}")]
    UnknownLevel(usize),
    #[error("level {0} has no item identifiers")]
    EmptyLevel(usize),
    #[error("level {level} lists identifier {identifier:?} more than once")]
    DuplicateIdentifier { level: usize, identifier: String },
}

/// One level's board configuration: the distinct identifiers to pair up,
/// a lives budget, and a time limit (0 = untimed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    index: usize,
    items: Vec<String>,
    lives: u32,
    time_limit_secs: u32,
}

impl LevelDefinition {
    /// Build a validated level definition.
    ///
    /// `index` is the 1-based level number used in events and the status line.
    pub fn new(
        index: usize,
        items: Vec<String>,
        lives: u32,
        time_limit_secs: u32,
    ) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyLevel(index));
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return Err(CatalogError::DuplicateIdentifier {
                    level: index,
                    identifier: item.clone(),
                });
            }
        }
        Ok(Self {
            index,
            items,
            lives,
            time_limit_secs,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of card pairs on this level's board
    pub fn pairs(&self) -> usize {
        self.items.len()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    pub fn is_timed(&self) -> bool {
        self.time_limit_secs > 0
    }
}

/// Build the full authored level set, validated.
pub fn standard_levels() -> Result<Vec<LevelDefinition>, CatalogError> {
    let mut levels = Vec::with_capacity(LEVEL_COUNT);
    for (i, items) in LEVEL_ITEMS.iter().enumerate() {
        levels.push(LevelDefinition::new(
            i + 1,
            items.iter().map(|s| (*s).to_string()).collect(),
            LIVES_BY_LEVEL[i],
            TIME_LIMIT_SECS_BY_LEVEL[i],
        )?);
    }
    Ok(levels)
}

/// Look up the description for an identifier, falling back to a generic
/// blurb for unmapped items.
pub fn description(identifier: &str) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, desc)| *desc)
        .unwrap_or(FALLBACK_DESCRIPTION)
}
