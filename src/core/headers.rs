//! Header relabeling and column categories

use std::fmt;

/// CSV header → Polish display header
const HEADER_MAPPING: [(&str, &str); 18] = [
    ("Attack K", "Punkty"),
    ("Attack E", "Błędy"),
    ("Attack Atk%", "% ataków zakończonych punktem"),
    ("Attack Atk% Trans", "Atk% Kontra"),
    ("Attack Kill%", "Punkt%"),
    ("Attack K/S", "Punkt/Set"),
    ("Attack Error%", "Błąd%"),
    ("Serve SA", "Asy"),
    ("Serve SE", "Serwis błąd"),
    ("Serve TA", "Serwisy"),
    ("Receive TA", "Przyjęcia"),
    ("Receive Pass%", "Średni % przyjęcia"),
    ("Perfect Perfect Pass%", "% Idealnego przyjęcia"),
    ("Dig DS", "Udane obrony"),
    ("Dig DE", "Błąd obrony"),
    ("Block BS", "Punkty blokiem"),
    ("Block BE", "Błąd w bloku"),
    ("Block B/S", "Blok/Set"),
];

/// Display header for a trimmed CSV header, falling back to the header itself
pub fn display_header(header: &str) -> &str {
    HEADER_MAPPING
        .iter()
        .find(|(from, _)| *from == header)
        .map(|(_, to)| *to)
        .unwrap_or(header)
}

/// Group a column belongs to, shown in the row above the headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Attack,
    Serve,
    Receive,
    Block,
    Dig,
}

impl Category {
    /// Merge scan order
    pub const ALL: [Category; 5] = [
        Category::Attack,
        Category::Serve,
        Category::Receive,
        Category::Block,
        Category::Dig,
    ];

    /// Classify an original (untranslated, trimmed) CSV header.
    ///
    /// Rules are tried in order and the first match wins. Note the labels
    /// for blocking and digging are crossed over in the stock report
    /// (`Block` columns sit under "Obrona", `Dig` columns under "Blok").
    pub fn classify(header: &str) -> Option<Category> {
        if header.starts_with("ATK") || header.contains("Attack") {
            Some(Category::Attack)
        } else if header.starts_with("Serv") {
            Some(Category::Serve)
        } else if header.starts_with("Rec") {
            Some(Category::Receive)
        } else if header.starts_with("Blk") || header.contains("Block") {
            Some(Category::Block)
        } else if header.contains("Dig") {
            Some(Category::Dig)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Attack => "Atak",
            Category::Serve => "Serwis",
            Category::Receive => "Przyjęcie",
            Category::Block => "Obrona",
            Category::Dig => "Blok",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Group label for a header, empty when it has no category
pub fn category_label(header: &str) -> &'static str {
    Category::classify(header).map(Category::label).unwrap_or("")
}

/// Does a display header denote a percentage column?
pub fn is_percent_header(display: &str) -> bool {
    display.contains('%')
}
