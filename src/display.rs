// Formatting helpers shared by the screens that render Summary and Detail.

use crate::model::Summary;

pub const DEFAULT_TYPE_COLOR: &str = "#A8A878";
pub const MAX_STAT: u32 = 255;

const TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#EE99AC"),
];

const TYPE_LABELS: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("fire", "Fuego"),
    ("water", "Agua"),
    ("electric", "Eléctrico"),
    ("grass", "Planta"),
    ("ice", "Hielo"),
    ("fighting", "Lucha"),
    ("poison", "Veneno"),
    ("ground", "Tierra"),
    ("flying", "Volador"),
    ("psychic", "Psíquico"),
    ("bug", "Bicho"),
    ("rock", "Roca"),
    ("ghost", "Fantasma"),
    ("dragon", "Dragón"),
    ("dark", "Siniestro"),
    ("steel", "Acero"),
    ("fairy", "Hada"),
];

/// `25` -> `"025"`
pub fn format_pokemon_id(id: u32) -> String {
    format!("{:03}", id)
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// `"mr-mime"` -> `"Mr Mime"`
pub fn format_pokemon_name(name: &str) -> String {
    name.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

pub fn height_to_meters(height: u32) -> String {
    format!("{:.1}", f64::from(height) / 10.0)
}

pub fn weight_to_kilograms(weight: u32) -> String {
    format!("{:.1}", f64::from(weight) / 10.0)
}

/// Share of `max` as a percentage, capped at 100.
pub fn stat_percentage(stat: u32, max: u32) -> f64 {
    if max == 0 {
        return 100.0;
    }
    (f64::from(stat) / f64::from(max) * 100.0).min(100.0)
}

pub fn type_color(type_name: &str) -> &'static str {
    let key = type_name.to_lowercase();
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

pub fn type_label(type_name: &str) -> Option<&'static str> {
    let key = type_name.to_lowercase();
    TYPE_LABELS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, label)| *label)
}

/// Numeric id from a resource URL such as `.../pokemon/25/`, or 0 if there is none.
pub fn pokemon_id_from_url(url: &str) -> u32 {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() < 3 {
        return 0;
    }
    segments[1..segments.len() - 1]
        .iter()
        .find(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

impl Summary {
    /// Card colour, taken from the primary type only.
    pub fn primary_color(&self) -> &'static str {
        self.types
            .first()
            .map(|t| type_color(t))
            .unwrap_or(DEFAULT_TYPE_COLOR)
    }
}
