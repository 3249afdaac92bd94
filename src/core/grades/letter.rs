//! Letter grade scale

/// Lower bound of each letter band, highest first
const SCALE: [(f64, &str); 11] = [
    (80.0, "A"),
    (75.0, "A-"),
    (70.0, "B+"),
    (65.0, "B"),
    (60.0, "B-"),
    (55.0, "C+"),
    (50.0, "C"),
    (45.0, "C-"),
    (40.0, "D+"),
    (35.0, "D"),
    (30.0, "D-"),
];

/// Letter for a numeric grade; anything below 30 is an `E`
#[must_use]
pub fn letter_grade(grade: f64) -> &'static str {
    SCALE
        .iter()
        .find(|(floor, _)| grade >= *floor)
        .map_or("E", |(_, letter)| letter)
}
