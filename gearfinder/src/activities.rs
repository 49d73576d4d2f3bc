//! Fixed activity catalog shown as tiles. Selecting one submits its name as the
//! search query.

pub const ACTIVITIES: [&str; 12] = [
    "Hunting",
    "Fishing",
    "Pickleball",
    "Camping",
    "Hiking",
    "Rock Climbing",
    "Kayaking",
    "Mountain Biking",
    "Skiing",
    "Golf",
    "Beach Volleyball",
    "Fitness",
];

/// Catalog lookup by 1-based position, the way tiles are numbered in listings.
pub fn by_number(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| ACTIVITIES.get(i)).copied()
}
