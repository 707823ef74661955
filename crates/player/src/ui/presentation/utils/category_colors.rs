//! Badge colors for creature categories (types)

/// Tailwind background class for a category badge; unknown categories are gray.
pub fn category_color_class(category: &str) -> &'static str {
    match category {
        "normal" => "bg-gray-400",
        "fire" => "bg-red-500",
        "water" => "bg-blue-500",
        "electric" => "bg-yellow-400",
        "grass" => "bg-green-500",
        "ice" => "bg-blue-200",
        "fighting" => "bg-red-700",
        "poison" => "bg-purple-500",
        "ground" => "bg-yellow-600",
        "flying" => "bg-indigo-300",
        "psychic" => "bg-pink-500",
        "bug" => "bg-lime-500",
        "rock" => "bg-yellow-800",
        "ghost" => "bg-purple-700",
        "dragon" => "bg-indigo-600",
        "dark" => "bg-gray-800",
        "steel" => "bg-gray-500",
        "fairy" => "bg-pink-300",
        _ => "bg-gray-400",
    }
}
