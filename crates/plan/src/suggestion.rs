/// Fixed, ordered catalog of canned meal ideas offered by the random draw.
/// Process-wide constant, never mutated.
pub const SUGGESTIONS: [&str; 15] = [
    "Pollo a la plancha con verduras",
    "Pasta con salsa boloñesa",
    "Ensalada César con pollo",
    "Salmón al horno con papas",
    "Tacos de pescado",
    "Risotto de champiñones",
    "Curry de pollo con arroz",
    "Pizza casera",
    "Sopa de lentejas",
    "Hamburguesas caseras",
    "Paella de mariscos",
    "Lasaña de verduras",
    "Pollo teriyaki con arroz",
    "Quesadillas de pollo",
    "Estofado de carne",
];
