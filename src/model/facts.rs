/// Reference data shown when a body is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct FactSheet {
    pub name: &'static str,
    pub kind: &'static str,
    pub diameter: &'static str,
    pub mass: &'static str,
    pub temperature: Option<&'static str>,
    pub orbital_period: Option<&'static str>,
    pub composition: Option<&'static str>,
    pub fun_fact: &'static str,
    pub description: &'static str,
}

static FACT_SHEETS: [(&str, FactSheet); 10] = [
    (
        "sun",
        FactSheet {
            name: "Sun",
            kind: "Star",
            diameter: "1,391,000 km",
            mass: "1.989 × 10³⁰ kg",
            temperature: Some("5,500°C (surface)"),
            orbital_period: None,
            composition: Some("71% Hydrogen, 27% Helium, 2% Other"),
            fun_fact: "The Sun contains 99.86% of all mass in our Solar System!",
            description: "Our Sun is a yellow dwarf star that provides the energy for life on Earth.",
        },
    ),
    (
        "mercury",
        FactSheet {
            name: "Mercury",
            kind: "Terrestrial Planet",
            diameter: "4,879 km",
            mass: "3.301 × 10²³ kg",
            temperature: Some("430°C (day), -180°C (night)"),
            orbital_period: Some("88 Earth days"),
            composition: None,
            fun_fact: "A day on Mercury lasts longer than its year!",
            description: "The smallest and innermost planet, with extreme temperature variations.",
        },
    ),
    (
        "venus",
        FactSheet {
            name: "Venus",
            kind: "Terrestrial Planet",
            diameter: "12,104 km",
            mass: "4.867 × 10²⁴ kg",
            temperature: Some("465°C"),
            orbital_period: Some("225 Earth days"),
            composition: None,
            fun_fact: "Venus rotates backwards compared to other planets!",
            description: "Often called Earth's sister planet, but with a runaway greenhouse effect.",
        },
    ),
    (
        "earth",
        FactSheet {
            name: "Earth",
            kind: "Terrestrial Planet",
            diameter: "12,756 km",
            mass: "5.972 × 10²⁴ kg",
            temperature: Some("15°C (average)"),
            orbital_period: Some("365.25 days"),
            composition: None,
            fun_fact: "Earth is the only known planet with liquid water on its surface!",
            description: "Our home planet, the only known place in the universe with life.",
        },
    ),
    (
        "mars",
        FactSheet {
            name: "Mars",
            kind: "Terrestrial Planet",
            diameter: "6,792 km",
            mass: "6.417 × 10²³ kg",
            temperature: Some("-65°C (average)"),
            orbital_period: Some("687 Earth days"),
            composition: None,
            fun_fact: "Mars has the largest volcano in the Solar System - Olympus Mons!",
            description: "The Red Planet, with polar ice caps and evidence of past water.",
        },
    ),
    (
        "jupiter",
        FactSheet {
            name: "Jupiter",
            kind: "Gas Giant",
            diameter: "142,984 km",
            mass: "1.898 × 10²⁷ kg",
            temperature: Some("-145°C (cloud tops)"),
            orbital_period: Some("11.86 Earth years"),
            composition: None,
            fun_fact: "Jupiter's Great Red Spot is a storm that has raged for over 400 years!",
            description: "The largest planet, a gas giant with a prominent Great Red Spot.",
        },
    ),
    (
        "saturn",
        FactSheet {
            name: "Saturn",
            kind: "Gas Giant",
            diameter: "120,536 km",
            mass: "5.683 × 10²⁶ kg",
            temperature: Some("-178°C (cloud tops)"),
            orbital_period: Some("29.46 Earth years"),
            composition: None,
            fun_fact: "Saturn would float in water if you could find a big enough ocean!",
            description: "Known for its spectacular ring system made of ice and rock particles.",
        },
    ),
    (
        "uranus",
        FactSheet {
            name: "Uranus",
            kind: "Ice Giant",
            diameter: "51,118 km",
            mass: "8.681 × 10²⁵ kg",
            temperature: Some("-224°C"),
            orbital_period: Some("84 Earth years"),
            composition: None,
            fun_fact: "Uranus rotates on its side - practically rolling around the Sun!",
            description: "An ice giant that rotates on its side with a unique blue-green color.",
        },
    ),
    (
        "neptune",
        FactSheet {
            name: "Neptune",
            kind: "Ice Giant",
            diameter: "49,528 km",
            mass: "1.024 × 10²⁶ kg",
            temperature: Some("-218°C"),
            orbital_period: Some("164.8 Earth years"),
            composition: None,
            fun_fact: "Neptune has the strongest winds in the Solar System - over 2,000 km/h!",
            description: "The windiest planet, a deep blue ice giant with violent storms.",
        },
    ),
    (
        "moon",
        FactSheet {
            name: "Moon",
            kind: "Natural Satellite",
            diameter: "3,476 km",
            mass: "7.342 × 10²² kg",
            temperature: Some("127°C (day), -173°C (night)"),
            orbital_period: Some("27.3 Earth days"),
            composition: None,
            fun_fact: "The Moon is slowly moving away from Earth at 3.8 cm per year!",
            description: "Earth's only natural satellite, responsible for ocean tides.",
        },
    ),
];

pub fn fact_sheet(key: &str) -> Option<&'static FactSheet> {
    FACT_SHEETS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, sheet)| sheet)
}
