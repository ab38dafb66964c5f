//! Static synonym tables for query classification.
//!
//! Each table maps a canonical label to the keyword list that both
//! detects the label in a free-text query and expands the scored term
//! set. Entries are ordered; classification takes the first label whose
//! keyword appears in the query. All keywords are lowercase, matching
//! the storefront's mixed Spanish and English catalog text.

/// Video game genres.
pub(crate) const GENRES: &[(&str, &[&str])] = &[
    ("accion", &["accion", "action", "pelea", "lucha", "beat em up"]),
    (
        "disparos",
        &[
            "disparos",
            "shooter",
            "fps",
            "first person shooter",
            "third person shooter",
            "tps",
            "battle royale",
        ],
    ),
    (
        "aventura",
        &["aventura", "adventure", "punto y clic", "point and click"],
    ),
    (
        "rpg",
        &["rpg", "rol", "role playing", "role-playing", "jrpg", "arpg", "action rpg"],
    ),
    (
        "estrategia",
        &[
            "estrategia",
            "strategy",
            "rts",
            "tiempo real",
            "real time",
            "por turnos",
            "turn based",
        ],
    ),
    (
        "deportes",
        &["deportes", "sports", "futbol", "soccer", "fifa", "nba", "tenis", "formula 1", "f1"],
    ),
    (
        "carreras",
        &["carreras", "racing", "coches", "autos", "simulador de conduccion", "driving"],
    ),
    (
        "simulacion",
        &[
            "simulacion",
            "simulation",
            "sim",
            "gestión",
            "management",
            "construccion",
            "building",
        ],
    ),
    ("puzzle", &["puzzle", "rompecabezas", "logica", "logic"]),
    (
        "plataformas",
        &["plataformas", "platform", "platformer", "side-scroller", "scroll lateral"],
    ),
    (
        "terror",
        &["terror", "horror", "miedo", "survival horror", "suspense"],
    ),
    (
        "mundo abierto",
        &["mundo abierto", "open world", "sandbox", "free roam"],
    ),
    (
        "multijugador",
        &[
            "multijugador",
            "multiplayer",
            "online",
            "cooperativo",
            "coop",
            "pvp",
            "battle royale",
        ],
    ),
    (
        "roguelike",
        &["roguelike", "rogue-lite", "roguelite", "procedural"],
    ),
    ("indie", &["indie", "independiente", "casual"]),
];

/// Developers and publishers, with their best-known series.
pub(crate) const DEVELOPERS: &[(&str, &[&str])] = &[
    (
        "rockstar",
        &[
            "rockstar",
            "rockstar games",
            "gta",
            "grand theft auto",
            "red dead",
            "bully",
            "la noire",
        ],
    ),
    (
        "naughty dog",
        &["naughty dog", "uncharted", "the last of us", "crash bandicoot"],
    ),
    (
        "ubisoft",
        &[
            "ubisoft",
            "assassins creed",
            "far cry",
            "watch dogs",
            "rainbow six",
            "ghost recon",
        ],
    ),
    (
        "ea",
        &[
            "ea",
            "electronic arts",
            "fifa",
            "battlefield",
            "apex legends",
            "need for speed",
            "mass effect",
        ],
    ),
    (
        "activision",
        &["activision", "call of duty", "cod", "warzone", "crash bandicoot", "spyro"],
    ),
    (
        "nintendo",
        &["nintendo", "mario", "zelda", "metroid", "pokemon", "splatoon", "animal crossing"],
    ),
    (
        "bethesda",
        &[
            "bethesda",
            "fallout",
            "elder scrolls",
            "skyrim",
            "doom",
            "wolfenstein",
            "starfield",
        ],
    ),
    (
        "fromsoft",
        &["from software", "fromsoft", "dark souls", "elden ring", "bloodborne", "sekiro"],
    ),
    (
        "capcom",
        &["capcom", "resident evil", "monster hunter", "devil may cry", "street fighter"],
    ),
    (
        "square enix",
        &["square enix", "final fantasy", "kingdom hearts", "dragon quest", "tomb raider"],
    ),
    ("cd projekt", &["cd projekt", "cdpr", "the witcher", "cyberpunk"]),
];

/// Consoles and platforms.
pub(crate) const PLATFORMS: &[(&str, &[&str])] = &[
    (
        "playstation",
        &["playstation", "ps5", "ps4", "ps3", "ps2", "psx", "psone", "sony"],
    ),
    (
        "xbox",
        &["xbox", "xbox series x", "xbox one", "xbox 360", "microsoft"],
    ),
    (
        "nintendo",
        &["nintendo", "switch", "wii", "gamecube", "n64", "nes", "snes"],
    ),
    (
        "pc",
        &["pc", "windows", "steam", "epic games", "ordenador", "computadora"],
    ),
];

/// Look up a label's keyword list in a table.
pub(crate) fn table_terms(
    table: &'static [(&'static str, &'static [&'static str])],
    label: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, terms)| *terms)
}
