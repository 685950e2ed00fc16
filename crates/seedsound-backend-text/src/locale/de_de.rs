use super::LocalePack;

pub(super) static DE_DE: LocalePack = LocalePack {
    code: "de_DE",
    name: "German (Germany)",
    title_prefixes: &[
        "Der", "Die", "Das", "Mein", "Dein", "Unser", "Elektrisch", "Neon", "Golden", "Silber",
        "Mitternacht", "Kristall", "Samt", "Gebrochen", "Verloren", "Ewig", "Heilig", "Geheim",
        "Still", "Wild", "Brennend", "Gefroren", "Tanzend",
    ],
    title_nouns: &[
        "Herz", "Traum", "Himmel", "Feuer", "Regen", "Sturm", "Nacht", "Tag", "Stern", "Mond",
        "Sonne", "Weg", "Fluss", "Ozean", "Berg", "Wald", "Stadt", "Licht", "Schatten", "Donner",
        "Blitz", "Wind", "Flamme", "Eis", "Diamant", "Rose", "Wolf", "Adler", "Drache", "Phönix",
        "Engel", "Geist", "Seele", "Zeit", "Liebe", "Hoffnung", "Angst", "Schmerz", "Freude",
        "Träne", "Lächeln", "Kuss", "Stimme",
    ],
    title_suffixes: &[
        "Heute Nacht", "Für Immer", "Wieder", "Weg", "Innen", "Außen", "Oben", "Unten",
        "Jenseits", "Innerhalb", "Ohne", "Allein", "Zusammen", "Jetzt", "Dann", "Hier",
    ],
    title_adjectives: &[
        "Schön", "Gefährlich", "Mysteriös", "Mächtig", "Sanft", "Wild", "Ruhig", "Frei",
        "Gebunden", "Verloren", "Gefunden", "Gebrochen", "Ganz", "Leer", "Voll",
    ],
    band_prefixes: &[
        "Die", "Elektrische", "Neon", "Kosmische", "Digitale", "Analoge", "Atomare", "Sonische",
        "Super", "Ultra", "Mega", "Hyper", "Cyber", "Techno", "Retro", "Neo",
    ],
    band_nouns: &[
        "Wölfe", "Tiger", "Löwen", "Adler", "Falken", "Raben", "Krähen", "Schlangen", "Drachen",
        "Phönixe", "Einhörner", "Ritter", "Könige", "Königinnen", "Prinzen", "Piraten", "Ninjas",
        "Samurai", "Krieger", "Soldaten", "Rebellen", "Gesetzlose", "Geister", "Engel",
        "Dämonen", "Vampire", "Zombies", "Außerirdische", "Roboter", "Maschinen", "Motoren",
        "Raketen", "Sterne", "Planeten", "Galaxien", "Wellen",
    ],
    band_suffixes: &[
        "Band", "Crew", "Truppe", "Bande", "Kollektiv", "Gesellschaft", "Klub", "Union",
        "Allianz", "Orden", "Gilde", "Versammlung", "Projekt", "Erlebnis", "Klang",
    ],
    album_words: &[
        "Reise", "Fahrt", "Abenteuer", "Suche", "Mission", "Odyssee", "Expedition", "Chroniken",
        "Geschichten", "Erzählungen", "Legenden", "Mythen", "Träume", "Visionen", "Reflexionen",
        "Echos", "Schatten", "Lichter", "Farben", "Jahreszeiten", "Elemente", "Dimensionen",
        "Reiche", "Welten", "Universen", "Horizonte", "Grenzen",
    ],
    given_names: &[
        "Lukas", "Anna", "Leon", "Lea", "Finn", "Hannah", "Jonas", "Mia", "Paul", "Sophie",
        "Felix", "Emma", "Maximilian", "Laura", "Elias", "Marie", "Moritz", "Lena", "Tim",
        "Katharina", "Jan", "Julia", "Niklas", "Clara",
    ],
    family_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
        "Schröder", "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann",
    ],
    genres: &[
        "Rock", "Pop", "Elektronisch", "Hip-Hop", "R&B", "Jazz", "Blues", "Country", "Folk",
        "Klassik", "Metal", "Punk", "Indie", "Alternative", "Soul", "Funk", "Disco", "House",
        "Techno", "Trance", "Ambient", "Reggae", "Schlager", "Volksmusik",
    ],
    review_phrases: &[
        "Dieser Track nimmt dich mit auf eine unglaubliche Reise durch Klang und Emotion.",
        "Ein Meisterwerk, das Genres nahtlos mit innovativer Produktion verbindet.",
        "Der Künstler zeigt hier seine unglaubliche Bandbreite und musikalisches Können.",
        "Eine unvergessliche Melodie, die lange nach dem Hören bei dir bleibt.",
        "Mutig und experimentell, dabei tief zugänglich und eingängig.",
        "Pures musikalisches Genie in jeder Note und jedem Beat eingefangen.",
        "Dieser Song definiert neu, was moderne Musik erreichen kann.",
        "Ein Klangerlebnis, das traditionelle Grenzen überschreitet.",
        "Jedes Element perfekt gefertigt für akustische Glückseligkeit.",
        "Die Produktionsqualität hier ist absolut atemberaubend.",
    ],
    lyric_phrases: &[
        "Jeder Schlag erinnert mich an dich, zerreißt mich",
        "In den Millionen Sonnen, die scheinen, bist du der hellste Stern",
        "Im Morgengrauen bist du alles was ich will, egal wie weit",
        "Oh Melanie, ich versuche weiterzumachen",
        "Tanzen im Mondlicht, fühle mich so lebendig",
        "Wir waren jung und frei, nichts konnte uns aufhalten",
        "Nimm meine Hand und lass niemals los",
        "Durch den Sturm finden wir unseren Weg nach Hause",
        "Deine Liebe ist wie ein hell brennendes Feuer",
        "Ich werde ewig warten wenn es so lange dauert",
        "Die Nacht ist jung und wir auch",
        "Verloren in deinen Augen fand ich mein Paradies",
        "Rennend durch den Regen, Träume jagend wieder",
        "Du bist die Melodie in meinem Herzen",
        "Zusammen können wir die Sterne erreichen",
    ],
    single_label: "Single",
};
