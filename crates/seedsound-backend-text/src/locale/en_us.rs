use super::LocalePack;

pub(super) static EN_US: LocalePack = LocalePack {
    code: "en_US",
    name: "English (US)",
    title_prefixes: &[
        "The", "My", "Your", "Our", "Electric", "Neon", "Golden", "Silver", "Midnight", "Crystal",
        "Velvet", "Broken", "Lost", "Eternal", "Sacred", "Secret", "Silent", "Wild", "Burning",
        "Frozen", "Dancing", "Fading", "Rising", "Falling", "Endless",
    ],
    title_nouns: &[
        "Heart", "Dream", "Sky", "Fire", "Rain", "Storm", "Night", "Day", "Star", "Moon", "Sun",
        "Road", "River", "Ocean", "Mountain", "Forest", "City", "Light", "Shadow", "Thunder",
        "Lightning", "Wind", "Flame", "Ice", "Diamond", "Rose", "Wolf", "Eagle", "Dragon",
        "Phoenix", "Angel", "Ghost", "Spirit", "Soul", "Mind", "Time", "Love", "Hope", "Fear",
        "Pain", "Joy", "Tear", "Smile", "Kiss", "Touch", "Voice", "Song",
    ],
    title_suffixes: &[
        "Tonight", "Forever", "Again", "Away", "Inside", "Outside", "Above", "Below", "Beyond",
        "Within", "Without", "Alone", "Together", "Now", "Then", "Here", "There",
    ],
    title_adjectives: &[
        "Beautiful", "Dangerous", "Mysterious", "Powerful", "Gentle", "Fierce", "Calm", "Wild",
        "Free", "Bound", "Lost", "Found", "Broken", "Whole", "Empty", "Full",
    ],
    band_prefixes: &[
        "The", "Electric", "Neon", "Cosmic", "Digital", "Analog", "Atomic", "Nuclear", "Sonic",
        "Super", "Ultra", "Mega", "Hyper", "Cyber", "Techno", "Retro", "Neo",
    ],
    band_nouns: &[
        "Wolves", "Tigers", "Lions", "Eagles", "Hawks", "Ravens", "Crows", "Snakes", "Dragons",
        "Phoenix", "Unicorns", "Knights", "Kings", "Queens", "Princes", "Pirates", "Ninjas",
        "Samurai", "Warriors", "Soldiers", "Rebels", "Outlaws", "Ghosts", "Spirits", "Angels",
        "Demons", "Vampires", "Zombies", "Aliens", "Robots", "Machines", "Engines", "Rockets",
        "Stars", "Planets", "Galaxies", "Circuits", "Waves", "Frequencies", "Echoes", "Shadows",
        "Flames", "Storms",
    ],
    band_suffixes: &[
        "Band", "Crew", "Squad", "Gang", "Collective", "Society", "Club", "Union", "Alliance",
        "Order", "Guild", "Assembly", "Project", "Experience", "Sound",
    ],
    album_words: &[
        "Journey", "Voyage", "Adventure", "Quest", "Mission", "Odyssey", "Expedition",
        "Chronicles", "Tales", "Stories", "Legends", "Myths", "Dreams", "Visions", "Reflections",
        "Echoes", "Shadows", "Lights", "Colors", "Seasons", "Elements", "Dimensions", "Realms",
        "Worlds", "Universes", "Horizons", "Frontiers", "Edges", "Boundaries", "Limits",
        "Infinity", "Eternity", "Moments", "Memories", "Future",
    ],
    given_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
        "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Daniel", "Karen", "Ethan", "Olivia", "Noah", "Emma", "Liam", "Ava",
    ],
    family_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor",
        "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis",
    ],
    genres: &[
        "Rock", "Pop", "Electronic", "Hip-Hop", "R&B", "Jazz", "Blues", "Country", "Folk",
        "Classical", "Metal", "Punk", "Indie", "Alternative", "Soul", "Funk", "Disco", "House",
        "Techno", "Trance", "Ambient", "Reggae", "Latin", "World",
    ],
    review_phrases: &[
        "This track takes you on an incredible journey through sound and emotion.",
        "A masterpiece that blends genres seamlessly with innovative production.",
        "The artist showcases their incredible range and musical prowess here.",
        "An unforgettable melody that will stay with you long after listening.",
        "Bold and experimental while remaining deeply accessible and catchy.",
        "Pure musical genius captured in every note and beat.",
        "This song redefines what modern music can achieve.",
        "A sonic experience that transcends traditional boundaries.",
        "Every element perfectly crafted to create auditory bliss.",
        "The production quality here is absolutely stunning.",
    ],
    lyric_phrases: &[
        "Every beat reminds me of you, tearing me apart",
        "In the million suns that shine, you're the brightest star",
        "At the break of dawn, you're all I want, no matter how far",
        "Oh Melanie, I try to move on",
        "Dancing in the moonlight, feeling so alive",
        "We were young and free, nothing could stop us now",
        "Take my hand and never let go",
        "Through the storm we'll find our way home",
        "Your love is like a fire burning bright",
        "I'll wait forever if it takes that long",
        "The night is young and so are we",
        "Lost in your eyes, I found my paradise",
        "Running through the rain, chasing dreams again",
        "You're the melody in my heart",
        "Together we can reach the stars above",
    ],
    single_label: "Single",
};
