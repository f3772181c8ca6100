//! The natural-ability taxonomy: forty entries in three categories.
//!
//! Members self-report these; opportunities reference them by key the same
//! way they reference gift keys. The two key spaces are disjoint so both can
//! share one required/preferred list on an opportunity.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AbilityCategory {
    Arts,
    Practical,
    Sports,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NaturalAbility {
    /// Stable identifier used in opportunity records and member profiles.
    pub key: &'static str,
    pub name: &'static str,
    pub category: AbilityCategory,
    pub description: &'static str,
    /// Illustrative ways this ability is used in ministry, shown in the
    /// assessment UI next to the checkbox.
    pub ministry_applications: &'static [&'static str],
}

pub const NATURAL_ABILITIES: &[NaturalAbility] = &[
    // arts
    NaturalAbility {
        key: "MUSIC_VOCAL",
        name: "Singing",
        category: AbilityCategory::Arts,
        description: "Leading or supporting vocally in musical settings.",
        ministry_applications: &["Worship team vocals", "Choir", "Nursing-home singalongs"],
    },
    NaturalAbility {
        key: "MUSIC_INSTRUMENTAL",
        name: "Playing an Instrument",
        category: AbilityCategory::Arts,
        description: "Competence on one or more musical instruments.",
        ministry_applications: &["Worship band", "Youth-group music", "Special-event accompaniment"],
    },
    NaturalAbility {
        key: "DRAMA",
        name: "Drama & Acting",
        category: AbilityCategory::Arts,
        description: "Performing or directing sketches and stage productions.",
        ministry_applications: &["Christmas and Easter productions", "Children's ministry skits"],
    },
    NaturalAbility {
        key: "VISUAL_ARTS",
        name: "Visual Arts",
        category: AbilityCategory::Arts,
        description: "Drawing, painting, sculpting or other fine arts.",
        ministry_applications: &["Stage and lobby design", "Art classes for kids", "Banner painting"],
    },
    NaturalAbility {
        key: "DANCE",
        name: "Dance",
        category: AbilityCategory::Arts,
        description: "Choreographing or performing dance.",
        ministry_applications: &["Worship dance team", "Kids' movement classes"],
    },
    NaturalAbility {
        key: "CREATIVE_WRITING",
        name: "Writing",
        category: AbilityCategory::Arts,
        description: "Writing prose, poetry or curriculum that communicates well.",
        ministry_applications: &["Newsletter articles", "Small-group study guides", "Devotionals"],
    },
    NaturalAbility {
        key: "PHOTOGRAPHY",
        name: "Photography",
        category: AbilityCategory::Arts,
        description: "Capturing events and people well on camera.",
        ministry_applications: &["Event photography", "Website and social-media imagery"],
    },
    NaturalAbility {
        key: "VIDEO_PRODUCTION",
        name: "Video Production",
        category: AbilityCategory::Arts,
        description: "Filming and editing video content.",
        ministry_applications: &["Sermon recording", "Testimony videos", "Livestream operation"],
    },
    NaturalAbility {
        key: "GRAPHIC_DESIGN",
        name: "Graphic Design",
        category: AbilityCategory::Arts,
        description: "Designing print and digital media.",
        ministry_applications: &["Bulletins and flyers", "Sermon-series branding", "Slides"],
    },
    NaturalAbility {
        key: "AUDIO_TECH",
        name: "Audio Engineering",
        category: AbilityCategory::Arts,
        description: "Running sound boards and audio equipment.",
        ministry_applications: &["Sunday sound board", "Podcast editing", "Event PA setup"],
    },
    NaturalAbility {
        key: "CRAFTS",
        name: "Crafts",
        category: AbilityCategory::Arts,
        description: "Handcrafts of all kinds, and teaching them.",
        ministry_applications: &["VBS craft stations", "Craft-fair fundraisers"],
    },
    NaturalAbility {
        key: "STORYTELLING",
        name: "Storytelling",
        category: AbilityCategory::Arts,
        description: "Holding an audience while telling a story aloud.",
        ministry_applications: &["Children's story time", "Testimony sharing", "Camp campfires"],
    },
    // practical skills
    NaturalAbility {
        key: "CARPENTRY",
        name: "Carpentry",
        category: AbilityCategory::Practical,
        description: "Building and repairing with wood.",
        ministry_applications: &["Stage-set construction", "Home-repair outreach", "Mission builds"],
    },
    NaturalAbility {
        key: "COOKING",
        name: "Cooking",
        category: AbilityCategory::Practical,
        description: "Preparing meals, from family scale to crowd scale.",
        ministry_applications: &["Fellowship meals", "Meal trains for new parents", "Soup kitchen"],
    },
    NaturalAbility {
        key: "SEWING",
        name: "Sewing",
        category: AbilityCategory::Practical,
        description: "Sewing, quilting and garment repair.",
        ministry_applications: &["Costumes for productions", "Quilts for shut-ins"],
    },
    NaturalAbility {
        key: "GARDENING",
        name: "Gardening",
        category: AbilityCategory::Practical,
        description: "Growing things and keeping grounds attractive.",
        ministry_applications: &["Community garden", "Church grounds keeping"],
    },
    NaturalAbility {
        key: "AUTO_MECHANICS",
        name: "Auto Mechanics",
        category: AbilityCategory::Practical,
        description: "Diagnosing and repairing vehicles.",
        ministry_applications: &["Single-parent car-care days", "Van fleet maintenance"],
    },
    NaturalAbility {
        key: "ELECTRICAL",
        name: "Electrical Work",
        category: AbilityCategory::Practical,
        description: "Wiring and electrical repair.",
        ministry_applications: &["Building maintenance", "Home-repair outreach"],
    },
    NaturalAbility {
        key: "ACCOUNTING",
        name: "Accounting & Finance",
        category: AbilityCategory::Practical,
        description: "Bookkeeping, budgeting and financial reporting.",
        ministry_applications: &["Finance team", "Budget counseling classes"],
    },
    NaturalAbility {
        key: "ADMINISTRATION",
        name: "Administration",
        category: AbilityCategory::Practical,
        description: "Organizing information, schedules and logistics.",
        ministry_applications: &["Office volunteering", "Event registration", "Volunteer scheduling"],
    },
    NaturalAbility {
        key: "COMPUTERS",
        name: "Computers & IT",
        category: AbilityCategory::Practical,
        description: "Keeping computers, networks and software running.",
        ministry_applications: &["Website upkeep", "Office IT support", "Database administration"],
    },
    NaturalAbility {
        key: "TUTORING",
        name: "Tutoring",
        category: AbilityCategory::Practical,
        description: "Helping learners one-on-one with school subjects.",
        ministry_applications: &["After-school tutoring", "ESL classes", "Homework club"],
    },
    NaturalAbility {
        key: "CHILDCARE",
        name: "Childcare",
        category: AbilityCategory::Practical,
        description: "Caring for infants and young children.",
        ministry_applications: &["Nursery rotation", "Parents' night out", "VBS helpers"],
    },
    NaturalAbility {
        key: "FIRST_AID",
        name: "Medical & First Aid",
        category: AbilityCategory::Practical,
        description: "Trained medical or first-aid care.",
        ministry_applications: &["Event first-aid station", "Medical mission trips"],
    },
    NaturalAbility {
        key: "COUNSELING",
        name: "Listening & Counseling",
        category: AbilityCategory::Practical,
        description: "Listening well and walking with people through hard seasons.",
        ministry_applications: &["Care ministry", "Grief support groups", "Prayer team"],
    },
    NaturalAbility {
        key: "DRIVING",
        name: "Driving",
        category: AbilityCategory::Practical,
        description: "Comfortable driving vans or buses, licensed as needed.",
        ministry_applications: &["Senior transport", "Youth-trip driving"],
    },
    NaturalAbility {
        key: "EVENT_PLANNING",
        name: "Event Planning",
        category: AbilityCategory::Practical,
        description: "Planning and running events end to end.",
        ministry_applications: &["Conference logistics", "Wedding coordination", "Outreach events"],
    },
    NaturalAbility {
        key: "HOSPITALITY_HOSTING",
        name: "Hosting",
        category: AbilityCategory::Practical,
        description: "Opening a home or welcoming guests so they feel at ease.",
        ministry_applications: &["Small-group hosting", "Greeter team", "Newcomer dinners"],
    },
    NaturalAbility {
        key: "PAINTING_DECORATING",
        name: "Painting & Decorating",
        category: AbilityCategory::Practical,
        description: "Interior painting and room decoration.",
        ministry_applications: &["Facility refresh days", "Event decoration"],
    },
    NaturalAbility {
        key: "LANGUAGES",
        name: "Languages & Translation",
        category: AbilityCategory::Practical,
        description: "Fluency in languages beyond English.",
        ministry_applications: &["Service interpretation", "Refugee-welcome ministry"],
    },
    // sports
    NaturalAbility {
        key: "BASKETBALL",
        name: "Basketball",
        category: AbilityCategory::Sports,
        description: "Playing or coaching basketball.",
        ministry_applications: &["Church league", "Open-gym outreach nights"],
    },
    NaturalAbility {
        key: "SOCCER",
        name: "Soccer",
        category: AbilityCategory::Sports,
        description: "Playing or coaching soccer.",
        ministry_applications: &["Kids' soccer camp", "Community league teams"],
    },
    NaturalAbility {
        key: "SOFTBALL",
        name: "Softball & Baseball",
        category: AbilityCategory::Sports,
        description: "Playing or coaching softball or baseball.",
        ministry_applications: &["Church softball league", "Youth clinics"],
    },
    NaturalAbility {
        key: "VOLLEYBALL",
        name: "Volleyball",
        category: AbilityCategory::Sports,
        description: "Playing or coaching volleyball.",
        ministry_applications: &["Rec-night volleyball", "Beach outreach tournaments"],
    },
    NaturalAbility {
        key: "RUNNING",
        name: "Running",
        category: AbilityCategory::Sports,
        description: "Distance running and training others for it.",
        ministry_applications: &["Charity-run teams", "Couch-to-5k groups"],
    },
    NaturalAbility {
        key: "HIKING",
        name: "Hiking & Outdoors",
        category: AbilityCategory::Sports,
        description: "Leading groups safely outdoors.",
        ministry_applications: &["Men's/women's wilderness trips", "Youth backpacking"],
    },
    NaturalAbility {
        key: "FISHING",
        name: "Fishing",
        category: AbilityCategory::Sports,
        description: "Fishing and teaching others to fish.",
        ministry_applications: &["Father-kid fishing days", "Men's retreat activities"],
    },
    NaturalAbility {
        key: "MARTIAL_ARTS",
        name: "Martial Arts",
        category: AbilityCategory::Sports,
        description: "Training or instructing in a martial art.",
        ministry_applications: &["Self-defense classes", "Discipline-focused youth programs"],
    },
    NaturalAbility {
        key: "SWIMMING",
        name: "Swimming",
        category: AbilityCategory::Sports,
        description: "Strong swimming, lifeguarding where certified.",
        ministry_applications: &["Camp waterfront", "Swim lessons for kids"],
    },
    NaturalAbility {
        key: "FITNESS_TRAINING",
        name: "Fitness Training",
        category: AbilityCategory::Sports,
        description: "Leading exercise classes or personal training.",
        ministry_applications: &["Fitness classes", "Senior mobility sessions"],
    },
];
